// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::TierError;
use crate::traits::Tier;

use super::errno;

/// Descriptor-less `getrandom(2)` syscall.
///
/// Issued through `syscall(SYS_getrandom)` rather than the libc wrapper, so
/// old C libraries without the wrapper still reach the kernel. Reports
/// [`TierError::Unsupported`] on `ENOSYS`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetrandomTier;

impl Tier for GetrandomTier {
    fn name(&self) -> &'static str {
        "getrandom(2)"
    }

    fn fill(&self, dest: &mut [u8]) -> Result<(), TierError> {
        fill_with(&mut sys_getrandom, dest)
    }
}

fn sys_getrandom(buf: &mut [u8]) -> Result<usize, i32> {
    // SAFETY: `buf` is valid for `buf.len()` writable bytes.
    let ret = unsafe { libc::syscall(libc::SYS_getrandom, buf.as_mut_ptr(), buf.len(), 0) };

    if ret < 0 {
        Err(errno())
    } else {
        Ok(ret as usize)
    }
}

/// Drives `getrandom` over the unfilled tail of `dest` until it is full.
///
/// Short reads advance the cursor, `EINTR` retries the same range.
pub(crate) fn fill_with(
    getrandom: &mut dyn FnMut(&mut [u8]) -> Result<usize, i32>,
    dest: &mut [u8],
) -> Result<(), TierError> {
    let mut filled = 0;

    while filled < dest.len() {
        match getrandom(&mut dest[filled..]) {
            Ok(0) => return Err(TierError::Exhausted),
            Ok(n) => filled += n.min(dest.len() - filled),
            Err(libc::EINTR) => continue,
            Err(libc::ENOSYS) => return Err(TierError::Unsupported),
            Err(errno) => return Err(TierError::Syscall(errno)),
        }
    }

    Ok(())
}
