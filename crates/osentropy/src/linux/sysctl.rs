// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `_sysctl(CTL_KERN, KERN_RANDOM, RANDOM_UUID)` reader.
//!
//! The binary sysctl interface hands out a fresh random UUID per query
//! without needing a file descriptor, so it still works in a chroot or after
//! descriptor exhaustion. It is called through `syscall(SYS__sysctl)`
//! because some C libraries already dropped the `sysctl()` wrapper.
//!
//! Each query yields [`UUID_LEN`] bytes, six bits of which are fixed by the
//! UUID version and variant fields. This tier is a last resort.

use core::ffi::{c_int, c_ulong, c_void};
use core::ptr;

use crate::error::TierError;
use crate::traits::Tier;

use super::errno;

const CTL_KERN: c_int = 1;
const KERN_RANDOM: c_int = 40;
const RANDOM_UUID: c_int = 6;

/// Bytes returned by one `RANDOM_UUID` query.
pub(crate) const UUID_LEN: usize = 16;

/// `struct __sysctl_args` from `<linux/sysctl.h>`.
#[repr(C)]
struct SysctlArgs {
    name: *mut c_int,
    nlen: c_int,
    oldval: *mut c_void,
    oldlenp: *mut usize,
    newval: *mut c_void,
    newlen: usize,
    unused: [c_ulong; 4],
}

/// Legacy kernel control interface, 16 bytes per query.
///
/// Any failed query fails the whole tier.
#[derive(Debug, Clone, Copy, Default)]
pub struct SysctlTier;

impl Tier for SysctlTier {
    fn name(&self) -> &'static str {
        "sysctl(RANDOM_UUID)"
    }

    fn fill(&self, dest: &mut [u8]) -> Result<(), TierError> {
        fill_with(&mut query_uuid, dest)
    }
}

/// Drives `query` over `dest` one [`UUID_LEN`] chunk at a time.
///
/// Each call gets at most one chunk; a reply longer than that is clamped.
pub(crate) fn fill_with(
    query: &mut dyn FnMut(&mut [u8]) -> Result<usize, TierError>,
    dest: &mut [u8],
) -> Result<(), TierError> {
    let mut filled = 0;

    while filled < dest.len() {
        let wanted = (dest.len() - filled).min(UUID_LEN);
        let got = query(&mut dest[filled..filled + wanted])?;

        if got == 0 {
            return Err(TierError::Exhausted);
        }

        filled += got.min(wanted);
    }

    Ok(())
}

fn query_uuid(chunk: &mut [u8]) -> Result<usize, TierError> {
    let mut mib = [CTL_KERN, KERN_RANDOM, RANDOM_UUID];
    let mut len = chunk.len();

    let mut args = SysctlArgs {
        name: mib.as_mut_ptr(),
        nlen: mib.len() as c_int,
        oldval: chunk.as_mut_ptr().cast(),
        oldlenp: &mut len,
        newval: ptr::null_mut(),
        newlen: 0,
        unused: [0; 4],
    };

    // SAFETY: `args` points at live buffers; the kernel writes at most
    // `len` bytes to `oldval` and updates `len`.
    let ret = unsafe { libc::syscall(libc::SYS__sysctl, &mut args as *mut SysctlArgs) };

    if ret != 0 {
        return Err(match errno() {
            libc::ENOSYS => TierError::Unsupported,
            err => TierError::Syscall(err),
        });
    }

    Ok(len)
}
