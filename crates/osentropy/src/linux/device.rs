// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Random character device reader.
//!
//! The device is opened, verified, read and closed within a single call.
//! Verification happens before the first byte is read:
//! 1. `fstat()` must report a character device
//! 2. `ioctl(RNDGETENTCNT)` must succeed, which only the kernel's random
//!    driver does
//!
//! A regular file or an unrelated device planted at the path therefore fails
//! the tier without writing anything to the destination.

use core::ffi::{CStr, c_int};
use core::mem::MaybeUninit;

use crate::error::TierError;
use crate::traits::Tier;

use super::errno;

/// Path of the non-blocking kernel random device.
pub const URANDOM_PATH: &CStr = c"/dev/urandom";

/// `_IOR('R', 0x00, int)`
#[cfg(any(
    target_arch = "mips",
    target_arch = "mips64",
    target_arch = "powerpc",
    target_arch = "powerpc64",
    target_arch = "sparc",
    target_arch = "sparc64"
))]
const RNDGETENTCNT: u32 = 0x4004_5200;

/// `_IOR('R', 0x00, int)`
#[cfg(not(any(
    target_arch = "mips",
    target_arch = "mips64",
    target_arch = "powerpc",
    target_arch = "powerpc64",
    target_arch = "sparc",
    target_arch = "sparc64"
)))]
const RNDGETENTCNT: u32 = 0x8004_5200;

/// Reads from a random character device.
#[derive(Debug, Clone, Copy)]
pub struct DeviceTier<'a> {
    path: &'a CStr,
}

impl DeviceTier<'static> {
    /// Tier over [`URANDOM_PATH`].
    pub const fn urandom() -> Self {
        Self { path: URANDOM_PATH }
    }
}

impl<'a> DeviceTier<'a> {
    /// Tier over an arbitrary device path.
    pub const fn new(path: &'a CStr) -> Self {
        Self { path }
    }

    /// Path this tier opens.
    pub fn path(&self) -> &'a CStr {
        self.path
    }
}

impl Tier for DeviceTier<'_> {
    fn name(&self) -> &'static str {
        "random device"
    }

    fn fill(&self, dest: &mut [u8]) -> Result<(), TierError> {
        let device = Device::open(self.path)?;

        device.verify()?;
        device.read_exact(dest)
    }
}

/// Open descriptor, closed on drop.
struct Device {
    fd: c_int,
}

impl Device {
    fn open(path: &CStr) -> Result<Self, TierError> {
        // O_NOFOLLOW: refuse a symlink planted at the path.
        // O_CLOEXEC: never leak the descriptor across exec.
        let flags = libc::O_RDONLY | libc::O_NOFOLLOW | libc::O_CLOEXEC;

        loop {
            // SAFETY: `path` is a valid NUL-terminated string.
            let fd = unsafe { libc::open(path.as_ptr(), flags) };

            if fd >= 0 {
                return Ok(Self { fd });
            }

            match errno() {
                libc::EINTR => continue,
                err => return Err(TierError::Open(err)),
            }
        }
    }

    fn verify(&self) -> Result<(), TierError> {
        let mut st = MaybeUninit::<libc::stat>::uninit();

        // SAFETY: `st` is valid for writes of one `stat`.
        if unsafe { libc::fstat(self.fd, st.as_mut_ptr()) } == -1 {
            return Err(TierError::Stat(errno()));
        }

        // SAFETY: fstat succeeded, so `st` is initialized.
        let st = unsafe { st.assume_init() };

        // `st_mode` is wider than `mode_t` on 32-bit Android.
        if (st.st_mode as libc::mode_t) & libc::S_IFMT != libc::S_IFCHR {
            return Err(TierError::NotCharDevice);
        }

        let mut count: c_int = 0;

        // SAFETY: RNDGETENTCNT writes one int through the pointer.
        let ret = unsafe { libc::ioctl(self.fd, RNDGETENTCNT as _, &mut count as *mut c_int) };

        if ret == -1 {
            return Err(TierError::Probe(errno()));
        }

        Ok(())
    }

    fn read_exact(&self, dest: &mut [u8]) -> Result<(), TierError> {
        read_with(&mut |rest: &mut [u8]| self.read(rest), dest)
    }

    fn read(&self, buf: &mut [u8]) -> Result<usize, i32> {
        // SAFETY: `buf` is valid for `buf.len()` writable bytes.
        let ret = unsafe { libc::read(self.fd, buf.as_mut_ptr().cast(), buf.len()) };

        if ret < 0 {
            Err(errno())
        } else {
            Ok(ret as usize)
        }
    }
}

/// Drives `read` over the unfilled tail of `dest` until it is full.
///
/// Short reads advance the cursor, `EINTR` and `EAGAIN` retry the same range.
pub(crate) fn read_with(
    read: &mut dyn FnMut(&mut [u8]) -> Result<usize, i32>,
    dest: &mut [u8],
) -> Result<(), TierError> {
    let mut filled = 0;

    while filled < dest.len() {
        match read(&mut dest[filled..]) {
            Ok(0) => return Err(TierError::Exhausted),
            Ok(n) => filled += n.min(dest.len() - filled),
            Err(libc::EINTR | libc::EAGAIN) => continue,
            Err(err) => return Err(TierError::Read(err)),
        }
    }

    Ok(())
}

impl Drop for Device {
    fn drop(&mut self) {
        // SAFETY: `fd` was returned by open() and is closed exactly once.
        unsafe { libc::close(self.fd) };
    }
}
