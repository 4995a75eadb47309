// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Linux/Android tiers.
//!
//! - [`GetrandomTier`]: descriptor-less `getrandom()` syscall (Linux 3.17+)
//! - [`DeviceTier`]: `/dev/urandom`, verified before it is trusted
//! - [`SysctlTier`]: `_sysctl(RANDOM_UUID)`, usable in a chroot or with no
//!   free descriptors (x86/x86_64 Linux only, removed in Linux 5.5)

mod device;
mod syscall;

#[cfg(all(target_os = "linux", any(target_arch = "x86_64", target_arch = "x86")))]
mod sysctl;

use core::sync::atomic::AtomicBool;

use crate::fallback::Fallback;

pub use device::{DeviceTier, URANDOM_PATH};
pub use syscall::GetrandomTier;

#[cfg(all(target_os = "linux", any(target_arch = "x86_64", target_arch = "x86")))]
pub use sysctl::SysctlTier;

#[cfg(all(test, target_os = "linux", any(target_arch = "x86_64", target_arch = "x86")))]
pub(crate) use sysctl::{UUID_LEN, fill_with as sysctl_fill_with};

#[cfg(test)]
pub(crate) use device::read_with as device_read_with;
#[cfg(test)]
pub(crate) use syscall::fill_with as getrandom_fill_with;

#[cfg(all(target_os = "linux", any(target_arch = "x86_64", target_arch = "x86")))]
type ControlTier = SysctlTier;

#[cfg(not(all(target_os = "linux", any(target_arch = "x86_64", target_arch = "x86"))))]
type ControlTier = crate::fallback::NoTier;

/// Set once `getrandom()` has returned `ENOSYS`. Never cleared.
static GETRANDOM_UNAVAILABLE: AtomicBool = AtomicBool::new(false);

pub(crate) type LayeredSource = Fallback<'static, GetrandomTier, DeviceTier<'static>, ControlTier>;

/// The process-wide chain used by [`SystemEntropySource`](crate::SystemEntropySource).
pub(crate) fn layered() -> LayeredSource {
    #[cfg(all(target_os = "linux", any(target_arch = "x86_64", target_arch = "x86")))]
    let control = Some(SysctlTier);

    #[cfg(not(all(target_os = "linux", any(target_arch = "x86_64", target_arch = "x86"))))]
    let control = None;

    Fallback::new(
        GetrandomTier,
        DeviceTier::urandom(),
        control,
        &GETRANDOM_UNAVAILABLE,
    )
}

/// Current thread's `errno`.
pub(crate) fn errno() -> i32 {
    #[cfg(target_os = "linux")]
    {
        // SAFETY: always returns a valid pointer to the thread-local errno.
        unsafe { *libc::__errno_location() }
    }

    #[cfg(target_os = "android")]
    {
        // SAFETY: always returns a valid pointer to the thread-local errno.
        unsafe { *libc::__errno() }
    }
}
