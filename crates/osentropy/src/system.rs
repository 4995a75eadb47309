// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Build-time selection of the entropy strategy.

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Entropy strategy compiled into this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// One vetted platform CSPRNG call (`getrandom` crate).
    NativeApi,
    /// `getrandom()` syscall → `/dev/urandom` → `sysctl`, first success wins.
    Layered,
    /// libc `arc4random_buf()`.
    LibraryCall,
}

impl SourceKind {
    /// Returns the strategy selected for the current target.
    pub const fn current() -> Self {
        #[cfg(any(target_os = "linux", target_os = "android"))]
        {
            Self::Layered
        }

        #[cfg(any(
            target_os = "macos",
            target_os = "ios",
            target_os = "freebsd",
            target_os = "openbsd",
            target_os = "netbsd",
            target_os = "dragonfly"
        ))]
        {
            Self::LibraryCall
        }

        #[cfg(not(any(
            target_os = "linux",
            target_os = "android",
            target_os = "macos",
            target_os = "ios",
            target_os = "freebsd",
            target_os = "openbsd",
            target_os = "netbsd",
            target_os = "dragonfly"
        )))]
        {
            Self::NativeApi
        }
    }

    /// Short name of the strategy.
    pub const fn name(self) -> &'static str {
        match self {
            Self::NativeApi => "native-api",
            Self::Layered => "syscall-device-sysctl",
            Self::LibraryCall => "arc4random",
        }
    }
}

/// System-provided entropy, dispatched to [`SourceKind::current()`].
///
/// Empty requests succeed without touching the OS.
pub struct SystemEntropySource {}

impl SystemEntropySource {
    /// Returns the strategy this source dispatches to.
    pub const fn kind(&self) -> SourceKind {
        SourceKind::current()
    }
}

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        if dest.is_empty() {
            return Ok(());
        }

        #[cfg(any(target_os = "linux", target_os = "android"))]
        {
            crate::linux::layered().fill_bytes(dest)
        }

        #[cfg(any(
            target_os = "macos",
            target_os = "ios",
            target_os = "freebsd",
            target_os = "openbsd",
            target_os = "netbsd",
            target_os = "dragonfly"
        ))]
        {
            crate::arc4random::Arc4RandomSource {}.fill_bytes(dest)
        }

        #[cfg(not(any(
            target_os = "linux",
            target_os = "android",
            target_os = "macos",
            target_os = "ios",
            target_os = "freebsd",
            target_os = "openbsd",
            target_os = "netbsd",
            target_os = "dragonfly"
        )))]
        {
            crate::native::NativeSource {}.fill_bytes(dest)
        }
    }
}

/// Whether the fast syscall tier is still tried by [`SystemEntropySource`].
///
/// Becomes `false` for the rest of the process once the kernel reports the
/// `getrandom()` syscall as not implemented. Always `false` on platforms
/// without a layered interface.
pub fn fast_tier_available() -> bool {
    #[cfg(any(target_os = "linux", target_os = "android"))]
    {
        crate::linux::layered().fast_tier_available()
    }

    #[cfg(not(any(target_os = "linux", target_os = "android")))]
    {
        false
    }
}
