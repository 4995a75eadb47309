// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # osentropy
//!
//! Best-effort cryptographically secure random bytes from the operating system.
//!
//! `osentropy` does not implement a CSPRNG. It selects the strongest entropy
//! source the host kernel or platform exposes and reads from exactly one of
//! them per call, falling back to weaker (but still kernel-backed) sources
//! when the strongest one is unavailable.
//!
//! ## Core Types
//!
//! - [`fill_random`] / [`try_fill`]: Entry points, at most [`MAX_REQUEST_LEN`] bytes per call
//! - [`generate_salt`]: Fixed-size salt for password hashing
//! - [`SystemEntropySource`]: The build-time selected strategy ([`SourceKind`])
//! - [`Fallback`]: Layered chain of [`Tier`]s with a sticky "fast tier unavailable" flag
//!
//! ## Platform Support
//!
//! - Linux/Android: `getrandom()` syscall → `/dev/urandom` → `sysctl(RANDOM_UUID)`
//! - macOS/iOS/BSDs: `arc4random_buf()`
//! - Windows and everything else: platform CSPRNG via `getrandom`
//!
//! ## Example
//!
//! ```rust
//! use osentropy::{fill_random, generate_salt};
//!
//! let mut buf = [0u8; 32];
//! assert!(fill_random(&mut buf, 32));
//!
//! let salt = generate_salt::<16>().expect("Failed to generate salt");
//! assert_eq!(salt.len(), 16);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod error;
mod fallback;
mod fill;
mod native;
mod salt;
mod support;
mod system;
mod traits;

#[cfg(any(target_os = "linux", target_os = "android"))]
mod linux;

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly"
))]
mod arc4random;

pub use error::{EntropyError, TierError};
pub use fallback::{Fallback, NoTier};
pub use fill::{MAX_REQUEST_LEN, fill_random, try_fill};
pub use native::NativeSource;
pub use salt::{DEFAULT_SALT_LEN, generate_salt, generate_salt_from};
pub use system::{SourceKind, SystemEntropySource, fast_tier_available};
pub use traits::{EntropySource, Tier};

#[cfg(any(target_os = "linux", target_os = "android"))]
pub use linux::{DeviceTier, GetrandomTier, URANDOM_PATH};

#[cfg(all(target_os = "linux", any(target_arch = "x86_64", target_arch = "x86")))]
pub use linux::SysctlTier;

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly"
))]
pub use arc4random::Arc4RandomSource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
