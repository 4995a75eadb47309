// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Salt generation for password hashing.
//!
//! A salt is one fixed-size request per hash. A failed fill is an error the
//! hashing caller must propagate: hashing with an under-filled or stale salt
//! is never acceptable.

use crate::error::EntropyError;
use crate::fill::MAX_REQUEST_LEN;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// Salt size used by bcrypt.
pub const DEFAULT_SALT_LEN: usize = 16;

/// Generates an `N`-byte salt from the system entropy source.
///
/// `N` is limited to [`MAX_REQUEST_LEN`] at compile time.
///
/// # Errors
///
/// Returns [`EntropyError::EntropyNotAvailable`] if no source could fill it.
///
/// # Example
///
/// ```rust
/// use osentropy::{DEFAULT_SALT_LEN, generate_salt};
///
/// let salt = generate_salt::<DEFAULT_SALT_LEN>().expect("Failed to generate_salt()");
/// assert_eq!(salt.len(), 16);
/// ```
pub fn generate_salt<const N: usize>() -> Result<[u8; N], EntropyError> {
    generate_salt_from(&SystemEntropySource {})
}

/// Generates an `N`-byte salt from `source`.
///
/// # Errors
///
/// Propagates the source's error. No partially filled salt is ever returned.
pub fn generate_salt_from<E: EntropySource, const N: usize>(
    source: &E,
) -> Result<[u8; N], EntropyError> {
    const { assert!(N <= MAX_REQUEST_LEN, "salt exceeds MAX_REQUEST_LEN") };

    let mut salt = [0u8; N];
    source.fill_bytes(&mut salt)?;

    Ok(salt)
}
