// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::{EntropyError, TierError};

/// Trait for cryptographically secure random byte sources.
///
/// Implementations must provide randomness suitable for security-sensitive
/// values (salts, keys, nonces). Backed by kernel or platform CSPRNGs.
pub trait EntropySource {
    /// Fills the destination buffer with cryptographically secure random bytes.
    ///
    /// On success every byte of `dest` has been overwritten by one source,
    /// end to end.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if no source could
    /// service the request.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

/// One candidate source in a fallback chain.
///
/// A tier either fills the whole buffer or fails. Transient conditions
/// (`EINTR`, `EAGAIN`, short reads) are handled inside `fill` and never
/// reported.
pub trait Tier {
    /// Short human-readable name, used in log records.
    fn name(&self) -> &'static str;

    /// Fills all of `dest` from this source.
    ///
    /// # Errors
    ///
    /// Returns the [`TierError`] that made this tier give up. Bytes already
    /// written to `dest` before the failure are left in place.
    fn fill(&self, dest: &mut [u8]) -> Result<(), TierError>;
}

impl<T: Tier + ?Sized> Tier for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn fill(&self, dest: &mut [u8]) -> Result<(), TierError> {
        (**self).fill(dest)
    }
}
