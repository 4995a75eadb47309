// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// Largest request serviced by a single call.
///
/// Matches `GETENTROPY_MAX`. Callers that need more must chunk.
pub const MAX_REQUEST_LEN: usize = 256;

/// Fills `buf[..n]` with random bytes from the best available source.
///
/// Returns `true` iff all `n` bytes were written by one qualifying source.
/// `buf[n..]` is never touched. On `false` the range `buf[..n]` is zeroed and
/// the caller must treat the surrounding operation as failed.
///
/// # Panics
///
/// Panics if `n > MAX_REQUEST_LEN` or `n > buf.len()`. Both are caller bugs,
/// not runtime conditions.
///
/// # Example
///
/// ```rust
/// let mut buf = [0u8; 64];
/// assert!(osentropy::fill_random(&mut buf, 16));
/// assert!(buf[16..].iter().all(|b| *b == 0));
/// ```
pub fn fill_random(buf: &mut [u8], n: usize) -> bool {
    assert!(
        n <= MAX_REQUEST_LEN,
        "requested {n} bytes, at most {MAX_REQUEST_LEN} per call"
    );
    assert!(n <= buf.len(), "requested {n} bytes from a {}-byte buffer", buf.len());

    try_fill(&mut buf[..n]).is_ok()
}

/// Fills all of `dest` with random bytes from the best available source.
///
/// # Errors
///
/// Returns [`EntropyError::EntropyNotAvailable`] when every source on this
/// platform failed. `dest` is zeroed in that case.
///
/// # Panics
///
/// Panics if `dest.len() > MAX_REQUEST_LEN`.
pub fn try_fill(dest: &mut [u8]) -> Result<(), EntropyError> {
    assert!(
        dest.len() <= MAX_REQUEST_LEN,
        "requested {} bytes, at most {MAX_REQUEST_LEN} per call",
        dest.len()
    );

    SystemEntropySource {}.fill_bytes(dest)
}
