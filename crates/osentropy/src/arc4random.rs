// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// libc `arc4random_buf()` on Apple platforms and the BSDs.
///
/// The kernel-seeded library generator cannot fail and never blocks after
/// boot, so this source always succeeds.
pub struct Arc4RandomSource {}

impl EntropySource for Arc4RandomSource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        // SAFETY: `dest` is a valid, writable region of `dest.len()` bytes.
        unsafe { libc::arc4random_buf(dest.as_mut_ptr().cast(), dest.len()) };

        Ok(())
    }
}
