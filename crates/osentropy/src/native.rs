// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use getrandom::Error as GetRandomError;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Platform-vetted CSPRNG, called once per request.
///
/// Uses the OS-level CSPRNG via `getrandom`:
/// - Windows: `ProcessPrng` / `BCryptGenRandom`
/// - WASI: `random_get`
/// - Web: `crypto.getRandomValues`
///
/// The platform API is trusted to retry internally, so there are no tiers
/// and no fallback here.
pub struct NativeSource {}

impl NativeSource {
    pub(crate) fn fill_bytes_with(
        fill_fn: &dyn Fn(&mut [u8]) -> Result<(), GetRandomError>,
        dest: &mut [u8],
    ) -> Result<(), EntropyError> {
        match fill_fn(dest) {
            Ok(()) => Ok(()),
            Err(err) => {
                dest.fill(0);
                log::warn!("platform CSPRNG failed: {err}");
                Err(EntropyError::EntropyNotAvailable)
            }
        }
    }
}

impl EntropySource for NativeSource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        Self::fill_bytes_with(&getrandom::fill, dest)
    }
}
