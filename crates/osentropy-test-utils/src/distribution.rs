// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Chi-squared critical value for 255 degrees of freedom at p = 0.0001.
///
/// A uniform source exceeds it once in ten thousand runs.
pub const CHI_SQUARED_CRITICAL_DF255_P0001: f64 = 347.7;

/// Occurrence count of every byte value.
#[derive(Debug, Clone)]
pub struct ByteHistogram {
    counts: [u64; 256],
    total: u64,
}

impl ByteHistogram {
    /// Creates an empty histogram.
    pub fn new() -> Self {
        Self {
            counts: [0; 256],
            total: 0,
        }
    }

    /// Counts every byte of `bytes`.
    pub fn record(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.counts[byte as usize] += 1;
        }
        self.total += bytes.len() as u64;
    }

    /// Occurrences of `value`.
    pub fn count(&self, value: u8) -> u64 {
        self.counts[value as usize]
    }

    /// Number of bytes recorded.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Raw counts, indexed by byte value.
    pub fn counts(&self) -> &[u64; 256] {
        &self.counts
    }
}

impl Default for ByteHistogram {
    fn default() -> Self {
        Self::new()
    }
}

/// Pearson chi-squared statistic of `histogram` against a uniform distribution.
///
/// Returns `0.0` for an empty histogram.
pub fn chi_squared_uniform(histogram: &ByteHistogram) -> f64 {
    if histogram.total() == 0 {
        return 0.0;
    }

    let expected = histogram.total() as f64 / 256.0;

    histogram
        .counts()
        .iter()
        .map(|&count| {
            let diff = count as f64 - expected;
            diff * diff / expected
        })
        .sum()
}
