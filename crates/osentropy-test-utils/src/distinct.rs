// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::HashSet;

/// Returns `true` if no two samples are equal.
pub fn all_distinct<const N: usize>(samples: &[[u8; N]]) -> bool {
    let mut seen = HashSet::with_capacity(samples.len());
    samples.iter().all(|sample| seen.insert(*sample))
}

/// Length of the longest run of one repeated byte value.
///
/// Returns `0` for an empty slice.
pub fn longest_repeated_run(bytes: &[u8]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous = None;

    for &byte in bytes {
        if previous == Some(byte) {
            current += 1;
        } else {
            current = 1;
            previous = Some(byte);
        }
        longest = longest.max(current);
    }

    longest
}
