// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::error::TierError;
use crate::native::NativeSource;
use crate::traits::{EntropySource, Tier};

/// Configurable behavior for [`MockTier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockTierBehaviour {
    /// Normal operation (fills from the platform CSPRNG).
    None,
    /// Fill every byte with a constant, so tests can tell tiers apart.
    Fill(u8),
    /// Always fail fill with the given error.
    FailAlways(TierError),
    /// Fail fill on the Nth call (1-indexed: 1 = first call fails).
    FailAtNthFill(usize, TierError),
    /// Write `byte` over the first `len` bytes, then fail with `error`.
    PartialThenFail {
        /// Bytes written before failing.
        len: usize,
        /// Value written.
        byte: u8,
        /// Error reported afterwards.
        error: TierError,
    },
}

/// Mock tier for testing fallback chains.
///
/// Counts calls atomically, so one instance can be shared across threads.
pub struct MockTier {
    name: &'static str,
    behaviour: MockTierBehaviour,
    fill_count: AtomicUsize,
}

impl MockTier {
    /// Creates a new mock tier with the specified behavior.
    pub fn new(name: &'static str, behaviour: MockTierBehaviour) -> Self {
        Self {
            name,
            behaviour,
            fill_count: AtomicUsize::new(0),
        }
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockTierBehaviour) {
        self.behaviour = behaviour;
    }

    /// Resets the call counter.
    pub fn reset_count(&self) {
        self.fill_count.store(0, Ordering::Relaxed);
    }

    /// Returns the current call count.
    pub fn call_count(&self) -> usize {
        self.fill_count.load(Ordering::Relaxed)
    }

    fn fill_random(dest: &mut [u8]) -> Result<(), TierError> {
        NativeSource {}
            .fill_bytes(dest)
            .map_err(|_| TierError::Exhausted)
    }
}

impl Tier for MockTier {
    fn name(&self) -> &'static str {
        self.name
    }

    fn fill(&self, dest: &mut [u8]) -> Result<(), TierError> {
        let current = self.fill_count.fetch_add(1, Ordering::Relaxed);

        match self.behaviour {
            MockTierBehaviour::None => Self::fill_random(dest),
            MockTierBehaviour::Fill(byte) => {
                dest.fill(byte);
                Ok(())
            }
            MockTierBehaviour::FailAlways(error) => Err(error),
            MockTierBehaviour::FailAtNthFill(n, error) if current + 1 == n => Err(error),
            MockTierBehaviour::FailAtNthFill(..) => Self::fill_random(dest),
            MockTierBehaviour::PartialThenFail { len, byte, error } => {
                let len = len.min(dest.len());
                dest[..len].fill(byte);
                Err(error)
            }
        }
    }
}
