// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Layered fallback chain for platforms with several kernel interfaces.
//!
//! Tiers are tried in strict priority order and the first one that fills the
//! whole buffer wins:
//!
//! 1. **Fast tier** (descriptor-less syscall), skipped once it has reported
//!    [`TierError::Unsupported`]
//! 2. **Device tier** (random character device)
//! 3. **Control tier** (optional, works without file descriptors)
//!
//! Each tier is attempted at most once per call. A tier never hands a
//! half-filled buffer to the next one: the next tier rewrites the full range.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::error::{EntropyError, TierError};
use crate::traits::{EntropySource, Tier};

/// Placeholder control tier for platforms that do not have one.
///
/// Uninhabited, so `Option<NoTier>` is always `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoTier {}

impl Tier for NoTier {
    fn name(&self) -> &'static str {
        match *self {}
    }

    fn fill(&self, _dest: &mut [u8]) -> Result<(), TierError> {
        match *self {}
    }
}

/// Fallback chain over a fast tier, a device tier and an optional control tier.
///
/// The `fast_unavailable` flag is shared state owned by the caller. It only
/// ever goes from `false` to `true`, so concurrent writers are harmless and a
/// relaxed atomic is enough.
///
/// # Example
///
/// ```rust
/// use core::sync::atomic::AtomicBool;
/// use osentropy::{EntropySource, Fallback, NoTier, Tier, TierError};
///
/// struct Missing;
///
/// impl Tier for Missing {
///     fn name(&self) -> &'static str {
///         "missing"
///     }
///
///     fn fill(&self, _dest: &mut [u8]) -> Result<(), TierError> {
///         Err(TierError::Unsupported)
///     }
/// }
///
/// struct Constant(u8);
///
/// impl Tier for Constant {
///     fn name(&self) -> &'static str {
///         "constant"
///     }
///
///     fn fill(&self, dest: &mut [u8]) -> Result<(), TierError> {
///         dest.fill(self.0);
///         Ok(())
///     }
/// }
///
/// let flag = AtomicBool::new(false);
/// let chain = Fallback::new(Missing, Constant(0xAA), None::<NoTier>, &flag);
///
/// let mut buf = [0u8; 16];
/// chain.fill_bytes(&mut buf).expect("Failed to fill_bytes()");
///
/// assert_eq!(buf, [0xAA; 16]);
/// assert!(!chain.fast_tier_available());
/// ```
pub struct Fallback<'a, F, D, C> {
    fast: F,
    device: D,
    control: Option<C>,
    fast_unavailable: &'a AtomicBool,
}

impl<'a, F: Tier, D: Tier, C: Tier> Fallback<'a, F, D, C> {
    /// Creates a chain. `fast_unavailable` is the sticky flag for `fast`.
    pub const fn new(
        fast: F,
        device: D,
        control: Option<C>,
        fast_unavailable: &'a AtomicBool,
    ) -> Self {
        Self {
            fast,
            device,
            control,
            fast_unavailable,
        }
    }

    /// Returns `false` once the fast tier has reported it is not implemented.
    pub fn fast_tier_available(&self) -> bool {
        !self.fast_unavailable.load(Ordering::Relaxed)
    }

    fn try_fast(&self, dest: &mut [u8]) -> bool {
        if !self.fast_tier_available() {
            return false;
        }

        match self.fast.fill(dest) {
            Ok(()) => true,
            Err(err) if err.is_unsupported() => {
                self.fast_unavailable.store(true, Ordering::Relaxed);
                log::debug!(
                    "{} is not implemented by this kernel, skipping it from now on",
                    self.fast.name()
                );
                false
            }
            Err(err) => {
                log::debug!("{} failed: {err}", self.fast.name());
                false
            }
        }
    }
}

fn attempt<T: Tier>(tier: &T, dest: &mut [u8]) -> bool {
    match tier.fill(dest) {
        Ok(()) => true,
        Err(err) => {
            log::debug!("{} failed: {err}", tier.name());
            false
        }
    }
}

impl<F: Tier, D: Tier, C: Tier> EntropySource for Fallback<'_, F, D, C> {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        if self.try_fast(dest) || attempt(&self.device, dest) {
            return Ok(());
        }

        if let Some(control) = &self.control {
            if attempt(control, dest) {
                return Ok(());
            }
        }

        // Leave nothing that looks like entropy behind.
        dest.fill(0);
        log::warn!("every entropy source failed for a {}-byte request", dest.len());

        Err(EntropyError::EntropyNotAvailable)
    }
}
