// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for osentropy.

use thiserror::Error;

/// Errors surfaced by the entry points.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum EntropyError {
    /// Every entropy source available on this platform failed.
    #[error("EntropyNotAvailable")]
    EntropyNotAvailable,
}

/// Why a single [`Tier`](crate::Tier) could not service a request.
///
/// Never surfaced by the entry points. A chain logs it and moves on to the
/// next tier.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum TierError {
    /// The kernel does not implement this source at all (`ENOSYS`).
    #[error("not implemented by this kernel")]
    Unsupported,

    /// `open()` failed with the given errno.
    #[error("open failed (errno {0})")]
    Open(i32),

    /// `fstat()` failed with the given errno.
    #[error("fstat failed (errno {0})")]
    Stat(i32),

    /// The opened node is not a character device.
    #[error("not a character device")]
    NotCharDevice,

    /// The node rejected the `RNDGETENTCNT` entropy count query.
    #[error("entropy count probe failed (errno {0})")]
    Probe(i32),

    /// `read()` failed with the given errno.
    #[error("read failed (errno {0})")]
    Read(i32),

    /// The syscall failed with the given errno.
    #[error("syscall failed (errno {0})")]
    Syscall(i32),

    /// The source returned zero bytes for a non-empty request.
    #[error("source returned no data")]
    Exhausted,
}

impl TierError {
    /// Whether this failure is categorical: retrying later will not help.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported)
    }
}
