// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for osentropy crates.
//!
//! Regression guards against a broken source silently returning zeros or a
//! fixed pattern. None of this is a proof of cryptographic quality.
//!
//! ## License
//!
//! GPL-3.0-only

mod distinct;
mod distribution;

pub use distinct::{all_distinct, longest_repeated_run};
pub use distribution::{
    ByteHistogram, CHI_SQUARED_CRITICAL_DF255_P0001, chi_squared_uniform,
};
