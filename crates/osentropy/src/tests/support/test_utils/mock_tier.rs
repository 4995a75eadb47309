// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::TierError;
use crate::support::test_utils::{MockTier, MockTierBehaviour};
use crate::traits::Tier;

#[test]
fn test_mock_tier_reports_its_name() {
    let mock = MockTier::new("device", MockTierBehaviour::None);

    assert_eq!(mock.name(), "device");
}

#[test]
fn test_mock_tier_behaviour_none() {
    let mock = MockTier::new("fast", MockTierBehaviour::None);
    let mut buf = [0u8; 64];

    mock.fill(&mut buf).expect("Failed to fill()");

    assert!(buf.iter().any(|b| *b != 0));
}

#[test]
fn test_mock_tier_behaviour_fill() {
    let mock = MockTier::new("fast", MockTierBehaviour::Fill(0xC3));
    let mut buf = [0u8; 5];

    mock.fill(&mut buf).expect("Failed to fill()");

    assert_eq!(buf, [0xC3; 5]);
}

#[test]
fn test_mock_tier_fail_always_leaves_buffer() {
    let mock = MockTier::new("fast", MockTierBehaviour::FailAlways(TierError::Open(2)));
    let mut buf = [7u8; 8];

    assert_eq!(mock.fill(&mut buf), Err(TierError::Open(2)));
    assert_eq!(buf, [7u8; 8]);
}

#[test]
fn test_mock_tier_fail_at_nth() {
    let mock = MockTier::new(
        "fast",
        MockTierBehaviour::FailAtNthFill(2, TierError::Exhausted),
    );
    let mut buf = [0u8; 8];

    assert!(mock.fill(&mut buf).is_ok());
    assert_eq!(mock.fill(&mut buf), Err(TierError::Exhausted));
    assert!(mock.fill(&mut buf).is_ok());
    assert_eq!(mock.call_count(), 3);
}

#[test]
fn test_mock_tier_partial_then_fail() {
    let mock = MockTier::new(
        "device",
        MockTierBehaviour::PartialThenFail {
            len: 3,
            byte: 0xEE,
            error: TierError::Read(5),
        },
    );
    let mut buf = [0u8; 6];

    assert_eq!(mock.fill(&mut buf), Err(TierError::Read(5)));
    assert_eq!(buf, [0xEE, 0xEE, 0xEE, 0, 0, 0]);

    // Length is clamped to the request.
    let mut short = [0u8; 2];
    assert_eq!(mock.fill(&mut short), Err(TierError::Read(5)));
    assert_eq!(short, [0xEE; 2]);
}

#[test]
fn test_mock_tier_change_behaviour_and_reset() {
    let mut mock = MockTier::new("control", MockTierBehaviour::FailAlways(TierError::Unsupported));
    let mut buf = [0u8; 4];

    assert!(mock.fill(&mut buf).is_err());

    mock.change_behaviour(MockTierBehaviour::Fill(1));
    assert!(mock.fill(&mut buf).is_ok());
    assert_eq!(buf, [1u8; 4]);
    assert_eq!(mock.call_count(), 2);

    mock.reset_count();
    assert_eq!(mock.call_count(), 0);
}
