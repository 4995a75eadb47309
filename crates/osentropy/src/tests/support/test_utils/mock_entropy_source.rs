// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::support::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
use crate::traits::EntropySource;

#[test]
fn test_mock_entropy_source_behaviour_none() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut buf = [0u8; 32];

    let result = mock.fill_bytes(&mut buf);

    assert!(result.is_ok());
    assert!(buf.iter().any(|b| *b != 0));
}

#[test]
fn test_mock_entropy_source_behaviour_fill() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::Fill(0x42));
    let mut buf = [0u8; 8];

    mock.fill_bytes(&mut buf).expect("Failed to fill_bytes()");

    assert_eq!(buf, [0x42; 8]);
}

#[test]
fn test_mock_entropy_source_fail_always_zeroes() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let mut buf = [0xFFu8; 32];

    let result = mock.fill_bytes(&mut buf);

    assert!(matches!(result, Err(EntropyError::EntropyNotAvailable)));
    assert_eq!(buf, [0u8; 32]);
}

#[test]
fn test_mock_entropy_source_fail_at_nth_third_call() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAtNthFillBytes(3));
    let mut buf = [0u8; 32];

    assert!(mock.fill_bytes(&mut buf).is_ok());
    assert!(mock.fill_bytes(&mut buf).is_ok());
    assert!(matches!(
        mock.fill_bytes(&mut buf),
        Err(EntropyError::EntropyNotAvailable)
    ));
    assert!(mock.fill_bytes(&mut buf).is_ok());
    assert_eq!(mock.call_count(), 4);
}

#[test]
fn test_mock_entropy_source_change_behaviour_and_reset() {
    let mut mock = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut buf = [0u8; 16];

    assert!(mock.fill_bytes(&mut buf).is_ok());

    mock.change_behaviour(MockEntropySourceBehaviour::FailAlways);
    assert!(mock.fill_bytes(&mut buf).is_err());
    assert_eq!(mock.call_count(), 2);

    mock.reset_count();
    assert_eq!(mock.call_count(), 0);
}
