// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::sync::atomic::AtomicBool;
use std::sync::Barrier;
use std::thread;

use osentropy_test_utils::all_distinct;

use crate::error::TierError;
use crate::fallback::Fallback;
use crate::fill::fill_random;
use crate::support::test_utils::{MockTier, MockTierBehaviour};
use crate::traits::EntropySource;

const THREADS: usize = 64;
const CALLS_PER_THREAD: usize = 1000;

#[test]
fn test_concurrent_fill_random() {
    let barrier = Barrier::new(THREADS);

    let firsts: Vec<[u8; 16]> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let barrier = &barrier;
                scope.spawn(move || {
                    barrier.wait();

                    let mut first = [0u8; 16];
                    assert!(fill_random(&mut first, 16));

                    let mut previous = first;
                    for _ in 1..CALLS_PER_THREAD {
                        let mut buf = [0u8; 16];
                        assert!(fill_random(&mut buf, 16));
                        assert_ne!(buf, previous);
                        previous = buf;
                    }

                    first
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().expect("Failed to join()"))
            .collect()
    });

    assert_eq!(firsts.len(), THREADS);
    assert!(all_distinct(&firsts));
}

#[test]
fn test_concurrent_writers_of_unavailable_flag() {
    let flag = AtomicBool::new(false);
    let fast = MockTier::new("fast", MockTierBehaviour::FailAlways(TierError::Unsupported));
    let device = MockTier::new("device", MockTierBehaviour::None);
    let control = MockTier::new("control", MockTierBehaviour::Fill(0));
    let chain = Fallback::new(&fast, &device, Some(&control), &flag);
    let barrier = Barrier::new(THREADS);

    thread::scope(|scope| {
        for _ in 0..THREADS {
            let chain = &chain;
            let barrier = &barrier;
            scope.spawn(move || {
                barrier.wait();

                for _ in 0..100 {
                    let mut buf = [0u8; 16];
                    chain.fill_bytes(&mut buf).expect("Failed to fill_bytes()");
                }
            });
        }
    });

    // Racing threads may each see the flag unset once, never more.
    assert!(!chain.fast_tier_available());
    assert!(fast.call_count() >= 1);
    assert!(fast.call_count() <= THREADS);
    assert_eq!(device.call_count(), THREADS * 100);
    assert_eq!(control.call_count(), 0);
}
