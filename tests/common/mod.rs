// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use num_bigint::BigUint;

/// Partition numbers `p(0..=max)` counted directly, independently of the
/// pentagonal recurrence.
///
/// Counts the ways of making each total from parts `1..=max` (the classic
/// coin-change table), which is O(max^2) but needs nothing beyond addition.
pub fn brute_force_partitions(max: usize) -> Vec<u128> {
    let mut ways = vec![0u128; max + 1];
    ways[0] = 1;
    for part in 1..=max {
        for total in part..=max {
            ways[total] += ways[total - part];
        }
    }
    ways
}

/// Convenience conversion for comparing against `BigUint` results.
pub fn big(value: u128) -> BigUint {
    BigUint::from(value)
}
