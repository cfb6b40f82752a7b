// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for cache reuse.
//!
//! The engine step counter is the instrumentation: a query answered from the
//! cache must leave it unchanged.

use partition_numbers::{Counters, PartitionNumbers, RecurrenceEngine, SharedPartitionNumbers};

#[test]
fn test_no_steps_after_p100() {
    let mut partitions = PartitionNumbers::new();
    partitions.nth_partition_number(100).unwrap();
    let steps = partitions.statistics().get(Counters::EngineSteps);
    assert_eq!(steps, 100);

    for n in 0..=100 {
        partitions.nth_partition_number(n).unwrap();
    }

    assert_eq!(partitions.statistics().get(Counters::EngineSteps), steps);
    assert_eq!(partitions.statistics().get(Counters::CacheHits), 101);
    assert_eq!(partitions.statistics().get(Counters::CacheMisses), 1);
}

#[test]
fn test_extension_only_computes_new_values() {
    let mut partitions = PartitionNumbers::new();
    partitions.nth_partition_number(40).unwrap();
    partitions.nth_partition_number(60).unwrap();
    assert_eq!(partitions.statistics().get(Counters::EngineSteps), 60);
    assert_eq!(partitions.len(), 61);
}

#[test]
fn test_offsets_added_once() {
    // Offsets up to 100: 1, 2, 5, 7, 12, 15, 22, 26, 35, 40, 51, 57, 70, 77, 92, 100.
    // Offset 1 is active from the start; the other 15 are activated on the way to p(100).
    let mut partitions = PartitionNumbers::new();
    partitions.nth_partition_number(100).unwrap();
    assert_eq!(partitions.statistics().get(Counters::OffsetsAdded), 15);

    partitions.nth_partition_number(50).unwrap();
    assert_eq!(partitions.statistics().get(Counters::OffsetsAdded), 15);
}

#[test]
fn test_facade_matches_raw_engine() {
    let mut partitions = PartitionNumbers::new();
    partitions.get(250);

    let mut engine = RecurrenceEngine::new();
    for _ in 0..250 {
        engine.step();
    }

    assert_eq!(partitions.computed(), engine.results());
}

#[test]
fn test_shared_cache_reuse() {
    let shared = SharedPartitionNumbers::new();
    shared.nth_partition_number(100).unwrap();
    shared.nth_partition_number(10).unwrap();
    assert_eq!(shared.statistics().get(Counters::EngineSteps), 100);
    assert_eq!(shared.statistics().get(Counters::CacheHits), 1);
}
