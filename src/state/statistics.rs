// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters recording how much work the engine and the cache have done.
//! They make cache reuse observable: a query answered from the cache bumps
//! `CacheHits` and leaves `EngineSteps` untouched.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Partition numbers derived by the recurrence.
    EngineSteps,
    /// Offsets appended to the engine's offset list.
    OffsetsAdded,
    /// Queries answered from already computed values.
    CacheHits,
    /// Queries that had to extend the computed range.
    CacheMisses,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}
