// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Incremental recurrence engine for partition numbers.
//!
//! The engine derives each partition number from the ones before it using
//! Euler's pentagonal number theorem:
//!
//! ```text
//! p(n) = Σ (-1)^(k-1) [ p(n - k(3k-1)/2) + p(n - k(3k+1)/2) ]
//! ```
//!
//! Rather than recomputing pentagonal numbers for every `n`, the engine keeps
//! them as offsets from the end of its result list, pulled lazily from
//! [`Offsets`]. An offset joins the active list only once the result list is
//! long enough to reach it, so the list never holds more entries than the
//! next step needs.
//!
//! # State
//!
//! - `results`: `p(0), p(1), ...`, seeded with `p(0) = 1`. Append-only.
//! - `offsets`: active offsets, every one at most `results.len()`.
//! - `next_offset`: the offset immediately following the last active one.
//!
//! # Example
//!
//! ```
//! use num_bigint::BigUint;
//! use partition_numbers::engine::RecurrenceEngine;
//!
//! let mut engine = RecurrenceEngine::new();
//! assert_eq!(*engine.step(), BigUint::from(1u32)); // p(1)
//! assert_eq!(*engine.step(), BigUint::from(2u32)); // p(2)
//! assert_eq!(*engine.step(), BigUint::from(3u32)); // p(3)
//! assert_eq!(engine.len(), 4);
//! ```

pub mod sum;

pub use sum::alternating_sum;

use log::trace;
use num_bigint::BigUint;
use num_traits::One;

use crate::sequence::Offsets;
use crate::state::{Counters, Statistics};

/// Owns the result list, the active offsets and the offset producer.
#[derive(Debug, Clone)]
pub struct RecurrenceEngine {
    /// Partition numbers computed so far, `results[i] = p(i)`.
    results: Vec<BigUint>,

    /// Offsets currently used by the recurrence.
    offsets: Vec<usize>,

    /// Next offset to activate once the result list reaches it.
    next_offset: usize,

    /// Source of further offsets.
    offset_source: Offsets,

    /// Work counters.
    statistics: Statistics,
}

impl RecurrenceEngine {
    /// Create an engine holding only `p(0) = 1`.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Create an engine with room for `capacity` results before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut results = Vec::with_capacity(capacity.max(1));
        results.push(BigUint::one());

        let mut offset_source = Offsets::new();
        let offsets = vec![offset_source.next_offset()];
        let next_offset = offset_source.next_offset();

        Self {
            results,
            offsets,
            next_offset,
            offset_source,
            statistics: Statistics::new(),
        }
    }

    /// Derive the next partition number, append it and return it.
    ///
    /// Before summing, any pending offset the result list has grown to reach
    /// is activated.
    pub fn step(&mut self) -> &BigUint {
        while self.next_offset <= self.results.len() {
            trace!(
                "activating offset {} at length {}",
                self.next_offset,
                self.results.len()
            );
            self.offsets.push(self.next_offset);
            self.next_offset = self.offset_source.next_offset();
            self.statistics.increment_counter(Counters::OffsetsAdded);
        }

        let value = alternating_sum(&self.results, &self.offsets);
        self.results.push(value);
        self.statistics.increment_counter(Counters::EngineSteps);

        &self.results[self.results.len() - 1]
    }

    /// All partition numbers computed so far, starting at `p(0)`.
    pub fn results(&self) -> &[BigUint] {
        &self.results
    }

    /// Offsets currently in use.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// The offset that will be activated next.
    pub fn next_offset(&self) -> usize {
        self.next_offset
    }

    /// Number of partition numbers computed so far (always at least 1).
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Always false: the engine is seeded with `p(0)`.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Counters for the work done so far.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub(crate) fn record(&mut self, counter: Counters) {
        self.statistics.increment_counter(counter);
    }
}

impl Default for RecurrenceEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Yields `p(1), p(2), p(3), ...` without end.
impl Iterator for RecurrenceEngine {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        Some(self.step().clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
