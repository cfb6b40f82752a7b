// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Memoized partition number queries.
//!
//! [`PartitionNumbers`] is the entry point of the crate. It answers
//! "what is p(n)?" from the values already computed when it can, and
//! otherwise drives the [`RecurrenceEngine`] exactly as far as `n`.
//! Computed values are kept for the lifetime of the object, so later queries
//! for smaller or equal indices never touch the engine again.
//!
//! For multi-threaded hosts, [`SharedPartitionNumbers`] puts the same cache
//! behind a single lock.

pub mod shared;

pub use shared::SharedPartitionNumbers;

use log::debug;
use num_bigint::BigUint;

use crate::engine::RecurrenceEngine;
use crate::error::{PartitionError, Result};
use crate::state::{Counters, Statistics};

/// Cache of partition numbers backed by the pentagonal recurrence.
///
/// # Example
///
/// ```
/// use num_bigint::BigUint;
/// use partition_numbers::PartitionNumbers;
///
/// let mut partitions = PartitionNumbers::new();
/// assert_eq!(partitions.nth_partition_number(10).unwrap(), BigUint::from(42u32));
/// assert_eq!(
///     partitions.nth_partition_number(100).unwrap(),
///     BigUint::from(190_569_292u32)
/// );
/// assert!(partitions.nth_partition_number(-1).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PartitionNumbers {
    engine: RecurrenceEngine,
}

impl PartitionNumbers {
    /// Create a cache holding only `p(0)`.
    pub fn new() -> Self {
        Self {
            engine: RecurrenceEngine::new(),
        }
    }

    /// Create a cache with room for `capacity` values before reallocating.
    ///
    /// Useful when the largest index to be queried is known up front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            engine: RecurrenceEngine::with_capacity(capacity),
        }
    }

    /// Return the partition number of `n`.
    ///
    /// # Errors
    ///
    /// - [`PartitionError::InvalidArgument`] if `n` is negative.
    /// - [`PartitionError::IndexTooLarge`] if `n` does not fit in `usize`.
    pub fn nth_partition_number(&mut self, n: i64) -> Result<BigUint> {
        let index = checked_index(n)?;
        Ok(self.get(index).clone())
    }

    /// Return a reference to the partition number of `n`, extending the
    /// cache if needed.
    pub fn get(&mut self, n: usize) -> &BigUint {
        if n < self.engine.len() {
            self.engine.record(Counters::CacheHits);
        } else {
            self.engine.record(Counters::CacheMisses);
            debug!(
                "extending partition numbers from p({}) to p({})",
                self.engine.len() - 1,
                n
            );
            while self.engine.len() <= n {
                self.engine.step();
            }
        }
        &self.engine.results()[n]
    }

    /// All partition numbers computed so far, `p(0)` first.
    pub fn computed(&self) -> &[BigUint] {
        self.engine.results()
    }

    /// Number of cached values.
    pub fn len(&self) -> usize {
        self.engine.len()
    }

    /// Always false: `p(0)` is cached from construction.
    pub fn is_empty(&self) -> bool {
        self.engine.is_empty()
    }

    /// Counters for engine work and cache use.
    pub fn statistics(&self) -> &Statistics {
        self.engine.statistics()
    }

    /// Iterate over `p(0), p(1), p(2), ...` without end, extending the
    /// cache as the iteration goes past it.
    ///
    /// ```
    /// use num_bigint::BigUint;
    /// use partition_numbers::PartitionNumbers;
    ///
    /// let mut partitions = PartitionNumbers::new();
    /// let first: Vec<BigUint> = partitions.iter().take(5).collect();
    /// assert_eq!(first, [1u32, 1, 2, 3, 5].map(BigUint::from));
    /// assert_eq!(partitions.len(), 5);
    /// ```
    pub fn iter(&mut self) -> Iter<'_> {
        Iter {
            numbers: self,
            index: 0,
        }
    }
}

/// Infinite iterator returned by [`PartitionNumbers::iter`].
#[derive(Debug)]
pub struct Iter<'a> {
    numbers: &'a mut PartitionNumbers,
    index: usize,
}

impl Iterator for Iter<'_> {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        let value = self.numbers.get(self.index).clone();
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

fn checked_index(n: i64) -> Result<usize> {
    if n < 0 {
        return Err(PartitionError::InvalidArgument { index: n });
    }
    usize::try_from(n).map_err(|_| PartitionError::IndexTooLarge { index: n })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_p0_is_seeded() {
        let mut partitions = PartitionNumbers::new();
        assert_eq!(partitions.nth_partition_number(0), Ok(BigUint::from(1u32)));
        assert_eq!(partitions.statistics().get(Counters::EngineSteps), 0);
        assert_eq!(partitions.statistics().get(Counters::CacheHits), 1);
    }

    #[test]
    fn test_negative_index_is_rejected() {
        let mut partitions = PartitionNumbers::new();
        assert_eq!(
            partitions.nth_partition_number(-1),
            Err(PartitionError::InvalidArgument { index: -1 })
        );
        assert_eq!(
            partitions.nth_partition_number(i64::MIN),
            Err(PartitionError::InvalidArgument { index: i64::MIN })
        );
        // Rejected queries leave the cache untouched.
        assert_eq!(partitions.len(), 1);
        assert_eq!(partitions.statistics().get(Counters::CacheMisses), 0);
    }

    #[test]
    fn test_extends_exactly_to_n() {
        let mut partitions = PartitionNumbers::new();
        partitions.get(30);
        assert_eq!(partitions.len(), 31);
        assert_eq!(partitions.statistics().get(Counters::EngineSteps), 30);
        assert_eq!(partitions.statistics().get(Counters::CacheMisses), 1);
    }

    #[test]
    fn test_cached_queries_skip_engine() {
        let mut partitions = PartitionNumbers::new();
        partitions.get(50);
        let steps = partitions.statistics().get(Counters::EngineSteps);

        for n in (0..=50).rev() {
            partitions.get(n);
        }

        assert_eq!(partitions.statistics().get(Counters::EngineSteps), steps);
        assert_eq!(partitions.statistics().get(Counters::CacheHits), 51);
    }

    #[test]
    fn test_iter_reuses_cache() {
        let mut partitions = PartitionNumbers::new();
        partitions.get(9);

        let values: Vec<BigUint> = partitions.iter().take(12).collect();
        assert_eq!(values[9], BigUint::from(30u32));
        assert_eq!(values[11], BigUint::from(56u32));
        assert_eq!(partitions.len(), 12);
        assert_eq!(partitions.statistics().get(Counters::EngineSteps), 11);
    }
}
