// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lock-guarded partition number cache.
//!
//! Every query holds one lock for its whole duration, including any engine
//! steps it triggers, so no reader ever sees a half-extended cache and no two
//! extensions interleave.

use std::sync::{Mutex, MutexGuard, PoisonError};

use num_bigint::BigUint;

use super::PartitionNumbers;
use crate::error::Result;
use crate::state::Statistics;

/// [`PartitionNumbers`] behind a single mutex, shareable across threads.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use num_bigint::BigUint;
/// use partition_numbers::SharedPartitionNumbers;
///
/// let partitions = Arc::new(SharedPartitionNumbers::new());
/// let worker = {
///     let partitions = Arc::clone(&partitions);
///     std::thread::spawn(move || partitions.nth_partition_number(20))
/// };
/// assert_eq!(worker.join().unwrap(), Ok(BigUint::from(627u32)));
/// ```
#[derive(Debug, Default)]
pub struct SharedPartitionNumbers {
    inner: Mutex<PartitionNumbers>,
}

impl SharedPartitionNumbers {
    /// Create a shared cache holding only `p(0)`.
    pub fn new() -> Self {
        Self::default()
    }

    /// See [`PartitionNumbers::nth_partition_number`].
    pub fn nth_partition_number(&self, n: i64) -> Result<BigUint> {
        self.lock().nth_partition_number(n)
    }

    /// Number of cached values.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Always false: `p(0)` is cached from construction.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Snapshot of the counters.
    pub fn statistics(&self) -> Statistics {
        self.lock().statistics().clone()
    }

    /// Take the cache back out of the lock.
    pub fn into_inner(self) -> PartitionNumbers {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // Each step appends a complete value, so a poisoned cache is still valid.
    fn lock(&self) -> MutexGuard<'_, PartitionNumbers> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<PartitionNumbers> for SharedPartitionNumbers {
    fn from(numbers: PartitionNumbers) -> Self {
        Self {
            inner: Mutex::new(numbers),
        }
    }
}
