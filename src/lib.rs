// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact partition numbers via Euler's pentagonal number recurrence.
//!
//! The partition number p(n) counts the ways of writing n as an unordered sum
//! of positive integers: p(4) = 5 because 4 = 3+1 = 2+2 = 2+1+1 = 1+1+1+1.
//! Values grow quickly (p(200) already needs 42 bits), so they are held as
//! arbitrary precision [`BigUint`](num_bigint::BigUint)s.
//!
//! # Architecture
//!
//! Three lazy sequences feed a cache:
//!
//! ```text
//! PartitionNumbers ──> RecurrenceEngine ──> Offsets ──> Gaps
//!   (memo)               (engine)            (sequence)
//! ```
//!
//! - [`sequence::Gaps`] yields 1, 3, 2, 5, 3, 7, ...
//! - [`sequence::Offsets`] sums them into 1, 2, 5, 7, 12, 15, ...,
//!   the generalized pentagonal numbers.
//! - [`RecurrenceEngine`] keeps `p(0..len)` and the offsets reachable from
//!   the end of that list, deriving one more value per step as
//!   `p(n-1) + p(n-2) - p(n-5) - p(n-7) + ...`.
//! - [`PartitionNumbers`] answers queries from the cache and steps the
//!   engine only past its end.
//!
//! Computing the first n values costs O(n^1.5) additions: each step sums
//! about `2 * sqrt(2n/3)` terms.
//!
//! # Example
//!
//! ```
//! use partition_numbers::PartitionNumbers;
//!
//! let mut partitions = PartitionNumbers::new();
//! let p200 = partitions.nth_partition_number(200).unwrap();
//! assert_eq!(p200.to_string(), "3972999029388");
//! ```

pub mod engine;
pub mod error;
pub mod memo;
pub mod sequence;
pub mod state;

// Re-export commonly used types
pub use engine::RecurrenceEngine;
pub use error::{PartitionError, Result};
pub use memo::{PartitionNumbers, SharedPartitionNumbers};
pub use state::{Counters, Statistics};
