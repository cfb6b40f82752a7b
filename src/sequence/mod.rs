// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lazy offset sequences feeding the recurrence engine.
//!
//! Two infinite, non-restartable iterators are chained here:
//!
//! - [`Gaps`] produces the spacing 1, 3, 2, 5, 3, 7, 4, 9, ... between
//!   successive generalized pentagonal numbers.
//! - [`Offsets`] sums those gaps, starting from 1, giving the distances
//!   back from the end of the result list that the recurrence reads:
//!   1, 2, 5, 7, 12, 15, 22, 26, ...
//!
//! Both keep their cursor in private fields, so pulling a value is a plain
//! `next()` call with no allocation.

pub mod gaps;
pub mod offsets;

pub use gaps::Gaps;
pub use offsets::Offsets;
