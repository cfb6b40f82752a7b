// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Offsets used by the pentagonal recurrence.
//!
//! The offsets are running sums of [`Gaps`], starting at 1. Starting the sum
//! at 1 rather than 0 means an offset can be used directly as a distance from
//! the end of the result list: offset 1 is the last element.
//!
//! The resulting values are the generalized pentagonal numbers
//! `k(3k-1)/2` for `k = 1, -1, 2, -2, 3, -3, ...`.

use std::iter::FusedIterator;

use super::Gaps;

/// Infinite, strictly increasing iterator over 1, 2, 5, 7, 12, 15, 22, 26, ...
///
/// # Example
///
/// ```
/// use partition_numbers::sequence::Offsets;
///
/// let first: Vec<usize> = Offsets::new().take(6).collect();
/// assert_eq!(first, vec![1, 2, 5, 7, 12, 15]);
/// ```
#[derive(Debug, Clone)]
pub struct Offsets {
    gaps: Gaps,

    /// Running total of all gaps pulled so far, plus one.
    total: usize,

    /// Whether the initial total has been yielded.
    started: bool,
}

impl Offsets {
    /// Create an offset sequence positioned at its first term.
    pub fn new() -> Self {
        Self {
            gaps: Gaps::new(),
            total: 1,
            started: false,
        }
    }

    /// Pull the next offset. The sequence never ends, so this cannot fail.
    #[inline]
    pub fn next_offset(&mut self) -> usize {
        if self.started {
            self.total += self.gaps.next_gap();
        } else {
            self.started = true;
        }
        self.total
    }
}

impl Default for Offsets {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Offsets {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        Some(self.next_offset())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for Offsets {}
