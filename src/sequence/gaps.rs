// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Gap sequence between consecutive recurrence offsets.

use std::iter::FusedIterator;

/// Infinite iterator over 1, 3, 2, 5, 3, 7, 4, 9, ...
///
/// For step `i = 1, 2, 3, ...` it yields `i` followed by `2*i + 1`. The odd
/// terms are the distances between the two pentagonal numbers of the same
/// `k`; the others are the distances from one `k` to the next.
///
/// # Example
///
/// ```
/// use partition_numbers::sequence::Gaps;
///
/// let first: Vec<usize> = Gaps::new().take(6).collect();
/// assert_eq!(first, vec![1, 3, 2, 5, 3, 7]);
/// ```
#[derive(Debug, Clone)]
pub struct Gaps {
    /// Current step index `i`.
    step: usize,

    /// Whether the next value is the `2*i + 1` half of the step.
    odd_half: bool,
}

impl Gaps {
    /// Create a gap sequence positioned at its first term.
    pub fn new() -> Self {
        Self {
            step: 1,
            odd_half: false,
        }
    }

    /// Pull the next gap. The sequence never ends, so this cannot fail.
    #[inline]
    pub fn next_gap(&mut self) -> usize {
        let gap = if self.odd_half {
            let gap = 2 * self.step + 1;
            self.step += 1;
            gap
        } else {
            self.step
        };
        self.odd_half = !self.odd_half;
        gap
    }
}

impl Default for Gaps {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Gaps {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        Some(self.next_gap())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for Gaps {}
