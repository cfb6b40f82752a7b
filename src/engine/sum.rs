// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The signed sum at the heart of the pentagonal recurrence.

use num_bigint::BigUint;
use num_traits::Zero;

/// Sum `results[len - offset]` over `offsets`, with signs `+, +, -, -, +, +, ...`.
///
/// Given the first `len` partition numbers and the offsets currently in use,
/// this is `p(len)`:
///
/// ```text
/// p(n) = p(n-1) + p(n-2) - p(n-5) - p(n-7) + p(n-12) + p(n-15) - ...
/// ```
///
/// Positive and negative terms are accumulated separately and subtracted
/// once, so no intermediate value needs a sign.
///
/// # Panics
///
/// Panics if an offset is 0 or exceeds `results.len()`, or if the negative
/// terms outweigh the positive ones. Neither happens when `results` holds a
/// prefix of the partition numbers and `offsets` a prefix of the
/// generalized pentagonal numbers no larger than `results.len()`.
///
/// # Example
///
/// ```
/// use num_bigint::BigUint;
/// use partition_numbers::engine::alternating_sum;
///
/// let results: Vec<BigUint> = [1u32, 1, 2, 3, 5].iter().map(|&v| BigUint::from(v)).collect();
/// // p(5) = p(4) + p(3) - p(0)
/// assert_eq!(alternating_sum(&results, &[1, 2, 5]), BigUint::from(7u32));
/// ```
pub fn alternating_sum(results: &[BigUint], offsets: &[usize]) -> BigUint {
    let len = results.len();
    let mut positive = BigUint::zero();
    let mut negative = BigUint::zero();

    for (term, &offset) in offsets.iter().enumerate() {
        let value = &results[len - offset];
        // Sign flips every two terms.
        if (term / 2) % 2 == 0 {
            positive += value;
        } else {
            negative += value;
        }
    }

    positive - negative
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(values: &[u64]) -> Vec<BigUint> {
        values.iter().map(|&v| BigUint::from(v)).collect()
    }

    #[test]
    fn test_single_offset() {
        assert_eq!(alternating_sum(&numbers(&[1]), &[1]), BigUint::from(1u32));
    }

    #[test]
    fn test_first_pair_is_positive() {
        // p(2) = p(1) + p(0)
        assert_eq!(alternating_sum(&numbers(&[1, 1]), &[1, 2]), BigUint::from(2u32));
    }

    #[test]
    fn test_second_pair_is_negative() {
        // p(7) = p(6) + p(5) - p(2) - p(0)
        let results = numbers(&[1, 1, 2, 3, 5, 7, 11]);
        assert_eq!(alternating_sum(&results, &[1, 2, 5, 7]), BigUint::from(15u32));
    }

    #[test]
    fn test_third_pair_is_positive_again() {
        // p(12) = p(11) + p(10) - p(7) - p(5) + p(0)
        let results = numbers(&[1, 1, 2, 3, 5, 7, 11, 15, 22, 30, 42, 56]);
        assert_eq!(
            alternating_sum(&results, &[1, 2, 5, 7, 12]),
            BigUint::from(77u32)
        );
    }

    #[test]
    fn test_empty_offsets() {
        assert_eq!(alternating_sum(&numbers(&[1]), &[]), BigUint::zero());
    }
}
