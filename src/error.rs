// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for partition number queries.

/// Errors returned by [`PartitionNumbers::nth_partition_number`].
///
/// All arithmetic is arbitrary precision, so there is no overflow variant.
///
/// [`PartitionNumbers::nth_partition_number`]: crate::memo::PartitionNumbers::nth_partition_number
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PartitionError {
    /// The partition number of a negative integer is undefined.
    #[error("invalid argument: partition number of negative index {index} is undefined")]
    InvalidArgument { index: i64 },

    /// The index does not fit in this platform's address space.
    #[error("index {index} is too large to address on this platform")]
    IndexTooLarge { index: i64 },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PartitionError>;
