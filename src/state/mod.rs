// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bookkeeping state carried alongside the computed values.

pub mod statistics;

pub use statistics::{Counters, Statistics};
