//! Numeric reductions over sample slices.
//!
//! - [`stats`]: mean, population standard deviation and linear-interpolation
//!   percentiles, generic over `num_traits::Float`

pub mod stats;

pub use stats::{mean, percentile_of_sorted, population_std_dev};
