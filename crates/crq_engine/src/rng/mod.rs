//! # Random Number Generation Infrastructure
//!
//! Run-scoped pseudo-random number generation for the risk simulation.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every run owns an [`EngineRng`] seeded from its
//!   configuration; there is no process-wide generator, so concurrent runs
//!   never interfere and identical configurations reproduce identical samples
//! - **Efficiency**: batch fills write into caller-provided `&mut [f64]`
//! - **Static dispatch**: distributions are passed as generic
//!   `rand_distr::Distribution<f64>` values, never boxed
//!
//! ## Module Structure
//!
//! - `prng`: seeded PRNG wrapper and chunk seed derivation
//!
//! ## Usage Example
//!
//! ```rust
//! use crq_engine::rng::EngineRng;
//! use rand_distr::Normal;
//!
//! let mut rng = EngineRng::from_seed(42);
//! let normal = Normal::new(50.0, 20.0).unwrap();
//!
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_from(&normal, &mut buffer);
//! ```

mod prng;

pub use prng::{derive_chunk_seed, EngineRng};

#[cfg(test)]
mod tests;
