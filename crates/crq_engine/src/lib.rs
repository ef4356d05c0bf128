//! # crq_engine: Monte Carlo Sampling Kernel (Layer 2)
//!
//! ## Layer 2 Role
//!
//! crq_engine turns a validated [`SimulationConfig`](crq_core::SimulationConfig)
//! into index-aligned sample vectors:
//! - Run-scoped seeded generator and chunk seed derivation (`rng`)
//! - Distribution samplers per risk factor (`sampling`)
//! - Elementwise risk pipeline TEF → LEF → LM → ALE (`pipeline`)
//! - Sequential and chunk-parallel drivers (`mc`)
//!
//! No file or network I/O happens here.
//!
//! ## Usage Example
//!
//! ```rust
//! use crq_core::{FactorSpec, SimulationConfig};
//! use crq_engine::mc::RiskSimulator;
//!
//! let config = SimulationConfig::builder()
//!     .tef(FactorSpec::range(10.0, 50.0, 200.0))
//!     .vulnerability(FactorSpec::point(0.30))
//!     .primary_loss(FactorSpec::mean_std(100_000.0, 50_000.0))
//!     .iterations(2_000)
//!     .build()
//!     .unwrap();
//!
//! let vectors = RiskSimulator::new(config).unwrap().run().unwrap();
//!
//! assert_eq!(vectors.len(), 2_000);
//! assert!(vectors.vulnerability().iter().all(|&v| v == 0.30));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialise [`SampleVectors`] and enable `crq_core/serde`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod mc;
pub mod pipeline;
pub mod rng;
pub mod sampling;
pub mod vectors;

pub use error::SimulationError;
pub use mc::{ParallelConfig, RiskSimulator};
pub use vectors::SampleVectors;
