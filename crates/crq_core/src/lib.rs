//! # crq_core: Foundation Types for Cyber-Risk Quantification
//!
//! ## Layer 1 (Foundation) Role
//!
//! crq_core is the bottom layer of the workspace and provides:
//! - Risk factor parameterisations: [`FactorSpec`], [`RiskFactor`] (`types::factor`)
//! - Immutable, validated run configuration: [`SimulationConfig`] (`types::config`)
//! - Configuration errors: [`ConfigError`] (`types::error`)
//! - Generic reductions over sample slices: mean, population standard
//!   deviation, linear-interpolation percentiles (`math::stats`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other crq_* crates:
//! - num-traits: generic floating-point reductions
//! - thiserror: error derivation
//! - serde: serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use crq_core::{FactorSpec, SimulationConfig};
//!
//! let config = SimulationConfig::builder()
//!     .tef(FactorSpec::range(10.0, 50.0, 200.0))
//!     .vulnerability(FactorSpec::range(0.10, 0.30, 0.60))
//!     .primary_loss(FactorSpec::range(10_000.0, 100_000.0, 1_000_000.0))
//!     .slm_factor(0.5)
//!     .iterations(10_000)
//!     .confidence(95.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.iterations(), 10_000);
//! assert_eq!(config.seed(), crq_core::DEFAULT_SEED);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `FactorSpec` and `RiskFactor`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;

pub use types::{
    ConfigError, FactorSpec, RiskFactor, SimulationConfig, SimulationConfigBuilder,
    DEFAULT_CONFIDENCE, DEFAULT_ITERATIONS, DEFAULT_SEED, DEFAULT_SLM_FACTOR, MAX_ITERATIONS,
    MIN_ITERATIONS,
};
