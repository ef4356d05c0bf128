//! Risk factor and configuration types.
//!
//! This module provides:
//! - `factor`: [`RiskFactor`] roles and their [`FactorSpec`] parameterisations
//! - `config`: [`SimulationConfig`] and its validating builder
//! - `error`: [`ConfigError`] for rejected configurations

pub mod config;
pub mod error;
pub mod factor;

pub use config::{
    SimulationConfig, SimulationConfigBuilder, DEFAULT_CONFIDENCE, DEFAULT_ITERATIONS,
    DEFAULT_SEED, DEFAULT_SLM_FACTOR, MAX_ITERATIONS, MIN_ITERATIONS,
};
pub use error::ConfigError;
pub use factor::{FactorSpec, RiskFactor};
