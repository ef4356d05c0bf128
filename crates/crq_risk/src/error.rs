//! Error types for risk analytics.

use crq_engine::SimulationError;
use thiserror::Error;

/// Errors raised while reducing sample vectors to a run result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RiskError {
    /// Statistics were requested over an empty sample.
    #[error("Cannot compute statistics over an empty sample")]
    EmptySample,

    /// VaR confidence outside the open interval (0, 100).
    #[error("Invalid confidence level {0}: must be in (0, 100)")]
    InvalidConfidence(f64),

    /// The simulation itself failed.
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}
