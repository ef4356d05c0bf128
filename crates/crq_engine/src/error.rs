//! Error types for the simulation kernel.

use crq_core::{ConfigError, RiskFactor};
use thiserror::Error;

/// Errors raised while preparing or executing a simulation run.
///
/// Non-finite samples are not errors: they flow into the sample vectors and
/// are reported by the analytics layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The configuration was rejected before sampling.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A distribution constructor refused parameters derived from a
    /// validated specification.
    #[error("{factor}: distribution rejected parameters: {reason}")]
    Distribution {
        /// Factor being sampled.
        factor: RiskFactor,
        /// Message from the distribution constructor.
        reason: String,
    },

    /// Factor vectors passed to the pipeline are not index-aligned.
    #[error("Sample vector length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Length of the TEF vector.
        expected: usize,
        /// Length of the offending vector.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_is_transparent() {
        let err: SimulationError = ConfigError::InvalidIterationCount(0).into();
        assert_eq!(err.to_string(), ConfigError::InvalidIterationCount(0).to_string());
    }

    #[test]
    fn test_distribution_error_display() {
        let err = SimulationError::Distribution {
            factor: RiskFactor::Vulnerability,
            reason: "alpha is not positive".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Vulnerability: distribution rejected parameters: alpha is not positive"
        );
    }
}
