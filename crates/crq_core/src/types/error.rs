//! Error types for configuration validation.
//!
//! Every variant is raised before any sampling takes place, so a rejected
//! configuration never produces partial results.

use thiserror::Error;

use super::factor::RiskFactor;

/// Configuration error for a simulation run.
///
/// # Examples
/// ```
/// use crq_core::ConfigError;
///
/// let err = ConfigError::InvalidIterationCount(0);
/// assert_eq!(
///     format!("{}", err),
///     "Invalid iteration count 0: must be in range [1, 10000000]"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Iteration count outside `[MIN_ITERATIONS, MAX_ITERATIONS]`.
    #[error("Invalid iteration count {0}: must be in range [1, 10000000]")]
    InvalidIterationCount(usize),

    /// Confidence level outside the open interval (0, 100).
    #[error("Invalid confidence level {0}: must be in the open interval (0, 100)")]
    InvalidConfidence(f64),

    /// Secondary loss multiplier negative or non-finite.
    #[error("Invalid secondary loss factor {0}: must be finite and non-negative")]
    InvalidSlmFactor(f64),

    /// A factor parameter is NaN or infinite.
    #[error("{factor}: parameter '{field}' must be finite")]
    NonFinite {
        /// Factor being validated.
        factor: RiskFactor,
        /// Offending field name.
        field: &'static str,
    },

    /// Range estimate violating `min <= likely <= max`.
    #[error("{factor}: range must satisfy min <= likely <= max (got {min}, {likely}, {max})")]
    RangeOrder {
        /// Factor being validated.
        factor: RiskFactor,
        /// Lower bound.
        min: f64,
        /// Most likely value.
        likely: f64,
        /// Upper bound.
        max: f64,
    },

    /// Standard deviation not strictly positive.
    #[error("{factor}: standard deviation must be positive (got {std})")]
    NonPositiveStdDev {
        /// Factor being validated.
        factor: RiskFactor,
        /// Offending standard deviation.
        std: f64,
    },

    /// Parameter outside the domain the factor allows.
    #[error("{factor}: parameter '{field}' = {value} {reason}")]
    OutOfBounds {
        /// Factor being validated.
        factor: RiskFactor,
        /// Offending field name.
        field: &'static str,
        /// Offending value.
        value: f64,
        /// Human-readable constraint.
        reason: &'static str,
    },

    /// Parameterisation not defined for the factor.
    #[error("{factor}: {spec} parameterisation is not supported")]
    UnsupportedSpec {
        /// Factor being validated.
        factor: RiskFactor,
        /// Name of the rejected variant.
        spec: &'static str,
    },

    /// Required builder field not set.
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidConfidence(100.0);
        assert!(err.to_string().contains("Invalid confidence level 100"));

        let err = ConfigError::RangeOrder {
            factor: RiskFactor::ThreatEventFrequency,
            min: 10.0,
            likely: 5.0,
            max: 20.0,
        };
        assert_eq!(
            err.to_string(),
            "TEF: range must satisfy min <= likely <= max (got 10, 5, 20)"
        );

        let err = ConfigError::UnsupportedSpec {
            factor: RiskFactor::Vulnerability,
            spec: "mean_std_dev",
        };
        assert!(err.to_string().starts_with("Vulnerability"));

        let err = ConfigError::MissingField("tef");
        assert_eq!(err.to_string(), "Missing required field 'tef'");
    }
}
