//! CLI error types.

use crq_core::ConfigError;
use crq_engine::SimulationError;
use crq_risk::RiskError;
use thiserror::Error;

/// Errors surfaced by the `crq` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// File system failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Scenario file is not valid TOML or has unknown keys.
    #[error("Scenario parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// CSV export failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON output failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Simulation could not be prepared or executed.
    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),

    /// Result reduction failed.
    #[error("Analytics error: {0}")]
    Risk(#[from] RiskError),

    /// Configuration rejected by validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid command-line or environment value.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Referenced file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),
}

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;
