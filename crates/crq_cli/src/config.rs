//! Scenario configuration management
//!
//! Resolves a [`SimulationConfig`] and log level from, highest priority
//! first: CLI arguments, environment variables, the scenario TOML file and
//! built-in defaults.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crq_core::{FactorSpec, SimulationConfig};
use serde::Deserialize;

use crate::error::{CliError, Result};

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "CRQ_LOG_LEVEL";
/// Environment variable overriding the iteration count.
pub const ENV_ITERATIONS: &str = "CRQ_ITERATIONS";
/// Environment variable overriding the RNG seed.
pub const ENV_SEED: &str = "CRQ_SEED";

/// Log levels accepted by `--log-level`, `CRQ_LOG_LEVEL` and scenario files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(CliError::InvalidArgument(format!(
                "Invalid log level: {s}. Must be one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// Contents of a scenario TOML file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioFile {
    pub iterations: Option<usize>,
    pub confidence: Option<f64>,
    pub slm_factor: Option<f64>,
    pub seed: Option<u64>,
    pub log_level: Option<LogLevel>,
    pub tef: Option<FactorSpec>,
    pub vulnerability: Option<FactorSpec>,
    pub primary_loss: Option<FactorSpec>,
}

impl ScenarioFile {
    /// The built-in scenario used when no file is given.
    pub fn default_scenario() -> Self {
        Self {
            tef: Some(FactorSpec::range(10.0, 50.0, 200.0)),
            vulnerability: Some(FactorSpec::range(0.10, 0.30, 0.60)),
            primary_loss: Some(FactorSpec::range(10_000.0, 100_000.0, 1_000_000.0)),
            slm_factor: Some(0.5),
            ..Self::default()
        }
    }

    /// Load a scenario from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }
}

impl FromStr for ScenarioFile {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

/// Values taken from `CRQ_*` environment variables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvOverrides {
    pub log_level: Option<LogLevel>,
    pub iterations: Option<usize>,
    pub seed: Option<u64>,
}

impl EnvOverrides {
    /// Load overrides from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load overrides through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let log_level = lookup(ENV_LOG_LEVEL).map(|v| v.parse()).transpose()?;
        let iterations = lookup(ENV_ITERATIONS)
            .map(|v| parse_env(ENV_ITERATIONS, &v))
            .transpose()?;
        let seed = lookup(ENV_SEED).map(|v| parse_env(ENV_SEED, &v)).transpose()?;
        Ok(Self {
            log_level,
            iterations,
            seed,
        })
    }
}

fn parse_env<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidArgument(format!("{key}={value} is not a valid number")))
}

/// Overrides given on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub iterations: Option<usize>,
    pub confidence: Option<f64>,
    pub seed: Option<u64>,
}

/// Picks the effective log level.
///
/// Priority: `--log-level`, `CRQ_LOG_LEVEL`, `--verbose` (debug), scenario
/// file, `info`.
pub fn resolve_log_level(
    cli_level: Option<&str>,
    verbose: bool,
    env: &EnvOverrides,
    scenario: Option<&ScenarioFile>,
) -> Result<LogLevel> {
    if let Some(level) = cli_level {
        return level.parse();
    }
    if let Some(level) = env.log_level {
        return Ok(level);
    }
    if verbose {
        return Ok(LogLevel::Debug);
    }
    Ok(scenario.and_then(|s| s.log_level).unwrap_or_default())
}

/// Build the simulation configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Scenario file (or the built-in scenario when none is given)
/// 4. Default values
pub fn build_config(
    scenario: Option<&ScenarioFile>,
    env: &EnvOverrides,
    cli: &CliOverrides,
) -> Result<SimulationConfig> {
    let fallback;
    let scenario = match scenario {
        Some(s) => s,
        None => {
            fallback = ScenarioFile::default_scenario();
            &fallback
        }
    };

    let mut builder = SimulationConfig::builder();
    if let Some(spec) = scenario.tef {
        builder = builder.tef(spec);
    }
    if let Some(spec) = scenario.vulnerability {
        builder = builder.vulnerability(spec);
    }
    if let Some(spec) = scenario.primary_loss {
        builder = builder.primary_loss(spec);
    }
    if let Some(slm_factor) = scenario.slm_factor {
        builder = builder.slm_factor(slm_factor);
    }
    if let Some(iterations) = cli.iterations.or(env.iterations).or(scenario.iterations) {
        builder = builder.iterations(iterations);
    }
    if let Some(confidence) = cli.confidence.or(scenario.confidence) {
        builder = builder.confidence(confidence);
    }
    if let Some(seed) = cli.seed.or(env.seed).or(scenario.seed) {
        builder = builder.seed(seed);
    }

    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crq_core::{ConfigError, DEFAULT_ITERATIONS, DEFAULT_SEED};

    const SCENARIO: &str = r#"
iterations = 5000
confidence = 99
seed = 7
log_level = "warn"

[tef]
kind = "mean_std_dev"
mean = 40
std = 10

[vulnerability]
kind = "point_estimate"
value = 0.25

[primary_loss]
kind = "range_triangular"
min = 10000
likely = 100000
max = 1000000
"#;

    fn env(pairs: &[(&str, &str)]) -> EnvOverrides {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvOverrides::from_lookup(|key| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        })
        .unwrap()
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert!(LogLevel::from_str("loud").is_err());
    }

    #[test]
    fn test_default_scenario_config() {
        let config = build_config(None, &EnvOverrides::default(), &CliOverrides::default()).unwrap();
        assert_eq!(config.iterations(), DEFAULT_ITERATIONS);
        assert_eq!(config.seed(), DEFAULT_SEED);
        assert_eq!(config.confidence(), 95.0);
        assert_eq!(config.slm_factor(), 0.5);
        assert_eq!(config.tef(), &FactorSpec::range(10.0, 50.0, 200.0));
    }

    #[test]
    fn test_scenario_file_parsing() {
        let scenario: ScenarioFile = SCENARIO.parse().unwrap();
        assert_eq!(scenario.iterations, Some(5_000));
        assert_eq!(scenario.log_level, Some(LogLevel::Warn));
        assert_eq!(scenario.tef, Some(FactorSpec::mean_std(40.0, 10.0)));
        assert_eq!(scenario.vulnerability, Some(FactorSpec::point(0.25)));

        let config = build_config(
            Some(&scenario),
            &EnvOverrides::default(),
            &CliOverrides::default(),
        )
        .unwrap();
        assert_eq!(config.confidence(), 99.0);
        assert_eq!(config.seed(), 7);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = "iteratons = 10".parse::<ScenarioFile>().unwrap_err();
        assert!(matches!(err, CliError::Parse(_)));
    }

    #[test]
    fn test_precedence() {
        let scenario: ScenarioFile = SCENARIO.parse().unwrap();
        let env = env(&[(ENV_ITERATIONS, "2000"), (ENV_SEED, "11")]);

        let from_env = build_config(Some(&scenario), &env, &CliOverrides::default()).unwrap();
        assert_eq!(from_env.iterations(), 2_000);
        assert_eq!(from_env.seed(), 11);

        let cli = CliOverrides {
            iterations: Some(300),
            confidence: Some(90.0),
            seed: None,
        };
        let from_cli = build_config(Some(&scenario), &env, &cli).unwrap();
        assert_eq!(from_cli.iterations(), 300);
        assert_eq!(from_cli.confidence(), 90.0);
        assert_eq!(from_cli.seed(), 11);
    }

    #[test]
    fn test_missing_factor_in_file() {
        let scenario: ScenarioFile = "iterations = 100".parse().unwrap();
        let err = build_config(
            Some(&scenario),
            &EnvOverrides::default(),
            &CliOverrides::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::MissingField("tef"))));
    }

    #[test]
    fn test_invalid_env_value() {
        let err = EnvOverrides::from_lookup(|key| (key == ENV_SEED).then(|| "abc".to_string()))
            .unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }

    #[test]
    fn test_log_level_resolution() {
        let scenario: ScenarioFile = SCENARIO.parse().unwrap();
        let none = EnvOverrides::default();
        let env_trace = env(&[(ENV_LOG_LEVEL, "trace")]);

        assert_eq!(
            resolve_log_level(None, false, &none, None).unwrap(),
            LogLevel::Info
        );
        assert_eq!(
            resolve_log_level(None, false, &none, Some(&scenario)).unwrap(),
            LogLevel::Warn
        );
        assert_eq!(
            resolve_log_level(None, true, &none, Some(&scenario)).unwrap(),
            LogLevel::Debug
        );
        assert_eq!(
            resolve_log_level(None, true, &env_trace, Some(&scenario)).unwrap(),
            LogLevel::Trace
        );
        assert_eq!(
            resolve_log_level(Some("error"), true, &env_trace, None).unwrap(),
            LogLevel::Error
        );
    }

    #[test]
    fn test_missing_file() {
        let err = ScenarioFile::from_file(Path::new("/nonexistent/scenario.toml")).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }
}
