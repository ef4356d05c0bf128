//! Simulation run configuration.
//!
//! [`SimulationConfig`] is immutable once built; every field is validated
//! by [`SimulationConfigBuilder::build`] so that downstream samplers can
//! assume well-formed parameters.

use super::error::ConfigError;
use super::factor::{FactorSpec, RiskFactor};

/// Minimum number of simulated years per run.
pub const MIN_ITERATIONS: usize = 1;

/// Maximum number of simulated years per run.
pub const MAX_ITERATIONS: usize = 10_000_000;

/// Iteration count used when none is set.
pub const DEFAULT_ITERATIONS: usize = 10_000;

/// VaR confidence level (percent) used when none is set.
pub const DEFAULT_CONFIDENCE: f64 = 95.0;

/// Secondary loss multiplier used when none is set.
pub const DEFAULT_SLM_FACTOR: f64 = 0.5;

/// Seed used when none is set; identical configurations reproduce
/// bit-identical samples.
pub const DEFAULT_SEED: u64 = 42;

/// Monte Carlo risk simulation configuration.
///
/// Use [`SimulationConfig::builder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use crq_core::{FactorSpec, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .tef(FactorSpec::mean_std(50.0, 20.0))
///     .vulnerability(FactorSpec::point(0.30))
///     .primary_loss(FactorSpec::mean_std(100_000.0, 50_000.0))
///     .iterations(5_000)
///     .confidence(99.0)
///     .seed(7)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.confidence(), 99.0);
/// assert_eq!(config.slm_factor(), 0.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    tef: FactorSpec,
    vulnerability: FactorSpec,
    primary_loss: FactorSpec,
    slm_factor: f64,
    iterations: usize,
    confidence: f64,
    seed: u64,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Threat Event Frequency specification.
    #[inline]
    pub fn tef(&self) -> &FactorSpec {
        &self.tef
    }

    /// Vulnerability specification.
    #[inline]
    pub fn vulnerability(&self) -> &FactorSpec {
        &self.vulnerability
    }

    /// Primary Loss Magnitude specification.
    #[inline]
    pub fn primary_loss(&self) -> &FactorSpec {
        &self.primary_loss
    }

    /// Returns the specification attached to a factor role.
    #[inline]
    pub fn factor(&self, factor: RiskFactor) -> &FactorSpec {
        match factor {
            RiskFactor::ThreatEventFrequency => &self.tef,
            RiskFactor::Vulnerability => &self.vulnerability,
            RiskFactor::PrimaryLoss => &self.primary_loss,
        }
    }

    /// Secondary loss multiplier applied to primary loss.
    #[inline]
    pub fn slm_factor(&self) -> f64 {
        self.slm_factor
    }

    /// Number of simulated years.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// VaR confidence level in percent.
    #[inline]
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// RNG seed for the run.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `iterations` is outside `[MIN_ITERATIONS, MAX_ITERATIONS]`
    /// - `confidence` is not in the open interval (0, 100)
    /// - `slm_factor` is negative or non-finite
    /// - any factor specification is invalid for its role
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_ITERATIONS..=MAX_ITERATIONS).contains(&self.iterations) {
            return Err(ConfigError::InvalidIterationCount(self.iterations));
        }
        if !(self.confidence > 0.0 && self.confidence < 100.0) {
            return Err(ConfigError::InvalidConfidence(self.confidence));
        }
        if !(self.slm_factor.is_finite() && self.slm_factor >= 0.0) {
            return Err(ConfigError::InvalidSlmFactor(self.slm_factor));
        }
        for factor in RiskFactor::ALL {
            self.factor(factor).validate_for(factor)?;
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// The three factor specifications are required; everything else falls
/// back to the `DEFAULT_*` constants.
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    tef: Option<FactorSpec>,
    vulnerability: Option<FactorSpec>,
    primary_loss: Option<FactorSpec>,
    slm_factor: Option<f64>,
    iterations: Option<usize>,
    confidence: Option<f64>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the Threat Event Frequency specification.
    #[inline]
    pub fn tef(mut self, spec: FactorSpec) -> Self {
        self.tef = Some(spec);
        self
    }

    /// Sets the Vulnerability specification.
    #[inline]
    pub fn vulnerability(mut self, spec: FactorSpec) -> Self {
        self.vulnerability = Some(spec);
        self
    }

    /// Sets the Primary Loss Magnitude specification.
    #[inline]
    pub fn primary_loss(mut self, spec: FactorSpec) -> Self {
        self.primary_loss = Some(spec);
        self
    }

    /// Sets the secondary loss multiplier (`>= 0`).
    #[inline]
    pub fn slm_factor(mut self, slm_factor: f64) -> Self {
        self.slm_factor = Some(slm_factor);
        self
    }

    /// Sets the number of simulated years.
    #[inline]
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Sets the VaR confidence level in percent, e.g. `95.0`.
    #[inline]
    pub fn confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Sets the RNG seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` if a factor specification was not
    /// set, or any error raised by [`SimulationConfig::validate`].
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let config = SimulationConfig {
            tef: self.tef.ok_or(ConfigError::MissingField("tef"))?,
            vulnerability: self
                .vulnerability
                .ok_or(ConfigError::MissingField("vulnerability"))?,
            primary_loss: self
                .primary_loss
                .ok_or(ConfigError::MissingField("primary_loss"))?,
            slm_factor: self.slm_factor.unwrap_or(DEFAULT_SLM_FACTOR),
            iterations: self.iterations.unwrap_or(DEFAULT_ITERATIONS),
            confidence: self.confidence.unwrap_or(DEFAULT_CONFIDENCE),
            seed: self.seed.unwrap_or(DEFAULT_SEED),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> SimulationConfigBuilder {
        SimulationConfig::builder()
            .tef(FactorSpec::range(10.0, 50.0, 200.0))
            .vulnerability(FactorSpec::range(0.10, 0.30, 0.60))
            .primary_loss(FactorSpec::range(10_000.0, 100_000.0, 1_000_000.0))
    }

    #[test]
    fn test_config_builder_defaults() {
        let config = builder().build().unwrap();

        assert_eq!(config.iterations(), DEFAULT_ITERATIONS);
        assert_eq!(config.confidence(), DEFAULT_CONFIDENCE);
        assert_eq!(config.slm_factor(), DEFAULT_SLM_FACTOR);
        assert_eq!(config.seed(), 42);
    }

    #[test]
    fn test_factor_lookup() {
        let config = builder().build().unwrap();
        assert_eq!(
            config.factor(RiskFactor::Vulnerability),
            &FactorSpec::range(0.10, 0.30, 0.60)
        );
        assert_eq!(
            config.factor(RiskFactor::PrimaryLoss),
            config.primary_loss()
        );
    }

    #[test]
    fn test_config_invalid_zero_iterations() {
        let result = builder().iterations(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidIterationCount(0))));
    }

    #[test]
    fn test_config_invalid_too_many_iterations() {
        let result = builder().iterations(MAX_ITERATIONS + 1).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidIterationCount(_))
        ));
    }

    #[test]
    fn test_config_single_iteration_allowed() {
        assert!(builder().iterations(1).build().is_ok());
    }

    #[test]
    fn test_config_confidence_bounds() {
        for c in [0.0, 100.0, -5.0, f64::NAN] {
            assert!(matches!(
                builder().confidence(c).build(),
                Err(ConfigError::InvalidConfidence(_))
            ));
        }
        assert!(builder().confidence(99.9).build().is_ok());
    }

    #[test]
    fn test_config_slm_factor_bounds() {
        assert!(builder().slm_factor(0.0).build().is_ok());
        assert!(matches!(
            builder().slm_factor(-0.1).build(),
            Err(ConfigError::InvalidSlmFactor(_))
        ));
        assert!(matches!(
            builder().slm_factor(f64::INFINITY).build(),
            Err(ConfigError::InvalidSlmFactor(_))
        ));
    }

    #[test]
    fn test_config_missing_factor() {
        let result = SimulationConfig::builder()
            .tef(FactorSpec::point(12.0))
            .primary_loss(FactorSpec::point(1_000.0))
            .build();

        assert_eq!(result, Err(ConfigError::MissingField("vulnerability")));
    }

    #[test]
    fn test_config_propagates_factor_error() {
        let result = builder()
            .vulnerability(FactorSpec::range(0.6, 0.3, 0.1))
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::RangeOrder {
                factor: RiskFactor::Vulnerability,
                ..
            })
        ));
    }
}
