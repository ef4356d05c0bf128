//! Distribution samplers for the independent risk factors.
//!
//! A [`FactorSampler`] is resolved once per run from a `(RiskFactor,
//! FactorSpec)` pair and then fills index-ordered sample buffers from a
//! caller-owned [`EngineRng`].
//!
//! | Factor | `RangeTriangular` | `MeanStdDev` | `PointEstimate` |
//! |--------|-------------------|--------------|-----------------|
//! | TEF | [`ShiftedTriangular`] | Normal, negatives → 0 | constant |
//! | Vulnerability | Beta-PERT ([`BetaPertShape`]) | rejected | constant |
//! | PLM | [`ShiftedTriangular`] | Lognormal `(ln mean, std / mean)` | constant |

mod beta_pert;
mod pert;

pub use beta_pert::{BetaPertShape, SHAPE_FLOOR};
pub use pert::ShiftedTriangular;

use crq_core::{FactorSpec, RiskFactor};
use rand::Rng;
use rand_distr::{Beta, Distribution, LogNormal, Normal};
use tracing::debug;

use crate::error::SimulationError;
use crate::rng::EngineRng;

/// Normal distribution with negative draws mapped to zero.
///
/// NaN draws are passed through unchanged.
#[derive(Clone, Copy, Debug)]
pub struct ClippedNormal {
    inner: Normal<f64>,
}

impl ClippedNormal {
    /// Creates the sampler for `N(mean, std²)`.
    pub fn new(mean: f64, std: f64) -> Result<Self, rand_distr::NormalError> {
        Ok(Self {
            inner: Normal::new(mean, std)?,
        })
    }
}

impl Distribution<f64> for ClippedNormal {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let x = self.inner.sample(rng);
        if x < 0.0 {
            0.0
        } else {
            x
        }
    }
}

/// A resolved sampler for one risk factor.
#[derive(Clone, Copy, Debug)]
pub enum FactorSampler {
    /// Every sample equals the value; consumes no randomness.
    Constant(f64),
    /// Shifted triangular with clipping, for TEF and PLM ranges.
    ShiftedTriangular(ShiftedTriangular),
    /// Moment-matched Beta, for Vulnerability ranges.
    BetaPert(Beta<f64>),
    /// Normal clipped at zero, for TEF moments.
    ClippedNormal(ClippedNormal),
    /// Lognormal with location `ln(mean)` and scale `std / mean`, for PLM moments.
    LogNormal(LogNormal<f64>),
}

impl FactorSampler {
    /// Resolves the sampler for `spec` in the role of `factor`.
    ///
    /// The specification is re-validated here even if it came from a built
    /// [`SimulationConfig`](crq_core::SimulationConfig).
    ///
    /// # Errors
    ///
    /// - [`SimulationError::Config`] if the spec is invalid for the factor
    /// - [`SimulationError::Distribution`] if a distribution constructor
    ///   refuses the derived parameters
    ///
    /// # Examples
    ///
    /// ```rust
    /// use crq_core::{FactorSpec, RiskFactor};
    /// use crq_engine::rng::EngineRng;
    /// use crq_engine::sampling::FactorSampler;
    ///
    /// let sampler =
    ///     FactorSampler::resolve(RiskFactor::Vulnerability, &FactorSpec::point(0.3)).unwrap();
    /// let samples = sampler.sample_n(4, &mut EngineRng::from_seed(42));
    /// assert_eq!(samples, vec![0.3; 4]);
    /// ```
    pub fn resolve(factor: RiskFactor, spec: &FactorSpec) -> Result<Self, SimulationError> {
        spec.validate_for(factor)?;

        let sampler = match (factor, *spec) {
            (_, FactorSpec::PointEstimate { value }) => FactorSampler::Constant(value),

            (RiskFactor::Vulnerability, FactorSpec::RangeTriangular { min, likely, max }) => {
                match BetaPertShape::from_range(min, likely, max) {
                    BetaPertShape::Beta { alpha, beta } => {
                        debug!(%factor, alpha, beta, "Resolved Beta-PERT sampler");
                        let dist = Beta::new(alpha, beta)
                            .map_err(|e| distribution_error(factor, e))?;
                        FactorSampler::BetaPert(dist)
                    }
                    BetaPertShape::PointMass(mean) => {
                        debug!(%factor, mean, "Degenerate Beta-PERT, using point mass");
                        FactorSampler::Constant(mean)
                    }
                }
            }

            (_, FactorSpec::RangeTriangular { min, likely, max }) => {
                let dist = ShiftedTriangular::new(min, likely, max)
                    .map_err(|e| distribution_error(factor, e))?;
                debug!(%factor, offset = dist.offset(), "Resolved shifted triangular sampler");
                FactorSampler::ShiftedTriangular(dist)
            }

            (RiskFactor::ThreatEventFrequency, FactorSpec::MeanStdDev { mean, std }) => {
                let dist = ClippedNormal::new(mean, std).map_err(|e| distribution_error(factor, e))?;
                FactorSampler::ClippedNormal(dist)
            }

            (RiskFactor::PrimaryLoss, FactorSpec::MeanStdDev { mean, std }) => {
                let (mu, sigma) = (mean.ln(), std / mean);
                debug!(%factor, mu, sigma, "Resolved lognormal sampler");
                let dist = LogNormal::new(mu, sigma).map_err(|e| distribution_error(factor, e))?;
                FactorSampler::LogNormal(dist)
            }

            (RiskFactor::Vulnerability, FactorSpec::MeanStdDev { .. }) => {
                return Err(crq_core::ConfigError::UnsupportedSpec {
                    factor,
                    spec: spec.kind_name(),
                }
                .into());
            }
        };

        Ok(sampler)
    }

    /// Whether sampling consumes randomness.
    #[inline]
    pub fn is_random(&self) -> bool {
        !matches!(self, FactorSampler::Constant(_))
    }

    /// Fills `buffer` in index order.
    pub fn fill(&self, rng: &mut EngineRng, buffer: &mut [f64]) {
        match self {
            FactorSampler::Constant(value) => buffer.fill(*value),
            FactorSampler::ShiftedTriangular(dist) => rng.fill_from(dist, buffer),
            FactorSampler::BetaPert(dist) => rng.fill_from(dist, buffer),
            FactorSampler::ClippedNormal(dist) => rng.fill_from(dist, buffer),
            FactorSampler::LogNormal(dist) => rng.fill_from(dist, buffer),
        }
    }

    /// Draws `n` samples into a new vector.
    pub fn sample_n(&self, n: usize, rng: &mut EngineRng) -> Vec<f64> {
        let mut samples = vec![0.0; n];
        self.fill(rng, &mut samples);
        samples
    }
}

fn distribution_error(factor: RiskFactor, err: impl std::fmt::Display) -> SimulationError {
    SimulationError::Distribution {
        factor,
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crq_core::ConfigError;

    fn draw(factor: RiskFactor, spec: FactorSpec, n: usize) -> Vec<f64> {
        FactorSampler::resolve(factor, &spec)
            .unwrap()
            .sample_n(n, &mut EngineRng::from_seed(42))
    }

    #[test]
    fn test_point_estimate_is_constant_for_every_factor() {
        for factor in RiskFactor::ALL {
            let sampler = FactorSampler::resolve(factor, &FactorSpec::point(0.3)).unwrap();
            assert!(!sampler.is_random());
            assert_eq!(draw(factor, FactorSpec::point(0.3), 50), vec![0.3; 50]);
        }
    }

    #[test]
    fn test_constant_consumes_no_randomness() {
        let constant = FactorSampler::Constant(1.0);
        let uniform = rand_distr::Uniform::new(0.0, 1.0);

        let mut rng = EngineRng::from_seed(5);
        let mut fresh = EngineRng::from_seed(5);
        let _ = constant.sample_n(100, &mut rng);

        assert_eq!(rng.sample(&uniform), fresh.sample(&uniform));
    }

    #[test]
    fn test_vulnerability_range_uses_beta() {
        let sampler =
            FactorSampler::resolve(RiskFactor::Vulnerability, &FactorSpec::range(0.1, 0.3, 0.6))
                .unwrap();
        assert!(matches!(sampler, FactorSampler::BetaPert(_)));

        let samples = sampler.sample_n(10_000, &mut EngineRng::from_seed(42));
        assert!(samples.iter().all(|v| (0.0..=1.0).contains(v)));

        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        assert_relative_eq!(mean, 1.9 / 6.0, epsilon = 0.01);
    }

    #[test]
    fn test_degenerate_vulnerability_is_point_mass() {
        let sampler =
            FactorSampler::resolve(RiskFactor::Vulnerability, &FactorSpec::range(0.4, 0.4, 0.4))
                .unwrap();
        let FactorSampler::Constant(value) = sampler else {
            panic!("expected a constant sampler");
        };
        assert_relative_eq!(value, 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_tef_range_within_bounds() {
        let samples = draw(
            RiskFactor::ThreatEventFrequency,
            FactorSpec::range(10.0, 50.0, 200.0),
            5_000,
        );
        assert!(samples.iter().all(|v| (10.0..=200.0).contains(v)));
    }

    #[test]
    fn test_tef_normal_clipped_at_zero() {
        // Mean one std above zero: roughly 16% of draws are clipped.
        let samples = draw(
            RiskFactor::ThreatEventFrequency,
            FactorSpec::mean_std(5.0, 5.0),
            5_000,
        );
        assert!(samples.iter().all(|&v| v >= 0.0));
        assert!(samples.iter().any(|&v| v == 0.0));
    }

    #[test]
    fn test_plm_lognormal_strictly_positive() {
        let samples = draw(
            RiskFactor::PrimaryLoss,
            FactorSpec::mean_std(100_000.0, 50_000.0),
            10_000,
        );
        assert!(samples.iter().all(|&v| v > 0.0));

        // Median of the approximation is exp(ln(mean)) = mean.
        let mut sorted = samples.clone();
        sorted.sort_by(f64::total_cmp);
        let median = sorted[sorted.len() / 2];
        assert_relative_eq!(median, 100_000.0, max_relative = 0.05);
    }

    #[test]
    fn test_vulnerability_moments_rejected() {
        let err = FactorSampler::resolve(
            RiskFactor::Vulnerability,
            &FactorSpec::mean_std(0.3, 0.1),
        )
        .unwrap_err();
        assert_eq!(
            err,
            SimulationError::Config(ConfigError::UnsupportedSpec {
                factor: RiskFactor::Vulnerability,
                spec: "mean_std_dev",
            })
        );
    }

    #[test]
    fn test_invalid_spec_rejected_before_sampling() {
        let err = FactorSampler::resolve(
            RiskFactor::PrimaryLoss,
            &FactorSpec::range(100.0, 10.0, 1_000.0),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SimulationError::Config(ConfigError::RangeOrder { .. })
        ));
    }

    #[test]
    fn test_same_seed_same_samples() {
        let spec = FactorSpec::range(10_000.0, 100_000.0, 1_000_000.0);
        assert_eq!(
            draw(RiskFactor::PrimaryLoss, spec, 1_000),
            draw(RiskFactor::PrimaryLoss, spec, 1_000)
        );
    }
}
