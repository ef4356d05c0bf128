//! Sequential Monte Carlo driver.

use crq_core::{RiskFactor, SimulationConfig};
use tracing::{debug, info};

use super::parallel::ParallelConfig;
use crate::error::SimulationError;
use crate::pipeline::combine;
use crate::rng::EngineRng;
use crate::sampling::FactorSampler;
use crate::vectors::SampleVectors;

/// Monte Carlo simulator for one validated configuration.
///
/// Samplers are resolved once at construction; each call to [`run`](Self::run)
/// creates its own generator from the configured seed, so repeated runs of
/// the same simulator are bit-identical.
///
/// # Examples
///
/// ```rust
/// use crq_core::{FactorSpec, SimulationConfig};
/// use crq_engine::mc::RiskSimulator;
///
/// let config = SimulationConfig::builder()
///     .tef(FactorSpec::range(10.0, 50.0, 200.0))
///     .vulnerability(FactorSpec::range(0.10, 0.30, 0.60))
///     .primary_loss(FactorSpec::range(10_000.0, 100_000.0, 1_000_000.0))
///     .iterations(1_000)
///     .build()
///     .unwrap();
///
/// let simulator = RiskSimulator::new(config).unwrap();
/// let first = simulator.run().unwrap();
/// let second = simulator.run().unwrap();
///
/// assert_eq!(first.len(), 1_000);
/// assert_eq!(first, second);
/// ```
#[derive(Clone, Debug)]
pub struct RiskSimulator {
    config: SimulationConfig,
    tef: FactorSampler,
    vulnerability: FactorSampler,
    primary_loss: FactorSampler,
}

impl RiskSimulator {
    /// Creates a simulator, validating the configuration and resolving the
    /// three factor samplers.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError`] if the configuration is invalid or a
    /// distribution cannot be constructed.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;

        let tef = FactorSampler::resolve(RiskFactor::ThreatEventFrequency, config.tef())?;
        let vulnerability = FactorSampler::resolve(RiskFactor::Vulnerability, config.vulnerability())?;
        let primary_loss = FactorSampler::resolve(RiskFactor::PrimaryLoss, config.primary_loss())?;

        Ok(Self {
            config,
            tef,
            vulnerability,
            primary_loss,
        })
    }

    /// The configuration this simulator was built from.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs the full iteration count sequentially with a generator seeded
    /// from the configuration.
    pub fn run(&self) -> Result<SampleVectors, SimulationError> {
        let mut rng = EngineRng::from_seed(self.config.seed());
        self.run_with_rng(&mut rng)
    }

    /// Runs the full iteration count drawing from `rng`.
    ///
    /// Draw order is the TEF vector, then the Vulnerability vector, then the
    /// PLM vector.
    pub fn run_with_rng(&self, rng: &mut EngineRng) -> Result<SampleVectors, SimulationError> {
        let n = self.config.iterations();
        info!(
            iterations = n,
            seed = rng.seed(),
            "Starting sequential simulation"
        );

        let vectors = self.sample_block(n, rng)?;

        info!(
            iterations = vectors.len(),
            non_finite = vectors.non_finite_ale_count(),
            "Sequential simulation complete"
        );
        Ok(vectors)
    }

    /// Runs with chunk-parallel sampling when the iteration count reaches
    /// the configured threshold, sequentially otherwise.
    pub fn run_parallel(&self, parallel: &ParallelConfig) -> Result<SampleVectors, SimulationError> {
        let n = self.config.iterations();
        if !parallel.should_parallelize(n) {
            debug!(
                iterations = n,
                threshold = parallel.parallel_threshold,
                "Below parallel threshold, running sequentially"
            );
            return self.run();
        }
        super::parallel::run_chunked(self, parallel)
    }

    /// Samples `n` years from `rng` and combines them.
    pub(crate) fn sample_block(
        &self,
        n: usize,
        rng: &mut EngineRng,
    ) -> Result<SampleVectors, SimulationError> {
        let tef = self.tef.sample_n(n, rng);
        let vulnerability = self.vulnerability.sample_n(n, rng);
        let primary_loss = self.primary_loss.sample_n(n, rng);

        combine(tef, vulnerability, primary_loss, self.config.slm_factor())
    }
}
