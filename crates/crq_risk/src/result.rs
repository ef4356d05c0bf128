//! Run results and the end-to-end simulation entry points.

use crq_core::SimulationConfig;
use crq_engine::{ParallelConfig, RiskSimulator, SampleVectors};
use tracing::{info, warn};

use crate::classification::RiskLevel;
use crate::error::RiskError;
use crate::exceedance::ExceedanceCurve;
use crate::export::{sample_records, SampleRecord, SummaryRecord};
use crate::statistics::{sorted_copy, ComponentMeans, SummaryStatistics};

/// Everything one simulation run produces.
///
/// Created once per run and immutable afterwards.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunResult {
    samples: SampleVectors,
    statistics: SummaryStatistics,
    exceedance: ExceedanceCurve,
    risk_level: RiskLevel,
    component_means: ComponentMeans,
}

impl RunResult {
    /// Reduces sample vectors to a full result with VaR at `confidence`.
    ///
    /// # Errors
    ///
    /// - [`RiskError::EmptySample`] for an empty run
    /// - [`RiskError::InvalidConfidence`] unless `0 < confidence < 100`
    pub fn from_samples(samples: SampleVectors, confidence: f64) -> Result<Self, RiskError> {
        let sorted = sorted_copy(samples.ale());
        let statistics = SummaryStatistics::with_sorted(samples.ale(), &sorted, confidence)?;
        let component_means = ComponentMeans::from_vectors(&samples)?;
        let risk_level = RiskLevel::from_mean_ale(statistics.mean);
        let exceedance = ExceedanceCurve::from_sorted(sorted);

        if statistics.non_finite_count > 0 {
            warn!(
                non_finite = statistics.non_finite_count,
                iterations = statistics.count,
                "Non-finite ALE samples in simulation result"
            );
        }

        Ok(Self {
            samples,
            statistics,
            exceedance,
            risk_level,
            component_means,
        })
    }

    /// Per-sample vectors.
    #[inline]
    pub fn samples(&self) -> &SampleVectors {
        &self.samples
    }

    /// ALE summary statistics.
    #[inline]
    pub fn statistics(&self) -> &SummaryStatistics {
        &self.statistics
    }

    /// Empirical exceedance curve of ALE.
    #[inline]
    pub fn exceedance(&self) -> &ExceedanceCurve {
        &self.exceedance
    }

    /// Classification of the mean ALE.
    #[inline]
    pub fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    /// Means of the factor and intermediate vectors.
    #[inline]
    pub fn component_means(&self) -> &ComponentMeans {
        &self.component_means
    }

    /// Whether any ALE sample is NaN or infinite.
    #[inline]
    pub fn has_non_finite(&self) -> bool {
        self.statistics.non_finite_count > 0
    }

    /// Key-value summary for export.
    pub fn summary_record(&self) -> SummaryRecord {
        SummaryRecord::new(&self.statistics, self.risk_level)
    }

    /// Per-sample export records, in sample order.
    pub fn sample_records(&self) -> impl Iterator<Item = SampleRecord> + '_ {
        sample_records(&self.samples)
    }
}

/// Runs the sequential simulation for `config` and reduces the result.
///
/// # Examples
///
/// ```rust
/// use crq_core::{FactorSpec, SimulationConfig};
/// use crq_risk::run_simulation;
///
/// let config = SimulationConfig::builder()
///     .tef(FactorSpec::range(10.0, 50.0, 200.0))
///     .vulnerability(FactorSpec::range(0.10, 0.30, 0.60))
///     .primary_loss(FactorSpec::range(10_000.0, 100_000.0, 1_000_000.0))
///     .iterations(2_000)
///     .build()
///     .unwrap();
///
/// let result = run_simulation(&config).unwrap();
/// let stats = result.statistics();
///
/// assert!(stats.mean > 0.0);
/// assert!(stats.value_at_risk >= stats.median);
/// assert!(!result.has_non_finite());
/// ```
pub fn run_simulation(config: &SimulationConfig) -> Result<RunResult, RiskError> {
    let simulator = RiskSimulator::new(config.clone())?;
    finish(config, simulator.run()?)
}

/// Runs the chunk-parallel simulation for `config` and reduces the result.
///
/// Falls back to the sequential run below `parallel.parallel_threshold`.
pub fn run_simulation_parallel(
    config: &SimulationConfig,
    parallel: &ParallelConfig,
) -> Result<RunResult, RiskError> {
    let simulator = RiskSimulator::new(config.clone())?;
    finish(config, simulator.run_parallel(parallel)?)
}

fn finish(config: &SimulationConfig, samples: SampleVectors) -> Result<RunResult, RiskError> {
    let result = RunResult::from_samples(samples, config.confidence())?;
    let stats = result.statistics();
    info!(
        iterations = stats.count,
        seed = config.seed(),
        mean_ale = stats.mean,
        value_at_risk = stats.value_at_risk,
        risk_level = %result.risk_level(),
        "Simulation result ready"
    );
    Ok(result)
}
