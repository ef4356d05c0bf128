//! Statistics Aggregator: scalar summaries of the ALE distribution.
//!
//! Percentiles use linear interpolation between ranks; mean and standard
//! deviation use divisor `n`. NaN samples are not filtered: they propagate
//! into mean and standard deviation and sort last (IEEE total order), so
//! they surface in `max` and the upper percentiles.

use crq_core::math::{mean, percentile_of_sorted, population_std_dev};
use crq_engine::SampleVectors;
use rayon::prelude::*;

use crate::error::RiskError;

/// Percentile levels always reported alongside VaR.
pub const REPORTED_PERCENTILES: [f64; 5] = [50.0, 75.0, 90.0, 95.0, 99.0];

/// Sample count from which sorting runs on the rayon pool.
const PARALLEL_SORT_THRESHOLD: usize = 100_000;

/// Returns an ascending copy of `samples` under IEEE total ordering.
pub fn sorted_copy(samples: &[f64]) -> Vec<f64> {
    let mut sorted = samples.to_vec();
    if sorted.len() >= PARALLEL_SORT_THRESHOLD {
        sorted.par_sort_unstable_by(f64::total_cmp);
    } else {
        sorted.sort_unstable_by(f64::total_cmp);
    }
    sorted
}

/// Summary of an ALE sample.
///
/// # Examples
///
/// ```rust
/// use crq_risk::statistics::SummaryStatistics;
///
/// let ale = [400.0, 100.0, 300.0, 200.0, 500.0];
/// let stats = SummaryStatistics::from_samples(&ale, 95.0).unwrap();
///
/// assert_eq!(stats.mean, 300.0);
/// assert_eq!(stats.median, 300.0);
/// assert_eq!(stats.value_at_risk, 480.0);
/// assert_eq!(stats.range(), 400.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SummaryStatistics {
    /// Number of samples.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// 50th percentile.
    pub median: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
    /// Confidence level of `value_at_risk`, in percent.
    pub confidence: f64,
    /// `confidence`-th percentile.
    pub value_at_risk: f64,
    /// `(level, value)` for each of [`REPORTED_PERCENTILES`].
    pub percentiles: [(f64, f64); 5],
    /// NaN or infinite samples.
    pub non_finite_count: usize,
}

impl SummaryStatistics {
    /// Computes the summary of `samples` with VaR at `confidence` percent.
    ///
    /// # Errors
    ///
    /// - [`RiskError::EmptySample`] if `samples` is empty
    /// - [`RiskError::InvalidConfidence`] unless `0 < confidence < 100`
    pub fn from_samples(samples: &[f64], confidence: f64) -> Result<Self, RiskError> {
        Self::with_sorted(samples, &sorted_copy(samples), confidence)
    }

    /// Computes the summary when an ascending copy is already available.
    ///
    /// `sorted` must hold the same values as `samples`, ordered by
    /// [`f64::total_cmp`].
    pub fn with_sorted(samples: &[f64], sorted: &[f64], confidence: f64) -> Result<Self, RiskError> {
        if !(confidence > 0.0 && confidence < 100.0) {
            return Err(RiskError::InvalidConfidence(confidence));
        }
        let (Some(&min), Some(&max)) = (sorted.first(), sorted.last()) else {
            return Err(RiskError::EmptySample);
        };
        let at = |level: f64| percentile_of_sorted(sorted, level).ok_or(RiskError::EmptySample);

        let mut percentiles = [(0.0, 0.0); 5];
        for (slot, level) in percentiles.iter_mut().zip(REPORTED_PERCENTILES) {
            *slot = (level, at(level)?);
        }

        Ok(Self {
            count: samples.len(),
            mean: mean(samples).ok_or(RiskError::EmptySample)?,
            median: at(50.0)?,
            std_dev: population_std_dev(samples).ok_or(RiskError::EmptySample)?,
            min,
            max,
            confidence,
            value_at_risk: at(confidence)?,
            percentiles,
            non_finite_count: samples.iter().filter(|v| !v.is_finite()).count(),
        })
    }

    /// Value at one of the reported percentile levels.
    pub fn percentile(&self, level: f64) -> Option<f64> {
        self.percentiles
            .iter()
            .find(|(l, _)| *l == level)
            .map(|&(_, value)| value)
    }

    /// `max - min`.
    #[inline]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Means of the per-factor sample vectors.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComponentMeans {
    /// Mean Threat Event Frequency.
    pub tef: f64,
    /// Mean Vulnerability.
    pub vulnerability: f64,
    /// Mean Loss Event Frequency.
    pub lef: f64,
    /// Mean Primary Loss Magnitude.
    pub primary_loss: f64,
    /// Mean Secondary Loss Magnitude.
    pub secondary_loss: f64,
    /// Mean total Loss Magnitude.
    pub loss_magnitude: f64,
}

impl ComponentMeans {
    /// Computes the component means of a run.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::EmptySample`] for an empty run.
    pub fn from_vectors(vectors: &SampleVectors) -> Result<Self, RiskError> {
        let m = |v: &[f64]| mean(v).ok_or(RiskError::EmptySample);
        Ok(Self {
            tef: m(vectors.tef())?,
            vulnerability: m(vectors.vulnerability())?,
            lef: m(vectors.lef())?,
            primary_loss: m(vectors.primary_loss())?,
            secondary_loss: m(vectors.secondary_loss())?,
            loss_magnitude: m(vectors.loss_magnitude())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_percentiles() {
        let samples: Vec<f64> = (1..=10).map(f64::from).collect();
        let stats = SummaryStatistics::from_samples(&samples, 90.0).unwrap();

        assert_relative_eq!(stats.median, 5.5, epsilon = 1e-12);
        assert_relative_eq!(stats.percentile(75.0).unwrap(), 7.75, epsilon = 1e-12);
        assert_relative_eq!(stats.percentile(99.0).unwrap(), 9.91, epsilon = 1e-12);
        assert_eq!(stats.value_at_risk, stats.percentile(90.0).unwrap());
        assert_eq!(stats.percentile(42.0), None);
    }

    #[test]
    fn test_population_std_dev() {
        let stats = SummaryStatistics::from_samples(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], 95.0)
            .unwrap();
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.std_dev, 2.0);
        assert_eq!(stats.count, 8);
    }

    #[test]
    fn test_median_is_fiftieth_percentile() {
        let samples = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        let stats = SummaryStatistics::from_samples(&samples, 95.0).unwrap();
        assert_eq!(stats.median, stats.percentile(50.0).unwrap());
    }

    #[test]
    fn test_single_sample() {
        let stats = SummaryStatistics::from_samples(&[42.0], 95.0).unwrap();
        assert_eq!(stats.median, 42.0);
        assert_eq!(stats.value_at_risk, 42.0);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.range(), 0.0);
    }

    #[test]
    fn test_empty_and_invalid_confidence() {
        assert_eq!(
            SummaryStatistics::from_samples(&[], 95.0),
            Err(RiskError::EmptySample)
        );
        assert_eq!(
            SummaryStatistics::from_samples(&[1.0], 100.0),
            Err(RiskError::InvalidConfidence(100.0))
        );
        assert!(SummaryStatistics::from_samples(&[1.0], f64::NAN).is_err());
    }

    #[test]
    fn test_nan_propagates() {
        let stats = SummaryStatistics::from_samples(&[1.0, f64::NAN, 3.0], 95.0).unwrap();
        assert!(stats.mean.is_nan());
        assert!(stats.std_dev.is_nan());
        assert!(stats.max.is_nan());
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.non_finite_count, 1);
    }

    #[test]
    fn test_sorted_copy_orders_by_total_cmp() {
        assert_eq!(sorted_copy(&[3.0, -1.0, 2.0]), vec![-1.0, 2.0, 3.0]);
        let large: Vec<f64> = (0..PARALLEL_SORT_THRESHOLD).rev().map(|i| i as f64).collect();
        let sorted = sorted_copy(&large);
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
    }
}
