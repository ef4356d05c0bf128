//! Exceedance Curve Generator: empirical complementary CDF of ALE.
//!
//! For the sample at ascending rank `k` (1-based) of `n`, the exceedance
//! probability is `(n - k + 1) / n · 100`: 100% at the smallest loss and
//! `100 / n`% at the largest.

use crq_core::math::percentile_of_sorted;

use crate::statistics::sorted_copy;

/// Exceedance levels reported by [`ExceedanceCurve::reference_points`], in percent.
pub const REFERENCE_EXCEEDANCE_LEVELS: [f64; 4] = [1.0, 5.0, 10.0, 50.0];

/// Loss thresholds paired with the percentage of years at or above them.
///
/// # Examples
///
/// ```rust
/// use crq_risk::exceedance::ExceedanceCurve;
///
/// let curve = ExceedanceCurve::from_samples(&[30.0, 10.0, 20.0, 40.0]);
/// let points: Vec<(f64, f64)> = curve.points().collect();
///
/// assert_eq!(points, vec![(10.0, 100.0), (20.0, 75.0), (30.0, 50.0), (40.0, 25.0)]);
/// assert_eq!(curve.probability_of_exceeding(25.0), 50.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExceedanceCurve {
    thresholds: Vec<f64>,
    probabilities: Vec<f64>,
}

impl ExceedanceCurve {
    /// Builds the curve from unsorted samples.
    pub fn from_samples(samples: &[f64]) -> Self {
        Self::from_sorted(sorted_copy(samples))
    }

    /// Builds the curve from samples already sorted by [`f64::total_cmp`].
    pub fn from_sorted(thresholds: Vec<f64>) -> Self {
        let n = thresholds.len();
        let total = n as f64;
        let probabilities = (1..=n)
            .map(|k| (n - k + 1) as f64 / total * 100.0)
            .collect();
        Self {
            thresholds,
            probabilities,
        }
    }

    /// Number of points (one per sample).
    #[inline]
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    /// Whether the curve has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// Ascending loss thresholds.
    #[inline]
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Exceedance probabilities in percent, non-increasing.
    #[inline]
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// `(threshold, probability %)` pairs in ascending threshold order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.thresholds
            .iter()
            .copied()
            .zip(self.probabilities.iter().copied())
    }

    /// Percentage of samples `>= threshold`.
    ///
    /// Agrees with the curve at every sample value that is the first of its
    /// tied run. Returns `0.0` for an empty curve.
    pub fn probability_of_exceeding(&self, threshold: f64) -> f64 {
        let n = self.thresholds.len();
        if n == 0 {
            return 0.0;
        }
        let below = self
            .thresholds
            .partition_point(|t| t.total_cmp(&threshold).is_lt());
        (n - below) as f64 / n as f64 * 100.0
    }

    /// Loss exceeded with probability `p` percent, i.e. the `(100 - p)`-th
    /// percentile of the samples.
    ///
    /// Returns `None` for an empty curve or `p` outside `[0, 100]`.
    pub fn loss_at_exceedance(&self, p: f64) -> Option<f64> {
        percentile_of_sorted(&self.thresholds, 100.0 - p)
    }

    /// `(p, loss)` for each of [`REFERENCE_EXCEEDANCE_LEVELS`].
    pub fn reference_points(&self) -> Vec<(f64, f64)> {
        REFERENCE_EXCEEDANCE_LEVELS
            .iter()
            .filter_map(|&p| self.loss_at_exceedance(p).map(|loss| (p, loss)))
            .collect()
    }
}
