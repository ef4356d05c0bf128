//! Risk Classifier: ordinal category of the mean ALE.

use std::fmt;

/// Lower bound of [`RiskLevel::Medium`].
pub const MEDIUM_THRESHOLD: f64 = 100_000.0;
/// Lower bound of [`RiskLevel::High`].
pub const HIGH_THRESHOLD: f64 = 500_000.0;
/// Lower bound of [`RiskLevel::Critical`].
pub const CRITICAL_THRESHOLD: f64 = 2_000_000.0;

/// Risk category, ordered from least to most severe.
///
/// | Mean ALE | Level |
/// |---|---|
/// | `< 100,000` | Low |
/// | `[100,000, 500,000)` | Medium |
/// | `[500,000, 2,000,000)` | High |
/// | `>= 2,000,000` | Critical |
///
/// A NaN mean falls through every comparison and is classified Critical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RiskLevel {
    /// Mean ALE below 100,000.
    Low,
    /// Mean ALE in `[100,000, 500,000)`.
    Medium,
    /// Mean ALE in `[500,000, 2,000,000)`.
    High,
    /// Mean ALE of 2,000,000 or more.
    Critical,
}

impl RiskLevel {
    /// All levels in ascending severity.
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    /// Classifies a mean ALE.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use crq_risk::classification::RiskLevel;
    ///
    /// assert_eq!(RiskLevel::from_mean_ale(99_999.0), RiskLevel::Low);
    /// assert_eq!(RiskLevel::from_mean_ale(100_000.0), RiskLevel::Medium);
    /// assert_eq!(RiskLevel::from_mean_ale(2_000_000.0), RiskLevel::Critical);
    /// ```
    pub fn from_mean_ale(mean_ale: f64) -> Self {
        if mean_ale < MEDIUM_THRESHOLD {
            RiskLevel::Low
        } else if mean_ale < HIGH_THRESHOLD {
            RiskLevel::Medium
        } else if mean_ale < CRITICAL_THRESHOLD {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }

    /// Display label.
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }

    /// Inclusive lower bound of the level's mean ALE band.
    pub fn lower_bound(&self) -> f64 {
        match self {
            RiskLevel::Low => f64::NEG_INFINITY,
            RiskLevel::Medium => MEDIUM_THRESHOLD,
            RiskLevel::High => HIGH_THRESHOLD,
            RiskLevel::Critical => CRITICAL_THRESHOLD,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
