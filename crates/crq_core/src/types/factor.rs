//! Risk factors and their probabilistic parameterisations.
//!
//! A [`FactorSpec`] describes how one independent input of the
//! frequency × vulnerability × magnitude model is estimated. The same
//! variant is sampled differently depending on the [`RiskFactor`] it is
//! attached to, so validation is always performed against a role.

use std::fmt;

use super::error::ConfigError;

/// The independent inputs of the risk model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RiskFactor {
    /// Threat Event Frequency: attack attempts per year.
    ThreatEventFrequency,
    /// Probability that an attempt succeeds, in `[0, 1]`.
    Vulnerability,
    /// Primary Loss Magnitude: direct loss per event.
    PrimaryLoss,
}

impl RiskFactor {
    /// All factors in sampling order.
    pub const ALL: [RiskFactor; 3] = [
        RiskFactor::ThreatEventFrequency,
        RiskFactor::Vulnerability,
        RiskFactor::PrimaryLoss,
    ];

    /// Short display name.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            RiskFactor::ThreatEventFrequency => "TEF",
            RiskFactor::Vulnerability => "Vulnerability",
            RiskFactor::PrimaryLoss => "PLM",
        }
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameterisation of a single risk factor.
///
/// # Variants
/// - `RangeTriangular`: three-point estimate (minimum, most likely, maximum)
/// - `MeanStdDev`: first two moments
/// - `PointEstimate`: a fixed value
///
/// # Examples
/// ```
/// use crq_core::{FactorSpec, RiskFactor};
///
/// let spec = FactorSpec::range(10.0, 50.0, 200.0);
/// assert!(spec.validate_for(RiskFactor::ThreatEventFrequency).is_ok());
/// assert_eq!(spec.pert_mean(), Some((10.0 + 4.0 * 50.0 + 200.0) / 6.0));
///
/// let bad = FactorSpec::range(0.5, 0.2, 0.9);
/// assert!(bad.validate_for(RiskFactor::Vulnerability).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum FactorSpec {
    /// Three-point range estimate.
    RangeTriangular {
        /// Lower bound.
        min: f64,
        /// Most likely value.
        likely: f64,
        /// Upper bound.
        max: f64,
    },
    /// Mean and standard deviation.
    MeanStdDev {
        /// Mean.
        mean: f64,
        /// Standard deviation, strictly positive.
        std: f64,
    },
    /// Single fixed value.
    PointEstimate {
        /// The value.
        value: f64,
    },
}

impl FactorSpec {
    /// Creates a three-point range estimate.
    #[inline]
    pub fn range(min: f64, likely: f64, max: f64) -> Self {
        FactorSpec::RangeTriangular { min, likely, max }
    }

    /// Creates a mean / standard deviation estimate.
    #[inline]
    pub fn mean_std(mean: f64, std: f64) -> Self {
        FactorSpec::MeanStdDev { mean, std }
    }

    /// Creates a fixed point estimate.
    #[inline]
    pub fn point(value: f64) -> Self {
        FactorSpec::PointEstimate { value }
    }

    /// Variant name as used in scenario files.
    pub fn kind_name(&self) -> &'static str {
        match self {
            FactorSpec::RangeTriangular { .. } => "range_triangular",
            FactorSpec::MeanStdDev { .. } => "mean_std_dev",
            FactorSpec::PointEstimate { .. } => "point_estimate",
        }
    }

    /// PERT mean `(min + 4·likely + max) / 6` of a range estimate.
    ///
    /// Returns `None` for the other variants.
    #[inline]
    pub fn pert_mean(&self) -> Option<f64> {
        match *self {
            FactorSpec::RangeTriangular { min, likely, max } => {
                Some((min + 4.0 * likely + max) / 6.0)
            }
            _ => None,
        }
    }

    /// Validates the parameterisation for the given factor role.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - any parameter is NaN or infinite
    /// - a range violates `min <= likely <= max`
    /// - a standard deviation is not strictly positive
    /// - a value lies outside the factor's domain (negative frequency or
    ///   loss, vulnerability outside `[0, 1]`, non-positive lognormal mean)
    /// - the variant is not defined for the factor (`MeanStdDev` vulnerability)
    pub fn validate_for(&self, factor: RiskFactor) -> Result<(), ConfigError> {
        match *self {
            FactorSpec::RangeTriangular { min, likely, max } => {
                check_finite(factor, "min", min)?;
                check_finite(factor, "likely", likely)?;
                check_finite(factor, "max", max)?;
                if !(min <= likely && likely <= max) {
                    return Err(ConfigError::RangeOrder {
                        factor,
                        min,
                        likely,
                        max,
                    });
                }
                check_domain(factor, "min", min)?;
                check_domain(factor, "max", max)
            }
            FactorSpec::MeanStdDev { mean, std } => {
                check_finite(factor, "mean", mean)?;
                check_finite(factor, "std", std)?;
                if std <= 0.0 {
                    return Err(ConfigError::NonPositiveStdDev { factor, std });
                }
                match factor {
                    RiskFactor::ThreatEventFrequency => check_domain(factor, "mean", mean),
                    RiskFactor::PrimaryLoss if mean <= 0.0 => Err(ConfigError::OutOfBounds {
                        factor,
                        field: "mean",
                        value: mean,
                        reason: "must be strictly positive",
                    }),
                    RiskFactor::PrimaryLoss => Ok(()),
                    RiskFactor::Vulnerability => Err(ConfigError::UnsupportedSpec {
                        factor,
                        spec: self.kind_name(),
                    }),
                }
            }
            FactorSpec::PointEstimate { value } => {
                check_finite(factor, "value", value)?;
                check_domain(factor, "value", value)
            }
        }
    }
}

fn check_finite(factor: RiskFactor, field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { factor, field })
    }
}

fn check_domain(factor: RiskFactor, field: &'static str, value: f64) -> Result<(), ConfigError> {
    let (valid, reason) = match factor {
        RiskFactor::Vulnerability => ((0.0..=1.0).contains(&value), "must lie in [0, 1]"),
        _ => (value >= 0.0, "must be non-negative"),
    };
    if valid {
        Ok(())
    } else {
        Err(ConfigError::OutOfBounds {
            factor,
            field,
            value,
            reason,
        })
    }
}
