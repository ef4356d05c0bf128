//! Beta-PERT shape derivation for vulnerability ranges.
//!
//! The PERT mean and standard deviation
//!
//! ```text
//! mean = (min + 4·likely + max) / 6
//! std  = (max - min) / 6
//! ```
//!
//! are matched to a `Beta(alpha, beta)` on `[0, 1]` by the method of moments:
//!
//! ```text
//! k     = mean·(1 - mean) / std² - 1
//! alpha = mean·k
//! beta  = (1 - mean)·k
//! ```
//!
//! Both shapes are floored at [`SHAPE_FLOOR`]; a NaN shape is floored too.

/// Lower bound applied to both Beta shape parameters.
pub const SHAPE_FLOOR: f64 = 0.5;

/// Moment-matched Beta parameters for a vulnerability range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BetaPertShape {
    /// Regular case: floored `(alpha, beta)`.
    Beta {
        /// First shape parameter.
        alpha: f64,
        /// Second shape parameter.
        beta: f64,
    },
    /// `std == 0`, or shapes overflowed: all mass sits on the PERT mean.
    PointMass(f64),
}

impl BetaPertShape {
    /// Derives the shape for the range `[min, likely, max]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use crq_engine::sampling::BetaPertShape;
    ///
    /// match BetaPertShape::from_range(0.10, 0.30, 0.60) {
    ///     BetaPertShape::Beta { alpha, beta } => assert!(alpha > 0.5 && beta > alpha),
    ///     BetaPertShape::PointMass(_) => unreachable!(),
    /// }
    ///
    /// assert_eq!(
    ///     BetaPertShape::from_range(0.25, 0.25, 0.25),
    ///     BetaPertShape::PointMass(0.25)
    /// );
    /// ```
    pub fn from_range(min: f64, likely: f64, max: f64) -> Self {
        Self::from_moments((min + 4.0 * likely + max) / 6.0, (max - min) / 6.0)
    }

    /// Derives the shape from a target mean and standard deviation.
    ///
    /// For ranges inside `[0, 1]` both shapes stay at or above 2/3, so the
    /// floor only engages for moments that no valid range produces.
    pub fn from_moments(mean: f64, std: f64) -> Self {
        let variance = std * std;
        if !(variance > 0.0) {
            return BetaPertShape::PointMass(mean);
        }

        let k = mean * (1.0 - mean) / variance - 1.0;
        // f64::max returns the non-NaN operand, so NaN shapes land on the floor.
        let alpha = (mean * k).max(SHAPE_FLOOR);
        let beta = ((1.0 - mean) * k).max(SHAPE_FLOOR);

        if alpha.is_finite() && beta.is_finite() {
            BetaPertShape::Beta { alpha, beta }
        } else {
            BetaPertShape::PointMass(mean)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_shape() {
        let BetaPertShape::Beta { alpha, beta } = BetaPertShape::from_range(0.10, 0.30, 0.60)
        else {
            panic!("expected a regular Beta shape");
        };

        let mean = 1.9 / 6.0;
        let std = 0.5 / 6.0;
        let k = mean * (1.0 - mean) / (std * std) - 1.0;
        assert_relative_eq!(alpha, mean * k, epsilon = 1e-9);
        assert_relative_eq!(beta, (1.0 - mean) * k, epsilon = 1e-9);
    }

    #[test]
    fn test_widest_range_stays_above_floor() {
        let BetaPertShape::Beta { alpha, beta } = BetaPertShape::from_range(0.0, 1.0, 1.0) else {
            panic!("expected a regular Beta shape");
        };
        assert_relative_eq!(alpha, 10.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(beta, 2.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_negative_k_floors_both_shapes() {
        // Variance exceeds mean·(1 - mean), so k < 0.
        assert_eq!(
            BetaPertShape::from_moments(0.9, 0.35),
            BetaPertShape::Beta {
                alpha: SHAPE_FLOOR,
                beta: SHAPE_FLOOR
            }
        );
    }

    #[test]
    fn test_nan_moments_floor_to_minimum() {
        assert_eq!(
            BetaPertShape::from_moments(f64::NAN, 0.1),
            BetaPertShape::Beta {
                alpha: SHAPE_FLOOR,
                beta: SHAPE_FLOOR
            }
        );
    }

    #[test]
    fn test_zero_width_range_is_point_mass() {
        assert_eq!(
            BetaPertShape::from_range(0.0, 0.0, 0.0),
            BetaPertShape::PointMass(0.0)
        );
        assert_eq!(
            BetaPertShape::from_range(1.0, 1.0, 1.0),
            BetaPertShape::PointMass(1.0)
        );
    }

    #[test]
    fn test_underflowing_variance_is_point_mass() {
        assert!(matches!(
            BetaPertShape::from_range(0.0, 0.0, 1e-170),
            BetaPertShape::PointMass(_)
        ));
    }

    #[test]
    fn test_overflowing_shape_is_point_mass() {
        // Subnormal variance: k overflows to infinity.
        assert_eq!(
            BetaPertShape::from_moments(0.5, 1e-160),
            BetaPertShape::PointMass(0.5)
        );
    }
}
