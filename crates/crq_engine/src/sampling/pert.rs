//! Shifted-triangular range sampler used for frequencies and loss magnitudes.
//!
//! This is deliberately *not* a textbook Beta-PERT. Draws come from a
//! triangular distribution on `[min - likely, max - likely]` with mode `0`,
//! are shifted by the PERT mean `(min + 4·likely + max) / 6` and clipped back
//! into `[min, max]`. The sample mean is therefore pulled towards the PERT
//! mean while the support stays within the original bounds, and mass piles
//! up at whichever bound the shift pushes against.

use rand::Rng;
use rand_distr::{Distribution, Triangular, TriangularError};

/// Triangular spread around zero, shifted to the PERT mean and clipped.
///
/// # Examples
///
/// ```rust
/// use crq_engine::rng::EngineRng;
/// use crq_engine::sampling::ShiftedTriangular;
///
/// let dist = ShiftedTriangular::new(10.0, 50.0, 200.0).unwrap();
/// let mut rng = EngineRng::from_seed(42);
/// let mut buffer = vec![0.0; 1000];
/// rng.fill_from(&dist, &mut buffer);
///
/// assert!(buffer.iter().all(|&v| (10.0..=200.0).contains(&v)));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ShiftedTriangular {
    /// PERT mean added to every draw.
    offset: f64,
    /// Lower clip bound (`min`).
    lower: f64,
    /// Upper clip bound (`max`).
    upper: f64,
    /// Triangular on `[min - likely, max - likely]`, mode 0.
    spread: Triangular<f64>,
}

impl ShiftedTriangular {
    /// Builds the sampler from a three-point estimate.
    ///
    /// # Errors
    ///
    /// Returns the `rand_distr` error when `min <= likely <= max` does not hold.
    pub fn new(min: f64, likely: f64, max: f64) -> Result<Self, TriangularError> {
        let spread = Triangular::new(min - likely, max - likely, 0.0)?;
        Ok(Self {
            offset: (min + 4.0 * likely + max) / 6.0,
            lower: min,
            upper: max,
            spread,
        })
    }

    /// The PERT mean added to each triangular draw.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Clip bounds `(min, max)`.
    #[inline]
    pub fn bounds(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }
}

impl Distribution<f64> for ShiftedTriangular {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // lower <= upper holds by construction, so clamp cannot panic.
        (self.offset + self.spread.sample(rng)).clamp(self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::EngineRng;
    use approx::assert_relative_eq;

    #[test]
    fn test_offset_is_pert_mean() {
        let dist = ShiftedTriangular::new(10_000.0, 100_000.0, 1_000_000.0).unwrap();
        assert_relative_eq!(dist.offset(), 1_410_000.0 / 6.0, epsilon = 1e-9);
        assert_eq!(dist.bounds(), (10_000.0, 1_000_000.0));
    }

    #[test]
    fn test_invalid_order_rejected() {
        assert!(ShiftedTriangular::new(10.0, 5.0, 20.0).is_err());
        assert!(ShiftedTriangular::new(10.0, 25.0, 20.0).is_err());
    }

    #[test]
    fn test_degenerate_range_is_constant() {
        let dist = ShiftedTriangular::new(7.0, 7.0, 7.0).unwrap();
        let mut rng = EngineRng::from_seed(42);
        let mut buffer = vec![0.0; 100];
        rng.fill_from(&dist, &mut buffer);
        assert!(buffer.iter().all(|&v| v == 7.0));
    }

    #[test]
    fn test_samples_clipped_to_bounds() {
        // Right-skewed range: the shift pushes draws against the upper bound.
        let dist = ShiftedTriangular::new(10.0, 50.0, 200.0).unwrap();
        let mut rng = EngineRng::from_seed(42);
        let mut buffer = vec![0.0; 20_000];
        rng.fill_from(&dist, &mut buffer);

        assert!(buffer.iter().all(|&v| (10.0..=200.0).contains(&v)));
        assert!(buffer.iter().any(|&v| v == 200.0));
    }

    #[test]
    fn test_symmetric_range_centred_on_likely() {
        let dist = ShiftedTriangular::new(0.0, 50.0, 100.0).unwrap();
        let mut rng = EngineRng::from_seed(42);
        let mut buffer = vec![0.0; 50_000];
        rng.fill_from(&dist, &mut buffer);

        let mean = buffer.iter().sum::<f64>() / buffer.len() as f64;
        assert_relative_eq!(mean, 50.0, epsilon = 1.0);
    }
}
