//! Descriptive statistics over sample slices.
//!
//! All functions are generic over `T: Float` and return `None` for empty
//! input rather than panicking. NaN values are not filtered: they
//! propagate into the result so that ill-posed simulations stay visible.

use num_traits::Float;

/// Arithmetic mean.
///
/// # Examples
///
/// ```
/// use crq_core::math::stats::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
/// assert_eq!(mean::<f64>(&[]), None);
/// ```
pub fn mean<T: Float>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let n = T::from(values.len())?;
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    Some(sum / n)
}

/// Population standard deviation (divisor `n`, not `n - 1`).
///
/// Uses the two-pass formulation around the mean.
///
/// # Examples
///
/// ```
/// use crq_core::math::stats::population_std_dev;
///
/// let std = population_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert!((std - 2.0_f64).abs() < 1e-12);
/// ```
pub fn population_std_dev<T: Float>(values: &[T]) -> Option<T> {
    let mu = mean(values)?;
    let n = T::from(values.len())?;
    let sum_sq = values.iter().fold(T::zero(), |acc, &v| {
        let d = v - mu;
        acc + d * d
    });
    Some((sum_sq / n).sqrt())
}

/// Percentile of an ascending-sorted slice using linear interpolation
/// between closest ranks.
///
/// For `p` in `[0, 100]` the fractional rank is `p / 100 · (n - 1)`; the
/// result is interpolated between the two neighbouring order statistics
/// (the "linear" method of common numerical libraries).
/// When the rank is integral the order statistic itself is returned, so
/// `percentile_of_sorted(s, 50)` is exactly the median of an odd-length slice.
///
/// Returns `None` for an empty slice or `p` outside `[0, 100]`.
///
/// # Examples
///
/// ```
/// use crq_core::math::stats::percentile_of_sorted;
///
/// let sorted = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(percentile_of_sorted(&sorted, 0.0), Some(1.0));
/// assert_eq!(percentile_of_sorted(&sorted, 50.0), Some(2.5));
/// assert_eq!(percentile_of_sorted(&sorted, 100.0), Some(4.0));
/// assert_eq!(percentile_of_sorted(&sorted, 101.0), None);
/// ```
pub fn percentile_of_sorted<T: Float>(sorted: &[T], p: T) -> Option<T> {
    let n = sorted.len();
    let hundred = T::from(100.0)?;
    if n == 0 || !(p >= T::zero() && p <= hundred) {
        return None;
    }

    let rank = p / hundred * T::from(n - 1)?;
    let lower = rank.floor();
    let lo = lower.to_usize()?.min(n - 1);
    let hi = (lo + 1).min(n - 1);
    let frac = rank - lower;

    let a = sorted[lo];
    if frac == T::zero() || lo == hi {
        return Some(a);
    }
    let b = sorted[hi];
    let diff = b - a;
    // Interpolate from the nearer endpoint so the result stays within [a, b].
    if frac >= T::from(0.5)? {
        Some(b - diff * (T::one() - frac))
    } else {
        Some(a + diff * frac)
    }
}
