//! Risk pipeline: elementwise combination of the sampled factors.
//!
//! ```text
//! LEF = TEF ⊙ Vuln
//! SLM = PLM · slm_factor
//! LM  = PLM + SLM
//! ALE = LEF ⊙ LM
//! ```
//!
//! No clipping is applied. A NaN in any input reaches ALE unchanged.

use crate::error::SimulationError;
use crate::vectors::SampleVectors;

/// Combines the three factor vectors into the full set of sample vectors.
///
/// # Errors
///
/// Returns [`SimulationError::LengthMismatch`] when the inputs are not all
/// the same length.
///
/// # Examples
///
/// ```rust
/// use crq_engine::pipeline::combine;
///
/// let vectors = combine(vec![10.0, 20.0], vec![0.5, 0.25], vec![1_000.0, 2_000.0], 0.5).unwrap();
/// assert_eq!(vectors.lef(), &[5.0, 5.0]);
/// assert_eq!(vectors.loss_magnitude(), &[1_500.0, 3_000.0]);
/// assert_eq!(vectors.ale(), &[7_500.0, 15_000.0]);
/// ```
pub fn combine(
    tef: Vec<f64>,
    vulnerability: Vec<f64>,
    primary_loss: Vec<f64>,
    slm_factor: f64,
) -> Result<SampleVectors, SimulationError> {
    let n = tef.len();
    for actual in [vulnerability.len(), primary_loss.len()] {
        if actual != n {
            return Err(SimulationError::LengthMismatch { expected: n, actual });
        }
    }

    let lef: Vec<f64> = tef.iter().zip(&vulnerability).map(|(t, v)| t * v).collect();
    let secondary_loss: Vec<f64> = primary_loss.iter().map(|p| p * slm_factor).collect();
    let loss_magnitude: Vec<f64> = primary_loss
        .iter()
        .zip(&secondary_loss)
        .map(|(p, s)| p + s)
        .collect();
    let ale: Vec<f64> = lef.iter().zip(&loss_magnitude).map(|(f, m)| f * m).collect();

    Ok(SampleVectors::from_parts(
        tef,
        vulnerability,
        lef,
        primary_loss,
        secondary_loss,
        loss_magnitude,
        ale,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_slm_factor() {
        let vectors = combine(vec![2.0], vec![0.5], vec![100.0], 0.0).unwrap();
        assert_eq!(vectors.secondary_loss(), &[0.0]);
        assert_eq!(vectors.loss_magnitude(), &[100.0]);
        assert_eq!(vectors.ale(), &[100.0]);
    }

    #[test]
    fn test_nan_propagates_to_ale() {
        let vectors = combine(vec![1.0, 2.0], vec![f64::NAN, 0.5], vec![10.0, 10.0], 0.5).unwrap();
        assert!(vectors.lef()[0].is_nan());
        assert!(vectors.ale()[0].is_nan());
        assert_eq!(vectors.ale()[1], 15.0);
        assert_eq!(vectors.non_finite_ale_count(), 1);
    }

    #[test]
    fn test_length_mismatch() {
        let err = combine(vec![1.0, 2.0], vec![0.5, 0.5], vec![10.0], 0.5).unwrap_err();
        assert_eq!(
            err,
            SimulationError::LengthMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_empty_inputs() {
        let vectors = combine(vec![], vec![], vec![], 0.5).unwrap();
        assert!(vectors.is_empty());
    }
}
