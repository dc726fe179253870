//! Weight matrix construction.

use super::config::{Normalization, WeightConfig};
use crate::error::{AssignError, Result};
use crate::matrix::DenseMatrix;


/// Combines gain and benefit into `W = alpha * benefit + beta * gain`.
///
/// `benefit[s]` is broadcast across every column of row `s`.
///
/// # Errors
///
/// - [`AssignError::DimensionMismatch`] if `gain.rows() != benefit.len()`.
/// - [`AssignError::InvalidConfig`] if either weight is negative or
///   non-finite, or if they do not sum to one within half a unit of the
///   default two-decimal precision.
///
/// # Examples
///
/// ```
/// use u_assign::matrix::DenseMatrix;
/// use u_assign::weighting::combine;
///
/// let gain = DenseMatrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
/// let w = combine(&gain, &[10.0, 20.0], 0.5, 0.5).unwrap();
/// assert_eq!(w.row(0), &[5.5, 5.0]);
/// assert_eq!(w.row(1), &[10.0, 10.5]);
/// ```
pub fn combine(gain: &DenseMatrix, benefit: &[f64], alpha: f64, beta: f64) -> Result<DenseMatrix> {
    check_weights(alpha, beta, WeightConfig::default().sum_tolerance())?;
    check_rows(gain, benefit)?;
    Ok(weighted_sum(gain, benefit, alpha, beta))
}

/// Combines gain and benefit using a full [`WeightConfig`].
///
/// Applies the configured bid multiplier and normalization to copies of
/// the inputs before combining; the inputs themselves are never modified.
pub fn combine_with(
    gain: &DenseMatrix,
    benefit: &[f64],
    config: &WeightConfig,
) -> Result<DenseMatrix> {
    config.validate().map_err(AssignError::InvalidConfig)?;
    check_rows(gain, benefit)?;

    let mut scaled_benefit: Vec<f64> = benefit.iter().map(|b| b * config.bid_multiplier).collect();

    match config.normalization {
        Normalization::None => Ok(weighted_sum(gain, &scaled_benefit, config.alpha, config.beta)),
        Normalization::MinMax => {
            let mut scaled_gain = gain.clone();
            if let Some((lo, hi)) = scaled_gain.min_max() {
                scaled_gain.map_in_place(|v| min_max_scale(v, lo, hi));
            }
            if let Some((lo, hi)) = crate::matrix::min_max(&scaled_benefit) {
                for b in scaled_benefit.iter_mut() {
                    *b = min_max_scale(*b, lo, hi);
                }
            }
            Ok(weighted_sum(
                &scaled_gain,
                &scaled_benefit,
                config.alpha,
                config.beta,
            ))
        }
    }
}

fn weighted_sum(gain: &DenseMatrix, benefit: &[f64], alpha: f64, beta: f64) -> DenseMatrix {
    DenseMatrix::from_fn(gain.rows(), gain.cols(), |s, p| {
        alpha * benefit[s] + beta * gain.get(s, p)
    })
}

fn min_max_scale(v: f64, lo: f64, hi: f64) -> f64 {
    let range = hi - lo;
    if range > 0.0 {
        (v - lo) / range
    } else {
        0.0
    }
}

fn check_rows(gain: &DenseMatrix, benefit: &[f64]) -> Result<()> {
    if gain.rows() != benefit.len() {
        return Err(AssignError::DimensionMismatch {
            gain_rows: gain.rows(),
            benefit_len: benefit.len(),
        });
    }
    Ok(())
}

fn check_weights(alpha: f64, beta: f64, tolerance: f64) -> Result<()> {
    if !alpha.is_finite() || alpha < 0.0 || !beta.is_finite() || beta < 0.0 {
        return Err(AssignError::InvalidConfig(format!(
            "weights must be finite and non-negative, got alpha={alpha}, beta={beta}"
        )));
    }
    if (alpha + beta - 1.0).abs() > tolerance {
        return Err(AssignError::InvalidConfig(format!(
            "alpha + beta must equal 1, got {}",
            alpha + beta
        )));
    }
    Ok(())
}
