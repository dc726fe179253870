//! Greedy winner selection.
//!
//! A quick, non-optimal baseline: secondaries are ranked by their mean
//! combined weight over all primaries, and in that order each one claims
//! the primary with the highest raw gain that is still free.

use super::types::{Pair, ValidAssignment};
use crate::error::{AssignError, Result};
use crate::matrix::DenseMatrix;

/// Greedily matches secondaries to primaries.
///
/// `weights` ranks the secondaries (mean of each row, descending, ties by
/// lower index). `gain` orders the primaries each secondary prefers
/// (descending, ties by lower index). Secondaries ranked after every
/// primary is taken stay unmatched.
///
/// Because the benefit term is constant across a row, the row mean of the
/// weight matrix equals `alpha * benefit + beta * mean(gain row)`.
///
/// # Errors
///
/// - [`AssignError::ShapeMismatch`] if `gain` and `weights` differ in shape.
/// - [`AssignError::NonFiniteWeight`] if `weights` holds NaN or infinity.
pub fn greedy(gain: &DenseMatrix, weights: &DenseMatrix) -> Result<ValidAssignment> {
    if gain.shape() != weights.shape() {
        return Err(AssignError::ShapeMismatch {
            expected: gain.shape(),
            got: weights.shape(),
        });
    }
    let (n_secondary, n_primary) = gain.shape();
    if n_secondary == 0 || n_primary == 0 {
        return Ok(ValidAssignment::default());
    }
    if let Some((row, col, value)) = weights.find_non_finite() {
        return Err(AssignError::NonFiniteWeight { row, col, value });
    }

    let quality: Vec<f64> = weights
        .iter_rows()
        .map(|row| row.iter().sum::<f64>() / n_primary as f64)
        .collect();

    let mut order: Vec<usize> = (0..n_secondary).collect();
    order.sort_by(|&a, &b| quality[b].total_cmp(&quality[a]).then(a.cmp(&b)));

    let mut taken = vec![false; n_primary];
    let mut pairs = Vec::with_capacity(n_primary.min(n_secondary));

    for s in order {
        if pairs.len() == n_primary {
            break;
        }
        let row = gain.row(s);
        let mut best: Option<usize> = None;
        for (p, &g) in row.iter().enumerate() {
            if taken[p] {
                continue;
            }
            // Strict comparison keeps the lowest index on ties.
            if best.is_none_or(|b| g > row[b]) {
                best = Some(p);
            }
        }
        if let Some(p) = best {
            taken[p] = true;
            pairs.push(Pair::new(s, p));
        }
    }

    Ok(ValidAssignment::new(pairs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lap::solve_rect;
    use crate::weighting::combine;

    #[test]
    fn test_highest_quality_picks_first() {
        let gain = DenseMatrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![0.9, 0.8]]).unwrap();
        let w = combine(&gain, &[1.0, 1.0, 10.0], 1.0, 0.0).unwrap();
        let valid = greedy(&gain, &w).unwrap();
        // Secondary 2 ranks first and takes primary 0; secondary 0 (tie with
        // 1, lower index) then takes primary 1.
        assert_eq!(valid.pairs(), &[Pair::new(2, 0), Pair::new(0, 1)]);
    }

    #[test]
    fn test_never_beats_optimal() {
        let gain = DenseMatrix::from_rows(vec![
            vec![5.0, 4.0, 1.0],
            vec![4.0, 1.0, 0.0],
            vec![3.0, 0.0, 0.0],
            vec![2.0, 2.0, 2.0],
        ])
        .unwrap();
        let w = combine(&gain, &[0.0; 4], 0.0, 1.0).unwrap();
        let g = greedy(&gain, &w).unwrap();
        let h = solve_rect(&w).unwrap();
        let total = |v: &ValidAssignment| -> f64 {
            v.pairs().iter().map(|p| w.get(p.secondary, p.primary)).sum()
        };
        assert_eq!(g.len(), 3);
        assert!(total(&g) <= total(&h) + 1e-12);
    }

    #[test]
    fn test_more_primaries_than_secondaries() {
        let gain = DenseMatrix::from_rows(vec![vec![0.1, 0.9, 0.5]]).unwrap();
        let w = combine(&gain, &[2.0], 0.5, 0.5).unwrap();
        let valid = greedy(&gain, &w).unwrap();
        assert_eq!(valid.pairs(), &[Pair::new(0, 1)]);
    }

    #[test]
    fn test_shape_mismatch() {
        let gain = DenseMatrix::zeros(3, 2);
        let w = DenseMatrix::zeros(2, 3);
        let err = greedy(&gain, &w).unwrap_err();
        assert!(matches!(
            err,
            AssignError::ShapeMismatch {
                expected: (3, 2),
                got: (2, 3)
            }
        ));
    }

    #[test]
    fn test_rejects_nan_weight() {
        let gain = DenseMatrix::from_rows(vec![vec![f64::NAN, 1.0], vec![0.5, 0.2]]).unwrap();
        let err = greedy(&gain, &gain).unwrap_err();
        assert!(matches!(err, AssignError::NonFiniteWeight { row: 0, col: 0, .. }));
    }

    #[test]
    fn test_empty() {
        let gain = DenseMatrix::zeros(0, 3);
        assert!(greedy(&gain, &gain).unwrap().is_empty());
    }
}
