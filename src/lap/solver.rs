//! Maximum-weight perfect matching (Hungarian method).

use super::filter::filter_padded;
use super::padding::pad;
use super::types::{Assignment, Pair, ValidAssignment};
use crate::error::{AssignError, Result};
use crate::matrix::DenseMatrix;

/// Solves the maximum-weight perfect matching on a square matrix.
///
/// Finds a permutation `σ` maximizing `Σ w[i][σ(i)]`. Runs the shortest
/// augmenting path form of the Hungarian method with row/column potentials
/// on the negated weights, one row at a time, in `O(n^3)` time and `O(n)`
/// extra memory.
///
/// Ties are broken deterministically: when several columns reach the same
/// reduced cost, the lowest column index wins. Identical input always
/// produces the identical assignment.
///
/// # Errors
///
/// - [`AssignError::NotSquare`] if `w` is not square.
/// - [`AssignError::NonFiniteWeight`] if any cell is NaN or infinite.
/// - [`AssignError::SolverFailure`] if no augmenting column can be found,
///   which does not happen for finite input.
///
/// # Examples
///
/// ```
/// use u_assign::lap::solve;
/// use u_assign::matrix::DenseMatrix;
///
/// let w = DenseMatrix::from_rows(vec![
///     vec![1.0, 9.0],
///     vec![8.0, 2.0],
/// ]).unwrap();
/// let assignment = solve(&w).unwrap();
/// assert_eq!(assignment.columns(), vec![1, 0]);
/// assert_eq!(assignment.total_weight(&w), 17.0);
/// ```
pub fn solve(w: &DenseMatrix) -> Result<Assignment> {
    if !w.is_square() {
        return Err(AssignError::NotSquare {
            rows: w.rows(),
            cols: w.cols(),
        });
    }
    let n = w.rows();
    if n == 0 {
        return Ok(Assignment::default());
    }
    if let Some((row, col, value)) = w.find_non_finite() {
        return Err(AssignError::NonFiniteWeight { row, col, value });
    }

    // Index 0 is a sentinel in `p` and `way`; rows and columns are 1-based.
    let mut u = vec![0.0f64; n + 1];
    let mut v = vec![0.0f64; n + 1];
    let mut p = vec![0usize; n + 1];
    let mut way = vec![0usize; n + 1];
    let mut minv = vec![f64::INFINITY; n + 1];
    let mut used = vec![false; n + 1];

    for i in 1..=n {
        p[0] = i;
        let mut j0 = 0usize;
        minv.fill(f64::INFINITY);
        used.fill(false);

        loop {
            used[j0] = true;
            let i0 = p[j0];
            let row = w.row(i0 - 1);
            let mut delta = f64::INFINITY;
            let mut j1 = None;

            for j in 1..=n {
                if used[j] {
                    continue;
                }
                // Maximization: minimize the negated weight.
                let cur = -row[j - 1] - u[i0] - v[j];
                if cur < minv[j] {
                    minv[j] = cur;
                    way[j] = j0;
                }
                if minv[j] < delta {
                    delta = minv[j];
                    j1 = Some(j);
                }
            }

            let j1 = j1.ok_or_else(|| {
                AssignError::SolverFailure(format!("no augmenting column for row {}", i - 1))
            })?;

            for j in 0..=n {
                if used[j] {
                    u[p[j]] += delta;
                    v[j] -= delta;
                } else {
                    minv[j] -= delta;
                }
            }

            j0 = j1;
            if p[j0] == 0 {
                break;
            }
        }

        // Flip the augmenting path.
        loop {
            let j1 = way[j0];
            p[j0] = p[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }

    let mut col_of_row = vec![usize::MAX; n];
    for j in 1..=n {
        if p[j] == 0 {
            return Err(AssignError::SolverFailure(format!(
                "column {} left unmatched",
                j - 1
            )));
        }
        col_of_row[p[j] - 1] = j - 1;
    }

    Ok(Assignment::from_pairs(
        col_of_row
            .into_iter()
            .enumerate()
            .map(|(row, col)| Pair::new(row, col))
            .collect(),
    ))
}

/// Solves a rectangular weight matrix: pad, solve, drop padding pairs.
///
/// Returns at most `min(rows, cols)` pairs, ordered by primary index.
pub fn solve_rect(w: &DenseMatrix) -> Result<ValidAssignment> {
    let padded = pad(w);
    let assignment = solve(padded.matrix())?;
    Ok(filter_padded(&assignment, &padded))
}
