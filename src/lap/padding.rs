//! Square padding for rectangular weight matrices.

use crate::matrix::DenseMatrix;

/// A square weight matrix together with the shape it was padded from.
///
/// Rows `n_secondary..side` and columns `n_primary..side` are padding and
/// hold zeros.
#[derive(Debug, Clone, PartialEq)]
pub struct PaddedMatrix {
    matrix: DenseMatrix,
    n_secondary: usize,
    n_primary: usize,
}

impl PaddedMatrix {
    /// The square matrix handed to the solver.
    pub fn matrix(&self) -> &DenseMatrix {
        &self.matrix
    }

    /// Number of genuine rows.
    pub fn n_secondary(&self) -> usize {
        self.n_secondary
    }

    /// Number of genuine columns.
    pub fn n_primary(&self) -> usize {
        self.n_primary
    }

    /// Side length of the square matrix.
    pub fn side(&self) -> usize {
        self.matrix.rows()
    }

    pub fn padding_cols(&self) -> usize {
        self.side() - self.n_primary
    }

    pub fn padding_rows(&self) -> usize {
        self.side() - self.n_secondary
    }

    pub fn is_padding_col(&self, col: usize) -> bool {
        col >= self.n_primary
    }

    pub fn is_padding_row(&self, row: usize) -> bool {
        row >= self.n_secondary
    }

    pub fn into_inner(self) -> DenseMatrix {
        self.matrix
    }
}

/// Pads `w` to a `max(rows, cols)` square with zeros.
///
/// - `rows > cols`: appends `rows - cols` zero columns.
/// - `cols > rows`: appends `cols - rows` zero rows.
/// - square: the matrix is copied unchanged.
///
/// # Examples
///
/// ```
/// use u_assign::lap::pad;
/// use u_assign::matrix::DenseMatrix;
///
/// let w = DenseMatrix::from_rows(vec![vec![1.0], vec![2.0], vec![3.0]]).unwrap();
/// let padded = pad(&w);
/// assert_eq!(padded.side(), 3);
/// assert_eq!(padded.padding_cols(), 2);
/// assert_eq!(padded.matrix().row(1), &[2.0, 0.0, 0.0]);
/// ```
pub fn pad(w: &DenseMatrix) -> PaddedMatrix {
    let (rows, cols) = w.shape();
    let side = rows.max(cols);

    let matrix = if rows == cols {
        w.clone()
    } else {
        DenseMatrix::from_fn(side, side, |r, c| {
            if r < rows && c < cols {
                w.get(r, c)
            } else {
                0.0
            }
        })
    };

    PaddedMatrix {
        matrix,
        n_secondary: rows,
        n_primary: cols,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_unchanged() {
        let w = DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let padded = pad(&w);
        assert_eq!(padded.matrix(), &w);
        assert_eq!(padded.padding_cols(), 0);
        assert_eq!(padded.padding_rows(), 0);
    }

    #[test]
    fn test_tall_gets_columns() {
        let w = DenseMatrix::filled(4, 3, 1.0);
        let padded = pad(&w);
        assert_eq!(padded.side(), 4);
        assert_eq!(padded.padding_cols(), 1);
        assert_eq!(padded.padding_rows(), 0);
        for r in 0..4 {
            assert_eq!(padded.matrix().row(r), &[1.0, 1.0, 1.0, 0.0]);
        }
        assert!(padded.is_padding_col(3));
        assert!(!padded.is_padding_row(3));
    }

    #[test]
    fn test_wide_gets_rows() {
        let w = DenseMatrix::filled(2, 4, 5.0);
        let padded = pad(&w);
        assert_eq!(padded.side(), 4);
        assert_eq!(padded.padding_rows(), 2);
        assert_eq!(padded.matrix().row(1), &[5.0; 4]);
        assert_eq!(padded.matrix().row(2), &[0.0; 4]);
        assert_eq!(padded.matrix().row(3), &[0.0; 4]);
    }

    #[test]
    fn test_zero_columns() {
        let w = DenseMatrix::zeros(3, 0);
        let padded = pad(&w);
        assert_eq!(padded.side(), 3);
        assert_eq!(padded.padding_cols(), 3);
        assert!(padded.matrix().as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_empty() {
        let padded = pad(&DenseMatrix::zeros(0, 0));
        assert_eq!(padded.side(), 0);
        assert_eq!(padded.into_inner().shape(), (0, 0));
    }
}
