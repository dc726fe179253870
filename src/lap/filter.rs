//! Removal of padding artifacts from a solved assignment.

use super::padding::PaddedMatrix;
use super::types::{Assignment, ValidAssignment};

/// Drops every pair whose primary index is a padding column.
///
/// Sufficient when only columns were padded (`n_secondary >= n_primary`).
/// The result is ordered by primary index.
pub fn filter(assignment: &Assignment, n_primary: usize) -> ValidAssignment {
    ValidAssignment::new(
        assignment
            .pairs()
            .iter()
            .copied()
            .filter(|p| p.primary < n_primary)
            .collect(),
    )
}

/// Drops every pair that touches a padding row or a padding column of
/// `padded`.
///
/// At most `min(n_secondary, n_primary)` pairs survive.
pub fn filter_padded(assignment: &Assignment, padded: &PaddedMatrix) -> ValidAssignment {
    ValidAssignment::new(
        assignment
            .pairs()
            .iter()
            .copied()
            .filter(|p| !padded.is_padding_col(p.primary) && !padded.is_padding_row(p.secondary))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lap::{pad, Pair};
    use crate::matrix::DenseMatrix;

    #[test]
    fn test_filter_drops_padding_columns() {
        let a = Assignment::from_pairs(vec![
            Pair::new(0, 3),
            Pair::new(1, 0),
            Pair::new(2, 2),
            Pair::new(3, 1),
        ]);
        let valid = filter(&a, 3);
        assert_eq!(
            valid.pairs(),
            &[Pair::new(1, 0), Pair::new(3, 1), Pair::new(2, 2)]
        );
    }

    #[test]
    fn test_filter_padded_drops_rows() {
        let padded = pad(&DenseMatrix::filled(2, 3, 1.0));
        let a = Assignment::from_pairs(vec![Pair::new(0, 2), Pair::new(1, 0), Pair::new(2, 1)]);
        let valid = filter_padded(&a, &padded);
        assert_eq!(valid.pairs(), &[Pair::new(1, 0), Pair::new(0, 2)]);
    }

    #[test]
    fn test_filter_empty() {
        let valid = filter(&Assignment::default(), 0);
        assert!(valid.is_empty());
    }
}
