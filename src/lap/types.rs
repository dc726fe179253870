//! Assignment value types.

use crate::matrix::DenseMatrix;

/// One matched `(secondary, primary)` pair, zero-based.
///
/// `secondary` indexes rows of the weight matrix, `primary` its columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair {
    pub secondary: usize,
    pub primary: usize,
}

impl Pair {
    pub fn new(secondary: usize, primary: usize) -> Self {
        Self { secondary, primary }
    }
}

/// A complete matching on a square matrix, one pair per row, ordered by row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Assignment {
    pairs: Vec<Pair>,
}

impl Assignment {
    pub(crate) fn from_pairs(pairs: Vec<Pair>) -> Self {
        Self { pairs }
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Column assigned to each row, indexed by row.
    pub fn columns(&self) -> Vec<usize> {
        self.pairs.iter().map(|p| p.primary).collect()
    }

    /// Sum of `matrix[secondary][primary]` over all pairs.
    pub fn total_weight(&self, matrix: &DenseMatrix) -> f64 {
        self.pairs
            .iter()
            .map(|p| matrix.get(p.secondary, p.primary))
            .sum()
    }

    /// True if every row and every column in `0..n` appears exactly once.
    pub fn is_bijection(&self, n: usize) -> bool {
        if self.pairs.len() != n {
            return false;
        }
        let mut row_seen = vec![false; n];
        let mut col_seen = vec![false; n];
        for p in &self.pairs {
            if p.secondary >= n || p.primary >= n || row_seen[p.secondary] || col_seen[p.primary] {
                return false;
            }
            row_seen[p.secondary] = true;
            col_seen[p.primary] = true;
        }
        true
    }
}

/// Matched pairs that involve only genuine rows and columns, ordered by
/// primary index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidAssignment {
    pairs: Vec<Pair>,
}

impl ValidAssignment {
    /// Wraps `pairs`, sorting them by primary index.
    pub fn new(mut pairs: Vec<Pair>) -> Self {
        pairs.sort_by_key(|p| (p.primary, p.secondary));
        Self { pairs }
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Primary index matched to `secondary`, if any.
    pub fn primary_of(&self, secondary: usize) -> Option<usize> {
        self.pairs
            .iter()
            .find(|p| p.secondary == secondary)
            .map(|p| p.primary)
    }

    /// Secondary index matched to `primary`, if any.
    pub fn secondary_of(&self, primary: usize) -> Option<usize> {
        self.pairs
            .binary_search_by_key(&primary, |p| p.primary)
            .ok()
            .map(|i| self.pairs[i].secondary)
    }
}
