//! Error type shared by every stage of the assignment pipeline.

use std::path::PathBuf;

/// Errors produced while building, solving, or persisting a scenario.
///
/// Errors from the pure core (`DimensionMismatch`, `NotSquare`,
/// `NonFiniteWeight`, `SolverFailure`) indicate bad input or a broken
/// invariant and are never swallowed. The batch layer records any of these
/// against the scenario that produced it and moves on to the next one.
#[derive(Debug, thiserror::Error)]
pub enum AssignError {
    /// Gain matrix row count differs from the benefit vector length.
    #[error("gain matrix has {gain_rows} rows but benefit vector has {benefit_len} entries")]
    DimensionMismatch { gain_rows: usize, benefit_len: usize },

    /// Two matrices that must share a shape do not.
    #[error("matrix shape {got:?} does not match expected {expected:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// A row of a matrix literal or CSV file has the wrong width.
    #[error("row {row} has {got} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// The solver was handed a non-square matrix.
    #[error("assignment matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// NaN or infinite weight; the solver only accepts finite reals.
    #[error("non-finite weight {value} at ({row}, {col})")]
    NonFiniteWeight { row: usize, col: usize, value: f64 },

    /// The benefit source has no column with the requested name.
    #[error("column '{column}' not found in {} (found: {found:?})", .path.display())]
    MissingColumn {
        column: String,
        path: PathBuf,
        found: Vec<String>,
    },

    /// A CSV cell or line could not be interpreted.
    #[error("parse error in {} at line {line}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The solver could not complete a perfect matching.
    #[error("assignment solver failed: {0}")]
    SolverFailure(String),

    /// A configuration value was rejected by `validate()`.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AssignError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AssignError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AssignError>;
