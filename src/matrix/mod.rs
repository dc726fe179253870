//! Dense real-valued matrices.
//!
//! Gain, weight, and padded weight matrices all share one row-major
//! representation. Scenarios hold at most a few hundred rows and columns,
//! so a flat `Vec<f64>` is used rather than any sparse structure.

mod dense;

pub use dense::DenseMatrix;
pub(crate) use dense::min_max;
