//! Linear assignment on rectangular weight matrices.
//!
//! The pipeline for one weight matrix is:
//!
//! 1. [`pad`] — append zero columns (or rows) until the matrix is square.
//! 2. [`solve`] — maximum-weight perfect matching on the square matrix
//!    (Kuhn-Munkres with dual potentials, `O(n^3)`).
//! 3. [`filter_padded`] — drop every pair that touches a padding row or
//!    column and order the rest by primary index.
//!
//! [`solve_rect`] runs all three. [`greedy`] is a non-optimal baseline that
//! skips padding entirely.
//!
//! # Negative weights
//!
//! Padding cells are zero. With non-negative weights a padding cell never
//! displaces a genuine match, but a real pair whose weight is negative can
//! lose to a padding cell and end up unmatched.
//!
//! # References
//!
//! - Kuhn (1955), "The Hungarian Method for the Assignment Problem"
//! - Munkres (1957), "Algorithms for the Assignment and Transportation Problems"
//! - Jonker & Volgenant (1987), "A Shortest Augmenting Path Algorithm for
//!   Dense and Sparse Linear Assignment Problems"

mod filter;
mod greedy;
mod padding;
mod solver;
mod types;

pub use filter::{filter, filter_padded};
pub use greedy::greedy;
pub use padding::{pad, PaddedMatrix};
pub use solver::{solve, solve_rect};
pub use types::{Assignment, Pair, ValidAssignment};
