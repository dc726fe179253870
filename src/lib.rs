//! Weighted rectangular assignment engine.
//!
//! Matches secondary entities (bidders, requesters) to primary entities
//! (slots, resources) so as to maximize a linear blend of a per-secondary
//! benefit and a per-pair gain, then reports the pairing and the
//! aggregate objective values. Many independent scenarios can be run as a
//! batch.
//!
//! - **Matrix**: dense row-major `f64` matrices for gain, weight, and
//!   padded weight data.
//! - **Weighting**: builds `W = alpha * benefit + beta * gain` with
//!   optional bid multiplier and min-max normalization.
//! - **LAP**: zero padding of rectangular matrices, an `O(n^3)` Hungarian
//!   solver for the maximum-weight perfect matching, padding removal, and a
//!   greedy baseline.
//! - **Scenario**: the full pipeline for one scenario and its metrics
//!   (combined objective, total benefit, total gain).
//! - **Batch**: CSV loading, per-scenario pairing files, run-wide summary
//!   files, optional parallel execution.
//!
//! # Architecture
//!
//! Everything below [`batch`] is pure: no I/O, no shared state, identical
//! output for identical input. The batch layer owns all file access and is
//! the only place where results are accumulated.
//!
//! # Example
//!
//! ```
//! use u_assign::matrix::DenseMatrix;
//! use u_assign::scenario::{ScenarioConfig, ScenarioRunner};
//! use u_assign::weighting::WeightConfig;
//!
//! let gain = DenseMatrix::from_rows(vec![
//!     vec![0.9, 0.1],
//!     vec![0.4, 0.8],
//!     vec![0.3, 0.2],
//! ]).unwrap();
//! let bids = [2.0, 1.0, 5.0];
//!
//! let config = ScenarioConfig::default().with_weights(WeightConfig::new(0.5));
//! let result = ScenarioRunner::run(&gain, &bids, &config).unwrap();
//! assert_eq!(result.matched(), 2);
//! ```

pub mod batch;
pub mod error;
pub mod lap;
pub mod matrix;
pub mod scenario;
pub mod weighting;

pub use error::{AssignError, Result};
