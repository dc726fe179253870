//! Benefit/gain weighting.
//!
//! Merges a per-pair gain matrix and a per-secondary benefit vector into a
//! single weight matrix:
//!
//! ```text
//! W[s][p] = alpha * benefit[s] + beta * gain[s][p]      alpha + beta = 1
//! ```
//!
//! The benefit is broadcast across every primary column, so it shifts a
//! whole row uniformly and only decides *which* secondaries get matched,
//! while the gain decides *where* they go.

mod combiner;
mod config;

pub use combiner::{combine, combine_with};
pub use config::{Normalization, WeightConfig};
