//! Batch runs over many scenarios.
//!
//! A batch is an ordered list of [`ScenarioSource`]s. For each source the
//! runner loads the gain matrix and the benefit vector from CSV, solves the
//! scenario, and writes a pairing file. At the end it writes three summary
//! files (combined objective, total benefit, total gain) whose names encode
//! the weights, so runs with different weightings can share a directory.
//!
//! A scenario that fails to load or solve is logged, recorded in
//! [`BatchSummary::failures`], and left out of the summary files; the rest
//! of the batch carries on.
//!
//! # File formats
//!
//! - Gain matrix: header row, then one row per secondary. The first column
//!   is a row label and is ignored; the remaining columns are primaries.
//! - Benefit vector: header row containing a `Bid` column (configurable),
//!   one row per secondary in gain-matrix order.
//! - Pairing output: `Primary User,Secondary User`, one-based, ascending by
//!   primary.
//! - Summary output: `CSV_File,Optimal_Gain`, one row per scenario in
//!   processing order.

mod config;
mod io;
mod runner;
mod summary;

pub use config::{BatchConfig, ScenarioSource};
pub use io::{read_benefit_vector, read_gain_matrix, write_pairing, write_summary};
pub use runner::{BatchReport, BatchRunner, SummaryFiles};
pub use summary::{BatchSummary, ScenarioFailure, SummaryEntry, SummaryMetric};
