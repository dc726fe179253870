//! Single-scenario assignment.
//!
//! A scenario is one gain matrix plus one benefit vector. [`ScenarioRunner`]
//! takes it through the whole pipeline:
//!
//! ```text
//! combine -> pad -> solve -> filter -> aggregate
//! ```
//!
//! and returns an immutable [`ScenarioResult`]. Every step is a pure
//! function of its inputs, so scenarios can be run on any thread in any
//! order.

mod aggregator;
mod config;
mod runner;
mod types;

pub use aggregator::aggregate;
pub use config::{AssignmentStrategy, GainReport, ScenarioConfig};
pub use runner::ScenarioRunner;
pub use types::ScenarioResult;
