//! Scenario configuration.

use crate::weighting::WeightConfig;

/// Algorithm used to match secondaries to primaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AssignmentStrategy {
    /// Optimal maximum-weight matching (padding + Hungarian method).
    #[default]
    Hungarian,

    /// Quality-ranked greedy selection. Fast, not optimal.
    Greedy,
}

/// Which gain figure is reported as a scenario's `total_gain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GainReport {
    /// Gain of the last matched pair in secondary order. Kept for
    /// compatibility with previously published result files.
    #[default]
    LastPair,

    /// Sum of gains over all matched pairs.
    Sum,
}

/// Configuration for solving one scenario.
///
/// # Examples
///
/// ```
/// use u_assign::scenario::{AssignmentStrategy, GainReport, ScenarioConfig};
/// use u_assign::weighting::WeightConfig;
///
/// let config = ScenarioConfig::default()
///     .with_weights(WeightConfig::new(0.3))
///     .with_strategy(AssignmentStrategy::Hungarian)
///     .with_gain_report(GainReport::Sum);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioConfig {
    /// Benefit/gain weights.
    pub weights: WeightConfig,

    /// Matching algorithm.
    pub strategy: AssignmentStrategy,

    /// Reported gain figure.
    pub gain_report: GainReport,
}

impl ScenarioConfig {
    pub fn with_weights(mut self, weights: WeightConfig) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_strategy(mut self, strategy: AssignmentStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_gain_report(mut self, report: GainReport) -> Self {
        self.gain_report = report;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.weights.validate()
    }
}
