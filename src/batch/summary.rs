//! Run-wide accumulation of scenario results.

use crate::error::AssignError;
use crate::scenario::ScenarioResult;

/// Metric columns written to the three summary files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryMetric {
    CombinedObjective,
    TotalBenefit,
    TotalGain,
}

impl SummaryMetric {
    /// All metrics in summary-file order.
    pub const ALL: [SummaryMetric; 3] = [
        SummaryMetric::CombinedObjective,
        SummaryMetric::TotalBenefit,
        SummaryMetric::TotalGain,
    ];
}

/// One successful scenario's metrics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummaryEntry {
    pub scenario: String,
    pub combined_objective: f64,
    pub total_benefit: f64,
    pub total_gain: f64,
}

impl SummaryEntry {
    pub fn value(&self, metric: SummaryMetric) -> f64 {
        match metric {
            SummaryMetric::CombinedObjective => self.combined_objective,
            SummaryMetric::TotalBenefit => self.total_benefit,
            SummaryMetric::TotalGain => self.total_gain,
        }
    }
}

/// A scenario that could not be loaded, solved, or written.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioFailure {
    pub scenario: String,
    pub error: String,
}

/// Results of a batch, in processing order.
///
/// Recording the same scenario id twice replaces the earlier values but
/// keeps the original position. Failed scenarios are kept apart from the
/// entries so they never appear in the summary files with made-up values.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchSummary {
    entries: Vec<SummaryEntry>,
    failures: Vec<ScenarioFailure>,
}

impl BatchSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successful scenario.
    pub fn record(&mut self, scenario: &str, result: &ScenarioResult) {
        let entry = SummaryEntry {
            scenario: scenario.to_string(),
            combined_objective: result.combined_objective,
            total_benefit: result.total_benefit,
            total_gain: result.total_gain,
        };
        self.failures.retain(|f| f.scenario != scenario);
        match self.entries.iter_mut().find(|e| e.scenario == scenario) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    /// Records a failed scenario, dropping any earlier entry with its id.
    pub fn record_failure(&mut self, scenario: &str, error: &AssignError) {
        self.entries.retain(|e| e.scenario != scenario);
        self.failures.push(ScenarioFailure {
            scenario: scenario.to_string(),
            error: error.to_string(),
        });
    }

    pub fn entries(&self) -> &[SummaryEntry] {
        &self.entries
    }

    pub fn failures(&self) -> &[ScenarioFailure] {
        &self.failures
    }

    pub fn get(&self, scenario: &str) -> Option<&SummaryEntry> {
        self.entries.iter().find(|e| e.scenario == scenario)
    }

    /// `(scenario, value)` pairs for one metric, in processing order.
    pub fn metric(&self, metric: SummaryMetric) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries
            .iter()
            .map(move |e| (e.scenario.as_str(), e.value(metric)))
    }

    /// Number of successful scenarios.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when no scenario failed.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
