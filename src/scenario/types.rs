//! Scenario result.

use super::config::GainReport;
use std::collections::BTreeMap;

/// Outcome of one scenario.
///
/// `pairing` maps the one-based primary index to the one-based secondary
/// index matched to it and iterates in ascending primary order. Unmatched
/// primaries and secondaries are absent.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioResult {
    /// Sum of combined weights over matched pairs.
    pub combined_objective: f64,

    /// Sum of benefits of matched secondaries.
    pub total_benefit: f64,

    /// Reported gain figure; see [`GainReport`].
    pub total_gain: f64,

    /// Gain of the last matched pair in secondary order.
    pub total_gain_last: f64,

    /// Sum of gains over all matched pairs.
    pub total_gain_sum: f64,

    /// One-based primary -> one-based secondary.
    pub pairing: BTreeMap<usize, usize>,
}

impl ScenarioResult {
    /// Gain figure selected by `report`.
    pub fn gain(&self, report: GainReport) -> f64 {
        match report {
            GainReport::LastPair => self.total_gain_last,
            GainReport::Sum => self.total_gain_sum,
        }
    }

    /// Sets `total_gain` to the figure selected by `report`.
    pub fn with_gain_report(mut self, report: GainReport) -> Self {
        self.total_gain = self.gain(report);
        self
    }

    /// Number of matched pairs.
    pub fn matched(&self) -> usize {
        self.pairing.len()
    }
}
