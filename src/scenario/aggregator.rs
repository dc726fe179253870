//! Per-scenario metrics.

use super::types::ScenarioResult;
use crate::lap::ValidAssignment;
use crate::matrix::DenseMatrix;

/// Computes the scenario metrics for a set of matched pairs.
///
/// Pairs are visited in ascending secondary order:
///
/// - `combined_objective` sums `weights[s][p]`.
/// - `total_benefit` sums `benefit[s]`, once per matched secondary.
/// - `total_gain_last` is `gain[s][p]` of the last visited pair.
/// - `total_gain_sum` sums `gain[s][p]`.
///
/// `total_gain` is initialised to `total_gain_last`. An empty assignment
/// yields all-zero metrics and an empty pairing.
///
/// # Panics
///
/// Panics if a pair indexes outside `gain`, `benefit`, or `weights`.
pub fn aggregate(
    valid: &ValidAssignment,
    gain: &DenseMatrix,
    benefit: &[f64],
    weights: &DenseMatrix,
) -> ScenarioResult {
    let mut by_secondary = valid.pairs().to_vec();
    by_secondary.sort_by_key(|p| p.secondary);

    let mut combined_objective = 0.0;
    let mut total_benefit = 0.0;
    let mut total_gain_last = 0.0;
    let mut total_gain_sum = 0.0;

    for pair in &by_secondary {
        let g = gain.get(pair.secondary, pair.primary);
        combined_objective += weights.get(pair.secondary, pair.primary);
        total_benefit += benefit[pair.secondary];
        total_gain_last = g;
        total_gain_sum += g;
    }

    let pairing = valid
        .pairs()
        .iter()
        .map(|p| (p.primary + 1, p.secondary + 1))
        .collect();

    ScenarioResult {
        combined_objective,
        total_benefit,
        total_gain: total_gain_last,
        total_gain_last,
        total_gain_sum,
        pairing,
    }
}
