//! Scenario pipeline.

use super::aggregator::aggregate;
use super::config::{AssignmentStrategy, ScenarioConfig};
use super::types::ScenarioResult;
use crate::error::{AssignError, Result};
use crate::lap::{greedy, solve_rect, ValidAssignment};
use crate::matrix::DenseMatrix;
use crate::weighting::combine_with;

/// Runs the assignment pipeline for one scenario.
pub struct ScenarioRunner;

impl ScenarioRunner {
    /// Solves one scenario.
    ///
    /// A scenario with no secondaries or no primaries is not an error: it
    /// yields zero metrics and an empty pairing without invoking the solver.
    ///
    /// # Errors
    ///
    /// - [`AssignError::InvalidConfig`] if `config` fails validation.
    /// - [`AssignError::DimensionMismatch`] if `gain.rows() != benefit.len()`;
    ///   checked before any solving.
    /// - [`AssignError::NonFiniteWeight`] if the combined weights hold NaN
    ///   or infinity, whichever strategy is selected.
    /// - [`AssignError::SolverFailure`] from the solver.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_assign::matrix::DenseMatrix;
    /// use u_assign::scenario::{ScenarioConfig, ScenarioRunner};
    /// use u_assign::weighting::WeightConfig;
    ///
    /// let gain = DenseMatrix::from_rows(vec![
    ///     vec![1.0, 0.0],
    ///     vec![0.0, 1.0],
    ///     vec![0.5, 0.5],
    /// ]).unwrap();
    /// let config = ScenarioConfig::default().with_weights(WeightConfig::new(0.0));
    /// let result = ScenarioRunner::run(&gain, &[10.0, 1.0, 1.0], &config).unwrap();
    /// assert_eq!(result.combined_objective, 2.0);
    /// assert_eq!(result.pairing.get(&1), Some(&1));
    /// assert_eq!(result.pairing.get(&2), Some(&2));
    /// ```
    pub fn run(gain: &DenseMatrix, benefit: &[f64], config: &ScenarioConfig) -> Result<ScenarioResult> {
        config.validate().map_err(AssignError::InvalidConfig)?;

        let weights = combine_with(gain, benefit, &config.weights)?;

        if let Some((row, col, value)) = weights.find_non_finite() {
            return Err(AssignError::NonFiniteWeight { row, col, value });
        }

        let valid = if weights.is_empty() {
            ValidAssignment::default()
        } else {
            match config.strategy {
                AssignmentStrategy::Hungarian => solve_rect(&weights)?,
                AssignmentStrategy::Greedy => greedy(gain, &weights)?,
            }
        };

        let result = aggregate(&valid, gain, benefit, &weights).with_gain_report(config.gain_report);

        tracing::debug!(
            n_secondary = gain.rows(),
            n_primary = gain.cols(),
            matched = result.matched(),
            combined_objective = result.combined_objective,
            total_benefit = result.total_benefit,
            total_gain = result.total_gain,
            "scenario solved"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::GainReport;
    use crate::weighting::WeightConfig;

    fn gain_3x2() -> DenseMatrix {
        DenseMatrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![0.5, 0.5]]).unwrap()
    }

    #[test]
    fn test_end_to_end_pure_gain() {
        let config = ScenarioConfig::default().with_weights(WeightConfig::new(0.0));
        let result = ScenarioRunner::run(&gain_3x2(), &[10.0, 1.0, 1.0], &config).unwrap();

        assert_eq!(result.combined_objective, 2.0);
        let pairs: Vec<(usize, usize)> = result.pairing.iter().map(|(&p, &s)| (p, s)).collect();
        assert_eq!(pairs, vec![(1, 1), (2, 2)]);
        assert!(!result.pairing.values().any(|&s| s == 3));
        assert_eq!(result.total_benefit, 11.0);
    }

    #[test]
    fn test_pure_benefit_prefers_high_bid() {
        let config = ScenarioConfig::default().with_weights(WeightConfig::new(1.0));
        let result = ScenarioRunner::run(&gain_3x2(), &[10.0, 1.0, 2.0], &config).unwrap();
        assert_eq!(result.combined_objective, result.total_benefit);
        assert_eq!(result.total_benefit, 12.0);
        assert!(result.pairing.values().any(|&s| s == 1));
        assert!(result.pairing.values().any(|&s| s == 3));
    }

    #[test]
    fn test_dimension_mismatch_before_solving() {
        let err = ScenarioRunner::run(&gain_3x2(), &[1.0, 2.0], &ScenarioConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            AssignError::DimensionMismatch {
                gain_rows: 3,
                benefit_len: 2
            }
        ));
    }

    #[test]
    fn test_empty_scenario() {
        let gain = DenseMatrix::zeros(0, 3);
        let result = ScenarioRunner::run(&gain, &[], &ScenarioConfig::default()).unwrap();
        assert_eq!(result.combined_objective, 0.0);
        assert_eq!(result.total_benefit, 0.0);
        assert!(result.pairing.is_empty());
    }

    #[test]
    fn test_no_primaries() {
        let gain = DenseMatrix::zeros(3, 0);
        let result = ScenarioRunner::run(&gain, &[1.0, 2.0, 3.0], &ScenarioConfig::default()).unwrap();
        assert_eq!(result.total_benefit, 0.0);
        assert!(result.pairing.is_empty());
    }

    #[test]
    fn test_more_primaries_than_secondaries() {
        let gain = DenseMatrix::from_rows(vec![vec![0.2, 0.9, 0.4], vec![0.8, 0.7, 0.1]]).unwrap();
        let config = ScenarioConfig::default()
            .with_weights(WeightConfig::new(0.0))
            .with_gain_report(GainReport::Sum);
        let result = ScenarioRunner::run(&gain, &[1.0, 1.0], &config).unwrap();
        assert_eq!(result.matched(), 2);
        assert_eq!(result.pairing.get(&2), Some(&1));
        assert_eq!(result.pairing.get(&1), Some(&2));
        assert!((result.total_gain - 1.7).abs() < 1e-12);
    }

    #[test]
    fn test_greedy_strategy() {
        let config = ScenarioConfig::default()
            .with_weights(WeightConfig::new(0.0))
            .with_strategy(AssignmentStrategy::Greedy);
        let result = ScenarioRunner::run(&gain_3x2(), &[10.0, 1.0, 1.0], &config).unwrap();
        assert_eq!(result.matched(), 2);
        assert!(result.combined_objective <= 2.0);
    }

    #[test]
    fn test_non_finite_gain_fails_for_every_strategy() {
        let gain = DenseMatrix::from_rows(vec![vec![f64::NAN, 1.0], vec![0.5, 0.2]]).unwrap();
        for strategy in [AssignmentStrategy::Hungarian, AssignmentStrategy::Greedy] {
            let config = ScenarioConfig::default()
                .with_weights(WeightConfig::new(0.0))
                .with_strategy(strategy);
            let err = ScenarioRunner::run(&gain, &[1.0, 1.0], &config).unwrap_err();
            assert!(
                matches!(err, AssignError::NonFiniteWeight { row: 0, col: 0, .. }),
                "{strategy:?}: {err}"
            );
        }
    }

    #[test]
    fn test_invalid_config() {
        let config = ScenarioConfig::default().with_weights(WeightConfig::default().with_weights(0.2, 0.2));
        let err = ScenarioRunner::run(&gain_3x2(), &[1.0; 3], &config).unwrap_err();
        assert!(matches!(err, AssignError::InvalidConfig(_)));
    }
}
