//! Batch execution loop.

use super::config::{BatchConfig, ScenarioSource};
use super::io::{read_benefit_vector, read_gain_matrix, write_pairing, write_summary};
use super::summary::{BatchSummary, SummaryMetric};
use crate::error::{AssignError, Result};
use crate::scenario::{ScenarioResult, ScenarioRunner};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Paths of the three summary files written at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryFiles {
    pub objective: PathBuf,
    pub benefit: PathBuf,
    pub gain: PathBuf,
}

/// Result of a batch run.
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// Per-scenario metrics and failures.
    pub summary: BatchSummary,

    /// Pairing files written, in processing order.
    pub pairing_files: Vec<PathBuf>,

    /// Summary files written.
    pub summary_files: SummaryFiles,

    /// Whether the run stopped early on the cancellation flag.
    pub cancelled: bool,
}

/// Executes a batch of scenarios.
pub struct BatchRunner;

impl BatchRunner {
    /// Runs every scenario in `sources` and writes all outputs.
    pub fn run(sources: &[ScenarioSource], config: &BatchConfig) -> Result<BatchReport> {
        Self::run_with_cancel(sources, config, None)
    }

    /// Runs a batch with an optional cancellation token.
    ///
    /// Scenarios not yet started when the flag is raised are skipped; the
    /// summary files are still written for the scenarios that finished.
    ///
    /// # Errors
    ///
    /// Only run-wide problems are returned: an invalid configuration, an
    /// output directory that cannot be created, or a summary file that
    /// cannot be written. Per-scenario errors are recorded in
    /// [`BatchSummary::failures`].
    pub fn run_with_cancel(
        sources: &[ScenarioSource],
        config: &BatchConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<BatchReport> {
        config.validate().map_err(AssignError::InvalidConfig)?;

        for dir in [
            &config.pairing_dir,
            &config.objective_dir,
            &config.benefit_dir,
            &config.gain_dir,
        ] {
            std::fs::create_dir_all(dir).map_err(|e| AssignError::io(dir, e))?;
        }

        tracing::info!(
            scenarios = sources.len(),
            weights = %config.scenario.weights.label(),
            strategy = ?config.scenario.strategy,
            "batch started"
        );

        let is_cancelled = || cancel.as_ref().is_some_and(|flag| flag.load(Ordering::Relaxed));

        let outcomes = solve_all(sources, config, &is_cancelled);

        let mut summary = BatchSummary::new();
        let mut written_pairings: Vec<(&str, PathBuf)> = Vec::with_capacity(sources.len());
        let mut cancelled = false;

        // Single writer: results are folded in source order.
        for (source, outcome) in sources.iter().zip(outcomes) {
            let Some(outcome) = outcome else {
                cancelled = true;
                continue;
            };
            let written = outcome.and_then(|result| {
                let path = config.pairing_path(source);
                write_pairing(&path, &result)?;
                Ok((path, result))
            });
            match written {
                Ok((path, result)) => {
                    summary.record(&source.id, &result);
                    discard_pairings(&mut written_pairings, &source.id, Some(&path));
                    written_pairings.push((&source.id, path));
                }
                Err(err) => {
                    tracing::warn!(scenario = %source.id, error = %err, "scenario failed");
                    summary.record_failure(&source.id, &err);
                    discard_pairings(&mut written_pairings, &source.id, None);
                }
            }
        }
        let pairing_files: Vec<PathBuf> =
            written_pairings.into_iter().map(|(_, path)| path).collect();

        let file_name = config.summary_file_name();
        let summary_files = SummaryFiles {
            objective: config.objective_dir.join(&file_name),
            benefit: config.benefit_dir.join(&file_name),
            gain: config.gain_dir.join(&file_name),
        };
        for (metric, path) in SummaryMetric::ALL.into_iter().zip([
            &summary_files.objective,
            &summary_files.benefit,
            &summary_files.gain,
        ]) {
            write_summary(path, summary.metric(metric))?;
        }

        tracing::info!(
            solved = summary.len(),
            failed = summary.failures().len(),
            cancelled,
            "batch finished"
        );

        Ok(BatchReport {
            summary,
            pairing_files,
            summary_files,
            cancelled,
        })
    }

    /// Loads and solves one scenario without writing anything.
    pub fn solve_source(source: &ScenarioSource, config: &BatchConfig) -> Result<ScenarioResult> {
        let gain = read_gain_matrix(&source.gain_path)?;
        let benefit = read_benefit_vector(&source.benefit_path, &config.benefit_column)?;
        let result = ScenarioRunner::run(&gain, &benefit, &config.scenario)?;
        tracing::debug!(scenario = %source.id, "scenario loaded and solved");
        Ok(result)
    }
}

/// Forgets the pairing files already written under `id` and deletes them,
/// except `keep`, which has just been rewritten.
///
/// Only the last source with a given id may leave a pairing behind, and a
/// failed one leaves none.
fn discard_pairings(written: &mut Vec<(&str, PathBuf)>, id: &str, keep: Option<&Path>) {
    written.retain(|(written_id, path)| {
        if *written_id != id {
            return true;
        }
        if keep == Some(path.as_path()) {
            return false;
        }
        match std::fs::remove_file(path) {
            Ok(()) => tracing::debug!(scenario = id, path = %path.display(), "stale pairing removed"),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!(scenario = id, path = %path.display(), error = %err, "could not remove stale pairing")
            }
        }
        false
    });
}

/// Solves every source, `None` for those skipped after cancellation.
fn solve_all<F>(
    sources: &[ScenarioSource],
    config: &BatchConfig,
    is_cancelled: &F,
) -> Vec<Option<Result<ScenarioResult>>>
where
    F: Fn() -> bool + Sync,
{
    let solve_one = |source: &ScenarioSource| {
        if is_cancelled() {
            None
        } else {
            Some(BatchRunner::solve_source(source, config))
        }
    };

    #[cfg(feature = "parallel")]
    if config.parallel {
        return sources.par_iter().map(solve_one).collect();
    }

    sources.iter().map(solve_one).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{GainReport, ScenarioConfig};
    use crate::weighting::WeightConfig;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        fs::write(path, content).unwrap();
    }

    /// Two good scenarios and one with a short benefit file.
    fn fixture(dir: &Path) -> Vec<ScenarioSource> {
        let input = dir.join("in");
        fs::create_dir_all(&input).unwrap();

        write(&input.join("Te_32_1.csv"), ",P1,P2\n0,1,0\n1,0,1\n2,0.5,0.5\n");
        write(&input.join("FUE_32_1.csv"), "FUE_ID,Bid\nFUE_1,10\nFUE_2,1\nFUE_3,1\n");

        write(&input.join("Te_32_2.csv"), ",P1,P2\n0,0.2,0.9\n1,0.8,0.7\n2,0.1,0.1\n");
        write(&input.join("FUE_32_2.csv"), "FUE_ID,Bid\nFUE_1,1\nFUE_2,2\nFUE_3,3\n");

        write(&input.join("Te_32_3.csv"), ",P1,P2\n0,1,0\n1,0,1\n2,0.5,0.5\n");
        write(&input.join("FUE_32_3.csv"), "FUE_ID,Bid\nFUE_1,10\nFUE_2,1\n");

        (1..=3)
            .map(|i| {
                ScenarioSource::new(
                    input.join(format!("Te_32_{i}.csv")),
                    input.join(format!("FUE_32_{i}.csv")),
                )
            })
            .collect()
    }

    fn pure_gain_config(root: &Path) -> BatchConfig {
        BatchConfig::default()
            .with_scenario(ScenarioConfig::default().with_weights(WeightConfig::new(0.0)))
            .with_output_root(root.join("out"))
            .with_parallel(false)
    }

    #[test]
    fn test_batch_writes_all_outputs() {
        let dir = TempDir::new().unwrap();
        let sources = fixture(dir.path());
        let config = pure_gain_config(dir.path());

        let report = BatchRunner::run(&sources, &config).unwrap();

        assert!(!report.cancelled);
        assert_eq!(report.summary.len(), 2);
        assert_eq!(report.pairing_files.len(), 2);

        let pairing = fs::read_to_string(config.pairing_dir.join("optimal_pairings_Te_32_1.csv")).unwrap();
        assert_eq!(pairing, "Primary User,Secondary User\n1,1\n2,2\n");

        let objective = fs::read_to_string(&report.summary_files.objective).unwrap();
        assert!(report
            .summary_files
            .objective
            .ends_with("HungarianCSV/Hungarian_alpha0.00_beta1.00OptimalGains.csv"));
        let lines: Vec<&str> = objective.lines().collect();
        assert_eq!(lines[0], "CSV_File,Optimal_Gain");
        assert_eq!(lines[1], "Te_32_1.csv,2.0");
        assert!(lines[2].starts_with("Te_32_2.csv,1.7"));
        assert_eq!(lines.len(), 3);

        let benefit = fs::read_to_string(&report.summary_files.benefit).unwrap();
        assert!(benefit.contains("Te_32_1.csv,11.0"));
        assert!(benefit.contains("Te_32_2.csv,3.0"));
    }

    #[test]
    fn test_failed_scenario_is_recorded_not_summarised() {
        let dir = TempDir::new().unwrap();
        let sources = fixture(dir.path());
        let config = pure_gain_config(dir.path());

        let report = BatchRunner::run(&sources, &config).unwrap();

        let failures = report.summary.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].scenario, "Te_32_3.csv");
        assert!(failures[0].error.contains("benefit vector has 2 entries"));

        let gain = fs::read_to_string(&report.summary_files.gain).unwrap();
        assert!(!gain.contains("Te_32_3.csv"));
        assert!(!config.pairing_dir.join("optimal_pairings_Te_32_3.csv").exists());
    }

    #[test]
    fn test_later_failure_removes_earlier_pairing_with_same_id() {
        let dir = TempDir::new().unwrap();
        let fixture = fixture(dir.path());
        let sources = vec![
            fixture[0].clone().with_id("shared.csv"),
            fixture[2].clone().with_id("shared.csv"),
        ];
        let config = pure_gain_config(dir.path());

        let report = BatchRunner::run(&sources, &config).unwrap();

        assert!(report.summary.is_empty());
        assert_eq!(report.summary.failures().len(), 1);
        assert_eq!(report.summary.failures()[0].scenario, "shared.csv");
        assert!(report.pairing_files.is_empty());
        assert!(!config.pairing_path(&sources[0]).exists());
    }

    #[test]
    fn test_repeated_success_keeps_one_pairing_path() {
        let dir = TempDir::new().unwrap();
        let fixture = fixture(dir.path());
        let sources = vec![
            fixture[0].clone().with_id("shared.csv"),
            fixture[1].clone().with_id("shared.csv"),
        ];
        let config = pure_gain_config(dir.path());

        let report = BatchRunner::run(&sources, &config).unwrap();

        assert_eq!(report.summary.len(), 1);
        assert_eq!(report.pairing_files, vec![config.pairing_path(&sources[1])]);
        assert!(report.pairing_files[0].exists());
        assert!(!config.pairing_path(&sources[0]).exists());
    }

    #[test]
    fn test_gain_report_last_pair_vs_sum() {
        let dir = TempDir::new().unwrap();
        let sources = fixture(dir.path());

        let last = BatchRunner::run(&sources[1..2], &pure_gain_config(dir.path())).unwrap();
        // Secondary 0 -> primary 1 (0.9), secondary 1 -> primary 0 (0.8).
        assert_eq!(last.summary.entries()[0].total_gain, 0.8);

        let mut config = pure_gain_config(dir.path());
        config.scenario.gain_report = GainReport::Sum;
        let sum = BatchRunner::run(&sources[1..2], &config).unwrap();
        assert!((sum.summary.entries()[0].total_gain - 1.7).abs() < 1e-12);
    }

    #[test]
    fn test_missing_benefit_column() {
        let dir = TempDir::new().unwrap();
        let sources = fixture(dir.path());
        let config = pure_gain_config(dir.path()).with_benefit_column("Price");

        let report = BatchRunner::run(&sources[..1], &config).unwrap();
        assert!(report.summary.is_empty());
        assert!(report.summary.failures()[0].error.contains("'Price'"));
    }

    #[test]
    fn test_missing_input_file() {
        let dir = TempDir::new().unwrap();
        let sources = vec![ScenarioSource::new(
            dir.path().join("nope.csv"),
            dir.path().join("nope_bids.csv"),
        )];
        let report = BatchRunner::run(&sources, &pure_gain_config(dir.path())).unwrap();
        assert_eq!(report.summary.failures().len(), 1);
    }

    #[test]
    fn test_cancelled_before_start() {
        let dir = TempDir::new().unwrap();
        let sources = fixture(dir.path());
        let cancel = Arc::new(AtomicBool::new(true));

        let report =
            BatchRunner::run_with_cancel(&sources, &pure_gain_config(dir.path()), Some(cancel)).unwrap();

        assert!(report.cancelled);
        assert!(report.summary.is_empty());
        assert!(report.summary.is_complete());
        let objective = fs::read_to_string(&report.summary_files.objective).unwrap();
        assert_eq!(objective, "CSV_File,Optimal_Gain\n");
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let dir = TempDir::new().unwrap();
        let sources = fixture(dir.path());

        let seq = BatchRunner::run(&sources, &pure_gain_config(dir.path())).unwrap();
        let par = BatchRunner::run(&sources, &pure_gain_config(dir.path()).with_parallel(true)).unwrap();

        assert_eq!(seq.summary, par.summary);
    }

    #[test]
    fn test_invalid_config_is_fatal() {
        let dir = TempDir::new().unwrap();
        let config = pure_gain_config(dir.path()).with_summary_dirs("x", "x", "y");
        let err = BatchRunner::run(&[], &config).unwrap_err();
        assert!(matches!(err, AssignError::InvalidConfig(_)));
    }
}
