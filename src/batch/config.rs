//! Batch configuration.

use crate::scenario::ScenarioConfig;
use std::path::{Path, PathBuf};

/// One scenario's input files.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioSource {
    /// Identifier used in summary files.
    pub id: String,

    /// Gain matrix CSV.
    pub gain_path: PathBuf,

    /// Benefit vector CSV.
    pub benefit_path: PathBuf,
}

impl ScenarioSource {
    /// Creates a source whose id is the gain file's name (e.g. `Te_3648_1.csv`).
    pub fn new(gain_path: impl Into<PathBuf>, benefit_path: impl Into<PathBuf>) -> Self {
        let gain_path = gain_path.into();
        let id = gain_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| gain_path.to_string_lossy().into_owned());
        Self {
            id,
            gain_path,
            benefit_path: benefit_path.into(),
        }
    }

    /// Overrides the identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Gain file name without extension, used to name the pairing file.
    pub fn stem(&self) -> String {
        self.gain_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.id.clone())
    }
}

/// Configuration for a batch run.
///
/// # Examples
///
/// ```
/// use u_assign::batch::BatchConfig;
/// use u_assign::scenario::ScenarioConfig;
/// use u_assign::weighting::WeightConfig;
///
/// let config = BatchConfig::default()
///     .with_scenario(ScenarioConfig::default().with_weights(WeightConfig::new(0.3)))
///     .with_output_root("out");
/// assert_eq!(
///     config.summary_file_name(),
///     "Hungarian_alpha0.30_beta0.70OptimalGains.csv"
/// );
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchConfig {
    /// Per-scenario solving parameters.
    pub scenario: ScenarioConfig,

    /// Name of the benefit column in benefit files.
    pub benefit_column: String,

    /// Directory for per-scenario pairing files.
    pub pairing_dir: PathBuf,

    /// Directory for the combined objective summary.
    pub objective_dir: PathBuf,

    /// Directory for the total benefit summary.
    pub benefit_dir: PathBuf,

    /// Directory for the total gain summary.
    pub gain_dir: PathBuf,

    /// Prefix of summary file names.
    pub summary_prefix: String,

    /// Whether to solve scenarios in parallel (requires the `parallel`
    /// feature; ignored otherwise).
    pub parallel: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            scenario: ScenarioConfig::default(),
            benefit_column: "Bid".into(),
            pairing_dir: PathBuf::from("newOutPut"),
            objective_dir: PathBuf::from("HungarianCSV"),
            benefit_dir: PathBuf::from("HungarianCSVBenefit"),
            gain_dir: PathBuf::from("HungarianCSVGain"),
            summary_prefix: "Hungarian".into(),
            parallel: true,
        }
    }
}

impl BatchConfig {
    pub fn with_scenario(mut self, scenario: ScenarioConfig) -> Self {
        self.scenario = scenario;
        self
    }

    pub fn with_benefit_column(mut self, column: impl Into<String>) -> Self {
        self.benefit_column = column.into();
        self
    }

    /// Places all four output directories under `root`, keeping their
    /// default names.
    pub fn with_output_root(mut self, root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        self.pairing_dir = root.join("newOutPut");
        self.objective_dir = root.join("HungarianCSV");
        self.benefit_dir = root.join("HungarianCSVBenefit");
        self.gain_dir = root.join("HungarianCSVGain");
        self
    }

    pub fn with_pairing_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.pairing_dir = dir.into();
        self
    }

    /// Sets the three summary directories (objective, benefit, gain).
    pub fn with_summary_dirs(
        mut self,
        objective: impl Into<PathBuf>,
        benefit: impl Into<PathBuf>,
        gain: impl Into<PathBuf>,
    ) -> Self {
        self.objective_dir = objective.into();
        self.benefit_dir = benefit.into();
        self.gain_dir = gain.into();
        self
    }

    pub fn with_summary_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.summary_prefix = prefix.into();
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Summary file name, e.g. `Hungarian_alpha1.00_beta0.00OptimalGains.csv`.
    pub fn summary_file_name(&self) -> String {
        format!(
            "{}_{}OptimalGains.csv",
            self.summary_prefix,
            self.scenario.weights.label()
        )
    }

    /// Pairing file path for `source`.
    pub fn pairing_path(&self, source: &ScenarioSource) -> PathBuf {
        self.pairing_dir
            .join(format!("optimal_pairings_{}.csv", source.stem()))
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.scenario.validate()?;
        if self.benefit_column.trim().is_empty() {
            return Err("benefit_column must not be empty".into());
        }
        let dirs = [
            &self.objective_dir,
            &self.benefit_dir,
            &self.gain_dir,
        ];
        for (i, a) in dirs.iter().enumerate() {
            if dirs[i + 1..].contains(a) {
                return Err(format!(
                    "summary directories must be distinct, {} is used twice",
                    a.display()
                ));
            }
        }
        Ok(())
    }
}
