//! CLI configuration management.
//!
//! Handles loading of experiment settings from an optional TOML file with
//! environment variable override support. Every field has a default that
//! reproduces the reference experiment, so running without a file is the
//! common case.
//!
//! ```toml
//! seed = 42
//!
//! [sweep]
//! sample_start = 1000
//! sample_end = 50000
//! sample_step = 1000
//! runs_per_config = 20
//!
//! [[sweep.boxes]]
//! label = "tight"
//! x_min = 0.7
//! x_max = 2.1
//! y_min = 0.7
//! y_max = 2.1
//!
//! [single]
//! samples = 2000000
//! ```

use std::path::Path;

use area_sampling::mc::{
    ExperimentConfig, SweepConfig, DEFAULT_RUNS_PER_CONFIG, DEFAULT_SAMPLE_END,
    DEFAULT_SAMPLE_START, DEFAULT_SAMPLE_STEP, SINGLE_SHOT_SAMPLES,
};
use geometry_core::shapes::{BoundingBox, Circle};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// Environment variable overriding the seed.
pub const ENV_SEED: &str = "CIRCLE_MC_SEED";

/// Environment variable overriding the runs per sweep cell.
pub const ENV_RUNS: &str = "CIRCLE_MC_RUNS";

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Fixed seed; drawn from OS entropy when absent
    pub seed: Option<u64>,

    /// Convergence sweep settings
    #[serde(default)]
    pub sweep: SweepSettings,

    /// Single-shot settings
    #[serde(default)]
    pub single: SingleSettings,
}

/// Convergence sweep settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SweepSettings {
    /// First sample count
    #[serde(default = "default_sample_start")]
    pub sample_start: usize,

    /// Last sample count (inclusive)
    #[serde(default = "default_sample_end")]
    pub sample_end: usize,

    /// Sample count increment
    #[serde(default = "default_sample_step")]
    pub sample_step: usize,

    /// Estimator runs averaged per row
    #[serde(default = "default_runs_per_config")]
    pub runs_per_config: usize,

    /// Circle set; the reference circles when absent
    pub circles: Option<Vec<Circle>>,

    /// Sweep arms; `tight` and `wide` when absent
    pub boxes: Option<Vec<BoxSettings>>,

    /// Exact area of the common region; required with custom circles
    pub exact_area: Option<f64>,
}

/// One labelled sampling rectangle
///
/// The bounds are read inline (`x_min`, `x_max`, `y_min`, `y_max`) and
/// checked while parsing, so an inverted box is a parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct BoxSettings {
    /// Output label
    pub label: String,
    /// Sampling rectangle
    #[serde(flatten)]
    pub bounds: BoundingBox,
}

/// Single-shot settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SingleSettings {
    /// Samples drawn for the estimate
    #[serde(default = "default_single_samples")]
    pub samples: usize,
}

fn default_sample_start() -> usize {
    DEFAULT_SAMPLE_START
}

fn default_sample_end() -> usize {
    DEFAULT_SAMPLE_END
}

fn default_sample_step() -> usize {
    DEFAULT_SAMPLE_STEP
}

fn default_runs_per_config() -> usize {
    DEFAULT_RUNS_PER_CONFIG
}

fn default_single_samples() -> usize {
    SINGLE_SHOT_SAMPLES
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            sample_start: default_sample_start(),
            sample_end: default_sample_end(),
            sample_step: default_sample_step(),
            runs_per_config: default_runs_per_config(),
            circles: None,
            boxes: None,
            exact_area: None,
        }
    }
}

impl Default for SingleSettings {
    fn default() -> Self {
        Self {
            samples: default_single_samples(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from `path` when given, otherwise use built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup(ENV_SEED) {
            match seed.trim().parse() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => warn!("Ignoring {}={:?}: not an unsigned integer", ENV_SEED, seed),
            }
        }

        if let Some(runs) = lookup(ENV_RUNS) {
            match runs.trim().parse() {
                Ok(runs) => self.sweep.runs_per_config = runs,
                Err(_) => warn!("Ignoring {}={:?}: not an unsigned integer", ENV_RUNS, runs),
            }
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.single.samples == 0 {
            errors.push("single.samples must be greater than 0".to_string());
        }

        if self.sweep.circles.is_some() && self.sweep.exact_area.is_none() {
            errors.push("sweep.exact_area is required when sweep.circles is set".to_string());
        }

        if let Some(circles) = &self.sweep.circles {
            for (i, circle) in circles.iter().enumerate() {
                if let Err(e) = circle.validate() {
                    errors.push(format!("sweep.circles[{}]: {}", i, e));
                }
            }
        }

        if let Some(boxes) = &self.sweep.boxes {
            for b in boxes {
                if b.label.trim().is_empty() {
                    errors.push("sweep.boxes labels cannot be empty".to_string());
                }
                if b.label.chars().any(char::is_whitespace) {
                    errors.push(format!(
                        "sweep.boxes label '{}' cannot contain whitespace",
                        b.label
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Build the sampling-layer sweep configuration
    ///
    /// Unset fields keep their reference values.
    pub fn sweep_config(&self) -> Result<SweepConfig, crate::CliError> {
        let settings = &self.sweep;
        let mut builder = SweepConfig::reference_builder()?
            .sample_range(settings.sample_start, settings.sample_end)
            .sample_step(settings.sample_step)
            .runs_per_config(settings.runs_per_config);

        if let Some(circles) = &settings.circles {
            builder = builder.circles(circles.iter().copied());
        }
        if let Some(exact_area) = settings.exact_area {
            builder = builder.exact_area(exact_area);
        }
        if let Some(boxes) = &settings.boxes {
            builder = builder.experiments(
                boxes
                    .iter()
                    .map(|b| ExperimentConfig::new(b.label.clone(), b.bounds)),
            );
        }

        Ok(builder.build()?)
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
