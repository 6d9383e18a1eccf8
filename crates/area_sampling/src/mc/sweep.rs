//! Convergence sweep over bounding boxes and sample counts.
//!
//! For every arm of the configuration and every sample count, the estimator
//! is run `runs_per_config` times and the estimated areas and relative
//! errors are averaged into one [`SweepRow`].

use std::fmt;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use super::config::{ExperimentConfig, SweepConfig};
use super::error::EstimationError;
use super::estimator::MonteCarloEstimator;

/// One averaged output row.
///
/// `Display` renders the whitespace-separated text form
/// `<label> <sample_count> <avg_area> <avg_error>`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SweepRow {
    /// Arm label.
    pub label: String,
    /// Samples per run.
    pub sample_count: usize,
    /// Mean estimated area over the runs.
    pub avg_area: f64,
    /// Mean relative error over the runs.
    pub avg_error: f64,
}

impl fmt::Display for SweepRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.label, self.sample_count, self.avg_area, self.avg_error
        )
    }
}

/// Sweep driver.
///
/// Row order is fixed: arms in configuration order, sample counts ascending
/// within each arm.
///
/// # Examples
///
/// ```rust
/// use area_sampling::mc::{ExperimentSweep, MonteCarloEstimator, SweepConfig};
/// use geometry_core::shapes::{BoundingBox, Circle};
///
/// let config = SweepConfig::builder()
///     .sample_range(100, 1_100)
///     .sample_step(500)
///     .runs_per_config(2)
///     .circle(Circle::new(0.0, 0.0, 1.0))
///     .experiment("unit", BoundingBox::square(-1.0, 1.0).unwrap())
///     .exact_area(std::f64::consts::PI)
///     .build()
///     .unwrap();
///
/// let sweep = ExperimentSweep::new(config);
/// let mut estimator = MonteCarloEstimator::from_seed(1);
/// let rows = sweep.run(&mut estimator).unwrap();
///
/// let counts: Vec<_> = rows.iter().map(|r| r.sample_count).collect();
/// assert_eq!(counts, vec![100, 600, 1_100]);
/// ```
#[derive(Clone, Debug)]
pub struct ExperimentSweep {
    config: SweepConfig,
}

impl ExperimentSweep {
    /// Creates a sweep over `config`.
    #[inline]
    pub fn new(config: SweepConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Runs one (arm, sample count) cell and averages its runs.
    ///
    /// # Errors
    ///
    /// Propagates `EstimationError` from the estimator.
    pub fn run_cell(
        &self,
        estimator: &mut MonteCarloEstimator,
        experiment: &ExperimentConfig,
        sample_count: usize,
    ) -> Result<SweepRow, EstimationError> {
        let runs = self.config.runs_per_config();
        let mut area_sum = 0.0;
        let mut error_sum = 0.0;

        for _ in 0..runs {
            let result = estimator.estimate(
                sample_count,
                self.config.circles(),
                &experiment.bounds,
                self.config.exact_area(),
            )?;
            area_sum += result.estimated_area;
            error_sum += result.relative_error;
        }

        Ok(SweepRow {
            label: experiment.label.clone(),
            sample_count,
            avg_area: area_sum / runs as f64,
            avg_error: error_sum / runs as f64,
        })
    }

    /// Runs the sweep, handing each row to `on_row` as soon as it is ready.
    ///
    /// Returns the number of rows emitted.
    ///
    /// # Errors
    ///
    /// Stops at the first estimator error or the first error from `on_row`.
    pub fn run_streaming<F, E>(
        &self,
        estimator: &mut MonteCarloEstimator,
        mut on_row: F,
    ) -> Result<usize, E>
    where
        F: FnMut(SweepRow) -> Result<(), E>,
        E: From<EstimationError>,
    {
        let started = Instant::now();
        info!(
            arms = self.config.experiments().len(),
            rows = self.config.row_count(),
            runs_per_config = self.config.runs_per_config(),
            exact_area = self.config.exact_area(),
            seed = estimator.seed(),
            "starting convergence sweep"
        );

        let mut emitted = 0;
        for experiment in self.config.experiments() {
            debug!(label = %experiment.label, bounds = ?experiment.bounds, "sweep arm");
            for sample_count in self.config.sample_counts() {
                let row = self.run_cell(estimator, experiment, sample_count)?;
                debug!(
                    label = %row.label,
                    sample_count,
                    avg_area = row.avg_area,
                    avg_error = row.avg_error,
                    "row complete"
                );
                on_row(row)?;
                emitted += 1;
            }
        }

        info!(
            rows = emitted,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "convergence sweep finished"
        );
        Ok(emitted)
    }

    /// Runs the sweep and collects every row.
    ///
    /// # Errors
    ///
    /// Propagates `EstimationError` from the estimator.
    pub fn run(
        &self,
        estimator: &mut MonteCarloEstimator,
    ) -> Result<Vec<SweepRow>, EstimationError> {
        let mut rows = Vec::with_capacity(self.config.row_count());
        self.run_streaming(estimator, |row| {
            rows.push(row);
            Ok::<_, EstimationError>(())
        })?;
        Ok(rows)
    }
}
