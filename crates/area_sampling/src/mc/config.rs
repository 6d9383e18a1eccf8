//! Convergence sweep configuration.
//!
//! This module provides the configuration types and builder for sweeping the
//! estimator across bounding-box choices and sample counts.

use std::iter::StepBy;
use std::ops::RangeInclusive;

use geometry_core::analytical::{reference_circles, reference_intersection_area};
use geometry_core::shapes::{BoundingBox, Circle};

use super::error::ConfigError;

/// First sample count of the reference sweep.
pub const DEFAULT_SAMPLE_START: usize = 100;

/// Last sample count of the reference sweep (inclusive).
pub const DEFAULT_SAMPLE_END: usize = 100_000;

/// Increment between consecutive sample counts.
pub const DEFAULT_SAMPLE_STEP: usize = 500;

/// Estimator runs averaged per (box, sample count) pair.
pub const DEFAULT_RUNS_PER_CONFIG: usize = 10;

/// Maximum sample count per estimate.
pub const MAX_SAMPLE_COUNT: usize = 100_000_000;

/// Maximum estimator runs averaged per row.
pub const MAX_RUNS_PER_CONFIG: usize = 10_000;

/// Maximum number of rows a sweep may emit.
pub const MAX_ROWS: usize = 1_000_000;

/// One arm of the sweep: a labelled bounding box.
#[derive(Clone, Debug, PartialEq)]
pub struct ExperimentConfig {
    /// Label printed in the first output column.
    pub label: String,
    /// Sampling rectangle for this arm.
    pub bounds: BoundingBox,
}

impl ExperimentConfig {
    /// Creates a labelled arm.
    pub fn new(label: impl Into<String>, bounds: BoundingBox) -> Self {
        Self {
            label: label.into(),
            bounds,
        }
    }
}

/// Sweep configuration.
///
/// Immutable once built. Use [`SweepConfigBuilder`] to construct instances,
/// or [`SweepConfig::reference`] for the fixed three-circle experiment.
///
/// # Examples
///
/// ```rust
/// use area_sampling::mc::SweepConfig;
/// use geometry_core::shapes::{BoundingBox, Circle};
///
/// let config = SweepConfig::builder()
///     .sample_range(1_000, 5_000)
///     .sample_step(2_000)
///     .runs_per_config(3)
///     .circle(Circle::new(0.0, 0.0, 1.0))
///     .experiment("unit", BoundingBox::square(-1.0, 1.0).unwrap())
///     .exact_area(std::f64::consts::PI)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.sample_counts().collect::<Vec<_>>(), vec![1_000, 3_000, 5_000]);
/// assert_eq!(config.row_count(), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SweepConfig {
    sample_start: usize,
    sample_end: usize,
    sample_step: usize,
    runs_per_config: usize,
    circles: Vec<Circle>,
    experiments: Vec<ExperimentConfig>,
    exact_area: f64,
}

impl SweepConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SweepConfigBuilder {
        SweepConfigBuilder::default()
    }

    /// The fixed three-circle experiment.
    ///
    /// Sample counts 100..=100000 in steps of 500, 10 runs each, boxes
    /// `tight = [0.7, 2.1]²` then `wide = [0.5, 3.1]²`, and the closed-form
    /// exact area of [`reference_circles`].
    ///
    /// # Errors
    ///
    /// Never fails for the built-in values; the `Result` carries the builder's
    /// validation.
    pub fn reference() -> Result<Self, ConfigError> {
        Self::reference_builder()?.build()
    }

    /// Builder preloaded with the reference experiment, for callers that
    /// override a few fields.
    pub fn reference_builder() -> Result<SweepConfigBuilder, ConfigError> {
        Ok(Self::builder()
            .sample_range(DEFAULT_SAMPLE_START, DEFAULT_SAMPLE_END)
            .sample_step(DEFAULT_SAMPLE_STEP)
            .runs_per_config(DEFAULT_RUNS_PER_CONFIG)
            .circles(reference_circles())
            .experiment("tight", BoundingBox::square(0.7, 2.1)?)
            .experiment("wide", BoundingBox::square(0.5, 3.1)?)
            .exact_area(reference_intersection_area()))
    }

    /// First sample count.
    #[inline]
    pub fn sample_start(&self) -> usize {
        self.sample_start
    }

    /// Last sample count (inclusive upper bound).
    #[inline]
    pub fn sample_end(&self) -> usize {
        self.sample_end
    }

    /// Increment between sample counts.
    #[inline]
    pub fn sample_step(&self) -> usize {
        self.sample_step
    }

    /// Estimator runs averaged per row.
    #[inline]
    pub fn runs_per_config(&self) -> usize {
        self.runs_per_config
    }

    /// Circles whose common area is estimated.
    #[inline]
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Sweep arms in output order.
    #[inline]
    pub fn experiments(&self) -> &[ExperimentConfig] {
        &self.experiments
    }

    /// Exact area used for relative errors.
    #[inline]
    pub fn exact_area(&self) -> f64 {
        self.exact_area
    }

    /// Sample counts in ascending order.
    #[inline]
    pub fn sample_counts(&self) -> StepBy<RangeInclusive<usize>> {
        (self.sample_start..=self.sample_end).step_by(self.sample_step)
    }

    /// Number of rows the sweep emits (at most [`MAX_ROWS`]).
    pub fn row_count(&self) -> usize {
        let per_arm = (self.sample_end - self.sample_start) / self.sample_step + 1;
        per_arm * self.experiments.len()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - the sample range is empty, starts at 0 or ends above [`MAX_SAMPLE_COUNT`]
    /// - the step is 0, or the run count is 0 or exceeds [`MAX_RUNS_PER_CONFIG`]
    /// - no circles or no experiments are configured, or a circle is invalid
    /// - the sweep would emit more than [`MAX_ROWS`] rows
    /// - the exact area is not finite and positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_start == 0
            || self.sample_start > self.sample_end
            || self.sample_end > MAX_SAMPLE_COUNT
        {
            return Err(ConfigError::InvalidSampleRange {
                start: self.sample_start,
                end: self.sample_end,
            });
        }
        if self.sample_step == 0 {
            return Err(ConfigError::InvalidStep(self.sample_step));
        }
        if self.runs_per_config == 0 || self.runs_per_config > MAX_RUNS_PER_CONFIG {
            return Err(ConfigError::InvalidRunCount(self.runs_per_config));
        }
        if self.circles.is_empty() {
            return Err(geometry_core::GeometryError::EmptyCircleSet.into());
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        if self.experiments.is_empty() {
            return Err(ConfigError::EmptyBoxSet);
        }
        let per_arm = (self.sample_end - self.sample_start) / self.sample_step + 1;
        let rows = per_arm.checked_mul(self.experiments.len());
        if rows.map_or(true, |rows| rows > MAX_ROWS) {
            return Err(ConfigError::InvalidParameter {
                name: "sample_range",
                value: format!(
                    "{} sample counts across {} boxes exceeds {} rows",
                    per_arm,
                    self.experiments.len(),
                    MAX_ROWS
                ),
            });
        }
        if !(self.exact_area.is_finite() && self.exact_area > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "exact_area",
                value: format!("{} is not finite and positive", self.exact_area),
            });
        }
        Ok(())
    }
}

/// Builder for [`SweepConfig`].
///
/// `sample_step` and `runs_per_config` default to the reference values; the
/// sample range and exact area must be supplied.
#[derive(Clone, Debug)]
pub struct SweepConfigBuilder {
    sample_range: Option<(usize, usize)>,
    sample_step: usize,
    runs_per_config: usize,
    circles: Vec<Circle>,
    experiments: Vec<ExperimentConfig>,
    exact_area: Option<f64>,
}

impl Default for SweepConfigBuilder {
    fn default() -> Self {
        Self {
            sample_range: None,
            sample_step: DEFAULT_SAMPLE_STEP,
            runs_per_config: DEFAULT_RUNS_PER_CONFIG,
            circles: Vec::new(),
            experiments: Vec::new(),
            exact_area: None,
        }
    }
}

impl SweepConfigBuilder {
    /// Sets the inclusive sample count range.
    #[inline]
    pub fn sample_range(mut self, start: usize, end: usize) -> Self {
        self.sample_range = Some((start, end));
        self
    }

    /// Sets the sample count increment.
    #[inline]
    pub fn sample_step(mut self, step: usize) -> Self {
        self.sample_step = step;
        self
    }

    /// Sets the number of runs averaged per row.
    #[inline]
    pub fn runs_per_config(mut self, runs: usize) -> Self {
        self.runs_per_config = runs;
        self
    }

    /// Adds one circle.
    #[inline]
    pub fn circle(mut self, circle: Circle) -> Self {
        self.circles.push(circle);
        self
    }

    /// Replaces the circle set.
    pub fn circles(mut self, circles: impl IntoIterator<Item = Circle>) -> Self {
        self.circles = circles.into_iter().collect();
        self
    }

    /// Appends a labelled bounding box arm.
    pub fn experiment(mut self, label: impl Into<String>, bounds: BoundingBox) -> Self {
        self.experiments.push(ExperimentConfig::new(label, bounds));
        self
    }

    /// Replaces all arms.
    pub fn experiments(mut self, experiments: impl IntoIterator<Item = ExperimentConfig>) -> Self {
        self.experiments = experiments.into_iter().collect();
        self
    }

    /// Sets the exact area of the common region.
    #[inline]
    pub fn exact_area(mut self, area: f64) -> Self {
        self.exact_area = Some(area);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the sample range or exact area is missing, or
    /// if [`SweepConfig::validate`] fails.
    pub fn build(self) -> Result<SweepConfig, ConfigError> {
        let (sample_start, sample_end) =
            self.sample_range.ok_or(ConfigError::InvalidParameter {
                name: "sample_range",
                value: "must be specified".to_string(),
            })?;

        let exact_area = self.exact_area.ok_or(ConfigError::InvalidParameter {
            name: "exact_area",
            value: "must be specified".to_string(),
        })?;

        let config = SweepConfig {
            sample_start,
            sample_end,
            sample_step: self.sample_step,
            runs_per_config: self.runs_per_config,
            circles: self.circles,
            experiments: self.experiments,
            exact_area,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geometry_core::GeometryError;

    fn minimal() -> SweepConfigBuilder {
        SweepConfig::builder()
            .sample_range(10, 100)
            .circle(Circle::new(0.0, 0.0, 1.0))
            .experiment("unit", BoundingBox::square(-1.0, 1.0).unwrap())
            .exact_area(std::f64::consts::PI)
    }

    #[test]
    fn test_reference_config() {
        let config = SweepConfig::reference().unwrap();

        assert_eq!(config.sample_start(), 100);
        assert_eq!(config.sample_end(), 100_000);
        assert_eq!(config.sample_step(), 500);
        assert_eq!(config.runs_per_config(), 10);
        assert_eq!(config.circles().len(), 3);

        let labels: Vec<_> = config.experiments().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["tight", "wide"]);
        assert_eq!(config.experiments()[0].bounds.x_min(), 0.7);
        assert_eq!(config.experiments()[1].bounds.y_max(), 3.1);
    }

    #[test]
    fn test_reference_row_count() {
        let config = SweepConfig::reference().unwrap();
        let expected = ((100_000 - 100) / 500 + 1) * 2;

        assert_eq!(config.row_count(), expected);
        assert_eq!(config.row_count(), 400);
        assert_eq!(config.sample_counts().count() * 2, expected);
    }

    #[test]
    fn test_sample_counts_ascending() {
        let config = SweepConfig::reference().unwrap();
        let counts: Vec<_> = config.sample_counts().collect();

        assert_eq!(counts.first(), Some(&100));
        assert_eq!(counts[1], 600);
        assert_eq!(counts.last(), Some(&99_600));
        assert!(counts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_builder_defaults() {
        let config = minimal().build().unwrap();
        assert_eq!(config.sample_step(), DEFAULT_SAMPLE_STEP);
        assert_eq!(config.runs_per_config(), DEFAULT_RUNS_PER_CONFIG);
        assert_eq!(config.sample_counts().collect::<Vec<_>>(), vec![10]);
    }

    #[test]
    fn test_invalid_sample_range() {
        assert!(matches!(
            minimal().sample_range(0, 10).build(),
            Err(ConfigError::InvalidSampleRange { start: 0, end: 10 })
        ));
        assert!(matches!(
            minimal().sample_range(50, 10).build(),
            Err(ConfigError::InvalidSampleRange { .. })
        ));
    }

    #[test]
    fn test_invalid_step_and_runs() {
        assert_eq!(
            minimal().sample_step(0).build(),
            Err(ConfigError::InvalidStep(0))
        );
        assert_eq!(
            minimal().runs_per_config(0).build(),
            Err(ConfigError::InvalidRunCount(0))
        );
    }

    #[test]
    fn test_upper_limits() {
        assert!(matches!(
            minimal().sample_range(1, MAX_SAMPLE_COUNT + 1).build(),
            Err(ConfigError::InvalidSampleRange { .. })
        ));
        assert_eq!(
            minimal().runs_per_config(MAX_RUNS_PER_CONFIG + 1).build(),
            Err(ConfigError::InvalidRunCount(MAX_RUNS_PER_CONFIG + 1))
        );
        assert!(minimal().runs_per_config(MAX_RUNS_PER_CONFIG).build().is_ok());
    }

    #[test]
    fn test_row_limit() {
        let at_limit = minimal()
            .sample_range(1, MAX_ROWS)
            .sample_step(1)
            .build()
            .unwrap();
        assert_eq!(at_limit.row_count(), MAX_ROWS);

        let too_many = minimal()
            .sample_range(1, MAX_SAMPLE_COUNT)
            .sample_step(1)
            .build();
        assert!(matches!(
            too_many,
            Err(ConfigError::InvalidParameter {
                name: "sample_range",
                ..
            })
        ));

        let two_arms = minimal()
            .sample_range(1, MAX_ROWS)
            .sample_step(1)
            .experiment("second", BoundingBox::square(-2.0, 2.0).unwrap())
            .build();
        assert!(two_arms.is_err());
    }

    #[test]
    fn test_missing_fields() {
        let result = SweepConfig::builder()
            .circle(Circle::new(0.0, 0.0, 1.0))
            .exact_area(1.0)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "sample_range",
                ..
            })
        ));

        let result = SweepConfig::builder().sample_range(1, 2).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "exact_area",
                ..
            })
        ));
    }

    #[test]
    fn test_empty_sets_rejected() {
        assert_eq!(
            minimal().circles(Vec::new()).build(),
            Err(ConfigError::Geometry(GeometryError::EmptyCircleSet))
        );
        assert_eq!(
            minimal().experiments(Vec::new()).build(),
            Err(ConfigError::EmptyBoxSet)
        );
    }

    #[test]
    fn test_invalid_circle_rejected() {
        assert_eq!(
            minimal().circle(Circle::new(0.0, 0.0, -2.0)).build(),
            Err(ConfigError::Geometry(GeometryError::NonPositiveRadius(-2.0)))
        );
    }

    #[test]
    fn test_non_positive_exact_area_rejected() {
        for area in [0.0, -1.0, f64::NAN] {
            assert!(matches!(
                minimal().exact_area(area).build(),
                Err(ConfigError::InvalidParameter {
                    name: "exact_area",
                    ..
                })
            ));
        }
    }
}
