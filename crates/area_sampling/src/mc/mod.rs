//! Monte Carlo area estimation and convergence sweep.
//!
//! # Architecture
//!
//! ```text
//! ExperimentSweep
//! ├── SweepConfig          (sample range, runs, circles, arms, exact area)
//! └── MonteCarloEstimator
//!     ├── SamplerRng       (explicit random stream)
//!     └── is_inside()      (geometry_core predicate, AND over all circles)
//! ```
//!
//! # Examples
//!
//! ## Single estimate
//!
//! ```rust
//! use area_sampling::mc::{MonteCarloEstimator, SINGLE_SHOT_SAMPLES};
//! use geometry_core::analytical::reference_circles;
//! use geometry_core::shapes::BoundingBox;
//!
//! let circles = reference_circles();
//! let bounds = BoundingBox::covering(&circles).unwrap();
//!
//! let mut estimator = MonteCarloEstimator::from_seed(42);
//! let area = estimator.estimate_area(SINGLE_SHOT_SAMPLES, &circles, &bounds).unwrap();
//! assert!((area - 0.9445).abs() < 0.02);
//! ```
//!
//! ## Reference sweep
//!
//! ```rust,no_run
//! use area_sampling::mc::{ExperimentSweep, MonteCarloEstimator, SweepConfig};
//!
//! let sweep = ExperimentSweep::new(SweepConfig::reference().unwrap());
//! let mut estimator = MonteCarloEstimator::from_seed(42);
//!
//! for row in sweep.run(&mut estimator).unwrap() {
//!     println!("{}", row);
//! }
//! ```

pub mod config;
pub mod error;
pub mod estimator;
pub mod sweep;

pub use config::{
    ExperimentConfig, SweepConfig, SweepConfigBuilder, DEFAULT_RUNS_PER_CONFIG,
    DEFAULT_SAMPLE_END, DEFAULT_SAMPLE_START, DEFAULT_SAMPLE_STEP, MAX_ROWS,
    MAX_RUNS_PER_CONFIG, MAX_SAMPLE_COUNT,
};
pub use error::{ConfigError, EstimationError};
pub use estimator::{relative_error, MonteCarloEstimator, SimulationResult, SINGLE_SHOT_SAMPLES};
pub use sweep::{ExperimentSweep, SweepRow};
