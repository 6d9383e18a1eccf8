//! Error types for the Monte Carlo sampling kernel.
//!
//! This module defines structured error types for sweep configuration
//! validation and for estimator calls with unusable arguments.

use geometry_core::GeometryError;
use thiserror::Error;

/// Configuration error for the convergence sweep.
///
/// These errors occur at build time when invalid parameters are provided.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Sample range is empty or starts at zero.
    #[error("Invalid sample range [{start}, {end}]: need 1 <= start <= end")]
    InvalidSampleRange {
        /// First sample count.
        start: usize,
        /// Last sample count (inclusive).
        end: usize,
    },
    /// Sample step of zero.
    #[error("Invalid sample step {0}: must be at least 1")]
    InvalidStep(usize),
    /// Run count of zero.
    #[error("Invalid runs per configuration {0}: must be at least 1")]
    InvalidRunCount(usize),
    /// No bounding-box arms were configured.
    #[error("At least one bounding box must be configured")]
    EmptyBoxSet,
    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
    /// A circle or box broke a geometric invariant.
    #[error("Invalid geometry: {0}")]
    Geometry(#[from] GeometryError),
}

/// Error returned by estimator calls.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EstimationError {
    /// Zero samples requested.
    #[error("Invalid sample count {0}: must be at least 1")]
    InvalidSampleCount(usize),
    /// Reference area cannot normalise a relative error.
    #[error("Reference area {0} must be finite and positive")]
    DegenerateReference(f64),
}
