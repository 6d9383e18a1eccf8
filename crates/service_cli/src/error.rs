//! Error types for the command-line front end.

use area_sampling::mc::{ConfigError as SweepConfigError, EstimationError};
use geometry_core::GeometryError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Malformed or missing numeric input on stdin
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Sweep parameters rejected by the sampling layer
    #[error("Sweep configuration error: {0}")]
    Sweep(#[from] SweepConfigError),

    /// Circles or boxes that break geometric invariants
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// Estimator rejected its arguments
    #[error("Estimation error: {0}")]
    Estimation(#[from] EstimationError),

    /// CSV writer error
    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
