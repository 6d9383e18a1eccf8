//! Error types for structured error handling.
//!
//! This module provides `GeometryError`, raised when a shape is constructed
//! from values that break its invariants.

use thiserror::Error;

/// Categorised geometry errors.
///
/// # Variants
/// - `InvertedBounds`: A bounding box axis has `min > max`
/// - `NonFinite`: A coordinate or radius is NaN or infinite
/// - `NonPositiveRadius`: A circle radius is zero or negative
/// - `EmptyCircleSet`: A covering box was requested for no circles
///
/// # Examples
/// ```
/// use geometry_core::types::GeometryError;
///
/// let err = GeometryError::InvertedBounds { axis: 'x', min: 2.0, max: 1.0 };
/// assert_eq!(format!("{}", err), "Inverted bounds on x axis: min 2 > max 1");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Axis minimum exceeds its maximum.
    #[error("Inverted bounds on {axis} axis: min {min} > max {max}")]
    InvertedBounds {
        /// Axis name (`'x'` or `'y'`).
        axis: char,
        /// Lower bound supplied.
        min: f64,
        /// Upper bound supplied.
        max: f64,
    },

    /// A value that must be finite is NaN or infinite.
    #[error("Non-finite value for '{name}': {value}")]
    NonFinite {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Circle radius is not strictly positive.
    #[error("Circle radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    /// No circles were supplied where at least one is required.
    #[error("At least one circle is required")]
    EmptyCircleSet,
}
