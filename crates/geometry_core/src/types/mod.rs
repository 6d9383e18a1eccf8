//! Shared types for the geometry layer.

pub mod error;

pub use error::GeometryError;
