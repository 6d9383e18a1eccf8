//! Planar primitives for rejection sampling.
//!
//! - [`Point`]: a location in the plane
//! - [`Circle`]: centre and radius, with the inclusion predicate
//! - [`BoundingBox`]: axis-aligned sampling rectangle

mod bounding_box;
mod circle;

pub use bounding_box::BoundingBox;
pub use circle::{is_inside, Circle, Point};
