//! # geometry_core: Planar Foundation for Circle Intersection Sampling
//!
//! ## Layer 1 (Foundation) Role
//!
//! geometry_core is the bottom layer of the workspace, providing:
//! - Planar primitives: `Point`, `Circle`, `BoundingBox` (`shapes`)
//! - The point-in-circle predicate used by every sampler (`shapes::is_inside`)
//! - Closed-form reference areas for verification (`analytical`)
//! - Error types: `GeometryError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other workspace crates and only minimal
//! external dependencies:
//! - thiserror: Structured error types
//! - serde: Deserialisation of circles and boxes from configuration files
//!
//! ## Usage Examples
//!
//! ```rust
//! use geometry_core::shapes::{BoundingBox, Circle, Point};
//! use geometry_core::analytical::circle_area;
//!
//! let unit = Circle::new(0.0, 0.0, 1.0);
//! assert!(unit.contains(Point::new(1.0, 0.0)));
//! assert!(!unit.contains(Point::new(1.0 + 1e-9, 0.0)));
//!
//! let bounds = BoundingBox::covering(&[unit]).unwrap();
//! assert_eq!(bounds.area(), 4.0);
//! assert!((circle_area(1.0) - std::f64::consts::PI).abs() < 1e-15);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod shapes;
pub mod types;

pub use shapes::{is_inside, BoundingBox, Circle, Point};
pub use types::GeometryError;
