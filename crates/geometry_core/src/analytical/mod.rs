//! Analytical (closed-form) areas for verifying Monte Carlo estimates.
//!
//! # Available Solutions
//!
//! - **Single disc**: `πr²`
//! - **Lens**: intersection of two circles as a sum of circular segments
//! - **Reference configuration**: the three fixed circles used by the
//!   convergence sweep, with exact area `π/4 + 1.25·asin(0.8) − 1`
//!
//! # Usage
//!
//! ```rust
//! use geometry_core::analytical::{lens_area, reference_circles, reference_intersection_area};
//! use geometry_core::shapes::Circle;
//!
//! let a = Circle::new(0.0, 0.0, 1.0);
//! let b = Circle::new(1.0, 0.0, 1.0);
//! let lens = lens_area(&a, &b);
//! assert!((lens - (2.0 * std::f64::consts::PI / 3.0 - 3.0_f64.sqrt() / 2.0)).abs() < 1e-12);
//!
//! assert_eq!(reference_circles().len(), 3);
//! assert!((reference_intersection_area() - 0.9445).abs() < 1e-3);
//! ```

mod lens;
mod reference;

pub use lens::{circle_area, lens_area};
pub use reference::{reference_circles, reference_intersection_area};
