//! # Area Sampling (Layer 2: Monte Carlo Kernel)
//!
//! ## Layer 2 Role
//!
//! area_sampling estimates the area of the region common to a set of circles
//! by rejection sampling, and drives the convergence sweep that compares
//! those estimates against a closed-form reference:
//! - Seeded random streams (`rng`)
//! - The estimator, sweep configuration and sweep driver (`mc`)
//!
//! Geometry (circles, boxes, closed-form areas) comes from Layer 1
//! (`geometry_core`).
//!
//! ## Usage Example
//!
//! ```rust
//! use area_sampling::mc::MonteCarloEstimator;
//! use geometry_core::analytical::{reference_circles, reference_intersection_area};
//! use geometry_core::shapes::BoundingBox;
//!
//! let circles = reference_circles();
//! let bounds = BoundingBox::covering(&circles).unwrap();
//! let exact = reference_intersection_area();
//!
//! let mut estimator = MonteCarloEstimator::from_seed(42);
//! let result = estimator.estimate(100_000, &circles, &bounds, exact).unwrap();
//!
//! assert_eq!(result.sample_count, 100_000);
//! assert!(result.relative_error < 0.05);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;

pub use mc::{
    EstimationError, ExperimentConfig, ExperimentSweep, MonteCarloEstimator, SimulationResult,
    SweepConfig, SweepRow,
};
pub use rng::SamplerRng;
