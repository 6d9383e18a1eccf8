//! Rejection-sampling area estimator.
//!
//! Points are drawn uniformly in a bounding box; a point is a hit when it
//! lies inside every circle of the set. The hit fraction scaled by the box
//! area estimates the area of the common region.

use geometry_core::shapes::{BoundingBox, Circle};
use tracing::debug;

use super::error::EstimationError;
use crate::rng::SamplerRng;

/// Sample count used by single-shot estimates.
pub const SINGLE_SHOT_SAMPLES: usize = 1_000_000;

/// Outcome of one estimator run.
///
/// # Examples
///
/// ```rust
/// use area_sampling::mc::SimulationResult;
///
/// let result = SimulationResult {
///     sample_count: 1_000,
///     estimated_area: 0.95,
///     relative_error: 0.0058,
/// };
/// assert!(result.relative_error < 0.01);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimulationResult {
    /// Number of points drawn.
    pub sample_count: usize,
    /// Estimated area of the common region.
    pub estimated_area: f64,
    /// `|estimated_area - exact| / exact`.
    pub relative_error: f64,
}

/// Relative deviation of `estimate` from `exact`.
///
/// # Errors
///
/// Returns `EstimationError::DegenerateReference` when `exact` is zero,
/// negative or non-finite.
#[inline]
pub fn relative_error(estimate: f64, exact: f64) -> Result<f64, EstimationError> {
    check_reference(exact)?;
    Ok((estimate - exact).abs() / exact)
}

fn check_reference(exact: f64) -> Result<(), EstimationError> {
    if exact.is_finite() && exact > 0.0 {
        Ok(())
    } else {
        Err(EstimationError::DegenerateReference(exact))
    }
}

/// Monte Carlo estimator for the area common to a set of circles.
///
/// The estimator owns its random stream; successive calls continue the
/// same stream, so repeated runs are independent draws.
///
/// An empty circle set is the vacuous intersection and every sample hits.
///
/// # Examples
///
/// ```rust
/// use area_sampling::mc::MonteCarloEstimator;
/// use geometry_core::shapes::{BoundingBox, Circle};
///
/// let unit = [Circle::new(0.0, 0.0, 1.0)];
/// let bounds = BoundingBox::square(-1.0, 1.0).unwrap();
///
/// let mut estimator = MonteCarloEstimator::from_seed(42);
/// let area = estimator.estimate_area(200_000, &unit, &bounds).unwrap();
/// assert!((area - std::f64::consts::PI).abs() < 0.03);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloEstimator {
    rng: SamplerRng,
}

impl MonteCarloEstimator {
    /// Creates an estimator drawing from `rng`.
    #[inline]
    pub fn new(rng: SamplerRng) -> Self {
        Self { rng }
    }

    /// Creates an estimator with a freshly seeded stream.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SamplerRng::from_seed(seed))
    }

    /// Returns the seed of the underlying stream.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Restarts the stream from its original seed.
    pub fn reset(&mut self) {
        self.rng = SamplerRng::from_seed(self.rng.seed());
    }

    /// Estimates the common area of `circles` using `sample_count` points
    /// drawn in `bounds`.
    ///
    /// A degenerate box (zero area) yields `0.0` without drawing samples.
    ///
    /// # Errors
    ///
    /// Returns `EstimationError::InvalidSampleCount` if `sample_count` is 0.
    pub fn estimate_area(
        &mut self,
        sample_count: usize,
        circles: &[Circle],
        bounds: &BoundingBox,
    ) -> Result<f64, EstimationError> {
        if sample_count == 0 {
            return Err(EstimationError::InvalidSampleCount(sample_count));
        }

        let rectangle_area = bounds.area();
        if rectangle_area == 0.0 {
            debug!(?bounds, "degenerate bounding box, area is zero");
            return Ok(0.0);
        }

        let hits = self.count_hits(sample_count, circles, bounds);
        Ok(hits as f64 / sample_count as f64 * rectangle_area)
    }

    /// Estimates the common area and its relative error against `exact_area`.
    ///
    /// # Errors
    ///
    /// Returns `EstimationError::InvalidSampleCount` if `sample_count` is 0,
    /// and `EstimationError::DegenerateReference` if `exact_area` is not
    /// finite and positive. Both are checked before any sampling.
    pub fn estimate(
        &mut self,
        sample_count: usize,
        circles: &[Circle],
        bounds: &BoundingBox,
        exact_area: f64,
    ) -> Result<SimulationResult, EstimationError> {
        check_reference(exact_area)?;
        let estimated_area = self.estimate_area(sample_count, circles, bounds)?;

        Ok(SimulationResult {
            sample_count,
            estimated_area,
            relative_error: relative_error(estimated_area, exact_area)?,
        })
    }

    fn count_hits(&mut self, sample_count: usize, circles: &[Circle], bounds: &BoundingBox) -> u64 {
        let mut hits = 0_u64;
        for _ in 0..sample_count {
            let u = self.rng.gen_uniform();
            let v = self.rng.gen_uniform();
            let point = bounds.point_at(u, v);
            if circles.iter().all(|c| c.contains(point)) {
                hits += 1;
            }
        }
        hits
    }
}
