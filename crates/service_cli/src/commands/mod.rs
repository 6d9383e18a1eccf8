//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod single;
pub mod sweep;

use area_sampling::mc::MonteCarloEstimator;
use area_sampling::rng::SamplerRng;
use tracing::info;

/// Build the estimator for one process invocation
///
/// A fixed seed gives a reproducible run; otherwise the seed is drawn from
/// OS entropy. Either way the seed is logged so the run can be replayed.
pub fn estimator_for(seed: Option<u64>) -> MonteCarloEstimator {
    let rng = match seed {
        Some(seed) => SamplerRng::from_seed(seed),
        None => SamplerRng::from_entropy(),
    };
    info!(seed = rng.seed(), fixed = seed.is_some(), "Random stream ready");
    MonteCarloEstimator::new(rng)
}
