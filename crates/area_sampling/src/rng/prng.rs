//! Pseudo-random number generator wrapper for Monte Carlo sampling.
//!
//! This module provides [`SamplerRng`], a seeded PRNG wrapper that keeps
//! track of its seed for reproducibility.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random stream used by the area estimator.
///
/// # Examples
///
/// ```rust
/// use area_sampling::rng::SamplerRng;
///
/// let mut a = SamplerRng::from_seed(7);
/// let mut b = SamplerRng::from_seed(7);
/// assert_eq!(a.gen_uniform(), b.gen_uniform());
/// assert_eq!(a.seed(), 7);
/// ```
#[derive(Clone, Debug)]
pub struct SamplerRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation.
    seed: u64,
}

impl SamplerRng {
    /// Creates a stream initialised with the given seed.
    ///
    /// The same seed always produces the same sequence.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a stream seeded from operating-system entropy.
    ///
    /// The drawn seed is kept and available through [`SamplerRng::seed`].
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::rngs::OsRng.gen();
        Self::from_seed(seed)
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a uniform value in [0, 1).
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }
}
