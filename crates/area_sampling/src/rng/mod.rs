//! # Random Number Generation
//!
//! Seeded random streams for rejection sampling.
//!
//! ## Seeding Discipline
//!
//! The estimator never touches global generator state. Every stream is an
//! explicit [`SamplerRng`] handed to the estimator by its caller:
//!
//! - **Reproducible runs**: [`SamplerRng::from_seed`] with a fixed seed
//! - **Production runs**: [`SamplerRng::from_entropy`] draws a seed from the
//!   operating system and records it, so the run can be replayed later
//!
//! One stream serves a whole process invocation; repeated runs inside a
//! sweep consume consecutive, non-overlapping parts of it.
//!
//! ## Usage Example
//!
//! ```rust
//! use area_sampling::rng::SamplerRng;
//!
//! let mut rng = SamplerRng::from_seed(12345);
//! let u = rng.gen_uniform();
//! assert!((0.0..1.0).contains(&u));
//! ```

mod prng;

pub use prng::SamplerRng;
