//! Explicit, seedable randomness source.
//!
//! # Determinism strategy
//!
//! Every random draw in the simulation goes through a `SimRng` handed in by
//! the caller; there is no thread-local or global generator anywhere.  The
//! same seed and the same config always produce the same population, which
//! is what makes the generator testable.
//!
//! The kinematics step draws no randomness at all, so a run is fully
//! determined by the seed used for generation.

use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
///
/// Not `Sync`: hand a `&mut SimRng` to whatever needs to draw.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// `+1.0` or `-1.0` with equal probability.
    #[inline]
    pub fn sign(&mut self) -> f64 {
        if self.0.r#gen::<bool>() { 1.0 } else { -1.0 }
    }

    /// A phase angle uniform in `[0, 2π)`.
    #[inline]
    pub fn phase(&mut self) -> f64 {
        self.0.gen_range(0.0..TAU)
    }
}
