//! Randomness source shared by a responder's in-flight requests

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Uniform pseudo-random draws backed by a seedable generator.
///
/// The generator sits behind a mutex that is only held for a single draw,
/// never across an `.await`.
#[derive(Debug)]
pub struct RandomSource {
    rng: Mutex<StdRng>,
}

impl RandomSource {
    /// Seed from the operating system
    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Deterministic source for reproducible runs and tests
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Uniform index in `[0, len)`, or `None` when there is nothing to pick
    pub fn index_below(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.lock().gen_range(0..len))
    }

    /// Uniform step count in `{0, ..., max}`
    pub fn steps_up_to(&self, max: u32) -> u32 {
        self.lock().gen_range(0..=max)
    }

    fn lock(&self) -> MutexGuard<'_, StdRng> {
        // A panic mid-draw cannot leave the generator in a bad state.
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}
