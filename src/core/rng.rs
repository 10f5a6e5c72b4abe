//! Deterministic random number generation for round generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rounds
//! - **Injectable**: The controller only sees the [`RandomSource`] trait
//!
//! ```
//! use counting_game::core::{GameRng, RandomSource};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! assert_eq!(rng1.gen_inclusive(1, 12), rng2.gen_inclusive(1, 12));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of randomness consumed by round generation.
///
/// Implementations must draw uniformly; tests may substitute scripted
/// sources to force particular targets.
pub trait RandomSource {
    /// Draw an integer uniformly from `low..=high`.
    fn gen_inclusive(&mut self, low: u8, high: u8) -> u8;

    /// Permute a slice in place. Every ordering must be equally likely.
    fn shuffle(&mut self, values: &mut [u8]);
}

/// Seeded ChaCha8 RNG.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }
}

impl RandomSource for GameRng {
    fn gen_inclusive(&mut self, low: u8, high: u8) -> u8 {
        self.inner.gen_range(low..=high)
    }

    fn shuffle(&mut self, values: &mut [u8]) {
        values.shuffle(&mut self.inner);
    }
}
