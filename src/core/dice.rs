//! Seedable dice and coin randomness.
//!
//! Rolls are stateless with respect to the history: a roll never enters a
//! snapshot and cannot be undone. Seeding exists for reproducible sessions
//! and tests; normal play seeds from OS entropy.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Result of a coin flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoinFace {
    Heads,
    Tails,
}

impl std::fmt::Display for CoinFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoinFace::Heads => write!(f, "Heads"),
            CoinFace::Tails => write!(f, "Tails"),
        }
    }
}

/// Dice roller backed by ChaCha8.
///
/// Same seed, same sequence of rolls.
#[derive(Clone, Debug)]
pub struct Dice {
    inner: ChaCha8Rng,
}

impl Dice {
    /// Create a roller with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a roller seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Roll a die, uniform in `1..=sides`.
    ///
    /// Callers validate `sides >= 2` before rolling (the parser rejects
    /// smaller dice).
    pub fn roll(&mut self, sides: u32) -> u32 {
        debug_assert!(sides >= 2, "a die needs at least 2 sides");
        self.inner.gen_range(1..=sides)
    }

    /// Flip a fair coin.
    pub fn flip(&mut self) -> CoinFace {
        if self.inner.gen_bool(0.5) {
            CoinFace::Heads
        } else {
            CoinFace::Tails
        }
    }
}
