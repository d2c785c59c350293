//! The game's single source of randomness.
//!
//! The rules draw on it in a handful of places: the Forgetful coin, the
//! redirect target that follows a bad flip, where a traded card lands in the
//! deck, and explicit deck shuffles. Card callbacks reach it through
//! `Game::rng_mut` for their own rolls. Nothing else in the crate is random,
//! so a seed plus the controller answers pins down a whole game.
//!
//! ```
//! use hearth_rules::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.roll(1, 6), b.roll(1, 6));
//! assert_eq!(a.coin_flip(), b.coin_flip());
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed the game was started with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fair coin. True is heads.
    pub fn coin_flip(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }

    /// Uniform roll in `low..=high`. Returns `low` if the range is empty.
    pub fn roll(&mut self, low: i64, high: i64) -> i64 {
        if high <= low {
            return low;
        }
        self.inner.gen_range(low..=high)
    }

    /// Uniform insertion point into a list of `len` items, ends included.
    pub fn slot(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..=len)
    }

    pub fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        items.choose(&mut self.inner).copied()
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }

    /// Position in the stream, for saving a game mid-way.
    #[must_use]
    pub fn snapshot(&self) -> RngSnapshot {
        RngSnapshot {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    #[must_use]
    pub fn restore(snapshot: &RngSnapshot) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(snapshot.seed);
        inner.set_word_pos(snapshot.word_pos);
        Self {
            inner,
            seed: snapshot.seed,
        }
    }
}

/// Seed plus ChaCha word position; restoring does not replay the stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngSnapshot {
    pub seed: u64,
    pub word_pos: u128,
}
