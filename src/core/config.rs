//! Game configuration.
//!
//! `GameConfig` holds the numeric rule constants of a match. The defaults
//! are the standard constructed rules; tests and variants override single
//! values through the `with_*` builders.
//!
//! ```
//! use hearth_rules::core::GameConfig;
//!
//! let config = GameConfig::default().with_max_board_space(3).with_seed(9);
//! assert_eq!(config.max_board_space, 3);
//! assert_eq!(config.max_hand_length, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Rule constants for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards a board can hold (minions and locations).
    pub max_board_space: usize,

    /// Cards a hand can hold. Draws past this burn.
    pub max_hand_length: usize,

    /// Ceiling for mana crystals.
    pub max_mana: i64,

    pub starting_health: i64,

    /// Redirect attempts a Forgetful attack makes before falling back.
    pub forgetful_attempts: usize,

    /// Mana paid to forge a card in hand.
    pub forge_cost: i64,

    /// Mana paid to trade a card back into the deck.
    pub trade_cost: i64,

    /// Opening hand size of the first player.
    pub first_hand_size: usize,

    /// Opening hand size of the second player (before The Coin).
    pub second_hand_size: usize,

    /// Seed for the game's RNG.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_board_space: 7,
            max_hand_length: 10,
            max_mana: 10,
            starting_health: 30,
            forgetful_attempts: 25,
            forge_cost: 2,
            trade_cost: 1,
            first_hand_size: 3,
            second_hand_size: 4,
            seed: 0,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_max_board_space(mut self, space: usize) -> Self {
        self.max_board_space = space;
        self
    }

    #[must_use]
    pub fn with_max_hand_length(mut self, length: usize) -> Self {
        self.max_hand_length = length;
        self
    }

    #[must_use]
    pub fn with_max_mana(mut self, mana: i64) -> Self {
        self.max_mana = mana;
        self
    }

    #[must_use]
    pub fn with_starting_health(mut self, health: i64) -> Self {
        self.starting_health = health;
        self
    }

    #[must_use]
    pub fn with_forgetful_attempts(mut self, attempts: usize) -> Self {
        self.forgetful_attempts = attempts;
        self
    }

    #[must_use]
    pub fn with_hand_sizes(mut self, first: usize, second: usize) -> Self {
        self.first_hand_size = first;
        self.second_hand_size = second;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
