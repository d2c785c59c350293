//! Result codes for rule outcomes.
//!
//! Expected outcomes ("not enough mana", "there is a Taunt") are values,
//! not errors. The interaction layer turns them into user-facing text.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Outcome of an attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackResult {
    Success,
    /// An enemy Taunt minion must be attacked first.
    Taunt,
    Stealth,
    Immune,
    Dormant,
    Frozen,
    /// The hero has no attack.
    PlayerNoAttack,
    PlayerHasAttacked,
    /// No attacks left this turn.
    CardHasAttacked,
    CardNoAttack,
    CantAttack,
    Sleepy,
    /// Rush minions cannot attack heroes on the turn they arrive.
    CantAttackHero,
    /// The titan still has abilities to use.
    Titan,
    /// A numeric hit popped a Divine Shield. Counts as a success.
    DivineShield,
    Invalid,
}

impl AttackResult {
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, AttackResult::Success | AttackResult::DivineShield)
    }
}

/// Outcome of playing a card or using a board action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayResult {
    Success,
    /// Not enough of the card's resource.
    Cost,
    /// Board or hand is full.
    Space,
    /// The opponent countered the card. The card is spent.
    Counter,
    /// The card's effect was cancelled. Nothing was spent.
    Refund,
    Traded,
    Forged,
    /// Merged into a friendly Mech instead of being summoned.
    Magnetize,
    /// Summoned along with its companion pieces.
    Colossal,
    /// Hero power or location already used.
    Cooldown,
    Invalid,
}

impl PlayResult {
    /// True for `Success` and the soft-success variants.
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(
            self,
            PlayResult::Success
                | PlayResult::Traded
                | PlayResult::Forged
                | PlayResult::Magnetize
                | PlayResult::Colossal
        )
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Winner(PlayerId),
    /// Both heroes died at once.
    Draw,
}

impl GameResult {
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soft_successes() {
        assert!(AttackResult::DivineShield.is_success());
        assert!(!AttackResult::Taunt.is_success());

        assert!(PlayResult::Magnetize.is_success());
        assert!(PlayResult::Colossal.is_success());
        assert!(!PlayResult::Refund.is_success());
        assert!(!PlayResult::Counter.is_success());
    }

    #[test]
    fn test_game_result() {
        assert!(GameResult::Winner(PlayerId::SECOND).is_winner(PlayerId::SECOND));
        assert!(!GameResult::Winner(PlayerId::SECOND).is_winner(PlayerId::FIRST));
        assert!(!GameResult::Draw.is_winner(PlayerId::FIRST));
    }
}
