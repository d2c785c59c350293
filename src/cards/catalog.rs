//! Built-in blueprints the rules themselves depend on.
//!
//! The turn cycle hands "The Coin" to the second player, and tests and
//! debug decks lean on "Sheep". Both live at fixed ids below 100; custom
//! card pools should number their blueprints from 100 upwards.

use super::abilities::{Ability, AbilityOutcome};
use super::definition::CardDefinition;
use super::keywords::Tribe;
use super::registry::CardRegistry;

/// Well-known blueprint ids.
pub mod card_ids {
    use crate::cards::CardId;

    pub const SHEEP: CardId = CardId(1);
    pub const THE_COIN: CardId = CardId(2);
}

/// Install the built-in blueprints, keeping any the pool already defines.
pub fn register_basics(registry: &mut CardRegistry) {
    registry.register_if_absent(
        CardDefinition::minion(card_ids::SHEEP, "Sheep", 1, 1, 1).with_tribe(Tribe::Beast),
    );

    registry.register_if_absent(
        CardDefinition::spell(card_ids::THE_COIN, "The Coin", 0)
            .with_text("Gain 1 Mana Crystal this turn only.")
            .with_ability(Ability::Cast, |game, ctx| {
                let cap = game.config().max_mana;
                game.player_mut(ctx.owner).refresh_mana(1, cap);
                Ok(AbilityOutcome::Done)
            }),
    );
}
