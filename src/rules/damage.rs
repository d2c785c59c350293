//! Damage, healing and freezing primitives.
//!
//! Every hit in the game, combat or spell, ends up in `deal_damage`, so
//! Immune, Divine Shield and armor are handled in exactly one place.

use tracing::trace;

use crate::cards::Keyword;
use crate::core::{EngineResult, EntityId, Game, PlayerId, Target};
use crate::triggers::{EventKey, EventValue};

impl Game {
    /// Deal `amount` damage to `target`. Returns the damage actually dealt,
    /// which is 0 when Immune or a Divine Shield stopped it.
    pub fn deal_damage(&mut self, target: Target, amount: i64) -> EngineResult<i64> {
        match target {
            Target::Card(id) => self.damage_card(id, amount),
            Target::Player(player) => self.damage_player(player, amount),
        }
    }

    pub(crate) fn damage_card(&mut self, id: EntityId, amount: i64) -> EngineResult<i64> {
        let card = self.card_mut(id)?;
        if amount <= 0 || card.has_keyword(Keyword::Immune) {
            return Ok(0);
        }
        if card.remove_keyword(Keyword::DivineShield).is_some() {
            trace!(card = %id, "divine shield popped");
            return Ok(0);
        }
        card.health -= amount;

        let value = EventValue::TargetAmount {
            target: Target::Card(id),
            amount,
        };
        self.broadcast(EventKey::DamageCard, value, self.current)?;
        Ok(amount)
    }

    fn damage_player(&mut self, player: PlayerId, amount: i64) -> EngineResult<i64> {
        let hero = &mut self.players[player];
        if amount <= 0 || hero.immune {
            return Ok(0);
        }
        let absorbed = hero.armor.min(amount);
        hero.armor -= absorbed;
        hero.health -= amount - absorbed;

        let value = EventValue::TargetAmount {
            target: Target::Player(player),
            amount,
        };
        self.broadcast(EventKey::TakeDamage, value, player)?;
        Ok(amount)
    }

    /// Restore up to `amount` health to a hero. Returns the amount restored.
    pub fn heal_player(&mut self, player: PlayerId, amount: i64) -> EngineResult<i64> {
        let hero = &mut self.players[player];
        let before = hero.health;
        hero.health = (hero.health + amount).min(hero.max_health).max(before);
        let restored = hero.health - before;

        if restored > 0 {
            let value = EventValue::TargetAmount {
                target: Target::Player(player),
                amount: restored,
            };
            self.broadcast(EventKey::HealthRestored, value, player)?;
        }
        Ok(restored)
    }

    /// Freeze a card or hero. Frozen cards thaw after their owner's next
    /// full turn.
    pub fn freeze(&mut self, target: Target) -> EngineResult<()> {
        match target {
            Target::Card(id) => {
                let turn = self.turn;
                let card = self.card_mut(id)?;
                card.add_keyword(Keyword::Frozen);
                card.turn_frozen = Some(turn);
            }
            Target::Player(player) => self.players[player].frozen = true,
        }
        Ok(())
    }
}
