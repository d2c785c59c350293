//! Board sweep: removing dead cards.
//!
//! Runs after every action that may have killed something. Each board is
//! swept in two passes:
//!
//! 1. Deathrattle fires on every dead card. A Deathrattle may heal its own
//!    card, so liveness is checked again afterwards.
//! 2. Cards still dead fire `Remove`, which can veto the removal with a
//!    refund. The rest go to the graveyard, raise `KillCard`, and come back
//!    as a 1-health copy if they had Reborn.
//!
//! A card is only given one Deathrattle per death, even if a nested sweep
//! reaches it before the outer one finishes.

use tracing::debug;

use super::results::GameResult;
use crate::cards::{Ability, AbilityContext, CardType, Keyword, Zone};
use crate::core::{EngineResult, EntityId, Game, PlayerId};
use crate::triggers::{EventKey, EventValue};

impl Game {
    /// Remove every dead card from both boards. Returns how many left.
    pub fn sweep(&mut self) -> EngineResult<usize> {
        let mut removed = 0;
        for player in PlayerId::both() {
            removed += self.sweep_board(player)?;
        }
        self.check_game_over();
        Ok(removed)
    }

    fn sweep_board(&mut self, player: PlayerId) -> EngineResult<usize> {
        let mut dead = Vec::new();
        for id in self.players[player].board.clone() {
            if self.is_dead_on_board(id)? && self.dying.insert(id) {
                dead.push(id);
            }
        }
        if dead.is_empty() {
            return Ok(0);
        }

        for &id in &dead {
            self.activate(id, Ability::Deathrattle)?;
        }

        let mut removed = 0;
        for id in dead {
            let result = self.bury(id, player);
            self.dying.remove(&id);
            if result? {
                removed += 1;
            }
        }
        self.update_spell_damage(player);
        Ok(removed)
    }

    /// Move a dead card to the graveyard. Returns false if it survived or
    /// vetoed its removal.
    fn bury(&mut self, id: EntityId, player: PlayerId) -> EngineResult<bool> {
        if !self.is_dead_on_board(id)? {
            return Ok(false);
        }
        if self.activate(id, Ability::Remove)?.is_refund() {
            debug!(card = %id, "removal vetoed");
            return Ok(false);
        }

        let attack = self.card(id)?.attack;
        self.remove_from_zone(id)?;
        let turn = self.turn;
        let card = self.card_mut(id)?;
        card.zone = Zone::Graveyard;
        card.turn_killed = Some(turn);
        let (minion, reborn) = (card.card_type == CardType::Minion, card.has_keyword(Keyword::Reborn));
        self.players[player].graveyard.push(id);
        if minion {
            self.players[player].corpses += 1;
        }
        debug!(card = %id, %player, "killed");

        self.broadcast(EventKey::KillCard, EventValue::Card(id), player)?;

        if reborn {
            self.reborn(id, attack, player)?;
        }
        Ok(true)
    }

    fn reborn(&mut self, original: EntityId, attack: i64, player: PlayerId) -> EngineResult<()> {
        let copy = self.fresh_copy(original)?;
        let card = self.card_mut(copy)?;
        card.attack = attack;
        card.remove_keyword(Keyword::Reborn);
        card.health = 1;

        self.with_suppressed(EventKey::SummonCard, |game| game.summon(copy, player, false))?;

        // The summon event was suppressed; let the copy see its arrival.
        let ctx = AbilityContext::new(player, copy, Ability::Passive).with_tag("reborn", EventValue::Card(original));
        self.activate_ctx(ctx)?;
        Ok(())
    }

    fn is_dead_on_board(&self, id: EntityId) -> EngineResult<bool> {
        let card = self.card(id)?;
        Ok(card.zone == Zone::Board && !card.is_alive())
    }

    /// Settle the result once a hero has fallen.
    fn check_game_over(&mut self) {
        if self.result.is_some() {
            return;
        }
        let first = self.players[PlayerId::FIRST].is_dead();
        let second = self.players[PlayerId::SECOND].is_dead();
        self.result = match (first, second) {
            (true, true) => Some(GameResult::Draw),
            (true, false) => Some(GameResult::Winner(PlayerId::SECOND)),
            (false, true) => Some(GameResult::Winner(PlayerId::FIRST)),
            (false, false) => None,
        };
        if let Some(result) = &self.result {
            debug!(?result, "game over");
        }
    }
}
