//! Playing a card from hand.
//!
//! Checks run before anything is paid: Forge and Trade offers, cost, board
//! space, the card's own condition. Once the cost is charged the card
//! leaves the hand and can only be stopped by an opposing counter (which
//! keeps the payment) or a refund from its effect (which gives everything
//! back). A board that fills up while the effect runs does not unwind the
//! play; the card stays spent in Limbo.
//!
//! `PlayCardUnsafe` is raised before the type effect so passives can react
//! to it, but it is only committed to history once the effect did not
//! refund.

use tracing::debug;

use super::results::PlayResult;
use crate::cards::{Ability, CardType, CostType, Keyword, KeywordPayload, Tribe, Zone};
use crate::core::{EngineError, EngineResult, EntityId, Game, PlayerId, Target};
use crate::interact::{Side, TargetClass, TargetRequest, YesNoPrompt};
use crate::triggers::{Activation, EventKey, EventValue};

impl Game {
    /// Play `id` from `player`'s hand.
    pub fn play(&mut self, id: EntityId, player: PlayerId) -> EngineResult<PlayResult> {
        self.sweep()?;
        let result = self.resolve_play(id, player)?;
        debug!(card = %id, %player, ?result, "play");
        Ok(result)
    }

    fn resolve_play(&mut self, id: EntityId, player: PlayerId) -> EngineResult<PlayResult> {
        let card = self.card(id)?;
        if card.owner != player || card.zone != Zone::Hand {
            return Ok(PlayResult::Invalid);
        }

        if let Some(result) = self.try_forge(id, player)? {
            return Ok(result);
        }
        if let Some(result) = self.try_trade(id, player)? {
            return Ok(result);
        }

        let card = self.card(id)?;
        let (cost, cost_type, card_type) = (card.cost, card.cost_type, card.card_type);
        if self.players[player].resource(cost_type) < cost {
            return Ok(PlayResult::Cost);
        }
        if card_type.occupies_board() && self.players[player].board.len() >= self.config.max_board_space {
            return Ok(PlayResult::Space);
        }

        if self.activate(id, Ability::Condition)? == Activation::Condition(false)
            && !self.prompt_yes_no(player, YesNoPrompt::PlayAnyway(id))
        {
            return Ok(PlayResult::Refund);
        }

        *self.players[player].resource_mut(cost_type) -= cost;
        let hand_index = self.remove_from_zone(id)?.unwrap_or(usize::MAX);

        let counter = &mut self.players[player.opponent()].counter;
        if let Some(pos) = counter.iter().position(|&t| t == card_type) {
            counter.remove(pos);
            debug!(card = %id, "countered");
            return Ok(PlayResult::Counter);
        }

        self.broadcast_unrecorded(EventKey::PlayCardUnsafe, EventValue::Card(id), player)?;

        if self.players[player].resource(cost_type) == 0 {
            self.activate(id, Ability::Finale)?;
        }

        // A `Space` here means the effect already ran and filled the board.
        // The card is spent and only a refund gives it back.
        let result = self.play_type(id, player, card_type)?;
        if result == PlayResult::Refund {
            self.return_to_hand(id, player, hand_index, cost_type, cost)?;
            return Ok(result);
        }

        self.add_history(EventKey::PlayCardUnsafe, EventValue::Card(id), player);
        self.echo(id, player)?;
        self.combo(id, player)?;
        self.corrupt(id, player)?;

        self.broadcast(EventKey::PlayCard, EventValue::Card(id), player)?;
        let turn = self.turn;
        self.card_mut(id)?.turn_played = Some(turn);
        self.sweep()?;
        Ok(result)
    }

    fn try_forge(&mut self, id: EntityId, player: PlayerId) -> EngineResult<Option<PlayResult>> {
        let card = self.card(id)?;
        if !card.has_keyword(Keyword::Forge) {
            return Ok(None);
        }
        let forged = card
            .keyword(Keyword::Forge)
            .and_then(KeywordPayload::as_card)
            .ok_or(EngineError::MissingPayload {
                card: id,
                keyword: Keyword::Forge,
            })?;

        if !self.prompt_yes_no(player, YesNoPrompt::Forge(id)) {
            return Ok(None);
        }
        if self.players[player].mana < self.config.forge_cost {
            return Ok(Some(PlayResult::Cost));
        }

        self.players[player].mana -= self.config.forge_cost;
        self.remove_from_zone(id)?;
        let replacement = self.create_card(forged, player)?;
        self.add_to_hand(replacement, player)?;
        self.broadcast(EventKey::ForgeCard, EventValue::Card(id), player)?;
        Ok(Some(PlayResult::Forged))
    }

    fn try_trade(&mut self, id: EntityId, player: PlayerId) -> EngineResult<Option<PlayResult>> {
        if !self.card(id)?.has_keyword(Keyword::Tradeable) {
            return Ok(None);
        }
        if !self.prompt_yes_no(player, YesNoPrompt::Trade(id)) {
            return Ok(None);
        }

        let hero = &self.players[player];
        if hero.mana < self.config.trade_cost {
            return Ok(Some(PlayResult::Cost));
        }
        if hero.hand.len() >= self.config.max_hand_length || hero.deck.is_empty() {
            return Ok(Some(PlayResult::Space));
        }

        self.players[player].mana -= self.config.trade_cost;
        self.remove_from_zone(id)?;
        self.draw_card(player)?;
        self.shuffle_into_deck(id, player)?;
        self.broadcast(EventKey::TradeCard, EventValue::Card(id), player)?;
        Ok(Some(PlayResult::Traded))
    }

    fn play_type(&mut self, id: EntityId, player: PlayerId, card_type: CardType) -> EngineResult<PlayResult> {
        match card_type {
            CardType::Minion => {
                if self.magnetize(id, player)? {
                    return Ok(PlayResult::Magnetize);
                }
                if !self.card(id)?.has_keyword(Keyword::Dormant) && self.activate(id, Ability::Battlecry)?.is_refund() {
                    return Ok(PlayResult::Refund);
                }
                self.with_suppressed(EventKey::SummonCard, |game| game.summon(id, player, true))
            }
            CardType::Spell => {
                if self.activate(id, Ability::Cast)?.is_refund() {
                    return Ok(PlayResult::Refund);
                }
                if self.card(id)?.has_keyword(Keyword::Twinspell) {
                    let copy = self.perfect_copy(id)?;
                    self.card_mut(copy)?.remove_keyword(Keyword::Twinspell);
                    self.add_to_hand(copy, player)?;
                }
                for minion in self.players[player].board.clone() {
                    if self.card(minion)?.zone != Zone::Board {
                        continue;
                    }
                    if !self.activate(minion, Ability::Spellburst)?.is_missing() {
                        self.card_mut(minion)?.abilities.clear(Ability::Spellburst);
                    }
                }
                Ok(PlayResult::Success)
            }
            CardType::Weapon => {
                if self.activate(id, Ability::Battlecry)?.is_refund() {
                    return Ok(PlayResult::Refund);
                }
                self.equip_weapon(player, id)?;
                Ok(PlayResult::Success)
            }
            CardType::Hero => {
                if self.activate(id, Ability::Battlecry)?.is_refund() {
                    return Ok(PlayResult::Refund);
                }
                self.set_hero(player, id)?;
                Ok(PlayResult::Success)
            }
            CardType::Location => {
                let card = self.card_mut(id)?;
                card.attack = 0;
                card.durability = card.health;
                card.add_keyword(Keyword::Immune);
                card.cooldown = 0;
                self.with_suppressed(EventKey::SummonCard, |game| game.summon(id, player, true))
            }
            CardType::HeroPower => {
                self.set_hero_power(player, id)?;
                Ok(PlayResult::Success)
            }
        }
    }

    /// Merge a Magnetic minion into a friendly Mech. Returns false if no
    /// merge happened and the minion should be summoned normally.
    fn magnetize(&mut self, id: EntityId, player: PlayerId) -> EngineResult<bool> {
        if !self.card(id)?.has_keyword(Keyword::Magnetic) {
            return Ok(false);
        }
        let mut has_mech = false;
        for &minion in &self.players[player].board {
            let card = self.card(minion)?;
            has_mech |= card.zone == Zone::Board && card.is_tribe(Tribe::Mech);
        }
        if !has_mech {
            return Ok(false);
        }

        let request = TargetRequest::new(player, "Which minion do you want this card to Magnetize to?")
            .with_source(id)
            .with_side(Side::Friendly)
            .with_class(TargetClass::Minion);
        let Some(Target::Card(mech)) = self.prompt_target(&request)? else {
            return Ok(false);
        };
        if !self.card(mech)?.is_tribe(Tribe::Mech) {
            debug!(card = %mech, "magnetize target is not a mech");
            return Ok(false);
        }

        let source = self.card(id)?.clone();
        let target = self.card_mut(mech)?;
        target.add_stats(source.attack, source.health);
        for (keyword, payload) in source.keywords {
            if keyword != Keyword::Magnetic {
                target.keywords.entry(keyword).or_insert(payload);
            }
        }
        target.abilities.merge(&source.abilities);
        Ok(true)
    }

    /// Undo a play whose effect refunded: the card goes back to its slot
    /// and the cost is repaid.
    fn return_to_hand(
        &mut self,
        id: EntityId,
        player: PlayerId,
        index: usize,
        cost_type: CostType,
        cost: i64,
    ) -> EngineResult<()> {
        self.remove_from_zone(id)?;
        self.insert_into_hand(id, player, index)?;
        *self.players[player].resource_mut(cost_type) += cost;
        Ok(())
    }

    fn echo(&mut self, id: EntityId, player: PlayerId) -> EngineResult<()> {
        if !self.card(id)?.has_keyword(Keyword::Echo) {
            return Ok(());
        }
        let copy = self.fresh_copy(id)?;
        self.card_mut(copy)?.add_keyword(Keyword::Echo);
        self.add_to_hand(copy, player)?;
        Ok(())
    }

    /// Combo fires if `player`'s previous card was played this turn.
    fn combo(&mut self, id: EntityId, player: PlayerId) -> EngineResult<()> {
        let played_this_turn = self
            .history
            .last_stat(EventKey::PlayCard, player)
            .is_some_and(|(_, turn)| *turn == self.turn);
        if played_this_turn {
            self.activate(id, Ability::Combo)?;
        }
        Ok(())
    }

    /// Upgrade Corrupt cards in hand that cost less than the card just
    /// played. The upgrade takes the old card's slot.
    fn corrupt(&mut self, id: EntityId, player: PlayerId) -> EngineResult<()> {
        let cost = self.card(id)?.cost;
        for other in self.players[player].hand.clone() {
            if other == id {
                continue;
            }
            let card = self.card(other)?;
            let Some(upgrade) = card.keyword(Keyword::Corrupt).and_then(KeywordPayload::as_card) else {
                continue;
            };
            if cost <= card.cost {
                continue;
            }
            let index = self.remove_from_zone(other)?.unwrap_or(usize::MAX);
            let corrupted = self.create_card(upgrade, player)?;
            self.insert_into_hand(corrupted, player, index)?;
            debug!(from = %other, to = %corrupted, "corrupted");
        }
        Ok(())
    }
}
