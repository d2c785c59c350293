//! Turn cycle: game start, end of turn, drawing.

use tracing::{debug, warn};

use crate::cards::{card_ids, Ability, Keyword, Zone};
use crate::core::{EngineResult, EntityId, Game, PlayerId, Target};
use crate::triggers::{EventKey, EventValue};

impl Game {
    /// Deal opening hands and start the first turn.
    ///
    /// Decks are drawn from the top (the end of the list) as built; call
    /// `shuffle_deck` first for a random order.
    pub fn start_game(&mut self) -> EngineResult<()> {
        let first = PlayerId::FIRST;
        self.players[first].empty_mana = 1;
        self.players[first].mana = 1;

        for _ in 0..self.config.first_hand_size {
            self.draw_card(first)?;
        }
        for _ in 0..self.config.second_hand_size {
            self.draw_card(first.opponent())?;
        }

        let coin = self.create_card(card_ids::THE_COIN, first.opponent())?;
        self.add_to_hand(coin, first.opponent())?;

        debug!(seed = self.rng.seed(), "game started");
        self.broadcast(EventKey::StartTurn, EventValue::Number(i64::from(self.turn)), first)?;
        Ok(())
    }

    /// End the current player's turn and start the opponent's.
    pub fn end_turn(&mut self) -> EngineResult<()> {
        let ending = self.current;
        self.sweep()?;
        self.broadcast(EventKey::EndTurn, EventValue::Number(i64::from(self.turn)), ending)?;

        for id in self.players[ending].board.clone() {
            self.card_mut(id)?.ready();
        }

        let unspent = self.players[ending].mana;
        if unspent > 0 {
            self.broadcast(EventKey::UnspentMana, EventValue::Number(unspent), ending)?;
        }

        for id in self.players[ending].hand.clone() {
            if self.card(id)?.has_keyword(Keyword::Echo) {
                self.remove_from_zone(id)?;
            }
        }

        let hero = &mut self.players[ending];
        hero.attack = 0;
        hero.can_attack = true;
        hero.frozen = false;

        self.turn += 1;
        self.current = ending.opponent();
        self.start_turn(self.current)
    }

    fn start_turn(&mut self, player: PlayerId) -> EngineResult<()> {
        let hero = &mut self.players[player];
        hero.add_empty_mana(1);
        hero.mana = hero.empty_mana - hero.overload;
        hero.overload = 0;
        hero.can_attack = true;
        hero.has_used_hero_power = false;
        hero.attack = 0;

        if let Some(weapon) = self.players[player].weapon {
            let card = self.card_mut(weapon)?;
            card.ready();
            let attack = card.attack;
            self.players[player].attack = attack;
        }

        for id in self.players[player].board.clone() {
            self.start_turn_card(id, player)?;
        }

        debug!(turn = self.turn, %player, "turn started");
        self.draw_card(player)?;
        self.broadcast(EventKey::StartTurn, EventValue::Number(i64::from(self.turn)), player)?;
        Ok(())
    }

    fn start_turn_card(&mut self, id: EntityId, player: PlayerId) -> EngineResult<()> {
        let turn = self.turn;
        let native_immune = {
            let card_id = self.card(id)?.card_id;
            self.registry.definition(card_id)?.keywords.contains_key(&Keyword::Immune)
        };

        let card = self.card_mut(id)?;
        card.can_attack_hero = true;
        if card.has_keyword(Keyword::Frozen) && card.turn_frozen.map_or(true, |frozen| turn > frozen + 1) {
            card.remove_keyword(Keyword::Frozen);
        }
        card.ready();

        let reveal = card
            .keyword_count(Keyword::Dormant)
            .is_some_and(|wake| i64::from(turn) > wake);
        if reveal {
            card.remove_keyword(Keyword::Dormant);
            card.sleepy = true;
            if !native_immune {
                card.remove_keyword(Keyword::Immune);
            }
        }
        if card.stealth_until.is_some_and(|until| turn > until) {
            card.remove_keyword(Keyword::Stealth);
            card.stealth_until = None;
        }
        if card.cooldown > 0 {
            card.cooldown -= 1;
        }

        if reveal {
            debug!(card = %id, %player, "dormant revealed");
            self.activate(id, Ability::Battlecry)?;
        }
        Ok(())
    }

    /// Draw the top card of `player`'s deck.
    ///
    /// An empty deck deals growing fatigue damage instead. With a full hand
    /// the drawn card is burned.
    pub fn draw_card(&mut self, player: PlayerId) -> EngineResult<Option<EntityId>> {
        let Some(&id) = self.players[player].deck.last() else {
            self.players[player].fatigue += 1;
            let fatigue = self.players[player].fatigue;
            debug!(%player, fatigue, "fatigue");
            self.deal_damage(Target::Player(player), fatigue)?;
            return Ok(None);
        };

        self.remove_from_zone(id)?;
        if self.players[player].hand.len() >= self.config.max_hand_length {
            warn!(card = %id, %player, "hand full, card burned");
            self.card_mut(id)?.zone = Zone::Graveyard;
            self.players[player].graveyard.push(id);
            return Ok(None);
        }

        self.insert_into_hand(id, player, usize::MAX)?;
        self.broadcast(EventKey::DrawCard, EventValue::Card(id), player)?;
        Ok(Some(id))
    }
}
