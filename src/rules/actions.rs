//! Board actions besides attacking and playing: hero powers, locations,
//! titans, plus weapon and hero bookkeeping.

use tracing::debug;

use super::results::PlayResult;
use crate::cards::{Ability, CardId, CardType, Keyword, KeywordPayload, Zone};
use crate::core::{EngineError, EngineResult, EntityId, Game, PlayerId};
use crate::triggers::{EventKey, EventValue};

impl Game {
    /// Use `player`'s hero power.
    pub fn use_hero_power(&mut self, player: PlayerId) -> EngineResult<PlayResult> {
        let hero = &self.players[player];
        let Some(power) = hero.hero_power else {
            return Ok(PlayResult::Invalid);
        };
        if hero.has_used_hero_power {
            return Ok(PlayResult::Cooldown);
        }
        let cost = self.card(power)?.cost;
        if self.players[player].mana < cost {
            return Ok(PlayResult::Cost);
        }

        if self.activate(power, Ability::HeroPower)?.is_refund() {
            return Ok(PlayResult::Refund);
        }

        let hero = &mut self.players[player];
        hero.mana -= cost;
        hero.has_used_hero_power = true;
        self.broadcast(EventKey::HeroPower, EventValue::Card(power), player)?;
        self.sweep()?;
        debug!(%player, "hero power used");
        Ok(PlayResult::Success)
    }

    /// Activate a friendly location.
    pub fn use_location(&mut self, id: EntityId) -> EngineResult<PlayResult> {
        let card = self.card(id)?;
        if card.card_type != CardType::Location || card.zone != Zone::Board {
            return Ok(PlayResult::Invalid);
        }
        if card.cooldown > 0 {
            return Ok(PlayResult::Cooldown);
        }

        if self.activate(id, Ability::Use)?.is_refund() {
            return Ok(PlayResult::Refund);
        }

        let cooldown = {
            let card_id = self.card(id)?.card_id;
            self.registry.definition(card_id)?.cooldown
        };
        let card = self.card_mut(id)?;
        card.durability -= 1;
        card.cooldown = cooldown;
        self.sweep()?;
        Ok(PlayResult::Success)
    }

    /// Use the titan ability at `index` of a Titan minion's list.
    pub fn use_titan(&mut self, id: EntityId, index: usize) -> EngineResult<PlayResult> {
        let card = self.card(id)?;
        let Some(abilities) = card.keyword(Keyword::Titan) else {
            return Ok(PlayResult::Invalid);
        };
        let mut remaining: Vec<CardId> = abilities
            .as_cards()
            .ok_or(EngineError::MissingPayload {
                card: id,
                keyword: Keyword::Titan,
            })?
            .to_vec();
        if card.zone != Zone::Board {
            return Ok(PlayResult::Invalid);
        }
        if card.sleepy {
            return Ok(PlayResult::Cooldown);
        }
        if index >= remaining.len() {
            return Ok(PlayResult::Invalid);
        }

        let owner = card.owner;
        let ability = self.create_card(remaining[index], owner)?;
        if self.activate(ability, Ability::Cast)?.is_refund() {
            return Ok(PlayResult::Refund);
        }

        remaining.remove(index);
        let card = self.card_mut(id)?;
        if remaining.is_empty() {
            card.remove_keyword(Keyword::Titan);
        } else {
            card.set_keyword(Keyword::Titan, KeywordPayload::Cards(remaining.into_iter().collect()));
            card.sleepy = true;
        }

        self.broadcast(EventKey::Titan, EventValue::CardPair(id, ability), owner)?;
        self.sweep()?;
        Ok(PlayResult::Success)
    }

    /// Equip a weapon, destroying the current one.
    pub fn equip_weapon(&mut self, player: PlayerId, weapon: EntityId) -> EngineResult<()> {
        self.destroy_weapon(player)?;
        self.remove_from_zone(weapon)?;

        let card = self.card_mut(weapon)?;
        card.owner = player;
        card.ready();
        let attack = card.attack;

        let hero = &mut self.players[player];
        hero.weapon = Some(weapon);
        hero.attack += attack;
        Ok(())
    }

    /// Destroy `player`'s weapon, firing its Deathrattle. Returns false if
    /// there was none.
    pub fn destroy_weapon(&mut self, player: PlayerId) -> EngineResult<bool> {
        let Some(weapon) = self.players[player].weapon else {
            return Ok(false);
        };
        self.activate(weapon, Ability::Deathrattle)?;

        let attack = self.card(weapon)?.attack;
        let hero = &mut self.players[player];
        hero.attack = (hero.attack - attack).max(0);
        hero.weapon = None;
        hero.graveyard.push(weapon);
        self.card_mut(weapon)?.zone = Zone::Graveyard;
        debug!(card = %weapon, %player, "weapon destroyed");
        Ok(true)
    }

    /// Replace `player`'s hero card.
    pub fn set_hero(&mut self, player: PlayerId, hero: EntityId) -> EngineResult<()> {
        self.remove_from_zone(hero)?;
        let card = self.card(hero)?;
        let (armor, power) = (card.armor, card.hero_power);

        self.players[player].hero = Some(hero);
        self.players[player].armor += armor;
        if let Some(power) = power {
            let power = self.create_card(power, player)?;
            self.set_hero_power(player, power)?;
        }
        Ok(())
    }

    pub fn set_hero_power(&mut self, player: PlayerId, power: EntityId) -> EngineResult<()> {
        self.remove_from_zone(power)?;
        self.card_mut(power)?.owner = player;
        self.players[player].hero_power = Some(power);
        self.players[player].has_used_hero_power = false;
        Ok(())
    }
}
