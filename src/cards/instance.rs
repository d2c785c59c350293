//! Card instances - runtime card state.
//!
//! A `Card` is created from a `CardDefinition` whenever a card is drawn into
//! a deck, summoned, or generated by an effect. It copies the blueprint's
//! numbers, keywords and callbacks, then tracks everything that changes
//! during play: damage, zone, per-turn attack state, timers.
//!
//! ## Zones
//!
//! A card is in exactly one zone. `Limbo` holds cards that exist but sit in
//! none of the four play zones: freshly created cards, the equipped weapon,
//! the active hero and hero power, spent spells and countered cards.

use serde::{Deserialize, Serialize};

use super::abilities::AbilityTable;
use super::definition::{CardDefinition, CardId, CardType, CostType};
use super::keywords::{matches_tribe, Keyword, KeywordPayload, Keywords, Tribe, Tribes};
use crate::core::{EntityId, PlayerId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Hand,
    Board,
    Deck,
    Graveyard,
    Limbo,
}

/// A card instance in a game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    /// Arena handle, unique per instance.
    pub uuid: EntityId,
    /// Blueprint this instance was created from.
    pub card_id: CardId,
    pub name: String,
    pub text: String,
    pub card_type: CardType,
    pub owner: PlayerId,
    pub zone: Zone,

    pub cost: i64,
    pub cost_type: CostType,
    pub attack: i64,
    pub health: i64,
    pub max_health: i64,
    pub durability: i64,
    pub armor: i64,
    pub hero_power: Option<CardId>,
    /// Turns until a location can be used again.
    pub cooldown: i64,

    pub tribes: Tribes,
    pub keywords: Keywords,
    #[serde(skip)]
    pub abilities: AbilityTable,

    // === Combat state ===
    pub sleepy: bool,
    pub attack_times: i64,
    pub can_attack_hero: bool,

    // === Timers ===
    pub turn_played: Option<u32>,
    pub turn_frozen: Option<u32>,
    pub turn_killed: Option<u32>,
    /// Turn at which a temporary Stealth wears off.
    pub stealth_until: Option<u32>,
}

impl Card {
    /// Instantiate a blueprint.
    #[must_use]
    pub fn from_definition(uuid: EntityId, def: &CardDefinition, owner: PlayerId) -> Self {
        Self {
            uuid,
            card_id: def.id,
            name: def.name.clone(),
            text: def.text.clone(),
            card_type: def.card_type,
            owner,
            zone: Zone::Limbo,
            cost: def.cost,
            cost_type: def.cost_type,
            attack: def.attack,
            health: def.health,
            max_health: def.health,
            durability: def.durability,
            armor: def.armor,
            hero_power: def.hero_power,
            cooldown: 0,
            tribes: def.tribes.clone(),
            keywords: def.keywords.clone(),
            abilities: def.abilities.clone(),
            sleepy: true,
            attack_times: 1,
            can_attack_hero: true,
            turn_played: None,
            turn_frozen: None,
            turn_killed: None,
            stealth_until: None,
        }
    }

    // === Keywords ===

    #[must_use]
    pub fn has_keyword(&self, keyword: Keyword) -> bool {
        self.keywords.contains_key(&keyword)
    }

    #[must_use]
    pub fn keyword(&self, keyword: Keyword) -> Option<&KeywordPayload> {
        self.keywords.get(&keyword)
    }

    /// Numeric payload of a keyword, if it has one.
    #[must_use]
    pub fn keyword_count(&self, keyword: Keyword) -> Option<i64> {
        self.keyword(keyword).and_then(KeywordPayload::as_count)
    }

    /// Add a flag keyword. Returns false if the card already had it.
    pub fn add_keyword(&mut self, keyword: Keyword) -> bool {
        if self.has_keyword(keyword) {
            return false;
        }
        self.keywords.insert(keyword, KeywordPayload::Flag);
        true
    }

    /// Insert or overwrite a keyword's payload.
    pub fn set_keyword(&mut self, keyword: Keyword, payload: impl Into<KeywordPayload>) {
        self.keywords.insert(keyword, payload.into());
    }

    pub fn remove_keyword(&mut self, keyword: Keyword) -> Option<KeywordPayload> {
        self.keywords.remove(&keyword)
    }

    // === Stats ===

    /// Locations and weapons live on durability, everything else on health.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        if matches!(self.card_type, CardType::Location | CardType::Weapon) {
            self.durability > 0
        } else {
            self.health > 0
        }
    }

    /// Raise attack and health (and the health ceiling).
    pub fn add_stats(&mut self, attack: i64, health: i64) {
        self.attack += attack;
        self.health += health;
        self.max_health += health;
    }

    /// Restore health up to the ceiling. Returns the amount restored.
    pub fn heal(&mut self, amount: i64) -> i64 {
        let before = self.health;
        self.health = (self.health + amount).min(self.max_health).max(before);
        self.health - before
    }

    /// Refresh the per-turn attack budget.
    pub fn ready(&mut self) {
        self.sleepy = false;
        self.attack_times = if self.has_keyword(Keyword::MegaWindfury) {
            4
        } else if self.has_keyword(Keyword::Windfury) {
            2
        } else {
            1
        };
    }

    #[must_use]
    pub fn is_tribe(&self, tribe: Tribe) -> bool {
        matches_tribe(&self.tribes, tribe)
    }

    /// Spell damage this card contributes while on the board.
    #[must_use]
    pub fn spell_damage(&self) -> i64 {
        self.keyword_count(Keyword::SpellDamage).unwrap_or(0)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.card_type {
            CardType::Minion | CardType::Weapon => {
                write!(f, "{} [{}/{}]", self.name, self.attack, self.health)
            }
            CardType::Location => write!(f, "{} [{} uses]", self.name, self.durability),
            _ => write!(f, "{}", self.name),
        }
    }
}
