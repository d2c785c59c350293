//! Card blueprints.
//!
//! `CardDefinition` holds the immutable data of a card: what gets copied
//! into a fresh `Card` every time one is created from the blueprint.
//! Instance state (damage taken, zone, per-turn flags) lives on `Card`.

use serde::{Deserialize, Serialize};

use super::abilities::{Ability, AbilityContext, AbilityOutcome, AbilityTable};
use super::keywords::{Keyword, KeywordPayload, Keywords, Tribe, Tribes};
use crate::core::{EngineResult, Game};

/// Blueprint identifier.
///
/// Identifies the kind of card (e.g. "Sheep"), not an instance in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Minion,
    Spell,
    Weapon,
    Hero,
    HeroPower,
    Location,
}

impl CardType {
    /// Minions and locations take a board slot.
    #[must_use]
    pub const fn occupies_board(self) -> bool {
        matches!(self, CardType::Minion | CardType::Location)
    }
}

/// Resource pool a card is paid from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostType {
    #[default]
    Mana,
    Armor,
    Health,
}

/// Static card definition.
///
/// ```
/// use hearth_rules::cards::{CardDefinition, CardId, Keyword, Tribe};
///
/// let wolf = CardDefinition::minion(CardId::new(100), "Wolf", 2, 2, 1)
///     .with_tribe(Tribe::Beast)
///     .with_keyword(Keyword::Rush);
///
/// assert_eq!(wolf.attack, 2);
/// assert!(wolf.keywords.contains_key(&Keyword::Rush));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardDefinition {
    pub id: CardId,
    pub name: String,
    pub text: String,
    pub card_type: CardType,
    pub cost: i64,
    pub cost_type: CostType,
    pub attack: i64,
    pub health: i64,
    /// Weapon durability or location uses.
    pub durability: i64,
    /// Armor a hero grants when played.
    pub armor: i64,
    /// Hero power a hero attaches when played.
    pub hero_power: Option<CardId>,
    /// Turns a location waits between uses.
    pub cooldown: i64,
    pub tribes: Tribes,
    pub keywords: Keywords,
    #[serde(skip)]
    pub abilities: AbilityTable,
}

impl CardDefinition {
    /// Bare blueprint of the given type with every number at zero.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, card_type: CardType) -> Self {
        Self {
            id,
            name: name.into(),
            text: String::new(),
            card_type,
            cost: 0,
            cost_type: CostType::Mana,
            attack: 0,
            health: 0,
            durability: 0,
            armor: 0,
            hero_power: None,
            cooldown: 0,
            tribes: Tribes::new(),
            keywords: Keywords::default(),
            abilities: AbilityTable::default(),
        }
    }

    #[must_use]
    pub fn minion(id: CardId, name: impl Into<String>, cost: i64, attack: i64, health: i64) -> Self {
        let mut def = Self::new(id, name, CardType::Minion);
        def.cost = cost;
        def.attack = attack;
        def.health = health;
        def
    }

    #[must_use]
    pub fn spell(id: CardId, name: impl Into<String>, cost: i64) -> Self {
        let mut def = Self::new(id, name, CardType::Spell);
        def.cost = cost;
        def
    }

    #[must_use]
    pub fn weapon(id: CardId, name: impl Into<String>, cost: i64, attack: i64, durability: i64) -> Self {
        let mut def = Self::new(id, name, CardType::Weapon);
        def.cost = cost;
        def.attack = attack;
        def.health = durability;
        def.durability = durability;
        def
    }

    #[must_use]
    pub fn hero(id: CardId, name: impl Into<String>, cost: i64, armor: i64) -> Self {
        let mut def = Self::new(id, name, CardType::Hero);
        def.cost = cost;
        def.armor = armor;
        def
    }

    #[must_use]
    pub fn hero_power(id: CardId, name: impl Into<String>, cost: i64) -> Self {
        let mut def = Self::new(id, name, CardType::HeroPower);
        def.cost = cost;
        def
    }

    /// Location with `uses` charges and `cooldown` turns between uses.
    #[must_use]
    pub fn location(id: CardId, name: impl Into<String>, cost: i64, uses: i64, cooldown: i64) -> Self {
        let mut def = Self::new(id, name, CardType::Location);
        def.cost = cost;
        def.health = uses;
        def.durability = uses;
        def.cooldown = cooldown;
        def
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_cost_type(mut self, cost_type: CostType) -> Self {
        self.cost_type = cost_type;
        self
    }

    #[must_use]
    pub fn with_tribe(mut self, tribe: Tribe) -> Self {
        self.tribes.push(tribe);
        self
    }

    /// Add a flag keyword.
    #[must_use]
    pub fn with_keyword(self, keyword: Keyword) -> Self {
        self.with_keyword_payload(keyword, KeywordPayload::Flag)
    }

    #[must_use]
    pub fn with_keyword_payload(mut self, keyword: Keyword, payload: impl Into<KeywordPayload>) -> Self {
        self.keywords.insert(keyword, payload.into());
        self
    }

    #[must_use]
    pub fn with_hero_power(mut self, hero_power: CardId) -> Self {
        self.hero_power = Some(hero_power);
        self
    }

    /// Register an ability callback.
    #[must_use]
    pub fn with_ability<F>(mut self, ability: Ability, f: F) -> Self
    where
        F: Fn(&mut Game, &AbilityContext) -> EngineResult<AbilityOutcome> + 'static,
    {
        self.abilities.push(ability, f);
        self
    }
}
