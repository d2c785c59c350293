//! Card registry for blueprint lookup.
//!
//! The `CardRegistry` stores every blueprint a game can instantiate. It is
//! filled before the game starts and read whenever a card is created.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId, CardType};
use crate::core::{EngineError, EngineResult};

/// Registry of card blueprints.
///
/// ```
/// use hearth_rules::cards::{CardDefinition, CardId, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::minion(CardId::new(100), "Wisp", 0, 1, 1)).unwrap();
///
/// assert_eq!(registry.definition(CardId::new(100)).unwrap().name, "Wisp");
/// assert!(registry.definition(CardId::new(404)).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition. Ids are unique; a second blueprint
    /// under the same id fails with `DuplicateCard`.
    pub fn register(&mut self, card: CardDefinition) -> EngineResult<()> {
        if self.cards.contains_key(&card.id) {
            return Err(EngineError::DuplicateCard(card.id));
        }
        self.cards.insert(card.id, card);
        Ok(())
    }

    /// Register `card` unless its id is taken. Returns whether it was added.
    pub fn register_if_absent(&mut self, card: CardDefinition) -> bool {
        if self.cards.contains_key(&card.id) {
            return false;
        }
        self.cards.insert(card.id, card);
        true
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Look up a blueprint, failing with `UnknownCard`.
    pub fn definition(&self, id: CardId) -> EngineResult<&CardDefinition> {
        self.cards.get(&id).ok_or(EngineError::UnknownCard(id))
    }

    /// Look up a blueprint by exact name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&CardDefinition> {
        self.cards.values().find(|c| c.name == name)
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    pub fn find_by_type(&self, card_type: CardType) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values().filter(move |c| c.card_type == card_type)
    }
}
