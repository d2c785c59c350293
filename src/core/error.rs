//! Programmer-error-class failures.
//!
//! Rule outcomes (not enough mana, taunt in the way) are result codes, not
//! errors. An `EngineError` means the game cannot continue: a blueprint is
//! missing, a card is malformed, or an ability callback failed.

use thiserror::Error;

use super::entity::EntityId;
use crate::cards::{CardId, Keyword};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Unknown card blueprint: {0}")]
    UnknownCard(CardId),

    #[error("Card blueprint {0} is already registered")]
    DuplicateCard(CardId),

    #[error("Entity not found: {0}")]
    MissingEntity(EntityId),

    #[error("{card} has {keyword:?} without the payload it requires")]
    MissingPayload { card: EntityId, keyword: Keyword },

    #[error("Ability failed: {0}")]
    Ability(String),
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
