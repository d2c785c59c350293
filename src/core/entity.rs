//! Card instance handles and the attack/selection target union.
//!
//! Every card instance in a game lives in the game's card arena and is
//! addressed by an `EntityId`. Players are not entities; they are addressed
//! by `PlayerId`. Anything that can be attacked or selected is a `Target`.
//!
//! ## Usage
//!
//! ```
//! use hearth_rules::core::{EntityId, PlayerId, Target};
//!
//! let minion = Target::from(EntityId(4));
//! let hero = Target::from(PlayerId::new(1));
//!
//! assert_eq!(minion.as_card(), Some(EntityId(4)));
//! assert_eq!(hero.as_player(), Some(PlayerId::new(1)));
//! assert!(minion != hero);
//! ```

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Handle to a card instance in the game's card arena.
///
/// Handles are allocated sequentially and never reused, so an id doubles
/// as the per-instance unique id of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Index into the card arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Something that can be attacked or selected: a card or a player's hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    Card(EntityId),
    Player(PlayerId),
}

impl Target {
    /// The card handle, if this target is a card.
    #[must_use]
    pub const fn as_card(self) -> Option<EntityId> {
        match self {
            Target::Card(id) => Some(id),
            Target::Player(_) => None,
        }
    }

    /// The player, if this target is a player.
    #[must_use]
    pub const fn as_player(self) -> Option<PlayerId> {
        match self {
            Target::Player(id) => Some(id),
            Target::Card(_) => None,
        }
    }

    #[must_use]
    pub const fn is_card(self) -> bool {
        matches!(self, Target::Card(_))
    }
}

impl From<EntityId> for Target {
    fn from(id: EntityId) -> Self {
        Target::Card(id)
    }
}

impl From<PlayerId> for Target {
    fn from(id: PlayerId) -> Self {
        Target::Player(id)
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Card(id) => write!(f, "{id}"),
            Target::Player(id) => write!(f, "{id}"),
        }
    }
}
