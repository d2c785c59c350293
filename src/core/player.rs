//! Player identification, per-player storage and player state.
//!
//! ## PlayerId
//!
//! Exactly two seats: `PlayerId::FIRST` starts the game, `PlayerId::SECOND`
//! receives The Coin.
//!
//! ## PlayerMap
//!
//! Two-entry per-player storage with O(1) indexing by `PlayerId`.
//!
//! ## Player
//!
//! Resource pools, zones and per-turn flags of one player. Zones hold
//! `EntityId` handles into the game's card arena.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::entity::EntityId;
use crate::cards::{CardType, CostType};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    pub const FIRST: PlayerId = PlayerId(0);
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a new player ID. Only 0 and 1 are valid seats.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both seats, first player first.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [PlayerId::FIRST, PlayerId::SECOND].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use hearth_rules::core::{PlayerId, PlayerMap};
///
/// let mut health: PlayerMap<i64> = PlayerMap::with_value(30);
/// health[PlayerId::SECOND] -= 4;
///
/// assert_eq!(health[PlayerId::FIRST], 30);
/// assert_eq!(health[PlayerId::SECOND], 26);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// State of one player.
///
/// `attack` is the hero's temporary combat attack (weapon or hero power).
/// `spell_damage` is derived from the board and recomputed whenever the
/// board changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,

    // === Resources ===
    pub mana: i64,
    /// Mana crystals, refilled at the start of each turn.
    pub empty_mana: i64,
    pub max_mana: i64,
    /// Locked mana for next turn.
    pub overload: i64,
    pub health: i64,
    pub max_health: i64,
    pub armor: i64,
    pub attack: i64,
    pub spell_damage: i64,
    pub corpses: i64,
    pub fatigue: i64,

    // === Zones ===
    pub hand: Vec<EntityId>,
    pub deck: Vec<EntityId>,
    pub board: Vec<EntityId>,
    pub graveyard: Vec<EntityId>,
    pub weapon: Option<EntityId>,
    pub hero: Option<EntityId>,
    pub hero_power: Option<EntityId>,

    // === Flags ===
    pub can_attack: bool,
    pub has_used_hero_power: bool,
    pub frozen: bool,
    pub immune: bool,

    /// Card types this player counters when the opponent plays them.
    pub counter: SmallVec<[CardType; 2]>,
}

impl Player {
    /// Create a player with full health and no mana.
    #[must_use]
    pub fn new(id: PlayerId, starting_health: i64, max_mana: i64) -> Self {
        Self {
            id,
            mana: 0,
            empty_mana: 0,
            max_mana,
            overload: 0,
            health: starting_health,
            max_health: starting_health,
            armor: 0,
            attack: 0,
            spell_damage: 0,
            corpses: 0,
            fatigue: 0,
            hand: Vec::new(),
            deck: Vec::new(),
            board: Vec::new(),
            graveyard: Vec::new(),
            weapon: None,
            hero: None,
            hero_power: None,
            can_attack: true,
            has_used_hero_power: false,
            frozen: false,
            immune: false,
            counter: SmallVec::new(),
        }
    }

    /// The pool a card of `cost_type` is paid from.
    #[must_use]
    pub fn resource(&self, cost_type: CostType) -> i64 {
        match cost_type {
            CostType::Mana => self.mana,
            CostType::Armor => self.armor,
            CostType::Health => self.health,
        }
    }

    pub fn resource_mut(&mut self, cost_type: CostType) -> &mut i64 {
        match cost_type {
            CostType::Mana => &mut self.mana,
            CostType::Armor => &mut self.armor,
            CostType::Health => &mut self.health,
        }
    }

    /// Add mana, capped at `cap`. Returns true if the cap was hit.
    pub fn refresh_mana(&mut self, amount: i64, cap: i64) -> bool {
        self.mana += amount;
        if self.mana > cap {
            self.mana = cap;
            return true;
        }
        false
    }

    /// Add empty mana crystals, capped at `max_mana`.
    pub fn add_empty_mana(&mut self, amount: i64) -> bool {
        self.empty_mana += amount;
        if self.empty_mana > self.max_mana {
            self.empty_mana = self.max_mana;
            return true;
        }
        false
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}
