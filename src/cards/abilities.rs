//! Card-authored ability callbacks.
//!
//! ## Ability table
//!
//! Each card carries an `AbilityTable`: for every `Ability` kind, an ordered
//! list of callbacks. Callbacks receive the game mutably plus an
//! `AbilityContext` describing who fired them and why, and may re-enter the
//! resolvers (attack, play, summon, broadcast) freely.
//!
//! ## Outcomes
//!
//! - `Done`: the callback ran.
//! - `Refund`: the enclosing play or action must be undone.
//! - `Condition(met)`: answer of a `Condition` callback.
//!
//! ```
//! use hearth_rules::cards::{Ability, AbilityOutcome, AbilityTable};
//!
//! let mut table = AbilityTable::default();
//! table.push(Ability::Battlecry, |game, ctx| {
//!     game.player_mut(ctx.owner).armor += 2;
//!     Ok(AbilityOutcome::Done)
//! });
//!
//! assert_eq!(table.get(Ability::Battlecry).len(), 1);
//! assert!(table.get(Ability::Deathrattle).is_empty());
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

use crate::core::{EngineResult, EntityId, Game, PlayerId};
use crate::triggers::{EventKey, EventValue};

/// Ability kinds a card can author.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    Battlecry,
    Deathrattle,
    Cast,
    /// Fires on every recorded event while the card is on the board.
    Passive,
    /// Fires on every recorded event while the card is in hand.
    HandPassive,
    /// Fires on every event, recorded or not, while on the board.
    Tick,
    /// Fires on every event, recorded or not, while in hand.
    HandTick,
    Combo,
    Frenzy,
    Overkill,
    HonorableKill,
    Finale,
    Spellburst,
    Inspire,
    HeroPower,
    /// Location activation.
    Use,
    /// Play precondition. Callbacks answer with `AbilityOutcome::Condition`.
    Condition,
    /// Fires before a dead card leaves the board. `Refund` vetoes removal.
    Remove,
}

/// What a callback reports back to the activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityOutcome {
    Done,
    Refund,
    Condition(bool),
}

/// Everything a callback knows about why it is running.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AbilityContext {
    /// Owner of the card whose ability fired.
    pub owner: PlayerId,
    pub card: EntityId,
    pub ability: Ability,
    /// Event that triggered a Passive or Tick, if any.
    pub key: Option<EventKey>,
    pub value: EventValue,
    /// Marks manual activations, e.g. `"reborn"`.
    pub tag: Option<&'static str>,
}

impl AbilityContext {
    #[must_use]
    pub fn new(owner: PlayerId, card: EntityId, ability: Ability) -> Self {
        Self {
            owner,
            card,
            ability,
            key: None,
            value: EventValue::Null,
            tag: None,
        }
    }

    #[must_use]
    pub fn with_event(mut self, key: EventKey, value: EventValue) -> Self {
        self.key = Some(key);
        self.value = value;
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: &'static str, value: EventValue) -> Self {
        self.tag = Some(tag);
        self.value = value;
        self
    }
}

type Callback = dyn Fn(&mut Game, &AbilityContext) -> EngineResult<AbilityOutcome>;

/// Shared handle to one ability callback.
///
/// Cloning is an `Rc` bump, so copies of a card share their callbacks.
#[derive(Clone)]
pub struct AbilityFn(Rc<Callback>);

impl AbilityFn {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut Game, &AbilityContext) -> EngineResult<AbilityOutcome> + 'static,
    {
        Self(Rc::new(f))
    }

    pub fn call(&self, game: &mut Game, ctx: &AbilityContext) -> EngineResult<AbilityOutcome> {
        (self.0)(game, ctx)
    }
}

impl std::fmt::Debug for AbilityFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AbilityFn")
    }
}

/// Ability kind to ordered callbacks.
#[derive(Clone, Debug, Default)]
pub struct AbilityTable {
    entries: FxHashMap<Ability, Vec<AbilityFn>>,
}

impl AbilityTable {
    /// Append a callback to an ability.
    pub fn push<F>(&mut self, ability: Ability, f: F)
    where
        F: Fn(&mut Game, &AbilityContext) -> EngineResult<AbilityOutcome> + 'static,
    {
        self.push_fn(ability, AbilityFn::new(f));
    }

    pub fn push_fn(&mut self, ability: Ability, f: AbilityFn) {
        self.entries.entry(ability).or_default().push(f);
    }

    /// Callbacks for an ability, in registration order.
    #[must_use]
    pub fn get(&self, ability: Ability) -> &[AbilityFn] {
        self.entries.get(&ability).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn has(&self, ability: Ability) -> bool {
        !self.get(ability).is_empty()
    }

    /// Drop every callback of an ability.
    pub fn clear(&mut self, ability: Ability) {
        self.entries.remove(&ability);
    }

    /// Append all of `other`'s callbacks after this table's.
    pub fn merge(&mut self, other: &AbilityTable) {
        for (ability, fns) in &other.entries {
            self.entries
                .entry(*ability)
                .or_default()
                .extend(fns.iter().cloned());
        }
    }
}
