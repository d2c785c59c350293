//! Event broadcast and trigger dispatch.
//!
//! `broadcast(key, value, player)` runs synchronously, in this order:
//!
//! 1. `HandTick` on every hand card and `Tick` on every live board card,
//!    both players, for every event.
//! 2. Stop here if `key` is suppressed, after running the event listeners.
//! 3. Append the record to history (unless raised unrecorded) and to the
//!    per-player stats.
//! 4. `Passive` on live board cards of both players, first player first.
//! 5. `HandPassive` on hand cards, plus `Passive` on spells in hand.
//! 6. `Passive` on equipped weapons.
//! 7. The key's dedicated ability, if it has one (`HeroPower` fires
//!    `Inspire` on the acting player's board).
//! 8. Event listeners, oldest first.
//!
//! Callbacks may broadcast again; nested records land in history at the
//! moment they are raised, so the log is in true causal order. An `Err`
//! from any callback aborts the broadcast and propagates to its caller.
//!
//! ## Listeners
//!
//! A listener is a closure registered on one key (or every key) with an
//! optional lifespan. Each call answers with a `ListenerAction`:
//!
//! - `Continue`: counts towards the lifespan.
//! - `Destroy`: remove the listener now.
//! - `Reset`: restart the lifespan count.
//! - `Ignore`: does not count.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use tracing::trace;

use super::event::{EventKey, EventRecord, EventValue};
use crate::cards::{Ability, AbilityContext, CardType, Zone};
use crate::core::{EngineResult, EntityId, Game, PlayerId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListenerId(pub u32);

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListenerAction {
    Continue,
    Destroy,
    Reset,
    Ignore,
}

type ListenerFn = dyn Fn(&mut Game, &EventValue, PlayerId) -> EngineResult<ListenerAction>;

#[derive(Clone)]
struct Listener {
    /// `None` listens to every key.
    key: Option<EventKey>,
    /// `None` lives until destroyed.
    lifespan: Option<u32>,
    times: u32,
    callback: Rc<ListenerFn>,
}

/// Registered event listeners.
#[derive(Clone, Default)]
pub struct Listeners {
    entries: FxHashMap<ListenerId, Listener>,
    next_id: u32,
}

impl Listeners {
    fn insert(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, listener);
        id
    }

    /// Ids listening to `key`, oldest first.
    fn matching(&self, key: EventKey) -> Vec<ListenerId> {
        let mut ids: Vec<ListenerId> = self
            .entries
            .iter()
            .filter(|(_, l)| l.key.map_or(true, |k| k == key))
            .map(|(&id, _)| id)
            .collect();
        ids.sort_unstable();
        ids
    }

    fn callback(&self, id: ListenerId) -> Option<Rc<ListenerFn>> {
        self.entries.get(&id).map(|l| Rc::clone(&l.callback))
    }

    fn record(&mut self, id: ListenerId, action: ListenerAction) {
        let Some(listener) = self.entries.get_mut(&id) else {
            return;
        };
        match action {
            ListenerAction::Continue => listener.times += 1,
            ListenerAction::Reset => listener.times = 0,
            ListenerAction::Ignore => {}
            ListenerAction::Destroy => {
                self.entries.remove(&id);
                return;
            }
        }
        if listener.lifespan == Some(listener.times) {
            self.entries.remove(&id);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners").field("len", &self.entries.len()).finish()
    }
}

impl Game {
    /// Announce an event: record it and run every matching callback.
    ///
    /// Returns false if the key is currently suppressed.
    pub fn broadcast(&mut self, key: EventKey, value: EventValue, player: PlayerId) -> EngineResult<bool> {
        self.raise(key, value, player, true)
    }

    /// Announce an event without adding it to the history log.
    pub fn broadcast_unrecorded(&mut self, key: EventKey, value: EventValue, player: PlayerId) -> EngineResult<bool> {
        self.raise(key, value, player, false)
    }

    /// Wake every handler with an unrecorded `Dummy` event.
    pub fn broadcast_dummy(&mut self, player: PlayerId) -> EngineResult<bool> {
        self.raise(EventKey::Dummy, EventValue::Null, player, false)
    }

    /// Commit a record to history without dispatching it.
    pub fn add_history(&mut self, key: EventKey, value: EventValue, player: PlayerId) {
        self.history.push(EventRecord {
            key,
            value,
            player,
            turn: self.turn,
        });
    }

    /// Run `f` with `key` kept out of history. The previous suppression
    /// state is restored whether `f` succeeds or fails.
    pub fn with_suppressed<T>(
        &mut self,
        key: EventKey,
        f: impl FnOnce(&mut Game) -> EngineResult<T>,
    ) -> EngineResult<T> {
        self.suppressed.push(key);
        let result = f(self);
        if let Some(pos) = self.suppressed.iter().rposition(|k| *k == key) {
            self.suppressed.remove(pos);
        }
        result
    }

    #[must_use]
    pub fn is_suppressed(&self, key: EventKey) -> bool {
        self.suppressed.contains(&key)
    }

    /// Register a listener on `key`, or on every key if `None`.
    pub fn add_listener<F>(&mut self, key: Option<EventKey>, lifespan: Option<u32>, callback: F) -> ListenerId
    where
        F: Fn(&mut Game, &EventValue, PlayerId) -> EngineResult<ListenerAction> + 'static,
    {
        self.listeners.insert(Listener {
            key,
            lifespan,
            times: 0,
            callback: Rc::new(callback),
        })
    }

    /// Returns false if the listener was already gone.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.entries.remove(&id).is_some()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn raise(&mut self, key: EventKey, value: EventValue, player: PlayerId, record: bool) -> EngineResult<bool> {
        self.tick(key, &value)?;

        if self.is_suppressed(key) {
            trace!(?key, %player, "suppressed");
            self.fire_listeners(key, &value, player)?;
            return Ok(false);
        }

        trace!(?key, %player, recorded = record, "broadcast");
        if record {
            self.add_history(key, value.clone(), player);
        }
        self.history.add_stat(key, player, value.clone(), self.turn);

        self.card_update(key, &value, player)?;
        Ok(true)
    }

    fn tick(&mut self, key: EventKey, value: &EventValue) -> EngineResult<()> {
        for side in PlayerId::both() {
            for id in self.players[side].hand.clone() {
                if self.card(id)?.zone == Zone::Hand {
                    self.fire(id, Ability::HandTick, key, value)?;
                }
            }
            for id in self.players[side].board.clone() {
                if self.is_live_on_board(id)? {
                    self.fire(id, Ability::Tick, key, value)?;
                }
            }
        }
        Ok(())
    }

    fn card_update(&mut self, key: EventKey, value: &EventValue, player: PlayerId) -> EngineResult<()> {
        for side in PlayerId::both() {
            for id in self.players[side].board.clone() {
                if self.is_live_on_board(id)? {
                    self.fire(id, Ability::Passive, key, value)?;
                }
            }
        }

        for side in PlayerId::both() {
            for id in self.players[side].hand.clone() {
                if self.card(id)?.zone != Zone::Hand {
                    continue;
                }
                self.fire(id, Ability::HandPassive, key, value)?;
                if self.card(id)?.card_type == CardType::Spell {
                    self.fire(id, Ability::Passive, key, value)?;
                }
            }

            if let Some(weapon) = self.players[side].weapon {
                self.fire(weapon, Ability::Passive, key, value)?;
            }
        }

        if let Some(ability) = dedicated_ability(key) {
            for id in self.players[player].board.clone() {
                if self.is_live_on_board(id)? {
                    self.fire(id, ability, key, value)?;
                }
            }
        }

        self.fire_listeners(key, value, player)
    }

    fn fire_listeners(&mut self, key: EventKey, value: &EventValue, player: PlayerId) -> EngineResult<()> {
        for id in self.listeners.matching(key) {
            let Some(callback) = self.listeners.callback(id) else {
                continue;
            };
            let action = callback(self, value, player)?;
            self.listeners.record(id, action);
        }
        Ok(())
    }

    fn fire(&mut self, card: EntityId, ability: Ability, key: EventKey, value: &EventValue) -> EngineResult<()> {
        let owner = self.card(card)?.owner;
        let ctx = AbilityContext::new(owner, card, ability).with_event(key, value.clone());
        self.activate_ctx(ctx)?;
        Ok(())
    }

    fn is_live_on_board(&self, id: EntityId) -> EngineResult<bool> {
        let card = self.card(id)?;
        Ok(card.zone == Zone::Board && card.is_alive())
    }
}

/// Ability fired on the acting player's board for keys that have one.
fn dedicated_ability(key: EventKey) -> Option<Ability> {
    match key {
        EventKey::HeroPower => Some(Ability::Inspire),
        _ => None,
    }
}
