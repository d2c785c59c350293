//! Append-only event history.
//!
//! Records are kept in true chronological order, including events raised
//! from inside nested ability callbacks. Alongside the log, `History`
//! keeps per-(key, player) stats of `(value, turn)` pairs, which is what
//! Combo and similar "earlier this turn" checks read.
//!
//! The log is an `im::Vector`, so `snapshot()` is O(1) and a logger or AI
//! can hold a copy while the game moves on.

use im::Vector;
use rustc_hash::FxHashMap;

use super::event::{EventKey, EventRecord, EventValue};
use crate::core::PlayerId;

#[derive(Clone, Debug, Default)]
pub struct History {
    records: Vector<EventRecord>,
    stats: FxHashMap<(EventKey, PlayerId), Vec<(EventValue, u32)>>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the log.
    pub fn push(&mut self, record: EventRecord) {
        self.records.push_back(record);
    }

    /// Remember an event for `player` without logging it.
    pub fn add_stat(&mut self, key: EventKey, player: PlayerId, value: EventValue, turn: u32) {
        self.stats.entry((key, player)).or_default().push((value, turn));
    }

    /// Every `(value, turn)` seen for `key` on behalf of `player`, oldest first.
    #[must_use]
    pub fn stats(&self, key: EventKey, player: PlayerId) -> &[(EventValue, u32)] {
        self.stats.get(&(key, player)).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn last_stat(&self, key: EventKey, player: PlayerId) -> Option<&(EventValue, u32)> {
        self.stats(key, player).last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventRecord> {
        self.records.iter()
    }

    /// Records raised during `turn`.
    pub fn for_turn(&self, turn: u32) -> impl Iterator<Item = &EventRecord> {
        self.records.iter().filter(move |r| r.turn == turn)
    }

    /// Keys in recording order.
    #[must_use]
    pub fn keys(&self) -> Vec<EventKey> {
        self.records.iter().map(|r| r.key).collect()
    }

    /// Cheap copy of the log.
    #[must_use]
    pub fn snapshot(&self) -> Vector<EventRecord> {
        self.records.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
