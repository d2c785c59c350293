//! Game event types.
//!
//! Every state change the rules announce is an `EventKey` plus a typed
//! `EventValue` payload, raised on behalf of an acting player. Recorded
//! events become immutable `EventRecord`s in the history.
//!
//! | Key | Value |
//! |---|---|
//! | `StartTurn`, `EndTurn`, `UnspentMana` | `Number` |
//! | `PlayCard`, `PlayCardUnsafe`, `SummonCard`, `KillCard`, `DrawCard`, `AddCardToHand`, `DiscardCard`, `TradeCard`, `ForgeCard`, `HeroPower` | `Card` |
//! | `DamageCard`, `TakeDamage`, `HealthRestored`, `SpellDealsDamage` | `TargetAmount` |
//! | `Attack` | `Attack` |
//! | `CancelCard` | `CardAbility` |
//! | `Titan` | `CardPair(titan, ability card)` |
//! | `Dummy` | `Null` |

use serde::{Deserialize, Serialize};

use crate::cards::Ability;
use crate::core::{EntityId, PlayerId, Target};
use crate::rules::Attacker;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKey {
    StartTurn,
    EndTurn,
    PlayCard,
    /// Raised before a played card's effect runs. Only committed to history
    /// once the play can no longer be refunded.
    PlayCardUnsafe,
    SummonCard,
    KillCard,
    DamageCard,
    TakeDamage,
    HealthRestored,
    Attack,
    DrawCard,
    AddCardToHand,
    DiscardCard,
    TradeCard,
    ForgeCard,
    CancelCard,
    SpellDealsDamage,
    HeroPower,
    Titan,
    UnspentMana,
    /// Wakes up tick handlers without recording anything.
    Dummy,
}

/// Payload of an event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventValue {
    #[default]
    Null,
    Number(i64),
    Card(EntityId),
    Player(PlayerId),
    Attack { attacker: Attacker, target: Target },
    CardAbility { card: EntityId, ability: Ability },
    TargetAmount { target: Target, amount: i64 },
    CardPair(EntityId, EntityId),
}

impl EventValue {
    /// The card carried by `Card` values.
    #[must_use]
    pub fn as_card(&self) -> Option<EntityId> {
        match self {
            EventValue::Card(id) => Some(*id),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<i64> {
        match self {
            EventValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// An event as it was recorded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub key: EventKey,
    pub value: EventValue,
    /// Player on whose behalf the event was raised.
    pub player: PlayerId,
    pub turn: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_accessors() {
        assert_eq!(EventValue::Card(EntityId(3)).as_card(), Some(EntityId(3)));
        assert_eq!(EventValue::Number(4).as_card(), None);
        assert_eq!(EventValue::Number(4).as_number(), Some(4));
        assert_eq!(EventValue::default(), EventValue::Null);
    }

    #[test]
    fn test_record_serialization() {
        let record = EventRecord {
            key: EventKey::Attack,
            value: EventValue::Attack {
                attacker: Attacker::Card(EntityId(1)),
                target: Target::Player(PlayerId::SECOND),
            },
            player: PlayerId::FIRST,
            turn: 3,
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: EventRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
