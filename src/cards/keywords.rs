//! Keywords and tribes.
//!
//! A keyword is a named modifier on a card. Most are plain flags; a few
//! carry a payload:
//!
//! | Keyword | Payload |
//! |---|---|
//! | `Dormant` | `Count(turns)` on the blueprint, `Count(wake turn)` once summoned |
//! | `Forgetful` | `Flag` or `Count(1)` armed, `Count(2)` disarmed |
//! | `Colossal` | `Cards(ids)`, `CardId(0)` marks where the body goes |
//! | `Titan` | `Cards(ids)` of the remaining titan abilities |
//! | `Forge` / `Corrupt` | `Card(id)` of the replacement |
//! | `SpellDamage` | `Count(bonus)` |

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::definition::CardId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Keyword {
    DivineShield,
    Dormant,
    Lifesteal,
    Poisonous,
    Reborn,
    Rush,
    Stealth,
    Taunt,
    Tradeable,
    Forge,
    Windfury,
    MegaWindfury,
    Charge,
    Unbreakable,
    UnlimitedAttacks,
    Echo,
    Magnetic,
    Twinspell,
    Frozen,
    Immune,
    Corrupt,
    Colossal,
    Cleave,
    Titan,
    Forgetful,
    CantAttack,
    SpellDamage,
}

/// Value stored alongside a keyword.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeywordPayload {
    #[default]
    Flag,
    Count(i64),
    Card(CardId),
    Cards(SmallVec<[CardId; 4]>),
}

impl KeywordPayload {
    #[must_use]
    pub fn as_count(&self) -> Option<i64> {
        match self {
            KeywordPayload::Count(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_card(&self) -> Option<CardId> {
        match self {
            KeywordPayload::Card(id) => Some(*id),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_cards(&self) -> Option<&[CardId]> {
        match self {
            KeywordPayload::Cards(ids) => Some(ids),
            _ => None,
        }
    }
}

impl From<i64> for KeywordPayload {
    fn from(n: i64) -> Self {
        KeywordPayload::Count(n)
    }
}

impl From<i32> for KeywordPayload {
    fn from(n: i32) -> Self {
        KeywordPayload::Count(i64::from(n))
    }
}

impl From<CardId> for KeywordPayload {
    fn from(id: CardId) -> Self {
        KeywordPayload::Card(id)
    }
}

impl From<Vec<CardId>> for KeywordPayload {
    fn from(ids: Vec<CardId>) -> Self {
        KeywordPayload::Cards(ids.into())
    }
}

/// Keyword set of a card.
pub type Keywords = FxHashMap<Keyword, KeywordPayload>;

/// Minion tribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tribe {
    Beast,
    Demon,
    Dragon,
    Elemental,
    Mech,
    Murloc,
    Naga,
    Pirate,
    Quilboar,
    Totem,
    Undead,
    /// Counts as every tribe.
    All,
}

pub type Tribes = SmallVec<[Tribe; 2]>;

/// True if `tribes` contains `tribe` directly or through `All`.
#[must_use]
pub fn matches_tribe(tribes: &[Tribe], tribe: Tribe) -> bool {
    tribes.iter().any(|t| *t == tribe || *t == Tribe::All)
}
