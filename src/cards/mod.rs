//! Card system: blueprints, instances, keywords, abilities, registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for blueprints
//! - `CardDefinition`: Static card data and its ability callbacks
//! - `Card`: Runtime card state (zone, owner, stats, timers)
//! - `Keyword` / `KeywordPayload`: Named modifiers, some with data
//! - `Ability` / `AbilityTable`: Card-authored callbacks by kind
//! - `CardRegistry`: Blueprint lookup
//! - `catalog`: Built-in blueprints such as The Coin

pub mod abilities;
pub mod catalog;
pub mod definition;
pub mod instance;
pub mod keywords;
pub mod registry;

pub use abilities::{Ability, AbilityContext, AbilityFn, AbilityOutcome, AbilityTable};
pub use catalog::card_ids;
pub use definition::{CardDefinition, CardId, CardType, CostType};
pub use instance::{Card, Zone};
pub use keywords::{matches_tribe, Keyword, KeywordPayload, Keywords, Tribe, Tribes};
pub use registry::CardRegistry;
