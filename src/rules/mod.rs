//! Rule resolvers.
//!
//! Every resolver is an inherent method on `Game`:
//!
//! - `attack`: Attack legality and the combat keyword cascade
//! - `play`: Playing a card from hand, including Forge, Trade, Magnetic
//! - `summon`: Putting a minion or location on the board (Colossal, Dormant)
//! - `sweep`: Removing dead cards (Deathrattle, Remove, Reborn)
//! - `start_game` / `end_turn` / `draw_card`: The turn cycle
//! - `use_hero_power` / `use_location` / `use_titan`: Other board actions
//! - `deal_damage` / `heal_player` / `freeze`: Shared primitives
//!
//! Expected outcomes are returned as `AttackResult` / `PlayResult` values.
//! `Err` is reserved for broken card data and failing callbacks, and aborts
//! the action.

pub mod actions;
pub mod attack;
pub mod damage;
pub mod play;
pub mod results;
pub mod summon;
pub mod sweep;
pub mod turn;

pub use attack::{AttackFlags, Attacker};
pub use results::{AttackResult, GameResult, PlayResult};
pub use summon::COLOSSAL_SELF;
