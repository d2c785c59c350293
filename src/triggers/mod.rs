//! Event bus, history and ability activation.
//!
//! Every state change the rules announce goes through `Game::broadcast`.
//! Broadcasting records the event, then gives every card that cares a
//! chance to react through its ability callbacks, then runs the event
//! listeners.
//!
//! ## Key Components
//!
//! - [`EventKey`] / [`EventValue`]: What happened and its payload
//! - [`EventRecord`] / [`History`]: The chronological log plus per-player stats
//! - [`Listeners`]: Closures registered on a key with an optional lifespan
//! - [`Activation`]: Combined result of running a card's callbacks
//!
//! ## Example Usage
//!
//! ```
//! use hearth_rules::cards::CardRegistry;
//! use hearth_rules::core::{Game, GameConfig, PlayerId};
//! use hearth_rules::triggers::{EventKey, EventValue, ListenerAction};
//!
//! let mut game = Game::new(GameConfig::default(), CardRegistry::new());
//!
//! // Gain 1 armor the next two times a card is drawn.
//! game.add_listener(Some(EventKey::DrawCard), Some(2), |game, _, player| {
//!     game.player_mut(player).armor += 1;
//!     Ok(ListenerAction::Continue)
//! });
//!
//! for _ in 0..3 {
//!     game.broadcast(EventKey::DrawCard, EventValue::Null, PlayerId::FIRST).unwrap();
//! }
//!
//! assert_eq!(game.player(PlayerId::FIRST).armor, 2);
//! assert_eq!(game.history().len(), 3);
//! ```

pub mod activation;
pub mod dispatch;
pub mod event;
pub mod history;

pub use activation::Activation;
pub use dispatch::{ListenerAction, ListenerId, Listeners};
pub use event::{EventKey, EventRecord, EventValue};
pub use history::History;
