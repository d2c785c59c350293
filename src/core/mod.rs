//! Core engine types: entities, players, game context, RNG, configuration, errors.

pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::GameConfig;
pub use entity::{EntityId, Target};
pub use error::{EngineError, EngineResult};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, RngSnapshot};
pub use state::Game;
