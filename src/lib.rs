//! # hearth-rules
//!
//! A two-player, Hearthstone-style card game rules engine.
//!
//! ## Design Principles
//!
//! 1. **Explicit Context**: All state lives in one `Game` value that every
//!    resolver and every card callback receives as `&mut Game`.
//!
//! 2. **Arena Cards**: Cards are addressed by `EntityId` handles into the
//!    game's card arena. A card's owner is a `PlayerId`, not a reference.
//!
//! 3. **Results, Not Errors**: Expected rule outcomes (not enough mana,
//!    Taunt in the way) are returned as `AttackResult` / `PlayResult`.
//!    `EngineError` is reserved for broken card data.
//!
//! 4. **Synchronous Cascades**: Card callbacks may re-enter attack, play,
//!    summon and broadcast. Every cascade completes before the outer call
//!    returns, and history records events in true causal order.
//!
//! ## Modules
//!
//! - `core`: Entity handles, players, game context, RNG, configuration, errors
//! - `cards`: Blueprints, instances, keywords, ability callbacks, registry
//! - `triggers`: Event broadcast, history, listeners, ability activation
//! - `interact`: The controller boundary for target and yes/no prompts
//! - `rules`: Attack, play, summon, sweep, turn cycle and board actions
//!
//! ## Example
//!
//! ```
//! use hearth_rules::{AttackFlags, AttackResult, CardDefinition, CardId, CardRegistry, Game, GameConfig, PlayResult, PlayerId};
//!
//! let mut registry = CardRegistry::new();
//! registry.register(CardDefinition::minion(CardId::new(100), "Raider", 2, 3, 2)).unwrap();
//!
//! let mut game = Game::new(GameConfig::default().with_seed(7), registry);
//! let p1 = PlayerId::FIRST;
//! game.build_deck(p1, &[CardId::new(100); 5]).unwrap();
//! game.build_deck(p1.opponent(), &[CardId::new(100); 5]).unwrap();
//! game.start_game().unwrap();
//!
//! // Skip to player 1's second turn so there is mana for the Raider.
//! game.end_turn().unwrap();
//! game.end_turn().unwrap();
//!
//! let raider = game.hand(p1)[0];
//! assert_eq!(game.play(raider, p1).unwrap(), PlayResult::Success);
//!
//! // Fresh minions are sleepy.
//! let result = game.attack(raider, p1.opponent(), AttackFlags::default()).unwrap();
//! assert_eq!(result, AttackResult::Sleepy);
//! ```

pub mod cards;
pub mod core;
pub mod interact;
pub mod rules;
pub mod triggers;

// Re-export commonly used types
pub use crate::core::{
    EngineError, EngineResult, EntityId, Game, GameConfig, GameRng, Player, PlayerId, PlayerMap,
    RngSnapshot, Target,
};

pub use crate::cards::{
    card_ids, Ability, AbilityContext, AbilityOutcome, Card, CardDefinition, CardId, CardRegistry, CardType,
    CostType, Keyword, KeywordPayload, Tribe, Zone,
};

pub use crate::triggers::{Activation, EventKey, EventRecord, EventValue, History, ListenerAction, ListenerId};

pub use crate::interact::{AutoController, Controller, ScriptedController, Side, TargetClass, TargetRequest, YesNoPrompt};

pub use crate::rules::{AttackFlags, AttackResult, Attacker, GameResult, PlayResult};
