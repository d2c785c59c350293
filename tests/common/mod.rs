//! Shared fixtures for the integration tests.
//!
//! Custom blueprints are numbered from 100 upwards; the built-in ones
//! (Sheep, The Coin) are installed by `Game::new`.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use hearth_rules::{
    Ability, AbilityOutcome, CardDefinition, CardId, CardRegistry, EntityId, Game, GameConfig, PlayerId,
    ScriptedController,
};

pub const P1: PlayerId = PlayerId::FIRST;
pub const P2: PlayerId = PlayerId::SECOND;

/// Build a game over the given blueprints.
pub fn game(cards: Vec<CardDefinition>) -> Game {
    game_with_config(GameConfig::default().with_seed(42), cards)
}

pub fn game_with_config(config: GameConfig, cards: Vec<CardDefinition>) -> Game {
    let mut registry = CardRegistry::new();
    for card in cards {
        registry.register(card).unwrap();
    }
    Game::new(config, registry)
}

/// Summon a card for `player` and make it ready to attack.
pub fn summon(game: &mut Game, card_id: u32, player: PlayerId) -> EntityId {
    let id = game.create_card(CardId::new(card_id), player).unwrap();
    game.summon(id, player, true).unwrap();
    game.card_mut(id).unwrap().ready();
    id
}

/// Put a fresh card into `player`'s hand.
pub fn give(game: &mut Game, card_id: u32, player: PlayerId) -> EntityId {
    let id = game.create_card(CardId::new(card_id), player).unwrap();
    assert!(game.add_to_hand(id, player).unwrap());
    id
}

pub fn script(game: &mut Game, player: PlayerId, controller: ScriptedController) {
    game.set_controller(player, Box::new(controller));
}

/// A shared counter for callbacks to bump.
#[derive(Clone, Default)]
pub struct Counter(Rc<Cell<u32>>);

impl Counter {
    pub fn get(&self) -> u32 {
        self.0.get()
    }

    pub fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }

    /// A callback that bumps this counter.
    pub fn ability(&self) -> impl Fn(&mut Game, &hearth_rules::AbilityContext) -> hearth_rules::EngineResult<AbilityOutcome> {
        let counter = self.clone();
        move |_, _| {
            counter.bump();
            Ok(AbilityOutcome::Done)
        }
    }
}

/// A minion that gives its owner `armor` when `ability` fires.
pub fn armor_minion(id: u32, name: &str, attack: i64, health: i64, ability: Ability, armor: i64) -> CardDefinition {
    CardDefinition::minion(CardId::new(id), name, 1, attack, health).with_ability(ability, move |game, ctx| {
        game.player_mut(ctx.owner).armor += armor;
        Ok(AbilityOutcome::Done)
    })
}
