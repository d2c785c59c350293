//! Decision boundary between the rules and whoever plays the game.
//!
//! Resolvers pause only to ask a question: pick a target, or answer
//! yes/no. Both go through the `Controller` installed for the asked
//! player. Cancelling (`None` / `false`) unwinds the enclosing action
//! before it commits anything.
//!
//! ## Key Types
//!
//! - `Controller`: Trait implemented by humans-at-a-terminal, AIs and tests
//! - `TargetRequest`: What kind of target is wanted, and by whom
//! - `YesNoPrompt`: The typed yes/no questions the rules ask
//! - `ScriptedController` / `AutoController`: Shipped implementations

pub mod controllers;

pub use controllers::{AutoController, ScriptedController};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cards::{CardType, Keyword, Zone};
use crate::core::{EngineResult, EntityId, Game, PlayerId, Target};

/// Whose side a target must be on, relative to the asking player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[default]
    Any,
    Friendly,
    Enemy,
}

impl Side {
    #[must_use]
    pub fn admits(self, asker: PlayerId, owner: PlayerId) -> bool {
        match self {
            Side::Any => true,
            Side::Friendly => asker == owner,
            Side::Enemy => asker != owner,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetClass {
    #[default]
    Any,
    Minion,
    Hero,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetFlags {
    /// Locations on the board count as selectable cards.
    pub allow_locations: bool,
}

/// A request for the controller to pick a target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRequest {
    /// Player being asked.
    pub player: PlayerId,
    pub message: String,
    /// Card asking for the target, if any.
    pub source: Option<EntityId>,
    pub side: Side,
    pub class: TargetClass,
    pub flags: TargetFlags,
}

impl TargetRequest {
    #[must_use]
    pub fn new(player: PlayerId, message: impl Into<String>) -> Self {
        Self {
            player,
            message: message.into(),
            source: None,
            side: Side::Any,
            class: TargetClass::Any,
            flags: TargetFlags::default(),
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: EntityId) -> Self {
        self.source = Some(source);
        self
    }

    #[must_use]
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: TargetClass) -> Self {
        self.class = class;
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: TargetFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// Yes/no questions asked by the play resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNoPrompt {
    /// Forge this card instead of playing it?
    Forge(EntityId),
    /// Trade this card instead of playing it?
    Trade(EntityId),
    /// The card's condition is not met. Play it anyway?
    PlayAnyway(EntityId),
}

impl YesNoPrompt {
    #[must_use]
    pub fn card(self) -> EntityId {
        match self {
            YesNoPrompt::Forge(id) | YesNoPrompt::Trade(id) | YesNoPrompt::PlayAnyway(id) => id,
        }
    }

    /// Human-readable question.
    #[must_use]
    pub fn message(self, game: &Game) -> String {
        let name = game
            .card(self.card())
            .map_or_else(|_| self.card().to_string(), |c| c.name.clone());
        match self {
            YesNoPrompt::Forge(_) => format!("Forge {name}?"),
            YesNoPrompt::Trade(_) => format!("Trade {name}?"),
            YesNoPrompt::PlayAnyway(_) => {
                format!("{name} won't do anything right now. Play it anyway?")
            }
        }
    }
}

/// Answers the questions the rules ask a player.
///
/// Implementations must answer without changing the game; they only see it
/// by shared reference.
pub trait Controller {
    /// Pick a target, or `None` to cancel.
    fn prompt_target(&mut self, game: &Game, request: &TargetRequest) -> Option<Target>;

    fn prompt_yes_no(&mut self, game: &Game, player: PlayerId, prompt: &YesNoPrompt) -> bool;
}

impl Game {
    /// Every target `request` admits, friendly minions first, then enemy
    /// minions, then heroes (asker's first).
    #[must_use]
    pub fn legal_targets(&self, request: &TargetRequest) -> Vec<Target> {
        let asker = request.player;
        let mut targets = Vec::new();

        if request.class != TargetClass::Hero {
            for side in [asker, asker.opponent()] {
                if !request.side.admits(asker, side) {
                    continue;
                }
                for &id in &self.players[side].board {
                    let Ok(card) = self.card(id) else {
                        continue;
                    };
                    if card.zone != Zone::Board || !card.is_alive() {
                        continue;
                    }
                    if card.card_type == CardType::Location && !request.flags.allow_locations {
                        continue;
                    }
                    let hidden = card.has_keyword(Keyword::Stealth) || card.has_keyword(Keyword::Dormant);
                    if side != asker && hidden {
                        continue;
                    }
                    targets.push(Target::Card(id));
                }
            }
        }

        if request.class != TargetClass::Minion {
            for side in [asker, asker.opponent()] {
                if request.side.admits(asker, side) {
                    targets.push(Target::Player(side));
                }
            }
        }

        targets
    }

    /// Ask `request.player` for a target. An answer outside
    /// `legal_targets` counts as a cancel.
    pub fn prompt_target(&mut self, request: &TargetRequest) -> EngineResult<Option<Target>> {
        let Some(mut controller) = self.controllers[request.player].take() else {
            return Ok(None);
        };
        let answer = controller.prompt_target(self, request);
        self.controllers[request.player] = Some(controller);

        match answer {
            Some(target) if !self.legal_targets(request).contains(&target) => {
                warn!(%target, player = %request.player, "controller picked an illegal target");
                Ok(None)
            }
            other => Ok(other),
        }
    }

    pub fn prompt_yes_no(&mut self, player: PlayerId, prompt: YesNoPrompt) -> bool {
        let Some(mut controller) = self.controllers[player].take() else {
            return false;
        };
        let answer = controller.prompt_yes_no(self, player, &prompt);
        self.controllers[player] = Some(controller);
        answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardId, CardRegistry};
    use crate::core::GameConfig;

    fn game() -> Game {
        let mut registry = CardRegistry::new();
        registry.register(CardDefinition::minion(CardId::new(100), "Wolf", 1, 1, 1)).unwrap();
        registry.register(
            CardDefinition::minion(CardId::new(101), "Lurker", 1, 1, 1).with_keyword(Keyword::Stealth),
        ).unwrap();
        registry.register(CardDefinition::location(CardId::new(102), "Tower", 1, 2, 1)).unwrap();
        Game::new(GameConfig::default(), registry)
    }

    fn place(game: &mut Game, card_id: u32, player: PlayerId) -> EntityId {
        let id = game.create_card(CardId::new(card_id), player).unwrap();
        game.players[player].board.push(id);
        game.card_mut(id).unwrap().zone = Zone::Board;
        id
    }

    #[test]
    fn test_legal_targets_order_and_filters() {
        let mut game = game();
        let mine = place(&mut game, 100, PlayerId::FIRST);
        let tower = place(&mut game, 102, PlayerId::FIRST);
        let theirs = place(&mut game, 100, PlayerId::SECOND);
        let lurker = place(&mut game, 101, PlayerId::SECOND);

        let request = TargetRequest::new(PlayerId::FIRST, "Pick");
        let targets = game.legal_targets(&request);

        assert_eq!(
            targets,
            vec![
                Target::Card(mine),
                Target::Card(theirs),
                Target::Player(PlayerId::FIRST),
                Target::Player(PlayerId::SECOND),
            ]
        );
        assert!(!targets.contains(&Target::Card(lurker)));
        assert!(!targets.contains(&Target::Card(tower)));

        let request = request
            .with_side(Side::Friendly)
            .with_class(TargetClass::Minion)
            .with_flags(TargetFlags { allow_locations: true });
        assert_eq!(game.legal_targets(&request), vec![Target::Card(mine), Target::Card(tower)]);
    }

    #[test]
    fn test_prompt_without_controller_cancels() {
        let mut game = game();
        let request = TargetRequest::new(PlayerId::FIRST, "Pick");

        assert_eq!(game.prompt_target(&request).unwrap(), None);
        assert!(!game.prompt_yes_no(PlayerId::FIRST, YesNoPrompt::Trade(EntityId(0))));
    }

    #[test]
    fn test_illegal_answer_is_cancel() {
        let mut game = game();
        let lurker = place(&mut game, 101, PlayerId::SECOND);
        game.set_controller(
            PlayerId::FIRST,
            Box::new(ScriptedController::new().with_target(Some(Target::Card(lurker)))),
        );

        let request = TargetRequest::new(PlayerId::FIRST, "Pick");
        assert_eq!(game.prompt_target(&request).unwrap(), None);
    }

    #[test]
    fn test_prompt_message() {
        let mut game = game();
        let wolf = place(&mut game, 100, PlayerId::FIRST);

        assert_eq!(YesNoPrompt::Forge(wolf).message(&game), "Forge Wolf?");
        assert_eq!(YesNoPrompt::Trade(wolf).card(), wolf);
    }
}
