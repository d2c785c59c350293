//! Stock controllers.

use std::collections::VecDeque;

use super::{Controller, TargetRequest, YesNoPrompt};
use crate::core::{Game, PlayerId, Target};

/// Replays queued answers in order. Once a queue runs dry it cancels
/// target prompts and answers no.
#[derive(Clone, Debug, Default)]
pub struct ScriptedController {
    targets: VecDeque<Option<Target>>,
    answers: VecDeque<bool>,
}

impl ScriptedController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_target(mut self, target: Option<Target>) -> Self {
        self.targets.push_back(target);
        self
    }

    #[must_use]
    pub fn with_answer(mut self, answer: bool) -> Self {
        self.answers.push_back(answer);
        self
    }

    pub fn push_target(&mut self, target: Option<Target>) {
        self.targets.push_back(target);
    }

    pub fn push_answer(&mut self, answer: bool) {
        self.answers.push_back(answer);
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.targets.len() + self.answers.len()
    }
}

impl Controller for ScriptedController {
    fn prompt_target(&mut self, _game: &Game, _request: &TargetRequest) -> Option<Target> {
        self.targets.pop_front().flatten()
    }

    fn prompt_yes_no(&mut self, _game: &Game, _player: PlayerId, _prompt: &YesNoPrompt) -> bool {
        self.answers.pop_front().unwrap_or(false)
    }
}

/// Never suspends: says yes and takes the first legal target.
#[derive(Clone, Copy, Debug, Default)]
pub struct AutoController;

impl Controller for AutoController {
    fn prompt_target(&mut self, game: &Game, request: &TargetRequest) -> Option<Target> {
        game.legal_targets(request).into_iter().next()
    }

    fn prompt_yes_no(&mut self, _game: &Game, _player: PlayerId, _prompt: &YesNoPrompt) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardRegistry;
    use crate::core::{EntityId, GameConfig};

    #[test]
    fn test_scripted_answers_in_order() {
        let game = Game::new(GameConfig::default(), CardRegistry::new());
        let request = TargetRequest::new(PlayerId::FIRST, "Pick");
        let prompt = YesNoPrompt::Trade(EntityId(0));
        let mut controller = ScriptedController::new()
            .with_target(Some(Target::Player(PlayerId::SECOND)))
            .with_answer(true);

        assert_eq!(controller.remaining(), 2);
        assert_eq!(
            controller.prompt_target(&game, &request),
            Some(Target::Player(PlayerId::SECOND))
        );
        assert!(controller.prompt_yes_no(&game, PlayerId::FIRST, &prompt));
        assert_eq!(controller.prompt_target(&game, &request), None);
        assert!(!controller.prompt_yes_no(&game, PlayerId::FIRST, &prompt));
    }

    #[test]
    fn test_auto_picks_first_legal() {
        let game = Game::new(GameConfig::default(), CardRegistry::new());
        let request = TargetRequest::new(PlayerId::SECOND, "Pick");

        assert_eq!(
            AutoController.prompt_target(&game, &request),
            Some(Target::Player(PlayerId::SECOND))
        );
        assert!(AutoController.prompt_yes_no(&game, PlayerId::SECOND, &YesNoPrompt::Forge(EntityId(0))));
    }
}
