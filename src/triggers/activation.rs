//! Running a card's ability callbacks.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::event::{EventKey, EventValue};
use crate::cards::{Ability, AbilityContext, AbilityOutcome};
use crate::core::{EngineResult, EntityId, Game};

/// Combined answer of every callback an activation ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    /// The card has no callback for that ability.
    Missing,
    Done,
    /// A callback asked for the enclosing action to be undone.
    Refund,
    /// Conjunction of every `Condition` answer.
    Condition(bool),
}

impl Activation {
    #[must_use]
    pub fn is_refund(self) -> bool {
        self == Activation::Refund
    }

    #[must_use]
    pub fn is_missing(self) -> bool {
        self == Activation::Missing
    }
}

impl Game {
    /// Run every `ability` callback of `card`, in registration order.
    pub fn activate(&mut self, card: EntityId, ability: Ability) -> EngineResult<Activation> {
        let owner = self.card(card)?.owner;
        self.activate_ctx(AbilityContext::new(owner, card, ability))
    }

    /// Run callbacks with a prepared context.
    ///
    /// The callback list is cloned first, so callbacks can change the card's
    /// table without affecting this activation. A `Refund` stops the
    /// remaining callbacks and announces `CancelCard`, except on
    /// Deathrattle where it is ignored.
    pub fn activate_ctx(&mut self, ctx: AbilityContext) -> EngineResult<Activation> {
        let callbacks = self.card(ctx.card)?.abilities.get(ctx.ability).to_vec();
        if callbacks.is_empty() {
            return Ok(Activation::Missing);
        }

        let mut condition: Option<bool> = None;
        for callback in callbacks {
            match callback.call(self, &ctx)? {
                AbilityOutcome::Done => {}
                AbilityOutcome::Condition(met) => {
                    condition = Some(condition.unwrap_or(true) && met);
                }
                AbilityOutcome::Refund if ctx.ability == Ability::Deathrattle => {}
                AbilityOutcome::Refund => {
                    debug!(card = %ctx.card, ability = ?ctx.ability, "refund");
                    let value = EventValue::CardAbility {
                        card: ctx.card,
                        ability: ctx.ability,
                    };
                    self.broadcast(EventKey::CancelCard, value, ctx.owner)?;
                    return Ok(Activation::Refund);
                }
            }
        }

        Ok(condition.map_or(Activation::Done, Activation::Condition))
    }
}
