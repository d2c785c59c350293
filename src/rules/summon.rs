//! Putting minions and locations onto the board.

use tracing::debug;

use super::results::PlayResult;
use crate::cards::{CardId, Keyword, KeywordPayload, Zone};
use crate::core::{EngineError, EngineResult, EntityId, Game, PlayerId};
use crate::triggers::{EventKey, EventValue};

/// Marks the primary minion's slot in a Colossal piece list.
pub const COLOSSAL_SELF: CardId = CardId(0);

impl Game {
    /// Summon `id` onto `player`'s board.
    ///
    /// Colossal minions expand into their pieces when `allow_colossal` is
    /// set; each piece is summoned with `SummonCard` suppressed. Pieces that
    /// do not fit are skipped, and a slot is always kept for the body.
    pub fn summon(&mut self, id: EntityId, player: PlayerId, allow_colossal: bool) -> EngineResult<PlayResult> {
        let result = self.resolve_summon(id, player, allow_colossal)?;
        debug!(card = %id, %player, ?result, "summon");
        Ok(result)
    }

    fn resolve_summon(&mut self, id: EntityId, player: PlayerId, allow_colossal: bool) -> EngineResult<PlayResult> {
        if self.players[player].board.len() >= self.config.max_board_space {
            return Ok(PlayResult::Space);
        }

        self.broadcast(EventKey::SummonCard, EventValue::Card(id), player)?;

        let card = self.card_mut(id)?;
        card.owner = player;
        if card.has_keyword(Keyword::Charge) || card.has_keyword(Keyword::Titan) {
            card.ready();
        }
        if card.has_keyword(Keyword::Rush) {
            card.ready();
            card.can_attack_hero = false;
        }

        let dormant = card.keyword(Keyword::Dormant).cloned();

        if allow_colossal && card.has_keyword(Keyword::Colossal) {
            let pieces = card
                .keyword(Keyword::Colossal)
                .and_then(KeywordPayload::as_cards)
                .map(<[CardId]>::to_vec)
                .ok_or(EngineError::MissingPayload {
                    card: id,
                    keyword: Keyword::Colossal,
                })?;

            let mut body_pending = pieces.contains(&COLOSSAL_SELF);
            for piece in pieces {
                if piece == COLOSSAL_SELF {
                    let placed = self.with_suppressed(EventKey::SummonCard, |game| game.summon(id, player, false))?;
                    if placed == PlayResult::Space {
                        return Ok(PlayResult::Space);
                    }
                    body_pending = false;
                    continue;
                }
                // Pieces never take the body's slot.
                let board = self.players[player].board.len() + usize::from(body_pending);
                if board >= self.config.max_board_space {
                    debug!(card = %id, %piece, "no room for colossal piece");
                    continue;
                }
                let part = self.create_card(piece, player)?;
                if let Some(payload) = &dormant {
                    self.card_mut(part)?.set_keyword(Keyword::Dormant, payload.clone());
                }
                self.with_suppressed(EventKey::SummonCard, |game| game.summon(part, player, true))?;
            }
            return Ok(PlayResult::Colossal);
        }

        if let Some(payload) = dormant {
            let turns = payload.as_count().ok_or(EngineError::MissingPayload {
                card: id,
                keyword: Keyword::Dormant,
            })?;
            let wake = turns + i64::from(self.turn);
            let card = self.card_mut(id)?;
            card.set_keyword(Keyword::Dormant, wake);
            card.add_keyword(Keyword::Immune);
            card.sleepy = false;
        }

        self.card_mut(id)?.zone = Zone::Board;
        self.players[player].board.push(id);
        self.update_spell_damage(player);
        Ok(PlayResult::Success)
    }
}
