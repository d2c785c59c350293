//! The game context.
//!
//! `Game` owns everything a match consists of: the card arena, both
//! players, the blueprint registry, the RNG, the event history and the
//! controllers that answer prompts. Resolvers and ability callbacks all
//! receive it explicitly as `&mut Game`; there is no global "current game".
//!
//! ## Arena
//!
//! Cards are never removed from the arena. Leaving play moves a card to
//! the graveyard or to `Zone::Limbo`, so an `EntityId` stays valid for the
//! whole game and history records can keep referring to it.
//!
//! ## Zone moves
//!
//! Player zones (`hand`, `deck`, `board`, `graveyard`) hold handles; the
//! card's own `zone` field always agrees with the list it is in. The
//! helpers here keep both in sync.

use rustc_hash::FxHashSet;

use super::config::GameConfig;
use super::entity::EntityId;
use super::error::{EngineError, EngineResult};
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{catalog, Card, CardId, CardRegistry, Zone};
use crate::interact::Controller;
use crate::rules::GameResult;
use crate::triggers::{EventKey, EventValue, History, Listeners};

/// A two-player match.
pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) registry: CardRegistry,
    pub(crate) cards: Vec<Card>,
    pub(crate) players: PlayerMap<Player>,
    pub(crate) controllers: PlayerMap<Option<Box<dyn Controller>>>,
    pub(crate) rng: GameRng,
    pub(crate) turn: u32,
    pub(crate) current: PlayerId,
    pub(crate) history: History,
    pub(crate) suppressed: Vec<EventKey>,
    pub(crate) listeners: Listeners,
    /// Cards between their Deathrattle and their removal.
    pub(crate) dying: FxHashSet<EntityId>,
    pub(crate) result: Option<GameResult>,
}

impl Game {
    /// Create a game. The built-in blueprints are added to `registry` if it
    /// does not already carry them.
    #[must_use]
    pub fn new(config: GameConfig, mut registry: CardRegistry) -> Self {
        catalog::register_basics(&mut registry);

        let players = PlayerMap::new(|id| Player::new(id, config.starting_health, config.max_mana));

        Self {
            rng: GameRng::new(config.seed),
            config,
            registry,
            cards: Vec::new(),
            players,
            controllers: PlayerMap::default(),
            turn: 1,
            current: PlayerId::FIRST,
            history: History::new(),
            suppressed: Vec::new(),
            listeners: Listeners::default(),
            dying: FxHashSet::default(),
            result: None,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    /// Turn counter, shared by both players. Starts at 1.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    pub fn card(&self, id: EntityId) -> EngineResult<&Card> {
        self.cards.get(id.index()).ok_or(EngineError::MissingEntity(id))
    }

    pub fn card_mut(&mut self, id: EntityId) -> EngineResult<&mut Card> {
        self.cards.get_mut(id.index()).ok_or(EngineError::MissingEntity(id))
    }

    /// Every card instance ever created in this game.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[EntityId] {
        &self.players[player].hand
    }

    #[must_use]
    pub fn board(&self, player: PlayerId) -> &[EntityId] {
        &self.players[player].board
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn rng_mut(&mut self) -> &mut GameRng {
        &mut self.rng
    }

    /// Outcome once a hero has died.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.result {
            Some(GameResult::Winner(p)) => Some(p),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Install the controller that answers prompts for `player`.
    pub fn set_controller(&mut self, player: PlayerId, controller: Box<dyn Controller>) {
        self.controllers[player] = Some(controller);
    }

    // === Card creation ===

    /// Instantiate a blueprint into `Zone::Limbo`.
    pub fn create_card(&mut self, card_id: CardId, owner: PlayerId) -> EngineResult<EntityId> {
        let uuid = EntityId(self.cards.len() as u32);
        let card = Card::from_definition(uuid, self.registry.definition(card_id)?, owner);
        self.cards.push(card);
        Ok(uuid)
    }

    /// Clone an instance, current state included, under a new id.
    pub fn perfect_copy(&mut self, id: EntityId) -> EngineResult<EntityId> {
        let uuid = EntityId(self.cards.len() as u32);
        let mut card = self.card(id)?.clone();
        card.uuid = uuid;
        card.zone = Zone::Limbo;
        self.cards.push(card);
        Ok(uuid)
    }

    /// Re-create an instance from its blueprint under a new id.
    pub fn fresh_copy(&mut self, id: EntityId) -> EngineResult<EntityId> {
        let card = self.card(id)?;
        let (card_id, owner) = (card.card_id, card.owner);
        self.create_card(card_id, owner)
    }

    // === Zone moves ===

    /// Take a card out of whichever player zone holds it and park it in
    /// Limbo. Returns its former position in that zone.
    pub fn remove_from_zone(&mut self, id: EntityId) -> EngineResult<Option<usize>> {
        let card = self.card(id)?;
        let (owner, zone) = (card.owner, card.zone);
        let player = &mut self.players[owner];
        let list = match zone {
            Zone::Hand => &mut player.hand,
            Zone::Board => &mut player.board,
            Zone::Deck => &mut player.deck,
            Zone::Graveyard => &mut player.graveyard,
            Zone::Limbo => return Ok(None),
        };
        let position = list.iter().position(|&c| c == id);
        if let Some(pos) = position {
            list.remove(pos);
        }
        self.card_mut(id)?.zone = Zone::Limbo;
        Ok(position)
    }

    /// Put a card into `player`'s hand and announce it. Returns false, and
    /// leaves the card in Limbo, if the hand is full.
    pub fn add_to_hand(&mut self, id: EntityId, player: PlayerId) -> EngineResult<bool> {
        self.remove_from_zone(id)?;
        if self.players[player].hand.len() >= self.config.max_hand_length {
            return Ok(false);
        }
        self.insert_into_hand(id, player, usize::MAX)?;
        self.broadcast(EventKey::AddCardToHand, EventValue::Card(id), player)?;
        Ok(true)
    }

    /// Insert into hand at `index` (clamped) without announcing it.
    pub(crate) fn insert_into_hand(&mut self, id: EntityId, player: PlayerId, index: usize) -> EngineResult<()> {
        let card = self.card_mut(id)?;
        card.owner = player;
        card.zone = Zone::Hand;
        let hand = &mut self.players[player].hand;
        hand.insert(index.min(hand.len()), id);
        Ok(())
    }

    /// Put a card on top of `player`'s deck.
    pub fn add_to_deck(&mut self, id: EntityId, player: PlayerId) -> EngineResult<()> {
        self.remove_from_zone(id)?;
        let card = self.card_mut(id)?;
        card.owner = player;
        card.zone = Zone::Deck;
        self.players[player].deck.push(id);
        Ok(())
    }

    /// Put a card at a random position in `player`'s deck.
    pub fn shuffle_into_deck(&mut self, id: EntityId, player: PlayerId) -> EngineResult<()> {
        self.remove_from_zone(id)?;
        let card = self.card_mut(id)?;
        card.owner = player;
        card.zone = Zone::Deck;
        let index = self.rng.slot(self.players[player].deck.len());
        self.players[player].deck.insert(index, id);
        Ok(())
    }

    pub fn shuffle_deck(&mut self, player: PlayerId) {
        self.rng.shuffle(&mut self.players[player].deck);
    }

    /// Fill a deck from blueprint ids. The last id ends up on top.
    pub fn build_deck(&mut self, player: PlayerId, ids: &[CardId]) -> EngineResult<()> {
        for &card_id in ids {
            let id = self.create_card(card_id, player)?;
            self.add_to_deck(id, player)?;
        }
        Ok(())
    }

    /// Recompute a player's spell damage from its live board.
    pub(crate) fn update_spell_damage(&mut self, player: PlayerId) {
        let total: i64 = self.players[player]
            .board
            .iter()
            .filter_map(|id| self.cards.get(id.index()))
            .filter(|c| c.is_alive())
            .map(Card::spell_damage)
            .sum();
        self.players[player].spell_damage = total;
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("turn", &self.turn)
            .field("current", &self.current)
            .field("players", &self.players)
            .field("cards", &self.cards.len())
            .field("history", &self.history.len())
            .field("result", &self.result)
            .finish()
    }
}
