//! Attack resolution.
//!
//! An attack is validated front to back and stops at the first failed
//! check, before anything is mutated:
//!
//! 1. Attacker and target must differ and be on opposing sides.
//! 2. An enemy Taunt minion must be the target if one exists.
//! 3. The attacker must be able to attack (keywords, attack budget, Rush).
//! 4. The target must be attackable (Stealth, Immune, Dormant, on board).
//!
//! `AttackFlags::force` skips all of it. Numeric attackers skip steps 1-3
//! and ignore Stealth.
//!
//! Card-vs-card combat then deals damage both ways and runs the keyword
//! cascade in a fixed order: Cleave, Lifesteal, Poisonous, Frenzy,
//! Overkill / Honorable Kill. Finally the attacker spends an attack, loses
//! Stealth and an `Attack` event is broadcast.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::results::AttackResult;
use crate::cards::{Ability, Keyword, KeywordPayload, Zone};
use crate::core::{EngineResult, EntityId, Game, PlayerId, Target};
use crate::triggers::{EventKey, EventValue};

/// Who or what is attacking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attacker {
    Card(EntityId),
    /// A hero swinging with its weapon or hero-power attack.
    Player(PlayerId),
    /// Raw damage, e.g. Cleave splash or a card effect.
    Damage(i64),
    /// Spell damage. The caster's spell damage bonus is added.
    SpellDamage(i64),
}

impl From<EntityId> for Attacker {
    fn from(id: EntityId) -> Self {
        Attacker::Card(id)
    }
}

impl From<PlayerId> for Attacker {
    fn from(id: PlayerId) -> Self {
        Attacker::Player(id)
    }
}

impl Attacker {
    /// The attacker as a target, for non-numeric attackers.
    #[must_use]
    pub fn as_target(self) -> Option<Target> {
        match self {
            Attacker::Card(id) => Some(Target::Card(id)),
            Attacker::Player(id) => Some(Target::Player(id)),
            Attacker::Damage(_) | Attacker::SpellDamage(_) => None,
        }
    }

    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, Attacker::Damage(_) | Attacker::SpellDamage(_))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackFlags {
    /// Skip every legality check.
    pub force: bool,
}

impl AttackFlags {
    pub const FORCE: AttackFlags = AttackFlags { force: true };
}

impl Game {
    /// Resolve an attack and sweep the board afterwards.
    pub fn attack(
        &mut self,
        attacker: impl Into<Attacker>,
        target: impl Into<Target>,
        flags: AttackFlags,
    ) -> EngineResult<AttackResult> {
        let (attacker, target) = (attacker.into(), target.into());
        self.sweep()?;
        let result = self.resolve_attack(attacker, target, flags)?;
        debug!(?attacker, %target, ?result, "attack");
        Ok(result)
    }

    fn resolve_attack(&mut self, attacker: Attacker, target: Target, flags: AttackFlags) -> EngineResult<AttackResult> {
        if !flags.force {
            if let Some(owner) = self.attacker_owner(attacker)? {
                if attacker.as_target() == Some(target) || self.target_owner(target)? == owner {
                    return Ok(AttackResult::Invalid);
                }
                if self.taunt_blocks(owner, target)? {
                    return Ok(AttackResult::Taunt);
                }
            }
        }

        let result = match attacker {
            Attacker::Card(id) => self.card_attack(id, target, flags)?,
            Attacker::Player(player) => self.player_attack(player, target, flags)?,
            Attacker::Damage(amount) => self.attack_with_damage(amount, target, flags)?,
            Attacker::SpellDamage(base) => self.spell_attack(base, target, flags)?,
        };

        self.sweep()?;
        Ok(result)
    }

    fn attacker_owner(&self, attacker: Attacker) -> EngineResult<Option<PlayerId>> {
        Ok(match attacker {
            Attacker::Card(id) => Some(self.card(id)?.owner),
            Attacker::Player(player) => Some(player),
            Attacker::Damage(_) | Attacker::SpellDamage(_) => None,
        })
    }

    fn target_owner(&self, target: Target) -> EngineResult<PlayerId> {
        Ok(match target {
            Target::Card(id) => self.card(id)?.owner,
            Target::Player(player) => player,
        })
    }

    /// True if `owner`'s opponent has a visible Taunt minion and `target`
    /// is not one.
    fn taunt_blocks(&self, owner: PlayerId, target: Target) -> EngineResult<bool> {
        if let Target::Card(id) = target {
            if self.card(id)?.has_keyword(Keyword::Taunt) {
                return Ok(false);
            }
        }
        for &id in &self.players[owner.opponent()].board {
            let card = self.card(id)?;
            if card.zone == Zone::Board
                && card.is_alive()
                && card.has_keyword(Keyword::Taunt)
                && !card.has_keyword(Keyword::Stealth)
                && !card.has_keyword(Keyword::Dormant)
            {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Target-side validation. `numeric` attackers see through Stealth.
    fn check_target(&self, target: Target, numeric: bool) -> EngineResult<Option<AttackResult>> {
        match target {
            Target::Player(player) => Ok(self.players[player].immune.then_some(AttackResult::Immune)),
            Target::Card(id) => {
                let card = self.card(id)?;
                let result = if !numeric && card.has_keyword(Keyword::Stealth) {
                    Some(AttackResult::Stealth)
                } else if card.has_keyword(Keyword::Immune) {
                    Some(AttackResult::Immune)
                } else if card.has_keyword(Keyword::Dormant) {
                    Some(AttackResult::Dormant)
                } else if card.zone != Zone::Board || !card.is_alive() {
                    Some(AttackResult::Invalid)
                } else {
                    None
                };
                Ok(result)
            }
        }
    }

    fn check_card_attacker(&self, id: EntityId, target: Target) -> EngineResult<Option<AttackResult>> {
        let card = self.card(id)?;
        let result = if card.zone != Zone::Board {
            Some(AttackResult::Invalid)
        } else if card.has_keyword(Keyword::Dormant) {
            Some(AttackResult::Dormant)
        } else if card.has_keyword(Keyword::Titan) {
            Some(AttackResult::Titan)
        } else if card.has_keyword(Keyword::Frozen) {
            Some(AttackResult::Frozen)
        } else if card.attack_times <= 0 {
            Some(AttackResult::CardHasAttacked)
        } else if card.attack <= 0 {
            Some(AttackResult::CardNoAttack)
        } else if card.has_keyword(Keyword::CantAttack) {
            Some(AttackResult::CantAttack)
        } else if card.sleepy {
            Some(AttackResult::Sleepy)
        } else {
            None
        };
        if result.is_some() {
            return Ok(result);
        }

        if let Some(result) = self.check_target(target, false)? {
            return Ok(Some(result));
        }
        if !target.is_card() && !card.can_attack_hero {
            return Ok(Some(AttackResult::CantAttackHero));
        }
        Ok(None)
    }

    fn card_attack(&mut self, id: EntityId, target: Target, flags: AttackFlags) -> EngineResult<AttackResult> {
        if !flags.force {
            if let Some(result) = self.check_card_attacker(id, target)? {
                return Ok(result);
            }
        }

        // Armed Forgetful: on a bad coin flip, try to hit something else.
        let armed = matches!(
            self.card(id)?.keyword(Keyword::Forgetful),
            Some(KeywordPayload::Flag | KeywordPayload::Count(1))
        );
        if armed && !self.rng.coin_flip() {
            self.card_mut(id)?.set_keyword(Keyword::Forgetful, 2);
            let redirected = self.redirect_attack(id, target, flags);
            self.card_mut(id)?.set_keyword(Keyword::Forgetful, 1);
            if let Some(result) = redirected? {
                return Ok(result);
            }
        }

        match target {
            Target::Card(target_id) => self.card_vs_card(id, target_id),
            Target::Player(player) => self.card_vs_player(id, player),
        }
    }

    fn redirect_attack(&mut self, id: EntityId, original: Target, flags: AttackFlags) -> EngineResult<Option<AttackResult>> {
        let enemy = self.card(id)?.owner.opponent();
        let mut candidates: Vec<Target> = self.players[enemy].board.iter().map(|&c| Target::Card(c)).collect();
        candidates.push(Target::Player(enemy));
        candidates.retain(|&t| t != original);

        for _ in 0..self.config.forgetful_attempts {
            let Some(pick) = self.rng.pick(&candidates) else {
                break;
            };
            let result = self.resolve_attack(Attacker::Card(id), pick, flags)?;
            if result.is_success() {
                debug!(card = %id, from = %original, to = %pick, "forgetful redirect");
                return Ok(Some(result));
            }
        }
        Ok(None)
    }

    fn card_vs_card(&mut self, id: EntityId, target_id: EntityId) -> EngineResult<AttackResult> {
        let attacker = self.card(id)?;
        let (owner, attack) = (attacker.owner, attacker.attack);
        let cleave = attacker.has_keyword(Keyword::Cleave);
        let lifesteal = attacker.has_keyword(Keyword::Lifesteal);
        let poisonous = attacker.has_keyword(Keyword::Poisonous);

        let defender = self.card(target_id)?;
        let (defender_owner, counter_attack) = (defender.owner, defender.attack);
        let defender_lifesteal = defender.has_keyword(Keyword::Lifesteal);
        let defender_poisonous = defender.has_keyword(Keyword::Poisonous);

        let neighbours = if cleave { self.neighbours(target_id)? } else { Vec::new() };

        let dealt = self.damage_card(target_id, attack)?;
        let taken = self.damage_card(id, counter_attack)?;
        let target_health = self.card(target_id)?.health;

        for neighbour in neighbours {
            self.attack_with_damage(attack, Target::Card(neighbour), AttackFlags::default())?;
        }

        if lifesteal && dealt > 0 {
            self.heal_player(owner, dealt)?;
        }
        if defender_lifesteal && taken > 0 {
            self.heal_player(defender_owner, taken)?;
        }

        if poisonous && dealt > 0 {
            self.poison(target_id)?;
        }
        if defender_poisonous && taken > 0 {
            self.poison(id)?;
        }

        self.frenzy(target_id, dealt)?;
        self.frenzy(id, taken)?;

        if dealt > 0 {
            if target_health < 0 {
                self.activate(id, Ability::Overkill)?;
            } else if target_health == 0 {
                self.activate(id, Ability::HonorableKill)?;
            }
        }

        self.finish_card_attack(id, owner, Target::Card(target_id))
    }

    fn card_vs_player(&mut self, id: EntityId, player: PlayerId) -> EngineResult<AttackResult> {
        let attacker = self.card(id)?;
        let (owner, attack) = (attacker.owner, attacker.attack);
        let lifesteal = attacker.has_keyword(Keyword::Lifesteal);

        let dealt = self.deal_damage(Target::Player(player), attack)?;
        if lifesteal && dealt > 0 {
            self.heal_player(owner, dealt)?;
        }

        self.finish_card_attack(id, owner, Target::Player(player))
    }

    fn finish_card_attack(&mut self, id: EntityId, owner: PlayerId, target: Target) -> EngineResult<AttackResult> {
        let card = self.card_mut(id)?;
        card.attack_times -= 1;
        card.remove_keyword(Keyword::Stealth);
        card.stealth_until = None;

        let value = EventValue::Attack {
            attacker: Attacker::Card(id),
            target,
        };
        self.broadcast(EventKey::Attack, value, owner)?;
        Ok(AttackResult::Success)
    }

    fn player_attack(&mut self, player: PlayerId, target: Target, flags: AttackFlags) -> EngineResult<AttackResult> {
        if !flags.force {
            let hero = &self.players[player];
            if hero.frozen {
                return Ok(AttackResult::Frozen);
            }
            if !hero.can_attack {
                return Ok(AttackResult::PlayerHasAttacked);
            }
            if hero.attack <= 0 {
                return Ok(AttackResult::PlayerNoAttack);
            }
            if let Some(result) = self.check_target(target, false)? {
                return Ok(result);
            }
        }

        let attack = self.players[player].attack;
        let (poisonous, lifesteal) = match self.players[player].weapon {
            Some(weapon) => {
                let weapon = self.card(weapon)?;
                (weapon.has_keyword(Keyword::Poisonous), weapon.has_keyword(Keyword::Lifesteal))
            }
            None => (false, false),
        };

        let dealt = self.deal_damage(target, attack)?;
        if let Target::Card(id) = target {
            if poisonous && dealt > 0 {
                self.poison(id)?;
            }
            self.frenzy(id, dealt)?;
        }
        if lifesteal && dealt > 0 {
            self.heal_player(player, dealt)?;
        }

        self.wear_weapon(player)?;

        let value = EventValue::Attack {
            attacker: Attacker::Player(player),
            target,
        };
        self.broadcast(EventKey::Attack, value, player)?;
        Ok(AttackResult::Success)
    }

    /// Spend one weapon swing. The hero may keep attacking only with a
    /// live weapon that has Unlimited Attacks.
    fn wear_weapon(&mut self, player: PlayerId) -> EngineResult<()> {
        let Some(weapon) = self.players[player].weapon else {
            self.players[player].can_attack = false;
            return Ok(());
        };

        let card = self.card_mut(weapon)?;
        if !card.has_keyword(Keyword::Unbreakable) {
            card.durability -= 1;
        }
        let alive = card.is_alive();
        let unlimited = card.has_keyword(Keyword::UnlimitedAttacks);

        self.players[player].can_attack = unlimited && alive;
        if !alive {
            self.destroy_weapon(player)?;
        }
        Ok(())
    }

    /// Apply raw damage as an attack. No Attack event is raised.
    ///
    /// Returns `DivineShield` if the hit only popped a shield.
    pub fn attack_with_damage(&mut self, amount: i64, target: Target, flags: AttackFlags) -> EngineResult<AttackResult> {
        if !flags.force {
            if let Some(result) = self.check_target(target, true)? {
                return Ok(result);
            }
        }

        match target {
            Target::Player(player) => {
                self.deal_damage(Target::Player(player), amount)?;
                Ok(AttackResult::Success)
            }
            Target::Card(id) => {
                let shielded = self.card(id)?.has_keyword(Keyword::DivineShield);
                let dealt = self.damage_card(id, amount)?;
                if shielded && !self.card(id)?.has_keyword(Keyword::DivineShield) {
                    return Ok(AttackResult::DivineShield);
                }
                self.frenzy(id, dealt)?;
                Ok(AttackResult::Success)
            }
        }
    }

    fn spell_attack(&mut self, base: i64, target: Target, flags: AttackFlags) -> EngineResult<AttackResult> {
        if !flags.force {
            if let Some(result) = self.check_target(target, true)? {
                return Ok(result);
            }
        }

        let caster = self.current;
        let amount = base + self.players[caster].spell_damage;
        self.broadcast(EventKey::SpellDealsDamage, EventValue::TargetAmount { target, amount }, caster)?;
        self.attack_with_damage(amount, target, AttackFlags::FORCE)
    }

    /// Board neighbours of a card, left then right.
    fn neighbours(&self, id: EntityId) -> EngineResult<Vec<EntityId>> {
        let board = &self.players[self.card(id)?.owner].board;
        let Some(pos) = board.iter().position(|&c| c == id) else {
            return Ok(Vec::new());
        };
        let mut out = Vec::with_capacity(2);
        if pos > 0 {
            out.push(board[pos - 1]);
        }
        if let Some(&right) = board.get(pos + 1) {
            out.push(right);
        }
        Ok(out)
    }

    /// Mark a card for the next sweep.
    fn poison(&mut self, id: EntityId) -> EngineResult<()> {
        let card = self.card_mut(id)?;
        card.health = card.health.min(0);
        Ok(())
    }

    /// Fire Frenzy once on a card that survived `dealt` damage.
    fn frenzy(&mut self, id: EntityId, dealt: i64) -> EngineResult<()> {
        if dealt <= 0 || !self.card(id)?.is_alive() {
            return Ok(());
        }
        if !self.activate(id, Ability::Frenzy)?.is_missing() {
            self.card_mut(id)?.abilities.clear(Ability::Frenzy);
        }
        Ok(())
    }
}
