//! Playing cards from hand.

mod common;

use common::*;
use hearth_rules::rules::COLOSSAL_SELF;
use hearth_rules::{
    Ability, AbilityOutcome, AttackFlags, AttackResult, CardDefinition, CardId, EventKey, GameConfig, Keyword,
    PlayResult, ScriptedController, Target, Tribe, Zone,
};

#[test]
fn test_cost_check_leaves_everything_alone() {
    let mut game = game(vec![CardDefinition::minion(CardId::new(100), "Ogre", 3, 1, 1)]);
    game.player_mut(P1).mana = 1;
    let ogre = give(&mut game, 100, P1);

    assert_eq!(game.play(ogre, P1).unwrap(), PlayResult::Cost);
    assert_eq!(game.hand(P1), &[ogre]);
    assert_eq!(game.player(P1).mana, 1);
    assert!(game.board(P1).is_empty());
}

#[test]
fn test_full_board_is_space() {
    let config = GameConfig::default().with_seed(1).with_max_board_space(1);
    let mut game = game_with_config(config, vec![CardDefinition::minion(CardId::new(100), "Grunt", 1, 1, 1)]);
    game.player_mut(P1).mana = 5;
    summon(&mut game, 100, P1);
    let grunt = give(&mut game, 100, P1);

    assert_eq!(game.play(grunt, P1).unwrap(), PlayResult::Space);
    assert_eq!(game.hand(P1), &[grunt]);
    assert_eq!(game.player(P1).mana, 5);
}

#[test]
fn test_board_filled_by_battlecry_spends_card() {
    let config = GameConfig::default().with_seed(1).with_max_board_space(2);
    let mut game = game_with_config(
        config,
        vec![
            CardDefinition::minion(CardId::new(100), "Caller", 3, 2, 2).with_ability(Ability::Battlecry, |game, ctx| {
                game.player_mut(ctx.owner).armor += 5;
                let token = game.create_card(CardId::new(101), ctx.owner)?;
                game.summon(token, ctx.owner, true)?;
                Ok(AbilityOutcome::Done)
            }),
            CardDefinition::minion(CardId::new(101), "Token", 0, 1, 1),
        ],
    );
    game.player_mut(P1).mana = 3;
    summon(&mut game, 101, P1);
    let caller = give(&mut game, 100, P1);

    assert_eq!(game.play(caller, P1).unwrap(), PlayResult::Space);

    assert_eq!(game.player(P1).armor, 5);
    assert_eq!(game.player(P1).mana, 0);
    assert!(game.hand(P1).is_empty());
    assert_eq!(game.card(caller).unwrap().zone, Zone::Limbo);
    assert_eq!(game.board(P1).len(), 2);
    assert!(game.history().keys().contains(&EventKey::PlayCard));
}

fn magnet_pool() -> Vec<CardDefinition> {
    vec![
        CardDefinition::minion(CardId::new(100), "Harvester", 2, 2, 3).with_tribe(Tribe::Mech),
        CardDefinition::minion(CardId::new(101), "Spare Part", 2, 1, 1)
            .with_tribe(Tribe::Mech)
            .with_keyword(Keyword::Magnetic)
            .with_keyword(Keyword::Taunt),
        CardDefinition::minion(CardId::new(102), "Grunt", 1, 1, 1),
    ]
}

#[test]
fn test_magnetize_onto_mech() {
    let mut game = game(magnet_pool());
    game.player_mut(P1).mana = 2;
    let mech = summon(&mut game, 100, P1);
    let part = give(&mut game, 101, P1);
    script(&mut game, P1, ScriptedController::new().with_target(Some(Target::Card(mech))));

    assert_eq!(game.play(part, P1).unwrap(), PlayResult::Magnetize);

    let mech = game.card(mech).unwrap();
    assert_eq!((mech.attack, mech.health), (3, 4));
    assert!(mech.has_keyword(Keyword::Taunt));
    assert!(!mech.has_keyword(Keyword::Magnetic));
    assert_eq!(game.board(P1).len(), 1);
    assert_ne!(game.card(part).unwrap().zone, Zone::Board);
}

#[test]
fn test_magnetize_cancelled_summons_normally() {
    let mut game = game(magnet_pool());
    game.player_mut(P1).mana = 2;
    summon(&mut game, 100, P1);
    let part = give(&mut game, 101, P1);
    script(&mut game, P1, ScriptedController::new().with_target(None));

    assert_eq!(game.play(part, P1).unwrap(), PlayResult::Success);
    assert_eq!(game.board(P1).len(), 2);
    assert_eq!(game.card(part).unwrap().zone, Zone::Board);
}

#[test]
fn test_magnetize_rejects_non_mech() {
    let mut game = game(magnet_pool());
    game.player_mut(P1).mana = 2;
    summon(&mut game, 100, P1);
    let grunt = summon(&mut game, 102, P1);
    let part = give(&mut game, 101, P1);
    script(&mut game, P1, ScriptedController::new().with_target(Some(Target::Card(grunt))));

    assert_eq!(game.play(part, P1).unwrap(), PlayResult::Success);
    assert_eq!(game.card(grunt).unwrap().attack, 1);
    assert_eq!(game.board(P1).len(), 3);
}

#[test]
fn test_magnetic_without_mech_skips_prompt() {
    let mut game = game(magnet_pool());
    game.player_mut(P1).mana = 2;
    let part = give(&mut game, 101, P1);
    script(&mut game, P1, ScriptedController::new().with_target(None));

    assert_eq!(game.play(part, P1).unwrap(), PlayResult::Success);
    assert_eq!(game.board(P1), &[part]);
}

fn condition_pool() -> Vec<CardDefinition> {
    vec![CardDefinition::spell(CardId::new(100), "Gamble", 1)
        .with_ability(Ability::Condition, |_, _| Ok(AbilityOutcome::Condition(false)))
        .with_ability(Ability::Cast, |game, ctx| {
            game.player_mut(ctx.owner).armor += 4;
            Ok(AbilityOutcome::Done)
        })]
}

#[test]
fn test_unmet_condition_declined() {
    let mut game = game(condition_pool());
    game.player_mut(P1).mana = 1;
    let gamble = give(&mut game, 100, P1);

    assert_eq!(game.play(gamble, P1).unwrap(), PlayResult::Refund);
    assert_eq!(game.hand(P1), &[gamble]);
    assert_eq!(game.player(P1).mana, 1);
    assert_eq!(game.player(P1).armor, 0);
}

#[test]
fn test_unmet_condition_played_anyway() {
    let mut game = game(condition_pool());
    game.player_mut(P1).mana = 1;
    let gamble = give(&mut game, 100, P1);
    script(&mut game, P1, ScriptedController::new().with_answer(true));

    assert_eq!(game.play(gamble, P1).unwrap(), PlayResult::Success);
    assert_eq!(game.player(P1).armor, 4);
    assert_eq!(game.player(P1).mana, 0);
}

#[test]
fn test_battlecry_refund_restores_slot() {
    let mut game = game(vec![
        CardDefinition::minion(CardId::new(100), "Grunt", 1, 1, 1),
        CardDefinition::minion(CardId::new(101), "Fickle", 2, 2, 2)
            .with_ability(Ability::Battlecry, |_, _| Ok(AbilityOutcome::Refund)),
    ]);
    game.player_mut(P1).mana = 3;
    let first = give(&mut game, 100, P1);
    let fickle = give(&mut game, 101, P1);
    let last = give(&mut game, 100, P1);

    assert_eq!(game.play(fickle, P1).unwrap(), PlayResult::Refund);
    assert_eq!(game.hand(P1), &[first, fickle, last]);
    assert_eq!(game.player(P1).mana, 3);
    assert!(game.board(P1).is_empty());
    assert!(!game.history().keys().contains(&EventKey::PlayCard));
}

#[test]
fn test_trade_swaps_with_deck() {
    let mut game = game(vec![
        CardDefinition::minion(CardId::new(100), "Barterer", 4, 4, 4).with_keyword(Keyword::Tradeable),
        CardDefinition::minion(CardId::new(101), "Grunt", 1, 1, 1),
    ]);
    game.build_deck(P1, &[CardId::new(101)]).unwrap();
    let drawn = game.player(P1).deck[0];
    game.player_mut(P1).mana = 1;
    let barterer = give(&mut game, 100, P1);
    script(&mut game, P1, ScriptedController::new().with_answer(true));

    assert_eq!(game.play(barterer, P1).unwrap(), PlayResult::Traded);
    assert_eq!(game.hand(P1), &[drawn]);
    assert_eq!(game.player(P1).deck, vec![barterer]);
    assert_eq!(game.player(P1).mana, 0);
    assert!(game.history().keys().contains(&EventKey::TradeCard));
}

#[test]
fn test_trade_with_empty_deck_is_space() {
    let mut game = game(vec![
        CardDefinition::minion(CardId::new(100), "Barterer", 4, 4, 4).with_keyword(Keyword::Tradeable),
    ]);
    game.player_mut(P1).mana = 1;
    let barterer = give(&mut game, 100, P1);
    script(&mut game, P1, ScriptedController::new().with_answer(true));

    assert_eq!(game.play(barterer, P1).unwrap(), PlayResult::Space);
    assert_eq!(game.hand(P1), &[barterer]);
    assert_eq!(game.player(P1).mana, 1);
}

#[test]
fn test_forge_upgrades_in_hand() {
    let mut game = game(vec![
        CardDefinition::weapon(CardId::new(100), "Blade", 2, 2, 2).with_keyword_payload(Keyword::Forge, CardId::new(101)),
        CardDefinition::weapon(CardId::new(101), "Forged Blade", 2, 4, 2),
    ]);
    game.player_mut(P1).mana = 3;
    let blade = give(&mut game, 100, P1);
    script(&mut game, P1, ScriptedController::new().with_answer(true));

    assert_eq!(game.play(blade, P1).unwrap(), PlayResult::Forged);
    assert_eq!(game.player(P1).mana, 1);
    let hand = game.hand(P1);
    assert_eq!(hand.len(), 1);
    assert_eq!(game.card(hand[0]).unwrap().card_id, CardId::new(101));
}

#[test]
fn test_forge_declined_plays_card() {
    let mut game = game(vec![
        CardDefinition::weapon(CardId::new(100), "Blade", 2, 2, 2).with_keyword_payload(Keyword::Forge, CardId::new(101)),
        CardDefinition::weapon(CardId::new(101), "Forged Blade", 2, 4, 2),
    ]);
    game.player_mut(P1).mana = 3;
    let blade = give(&mut game, 100, P1);

    assert_eq!(game.play(blade, P1).unwrap(), PlayResult::Success);
    assert_eq!(game.player(P1).weapon, Some(blade));
    assert_eq!(game.player(P1).attack, 2);
}

#[test]
fn test_echo_copies_until_end_of_turn() {
    let counter = Counter::default();
    let mut game = game(vec![CardDefinition::spell(CardId::new(100), "Refrain", 1)
        .with_keyword(Keyword::Echo)
        .with_ability(Ability::Cast, counter.ability())]);
    game.player_mut(P1).mana = 2;
    let refrain = give(&mut game, 100, P1);

    assert_eq!(game.play(refrain, P1).unwrap(), PlayResult::Success);
    let copy = game.hand(P1)[0];
    assert_ne!(copy, refrain);
    assert!(game.card(copy).unwrap().has_keyword(Keyword::Echo));

    assert_eq!(game.play(copy, P1).unwrap(), PlayResult::Success);
    assert_eq!(counter.get(), 2);
    assert_eq!(game.hand(P1).len(), 1);

    game.end_turn().unwrap();
    assert!(game.hand(P1).is_empty());
}

#[test]
fn test_combo_needs_earlier_card() {
    let counter = Counter::default();
    let mut game = game(vec![
        CardDefinition::minion(CardId::new(100), "Grunt", 0, 1, 1),
        CardDefinition::minion(CardId::new(101), "Cutpurse", 0, 1, 1).with_ability(Ability::Combo, counter.ability()),
    ]);

    let first = give(&mut game, 101, P1);
    game.play(first, P1).unwrap();
    assert_eq!(counter.get(), 0);

    let grunt = give(&mut game, 100, P1);
    let second = give(&mut game, 101, P1);
    game.play(grunt, P1).unwrap();
    game.play(second, P1).unwrap();
    assert_eq!(counter.get(), 1);
}

#[test]
fn test_combo_resets_next_turn() {
    let counter = Counter::default();
    let mut game = game(vec![
        CardDefinition::minion(CardId::new(100), "Grunt", 0, 1, 1),
        CardDefinition::minion(CardId::new(101), "Cutpurse", 0, 1, 1).with_ability(Ability::Combo, counter.ability()),
    ]);
    let grunt = give(&mut game, 100, P1);
    game.play(grunt, P1).unwrap();

    game.end_turn().unwrap();
    game.end_turn().unwrap();

    let cutpurse = give(&mut game, 101, P1);
    game.play(cutpurse, P1).unwrap();
    assert_eq!(counter.get(), 0);
}

#[test]
fn test_corrupt_upgrades_cheaper_cards() {
    let mut game = game(vec![
        CardDefinition::minion(CardId::new(100), "Acrobat", 2, 2, 2).with_keyword_payload(Keyword::Corrupt, CardId::new(101)),
        CardDefinition::minion(CardId::new(101), "Acrobat+", 2, 4, 4),
        CardDefinition::minion(CardId::new(102), "Big", 3, 3, 3),
        CardDefinition::minion(CardId::new(103), "Small", 1, 1, 1),
    ]);
    game.player_mut(P1).mana = 10;
    let small = give(&mut game, 103, P1);
    let acrobat = give(&mut game, 100, P1);
    let big = give(&mut game, 102, P1);

    game.play(small, P1).unwrap();
    assert_eq!(game.hand(P1), &[acrobat, big]);

    game.play(big, P1).unwrap();
    let hand = game.hand(P1);
    assert_eq!(hand.len(), 1);
    assert_ne!(hand[0], acrobat);
    assert_eq!(game.card(hand[0]).unwrap().card_id, CardId::new(101));
}

#[test]
fn test_twinspell_copies_once() {
    let counter = Counter::default();
    let mut game = game(vec![CardDefinition::spell(CardId::new(100), "Echoing Bolt", 1)
        .with_keyword(Keyword::Twinspell)
        .with_ability(Ability::Cast, counter.ability())]);
    game.player_mut(P1).mana = 2;
    let bolt = give(&mut game, 100, P1);

    game.play(bolt, P1).unwrap();
    let copy = game.hand(P1)[0];
    assert!(!game.card(copy).unwrap().has_keyword(Keyword::Twinspell));

    game.play(copy, P1).unwrap();
    assert!(game.hand(P1).is_empty());
    assert_eq!(counter.get(), 2);
}

#[test]
fn test_spellburst_fires_once() {
    let counter = Counter::default();
    let mut game = game(vec![
        CardDefinition::minion(CardId::new(100), "Student", 1, 1, 1).with_ability(Ability::Spellburst, counter.ability()),
        CardDefinition::spell(CardId::new(101), "Spark", 0),
    ]);
    summon(&mut game, 100, P1);
    summon(&mut game, 100, P2);

    for _ in 0..2 {
        let spark = give(&mut game, 101, P1);
        game.play(spark, P1).unwrap();
    }

    assert_eq!(counter.get(), 1);
}

#[test]
fn test_colossal_places_pieces_around_body() {
    let mut game = game(vec![
        CardDefinition::minion(CardId::new(100), "Serpent", 5, 5, 5).with_keyword_payload(
            Keyword::Colossal,
            vec![CardId::new(101), COLOSSAL_SELF, CardId::new(102)],
        ),
        CardDefinition::minion(CardId::new(101), "Left Fin", 0, 1, 3),
        CardDefinition::minion(CardId::new(102), "Right Fin", 0, 1, 3),
    ]);
    game.player_mut(P1).mana = 5;
    let serpent = give(&mut game, 100, P1);

    assert_eq!(game.play(serpent, P1).unwrap(), PlayResult::Colossal);

    let names: Vec<&str> = game
        .board(P1)
        .iter()
        .map(|&id| game.card(id).unwrap().name.as_str())
        .collect();
    assert_eq!(names, vec!["Left Fin", "Serpent", "Right Fin"]);
    assert!(!game.history().keys().contains(&EventKey::SummonCard));
    assert!(game.history().keys().contains(&EventKey::PlayCard));
}

#[test]
fn test_colossal_keeps_room_for_body() {
    let config = GameConfig::default().with_seed(1).with_max_board_space(3);
    let mut game = game_with_config(
        config,
        vec![
            CardDefinition::minion(CardId::new(100), "Serpent", 5, 5, 5).with_keyword_payload(
                Keyword::Colossal,
                vec![CardId::new(101), COLOSSAL_SELF, CardId::new(102)],
            ),
            CardDefinition::minion(CardId::new(101), "Left Fin", 0, 1, 3),
            CardDefinition::minion(CardId::new(102), "Right Fin", 0, 1, 3),
            CardDefinition::minion(CardId::new(103), "Grunt", 1, 1, 1),
        ],
    );
    game.player_mut(P1).mana = 5;
    summon(&mut game, 103, P1);
    summon(&mut game, 103, P1);
    let serpent = give(&mut game, 100, P1);

    assert_eq!(game.play(serpent, P1).unwrap(), PlayResult::Colossal);

    assert_eq!(game.card(serpent).unwrap().zone, Zone::Board);
    let names: Vec<&str> = game
        .board(P1)
        .iter()
        .map(|&id| game.card(id).unwrap().name.as_str())
        .collect();
    assert_eq!(names, vec!["Grunt", "Grunt", "Serpent"]);
    assert_eq!(game.player(P1).mana, 0);
}

#[test]
fn test_location_use_and_cooldown() {
    let counter = Counter::default();
    let mut game = game(vec![
        CardDefinition::location(CardId::new(100), "Watchtower", 1, 2, 1).with_ability(Ability::Use, counter.ability()),
    ]);
    game.player_mut(P1).mana = 1;
    let tower = give(&mut game, 100, P1);

    assert_eq!(game.play(tower, P1).unwrap(), PlayResult::Success);
    assert_eq!(game.board(P1), &[tower]);
    assert!(game.card(tower).unwrap().has_keyword(Keyword::Immune));

    assert_eq!(game.use_location(tower).unwrap(), PlayResult::Success);
    assert_eq!(counter.get(), 1);
    assert_eq!(game.use_location(tower).unwrap(), PlayResult::Cooldown);

    game.end_turn().unwrap();
    game.end_turn().unwrap();

    assert_eq!(game.use_location(tower).unwrap(), PlayResult::Success);
    assert_eq!(counter.get(), 2);
    assert!(game.board(P1).is_empty());
    assert_eq!(game.card(tower).unwrap().zone, Zone::Graveyard);
}

#[test]
fn test_dormant_reveal_fires_battlecry() {
    let counter = Counter::default();
    let mut game = game(vec![CardDefinition::minion(CardId::new(100), "Sealed Fiend", 1, 6, 6)
        .with_keyword_payload(Keyword::Dormant, 2)
        .with_ability(Ability::Battlecry, counter.ability())]);
    game.player_mut(P1).mana = 1;
    let fiend = give(&mut game, 100, P1);

    assert_eq!(game.play(fiend, P1).unwrap(), PlayResult::Success);
    assert_eq!(counter.get(), 0);
    assert!(game.card(fiend).unwrap().has_keyword(Keyword::Immune));

    game.end_turn().unwrap();
    game.end_turn().unwrap();
    assert!(game.card(fiend).unwrap().has_keyword(Keyword::Dormant));
    assert_eq!(counter.get(), 0);

    game.end_turn().unwrap();
    game.end_turn().unwrap();

    let card = game.card(fiend).unwrap();
    assert!(!card.has_keyword(Keyword::Dormant));
    assert!(!card.has_keyword(Keyword::Immune));
    assert!(card.sleepy);
    assert_eq!(counter.get(), 1);
}

#[test]
fn test_titan_abilities() {
    let mut game = game(vec![
        CardDefinition::minion(CardId::new(100), "Keeper", 9, 7, 7)
            .with_keyword_payload(Keyword::Titan, vec![CardId::new(101), CardId::new(102)]),
        CardDefinition::spell(CardId::new(101), "Shield Wall", 0).with_ability(Ability::Cast, |game, ctx| {
            game.player_mut(ctx.owner).armor += 5;
            Ok(AbilityOutcome::Done)
        }),
        CardDefinition::spell(CardId::new(102), "Reinforce", 0).with_ability(Ability::Cast, |game, ctx| {
            game.player_mut(ctx.owner).armor += 1;
            Ok(AbilityOutcome::Done)
        }),
    ]);
    let keeper = game.create_card(CardId::new(100), P1).unwrap();
    game.summon(keeper, P1, true).unwrap();

    assert_eq!(game.attack(keeper, P2, AttackFlags::default()).unwrap(), AttackResult::Titan);
    assert_eq!(game.use_titan(keeper, 5).unwrap(), PlayResult::Invalid);
    assert_eq!(game.use_titan(keeper, 0).unwrap(), PlayResult::Success);
    assert_eq!(game.player(P1).armor, 5);
    assert_eq!(game.use_titan(keeper, 0).unwrap(), PlayResult::Cooldown);

    game.end_turn().unwrap();
    game.end_turn().unwrap();

    assert_eq!(game.use_titan(keeper, 0).unwrap(), PlayResult::Success);
    assert_eq!(game.player(P1).armor, 6);
    assert!(!game.card(keeper).unwrap().has_keyword(Keyword::Titan));
    assert_eq!(game.use_titan(keeper, 0).unwrap(), PlayResult::Invalid);
}

#[test]
fn test_finale_on_exact_mana() {
    let counter = Counter::default();
    let mut game = game(vec![
        CardDefinition::minion(CardId::new(100), "Closer", 2, 2, 2).with_ability(Ability::Finale, counter.ability()),
    ]);
    game.player_mut(P1).mana = 3;
    let first = give(&mut game, 100, P1);
    game.play(first, P1).unwrap();
    assert_eq!(counter.get(), 0);

    game.player_mut(P1).mana = 2;
    let second = give(&mut game, 100, P1);
    game.play(second, P1).unwrap();
    assert_eq!(counter.get(), 1);
}

#[test]
fn test_armor_cost_type() {
    let mut game = game(vec![CardDefinition::minion(CardId::new(100), "Bulwark", 2, 2, 2)
        .with_cost_type(hearth_rules::CostType::Armor)]);
    game.player_mut(P1).mana = 10;
    let bulwark = give(&mut game, 100, P1);

    assert_eq!(game.play(bulwark, P1).unwrap(), PlayResult::Cost);

    game.player_mut(P1).armor = 3;
    assert_eq!(game.play(bulwark, P1).unwrap(), PlayResult::Success);
    assert_eq!(game.player(P1).armor, 1);
    assert_eq!(game.player(P1).mana, 10);
}

fn hero_pool(battlecry: AbilityOutcome) -> Vec<CardDefinition> {
    vec![
        CardDefinition::hero(CardId::new(100), "Warlord", 4, 5)
            .with_hero_power(CardId::new(101))
            .with_ability(Ability::Battlecry, move |_, _| Ok(battlecry)),
        CardDefinition::hero_power(CardId::new(101), "Rally", 2),
        CardDefinition::weapon(CardId::new(102), "Cursed Axe", 2, 3, 2)
            .with_ability(Ability::Battlecry, move |_, _| Ok(battlecry)),
        CardDefinition::minion(CardId::new(103), "Grunt", 1, 1, 1),
    ]
}

#[test]
fn test_hero_card_replaces_hero() {
    let mut game = game(hero_pool(AbilityOutcome::Done));
    game.player_mut(P1).mana = 4;
    let warlord = give(&mut game, 100, P1);

    assert_eq!(game.play(warlord, P1).unwrap(), PlayResult::Success);

    let hero = game.player(P1);
    assert_eq!(hero.hero, Some(warlord));
    assert_eq!(hero.armor, 5);
    assert_eq!(hero.mana, 0);
    let power = hero.hero_power.unwrap();
    assert_eq!(game.card(power).unwrap().card_id, CardId::new(101));
    assert!(game.hand(P1).is_empty());
    assert!(game.history().keys().contains(&EventKey::PlayCard));
}

#[test]
fn test_hero_power_card_replaces_power() {
    let mut game = game(hero_pool(AbilityOutcome::Done));
    game.player_mut(P1).mana = 2;
    game.player_mut(P1).has_used_hero_power = true;
    let rally = give(&mut game, 101, P1);

    assert_eq!(game.play(rally, P1).unwrap(), PlayResult::Success);

    assert_eq!(game.player(P1).hero_power, Some(rally));
    assert!(!game.player(P1).has_used_hero_power);
    assert_eq!(game.player(P1).mana, 0);
    assert!(game.hand(P1).is_empty());
}

#[test]
fn test_weapon_battlecry_refund() {
    let mut game = game(hero_pool(AbilityOutcome::Refund));
    game.player_mut(P1).mana = 2;
    let left = give(&mut game, 103, P1);
    let axe = give(&mut game, 102, P1);
    let right = give(&mut game, 103, P1);

    assert_eq!(game.play(axe, P1).unwrap(), PlayResult::Refund);

    assert_eq!(game.hand(P1), &[left, axe, right]);
    assert_eq!(game.player(P1).mana, 2);
    assert_eq!(game.player(P1).weapon, None);
    assert_eq!(game.player(P1).attack, 0);
    assert!(!game.history().keys().contains(&EventKey::PlayCard));
}

#[test]
fn test_hero_battlecry_refund() {
    let mut game = game(hero_pool(AbilityOutcome::Refund));
    game.player_mut(P1).mana = 4;
    let warlord = give(&mut game, 100, P1);
    let grunt = give(&mut game, 103, P1);

    assert_eq!(game.play(warlord, P1).unwrap(), PlayResult::Refund);

    let hero = game.player(P1);
    assert_eq!(hero.hero, None);
    assert_eq!(hero.hero_power, None);
    assert_eq!(hero.armor, 0);
    assert_eq!(hero.mana, 4);
    assert_eq!(game.hand(P1), &[warlord, grunt]);
}
