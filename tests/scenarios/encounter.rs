//! Encounter scenario tests
//!
//! Tests the full turn loop: actions, enemy replies, refusals and endings

use bathala_combat::combat::{
    ActionError, CombatEventKind, CombatRules, Combatant, Encounter, PlayerActionKind, Side,
    StatusEffect, TurnReport,
};

use crate::harness::{fixtures, FixedEvaluator};

fn play(encounter: &mut Encounter, kind: PlayerActionKind) -> Result<TurnReport, ActionError> {
    let ids = fixtures::first_five(encounter);
    encounter.play_hand(&fixtures::as_refs(&ids), kind)
}

/// Test: an attack lands, the enemy answers and the next turn starts with a full hand
#[test]
fn test_attack_and_reply() {
    let mut encounter =
        fixtures::encounter_with(fixtures::dummy(&["attack"], 100, 10), FixedEvaluator::pair(20));
    encounter.start();
    assert_eq!(encounter.turn(), 1);
    assert_eq!(encounter.player().hand.len(), 8);

    let report = play(&mut encounter, PlayerActionKind::Attack).expect("hand plays");
    assert_eq!(report.action.damage, 20);
    assert_eq!(report.enemy.as_ref().map(|e| e.hp_lost), Some(10));
    assert_eq!(report.winner, None);

    assert_eq!(encounter.enemy().current_health(), 80);
    assert_eq!(encounter.player().current_health(), 70);
    assert_eq!(encounter.turn(), 2);
    assert_eq!(encounter.player().hand.len(), 8);
    assert_eq!(encounter.player().discard_pile.len(), 5);
    assert!(encounter.player().played_hand.is_empty());
}

/// Test: defend block soaks the enemy hit and is gone by the next turn
#[test]
fn test_defend_blocks_then_resets() {
    let mut encounter =
        fixtures::encounter_with(fixtures::dummy(&["attack"], 100, 10), FixedEvaluator::pair(12));
    encounter.start();

    let report = play(&mut encounter, PlayerActionKind::Defend).expect("hand plays");
    assert_eq!(report.action.block_gained, 12);
    assert_eq!(report.enemy.as_ref().map(|e| e.hp_lost), Some(0));
    assert_eq!(encounter.player().current_health(), 80);
    assert_eq!(encounter.player().block(), 0);
}

/// Test: killing the enemy ends combat before it can act
#[test]
fn test_victory_skips_enemy_turn() {
    let mut encounter =
        fixtures::encounter_with(fixtures::dummy(&["attack"], 15, 10), FixedEvaluator::pair(20));
    encounter.start();

    let report = play(&mut encounter, PlayerActionKind::Attack).expect("hand plays");
    assert_eq!(report.winner, Some(Side::Player));
    assert!(report.enemy.is_none());
    assert_eq!(report.action.hp_lost, 15);
    assert_eq!(encounter.player().current_health(), 80);
    assert!(encounter.is_over());

    assert_eq!(
        play(&mut encounter, PlayerActionKind::Attack).unwrap_err(),
        ActionError::EncounterOver
    );
    assert_eq!(
        encounter.discard(&["apoy-1"]).unwrap_err(),
        ActionError::EncounterOver
    );
}

/// Test: the enemy wins when the player drops to zero
#[test]
fn test_defeat() {
    let encounter = Encounter::new(
        fixtures::player_with_health(10),
        fixtures::dummy(&["attack"], 100, 30),
        CombatRules::default(),
        Some(fixtures::SEED),
    );
    let mut encounter = encounter.with_evaluator(Box::new(FixedEvaluator::high_card(1)));
    encounter.start();

    let report = play(&mut encounter, PlayerActionKind::Attack).expect("hand plays");
    assert_eq!(report.winner, Some(Side::Enemy));
    assert_eq!(report.enemy.as_ref().map(|e| e.hp_lost), Some(10));
    assert!(encounter.player().is_dead());
    assert_eq!(encounter.metrics().winner, Some(Side::Enemy));
}

/// Test: a refused special returns the cards and keeps the turn
#[test]
fn test_refused_special_keeps_turn() {
    let mut encounter = fixtures::encounter_with(
        fixtures::dummy(&["attack"], 100, 10),
        FixedEvaluator::high_card(20),
    );
    encounter.start();

    let report = play(&mut encounter, PlayerActionKind::Special).expect("hand plays");
    assert!(report.action.was_refused());
    assert!(report.enemy.is_none());
    assert_eq!(encounter.turn(), 1);
    assert_eq!(encounter.player().hand.len(), 8);
    assert_eq!(encounter.player().current_health(), 80);
    assert_eq!(encounter.enemy().current_health(), 100);
    assert!(!encounter.player().special_used);
}

/// Test: hands must be exactly five cards that are all in hand
#[test]
fn test_hand_validation() {
    let mut encounter = fixtures::encounter(fixtures::dummy(&["attack"], 100, 10));
    encounter.start();
    let ids = fixtures::first_five(&encounter);

    let short = encounter.play_hand(&fixtures::as_refs(&ids[..4]), PlayerActionKind::Attack);
    assert_eq!(
        short.unwrap_err(),
        ActionError::WrongCardCount {
            expected: 5,
            got: 4
        }
    );

    let mut bogus = fixtures::as_refs(&ids[..4]);
    bogus.push("nope-0");
    let missing = encounter.play_hand(&bogus, PlayerActionKind::Attack);
    assert_eq!(
        missing.unwrap_err(),
        ActionError::CardNotInHand("nope-0".to_string())
    );
    assert_eq!(encounter.player().hand.len(), 8);
    assert_eq!(encounter.turn(), 1);
}

/// Test: discarding spends a charge and draws back to a full hand
#[test]
fn test_discard_refills_hand() {
    let mut encounter = fixtures::encounter(fixtures::dummy(&["attack"], 100, 10));
    encounter.start();
    let ids = fixtures::first_five(&encounter);

    let discarded = encounter
        .discard(&fixtures::as_refs(&ids[..3]))
        .expect("discard allowed");
    assert_eq!(discarded.len(), 3);
    assert_eq!(encounter.player().hand.len(), 8);
    assert_eq!(encounter.player().discard_charges, 2);
    assert!(encounter
        .player()
        .hand
        .iter()
        .all(|c| !ids[..3].contains(&c.id)));
    assert_eq!(encounter.metrics().discards_used, 1);
}

/// Test: with no charges left a discard does nothing
#[test]
fn test_discard_without_charges() {
    let mut player = fixtures::player();
    player.max_discard_charges = 0;
    let mut encounter = Encounter::new(
        player,
        fixtures::dummy(&["attack"], 100, 10),
        CombatRules::default(),
        Some(fixtures::SEED),
    );
    encounter.start();
    let ids = fixtures::first_five(&encounter);

    let discarded = encounter
        .discard(&fixtures::as_refs(&ids[..2]))
        .expect("discard call succeeds");
    assert!(discarded.is_empty());
    assert_eq!(fixtures::first_five(&encounter), ids);
}

/// Test: poison on the player ticks when the first turn starts
#[test]
fn test_poison_ticks_at_turn_start() {
    let mut player = fixtures::player();
    player.apply_status_effect(StatusEffect::poison(3));
    let mut encounter = Encounter::new(
        player,
        fixtures::dummy(&["defend"], 100, 10),
        CombatRules::default(),
        Some(fixtures::SEED),
    );
    encounter.start();

    assert_eq!(encounter.player().current_health(), 74);
    assert_eq!(encounter.player().status_value("poison"), 2);
    assert!(encounter.log().events().iter().any(|e| matches!(
        e.kind,
        CombatEventKind::StatusTick {
            side: Side::Player,
            ..
        }
    )));
    assert_eq!(encounter.metrics().damage_taken, 6);
}

/// Test: dropping an enemy to half health is logged once
#[test]
fn test_half_health_logged_once() {
    let mut encounter =
        fixtures::encounter_with(fixtures::dummy(&["defend"], 100, 10), FixedEvaluator::pair(30));
    encounter.start();

    play(&mut encounter, PlayerActionKind::Attack).expect("hand plays");
    assert!(!encounter.enemy().half_health_triggered());
    play(&mut encounter, PlayerActionKind::Attack).expect("hand plays");
    assert!(encounter.enemy().half_health_triggered());
    play(&mut encounter, PlayerActionKind::Attack).expect("hand plays");

    let logged = encounter
        .log()
        .events()
        .iter()
        .filter(|e| matches!(e.kind, CombatEventKind::HalfHealth { .. }))
        .count();
    assert_eq!(logged, 1);
}

/// Test: metrics fold the whole fight
#[test]
fn test_metrics_after_victory() {
    let mut encounter =
        fixtures::encounter_with(fixtures::dummy(&["attack"], 30, 5), FixedEvaluator::pair(20));
    encounter.start();

    play(&mut encounter, PlayerActionKind::Attack).expect("hand plays");
    let report = play(&mut encounter, PlayerActionKind::Attack).expect("hand plays");
    assert_eq!(report.winner, Some(Side::Player));

    let metrics = encounter.metrics();
    assert_eq!(metrics.turns, 2);
    assert_eq!(metrics.damage_dealt, 30);
    assert_eq!(metrics.damage_taken, 5);
    assert_eq!(metrics.attacks, 2);
    assert_eq!(metrics.winner, Some(Side::Player));
}
