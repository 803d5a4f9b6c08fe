//! Intent scenario tests
//!
//! Tests pattern cycling and the effect of each enemy move on the player

use bathala_combat::combat::{
    ids, Combatant, Encounter, EnemyAiController, IntentType, PlayerActionKind, StatusEffect,
    TurnReport,
};

use crate::harness::{fixtures, FixedEvaluator};

fn play(encounter: &mut Encounter) -> TurnReport {
    let ids = fixtures::first_five(encounter);
    encounter
        .play_hand(&fixtures::as_refs(&ids), PlayerActionKind::Attack)
        .expect("hand plays")
}

/// Test: the cursor walks the pattern and wraps back to the start
#[test]
fn test_intent_cycle_wraps() {
    let mut foe = fixtures::dummy(&["attack", "defend", "strengthen"], 100, 15);

    let mut seen = Vec::new();
    for _ in 0..4 {
        let intent = foe.intent();
        seen.push((intent.kind, intent.value));
        foe.advance_pattern();
    }

    assert_eq!(
        seen,
        vec![
            (IntentType::Attack, 15),
            (IntentType::Defend, 5),
            (IntentType::Buff, 2),
            (IntentType::Attack, 15),
        ]
    );
}

/// Test: four turns of attack, defend, strengthen, attack against a passive player
#[test]
fn test_pattern_plays_out_over_turns() {
    let mut encounter = fixtures::encounter_with(
        fixtures::dummy(&["attack", "defend", "strengthen"], 200, 15),
        FixedEvaluator::high_card(1),
    );
    encounter.start();

    let first = play(&mut encounter);
    assert_eq!(first.enemy.as_ref().map(|e| e.hp_lost), Some(15));
    assert_eq!(encounter.player().current_health(), 65);

    let second = play(&mut encounter);
    assert_eq!(second.enemy.as_ref().map(|e| e.block_gained), Some(5));
    assert_eq!(encounter.enemy().block(), 5);

    // the chip lands on the block raised last turn
    let third = play(&mut encounter);
    assert_eq!(third.action.hp_lost, 0);
    assert_eq!(encounter.enemy().status_value(ids::STRENGTH), 2);

    let fourth = play(&mut encounter);
    assert_eq!(fourth.enemy.as_ref().map(|e| e.damage), Some(21));
    assert_eq!(encounter.player().current_health(), 44);
    assert_eq!(encounter.enemy().current_health(), 197);
    assert_eq!(encounter.turn(), 5);
}

/// Test: a stunned enemy loses exactly one turn
#[test]
fn test_stun_skips_one_turn() {
    let ai = EnemyAiController::new();
    let mut foe = fixtures::dummy(&["attack"], 100, 12);
    let mut player = fixtures::player();
    foe.apply_status_effect(StatusEffect::stun(1));

    let skipped = ai.execute_turn(&mut foe, &mut player);
    assert!(skipped.stunned);
    assert_eq!(player.current_health(), 80);
    assert!(!foe.has_status(ids::STUN));

    let hit = ai.execute_turn(&mut foe, &mut player);
    assert!(!hit.stunned);
    assert_eq!(player.current_health(), 68);
}

/// Test: debuff moves land on the player, buff moves on the enemy
#[test]
fn test_debuff_tokens_target_player() {
    let ai = EnemyAiController::new();
    let mut foe = fixtures::dummy(&["poison", "weaken", "stun", "strengthen"], 100, 10);
    let mut player = fixtures::player();

    for _ in 0..4 {
        ai.execute_turn(&mut foe, &mut player);
        foe.advance_pattern();
    }

    assert_eq!(player.status_value(ids::POISON), 2);
    assert_eq!(player.status_value(ids::WEAK), 1);
    assert_eq!(player.status_value(ids::FRAIL), 2);
    assert_eq!(foe.status_value(ids::STRENGTH), 2);
    assert_eq!(player.current_health(), 80);
}

/// Test: unrecognised tokens fall back to a base-damage attack
#[test]
fn test_unknown_token_attacks() {
    let ai = EnemyAiController::new();
    let mut foe = fixtures::dummy(&["heal"], 100, 9);
    let mut player = fixtures::player();

    assert_eq!(foe.intent().kind, IntentType::Attack);
    let result = ai.execute_turn(&mut foe, &mut player);
    assert_eq!(result.damage, 9);
    assert_eq!(player.current_health(), 71);
}
