//! Inventory scenario tests
//!
//! Tests relics and potions from the built-in catalog, in and out of combat

use std::collections::HashSet;

use bathala_combat::combat::{
    ids, resolve_player_action, Card, CombatRules, Combatant, Encounter, HandScore, HandType,
    PlayerActionKind, Side,
};
use bathala_combat::entities::{Enemy, Player};
use bathala_combat::items::{PotionOutcome, MAX_POTIONS, MAX_RELICS};

use crate::harness::{fixtures, FixedEvaluator};

fn attack(player: &mut Player, foe: &mut Enemy) -> i32 {
    resolve_player_action(
        player,
        foe,
        PlayerActionKind::Attack,
        HandScore::new(HandType::Pair, 10),
        &fixtures::loose_hand(),
        &CombatRules::default(),
    )
    .expect("five cards resolve")
    .damage
}

/// Test: a block potion stacks on existing block and is used up
#[test]
fn test_block_potion_consumed() {
    let catalog = fixtures::catalog();
    let mut player = fixtures::player();
    player.gain_block(5);
    assert!(player.gain_potion(catalog.items.create_potion("fortitude_potion").unwrap()));

    assert_eq!(player.use_potion("fortitude_potion"), Some(PotionOutcome::Applied));
    assert_eq!(player.block(), 20);
    assert!(player.potions().is_empty());
    assert_eq!(player.use_potion("fortitude_potion"), None);
}

/// Test: the potion belt holds three
#[test]
fn test_potion_capacity() {
    let catalog = fixtures::catalog();
    let mut player = fixtures::player();
    for _ in 0..MAX_POTIONS {
        assert!(player.gain_potion(catalog.items.create_potion("healing_potion").unwrap()));
    }
    assert!(!player.gain_potion(catalog.items.create_potion("strength_potion").unwrap()));
    assert_eq!(player.potions().len(), 3);
}

/// Test: temporary max HP lasts until the encounter ends
#[test]
fn test_divine_potion_reverts_after_combat() {
    let catalog = fixtures::catalog();
    let mut player = fixtures::player();
    player.gain_potion(catalog.items.create_potion("divine_potion").unwrap());
    let mut encounter = Encounter::new(
        player,
        fixtures::dummy(&["attack"], 15, 10),
        CombatRules::default(),
        Some(fixtures::SEED),
    )
    .with_evaluator(Box::new(FixedEvaluator::pair(20)));
    encounter.start();

    let outcome = encounter.use_potion("divine_potion").expect("encounter running");
    assert_eq!(outcome, Some(PotionOutcome::Applied));
    assert_eq!(encounter.player().max_health(), 90);
    assert_eq!(encounter.player().current_health(), 90);
    assert_eq!(encounter.metrics().potions_used, 1);

    let ids = fixtures::first_five(&encounter);
    let report = encounter
        .play_hand(&fixtures::as_refs(&ids), PlayerActionKind::Attack)
        .expect("hand plays");
    assert_eq!(report.winner, Some(Side::Player));
    assert_eq!(encounter.player().max_health(), 80);
    assert_eq!(encounter.player().current_health(), 80);
}

/// Test: the chaos potion puts three extra cards in hand
#[test]
fn test_chaos_potion_adds_cards() {
    let catalog = fixtures::catalog();
    let mut player = fixtures::player();
    player.gain_potion(catalog.items.create_potion("chaos_potion").unwrap());
    let mut encounter = Encounter::new(
        player,
        fixtures::dummy(&["attack"], 100, 10),
        CombatRules::default(),
        Some(fixtures::SEED),
    );
    encounter.start();

    encounter.use_potion("chaos_potion").expect("encounter running");
    assert_eq!(encounter.player().hand.len(), 11);
    assert_eq!(encounter.use_potion("chaos_potion"), Ok(None));
}

fn card_count(encounter: &Encounter) -> (usize, usize) {
    let player = encounter.player();
    let ids: HashSet<&str> = player
        .hand
        .iter()
        .chain(&player.played_hand)
        .chain(&player.draw_pile)
        .chain(&player.discard_pile)
        .map(|c| c.id.as_str())
        .collect();
    let total = player.hand.len()
        + player.played_hand.len()
        + player.draw_pile.len()
        + player.discard_pile.len();
    (total, ids.len())
}

/// Test: chaos cards carry their own ids and survive being played
#[test]
fn test_chaos_cards_conserved_through_play() {
    let catalog = fixtures::catalog();
    let mut player = fixtures::player();
    player.gain_potion(catalog.items.create_potion("chaos_potion").unwrap());
    let mut encounter = Encounter::new(
        player,
        fixtures::dummy(&["attack"], 100, 10),
        CombatRules::default(),
        Some(fixtures::SEED),
    )
    .with_evaluator(Box::new(FixedEvaluator::pair(5)));
    encounter.start();
    encounter.use_potion("chaos_potion").expect("encounter running");
    assert_eq!(card_count(&encounter), (55, 55));

    let mut ids: Vec<String> = encounter
        .player()
        .hand
        .iter()
        .filter(|c| c.id.contains("-chaos-"))
        .map(|c| c.id.clone())
        .collect();
    assert_eq!(ids.len(), 3);
    ids.extend(
        encounter
            .player()
            .hand
            .iter()
            .filter(|c| !c.id.contains("-chaos-"))
            .take(2)
            .map(|c| c.id.clone()),
    );

    let report = encounter
        .play_hand(&fixtures::as_refs(&ids), PlayerActionKind::Attack)
        .expect("hand plays");
    assert!(!report.action.was_refused());
    assert_eq!(card_count(&encounter), (55, 55));
    let discarded: Vec<&str> = encounter
        .player()
        .discard_pile
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert!(ids.iter().all(|id| discarded.contains(&id.as_str())));
}

/// Test: a failed play puts every selected card back in hand
#[test]
fn test_rejected_play_keeps_cards() {
    let mut encounter = fixtures::encounter(fixtures::dummy(&["attack"], 100, 10));
    encounter.start();
    let mut ids = fixtures::first_five(&encounter);
    ids[4] = ids[0].clone();

    assert!(encounter
        .play_hand(&fixtures::as_refs(&ids), PlayerActionKind::Attack)
        .is_err());
    assert_eq!(encounter.player().hand.len(), 8);
    assert!(encounter.player().played_hand.is_empty());
    assert_eq!(card_count(&encounter), (52, 52));
}

/// Test: the clarity potion reshuffles with the encounter seed
#[test]
fn test_clarity_potion_follows_seed() {
    let catalog = fixtures::catalog();
    let drink = || {
        let mut player = fixtures::player();
        player.deck = Card::standard_deck().into_iter().take(13).collect();
        player.gain_potion(catalog.items.create_potion("clarity_potion").unwrap());
        let mut encounter = Encounter::new(
            player,
            fixtures::dummy(&["attack"], 100, 10),
            CombatRules::default(),
            Some(fixtures::SEED),
        );
        encounter.start();

        // Empty the draw pile so the potion has to reshuffle the discards
        let ids = fixtures::first_five(&encounter);
        encounter.discard(&fixtures::as_refs(&ids)).expect("encounter running");
        assert!(encounter.player().draw_pile.is_empty());
        assert_eq!(encounter.player().discard_pile.len(), 5);

        encounter.use_potion("clarity_potion").expect("encounter running");
        encounter.player().hand.clone()
    };

    let first = drink();
    assert_eq!(first.len(), 11);
    assert_eq!(first, drink());
}

/// Test: the plate grants block at combat start and again each turn
#[test]
fn test_earthwardens_plate_block() {
    let catalog = fixtures::catalog();
    let mut player = fixtures::player();
    player.gain_relic(catalog.items.create_relic("earthwardens_plate").unwrap());
    let mut encounter = Encounter::new(
        player,
        fixtures::dummy(&["defend"], 100, 10),
        CombatRules::default(),
        Some(fixtures::SEED),
    );
    encounter.start();

    // 5 at combat start, 1 more as the first turn begins
    assert_eq!(encounter.player().block(), 6);
}

/// Test: the cigar doubles only the first attack of each combat
#[test]
fn test_kapres_cigar_once_per_combat() {
    let catalog = fixtures::catalog();
    let mut player = fixtures::player();
    let mut foe = fixtures::dummy(&["attack"], 200, 10);
    player.gain_relic(catalog.items.create_relic("kapres_cigar").unwrap());
    player.on_combat_start();

    assert_eq!(attack(&mut player, &mut foe), 20);
    assert_eq!(attack(&mut player, &mut foe), 10);

    player.on_combat_start();
    assert_eq!(attack(&mut player, &mut foe), 20);
}

/// Test: the claw makes every attacked enemy vulnerable
#[test]
fn test_amomongo_claw_applies_vulnerable() {
    let catalog = fixtures::catalog();
    let mut player = fixtures::player();
    let mut foe = fixtures::dummy(&["attack"], 200, 10);
    player.gain_relic(catalog.items.create_relic("amomongo_claw").unwrap());

    assert_eq!(attack(&mut player, &mut foe), 10);
    assert!(foe.has_status(ids::VULNERABLE));
}

/// Test: defensive relics raise max health and defend block
#[test]
fn test_defensive_relics() {
    let catalog = fixtures::catalog();
    let mut player = fixtures::player();
    let mut foe = fixtures::dummy(&["attack"], 200, 10);
    player.gain_relic(catalog.items.create_relic("stone_golem_heart").unwrap());
    player.gain_relic(catalog.items.create_relic("duwende_charm").unwrap());
    assert_eq!(player.max_health(), 88);

    let outcome = resolve_player_action(
        &mut player,
        &mut foe,
        PlayerActionKind::Defend,
        HandScore::new(HandType::Pair, 10),
        &fixtures::loose_hand(),
        &CombatRules::default(),
    )
    .unwrap();
    assert_eq!(outcome.block_gained, 13);
}

/// Test: relics are unique and capped at six
#[test]
fn test_relic_capacity() {
    let catalog = fixtures::catalog();
    let mut player = fixtures::player();
    let relics = catalog.items.all_relics();

    assert!(player.gain_relic(catalog.items.create_relic(&relics[0].id).unwrap()));
    assert!(!player.gain_relic(catalog.items.create_relic(&relics[0].id).unwrap()));
    for config in relics.iter().skip(1) {
        player.gain_relic(catalog.items.create_relic(&config.id).unwrap());
    }
    assert_eq!(player.relics().len(), MAX_RELICS);
}
