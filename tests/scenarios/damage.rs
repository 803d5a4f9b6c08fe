//! Damage scenario tests
//!
//! Tests block absorption and the attack pipeline with known cards

use bathala_combat::combat::{
    ids, resolve_player_action, ActionOutcome, AffinityModifier, Card, CombatRules, Combatant,
    Element, ElementalAffinity, HandScore, HandType, PlayerActionKind, StatusEffect, Suit, Vitals,
};
use bathala_combat::entities::{Enemy, EnemyConfig, EnemyTier, Player};

use crate::harness::fixtures;

fn fire_weak_foe() -> Enemy {
    let config = EnemyConfig::new(
        "ember_target",
        "Ember Target",
        EnemyTier::Common,
        1,
        200,
        10,
        &["attack"],
        "ember_target",
    )
    .with_affinity(ElementalAffinity::new(Element::Fire, Element::Water));
    Enemy::from_config(&config)
}

fn tubig_hand() -> Vec<Card> {
    vec![
        fixtures::card(3, Suit::Tubig),
        fixtures::card(6, Suit::Tubig),
        fixtures::card(8, Suit::Apoy),
        fixtures::card(10, Suit::Lupa),
        fixtures::card(12, Suit::Hangin),
    ]
}

fn lupa_flush() -> Vec<Card> {
    [1, 4, 7, 9, 13]
        .iter()
        .map(|rank| fixtures::card(*rank, Suit::Lupa))
        .collect()
}

fn act(
    player: &mut Player,
    foe: &mut Enemy,
    kind: PlayerActionKind,
    score: HandScore,
    cards: &[Card],
) -> ActionOutcome {
    resolve_player_action(player, foe, kind, score, cards, &CombatRules::default())
        .expect("five cards resolve")
}

/// Test: block soaks damage before health does
#[test]
fn test_block_absorbs_first() {
    let mut bare = Vitals::new("target", "Target", 50);
    assert_eq!(bare.take_damage(30), 30);
    assert_eq!(bare.current_health, 20);

    let mut guarded = Vitals::new("target", "Target", 50);
    guarded.gain_block(10);
    assert_eq!(guarded.take_damage(30), 20);
    assert_eq!(guarded.current_health, 30);
    assert_eq!(guarded.block, 0);
}

/// Test: overkill only counts the health that was left
#[test]
fn test_overkill_reports_remaining_health() {
    let mut vitals = Vitals::new("target", "Target", 12);
    assert_eq!(vitals.take_damage(40), 12);
    assert!(vitals.is_dead());
    assert_eq!(vitals.take_damage(5), 0);
}

/// Test: the dominant suit's element hits weakness and resistance
#[test]
fn test_elemental_affinity() {
    let mut player = fixtures::player();
    let mut foe = fire_weak_foe();

    let fire = act(
        &mut player,
        &mut foe,
        PlayerActionKind::Attack,
        HandScore::new(HandType::HighCard, 20),
        &fixtures::loose_hand(),
    );
    assert_eq!(fire.element, Some(Element::Fire));
    assert_eq!(fire.affinity, AffinityModifier::Weakness);
    assert_eq!(fire.damage, 30);

    let water = act(
        &mut player,
        &mut foe,
        PlayerActionKind::Attack,
        HandScore::new(HandType::HighCard, 20),
        &tubig_hand(),
    );
    assert_eq!(water.affinity, AffinityModifier::Resistance);
    assert_eq!(water.damage, 15);
    assert_eq!(foe.current_health(), 155);
}

/// Test: weak, weakness and vulnerable apply in that order, each rounding down
#[test]
fn test_modifier_order() {
    let mut player = fixtures::player();
    let mut foe = fire_weak_foe();
    player.apply_status_effect(StatusEffect::weak(2));
    foe.apply_status_effect(StatusEffect::vulnerable(1));

    // 20 -> 10 (weak x2) -> 15 (weakness) -> 22 (vulnerable)
    let outcome = act(
        &mut player,
        &mut foe,
        PlayerActionKind::Attack,
        HandScore::new(HandType::Pair, 20),
        &fixtures::loose_hand(),
    );
    assert_eq!(outcome.damage, 22);
}

/// Test: weak stops reducing past three stacks
#[test]
fn test_weak_caps_at_three_stacks() {
    let mut player = fixtures::player();
    let mut foe = fixtures::dummy(&["attack"], 200, 10);
    player.apply_status_effect(StatusEffect::weak(5));

    let outcome = act(
        &mut player,
        &mut foe,
        PlayerActionKind::Attack,
        HandScore::new(HandType::Pair, 40),
        &fixtures::loose_hand(),
    );
    assert_eq!(outcome.damage, 10);
}

/// Test: a single action never exceeds the configured cap
#[test]
fn test_damage_cap() {
    let mut player = fixtures::player();
    let mut foe = fixtures::dummy(&["attack"], 200, 10);
    let rules = CombatRules {
        damage_cap: 25,
        ..CombatRules::default()
    };

    let outcome = resolve_player_action(
        &mut player,
        &mut foe,
        PlayerActionKind::Attack,
        HandScore::new(HandType::FourOfAKind, 90),
        &fixtures::loose_hand(),
        &rules,
    )
    .expect("five cards resolve");
    assert_eq!(outcome.damage, 25);
    assert_eq!(foe.current_health(), 175);
}

/// Test: special scales damage, applies the suit's status and spends itself
#[test]
fn test_special_once_per_combat() {
    let mut player = fixtures::player();
    let mut foe = fixtures::dummy(&["attack"], 200, 10);

    let special = act(
        &mut player,
        &mut foe,
        PlayerActionKind::Special,
        HandScore::new(HandType::Flush, 30),
        &lupa_flush(),
    );
    assert_eq!(special.damage, 18);
    assert_eq!(special.enemy_effects, vec![StatusEffect::vulnerable(1)]);
    assert!(foe.has_status(ids::VULNERABLE));
    assert!(player.special_used);

    let again = act(
        &mut player,
        &mut foe,
        PlayerActionKind::Special,
        HandScore::new(HandType::Flush, 30),
        &lupa_flush(),
    );
    assert!(again.was_refused());
    assert_eq!(again.damage, 0);
    assert_eq!(foe.current_health(), 182);
}

/// Test: special below a flush is refused without spending it
#[test]
fn test_special_needs_flush() {
    let mut player = fixtures::player();
    let mut foe = fixtures::dummy(&["attack"], 200, 10);

    let outcome = act(
        &mut player,
        &mut foe,
        PlayerActionKind::Special,
        HandScore::new(HandType::Straight, 30),
        &fixtures::loose_hand(),
    );
    assert!(outcome.was_refused());
    assert!(!player.special_used);
    assert_eq!(foe.current_health(), 200);
}

/// Test: defend adds dexterity, then frail cuts the total
#[test]
fn test_defend_with_dexterity_and_frail() {
    let mut player = fixtures::player();
    let mut foe = fixtures::dummy(&["attack"], 200, 10);
    player.apply_status_effect(StatusEffect::dexterity(1));
    player.apply_status_effect(StatusEffect::frail(1));

    let outcome = act(
        &mut player,
        &mut foe,
        PlayerActionKind::Defend,
        HandScore::new(HandType::Pair, 10),
        &fixtures::loose_hand(),
    );
    assert_eq!(outcome.block_gained, 9);
    assert_eq!(player.block(), 9);
}
