//! Deterministic builders for scenario tests

#![allow(dead_code)]

use bathala_combat::combat::{Card, CombatRules, Encounter, HandEvaluator, Rank, Suit};
use bathala_combat::entities::{Enemy, EnemyConfig, EnemyTier, Player};
use bathala_combat::Catalog;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const SEED: u64 = 0x0ba7_4a1a;

/// Catalog with every built-in chapter, relic and potion
pub fn catalog() -> Catalog {
    Catalog::builtin().expect("built-in content loads")
}

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// Default 80 HP player
pub fn player() -> Player {
    Player::new("player", "Bayani", 80)
}

pub fn player_with_health(max_health: i32) -> Player {
    Player::new("player", "Bayani", max_health)
}

/// Chapter 1 common with no affinity
pub fn dummy(pattern: &[&str], max_health: i32, base_damage: i32) -> Enemy {
    let config = EnemyConfig::new(
        "training_dummy",
        "Training Dummy",
        EnemyTier::Common,
        1,
        max_health,
        base_damage,
        pattern,
        "dummy",
    );
    Enemy::from_config(&config)
}

pub fn card(rank: u8, suit: Suit) -> Card {
    Card::new(Rank::new(rank).expect("rank in 1..=13"), suit)
}

/// Five cards with no pair, straight or flush, led by Apoy
pub fn loose_hand() -> Vec<Card> {
    vec![
        card(2, Suit::Apoy),
        card(5, Suit::Apoy),
        card(9, Suit::Tubig),
        card(11, Suit::Lupa),
        card(13, Suit::Hangin),
    ]
}

/// Seeded encounter between the default player and `enemy`
pub fn encounter(enemy: Enemy) -> Encounter {
    Encounter::new(player(), enemy, CombatRules::default(), Some(SEED))
}

/// Seeded encounter scoring every hand with `evaluator`
pub fn encounter_with(enemy: Enemy, evaluator: impl HandEvaluator + 'static) -> Encounter {
    encounter(enemy).with_evaluator(Box::new(evaluator))
}

/// Ids of the first five cards in the player's hand
pub fn first_five(encounter: &Encounter) -> Vec<String> {
    encounter
        .player()
        .hand
        .iter()
        .take(5)
        .map(|c| c.id.clone())
        .collect()
}

pub fn as_refs(ids: &[String]) -> Vec<&str> {
    ids.iter().map(String::as_str).collect()
}
