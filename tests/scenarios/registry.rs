//! Registry scenario tests
//!
//! Tests catalog lookups, node selection and fresh spawns across chapters

use bathala_combat::combat::Combatant;
use bathala_combat::entities::{EnemyConfig, EnemyTier};
use bathala_combat::registry::{
    EnemyRegistry, EnemySelector, FALLBACK_COMBAT_SPRITE, FALLBACK_OVERWORLD_SPRITE,
};
use bathala_combat::CatalogError;
use std::sync::Arc;

use crate::harness::fixtures;

/// Test: every chapter offers commons, elites and exactly one boss
#[test]
fn test_chapters_cover_every_tier() {
    let catalog = fixtures::catalog();
    assert_eq!(catalog.enemies.chapters(), vec![1, 2, 3]);

    for chapter in [1, 2, 3] {
        for tier in EnemyTier::all() {
            assert!(
                !catalog.enemies.by_chapter_and_tier(chapter, *tier).is_empty(),
                "chapter {} has no {} enemies",
                chapter,
                tier
            );
        }
        assert_eq!(
            catalog
                .enemies
                .by_chapter_and_tier(chapter, EnemyTier::Boss)
                .len(),
            1
        );
    }
}

/// Test: boss nodes always pick the chapter's boss
#[test]
fn test_boss_node_selection() {
    let catalog = fixtures::catalog();
    let selector = catalog.selector();
    let mut rng = fixtures::rng();

    let ids: Vec<String> = [1, 2, 3]
        .iter()
        .map(|chapter| {
            selector
                .for_node(EnemyTier::Boss, *chapter, &mut rng)
                .expect("boss present")
                .vitals
                .id
        })
        .collect();
    assert_eq!(ids, vec!["mangangaway", "bakunawa", "false_bathala"]);
}

/// Test: elite nodes stay inside their chapter and tier
#[test]
fn test_elite_node_selection() {
    let catalog = fixtures::catalog();
    let selector = catalog.selector();
    let mut rng = fixtures::rng();

    for _ in 0..20 {
        let enemy = selector
            .for_node(EnemyTier::Elite, 3, &mut rng)
            .expect("elite present");
        assert_eq!(enemy.tier, EnemyTier::Elite);
        assert_eq!(enemy.chapter, 3);
    }
}

/// Test: names resolve case-insensitively and unknown names fall back to a common
#[test]
fn test_lookup_by_name() {
    let catalog = fixtures::catalog();
    let selector = catalog.selector();
    let mut rng = fixtures::rng();

    let boss = selector.by_id("BAKUNAWA", &mut rng).expect("resolves");
    assert_eq!(boss.vitals.id, "bakunawa");
    assert_eq!(boss.max_health(), 900);

    let fallback = selector.by_id("not_a_creature", &mut rng).expect("falls back");
    assert_eq!(fallback.chapter, 1);
    assert_eq!(fallback.tier, EnemyTier::Common);
}

/// Test: the factory hands out fresh, independent instances
#[test]
fn test_factory_spawns_fresh_instances() {
    let catalog = fixtures::catalog();
    let factory = catalog.factory();

    let mut first = factory.create("tikbalang_scout").expect("known enemy");
    first.take_damage(50);
    first.advance_pattern();
    let second = factory.create("tikbalang_scout").expect("known enemy");

    assert_ne!(first.instance_id, second.instance_id);
    assert_eq!(second.current_health(), second.max_health());
    assert_eq!(second.pattern_cursor(), 0);
    assert_eq!(
        factory.create("nobody").unwrap_err(),
        CatalogError::UnknownEnemy("nobody".to_string())
    );
}

/// Test: sprites resolve by id or name, with a shared fallback
#[test]
fn test_sprite_fallback() {
    let catalog = fixtures::catalog();
    assert_eq!(
        catalog.enemies.combat_sprite("Bakunawa"),
        catalog.enemies.combat_sprite("bakunawa")
    );
    assert_eq!(catalog.enemies.combat_sprite("ghost"), FALLBACK_COMBAT_SPRITE);
    assert_eq!(
        catalog.enemies.overworld_sprite("ghost"),
        FALLBACK_OVERWORLD_SPRITE
    );

    let keys = catalog.enemies.sprite_keys();
    let missing = catalog
        .enemies
        .validate_sprites(|key| key.ends_with("_combat"));
    assert_eq!(missing.len(), keys.len() / 2);
    assert!(missing.iter().all(|k| k.ends_with("_overworld")));
}

/// Test: an empty chapter falls back to chapter one, an empty registry errors
#[test]
fn test_selection_fallbacks() {
    let catalog = fixtures::catalog();
    let mut rng = fixtures::rng();
    let enemy = catalog
        .selector()
        .for_node(EnemyTier::Common, 7, &mut rng)
        .expect("falls back");
    assert_eq!(enemy.chapter, 1);

    let empty = EnemySelector::new(Arc::new(EnemyRegistry::new()));
    assert_eq!(
        empty
            .for_node(EnemyTier::Boss, 1, &mut rng)
            .unwrap_err(),
        CatalogError::EmptyPool {
            chapter: 1,
            tier: EnemyTier::Boss
        }
    );
}

/// Test: registering custom content alongside the built-ins
#[test]
fn test_register_custom_enemy() {
    let registry = EnemyRegistry::with_builtin_content().expect("bootstrap");
    let before = registry.len();
    assert_eq!(registry.bootstrap().expect("second bootstrap"), 0);

    let custom = EnemyConfig::new(
        "aswang_hunter",
        "Aswang Hunter",
        EnemyTier::Elite,
        4,
        300,
        20,
        &["attack", "weaken"],
        "aswang",
    );
    registry.register(custom).expect("valid definition");
    assert_eq!(registry.len(), before + 1);
    assert_eq!(registry.chapters(), vec![1, 2, 3, 4]);
    assert_eq!(registry.id_by_name("aswang hunter").as_deref(), Some("aswang_hunter"));

    let invalid = EnemyConfig::new(
        "Bad Id",
        "Bad",
        EnemyTier::Common,
        1,
        10,
        1,
        &["attack"],
        "bad",
    );
    assert!(matches!(
        registry.register(invalid),
        Err(CatalogError::InvalidConfig { .. })
    ));
}

/// Test: relic and potion lookups
#[test]
fn test_item_lookups() {
    let catalog = fixtures::catalog();
    assert_eq!(catalog.items.all_relics().len(), 43);
    assert_eq!(catalog.items.all_potions().len(), 10);

    let relic = catalog.items.create_relic("kapres_cigar").expect("known relic");
    assert!(!relic.used_this_combat());
    assert_eq!(
        catalog.items.create_relic("missing").unwrap_err(),
        CatalogError::UnknownRelic("missing".to_string())
    );
    assert_eq!(
        catalog.items.create_potion("missing").unwrap_err(),
        CatalogError::UnknownPotion("missing".to_string())
    );
}
