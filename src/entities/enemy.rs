//! The enemy combatant
//!
//! An enemy repeats a fixed attack pattern. The cursor into the pattern
//! advances at the end of each enemy turn and wraps, and the intent shown
//! to the player is always derived from the token under the cursor.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;
use uuid::Uuid;

use crate::combat::{
    intent_for, plan_for, ActionToken, Combatant, ElementalAffinity, Intent, MovePlan,
    StatusEffect, Vitals,
};
use crate::registry::{validate_content_id, CatalogError};

/// Encounter difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnemyTier {
    Common,
    Elite,
    Boss,
}

impl EnemyTier {
    pub fn all() -> &'static [EnemyTier] {
        &[EnemyTier::Common, EnemyTier::Elite, EnemyTier::Boss]
    }
}

impl FromStr for EnemyTier {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "common" | "normal" | "combat" => Ok(EnemyTier::Common),
            "elite" => Ok(EnemyTier::Elite),
            "boss" => Ok(EnemyTier::Boss),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for EnemyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EnemyTier::Common => "common",
            EnemyTier::Elite => "elite",
            EnemyTier::Boss => "boss",
        };
        write!(f, "{}", s)
    }
}

/// Lines spoken around an encounter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialogue {
    pub intro: String,
    pub defeat: String,
    pub spare: String,
    pub slay: String,
}

/// Bestiary entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lore {
    pub description: String,
    pub origin: String,
    pub reference: String,
}

/// Immutable enemy definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyConfig {
    pub id: String,
    pub name: String,
    pub tier: EnemyTier,
    pub chapter: u8,
    pub max_health: i32,
    pub base_damage: i32,
    pub attack_pattern: Vec<ActionToken>,
    #[serde(default)]
    pub elemental_affinity: ElementalAffinity,
    pub combat_sprite: String,
    pub overworld_sprite: String,
    /// Effects the enemy starts every encounter with
    #[serde(default)]
    pub initial_effects: Vec<StatusEffect>,
    #[serde(default)]
    pub dialogue: Option<Dialogue>,
    #[serde(default)]
    pub lore: Option<Lore>,
}

impl EnemyConfig {
    /// Definition with no affinity, effects, dialogue or lore.
    /// Sprite keys default to `{sprite}_combat` and `{sprite}_overworld`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: &str,
        name: &str,
        tier: EnemyTier,
        chapter: u8,
        max_health: i32,
        base_damage: i32,
        pattern: &[&str],
        sprite: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            tier,
            chapter,
            max_health,
            base_damage,
            attack_pattern: pattern.iter().map(|t| ActionToken::from(*t)).collect(),
            elemental_affinity: ElementalAffinity::none(),
            combat_sprite: format!("{}_combat", sprite),
            overworld_sprite: format!("{}_overworld", sprite),
            initial_effects: Vec::new(),
            dialogue: None,
            lore: None,
        }
    }

    pub fn with_affinity(mut self, affinity: ElementalAffinity) -> Self {
        self.elemental_affinity = affinity;
        self
    }

    pub fn with_initial_effect(mut self, effect: StatusEffect) -> Self {
        self.initial_effects.push(effect);
        self
    }

    pub fn with_dialogue(mut self, intro: &str, defeat: &str, spare: &str, slay: &str) -> Self {
        self.dialogue = Some(Dialogue {
            intro: intro.to_string(),
            defeat: defeat.to_string(),
            spare: spare.to_string(),
            slay: slay.to_string(),
        });
        self
    }

    pub fn with_lore(mut self, description: &str, origin: &str, reference: &str) -> Self {
        self.lore = Some(Lore {
            description: description.to_string(),
            origin: origin.to_string(),
            reference: reference.to_string(),
        });
        self
    }

    /// Check the definition is usable as catalog content
    pub fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |reason: String| CatalogError::InvalidConfig {
            id: self.id.clone(),
            reason,
        };

        validate_content_id(&self.id).map_err(|e| invalid(e.to_string()))?;
        if self.name.trim().is_empty() {
            return Err(invalid("name is empty".to_string()));
        }
        if self.max_health <= 0 {
            return Err(invalid(format!("max health {} must be positive", self.max_health)));
        }
        if self.base_damage < 0 {
            return Err(invalid(format!("base damage {} is negative", self.base_damage)));
        }
        if self.attack_pattern.is_empty() {
            return Err(invalid("attack pattern is empty".to_string()));
        }
        for sprite in [&self.combat_sprite, &self.overworld_sprite] {
            validate_content_id(sprite)
                .map_err(|e| invalid(format!("sprite '{}': {}", sprite, e)))?;
        }
        Ok(())
    }
}

/// Read-only view of an enemy for display and saves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemySnapshot {
    pub instance_id: Uuid,
    pub id: String,
    pub name: String,
    pub tier: EnemyTier,
    pub chapter: u8,
    pub current_health: i32,
    pub max_health: i32,
    pub block: i32,
    pub status_effects: Vec<StatusEffect>,
    pub base_damage: i32,
    pub attack_pattern: Vec<ActionToken>,
    pub pattern_cursor: usize,
    pub intent: Intent,
    pub elemental_affinity: ElementalAffinity,
    pub half_health_triggered: bool,
}

/// An enemy in an encounter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Distinguishes copies spawned from the same definition
    pub instance_id: Uuid,
    #[serde(flatten)]
    pub vitals: Vitals,
    pub tier: EnemyTier,
    pub chapter: u8,
    pub base_damage: i32,
    attack_pattern: Vec<ActionToken>,
    pattern_cursor: usize,
    pub elemental_affinity: ElementalAffinity,
    pub combat_sprite: String,
    pub overworld_sprite: String,
    pub dialogue: Option<Dialogue>,
    pub lore: Option<Lore>,
    half_health_triggered: bool,
    initial_effects: Vec<StatusEffect>,
}

impl Enemy {
    /// Spawn a fresh enemy with its starting effects applied
    pub fn from_config(config: &EnemyConfig) -> Self {
        let mut vitals = Vitals::new(&config.id, &config.name, config.max_health);
        for effect in &config.initial_effects {
            vitals.status_effects.apply(effect.clone());
        }
        Self {
            instance_id: Uuid::new_v4(),
            vitals,
            tier: config.tier,
            chapter: config.chapter,
            base_damage: config.base_damage,
            attack_pattern: config.attack_pattern.clone(),
            pattern_cursor: 0,
            elemental_affinity: config.elemental_affinity,
            combat_sprite: config.combat_sprite.clone(),
            overworld_sprite: config.overworld_sprite.clone(),
            dialogue: config.dialogue.clone(),
            lore: config.lore.clone(),
            half_health_triggered: false,
            initial_effects: config.initial_effects.clone(),
        }
    }

    pub fn attack_pattern(&self) -> &[ActionToken] {
        &self.attack_pattern
    }

    pub fn pattern_cursor(&self) -> usize {
        self.pattern_cursor
    }

    /// Token under the cursor. An empty pattern behaves as a plain attack.
    pub fn current_token(&self) -> ActionToken {
        self.attack_pattern
            .get(self.pattern_cursor)
            .cloned()
            .unwrap_or(ActionToken::Attack)
    }

    /// Player-visible preview of the next move
    pub fn intent(&self) -> Intent {
        intent_for(&self.current_token(), self.base_damage, &self.vitals.name)
    }

    /// Full resolution of the next move
    pub fn move_plan(&self) -> MovePlan {
        plan_for(&self.current_token(), self.base_damage, &self.vitals.name)
    }

    /// Step to the next pattern token, wrapping at the end
    pub fn advance_pattern(&mut self) {
        if self.attack_pattern.is_empty() {
            return;
        }
        self.pattern_cursor = (self.pattern_cursor + 1) % self.attack_pattern.len();
    }

    /// True exactly once per combat, the first time health falls to half or below
    pub fn check_half_health_trigger(&mut self) -> bool {
        if self.half_health_triggered
            || self.vitals.current_health * 2 > self.vitals.max_health
        {
            return false;
        }
        self.half_health_triggered = true;
        debug!("{} dropped to half health", self.vitals.id);
        true
    }

    pub fn half_health_triggered(&self) -> bool {
        self.half_health_triggered
    }

    /// Full-health copy with a new instance id and a reset cursor
    pub fn clone_fresh(&self) -> Self {
        let mut vitals = Vitals::new(&self.vitals.id, &self.vitals.name, self.vitals.max_health);
        for effect in &self.initial_effects {
            vitals.status_effects.apply(effect.clone());
        }
        Self {
            instance_id: Uuid::new_v4(),
            vitals,
            pattern_cursor: 0,
            half_health_triggered: false,
            ..self.clone()
        }
    }

    pub fn to_snapshot(&self) -> EnemySnapshot {
        EnemySnapshot {
            instance_id: self.instance_id,
            id: self.vitals.id.clone(),
            name: self.vitals.name.clone(),
            tier: self.tier,
            chapter: self.chapter,
            current_health: self.vitals.current_health,
            max_health: self.vitals.max_health,
            block: self.vitals.block,
            status_effects: self.vitals.status_effects.to_vec(),
            base_damage: self.base_damage,
            attack_pattern: self.attack_pattern.clone(),
            pattern_cursor: self.pattern_cursor,
            intent: self.intent(),
            elemental_affinity: self.elemental_affinity,
            half_health_triggered: self.half_health_triggered,
        }
    }
}

impl Combatant for Enemy {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    fn on_combat_start(&mut self) {
        self.pattern_cursor = 0;
        self.half_health_triggered = false;
        self.vitals.block = 0;
    }

    fn on_turn_start(&mut self) {
        self.vitals.block = 0;
    }

    fn on_turn_end(&mut self) {
        self.advance_pattern();
    }
}
