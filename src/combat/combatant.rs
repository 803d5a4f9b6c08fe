//! Combatant state and arithmetic
//!
//! `Vitals` holds the fields every combatant shares (health, block and
//! status effects) and owns the damage, heal and block arithmetic.
//! `Combatant` is the trait the player and enemies implement; its
//! lifecycle hooks are defined per combatant type.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::effects::{ids, StatusEffect, StatusEffects};

/// Damage dealt per poison stack at turn start
pub const POISON_DAMAGE_PER_STACK: i32 = 2;
/// Healing per regeneration stack at turn start
pub const REGENERATION_HEAL_PER_STACK: i32 = 2;
/// Block per plated armor stack at turn start
pub const PLATED_ARMOR_BLOCK_PER_STACK: i32 = 3;

/// Health, block and status effects for one combatant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    /// Entity id
    pub id: String,
    /// Display name
    pub name: String,
    /// Maximum hit points
    pub max_health: i32,
    /// Current hit points, kept within 0..=max_health
    pub current_health: i32,
    /// Damage absorbed before health
    pub block: i32,
    /// Active status effects
    pub status_effects: StatusEffects,
}

/// What turn-start status processing did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnStartEffects {
    /// HP lost to poison
    pub poison_damage: i32,
    /// HP restored by regeneration
    pub regenerated: i32,
    /// Block from plated armor
    pub armor_block: i32,
    /// Strength from ritual
    pub ritual_strength: i32,
}

impl Vitals {
    /// Create vitals at full health
    pub fn new(id: impl Into<String>, name: impl Into<String>, max_health: i32) -> Self {
        let max_health = max_health.max(0);
        Self {
            id: id.into(),
            name: name.into(),
            max_health,
            current_health: max_health,
            block: 0,
            status_effects: StatusEffects::new(),
        }
    }

    /// Check if dead
    pub fn is_dead(&self) -> bool {
        self.current_health <= 0
    }

    /// Health as a rounded percentage of max health
    pub fn health_percent(&self) -> i32 {
        if self.max_health <= 0 {
            return 0;
        }
        (self.current_health as f64 / self.max_health as f64 * 100.0).round() as i32
    }

    /// Take damage, block first. Returns HP actually lost.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        if amount <= 0 {
            return 0;
        }
        let absorbed = amount.min(self.block);
        self.block -= absorbed;
        let remaining = amount - absorbed;

        let hp_lost = remaining.min(self.current_health);
        self.current_health -= hp_lost;
        hp_lost
    }

    /// Lose health directly, ignoring block. Returns HP actually lost.
    pub fn lose_health(&mut self, amount: i32) -> i32 {
        if amount <= 0 {
            return 0;
        }
        let hp_lost = amount.min(self.current_health);
        self.current_health -= hp_lost;
        hp_lost
    }

    /// Heal (cannot exceed max_health). Returns HP actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        if amount <= 0 {
            return 0;
        }
        let actual = amount.min(self.max_health - self.current_health).max(0);
        self.current_health += actual;
        actual
    }

    /// Add block
    pub fn gain_block(&mut self, amount: i32) {
        if amount > 0 {
            self.block = self.block.saturating_add(amount);
        }
    }

    /// Raise max health and heal by the same amount
    pub fn increase_max_health(&mut self, amount: i32) {
        if amount <= 0 {
            return;
        }
        self.max_health = self.max_health.saturating_add(amount);
        self.current_health = self.current_health.saturating_add(amount);
    }

    /// Restore full health and drop block and effects
    pub fn reset(&mut self) {
        self.current_health = self.max_health;
        self.block = 0;
        self.status_effects.clear();
    }

    /// Process poison, regeneration, plated armor and ritual for the start of a turn
    pub fn resolve_turn_start_effects(&mut self) -> TurnStartEffects {
        let mut result = TurnStartEffects::default();

        let poison = self.status_effects.value(ids::POISON);
        if poison > 0 {
            result.poison_damage = self.lose_health(poison * POISON_DAMAGE_PER_STACK);
            self.status_effects.decrement(ids::POISON, 1);
        }

        let regeneration = self.status_effects.value(ids::REGENERATION);
        if regeneration > 0 {
            result.regenerated = self.heal(regeneration * REGENERATION_HEAL_PER_STACK);
            self.status_effects.decrement(ids::REGENERATION, 1);
        }

        let plated = self.status_effects.value(ids::PLATED_ARMOR);
        if plated > 0 {
            result.armor_block = plated * PLATED_ARMOR_BLOCK_PER_STACK;
            self.gain_block(result.armor_block);
        }

        let ritual = self.status_effects.value(ids::RITUAL);
        if ritual > 0 {
            result.ritual_strength = ritual;
            self.status_effects.apply(StatusEffect::strength(ritual));
        }

        if result != TurnStartEffects::default() {
            debug!("{} turn-start effects: {:?}", self.id, result);
        }
        result
    }
}

/// A participant in a combat encounter
pub trait Combatant {
    /// Shared combat state
    fn vitals(&self) -> &Vitals;

    /// Shared combat state, mutable
    fn vitals_mut(&mut self) -> &mut Vitals;

    /// Called once when an encounter begins
    fn on_combat_start(&mut self);

    /// Called at the start of this combatant's turn
    fn on_turn_start(&mut self);

    /// Called at the end of this combatant's turn
    fn on_turn_end(&mut self);

    /// Chance in `[0, 1]` to avoid an incoming attack outright
    fn dodge_chance(&self) -> f64 {
        0.0
    }

    fn id(&self) -> &str {
        &self.vitals().id
    }

    fn name(&self) -> &str {
        &self.vitals().name
    }

    fn current_health(&self) -> i32 {
        self.vitals().current_health
    }

    fn max_health(&self) -> i32 {
        self.vitals().max_health
    }

    fn block(&self) -> i32 {
        self.vitals().block
    }

    fn is_dead(&self) -> bool {
        self.vitals().is_dead()
    }

    fn health_percent(&self) -> i32 {
        self.vitals().health_percent()
    }

    /// Take damage, block first. Returns HP actually lost.
    fn take_damage(&mut self, amount: i32) -> i32 {
        self.vitals_mut().take_damage(amount)
    }

    /// Heal up to max health. Returns HP actually restored.
    fn heal(&mut self, amount: i32) -> i32 {
        self.vitals_mut().heal(amount)
    }

    fn gain_block(&mut self, amount: i32) {
        self.vitals_mut().gain_block(amount)
    }

    /// Apply a status effect, stacking by id
    fn apply_status_effect(&mut self, effect: StatusEffect) {
        self.vitals_mut().status_effects.apply(effect)
    }

    fn remove_status_effect(&mut self, id: &str) -> Option<StatusEffect> {
        self.vitals_mut().status_effects.remove(id)
    }

    fn clear_status_effects(&mut self) {
        self.vitals_mut().status_effects.clear()
    }

    fn status_effects(&self) -> &StatusEffects {
        &self.vitals().status_effects
    }

    /// Stacked value of a status effect, 0 when absent
    fn status_value(&self, id: &str) -> i32 {
        self.vitals().status_effects.value(id)
    }

    fn has_status(&self, id: &str) -> bool {
        self.vitals().status_effects.has(id)
    }
}
