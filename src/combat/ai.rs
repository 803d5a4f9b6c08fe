//! Enemy turn resolution
//!
//! The controller reads the enemy's current move plan and carries it out
//! against a target. It dispatches on the intent type only; every
//! token-specific detail lives in the move plan.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::combatant::Combatant;
use super::effects::{ids, StatusEffect};
use super::intent::{ActionToken, Intent, IntentType};
use crate::entities::Enemy;

/// Damage per point of strength
pub const STRENGTH_DAMAGE_PER_STACK: i32 = 3;
/// Damage multiplier while weakened
pub const WEAK_MULTIPLIER: f64 = 0.75;

/// What an enemy did on its turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyActionResult {
    pub token: ActionToken,
    pub intent: Intent,
    /// The enemy lost its turn to stun
    pub stunned: bool,
    /// Damage sent at the target before block
    pub damage: i32,
    /// HP the target actually lost
    pub hp_lost: i32,
    /// The target dodged the attack and took no damage
    #[serde(default)]
    pub dodged: bool,
    pub block_gained: i32,
    pub self_effects: Vec<StatusEffect>,
    pub target_effects: Vec<StatusEffect>,
}

impl EnemyActionResult {
    fn new(token: ActionToken, intent: Intent) -> Self {
        Self {
            token,
            intent,
            stunned: false,
            damage: 0,
            hp_lost: 0,
            dodged: false,
            block_gained: 0,
            self_effects: Vec::new(),
            target_effects: Vec::new(),
        }
    }
}

/// Executes enemy turns
#[derive(Debug, Clone, Copy, Default)]
pub struct EnemyAiController;

impl EnemyAiController {
    pub fn new() -> Self {
        Self
    }

    /// Intent value plus strength, reduced by weak, never negative
    pub fn effective_damage(enemy: &Enemy, value: i32) -> i32 {
        let mut damage = value + enemy.status_value(ids::STRENGTH) * STRENGTH_DAMAGE_PER_STACK;
        if enemy.has_status(ids::WEAK) {
            damage = (damage as f64 * WEAK_MULTIPLIER).floor() as i32;
        }
        damage.max(0)
    }

    /// Carry out the enemy's current move against a target
    pub fn execute_turn<T: Combatant>(&self, enemy: &mut Enemy, target: &mut T) -> EnemyActionResult {
        self.execute_turn_with(enemy, target, &mut rand::rng())
    }

    /// Carry out the enemy's current move, rolling the target's dodge with `rng`
    pub fn execute_turn_with<T: Combatant, R: Rng + ?Sized>(
        &self,
        enemy: &mut Enemy,
        target: &mut T,
        rng: &mut R,
    ) -> EnemyActionResult {
        let plan = enemy.move_plan();
        let mut result = EnemyActionResult::new(enemy.current_token(), plan.intent.clone());

        if enemy.has_status(ids::STUN) {
            enemy.vitals_mut().status_effects.decrement(ids::STUN, 1);
            result.stunned = true;
            debug!("{} is stunned and skips its turn", enemy.id());
            return result;
        }

        match plan.intent.kind {
            IntentType::Attack => {
                let effective = Self::effective_damage(enemy, plan.intent.value);
                result.damage = if plan.damage_ratio == 1.0 {
                    effective
                } else {
                    (effective as f64 * plan.damage_ratio).round() as i32
                };
                let dodge = target.dodge_chance();
                if dodge > 0.0 && rng.random_bool(dodge.min(1.0)) {
                    result.dodged = true;
                    debug!("{} dodged {}'s attack", target.id(), enemy.id());
                } else {
                    result.hp_lost = target.take_damage(result.damage);
                }
            }
            IntentType::Defend => {
                enemy.gain_block(plan.intent.value);
                result.block_gained = plan.intent.value;
            }
            IntentType::Buff | IntentType::Debuff => {}
        }

        for effect in &plan.self_effects {
            enemy.apply_status_effect(effect.clone());
        }
        for effect in &plan.target_effects {
            target.apply_status_effect(effect.clone());
        }
        result.self_effects = plan.self_effects;
        result.target_effects = plan.target_effects;

        debug!(
            "{} used {} ({}): {} damage, {} hp lost",
            enemy.id(),
            result.token,
            result.intent.kind,
            result.damage,
            result.hp_lost
        );
        result
    }
}
