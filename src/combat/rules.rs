//! Tunable combat constants

use serde::{Deserialize, Serialize};

/// Constants used when resolving player actions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatRules {
    /// Flat damage added to every attack
    pub base_attack: i32,
    /// Flat block added to every defend
    pub base_defend: i32,
    /// Scale applied to special-action damage
    pub special_multiplier: f64,
    /// Upper bound on damage from a single action
    pub damage_cap: i32,
}

impl Default for CombatRules {
    fn default() -> Self {
        Self {
            base_attack: 0,
            base_defend: 0,
            special_multiplier: 0.6,
            damage_cap: 9999,
        }
    }
}
