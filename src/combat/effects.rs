//! Status effects system
//!
//! Status effects are stacked values keyed by id:
//! - Applying an id that is already present adds to its value
//! - Effects never expire on their own; removal is explicit
//! - A small built-in catalog describes the well-known effects

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Well-known status effect ids
pub mod ids {
    pub const POISON: &str = "poison";
    pub const WEAK: &str = "weak";
    pub const PLATED_ARMOR: &str = "plated_armor";
    pub const REGENERATION: &str = "regeneration";
    pub const STRENGTH: &str = "strength";
    pub const VULNERABLE: &str = "vulnerable";
    pub const FRAIL: &str = "frail";
    pub const RITUAL: &str = "ritual";
    pub const DEXTERITY: &str = "dexterity";
    pub const STUN: &str = "stun";
}

/// Whether an effect helps or hinders its holder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectCategory {
    Buff,
    Debuff,
}

impl FromStr for EffectCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "buff" => Ok(EffectCategory::Buff),
            "debuff" => Ok(EffectCategory::Debuff),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for EffectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EffectCategory::Buff => "buff",
            EffectCategory::Debuff => "debuff",
        };
        write!(f, "{}", s)
    }
}

/// A status effect instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    /// Stable identity; stacking is keyed on this
    pub id: String,
    /// Display name
    pub name: String,
    /// Buff or debuff
    pub category: EffectCategory,
    /// Stacked magnitude
    pub value: i32,
    /// Tooltip text
    pub description: String,
    /// Display glyph
    pub glyph: String,
}

/// Catalog entry for a well-known effect
struct EffectDefinition {
    id: &'static str,
    name: &'static str,
    category: EffectCategory,
    description: &'static str,
    glyph: &'static str,
}

const CATALOG: &[EffectDefinition] = &[
    EffectDefinition {
        id: ids::POISON,
        name: "Burn",
        category: EffectCategory::Debuff,
        description: "Takes 2 damage per stack at the start of its turn, then loses 1 stack.",
        glyph: "🔥",
    },
    EffectDefinition {
        id: ids::WEAK,
        name: "Weak",
        category: EffectCategory::Debuff,
        description: "Deals 25% less damage per stack (max 3 stacks).",
        glyph: "⚠️",
    },
    EffectDefinition {
        id: ids::PLATED_ARMOR,
        name: "Plated Armor",
        category: EffectCategory::Buff,
        description: "Gains 3 block per stack at the start of its turn.",
        glyph: "🛡️",
    },
    EffectDefinition {
        id: ids::REGENERATION,
        name: "Regeneration",
        category: EffectCategory::Buff,
        description: "Heals 2 HP per stack at the start of its turn, then loses 1 stack.",
        glyph: "💚",
    },
    EffectDefinition {
        id: ids::STRENGTH,
        name: "Strength",
        category: EffectCategory::Buff,
        description: "Deals 3 additional damage per stack.",
        glyph: "💪",
    },
    EffectDefinition {
        id: ids::VULNERABLE,
        name: "Vulnerable",
        category: EffectCategory::Debuff,
        description: "Takes 50% more damage from attacks.",
        glyph: "🎯",
    },
    EffectDefinition {
        id: ids::FRAIL,
        name: "Frail",
        category: EffectCategory::Debuff,
        description: "Gains 25% less block from actions.",
        glyph: "🦴",
    },
    EffectDefinition {
        id: ids::RITUAL,
        name: "Ritual",
        category: EffectCategory::Buff,
        description: "Gains 1 Strength per stack at the start of its turn.",
        glyph: "🕯️",
    },
    EffectDefinition {
        id: ids::DEXTERITY,
        name: "Dexterity",
        category: EffectCategory::Buff,
        description: "Gains 3 additional block per stack.",
        glyph: "🤸",
    },
    EffectDefinition {
        id: ids::STUN,
        name: "Stun",
        category: EffectCategory::Debuff,
        description: "Skips its next action.",
        glyph: "💫",
    },
];

impl StatusEffect {
    /// Create an effect with explicit fields
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: EffectCategory,
        value: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            value,
            description: String::new(),
            glyph: String::new(),
        }
    }

    /// Build a well-known effect from the catalog. Returns None for unknown ids.
    pub fn from_catalog(id: &str, value: i32) -> Option<Self> {
        CATALOG.iter().find(|d| d.id == id).map(|d| Self {
            id: d.id.to_string(),
            name: d.name.to_string(),
            category: d.category,
            value,
            description: d.description.to_string(),
            glyph: d.glyph.to_string(),
        })
    }

    /// Catalog lookup for ids this crate defines itself
    fn known(id: &'static str, value: i32) -> Self {
        Self::from_catalog(id, value)
            .unwrap_or_else(|| Self::new(id, id, EffectCategory::Debuff, value))
    }

    pub fn poison(value: i32) -> Self {
        Self::known(ids::POISON, value)
    }

    pub fn weak(value: i32) -> Self {
        Self::known(ids::WEAK, value)
    }

    pub fn plated_armor(value: i32) -> Self {
        Self::known(ids::PLATED_ARMOR, value)
    }

    pub fn regeneration(value: i32) -> Self {
        Self::known(ids::REGENERATION, value)
    }

    pub fn strength(value: i32) -> Self {
        Self::known(ids::STRENGTH, value)
    }

    pub fn vulnerable(value: i32) -> Self {
        Self::known(ids::VULNERABLE, value)
    }

    pub fn frail(value: i32) -> Self {
        Self::known(ids::FRAIL, value)
    }

    pub fn ritual(value: i32) -> Self {
        Self::known(ids::RITUAL, value)
    }

    pub fn dexterity(value: i32) -> Self {
        Self::known(ids::DEXTERITY, value)
    }

    pub fn stun(value: i32) -> Self {
        Self::known(ids::STUN, value)
    }

    /// Whether this effect is negative (a debuff)
    pub fn is_debuff(&self) -> bool {
        self.category == EffectCategory::Debuff
    }
}

/// Effects held by a single combatant, in application order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusEffects {
    effects: Vec<StatusEffect>,
}

impl StatusEffects {
    /// Create new empty effects
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an effect, adding its value to an existing entry with the same id
    pub fn apply(&mut self, effect: StatusEffect) {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.id == effect.id) {
            existing.value += effect.value;
        } else {
            self.effects.push(effect);
        }
    }

    /// Remove an effect by id, returning it if present
    pub fn remove(&mut self, id: &str) -> Option<StatusEffect> {
        let index = self.effects.iter().position(|e| e.id == id)?;
        Some(self.effects.remove(index))
    }

    /// Check if an effect is present with a positive value
    pub fn has(&self, id: &str) -> bool {
        self.value(id) > 0
    }

    /// Get an effect if present
    pub fn get(&self, id: &str) -> Option<&StatusEffect> {
        self.effects.iter().find(|e| e.id == id)
    }

    /// Stacked value of an effect, 0 when absent
    pub fn value(&self, id: &str) -> i32 {
        self.get(id).map_or(0, |e| e.value)
    }

    /// Lower an effect's value, removing the entry when it reaches zero.
    /// Returns the remaining value.
    pub fn decrement(&mut self, id: &str, amount: i32) -> i32 {
        let Some(effect) = self.effects.iter_mut().find(|e| e.id == id) else {
            return 0;
        };
        effect.value -= amount;
        let remaining = effect.value;
        if remaining <= 0 {
            self.effects.retain(|e| e.id != id);
            return 0;
        }
        remaining
    }

    /// Whether any debuff is active
    pub fn has_debuff(&self) -> bool {
        self.effects.iter().any(|e| e.is_debuff() && e.value > 0)
    }

    /// All effects
    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    /// Number of distinct effects
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Clear all effects
    pub fn clear(&mut self) {
        self.effects.clear();
    }

    /// Clear only debuffs, returning how many were removed
    pub fn clear_debuffs(&mut self) -> usize {
        let before = self.effects.len();
        self.effects.retain(|e| !e.is_debuff());
        before - self.effects.len()
    }

    /// Detached copy of every effect
    pub fn to_vec(&self) -> Vec<StatusEffect> {
        self.effects.clone()
    }
}

impl From<Vec<StatusEffect>> for StatusEffects {
    fn from(effects: Vec<StatusEffect>) -> Self {
        let mut collected = Self::new();
        for effect in effects {
            collected.apply(effect);
        }
        collected
    }
}
