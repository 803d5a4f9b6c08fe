//! Items carried by the player
//!
//! Two kinds of item share a common description block:
//! - Relics: permanent, hooked into the player's lifecycle
//! - Potions: single-use, one catalog effect, consumed on use

mod potion;
mod relic;

use serde::{Deserialize, Serialize};

pub use potion::{
    Potion, PotionConfig, PotionEffect, PotionOutcome, PotionRarity, MAX_POTIONS,
};
pub use relic::{
    Relic, RelicConfig, RelicKind, RelicTiming, StrikeContext, TriggerCondition, MAX_RELICS,
};

/// Descriptive fields shared by every item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemInfo {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Rules text
    pub description: String,
    /// Display glyph
    pub glyph: String,
    /// Flavor text
    #[serde(default)]
    pub lore: String,
    /// Asset key for the item's sprite
    pub sprite_key: String,
}

impl ItemInfo {
    /// Build item info, deriving the sprite key from a prefix when none is given
    pub fn new(
        id: &str,
        name: &str,
        description: &str,
        glyph: &str,
        lore: &str,
        sprite_key: Option<&str>,
        sprite_prefix: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            glyph: glyph.to_string(),
            lore: lore.to_string(),
            sprite_key: sprite_key
                .map(str::to_string)
                .unwrap_or_else(|| format!("{}_{}", sprite_prefix, id)),
        }
    }
}
