//! Potions: single-use items with one catalog effect

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;
use tracing::{debug, warn};

use super::ItemInfo;
use crate::combat::{Combatant, StatusEffect};
use crate::entities::Player;

/// Maximum number of potions a player may hold
pub const MAX_POTIONS: usize = 3;

/// Potion effect keys
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PotionEffect {
    Heal20Hp,
    Draw3Cards,
    Gain15Block,
    Gain1Dexterity,
    Gain2Strength,
    GainRegeneration,
    RemoveDebuffs,
    /// Resolved by the caller: pick the dominant element of the next hand
    ChooseElement,
    /// Resolved by the caller: temporary max HP until combat ends
    GainTempMaxHp,
    /// Resolved by the caller: shuffle random cards into the draw pile
    AddRandomCards,
    Unknown(String),
}

impl PotionEffect {
    pub fn as_str(&self) -> &str {
        match self {
            PotionEffect::Heal20Hp => "heal_20_hp",
            PotionEffect::Draw3Cards => "draw_3_cards",
            PotionEffect::Gain15Block => "gain_15_block",
            PotionEffect::Gain1Dexterity => "gain_1_dexterity",
            PotionEffect::Gain2Strength => "gain_2_strength",
            PotionEffect::GainRegeneration => "gain_regeneration",
            PotionEffect::RemoveDebuffs => "remove_debuffs",
            PotionEffect::ChooseElement => "choose_element",
            PotionEffect::GainTempMaxHp => "gain_temp_max_hp",
            PotionEffect::AddRandomCards => "add_random_cards",
            PotionEffect::Unknown(s) => s,
        }
    }
}

impl FromStr for PotionEffect {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let effect = match s {
            "heal_20_hp" => PotionEffect::Heal20Hp,
            "draw_3_cards" => PotionEffect::Draw3Cards,
            "gain_15_block" => PotionEffect::Gain15Block,
            "gain_1_dexterity" => PotionEffect::Gain1Dexterity,
            "gain_2_strength" => PotionEffect::Gain2Strength,
            "gain_regeneration" => PotionEffect::GainRegeneration,
            "remove_debuffs" => PotionEffect::RemoveDebuffs,
            "choose_element" => PotionEffect::ChooseElement,
            "gain_temp_max_hp" => PotionEffect::GainTempMaxHp,
            "add_random_cards" => PotionEffect::AddRandomCards,
            other => PotionEffect::Unknown(other.to_string()),
        };
        Ok(effect)
    }
}

impl From<String> for PotionEffect {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(effect) => effect,
            Err(never) => match never {},
        }
    }
}

impl From<PotionEffect> for String {
    fn from(effect: PotionEffect) -> Self {
        effect.as_str().to_string()
    }
}

impl std::fmt::Display for PotionEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How rare a potion is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PotionRarity {
    #[default]
    Common,
    Uncommon,
    Rare,
}

/// What drinking a potion did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PotionOutcome {
    /// The effect was applied to the owner
    Applied,
    /// The effect must be carried out by the caller
    Deferred(PotionEffect),
    /// The effect key was not recognised
    Ignored,
}

/// Immutable potion definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotionConfig {
    pub id: String,
    pub name: String,
    pub description: String,
    pub glyph: String,
    #[serde(default)]
    pub lore: String,
    #[serde(default)]
    pub sprite_key: Option<String>,
    pub effect: PotionEffect,
    #[serde(default)]
    pub rarity: PotionRarity,
}

/// A potion held by the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Potion {
    #[serde(flatten)]
    pub info: ItemInfo,
    pub effect: PotionEffect,
    pub rarity: PotionRarity,
}

impl Potion {
    /// Build a fresh potion from its definition
    pub fn from_config(config: &PotionConfig) -> Self {
        Self {
            info: ItemInfo::new(
                &config.id,
                &config.name,
                &config.description,
                &config.glyph,
                &config.lore,
                config.sprite_key.as_deref(),
                "potion",
            ),
            effect: config.effect.clone(),
            rarity: config.rarity,
        }
    }

    pub fn id(&self) -> &str {
        &self.info.id
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Apply this potion's effect to its owner
    pub fn apply(&self, owner: &mut Player) -> PotionOutcome {
        self.apply_with(owner, &mut rand::rng())
    }

    /// Apply this potion's effect, reshuffling with `rng` if it draws
    pub fn apply_with<R: Rng + ?Sized>(&self, owner: &mut Player, rng: &mut R) -> PotionOutcome {
        match &self.effect {
            PotionEffect::Heal20Hp => {
                owner.heal(20);
            }
            PotionEffect::Draw3Cards => {
                owner.draw_cards_with(3, rng);
            }
            PotionEffect::Gain15Block => owner.gain_block(15),
            PotionEffect::Gain1Dexterity => owner.apply_status_effect(StatusEffect::dexterity(1)),
            PotionEffect::Gain2Strength => owner.apply_status_effect(StatusEffect::strength(2)),
            PotionEffect::GainRegeneration => {
                owner.apply_status_effect(StatusEffect::regeneration(2))
            }
            PotionEffect::RemoveDebuffs => {
                owner.vitals_mut().status_effects.clear_debuffs();
            }
            deferred @ (PotionEffect::ChooseElement
            | PotionEffect::GainTempMaxHp
            | PotionEffect::AddRandomCards) => {
                debug!("Potion {} effect {} left to caller", self.info.id, deferred);
                return PotionOutcome::Deferred(deferred.clone());
            }
            PotionEffect::Unknown(key) => {
                warn!("Unknown potion effect '{}' on {}", key, self.info.id);
                return PotionOutcome::Ignored;
            }
        }
        debug!("Potion {} applied {}", self.info.id, self.effect);
        PotionOutcome::Applied
    }
}
