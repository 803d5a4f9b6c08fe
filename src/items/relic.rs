//! Relics: permanent items with lifecycle hooks
//!
//! A relic's behaviour is chosen by its id. Its declared timings decide
//! which hooks it takes part in, and its trigger condition gates every
//! hook it does take part in, so both can be tuned from data.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;
use tracing::{debug, warn};

use super::ItemInfo;
use crate::combat::{Card, Combatant, HandScore, HandType, StatusEffect, Suit};
use crate::entities::Player;

/// Maximum number of relics a player may hold
pub const MAX_RELICS: usize = 6;

/// Dodge chance granted by Tikbalang's Hoof
const HOOF_DODGE_CHANCE: f64 = 0.10;
/// Block per distinct suit from the Coral Ward
const CORAL_WARD_BLOCK_PER_SUIT: i32 = 3;

/// When a relic participates in combat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelicTiming {
    OnAcquire,
    StartOfCombat,
    StartOfTurn,
    AfterHandPlayed,
    EndOfTurn,
    /// Adjusts the score of a played hand
    HandEvaluation,
    OnAttack,
    OnDefend,
    OnSpecial,
    /// Always-on effects such as dodge
    Passive,
    #[serde(other)]
    Unknown,
}

/// Gate that must pass before a relic's hook takes effect
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerCondition {
    #[default]
    Always,
    OnThreeOfAKindOrBetter,
    OnStraightOrBetter,
    OnFlush,
    OnFourOfAKindOrBetter,
    OnFiveOfAKind,
    OnStraightFlushOrBetter,
    WhenNoBlock,
    WhenAboveHalfHealth,
    WhenEnemyDebuffed,
    OncePerCombat,
    #[serde(other)]
    Unknown,
}

/// Built-in relic behaviours, keyed by relic id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelicKind {
    EarthwardensPlate,
    SwiftWindAgimat,
    UmalagadSpirit,
    DiwatasCrown,
    StoneGolemHeart,
    EmberFetish,
    AncestralBlade,
    SarimanokFeather,
    LuckyCharm,
    WindVeil,
    TidalAmulet,
    BabaylansTalisman,
    TikbalangsHoof,
    BaleteRoot,
    SigbinHeart,
    DuwendeCharm,
    AmomongoClaw,
    BungisngisGrin,
    KapresCigar,
    MangangawayWand,
    TiyanakTear,
    SirenasScale,
    SiyokoysShell,
    TidalSpiritEssence,
    ElementalCore,
    MerfolkTrident,
    CoralWard,
    BakunawaFang,
    MoonlightPearl,
    DepthDwellersLantern,
    TigmamanukanFeather,
    HeavenlyBreeze,
    CloudSpinnerSilk,
    ApolakisSpear,
    MayarisBow,
    FalseGodsMask,
    /// Relic with no combat behaviour of its own
    Other,
}

impl FromStr for RelicKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "earthwardens_plate" => Ok(RelicKind::EarthwardensPlate),
            "swift_wind_agimat" => Ok(RelicKind::SwiftWindAgimat),
            "umalagad_spirit" => Ok(RelicKind::UmalagadSpirit),
            "diwatas_crown" => Ok(RelicKind::DiwatasCrown),
            "stone_golem_heart" => Ok(RelicKind::StoneGolemHeart),
            "ember_fetish" => Ok(RelicKind::EmberFetish),
            "ancestral_blade" => Ok(RelicKind::AncestralBlade),
            "sarimanok_feather" => Ok(RelicKind::SarimanokFeather),
            "lucky_charm" => Ok(RelicKind::LuckyCharm),
            "wind_veil" => Ok(RelicKind::WindVeil),
            "tidal_amulet" => Ok(RelicKind::TidalAmulet),
            "babaylans_talisman" => Ok(RelicKind::BabaylansTalisman),
            "tikbalangs_hoof" => Ok(RelicKind::TikbalangsHoof),
            "balete_root" => Ok(RelicKind::BaleteRoot),
            "sigbin_heart" => Ok(RelicKind::SigbinHeart),
            "duwende_charm" => Ok(RelicKind::DuwendeCharm),
            "amomongo_claw" => Ok(RelicKind::AmomongoClaw),
            "bungisngis_grin" => Ok(RelicKind::BungisngisGrin),
            "kapres_cigar" => Ok(RelicKind::KapresCigar),
            "mangangaway_wand" => Ok(RelicKind::MangangawayWand),
            "tiyanak_tear" => Ok(RelicKind::TiyanakTear),
            "sirenas_scale" => Ok(RelicKind::SirenasScale),
            "siyokoys_shell" => Ok(RelicKind::SiyokoysShell),
            "tidal_spirit_essence" => Ok(RelicKind::TidalSpiritEssence),
            "elemental_core" => Ok(RelicKind::ElementalCore),
            "merfolk_trident" => Ok(RelicKind::MerfolkTrident),
            "coral_ward" => Ok(RelicKind::CoralWard),
            "bakunawa_fang" => Ok(RelicKind::BakunawaFang),
            "moonlight_pearl" => Ok(RelicKind::MoonlightPearl),
            "depth_dwellers_lantern" => Ok(RelicKind::DepthDwellersLantern),
            "tigmamanukan_feather" => Ok(RelicKind::TigmamanukanFeather),
            "heavenly_breeze" => Ok(RelicKind::HeavenlyBreeze),
            "cloud_spinner_silk" => Ok(RelicKind::CloudSpinnerSilk),
            "apolakis_spear" => Ok(RelicKind::ApolakisSpear),
            "mayaris_bow" => Ok(RelicKind::MayarisBow),
            "false_gods_mask" => Ok(RelicKind::FalseGodsMask),
            _ => Err(()),
        }
    }
}

/// Immutable relic definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelicConfig {
    pub id: String,
    pub name: String,
    pub description: String,
    pub glyph: String,
    #[serde(default)]
    pub lore: String,
    #[serde(default)]
    pub sprite_key: Option<String>,
    #[serde(default)]
    pub effect_types: Vec<RelicTiming>,
    #[serde(default)]
    pub trigger_condition: TriggerCondition,
}

/// An outgoing attack or special, as relic modifiers see it
#[derive(Debug, Clone, Copy)]
pub struct StrikeContext<'a> {
    pub cards: &'a [Card],
    /// The strike comes from the special action
    pub special: bool,
    pub enemy_debuffed: bool,
    /// Relics the attacker holds, this one included
    pub relics_held: usize,
}

impl<'a> StrikeContext<'a> {
    pub fn attack(cards: &'a [Card]) -> Self {
        Self {
            cards,
            special: false,
            enemy_debuffed: false,
            relics_held: 1,
        }
    }

    pub fn special(cards: &'a [Card]) -> Self {
        Self {
            special: true,
            ..Self::attack(cards)
        }
    }
}

/// Conditions a trigger gate is evaluated against
#[derive(Debug, Clone, Copy, Default)]
struct TriggerContext {
    owner_block: i32,
    owner_above_half: bool,
    hand_type: Option<HandType>,
    enemy_debuffed: bool,
}

fn count_suit(cards: &[Card], suit: Suit) -> i32 {
    cards.iter().filter(|c| c.suit == suit).count() as i32
}

fn distinct_suits(cards: &[Card]) -> usize {
    cards.iter().map(|c| c.suit).collect::<HashSet<_>>().len()
}

/// A relic held by the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relic {
    #[serde(flatten)]
    pub info: ItemInfo,
    pub effect_types: Vec<RelicTiming>,
    pub trigger_condition: TriggerCondition,
    #[serde(default)]
    used_this_combat: bool,
}

impl Relic {
    /// Build a fresh relic from its definition
    pub fn from_config(config: &RelicConfig) -> Self {
        Self {
            info: ItemInfo::new(
                &config.id,
                &config.name,
                &config.description,
                &config.glyph,
                &config.lore,
                config.sprite_key.as_deref(),
                "relic",
            ),
            effect_types: config.effect_types.clone(),
            trigger_condition: config.trigger_condition,
            used_this_combat: false,
        }
    }

    /// Fresh copy rebuilt from this relic's own fields, with its gate reset
    pub fn fresh_copy(&self) -> Self {
        Self {
            info: self.info.clone(),
            effect_types: self.effect_types.clone(),
            trigger_condition: self.trigger_condition,
            used_this_combat: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.info.id
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Behaviour selected by id
    pub fn kind(&self) -> RelicKind {
        self.info.id.parse().unwrap_or(RelicKind::Other)
    }

    /// Whether the relic declares a timing
    pub fn has_timing(&self, timing: RelicTiming) -> bool {
        self.effect_types.contains(&timing)
    }

    /// Whether the once-per-combat gate has been spent
    pub fn used_this_combat(&self) -> bool {
        self.used_this_combat
    }

    /// Spend the once-per-combat gate. Returns false if already spent.
    pub fn try_once_per_combat(&mut self) -> bool {
        if self.used_this_combat {
            return false;
        }
        self.used_this_combat = true;
        true
    }

    fn gate(&mut self, ctx: TriggerContext) -> bool {
        let hand_at_least = |floor: HandType| ctx.hand_type.is_some_and(|h| h.at_least(floor));
        match self.trigger_condition {
            TriggerCondition::Always => true,
            TriggerCondition::OnThreeOfAKindOrBetter => hand_at_least(HandType::ThreeOfAKind),
            TriggerCondition::OnStraightOrBetter => hand_at_least(HandType::Straight),
            TriggerCondition::OnFlush => hand_at_least(HandType::Flush),
            TriggerCondition::OnFourOfAKindOrBetter => hand_at_least(HandType::FourOfAKind),
            TriggerCondition::OnFiveOfAKind => ctx.hand_type == Some(HandType::FiveOfAKind),
            TriggerCondition::OnStraightFlushOrBetter => hand_at_least(HandType::StraightFlush),
            TriggerCondition::WhenNoBlock => ctx.owner_block == 0,
            TriggerCondition::WhenAboveHalfHealth => ctx.owner_above_half,
            TriggerCondition::WhenEnemyDebuffed => ctx.enemy_debuffed,
            TriggerCondition::OncePerCombat => self.try_once_per_combat(),
            TriggerCondition::Unknown => {
                warn!("Relic {} has an unknown trigger condition", self.info.id);
                false
            }
        }
    }

    /// The relic takes part at this timing and its gate passes
    fn ready(&mut self, timing: RelicTiming, ctx: TriggerContext) -> bool {
        self.has_timing(timing) && self.gate(ctx)
    }

    fn owner_context(owner: &Player) -> TriggerContext {
        TriggerContext {
            owner_block: owner.block(),
            owner_above_half: owner.current_health() * 2 > owner.max_health(),
            ..Default::default()
        }
    }

    /// Fires once when the relic joins the owner's inventory
    pub fn on_acquire(&mut self, owner: &mut Player) {
        if !self.ready(RelicTiming::OnAcquire, Self::owner_context(owner)) {
            return;
        }
        if self.kind() == RelicKind::StoneGolemHeart {
            owner.vitals_mut().increase_max_health(8);
            debug!("{} raised max health to {}", self.info.id, owner.max_health());
        }
    }

    /// Fires at the start of every encounter; resets the once-per-combat gate
    pub fn on_combat_start(&mut self, owner: &mut Player) {
        self.used_this_combat = false;
        if !self.ready(RelicTiming::StartOfCombat, Self::owner_context(owner)) {
            return;
        }
        match self.kind() {
            RelicKind::EarthwardensPlate | RelicKind::DiwatasCrown => owner.gain_block(5),
            RelicKind::StoneGolemHeart => owner.gain_block(2),
            RelicKind::SwiftWindAgimat => owner.discard_charges += 1,
            RelicKind::UmalagadSpirit => owner.apply_status_effect(StatusEffect::dexterity(1)),
            _ => return,
        }
        debug!("Relic {} triggered at combat start", self.info.id);
    }

    /// Fires at the start of each player turn, before the hand is refilled
    pub fn on_turn_start(&mut self, owner: &mut Player) {
        if !self.ready(RelicTiming::StartOfTurn, Self::owner_context(owner)) {
            return;
        }
        match self.kind() {
            RelicKind::EarthwardensPlate => owner.gain_block(1),
            RelicKind::EmberFetish | RelicKind::TiyanakTear => {
                owner.apply_status_effect(StatusEffect::strength(1))
            }
            RelicKind::MoonlightPearl => owner.bonus_draws += 1,
            RelicKind::DepthDwellersLantern => owner.bonus_draws += 2,
            _ => return,
        }
        debug!("Relic {} triggered at turn start", self.info.id);
    }

    /// Fires at the end of each player turn
    pub fn on_turn_end(&mut self, owner: &mut Player) {
        if !self.ready(RelicTiming::EndOfTurn, Self::owner_context(owner)) {
            return;
        }
        let healed = match self.kind() {
            RelicKind::TidalAmulet => {
                let held = owner.hand.len() as i32;
                owner.heal(held)
            }
            RelicKind::TidalSpiritEssence => owner.heal(3),
            _ => return,
        };
        debug!("Relic {} healed {}", self.info.id, healed);
    }

    /// Fires after every played hand. Returns damage the relic deals to
    /// the enemy.
    pub fn on_hand_played(&mut self, owner: &mut Player, hand_type: HandType, cards: &[Card]) -> i32 {
        let ctx = TriggerContext {
            hand_type: Some(hand_type),
            ..Self::owner_context(owner)
        };
        if !self.ready(RelicTiming::AfterHandPlayed, ctx) {
            return 0;
        }
        let mut damage = 0;
        match self.kind() {
            RelicKind::AncestralBlade => owner.apply_status_effect(StatusEffect::strength(2)),
            RelicKind::SarimanokFeather | RelicKind::LuckyCharm => owner.currencies.ginto += 1,
            RelicKind::WindVeil => {
                owner.bonus_draws += count_suit(cards, Suit::Hangin) as usize;
            }
            RelicKind::SirenasScale => {
                owner.heal(2 * count_suit(cards, Suit::Tubig));
            }
            RelicKind::SiyokoysShell => owner.gain_block(3 * count_suit(cards, Suit::Apoy)),
            RelicKind::HeavenlyBreeze => {
                if distinct_suits(cards) < 3 {
                    return 0;
                }
                owner.apply_status_effect(StatusEffect::dexterity(1));
            }
            RelicKind::TigmamanukanFeather => owner.bonus_draws += 1,
            RelicKind::CloudSpinnerSilk => owner.gain_block(5),
            RelicKind::FalseGodsMask => {
                owner.gain_block(10);
                owner.bonus_draws += 2;
            }
            RelicKind::MerfolkTrident => damage = 4,
            RelicKind::MayarisBow => damage = 8,
            _ => return 0,
        }
        debug!(
            "Relic {} triggered on {} ({} cards)",
            self.info.id,
            hand_type,
            cards.len()
        );
        damage
    }

    /// Adjust the score of a played hand
    pub fn modify_score(&mut self, score: HandScore) -> HandScore {
        if !self.ready(RelicTiming::HandEvaluation, TriggerContext::default()) {
            return score;
        }
        match self.kind() {
            RelicKind::BabaylansTalisman => score.upgraded(),
            _ => score,
        }
    }

    /// Adjust outgoing attack or special damage
    pub fn modify_attack(&mut self, damage: i32, strike: &StrikeContext) -> i32 {
        let timing = if strike.special {
            RelicTiming::OnSpecial
        } else {
            RelicTiming::OnAttack
        };
        let ctx = TriggerContext {
            enemy_debuffed: strike.enemy_debuffed,
            ..Default::default()
        };
        if !self.ready(timing, ctx) {
            return damage;
        }
        let cards = strike.cards;
        match self.kind() {
            RelicKind::SigbinHeart => damage + 3,
            RelicKind::BungisngisGrin | RelicKind::MangangawayWand => damage + 5,
            RelicKind::KapresCigar => damage.saturating_mul(2),
            RelicKind::ElementalCore
                if count_suit(cards, Suit::Apoy) > 0 && count_suit(cards, Suit::Tubig) > 0 =>
            {
                damage + 3
            }
            RelicKind::ApolakisSpear if distinct_suits(cards) == Suit::all().len() => damage + 5,
            RelicKind::BakunawaFang if strike.relics_held > 1 => damage + 5,
            _ => damage,
        }
    }

    /// Extra block granted by a defend action with these cards
    pub fn defend_bonus(&self, cards: &[Card]) -> i32 {
        if !self.has_timing(RelicTiming::OnDefend) {
            return 0;
        }
        match self.kind() {
            RelicKind::DuwendeCharm => 3,
            RelicKind::BaleteRoot => 2 * count_suit(cards, Suit::Lupa),
            RelicKind::CoralWard => CORAL_WARD_BLOCK_PER_SUIT * distinct_suits(cards) as i32,
            _ => 0,
        }
    }

    /// Status effects applied to the enemy by attack actions
    pub fn attack_effects(&self) -> Vec<StatusEffect> {
        if !self.has_timing(RelicTiming::OnAttack) {
            return Vec::new();
        }
        match self.kind() {
            RelicKind::AmomongoClaw => vec![StatusEffect::vulnerable(1)],
            _ => Vec::new(),
        }
    }

    /// Chance to avoid an enemy attack outright
    pub fn dodge_chance(&self) -> f64 {
        if !self.has_timing(RelicTiming::Passive) {
            return 0.0;
        }
        match self.kind() {
            RelicKind::TikbalangsHoof => HOOF_DODGE_CHANCE,
            _ => 0.0,
        }
    }
}
