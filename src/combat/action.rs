//! Player action resolution
//!
//! Every action consumes exactly five played cards and their hand score.
//! Attack damage runs through a fixed pipeline:
//! - base attack + hand value + strength x3
//! - relic attack or special modifiers
//! - weak: -25% per stack, at most 3 stacks
//! - elemental affinity of the dominant element
//! - vulnerable target: x1.5
//! - damage cap
//!
//! Every multiplier rounds down.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use super::affinity::{AffinityModifier, Element};
use super::ai::STRENGTH_DAMAGE_PER_STACK;
use super::combatant::Combatant;
use super::effects::{ids, StatusEffect};
use super::hand::{dominant_element, dominant_suit, Card, HandScore, HandType, Suit};
use super::rules::CombatRules;
use crate::entities::{Enemy, Player, PLAYED_HAND_SIZE};
use crate::items::StrikeContext;

/// Block per point of dexterity
pub const DEXTERITY_BLOCK_PER_STACK: i32 = 3;
/// Fraction of damage removed per weak stack
pub const WEAK_REDUCTION_PER_STACK: f64 = 0.25;
/// Weak stacks that count towards damage reduction
pub const WEAK_STACK_CAP: i32 = 3;
/// Block multiplier while frail
pub const FRAIL_MULTIPLIER: f64 = 0.75;
/// Damage multiplier against a vulnerable target
pub const VULNERABLE_MULTIPLIER: f64 = 1.5;

/// Errors from attempting a player action
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("an action needs exactly {expected} cards, got {got}")]
    WrongCardCount { expected: usize, got: usize },

    #[error("card not in hand: {0}")]
    CardNotInHand(String),

    #[error("the encounter is already over")]
    EncounterOver,
}

/// The three actions a played hand can power
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerActionKind {
    Attack,
    Defend,
    Special,
}

impl FromStr for PlayerActionKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "attack" | "atk" => Ok(PlayerActionKind::Attack),
            "defend" | "def" | "block" => Ok(PlayerActionKind::Defend),
            "special" | "spc" => Ok(PlayerActionKind::Special),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for PlayerActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PlayerActionKind::Attack => "attack",
            PlayerActionKind::Defend => "defend",
            PlayerActionKind::Special => "special",
        };
        write!(f, "{}", s)
    }
}

/// What a player action did
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub kind: PlayerActionKind,
    pub hand_type: HandType,
    pub hand_value: i32,
    /// Damage sent at the enemy before block
    pub damage: i32,
    /// HP the enemy actually lost
    pub hp_lost: i32,
    pub block_gained: i32,
    pub element: Option<Element>,
    pub affinity: AffinityModifier,
    /// Effects applied to the enemy
    pub enemy_effects: Vec<StatusEffect>,
    /// Damage relics dealt after the hand resolved, included in `hp_lost`
    #[serde(default)]
    pub relic_damage: i32,
    /// Set when the action was refused; nothing else happened
    pub refused: Option<String>,
}

impl ActionOutcome {
    fn new(kind: PlayerActionKind, score: HandScore) -> Self {
        Self {
            kind,
            hand_type: score.hand_type,
            hand_value: score.total_value,
            damage: 0,
            hp_lost: 0,
            block_gained: 0,
            element: None,
            affinity: AffinityModifier::Normal,
            enemy_effects: Vec::new(),
            relic_damage: 0,
            refused: None,
        }
    }

    pub fn was_refused(&self) -> bool {
        self.refused.is_some()
    }
}

/// Status the special action applies for the dominant suit
pub fn special_effect_for(suit: Suit) -> StatusEffect {
    match suit {
        Suit::Apoy => StatusEffect::poison(3),
        Suit::Tubig => StatusEffect::frail(2),
        Suit::Lupa => StatusEffect::vulnerable(1),
        Suit::Hangin => StatusEffect::weak(2),
    }
}

/// Resolve one player action against the enemy
pub fn resolve_player_action(
    player: &mut Player,
    enemy: &mut Enemy,
    kind: PlayerActionKind,
    score: HandScore,
    cards: &[Card],
    rules: &CombatRules,
) -> Result<ActionOutcome, ActionError> {
    if cards.len() != PLAYED_HAND_SIZE {
        return Err(ActionError::WrongCardCount {
            expected: PLAYED_HAND_SIZE,
            got: cards.len(),
        });
    }

    let mut outcome = ActionOutcome::new(kind, score);

    match kind {
        PlayerActionKind::Attack => {
            let base = rules.base_attack + score.total_value + strength_bonus(player);
            strike(player, enemy, base, cards, false, rules, &mut outcome);
        }
        PlayerActionKind::Special => {
            if !score.hand_type.at_least(HandType::Flush) {
                outcome.refused = Some(format!(
                    "special needs a flush or better, got {}",
                    score.hand_type
                ));
                debug!("Refused special: {}", score.hand_type);
                return Ok(outcome);
            }
            if player.special_used {
                outcome.refused = Some("special already used this combat".to_string());
                debug!("Refused special: already used");
                return Ok(outcome);
            }
            player.special_used = true;

            let base = rules.base_attack + score.total_value + strength_bonus(player);
            let scaled = (base as f64 * rules.special_multiplier).floor() as i32;
            strike(player, enemy, scaled, cards, true, rules, &mut outcome);

            if let Some(suit) = dominant_suit(cards) {
                let effect = special_effect_for(suit);
                enemy.apply_status_effect(effect.clone());
                outcome.enemy_effects.push(effect);
            }
        }
        PlayerActionKind::Defend => {
            let mut block = rules.base_defend
                + score.total_value
                + player.status_value(ids::DEXTERITY) * DEXTERITY_BLOCK_PER_STACK
                + player.relic_defend_bonus(cards);
            if player.has_status(ids::FRAIL) {
                block = (block as f64 * FRAIL_MULTIPLIER).floor() as i32;
            }
            let block = block.max(0);
            player.gain_block(block);
            outcome.block_gained = block;
        }
    }

    let relic_damage = player.notify_hand_played(score.hand_type, cards);
    if relic_damage > 0 && !enemy.is_dead() {
        outcome.relic_damage = relic_damage;
        outcome.hp_lost += enemy.take_damage(relic_damage);
    }
    debug!(
        "{} {} with {}: {} damage, {} block",
        player.id(),
        kind,
        score.hand_type,
        outcome.damage,
        outcome.block_gained
    );
    Ok(outcome)
}

fn strength_bonus(player: &Player) -> i32 {
    player.status_value(ids::STRENGTH) * STRENGTH_DAMAGE_PER_STACK
}

/// Run base damage through the attack pipeline and hit the enemy
fn strike(
    player: &mut Player,
    enemy: &mut Enemy,
    base: i32,
    cards: &[Card],
    special: bool,
    rules: &CombatRules,
    outcome: &mut ActionOutcome,
) {
    let mut strike = if special {
        StrikeContext::special(cards)
    } else {
        StrikeContext::attack(cards)
    };
    strike.enemy_debuffed = enemy.status_effects().has_debuff();
    let mut damage = player.modify_attack(base, strike);

    let weak = player.status_value(ids::WEAK).clamp(0, WEAK_STACK_CAP);
    if weak > 0 {
        let factor = 1.0 - WEAK_REDUCTION_PER_STACK * weak as f64;
        damage = (damage as f64 * factor).floor() as i32;
    }

    let element = dominant_element(cards);
    let affinity = enemy.elemental_affinity.modifier_for(element);
    damage = affinity.apply(damage);

    if enemy.has_status(ids::VULNERABLE) {
        damage = (damage as f64 * VULNERABLE_MULTIPLIER).floor() as i32;
    }

    let damage = damage.clamp(0, rules.damage_cap);
    outcome.damage = damage;
    outcome.hp_lost = enemy.take_damage(damage);
    outcome.element = element;
    outcome.affinity = affinity;

    if special {
        return;
    }
    for effect in player.relic_attack_effects() {
        enemy.apply_status_effect(effect.clone());
        outcome.enemy_effects.push(effect);
    }
}
