//! Combat system module
//!
//! Implements card-driven combat with:
//! - Stacking status effects and turn-start ticks
//! - Elemental weakness and resistance
//! - Poker-hand scoring behind a trait seam
//! - Enemy intents derived from repeating attack patterns
//! - Player attack, defend and special resolution
//! - An encounter turn loop with an event log

mod action;
mod affinity;
mod ai;
mod combatant;
mod effects;
mod encounter;
mod hand;
mod intent;
mod log;
mod rules;

pub use action::{
    resolve_player_action, special_effect_for, ActionError, ActionOutcome, PlayerActionKind,
};
pub use affinity::{AffinityModifier, Element, ElementalAffinity};
pub use ai::{EnemyActionResult, EnemyAiController};
pub use combatant::{Combatant, TurnStartEffects, Vitals};
pub use effects::{ids, EffectCategory, StatusEffect, StatusEffects};
pub use encounter::{Encounter, TurnReport};
pub use hand::{
    dominant_element, dominant_suit, Card, HandEvaluator, HandScore, HandType, Rank,
    StandardHandEvaluator, Suit,
};
pub use intent::{intent_for, plan_for, ActionToken, Intent, IntentType, MovePlan};
pub use log::{CombatEvent, CombatEventKind, CombatLog, CombatMetrics, Side};
pub use rules::CombatRules;
