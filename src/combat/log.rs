//! Combat event log and end-of-combat metrics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::action::{ActionOutcome, PlayerActionKind};
use super::ai::EnemyActionResult;
use super::combatant::TurnStartEffects;
use super::hand::HandType;

/// Which side won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Enemy,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Side::Player => "player",
            Side::Enemy => "enemy",
        };
        write!(f, "{}", s)
    }
}

/// Something that happened during combat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CombatEventKind {
    CombatStarted { player: String, enemy: String },
    TurnStarted,
    StatusTick { side: Side, effects: TurnStartEffects },
    Discarded { count: usize },
    PotionUsed { potion: String },
    PlayerAction { outcome: ActionOutcome },
    EnemyAction { result: EnemyActionResult },
    HalfHealth { enemy: String },
    CombatEnded { winner: Side },
}

/// A logged event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatEvent {
    pub seq: usize,
    pub turn: u32,
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: CombatEventKind,
}

/// Totals for a finished (or abandoned) combat
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatMetrics {
    pub turns: u32,
    pub damage_dealt: i32,
    pub damage_taken: i32,
    pub best_hand: Option<HandType>,
    pub discards_used: u32,
    pub attacks: u32,
    pub defends: u32,
    pub specials: u32,
    pub potions_used: u32,
    pub winner: Option<Side>,
}

/// Ordered record of an encounter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatLog {
    pub started_at: DateTime<Utc>,
    events: Vec<CombatEvent>,
}

impl Default for CombatLog {
    fn default() -> Self {
        Self::new()
    }
}

impl CombatLog {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            events: Vec::new(),
        }
    }

    /// Append an event stamped with the current time
    pub fn record(&mut self, turn: u32, kind: CombatEventKind) {
        self.events.push(CombatEvent {
            seq: self.events.len(),
            turn,
            at: Utc::now(),
            kind,
        });
    }

    pub fn events(&self) -> &[CombatEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Fold the event stream into totals
    pub fn metrics(&self) -> CombatMetrics {
        let mut metrics = CombatMetrics::default();
        for event in &self.events {
            metrics.turns = metrics.turns.max(event.turn);
            match &event.kind {
                CombatEventKind::PlayerAction { outcome } if !outcome.was_refused() => {
                    metrics.damage_dealt += outcome.hp_lost;
                    metrics.best_hand = metrics.best_hand.max(Some(outcome.hand_type));
                    match outcome.kind {
                        PlayerActionKind::Attack => metrics.attacks += 1,
                        PlayerActionKind::Defend => metrics.defends += 1,
                        PlayerActionKind::Special => metrics.specials += 1,
                    }
                }
                CombatEventKind::EnemyAction { result } => metrics.damage_taken += result.hp_lost,
                CombatEventKind::StatusTick { side, effects } => match side {
                    Side::Player => metrics.damage_taken += effects.poison_damage,
                    Side::Enemy => metrics.damage_dealt += effects.poison_damage,
                },
                CombatEventKind::Discarded { .. } => metrics.discards_used += 1,
                CombatEventKind::PotionUsed { .. } => metrics.potions_used += 1,
                CombatEventKind::CombatEnded { winner } => metrics.winner = Some(*winner),
                _ => {}
            }
        }
        metrics
    }
}
