//! Scripted autopilot that plays an encounter to completion
//!
//! Used by the `bathala-sim` binary and integration tests. Each turn the
//! pilot may drink a healing potion, may spend one discard on a weak hand,
//! then plays the highest scoring five cards it holds.

use serde::Serialize;
use tracing::{debug, info};

use crate::combat::{
    ActionError, Card, Combatant, CombatLog, CombatMetrics, Encounter, HandScore, HandType,
    IntentType, PlayerActionKind, Side,
};
use crate::entities::{EnemySnapshot, Player, PLAYED_HAND_SIZE};
use crate::items::PotionEffect;

/// Health percentage below which the pilot defends against attacks
const DEFEND_BELOW_PERCENT: i32 = 40;
/// Health percentage below which the pilot drinks a healing potion
const HEAL_BELOW_PERCENT: i32 = 50;
/// Cards thrown away when the pilot discards
const DISCARD_COUNT: usize = 3;

/// Result of a simulated encounter
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    /// None when the turn limit was reached first
    pub winner: Option<Side>,
    pub turns: u32,
    pub metrics: CombatMetrics,
    pub player: Player,
    pub enemy: EnemySnapshot,
    pub log: CombatLog,
}

/// Best five-card selection from a hand
#[derive(Debug, Clone, PartialEq)]
pub struct HandChoice {
    pub card_ids: Vec<String>,
    pub score: HandScore,
}

/// Highest scoring five cards, or None with fewer than five in hand
pub fn best_hand(encounter: &Encounter, hand: &[Card]) -> Option<HandChoice> {
    if hand.len() < PLAYED_HAND_SIZE {
        return None;
    }
    let mut best: Option<HandChoice> = None;
    for indices in combinations(hand.len(), PLAYED_HAND_SIZE) {
        let cards: Vec<Card> = indices.iter().map(|&i| hand[i].clone()).collect();
        let score = encounter.evaluator().evaluate(&cards);
        let better = match &best {
            None => true,
            Some(current) => {
                (score.total_value, score.hand_type)
                    > (current.score.total_value, current.score.hand_type)
            }
        };
        if better {
            best = Some(HandChoice {
                card_ids: cards.into_iter().map(|c| c.id).collect(),
                score,
            });
        }
    }
    best
}

/// Every ascending `k`-subset of `0..n`
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    if k > n {
        return out;
    }
    let mut indices: Vec<usize> = (0..k).collect();
    loop {
        out.push(indices.clone());
        let Some(pos) = (0..k).rev().find(|&i| indices[i] != i + n - k) else {
            return out;
        };
        indices[pos] += 1;
        for j in pos + 1..k {
            indices[j] = indices[j - 1] + 1;
        }
    }
}

/// Pick the action for a chosen hand
pub fn choose_action(encounter: &Encounter, choice: &HandChoice) -> PlayerActionKind {
    let player = encounter.player();
    if !player.special_used && choice.score.hand_type.at_least(HandType::Flush) {
        return PlayerActionKind::Special;
    }
    let intent = encounter.enemy().intent();
    let threatened = intent.kind == IntentType::Attack
        && (player.health_percent() < DEFEND_BELOW_PERCENT
            || intent.value >= player.current_health() + player.block());
    if threatened {
        PlayerActionKind::Defend
    } else {
        PlayerActionKind::Attack
    }
}

fn drink_healing_potion(encounter: &mut Encounter) -> Result<(), ActionError> {
    if encounter.player().health_percent() >= HEAL_BELOW_PERCENT {
        return Ok(());
    }
    let potion_id = encounter
        .player()
        .potions()
        .iter()
        .find(|p| p.effect == PotionEffect::Heal20Hp)
        .map(|p| p.id().to_string());
    if let Some(id) = potion_id {
        debug!("Autopilot drinks {}", id);
        encounter.use_potion(&id)?;
    }
    Ok(())
}

/// Lowest ranked cards outside the chosen hand
fn discard_candidates(hand: &[Card], keep: &HandChoice) -> Vec<String> {
    let mut spare: Vec<&Card> = hand
        .iter()
        .filter(|c| !keep.card_ids.contains(&c.id))
        .collect();
    if spare.len() < DISCARD_COUNT {
        spare = hand.iter().collect();
    }
    spare.sort_by_key(|c| c.rank.value());
    spare
        .into_iter()
        .take(DISCARD_COUNT)
        .map(|c| c.id.clone())
        .collect()
}

/// Play one full player turn
pub fn play_turn(encounter: &mut Encounter) -> Result<(), ActionError> {
    drink_healing_potion(encounter)?;

    let hand = encounter.player().hand.clone();
    let Some(mut choice) = best_hand(encounter, &hand) else {
        return Err(ActionError::WrongCardCount {
            expected: PLAYED_HAND_SIZE,
            got: hand.len(),
        });
    };

    if choice.score.hand_type == HandType::HighCard && encounter.player().discard_charges > 0 {
        let ids = discard_candidates(&hand, &choice);
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        encounter.discard(&refs)?;
        let hand = encounter.player().hand.clone();
        if let Some(redrawn) = best_hand(encounter, &hand) {
            choice = redrawn;
        }
    }

    let kind = choose_action(encounter, &choice);
    let refs: Vec<&str> = choice.card_ids.iter().map(String::as_str).collect();
    let report = encounter.play_hand(&refs, kind)?;
    if report.action.was_refused() {
        encounter.play_hand(&refs, PlayerActionKind::Attack)?;
    }
    Ok(())
}

/// Run an encounter until someone wins or `max_turns` player turns pass
pub fn simulate(mut encounter: Encounter, max_turns: u32) -> Result<SimulationReport, ActionError> {
    if encounter.turn() == 0 {
        encounter.start();
    }
    while !encounter.is_over() && encounter.turn() <= max_turns {
        play_turn(&mut encounter)?;
    }

    let winner = encounter.winner();
    let turns = encounter.turn();
    let metrics = encounter.metrics();
    match winner {
        Some(side) => info!("Simulation finished after {} turns: {} wins", turns, side),
        None => info!("Simulation stopped at the {} turn limit", max_turns),
    }
    let (player, enemy, log) = encounter.into_parts();
    Ok(SimulationReport {
        winner,
        turns,
        metrics,
        player,
        enemy: enemy.to_snapshot(),
        log,
    })
}
