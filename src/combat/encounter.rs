//! Turn loop for a single player versus a single enemy
//!
//! Turn order:
//! - player turn start: hooks, status ticks, hand refill
//! - player discards and potions, then one played hand
//! - player turn end: hooks, played cards to discard
//! - enemy turn start: block reset, status ticks
//! - enemy move, then cursor advance
//!
//! The encounter ends as soon as either side reaches 0 HP.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use tracing::{debug, info};

use super::action::{resolve_player_action, ActionError, ActionOutcome, PlayerActionKind};
use super::ai::{EnemyActionResult, EnemyAiController};
use super::combatant::{Combatant, TurnStartEffects};
use super::hand::{Card, HandEvaluator, StandardHandEvaluator};
use super::log::{CombatEventKind, CombatLog, CombatMetrics, Side};
use super::rules::CombatRules;
use crate::entities::{Enemy, Player, PLAYED_HAND_SIZE};
use crate::items::{PotionEffect, PotionOutcome};

/// Max HP granted until the end of combat by a temporary max HP potion
pub const TEMP_MAX_HEALTH: i32 = 10;
/// Cards added to hand by a random-cards potion
pub const RANDOM_CARDS_ADDED: usize = 3;

/// What happened after the player's hand resolved
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    pub action: ActionOutcome,
    /// None when the enemy died before acting or the action was refused
    pub enemy: Option<EnemyActionResult>,
    pub winner: Option<Side>,
}

/// One combat between a player and an enemy
pub struct Encounter {
    player: Player,
    enemy: Enemy,
    rules: CombatRules,
    evaluator: Box<dyn HandEvaluator>,
    ai: EnemyAiController,
    rng: StdRng,
    log: CombatLog,
    turn: u32,
    winner: Option<Side>,
    temp_max_health: i32,
    /// Cards created by potions so far, used to keep their ids unique
    generated_cards: usize,
}

impl Encounter {
    /// Set up an encounter. A missing seed draws one from the thread RNG.
    pub fn new(player: Player, enemy: Enemy, rules: CombatRules, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            player,
            enemy,
            rules,
            evaluator: Box::new(StandardHandEvaluator),
            ai: EnemyAiController::new(),
            rng: StdRng::seed_from_u64(seed),
            log: CombatLog::new(),
            turn: 0,
            winner: None,
            temp_max_health: 0,
            generated_cards: 0,
        }
    }

    /// Replace the hand scorer
    pub fn with_evaluator(mut self, evaluator: Box<dyn HandEvaluator>) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn rules(&self) -> &CombatRules {
        &self.rules
    }

    pub fn log(&self) -> &CombatLog {
        &self.log
    }

    pub fn metrics(&self) -> CombatMetrics {
        self.log.metrics()
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Score the cards with this encounter's evaluator
    pub fn evaluator(&self) -> &dyn HandEvaluator {
        self.evaluator.as_ref()
    }

    /// Hand back the combatants
    pub fn into_parts(self) -> (Player, Enemy, CombatLog) {
        (self.player, self.enemy, self.log)
    }

    /// Fire combat-start hooks, shuffle the deck and begin the first turn
    pub fn start(&mut self) {
        self.player.on_combat_start();
        self.enemy.on_combat_start();
        self.player.start_combat_deck(&mut self.rng);
        self.log.record(
            0,
            CombatEventKind::CombatStarted {
                player: self.player.id().to_string(),
                enemy: self.enemy.id().to_string(),
            },
        );
        info!(
            "Combat started: {} ({} HP) vs {} ({} HP)",
            self.player.name(),
            self.player.current_health(),
            self.enemy.name(),
            self.enemy.current_health()
        );
        self.begin_player_turn();
    }

    fn begin_player_turn(&mut self) {
        self.turn += 1;
        self.log.record(self.turn, CombatEventKind::TurnStarted);
        self.player.on_turn_start();
        let ticks = self.player.vitals_mut().resolve_turn_start_effects();
        self.record_ticks(Side::Player, ticks);
        if self.check_end() {
            return;
        }
        self.player.refill_hand_with(&mut self.rng);
        debug!("Turn {}: enemy intends {}", self.turn, self.enemy.intent().description);
    }

    fn record_ticks(&mut self, side: Side, effects: TurnStartEffects) {
        if effects != TurnStartEffects::default() {
            self.log
                .record(self.turn, CombatEventKind::StatusTick { side, effects });
        }
    }

    /// Declare a winner if either side is dead
    fn check_end(&mut self) -> bool {
        if self.winner.is_some() {
            return true;
        }
        let winner = if self.player.is_dead() {
            Side::Enemy
        } else if self.enemy.is_dead() {
            Side::Player
        } else {
            return false;
        };
        self.finish(winner);
        true
    }

    fn finish(&mut self, winner: Side) {
        self.winner = Some(winner);
        if self.temp_max_health > 0 {
            let vitals = self.player.vitals_mut();
            vitals.max_health -= self.temp_max_health;
            vitals.current_health = vitals.current_health.min(vitals.max_health);
            self.temp_max_health = 0;
        }
        self.log
            .record(self.turn, CombatEventKind::CombatEnded { winner });
        info!("Combat ended on turn {}: {} wins", self.turn, winner);
    }

    /// Discard cards from hand and draw replacements
    pub fn discard(&mut self, card_ids: &[&str]) -> Result<Vec<Card>, ActionError> {
        if self.is_over() {
            return Err(ActionError::EncounterOver);
        }
        let discarded = self.player.discard_selected(card_ids);
        if !discarded.is_empty() {
            self.player.refill_hand_with(&mut self.rng);
            self.log.record(
                self.turn,
                CombatEventKind::Discarded {
                    count: discarded.len(),
                },
            );
        }
        Ok(discarded)
    }

    /// Drink a potion, carrying out effects the potion leaves to the encounter.
    /// Returns None when the potion is not held.
    pub fn use_potion(&mut self, potion_id: &str) -> Result<Option<PotionOutcome>, ActionError> {
        if self.is_over() {
            return Err(ActionError::EncounterOver);
        }
        let Some(outcome) = self.player.use_potion_with(potion_id, &mut self.rng) else {
            return Ok(None);
        };
        self.log.record(
            self.turn,
            CombatEventKind::PotionUsed {
                potion: potion_id.to_string(),
            },
        );

        let outcome = match outcome {
            PotionOutcome::Deferred(PotionEffect::GainTempMaxHp) => {
                self.player.vitals_mut().increase_max_health(TEMP_MAX_HEALTH);
                self.temp_max_health += TEMP_MAX_HEALTH;
                PotionOutcome::Applied
            }
            PotionOutcome::Deferred(PotionEffect::AddRandomCards) => {
                let pool = Card::standard_deck();
                let picked: Vec<Card> = pool
                    .choose_multiple(&mut self.rng, RANDOM_CARDS_ADDED)
                    .cloned()
                    .collect();
                for mut card in picked {
                    self.generated_cards += 1;
                    card.id = format!("{}-chaos-{}", card.id, self.generated_cards);
                    self.player.hand.push(card);
                }
                PotionOutcome::Applied
            }
            other => other,
        };
        Ok(Some(outcome))
    }

    /// Play five cards from hand as an action, then run the enemy turn.
    /// A refused action leaves the cards in hand and does not end the turn.
    pub fn play_hand(
        &mut self,
        card_ids: &[&str],
        kind: PlayerActionKind,
    ) -> Result<TurnReport, ActionError> {
        if self.is_over() {
            return Err(ActionError::EncounterOver);
        }
        if card_ids.len() != PLAYED_HAND_SIZE {
            return Err(ActionError::WrongCardCount {
                expected: PLAYED_HAND_SIZE,
                got: card_ids.len(),
            });
        }
        if !self.player.confirm_hand(card_ids) {
            let missing = card_ids
                .iter()
                .find(|id| !self.player.hand.iter().any(|c| c.id == **id))
                .unwrap_or(&card_ids[0]);
            return Err(ActionError::CardNotInHand(missing.to_string()));
        }

        let played = self.player.played_hand.clone();
        let score = self.evaluator.evaluate(&played);
        let score = self.player.adjust_score(score);
        let action = match resolve_player_action(
            &mut self.player,
            &mut self.enemy,
            kind,
            score,
            &played,
            &self.rules,
        ) {
            Ok(action) => action,
            Err(err) => {
                self.player.return_played_hand();
                return Err(err);
            }
        };
        self.log.record(
            self.turn,
            CombatEventKind::PlayerAction {
                outcome: action.clone(),
            },
        );

        if action.was_refused() {
            self.player.return_played_hand();
            return Ok(TurnReport {
                action,
                enemy: None,
                winner: None,
            });
        }

        if self.enemy.check_half_health_trigger() {
            self.log.record(
                self.turn,
                CombatEventKind::HalfHealth {
                    enemy: self.enemy.id().to_string(),
                },
            );
        }

        self.player.on_turn_end();
        self.player.end_turn_cleanup();
        if self.check_end() {
            return Ok(self.report(action, None));
        }

        let enemy_result = self.run_enemy_turn();
        if !self.check_end() {
            self.begin_player_turn();
        }
        Ok(self.report(action, enemy_result))
    }

    fn run_enemy_turn(&mut self) -> Option<EnemyActionResult> {
        self.enemy.on_turn_start();
        let ticks = self.enemy.vitals_mut().resolve_turn_start_effects();
        self.record_ticks(Side::Enemy, ticks);
        if self.check_end() {
            return None;
        }

        let result = self
            .ai
            .execute_turn_with(&mut self.enemy, &mut self.player, &mut self.rng);
        self.log.record(
            self.turn,
            CombatEventKind::EnemyAction {
                result: result.clone(),
            },
        );
        self.enemy.on_turn_end();
        Some(result)
    }

    fn report(&self, action: ActionOutcome, enemy: Option<EnemyActionResult>) -> TurnReport {
        TurnReport {
            action,
            enemy,
            winner: self.winner,
        }
    }
}
