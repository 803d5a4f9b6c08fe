//! The player combatant
//!
//! Owns the card piles for a run, the player's currencies and alignment,
//! and the relics and potions it carries. Relic hooks are driven from the
//! player's own lifecycle hooks.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::combat::{Card, Combatant, HandScore, HandType, StatusEffect, Vitals};
use crate::config::PlayerSettings;
use crate::items::{Potion, PotionOutcome, Relic, StrikeContext, MAX_POTIONS, MAX_RELICS};

/// Cards confirmed for a single played hand
pub const PLAYED_HAND_SIZE: usize = 5;

/// Alignment score at or above which the player walks the path of mercy
const MERCY_THRESHOLD: i32 = 5;
/// Alignment score at or below which the player walks the path of conquest
const CONQUEST_THRESHOLD: i32 = -5;

/// Run currencies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currencies {
    pub ginto: i32,
    pub diamante: i32,
}

/// Moral alignment derived from the landas score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Landas {
    Mercy,
    Balance,
    Conquest,
}

impl std::fmt::Display for Landas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Landas::Mercy => "mercy",
            Landas::Balance => "balance",
            Landas::Conquest => "conquest",
        };
        write!(f, "{}", s)
    }
}

/// The player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    #[serde(flatten)]
    pub vitals: Vitals,
    /// Every card the player owns
    pub deck: Vec<Card>,
    pub hand: Vec<Card>,
    pub draw_pile: Vec<Card>,
    pub discard_pile: Vec<Card>,
    /// Cards confirmed for the current action
    pub played_hand: Vec<Card>,
    pub currencies: Currencies,
    pub landas_score: i32,
    relics: Vec<Relic>,
    potions: Vec<Potion>,
    pub discard_charges: u32,
    pub max_discard_charges: u32,
    /// Cards the hand is refilled to each turn
    pub hand_size: usize,
    /// Extra cards drawn at the next refill
    #[serde(default)]
    pub bonus_draws: usize,
    /// Whether the special action has been spent this combat
    pub special_used: bool,
    /// Player turns taken in the current combat
    turn_number: u32,
}

impl Player {
    /// Create a player holding a standard deck
    pub fn new(id: impl Into<String>, name: impl Into<String>, max_health: i32) -> Self {
        Self::from_settings(&PlayerSettings {
            id: id.into(),
            name: name.into(),
            max_health,
            ..PlayerSettings::default()
        })
    }

    /// Create a player from configured defaults
    pub fn from_settings(settings: &PlayerSettings) -> Self {
        Self {
            vitals: Vitals::new(&settings.id, &settings.name, settings.max_health),
            deck: Card::standard_deck(),
            hand: Vec::new(),
            draw_pile: Vec::new(),
            discard_pile: Vec::new(),
            played_hand: Vec::new(),
            currencies: Currencies::default(),
            landas_score: 0,
            relics: Vec::new(),
            potions: Vec::new(),
            discard_charges: settings.discard_charges,
            max_discard_charges: settings.discard_charges,
            hand_size: settings.hand_size,
            bonus_draws: 0,
            special_used: false,
            turn_number: 0,
        }
    }

    /// Player turns taken in the current combat
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    // ---- Alignment ----

    pub fn landas(&self) -> Landas {
        if self.landas_score >= MERCY_THRESHOLD {
            Landas::Mercy
        } else if self.landas_score <= CONQUEST_THRESHOLD {
            Landas::Conquest
        } else {
            Landas::Balance
        }
    }

    /// Spare a defeated enemy
    pub fn spare(&mut self) {
        self.landas_score += 1;
    }

    /// Slay a defeated enemy
    pub fn slay(&mut self) {
        self.landas_score -= 1;
    }

    // ---- Cards ----

    /// Shuffle the whole deck into the draw pile and empty every other pile
    pub fn start_combat_deck<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.hand.clear();
        self.discard_pile.clear();
        self.played_hand.clear();
        self.draw_pile = self.deck.clone();
        self.draw_pile.shuffle(rng);
    }

    /// Draw up to `count` cards. Returns how many were drawn.
    pub fn draw_cards(&mut self, count: usize) -> usize {
        self.draw_cards_with(count, &mut rand::rng())
    }

    /// Draw up to `count` cards, reshuffling the discard pile into the draw
    /// pile whenever it runs out. Returns how many were drawn.
    pub fn draw_cards_with<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> usize {
        let mut drawn = 0;
        while drawn < count {
            if self.draw_pile.is_empty() {
                if self.discard_pile.is_empty() {
                    break;
                }
                self.draw_pile.append(&mut self.discard_pile);
                self.draw_pile.shuffle(rng);
                debug!("{} reshuffled {} cards", self.vitals.id, self.draw_pile.len());
            }
            match self.draw_pile.pop() {
                Some(card) => self.hand.push(card),
                None => break,
            }
            drawn += 1;
        }
        drawn
    }

    /// Draw until the hand holds `hand_size` cards, plus any bonus draws
    /// owed from relics. Bonus draws are spent by the refill.
    pub fn refill_hand_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let missing = self.hand_size.saturating_sub(self.hand.len());
        let bonus = std::mem::take(&mut self.bonus_draws);
        self.draw_cards_with(missing + bonus, rng)
    }

    /// Move the named cards from hand to the discard pile, spending one
    /// discard charge. Does nothing without charges or matching cards.
    pub fn discard_selected(&mut self, card_ids: &[&str]) -> Vec<Card> {
        if self.discard_charges == 0 {
            debug!("{} has no discard charges left", self.vitals.id);
            return Vec::new();
        }
        if !self.hand.iter().any(|c| card_ids.contains(&c.id.as_str())) {
            return Vec::new();
        }

        let (discarded, kept): (Vec<Card>, Vec<Card>) = std::mem::take(&mut self.hand)
            .into_iter()
            .partition(|c| card_ids.contains(&c.id.as_str()));
        self.hand = kept;
        self.discard_pile.extend(discarded.iter().cloned());
        self.discard_charges -= 1;
        discarded
    }

    /// Move exactly five distinct cards from hand to the played hand.
    /// Returns false, changing nothing, for any other selection.
    pub fn confirm_hand(&mut self, card_ids: &[&str]) -> bool {
        if card_ids.len() != PLAYED_HAND_SIZE {
            return false;
        }
        let mut unique = card_ids.to_vec();
        unique.sort_unstable();
        unique.dedup();
        if unique.len() != PLAYED_HAND_SIZE
            || !unique
                .iter()
                .all(|id| self.hand.iter().any(|c| c.id == *id))
        {
            return false;
        }

        // One card per id, even if the hand holds copies sharing it
        let mut played = Vec::with_capacity(PLAYED_HAND_SIZE);
        for id in card_ids {
            if let Some(index) = self.hand.iter().position(|c| c.id == *id) {
                played.push(self.hand.remove(index));
            }
        }
        self.played_hand = played;
        true
    }

    /// Put the played hand back into the hand
    pub fn return_played_hand(&mut self) {
        let played = std::mem::take(&mut self.played_hand);
        self.hand.extend(played);
    }

    /// Move the played hand to the discard pile
    pub fn end_turn_cleanup(&mut self) {
        let played = std::mem::take(&mut self.played_hand);
        self.discard_pile.extend(played);
    }

    // ---- Relics ----

    /// Add a relic, firing its acquire hook. Rejects duplicates and a full inventory.
    pub fn gain_relic(&mut self, mut relic: Relic) -> bool {
        if self.relics.len() >= MAX_RELICS {
            debug!("{} cannot carry relic {}: inventory full", self.vitals.id, relic.id());
            return false;
        }
        if self.has_relic(relic.id()) {
            debug!("{} already holds relic {}", self.vitals.id, relic.id());
            return false;
        }
        relic.on_acquire(self);
        self.relics.push(relic);
        true
    }

    pub fn remove_relic(&mut self, relic_id: &str) -> Option<Relic> {
        let index = self.relics.iter().position(|r| r.id() == relic_id)?;
        Some(self.relics.remove(index))
    }

    pub fn has_relic(&self, relic_id: &str) -> bool {
        self.relics.iter().any(|r| r.id() == relic_id)
    }

    pub fn relics(&self) -> &[Relic] {
        &self.relics
    }

    pub fn relics_mut(&mut self) -> &mut [Relic] {
        &mut self.relics
    }

    /// Run a hook on every relic with mutable access to this player
    fn notify_relics(&mut self, mut hook: impl FnMut(&mut Relic, &mut Player)) {
        let mut relics = std::mem::take(&mut self.relics);
        for relic in relics.iter_mut() {
            hook(relic, self);
        }
        self.relics = relics;
    }

    /// Fire `on_hand_played` on every relic. Returns the damage relics
    /// deal to the enemy in response.
    pub fn notify_hand_played(&mut self, hand_type: HandType, cards: &[Card]) -> i32 {
        let mut damage = 0;
        self.notify_relics(|relic, owner| {
            damage += relic.on_hand_played(owner, hand_type, cards);
        });
        damage
    }

    /// Pass a hand's score through every relic's evaluation modifier
    pub fn adjust_score(&mut self, score: HandScore) -> HandScore {
        self.relics
            .iter_mut()
            .fold(score, |score, relic| relic.modify_score(score))
    }

    /// Pass outgoing damage through every relic's attack modifier
    pub fn modify_attack(&mut self, damage: i32, strike: StrikeContext) -> i32 {
        let strike = StrikeContext {
            relics_held: self.relics.len(),
            ..strike
        };
        self.relics
            .iter_mut()
            .fold(damage, |dmg, relic| relic.modify_attack(dmg, &strike))
    }

    /// Extra block for defend actions from all relics
    pub fn relic_defend_bonus(&self, cards: &[Card]) -> i32 {
        self.relics.iter().map(|r| r.defend_bonus(cards)).sum()
    }

    /// Status effects every relic adds to an attack
    pub fn relic_attack_effects(&self) -> Vec<StatusEffect> {
        self.relics.iter().flat_map(Relic::attack_effects).collect()
    }

    // ---- Potions ----

    /// Add a potion. Rejects a full inventory.
    pub fn gain_potion(&mut self, potion: Potion) -> bool {
        if self.potions.len() >= MAX_POTIONS {
            debug!("{} cannot carry potion {}: inventory full", self.vitals.id, potion.id());
            return false;
        }
        self.potions.push(potion);
        true
    }

    /// Drink a held potion. It is removed before its effect applies.
    /// Returns None when no such potion is held.
    pub fn use_potion(&mut self, potion_id: &str) -> Option<PotionOutcome> {
        self.use_potion_with(potion_id, &mut rand::rng())
    }

    /// Drink a held potion, drawing any cards it grants with `rng`
    pub fn use_potion_with<R: Rng + ?Sized>(
        &mut self,
        potion_id: &str,
        rng: &mut R,
    ) -> Option<PotionOutcome> {
        let index = self.potions.iter().position(|p| p.id() == potion_id)?;
        let potion = self.potions.remove(index);
        Some(potion.apply_with(self, rng))
    }

    pub fn potions(&self) -> &[Potion] {
        &self.potions
    }

    // ---- Snapshots ----

    /// JSON-safe copy of the player's full state
    pub fn to_snapshot(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    /// Restore a player from a snapshot
    pub fn from_snapshot(snapshot: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(snapshot)
    }
}

impl Combatant for Player {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    fn on_combat_start(&mut self) {
        self.turn_number = 0;
        self.vitals.block = 0;
        self.discard_charges = self.max_discard_charges;
        self.special_used = false;
        self.bonus_draws = 0;
        self.notify_relics(|relic, owner| relic.on_combat_start(owner));
    }

    fn dodge_chance(&self) -> f64 {
        self.relics
            .iter()
            .map(Relic::dodge_chance)
            .sum::<f64>()
            .min(1.0)
    }

    /// Block from combat-start effects carries into the first turn
    fn on_turn_start(&mut self) {
        self.turn_number += 1;
        if self.turn_number > 1 {
            self.vitals.block = 0;
        }
        self.notify_relics(|relic, owner| relic.on_turn_start(owner));
    }

    fn on_turn_end(&mut self) {
        self.notify_relics(|relic, owner| relic.on_turn_end(owner));
    }
}
