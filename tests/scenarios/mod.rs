//! Scenario Tests for Bathala combat
//!
//! Play-level scenarios covering:
//! - Intents: enemy pattern cycling and what each move does
//! - Damage: block, affinity, weak and vulnerable through real encounters
//! - Encounter: turn flow, refusals, victory and defeat
//! - Inventory: relics and potions carried into combat
//! - Registry: catalog lookups and node selection

pub mod damage;
pub mod encounter;
pub mod intents;
pub mod inventory;
pub mod registry;
