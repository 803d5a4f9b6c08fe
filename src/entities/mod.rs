//! Combat entities
//!
//! The two sides of an encounter:
//! - Player: card piles, currencies, alignment and owned items
//! - Enemy: a fixed attack pattern with a derived intent

mod enemy;
mod player;

pub use enemy::{Dialogue, Enemy, EnemyConfig, EnemySnapshot, EnemyTier, Lore};
pub use player::{Currencies, Landas, Player, PLAYED_HAND_SIZE};
