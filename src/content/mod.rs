//! Built-in game content
//!
//! Enemy definitions for each chapter plus the relic and potion
//! catalogs. Registries load these on bootstrap.

mod act1;
mod act2;
mod act3;
mod potions;
mod relics;

use crate::entities::EnemyConfig;

pub use potions::potions;
pub use relics::relics;

/// Chapters shipped with the game
pub const CHAPTERS: [u8; 3] = [1, 2, 3];

/// Enemy definitions for one chapter. Unknown chapters have none.
pub fn chapter_enemies(chapter: u8) -> Vec<EnemyConfig> {
    match chapter {
        1 => act1::enemies(),
        2 => act2::enemies(),
        3 => act3::enemies(),
        _ => Vec::new(),
    }
}

/// Every built-in enemy definition, chapter by chapter
pub fn enemies() -> Vec<EnemyConfig> {
    CHAPTERS.iter().flat_map(|&c| chapter_enemies(c)).collect()
}
