//! Choosing which enemy a map node spawns

use rand::Rng;
use std::sync::Arc;
use tracing::{debug, warn};

use super::{CatalogError, EnemyRegistry};
use crate::entities::{Enemy, EnemyTier};

/// Chapter used when a requested chapter has no content
pub const DEFAULT_CHAPTER: u8 = 1;

/// Picks enemies for map nodes
#[derive(Debug, Clone)]
pub struct EnemySelector {
    registry: Arc<EnemyRegistry>,
}

impl EnemySelector {
    pub fn new(registry: Arc<EnemyRegistry>) -> Self {
        Self { registry }
    }

    /// Random enemy for a node of the given tier.
    ///
    /// A chapter with no enemies falls back to chapter 1.
    pub fn for_node<R: Rng + ?Sized>(
        &self,
        tier: EnemyTier,
        chapter: u8,
        rng: &mut R,
    ) -> Result<Enemy, CatalogError> {
        let chapter = if self.registry.by_chapter(chapter).is_empty() {
            warn!(
                "Chapter {} has no enemies, falling back to chapter {}",
                chapter, DEFAULT_CHAPTER
            );
            DEFAULT_CHAPTER
        } else {
            chapter
        };
        let config = self.registry.random(chapter, tier, rng)?;
        debug!("Selected {} for {} node in chapter {}", config.id, tier, chapter);
        Ok(Enemy::from_config(&config))
    }

    /// Enemy with this id or display name, or a random chapter-1 common
    /// when nothing matches
    pub fn by_id<R: Rng + ?Sized>(
        &self,
        id_or_name: &str,
        rng: &mut R,
    ) -> Result<Enemy, CatalogError> {
        match self.registry.resolve(id_or_name) {
            Some(config) => Ok(Enemy::from_config(&config)),
            None => {
                warn!("Unknown enemy '{}', picking a random common", id_or_name);
                self.registry
                    .random(DEFAULT_CHAPTER, EnemyTier::Common, rng)
                    .map(|config| Enemy::from_config(&config))
            }
        }
    }
}
