//! Spawning enemies from registered definitions

use rand::Rng;
use std::sync::Arc;
use tracing::debug;

use super::{CatalogError, EnemyRegistry};
use crate::entities::{Enemy, EnemyTier};

/// Builds fresh enemies, each with its own instance id
#[derive(Debug, Clone)]
pub struct EnemyFactory {
    registry: Arc<EnemyRegistry>,
}

impl EnemyFactory {
    pub fn new(registry: Arc<EnemyRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<EnemyRegistry> {
        &self.registry
    }

    /// Spawn the enemy with this id or display name
    pub fn create(&self, id_or_name: &str) -> Result<Enemy, CatalogError> {
        let config = self
            .registry
            .resolve(id_or_name)
            .ok_or_else(|| CatalogError::UnknownEnemy(id_or_name.to_string()))?;
        let enemy = Enemy::from_config(&config);
        debug!("Spawned {} ({})", config.id, enemy.instance_id);
        Ok(enemy)
    }

    /// Spawn a random enemy from one chapter and tier
    pub fn create_random<R: Rng + ?Sized>(
        &self,
        chapter: u8,
        tier: EnemyTier,
        rng: &mut R,
    ) -> Result<Enemy, CatalogError> {
        let config = self.registry.random(chapter, tier, rng)?;
        Ok(Enemy::from_config(&config))
    }
}
