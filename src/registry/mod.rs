//! Content registries
//!
//! Catalogs of immutable definitions keyed by stable id:
//! - Enemy registry with name lookup, chapter/tier queries and sprite keys
//! - Item registry for relics and potions
//! - Factory and selector that turn definitions into fresh entities
//!
//! Registries are plain values shared behind `Arc`; nothing is global.

mod enemies;
mod factory;
mod items;
mod selection;
mod validate;

use std::sync::Arc;
use thiserror::Error;

use crate::entities::EnemyTier;

pub use enemies::{EnemyRegistry, FALLBACK_COMBAT_SPRITE, FALLBACK_OVERWORLD_SPRITE};
pub use factory::EnemyFactory;
pub use items::ItemRegistry;
pub use selection::{EnemySelector, DEFAULT_CHAPTER};
pub use validate::{validate_content_id, ValidationError};

/// Errors from catalog lookups and registration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown enemy: {0}")]
    UnknownEnemy(String),

    #[error("unknown relic: {0}")]
    UnknownRelic(String),

    #[error("unknown potion: {0}")]
    UnknownPotion(String),

    #[error("no {tier} enemies registered for chapter {chapter}")]
    EmptyPool { chapter: u8, tier: EnemyTier },

    #[error("invalid definition '{id}': {reason}")]
    InvalidConfig { id: String, reason: String },
}

/// Every registry the game needs, bootstrapped together
#[derive(Debug, Clone)]
pub struct Catalog {
    pub enemies: Arc<EnemyRegistry>,
    pub items: Arc<ItemRegistry>,
}

impl Catalog {
    /// Catalog loaded with the built-in chapters, relics and potions
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self {
            enemies: Arc::new(EnemyRegistry::with_builtin_content()?),
            items: Arc::new(ItemRegistry::with_builtin_content()?),
        })
    }

    pub fn factory(&self) -> EnemyFactory {
        EnemyFactory::new(self.enemies.clone())
    }

    pub fn selector(&self) -> EnemySelector {
        EnemySelector::new(self.enemies.clone())
    }
}
