//! Relic and potion definitions keyed by id

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use super::{validate_content_id, CatalogError};
use crate::content;
use crate::items::{Potion, PotionConfig, Relic, RelicConfig};

#[derive(Debug, Default)]
struct ItemIndex {
    relics: HashMap<String, RelicConfig>,
    relic_order: Vec<String>,
    potions: HashMap<String, PotionConfig>,
    potion_order: Vec<String>,
    bootstrapped: bool,
}

/// Registry of item definitions
///
/// Lookups return fresh items built from the stored definition, so two
/// players never share relic state.
#[derive(Debug, Default)]
pub struct ItemRegistry {
    index: RwLock<ItemIndex>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Registry loaded with the built-in relics and potions
    pub fn with_builtin_content() -> Result<Self, CatalogError> {
        let registry = Self::new();
        registry.bootstrap()?;
        Ok(registry)
    }

    fn check_id(id: &str, name: &str) -> Result<(), CatalogError> {
        validate_content_id(id).map_err(|e| CatalogError::InvalidConfig {
            id: id.to_string(),
            reason: e.to_string(),
        })?;
        if name.trim().is_empty() {
            return Err(CatalogError::InvalidConfig {
                id: id.to_string(),
                reason: "name is empty".to_string(),
            });
        }
        Ok(())
    }

    /// Add or replace a relic definition
    pub fn register_relic(&self, config: RelicConfig) -> Result<(), CatalogError> {
        Self::check_id(&config.id, &config.name)?;
        let mut index = self.index.write();
        if !index.relics.contains_key(&config.id) {
            index.relic_order.push(config.id.clone());
        }
        index.relics.insert(config.id.clone(), config);
        Ok(())
    }

    /// Add or replace a potion definition
    pub fn register_potion(&self, config: PotionConfig) -> Result<(), CatalogError> {
        Self::check_id(&config.id, &config.name)?;
        let mut index = self.index.write();
        if !index.potions.contains_key(&config.id) {
            index.potion_order.push(config.id.clone());
        }
        index.potions.insert(config.id.clone(), config);
        Ok(())
    }

    /// Load the built-in items. Does nothing after the first success.
    pub fn bootstrap(&self) -> Result<(usize, usize), CatalogError> {
        if self.index.read().bootstrapped {
            return Ok((0, 0));
        }
        let relics = content::relics();
        let potions = content::potions();
        let counts = (relics.len(), potions.len());
        for relic in relics {
            self.register_relic(relic)?;
        }
        for potion in potions {
            self.register_potion(potion)?;
        }
        self.index.write().bootstrapped = true;
        info!(
            "Item registry bootstrapped with {} relics and {} potions",
            counts.0, counts.1
        );
        Ok(counts)
    }

    pub fn is_bootstrapped(&self) -> bool {
        self.index.read().bootstrapped
    }

    /// Remove every definition and allow bootstrapping again
    pub fn reset(&self) {
        *self.index.write() = ItemIndex::default();
    }

    pub fn relic(&self, id: &str) -> Option<RelicConfig> {
        self.index.read().relics.get(id).cloned()
    }

    pub fn require_relic(&self, id: &str) -> Result<RelicConfig, CatalogError> {
        self.relic(id)
            .ok_or_else(|| CatalogError::UnknownRelic(id.to_string()))
    }

    pub fn potion(&self, id: &str) -> Option<PotionConfig> {
        self.index.read().potions.get(id).cloned()
    }

    pub fn require_potion(&self, id: &str) -> Result<PotionConfig, CatalogError> {
        self.potion(id)
            .ok_or_else(|| CatalogError::UnknownPotion(id.to_string()))
    }

    /// Fresh relic built from its definition
    pub fn create_relic(&self, id: &str) -> Result<Relic, CatalogError> {
        self.require_relic(id).map(|config| Relic::from_config(&config))
    }

    /// Fresh potion built from its definition
    pub fn create_potion(&self, id: &str) -> Result<Potion, CatalogError> {
        self.require_potion(id).map(|config| Potion::from_config(&config))
    }

    /// Copy of a held relic with its combat gate reset
    pub fn clone_relic(&self, relic: &Relic) -> Relic {
        relic.fresh_copy()
    }

    /// Copy of a held potion
    pub fn clone_potion(&self, potion: &Potion) -> Potion {
        potion.clone()
    }

    /// Relic definitions in registration order
    pub fn all_relics(&self) -> Vec<RelicConfig> {
        let index = self.index.read();
        index
            .relic_order
            .iter()
            .filter_map(|id| index.relics.get(id).cloned())
            .collect()
    }

    /// Potion definitions in registration order
    pub fn all_potions(&self) -> Vec<PotionConfig> {
        let index = self.index.read();
        index
            .potion_order
            .iter()
            .filter_map(|id| index.potions.get(id).cloned())
            .collect()
    }
}
