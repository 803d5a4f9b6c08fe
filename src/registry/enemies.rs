//! Enemy definitions keyed by id

use parking_lot::RwLock;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::CatalogError;
use crate::content;
use crate::entities::{EnemyConfig, EnemyTier};

/// Combat sprite used when an enemy has none registered
pub const FALLBACK_COMBAT_SPRITE: &str = "tikbalang_combat";
/// Overworld sprite used when an enemy has none registered
pub const FALLBACK_OVERWORLD_SPRITE: &str = "tikbalang_overworld";

#[derive(Debug, Default)]
struct EnemyIndex {
    by_id: HashMap<String, EnemyConfig>,
    /// Registration order, for stable listings
    order: Vec<String>,
    /// Lowercased display name to id
    by_name: HashMap<String, String>,
    bootstrapped: bool,
}

/// Registry of enemy definitions
#[derive(Debug, Default)]
pub struct EnemyRegistry {
    index: RwLock<EnemyIndex>,
}

impl EnemyRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared instance
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Registry loaded with every built-in chapter
    pub fn with_builtin_content() -> Result<Self, CatalogError> {
        let registry = Self::new();
        registry.bootstrap()?;
        Ok(registry)
    }

    /// Add or replace a definition
    pub fn register(&self, config: EnemyConfig) -> Result<(), CatalogError> {
        config.validate()?;
        let mut index = self.index.write();
        if let Some(previous) = index.by_id.get(&config.id) {
            debug!("Replacing enemy definition {}", config.id);
            let old_name = previous.name.to_lowercase();
            if index.by_name.get(&old_name) == Some(&config.id) {
                index.by_name.remove(&old_name);
            }
        } else {
            index.order.push(config.id.clone());
        }
        index
            .by_name
            .insert(config.name.to_lowercase(), config.id.clone());
        index.by_id.insert(config.id.clone(), config);
        Ok(())
    }

    /// Register several definitions, stopping at the first invalid one
    pub fn register_all(
        &self,
        configs: impl IntoIterator<Item = EnemyConfig>,
    ) -> Result<usize, CatalogError> {
        let mut count = 0;
        for config in configs {
            self.register(config)?;
            count += 1;
        }
        Ok(count)
    }

    /// Load every built-in chapter. Does nothing after the first success.
    pub fn bootstrap(&self) -> Result<usize, CatalogError> {
        if self.index.read().bootstrapped {
            return Ok(0);
        }
        let count = self.register_all(content::enemies())?;
        self.index.write().bootstrapped = true;
        info!("Enemy registry bootstrapped with {} enemies", count);
        Ok(count)
    }

    pub fn is_bootstrapped(&self) -> bool {
        self.index.read().bootstrapped
    }

    /// Remove every definition and allow bootstrapping again
    pub fn reset(&self) {
        *self.index.write() = EnemyIndex::default();
    }

    pub fn len(&self) -> usize {
        self.index.read().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Definition by id
    pub fn get(&self, id: &str) -> Option<EnemyConfig> {
        self.index.read().by_id.get(id).cloned()
    }

    /// Definition by id, or an error naming the id
    pub fn require(&self, id: &str) -> Result<EnemyConfig, CatalogError> {
        self.get(id)
            .ok_or_else(|| CatalogError::UnknownEnemy(id.to_string()))
    }

    /// Id for a display name, ignoring case
    pub fn id_by_name(&self, name: &str) -> Option<String> {
        self.index.read().by_name.get(&name.to_lowercase()).cloned()
    }

    /// Definition by id or display name
    pub fn resolve(&self, id_or_name: &str) -> Option<EnemyConfig> {
        self.get(id_or_name).or_else(|| {
            self.id_by_name(id_or_name)
                .and_then(|id| self.get(&id))
        })
    }

    /// Combat sprite for an id or name, falling back to the tikbalang sprite
    pub fn combat_sprite(&self, id_or_name: &str) -> String {
        match self.resolve(id_or_name) {
            Some(config) => config.combat_sprite,
            None => {
                warn!(
                    "No combat sprite for '{}', using {}",
                    id_or_name, FALLBACK_COMBAT_SPRITE
                );
                FALLBACK_COMBAT_SPRITE.to_string()
            }
        }
    }

    /// Overworld sprite for an id or name, falling back to the tikbalang sprite
    pub fn overworld_sprite(&self, id_or_name: &str) -> String {
        match self.resolve(id_or_name) {
            Some(config) => config.overworld_sprite,
            None => {
                warn!(
                    "No overworld sprite for '{}', using {}",
                    id_or_name, FALLBACK_OVERWORLD_SPRITE
                );
                FALLBACK_OVERWORLD_SPRITE.to_string()
            }
        }
    }

    fn filtered(&self, keep: impl Fn(&EnemyConfig) -> bool) -> Vec<EnemyConfig> {
        let index = self.index.read();
        index
            .order
            .iter()
            .filter_map(|id| index.by_id.get(id))
            .filter(|config| keep(config))
            .cloned()
            .collect()
    }

    /// Every definition in registration order
    pub fn all(&self) -> Vec<EnemyConfig> {
        self.filtered(|_| true)
    }

    pub fn by_chapter(&self, chapter: u8) -> Vec<EnemyConfig> {
        self.filtered(|c| c.chapter == chapter)
    }

    pub fn by_tier(&self, tier: EnemyTier) -> Vec<EnemyConfig> {
        self.filtered(|c| c.tier == tier)
    }

    pub fn by_chapter_and_tier(&self, chapter: u8, tier: EnemyTier) -> Vec<EnemyConfig> {
        self.filtered(|c| c.chapter == chapter && c.tier == tier)
    }

    /// Chapters with at least one enemy, ascending
    pub fn chapters(&self) -> Vec<u8> {
        let mut chapters: Vec<u8> = self.all().iter().map(|c| c.chapter).collect();
        chapters.sort_unstable();
        chapters.dedup();
        chapters
    }

    /// Random definition from one chapter and tier
    pub fn random<R: Rng + ?Sized>(
        &self,
        chapter: u8,
        tier: EnemyTier,
        rng: &mut R,
    ) -> Result<EnemyConfig, CatalogError> {
        self.by_chapter_and_tier(chapter, tier)
            .choose(rng)
            .cloned()
            .ok_or(CatalogError::EmptyPool { chapter, tier })
    }

    /// Every sprite key referenced by a definition, sorted
    pub fn sprite_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .all()
            .into_iter()
            .flat_map(|c| [c.combat_sprite, c.overworld_sprite])
            .collect();
        keys.sort();
        keys.dedup();
        keys
    }

    /// Sprite keys the asset check reports as missing
    pub fn validate_sprites(&self, exists: impl Fn(&str) -> bool) -> Vec<String> {
        let missing: Vec<String> = self
            .sprite_keys()
            .into_iter()
            .filter(|key| !exists(key))
            .collect();
        for key in &missing {
            warn!("Missing sprite asset: {}", key);
        }
        missing
    }
}
