//! Layered configuration
//!
//! Built-in defaults, then an optional TOML file, then `BATHALA_*`
//! environment variables. Nested keys use a double underscore, so
//! `BATHALA_PLAYER__MAX_HEALTH=100` sets `player.max_health`.

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::combat::CombatRules;
use crate::entities::PLAYED_HAND_SIZE;

/// File read from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "bathala.toml";
/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "BATHALA_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error(transparent)]
    Figment(#[from] Box<figment::Error>),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Starting values for a new player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub id: String,
    pub name: String,
    pub max_health: i32,
    pub discard_charges: u32,
    pub hand_size: usize,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            id: "player".to_string(),
            name: "Bayani".to_string(),
            max_health: 80,
            discard_charges: 3,
            hand_size: 8,
        }
    }
}

/// Runtime configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerSettings,
    pub rules: CombatRules,
    /// Seed for every random choice; random when unset
    pub seed: Option<u64>,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, `bathala.toml` in the
    /// working directory is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };
        debug!("Loading config from {}", file.display());

        let config: Config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(&file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the combat code cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player.max_health <= 0 {
            return Err(ConfigError::Invalid(format!(
                "player.max_health must be positive, got {}",
                self.player.max_health
            )));
        }
        if self.player.hand_size < PLAYED_HAND_SIZE {
            return Err(ConfigError::Invalid(format!(
                "player.hand_size must be at least {}, got {}",
                PLAYED_HAND_SIZE, self.player.hand_size
            )));
        }
        if self.rules.damage_cap < 0 {
            return Err(ConfigError::Invalid("rules.damage_cap is negative".to_string()));
        }
        let multiplier = self.rules.special_multiplier;
        if multiplier.is_nan() || multiplier < 0.0 {
            return Err(ConfigError::Invalid(
                "rules.special_multiplier must be a non-negative number".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.player.max_health, 80);
        assert_eq!(config.player.name, "Bayani");
        assert_eq!(config.player.discard_charges, 3);
        assert_eq!(config.player.hand_size, 8);
        assert_eq!(config.rules.special_multiplier, 0.6);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "seed = 7\n\n[player]\nname = \"Amihan\"\nmax_health = 60\n\n[rules]\nbase_attack = 2"
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.player.name, "Amihan");
        assert_eq!(config.player.max_health, 60);
        assert_eq!(config.player.hand_size, 8);
        assert_eq!(config.rules.base_attack, 2);
        assert_eq!(config.rules.damage_cap, 9999);
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Config::load(Some(&missing)),
            Err(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_rejects_small_hand() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[player]\nhand_size = 3").unwrap();
        assert!(matches!(
            Config::load(Some(file.path())),
            Err(ConfigError::Invalid(_))
        ));
    }
}
