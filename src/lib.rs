//! bathala-combat - card-combat core for Bathala
//!
//! Turn-based combat between a player and mythological enemies, driven by
//! poker hands, stacking status effects, relics and potions.

pub mod combat;
pub mod config;
pub mod content;
pub mod entities;
pub mod items;
pub mod registry;
pub mod sim;

pub use config::{Config, ConfigError, PlayerSettings};
pub use registry::{Catalog, CatalogError};
