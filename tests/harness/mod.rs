//! Integration Test Harness
//!
//! Shared fixtures for the combat scenarios:
//! - `fixtures` - catalog, players, enemies and cards built the same way every time
//! - `FixedEvaluator` - hand scorer that ignores the cards, for exact damage numbers
//!
//! # Example
//!
//! ```rust,ignore
//! use harness::{fixtures, FixedEvaluator};
//!
//! #[test]
//! fn test_attack_lands() {
//!     let mut encounter = fixtures::encounter_with(
//!         fixtures::dummy(&["defend"], 100, 5),
//!         FixedEvaluator::pair(20),
//!     );
//!     encounter.start();
//! }
//! ```

#![allow(unused_imports)]

mod evaluator;
pub mod fixtures;

pub use evaluator::FixedEvaluator;
