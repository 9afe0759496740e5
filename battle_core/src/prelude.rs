//! Prelude module for convenient imports
//!
//! ```rust
//! use battle_core::prelude::*;
//! ```

// Core types
pub use crate::stat_block::{CoreStats, StatBlock};
pub use crate::types::{Side, Status};

// Combat
pub use crate::combat::{run_battle, run_battle_with_rng, BattleEngine, BattleEvent, BattleResult};

// Randomness
pub use crate::rng::{BattleRng, ScriptedRng};

// Config
pub use crate::config::BattleConstants;

// Errors
pub use crate::error::BattleError;
pub use crate::loader::LoadError;
