//! battle_core - Turn-based battle resolution between two combatants
//!
//! This library provides:
//! - StatBlock: Normalized combatant record and stat validation
//! - Battle: Status assignment, turn scheduling and per-turn resolution
//! - BattleResult: Winner, event log and combatant summaries
//! - Loader: Combatant records from JSON files
//! - BattleConstants: Tunable rules loaded from TOML

pub mod combat;
pub mod config;
pub mod error;
pub mod loader;
pub mod prelude;
pub mod rng;
pub mod stat_block;
pub mod types;

// Re-export core types for convenience
pub use combat::{
    run_battle, run_battle_with_rng, Battle, BattleEngine, BattleEvent, BattleResult,
    CombatantState, CombatantSummary,
};
pub use config::{BattleConstants, ConfigError};
pub use error::BattleError;
pub use loader::{load_stat_block, parse_stat_block, LoadError};
pub use rng::{BattleRng, ForcedStatusRng, ScriptedRng};
pub use stat_block::{CoreStats, StatBlock};
pub use types::{Side, Status};
