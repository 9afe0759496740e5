//! Combat - Status assignment, turn scheduling and damage resolution

mod engine;
mod event;
mod resolution;
mod result;
mod state;
mod status;

pub use engine::{run_battle, run_battle_with_rng, BattleEngine};
pub use event::BattleEvent;
pub use resolution::{attack_damage, burn_damage, poison_damage, Battle};
pub use result::{BattleResult, CombatantSummary};
pub use state::CombatantState;
pub use status::assign_status;
