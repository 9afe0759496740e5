//! Errors raised while validating combatants before a battle

use thiserror::Error;

/// Battle setup error. The engine never recovers from these internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("{combatant} is missing required stat '{stat}'")]
    MissingStat { combatant: String, stat: String },
    #[error("{combatant} has invalid {stat} value {value}")]
    InvalidStat {
        combatant: String,
        stat: String,
        value: i64,
    },
    #[error("invalid battle rules: {0}")]
    InvalidRules(String),
}
