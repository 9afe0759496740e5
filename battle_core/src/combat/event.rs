//! BattleEvent - One entry in the battle log

use crate::types::{Side, Status};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Something that happened during a battle, in chronological order.
/// `Display` renders the human-readable log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BattleEvent {
    StatusAssigned {
        side: Side,
        name: String,
        status: Status,
    },
    Paralyzed {
        side: Side,
        name: String,
    },
    BurnDamage {
        side: Side,
        name: String,
        amount: i64,
        hp_after: i64,
    },
    Attack {
        /// Side of the attacker
        side: Side,
        attacker: String,
        defender: String,
        damage: i64,
        defender_hp_after: i64,
    },
    PoisonDamage {
        side: Side,
        name: String,
        amount: i64,
        stacks: u32,
        hp_after: i64,
    },
    Winner {
        side: Side,
        name: String,
    },
}

impl BattleEvent {
    /// Side whose health changed and its value afterwards
    pub fn hp_change(&self) -> Option<(Side, i64)> {
        match self {
            BattleEvent::BurnDamage { side, hp_after, .. }
            | BattleEvent::PoisonDamage { side, hp_after, .. } => Some((*side, *hp_after)),
            BattleEvent::Attack {
                side,
                defender_hp_after,
                ..
            } => Some((side.opponent(), *defender_hp_after)),
            _ => None,
        }
    }

    /// Side the event is attributed to
    pub fn side(&self) -> Side {
        match self {
            BattleEvent::StatusAssigned { side, .. }
            | BattleEvent::Paralyzed { side, .. }
            | BattleEvent::BurnDamage { side, .. }
            | BattleEvent::Attack { side, .. }
            | BattleEvent::PoisonDamage { side, .. }
            | BattleEvent::Winner { side, .. } => *side,
        }
    }
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleEvent::StatusAssigned { name, status, .. } => {
                write!(f, "{} is affected by {}!", name, status)
            }
            BattleEvent::Paralyzed { name, .. } => {
                write!(f, "{} is paralyzed and cannot move!", name)
            }
            BattleEvent::BurnDamage { name, amount, .. } => {
                write!(f, "{} is hurt by burn (-{} HP)!", name, amount)
            }
            BattleEvent::Attack {
                attacker,
                defender,
                damage,
                ..
            } => write!(f, "{} hits {} for {} damage!", attacker, defender, damage),
            BattleEvent::PoisonDamage { name, amount, .. } => {
                write!(f, "{} is hurt by poison (-{} HP)!", name, amount)
            }
            BattleEvent::Winner { name, .. } => write!(f, "Winner: {}", name),
        }
    }
}
