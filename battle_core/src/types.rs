//! Core types shared across the battle engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Non-volatile status condition assigned once at battle start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// 25% chance to lose the turn
    Paralysis,
    /// Chip damage to self before each attack
    Burn,
    /// Stacking damage every turn spent defending
    Poison,
}

impl Status {
    /// Every outcome of a status draw, including no status
    pub const CHOICES: [Option<Status>; 4] = [
        Some(Status::Paralysis),
        Some(Status::Burn),
        Some(Status::Poison),
        None,
    ];

    /// Lowercase name used in battle log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Paralysis => "paralysis",
            Status::Burn => "burn",
            Status::Poison => "poison",
        }
    }

    /// Index of a draw outcome within [`Status::CHOICES`]
    pub fn choice_index(status: Option<Status>) -> usize {
        match status {
            Some(Status::Paralysis) => 0,
            Some(Status::Burn) => 1,
            Some(Status::Poison) => 2,
            None => 3,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "paralysis" | "par" => Ok(Status::Paralysis),
            "burn" | "brn" => Ok(Status::Burn),
            "poison" | "psn" => Ok(Status::Poison),
            other => Err(format!("unknown status '{}'", other)),
        }
    }
}

/// Which of the two input combatants a value refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Position in the two-element combatant array
    pub fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }

    pub fn from_index(index: usize) -> Self {
        if index == 0 {
            Side::A
        } else {
            Side::B
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}
