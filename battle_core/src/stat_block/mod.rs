//! StatBlock - Normalized combatant record consumed by the engine

mod core_stats;

pub use core_stats::CoreStats;

use crate::error::BattleError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stat keys every combatant must carry
pub const REQUIRED_STATS: [&str; 4] = ["hp", "attack", "defense", "speed"];

/// Complete record for one combatant. Immutable for the duration of a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    /// Unique identifier
    pub name: String,
    /// Type tags in slot order (informational)
    #[serde(default)]
    pub types: Vec<String>,
    /// Stat name to base value
    pub stats: BTreeMap<String, i64>,
    #[serde(default)]
    pub abilities: Vec<String>,
    #[serde(default)]
    pub moves: Vec<String>,
    #[serde(default, alias = "evolutionChain")]
    pub evolution_chain: Vec<String>,
}

impl StatBlock {
    /// Create a record with no stats
    pub fn new(name: impl Into<String>) -> Self {
        StatBlock {
            name: name.into(),
            types: Vec::new(),
            stats: BTreeMap::new(),
            abilities: Vec::new(),
            moves: Vec::new(),
            evolution_chain: Vec::new(),
        }
    }

    /// Builder shorthand for the four combat stats
    pub fn with_core_stats(mut self, hp: i64, attack: i64, defense: i64, speed: i64) -> Self {
        self.stats.insert("hp".to_string(), hp);
        self.stats.insert("attack".to_string(), attack);
        self.stats.insert("defense".to_string(), defense);
        self.stats.insert("speed".to_string(), speed);
        self
    }

    pub fn with_stat(mut self, name: impl Into<String>, value: i64) -> Self {
        self.stats.insert(name.into(), value);
        self
    }

    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_moves<I, S>(mut self, moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.moves = moves.into_iter().map(Into::into).collect();
        self
    }

    /// Look up a stat, failing if it is absent
    pub fn stat(&self, name: &str) -> Result<i64, BattleError> {
        self.stats
            .get(name)
            .copied()
            .ok_or_else(|| BattleError::MissingStat {
                combatant: self.name.clone(),
                stat: name.to_string(),
            })
    }

    /// Extract and validate the stats used by combat math
    ///
    /// Missing keys are reported before invalid values, in
    /// [`REQUIRED_STATS`] order.
    pub fn core_stats(&self) -> Result<CoreStats, BattleError> {
        let hp = self.stat("hp")?;
        let attack = self.stat("attack")?;
        let defense = self.stat("defense")?;
        let speed = self.stat("speed")?;

        let invalid = |stat: &str, value: i64| BattleError::InvalidStat {
            combatant: self.name.clone(),
            stat: stat.to_string(),
            value,
        };

        if hp <= 0 {
            return Err(invalid("hp", hp));
        }
        for (stat, value) in [("attack", attack), ("defense", defense), ("speed", speed)] {
            if value < 0 {
                return Err(invalid(stat, value));
            }
        }

        Ok(CoreStats {
            hp,
            attack,
            defense,
            speed,
        })
    }
}
