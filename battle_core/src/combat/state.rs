//! CombatantState - Mutable per-battle state for one side

use crate::stat_block::{CoreStats, StatBlock};
use crate::types::Status;

/// Live state of one combatant. Created at battle start, dropped at the end.
#[derive(Debug, Clone)]
pub struct CombatantState<'a> {
    pub stat: &'a StatBlock,
    pub core: CoreStats,
    /// May go negative; the battle ends once it is <= 0
    pub current_hp: i64,
    pub status: Option<Status>,
    /// Turns spent defending while poisoned. Never decreases.
    pub poison_stacks: u32,
}

impl<'a> CombatantState<'a> {
    pub fn new(stat: &'a StatBlock, core: CoreStats, status: Option<Status>) -> Self {
        CombatantState {
            stat,
            core,
            current_hp: core.hp,
            status,
            poison_stacks: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.stat.name
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn has_status(&self, status: Status) -> bool {
        self.status == Some(status)
    }

    /// Current health as a percentage of starting health
    pub fn hp_percent(&self) -> f64 {
        (self.current_hp.max(0) as f64 / self.core.hp as f64 * 100.0).clamp(0.0, 100.0)
    }
}
