//! BattleResult - Outcome of a completed battle

use super::event::BattleEvent;
use crate::stat_block::StatBlock;
use crate::types::{Side, Status};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pass-through view of one combatant's record, with moves truncated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantSummary {
    pub name: String,
    pub types: Vec<String>,
    pub stats: BTreeMap<String, i64>,
    pub abilities: Vec<String>,
    /// First `move_limit` moves in original order
    pub moves: Vec<String>,
    pub evolution_chain: Vec<String>,
}

impl CombatantSummary {
    pub fn from_stat_block(block: &StatBlock, move_limit: usize) -> Self {
        CombatantSummary {
            name: block.name.clone(),
            types: block.types.clone(),
            stats: block.stats.clone(),
            abilities: block.abilities.clone(),
            moves: block.moves.iter().take(move_limit).cloned().collect(),
            evolution_chain: block.evolution_chain.clone(),
        }
    }
}

/// Result of running a battle to completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleResult {
    pub pokemon1: CombatantSummary,
    pub pokemon2: CombatantSummary,
    /// One line per event, chronological
    pub battle_log: Vec<String>,
    /// Name of the winning combatant
    pub winner: String,
    pub winner_side: Side,
    /// Resolution steps taken
    pub turns: u32,
    /// Health at the end, per side. May be negative.
    pub final_hp: [i64; 2],
    pub statuses: [Option<Status>; 2],
    pub events: Vec<BattleEvent>,
}

impl BattleResult {
    pub fn combatant(&self, side: Side) -> &CombatantSummary {
        match side {
            Side::A => &self.pokemon1,
            Side::B => &self.pokemon2,
        }
    }

    pub fn loser(&self) -> &CombatantSummary {
        self.combatant(self.winner_side.opponent())
    }

    /// Total damage each side received from attacks, burn and poison
    pub fn damage_taken(&self) -> [i64; 2] {
        let mut totals = [0i64; 2];
        for event in &self.events {
            match event {
                BattleEvent::BurnDamage { side, amount, .. }
                | BattleEvent::PoisonDamage { side, amount, .. } => totals[side.index()] += amount,
                BattleEvent::Attack { side, damage, .. } => {
                    totals[side.opponent().index()] += damage
                }
                _ => {}
            }
        }
        totals
    }

    /// One-line description of the outcome
    pub fn summary(&self) -> String {
        let winner_hp = self.final_hp[self.winner_side.index()];
        format!(
            "{} defeated {} in {} turns ({} HP left)",
            self.winner,
            self.loser().name,
            self.turns,
            winner_hp.max(0)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_truncates_moves() {
        let block = StatBlock::new("mew")
            .with_core_stats(100, 100, 100, 100)
            .with_moves((1..=10).map(|i| format!("move-{}", i)));

        let summary = CombatantSummary::from_stat_block(&block, 7);
        assert_eq!(summary.moves.len(), 7);
        assert_eq!(summary.moves[0], "move-1");
        assert_eq!(summary.moves[6], "move-7");
    }

    #[test]
    fn test_summary_keeps_short_move_lists() {
        let block = StatBlock::new("magikarp").with_moves(["splash", "tackle"]);
        let summary = CombatantSummary::from_stat_block(&block, 7);
        assert_eq!(summary.moves, vec!["splash", "tackle"]);
    }

    fn sample_result() -> BattleResult {
        let a = StatBlock::new("a").with_core_stats(30, 20, 10, 5);
        let b = StatBlock::new("b").with_core_stats(30, 20, 10, 5);
        BattleResult {
            pokemon1: CombatantSummary::from_stat_block(&a, 7),
            pokemon2: CombatantSummary::from_stat_block(&b, 7),
            battle_log: Vec::new(),
            winner: "b".to_string(),
            winner_side: Side::B,
            turns: 2,
            final_hp: [-3, 12],
            statuses: [Some(Status::Burn), None],
            events: vec![
                BattleEvent::BurnDamage {
                    side: Side::A,
                    name: "a".to_string(),
                    amount: 1,
                    hp_after: 29,
                },
                BattleEvent::Attack {
                    side: Side::A,
                    attacker: "a".to_string(),
                    defender: "b".to_string(),
                    damage: 18,
                    defender_hp_after: 12,
                },
                BattleEvent::Attack {
                    side: Side::B,
                    attacker: "b".to_string(),
                    defender: "a".to_string(),
                    damage: 32,
                    defender_hp_after: -3,
                },
            ],
        }
    }

    #[test]
    fn test_damage_taken_totals() {
        let result = sample_result();
        assert_eq!(result.damage_taken(), [33, 18]);
    }

    #[test]
    fn test_result_summary() {
        let result = sample_result();
        assert_eq!(result.loser().name, "a");
        assert_eq!(result.summary(), "b defeated a in 2 turns (12 HP left)");
    }
}
