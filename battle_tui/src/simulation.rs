//! Win-rate simulation over many seeded battles

use battle_core::{BattleEngine, BattleError, ForcedStatusRng, Side, StatBlock, Status};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Aggregate outcome of repeated battles between the same pair
pub struct WinRateSimulation {
    pub battles: u32,
    pub wins: [u32; 2],
    pub total_turns: u64,
    pub longest: u32,
}

impl WinRateSimulation {
    /// Run `battles` battles; battle `i` uses seed `seed + i`
    pub fn run(
        engine: &BattleEngine,
        a: &StatBlock,
        b: &StatBlock,
        forced: [Option<Option<Status>>; 2],
        battles: u32,
        seed: u64,
    ) -> Result<Self, BattleError> {
        let mut sim = WinRateSimulation {
            battles: 0,
            wins: [0, 0],
            total_turns: 0,
            longest: 0,
        };

        for i in 0..battles {
            let inner = ChaCha8Rng::seed_from_u64(seed.wrapping_add(u64::from(i)));
            let mut rng = ForcedStatusRng::new(inner, forced[0], forced[1]);
            let result = engine.run(a, b, &mut rng)?;

            sim.battles += 1;
            sim.wins[result.winner_side.index()] += 1;
            sim.total_turns += u64::from(result.turns);
            sim.longest = sim.longest.max(result.turns);
        }

        Ok(sim)
    }

    /// Percentage of battles won by `side`
    pub fn win_rate(&self, side: Side) -> f64 {
        if self.battles > 0 {
            self.wins[side.index()] as f64 / self.battles as f64 * 100.0
        } else {
            0.0
        }
    }

    pub fn avg_turns(&self) -> f64 {
        if self.battles > 0 {
            self.total_turns as f64 / self.battles as f64
        } else {
            0.0
        }
    }

    /// Printable report lines
    pub fn report(&self, a: &str, b: &str) -> Vec<String> {
        vec![
            format!("Battles: {}", self.battles),
            format!("{}: {} wins ({:.1}%)", a, self.wins[0], self.win_rate(Side::A)),
            format!("{}: {} wins ({:.1}%)", b, self.wins[1], self.win_rate(Side::B)),
            format!("Average turns: {:.2} (longest {})", self.avg_turns(), self.longest),
        ]
    }
}
