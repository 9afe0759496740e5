//! Application state

use battle_core::{
    BattleEngine, BattleError, BattleEvent, BattleResult, ForcedStatusRng, Side, StatBlock, Status,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Battle,
    Combatants,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Battle, Tab::Combatants, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Battle => "Battle",
            Tab::Combatants => "Combatants",
            Tab::Help => "Help",
        }
    }
}

pub struct App {
    pub current_tab: Tab,
    pub combatants: [StatBlock; 2],
    pub engine: BattleEngine,
    pub forced: [Option<Option<Status>>; 2],
    pub seed: u64,
    pub result: BattleResult,
    /// Events shown so far in the replay
    pub revealed: usize,
    pub log_scroll: usize,
    pub stats_scroll: usize,
}

impl App {
    /// Run the first battle and start the replay at the beginning
    pub fn new(
        combatants: [StatBlock; 2],
        engine: BattleEngine,
        forced: [Option<Option<Status>>; 2],
        seed: u64,
    ) -> Result<Self, BattleError> {
        let result = Self::simulate(&engine, &combatants, forced, seed)?;
        Ok(App {
            current_tab: Tab::Battle,
            combatants,
            engine,
            forced,
            seed,
            result,
            revealed: 0,
            log_scroll: 0,
            stats_scroll: 0,
        })
    }

    fn simulate(
        engine: &BattleEngine,
        combatants: &[StatBlock; 2],
        forced: [Option<Option<Status>>; 2],
        seed: u64,
    ) -> Result<BattleResult, BattleError> {
        let mut rng = ForcedStatusRng::new(ChaCha8Rng::seed_from_u64(seed), forced[0], forced[1]);
        engine.run(&combatants[0], &combatants[1], &mut rng)
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let next_idx = (current_idx + 1) % tabs.len();
        self.current_tab = tabs[next_idx];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.current_tab = tabs[prev_idx];
    }

    pub fn set_tab(&mut self, index: usize) {
        let tabs = Tab::all();
        if index < tabs.len() {
            self.current_tab = tabs[index];
        }
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Battle => self.log_scroll = self.log_scroll.saturating_sub(1),
            Tab::Combatants => self.stats_scroll = self.stats_scroll.saturating_sub(1),
            Tab::Help => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Battle => {
                if self.log_scroll + 1 < self.revealed {
                    self.log_scroll += 1;
                }
            }
            Tab::Combatants => self.stats_scroll += 1,
            Tab::Help => {}
        }
    }

    /// Reveal the next event
    pub fn step_forward(&mut self) {
        if self.revealed < self.result.events.len() {
            self.revealed += 1;
        }
    }

    /// Hide the most recent event
    pub fn step_back(&mut self) {
        self.revealed = self.revealed.saturating_sub(1);
        self.log_scroll = self.log_scroll.min(self.revealed.saturating_sub(1));
    }

    pub fn reveal_all(&mut self) {
        self.revealed = self.result.events.len();
    }

    pub fn is_finished(&self) -> bool {
        self.revealed >= self.result.events.len()
    }

    /// Run a fresh battle with the next seed and restart the replay
    pub fn rerun(&mut self) -> Result<(), BattleError> {
        let seed = self.seed.wrapping_add(1);
        self.result = Self::simulate(&self.engine, &self.combatants, self.forced, seed)?;
        self.seed = seed;
        self.revealed = 0;
        self.log_scroll = 0;
        Ok(())
    }

    pub fn visible_events(&self) -> &[BattleEvent] {
        &self.result.events[..self.revealed]
    }

    pub fn max_hp(&self, side: Side) -> i64 {
        self.combatants[side.index()].stat("hp").unwrap_or(0)
    }

    /// Health of each side as of the last revealed event
    pub fn hp_at_cursor(&self) -> [i64; 2] {
        let mut hp = [self.max_hp(Side::A), self.max_hp(Side::B)];
        for event in self.visible_events() {
            if let Some((side, after)) = event.hp_change() {
                hp[side.index()] = after;
            }
        }
        hp
    }
}
