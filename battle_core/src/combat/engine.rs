//! Battle entry points

use super::resolution::Battle;
use super::result::BattleResult;
use crate::config::{BattleConstants, ConfigError};
use crate::error::BattleError;
use crate::rng::BattleRng;
use crate::stat_block::StatBlock;

/// Runs battles under a fixed set of rules
#[derive(Debug, Clone, Default)]
pub struct BattleEngine {
    constants: BattleConstants,
}

impl BattleEngine {
    /// Build an engine, rejecting rules that could stall or divide by zero
    pub fn new(constants: BattleConstants) -> Result<Self, ConfigError> {
        constants.validate()?;
        Ok(BattleEngine { constants })
    }

    pub fn constants(&self) -> &BattleConstants {
        &self.constants
    }

    /// Run a full battle between side A and side B
    pub fn run<R: BattleRng + ?Sized>(
        &self,
        a: &StatBlock,
        b: &StatBlock,
        rng: &mut R,
    ) -> Result<BattleResult, BattleError> {
        let battle = Battle::new(a, b, &self.constants, rng)?;
        Ok(battle.run(rng))
    }
}

/// Run a battle with default rules and the thread-local RNG
pub fn run_battle(a: &StatBlock, b: &StatBlock) -> Result<BattleResult, BattleError> {
    let mut rng = rand::thread_rng();
    run_battle_with_rng(a, b, &mut rng)
}

/// Run a battle with default rules and a provided RNG (for deterministic testing)
pub fn run_battle_with_rng<R: BattleRng + ?Sized>(
    a: &StatBlock,
    b: &StatBlock,
    rng: &mut R,
) -> Result<BattleResult, BattleError> {
    BattleEngine::default().run(a, b, rng)
}
