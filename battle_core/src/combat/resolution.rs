//! Turn resolution - Scheduler, per-turn effects and termination

use super::event::BattleEvent;
use super::result::{BattleResult, CombatantSummary};
use super::state::CombatantState;
use super::status::assign_status;
use crate::config::BattleConstants;
use crate::error::BattleError;
use crate::rng::BattleRng;
use crate::stat_block::StatBlock;
use crate::types::{Side, Status};
use tracing::{debug, info};

/// Damage from one attack: `attack - defense / divisor`, floored at the minimum
pub fn attack_damage(attack: i64, defense: i64, constants: &BattleConstants) -> i64 {
    (attack - defense.div_euclid(constants.defense_divisor)).max(constants.minimum_damage)
}

/// Burn chip damage taken by the attacker, from its health before attacking
pub fn burn_damage(current_hp: i64, constants: &BattleConstants) -> i64 {
    current_hp
        .div_euclid(constants.burn_chip_divisor)
        .max(constants.minimum_damage)
}

/// Poison damage taken by the defender, from its health after being hit
pub fn poison_damage(current_hp: i64, stacks: u32, constants: &BattleConstants) -> i64 {
    current_hp
        .saturating_mul(i64::from(stacks))
        .div_euclid(constants.poison_divisor)
        .max(constants.minimum_damage)
}

/// One battle in progress
///
/// Both combatants live in a two-element array and `attacker` indexes the
/// side acting this turn. Roles swap after every step.
#[derive(Debug, Clone)]
pub struct Battle<'a> {
    combatants: [CombatantState<'a>; 2],
    attacker: usize,
    constants: &'a BattleConstants,
    events: Vec<BattleEvent>,
    turns: u32,
}

impl<'a> Battle<'a> {
    /// Validate the rules and both combatants, assign statuses and fix
    /// initiative
    ///
    /// Validation happens before any random draw, so a bad record never
    /// consumes randomness.
    pub fn new<R: BattleRng + ?Sized>(
        a: &'a StatBlock,
        b: &'a StatBlock,
        constants: &'a BattleConstants,
        rng: &mut R,
    ) -> Result<Self, BattleError> {
        constants
            .validate()
            .map_err(|e| BattleError::InvalidRules(e.to_string()))?;
        let core_a = a.core_stats()?;
        let core_b = b.core_stats()?;

        let status_a = assign_status(rng);
        let status_b = assign_status(rng);

        let mut battle = Battle {
            combatants: [
                CombatantState::new(a, core_a, status_a),
                CombatantState::new(b, core_b, status_b),
            ],
            attacker: if core_a.outspeeds(&core_b) { 0 } else { 1 },
            constants,
            events: Vec::new(),
            turns: 0,
        };

        for index in 0..2 {
            if let Some(status) = battle.combatants[index].status {
                let name = battle.combatants[index].name().to_string();
                battle.events.push(BattleEvent::StatusAssigned {
                    side: Side::from_index(index),
                    name,
                    status,
                });
            }
        }

        info!(
            a = %a.name,
            b = %b.name,
            status_a = ?status_a,
            status_b = ?status_b,
            first = %battle.combatants[battle.attacker].name(),
            "battle started"
        );

        Ok(battle)
    }

    pub fn combatant(&self, side: Side) -> &CombatantState<'a> {
        &self.combatants[side.index()]
    }

    /// Side acting on the next step
    pub fn attacker(&self) -> Side {
        Side::from_index(self.attacker)
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Completed resolution steps
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Either side at or below zero health
    pub fn is_over(&self) -> bool {
        self.combatants.iter().any(|c| !c.is_alive())
    }

    /// Winner once the battle is over. Side A wins if both fell together.
    pub fn winner(&self) -> Option<Side> {
        if !self.is_over() {
            return None;
        }
        if self.combatants[0].is_alive() {
            Some(Side::A)
        } else {
            Some(Side::B)
        }
    }

    /// Resolve one turn from the current attacker's perspective
    ///
    /// Order: paralysis check, burn chip, attack, poison tick on the
    /// defender, role swap. Does nothing once the battle is over.
    pub fn step<R: BattleRng + ?Sized>(&mut self, rng: &mut R) {
        if self.is_over() {
            return;
        }

        let attacker = self.attacker;
        let defender = 1 - attacker;
        self.turns += 1;

        let skipped = self.combatants[attacker].has_status(Status::Paralysis)
            && rng.next_f64() < self.constants.paralysis_skip_chance;

        if skipped {
            self.events.push(BattleEvent::Paralyzed {
                side: Side::from_index(attacker),
                name: self.combatants[attacker].name().to_string(),
            });
        } else {
            self.resolve_attack(attacker, defender);
        }

        self.resolve_poison(defender);

        debug!(
            turn = self.turns,
            attacker = %self.combatants[attacker].name(),
            skipped,
            hp_a = self.combatants[0].current_hp,
            hp_b = self.combatants[1].current_hp,
            "turn resolved"
        );

        self.attacker = defender;
    }

    /// Step until one side falls, then assemble the result
    pub fn run<R: BattleRng + ?Sized>(mut self, rng: &mut R) -> BattleResult {
        while !self.is_over() {
            self.step(rng);
        }
        self.into_result()
    }

    fn resolve_attack(&mut self, attacker: usize, defender: usize) {
        let constants = self.constants;
        let mut attack = self.combatants[attacker].core.attack;

        if self.combatants[attacker].has_status(Status::Burn) {
            let halved = attack / 2;
            if constants.burn_halves_attack_damage {
                attack = halved;
            }

            let state = &mut self.combatants[attacker];
            let chip = burn_damage(state.current_hp, constants);
            state.current_hp = state.current_hp.saturating_sub(chip);
            self.events.push(BattleEvent::BurnDamage {
                side: Side::from_index(attacker),
                name: state.name().to_string(),
                amount: chip,
                hp_after: state.current_hp,
            });
        }

        let damage = attack_damage(attack, self.combatants[defender].core.defense, constants);
        let target = &mut self.combatants[defender];
        target.current_hp = target.current_hp.saturating_sub(damage);
        self.events.push(BattleEvent::Attack {
            side: Side::from_index(attacker),
            attacker: self.combatants[attacker].name().to_string(),
            defender: self.combatants[defender].name().to_string(),
            damage,
            defender_hp_after: self.combatants[defender].current_hp,
        });
    }

    fn resolve_poison(&mut self, defender: usize) {
        let constants = self.constants;
        let state = &mut self.combatants[defender];
        if !state.has_status(Status::Poison) {
            return;
        }

        state.poison_stacks += 1;
        let amount = poison_damage(state.current_hp, state.poison_stacks, constants);
        state.current_hp = state.current_hp.saturating_sub(amount);
        self.events.push(BattleEvent::PoisonDamage {
            side: Side::from_index(defender),
            name: state.name().to_string(),
            amount,
            stacks: state.poison_stacks,
            hp_after: state.current_hp,
        });
    }

    fn into_result(mut self) -> BattleResult {
        let winner_side = self.winner().unwrap_or(Side::A);
        let winner = self.combatants[winner_side.index()].name().to_string();
        self.events.push(BattleEvent::Winner {
            side: winner_side,
            name: winner.clone(),
        });

        info!(winner = %winner, turns = self.turns, "battle finished");

        let limit = self.constants.move_display_limit;
        let [a, b] = &self.combatants;
        BattleResult {
            pokemon1: CombatantSummary::from_stat_block(a.stat, limit),
            pokemon2: CombatantSummary::from_stat_block(b.stat, limit),
            battle_log: self.events.iter().map(ToString::to_string).collect(),
            winner,
            winner_side,
            turns: self.turns,
            final_hp: [a.current_hp, b.current_hp],
            statuses: [a.status, b.status],
            events: self.events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;

    fn fighter(name: &str, hp: i64, attack: i64, defense: i64, speed: i64) -> StatBlock {
        StatBlock::new(name).with_core_stats(hp, attack, defense, speed)
    }

    #[test]
    fn test_damage_formula() {
        let constants = BattleConstants::default();
        assert_eq!(attack_damage(50, 50, &constants), 25);
        assert_eq!(attack_damage(10, 200, &constants), 1);
        assert_eq!(attack_damage(0, 0, &constants), 1);
        assert_eq!(attack_damage(55, 41, &constants), 35);
    }

    #[test]
    fn test_chip_formulas() {
        let constants = BattleConstants::default();
        assert_eq!(burn_damage(100, &constants), 5);
        assert_eq!(burn_damage(19, &constants), 1);
        assert_eq!(poison_damage(100, 1, &constants), 5);
        assert_eq!(poison_damage(100, 3, &constants), 15);
        // Health already below zero still deals the minimum
        assert_eq!(poison_damage(-7, 2, &constants), 1);
    }

    #[test]
    fn test_faster_side_acts_first() {
        let constants = BattleConstants::default();
        let slow = fighter("slowpoke", 90, 65, 65, 15);
        let fast = fighter("jolteon", 65, 65, 60, 130);

        let mut rng = ScriptedRng::healthy();
        let battle = Battle::new(&slow, &fast, &constants, &mut rng).unwrap();
        assert_eq!(battle.attacker(), Side::B);
    }

    #[test]
    fn test_speed_tie_favors_side_a() {
        let constants = BattleConstants::default();
        let a = fighter("a", 50, 50, 50, 80);
        let b = fighter("b", 50, 50, 50, 80);

        let mut rng = ScriptedRng::healthy();
        let battle = Battle::new(&a, &b, &constants, &mut rng).unwrap();
        assert_eq!(battle.attacker(), Side::A);
    }

    #[test]
    fn test_roles_alternate() {
        let constants = BattleConstants::default();
        let a = fighter("a", 500, 30, 30, 80);
        let b = fighter("b", 500, 30, 30, 60);

        let mut rng = ScriptedRng::healthy();
        let mut battle = Battle::new(&a, &b, &constants, &mut rng).unwrap();
        for expected in [Side::A, Side::B, Side::A, Side::B] {
            assert_eq!(battle.attacker(), expected);
            battle.step(&mut rng);
        }
        assert_eq!(battle.turns(), 4);
    }

    #[test]
    fn test_status_events_in_side_order() {
        let constants = BattleConstants::default();
        let a = fighter("a", 50, 50, 50, 10);
        let b = fighter("b", 50, 50, 50, 90);

        let mut rng = ScriptedRng::new(Some(Status::Burn), Some(Status::Poison));
        let battle = Battle::new(&a, &b, &constants, &mut rng).unwrap();
        let lines: Vec<String> = battle.events().iter().map(ToString::to_string).collect();
        assert_eq!(lines, vec!["a is affected by burn!", "b is affected by poison!"]);
    }

    #[test]
    fn test_invalid_record_rejected() {
        let constants = BattleConstants::default();
        let a = fighter("a", 50, 50, 50, 10);
        let b = StatBlock::new("b").with_stat("hp", 10);

        let mut rng = ScriptedRng::new(Some(Status::Burn), None);
        let err = Battle::new(&a, &b, &constants, &mut rng).unwrap_err();
        assert!(matches!(err, BattleError::MissingStat { .. }));
    }

    #[test]
    fn test_invalid_rules_rejected() {
        let a = fighter("a", 50, 50, 50, 10);
        let b = fighter("b", 50, 50, 50, 90);

        for constants in [
            BattleConstants {
                defense_divisor: 0,
                ..Default::default()
            },
            BattleConstants {
                paralysis_skip_chance: 1.0,
                ..Default::default()
            },
            BattleConstants {
                minimum_damage: 0,
                ..Default::default()
            },
        ] {
            let mut rng = ScriptedRng::healthy();
            let err = Battle::new(&a, &b, &constants, &mut rng).unwrap_err();
            assert!(matches!(err, BattleError::InvalidRules(_)));
        }
    }

    #[test]
    fn test_poison_on_huge_health_saturates() {
        let constants = BattleConstants::default();
        let a = fighter("a", 100, 1, i64::MAX, 100);
        let b = fighter("b", i64::MAX, 1, 0, 50);

        let mut rng = ScriptedRng::new(None, Some(Status::Poison));
        let mut battle = Battle::new(&a, &b, &constants, &mut rng).unwrap();
        for _ in 0..3 {
            battle.step(&mut rng);
        }

        let defender = battle.combatant(Side::B);
        assert_eq!(defender.poison_stacks, 2);
        assert!(defender.is_alive());
        match battle.events().last() {
            Some(BattleEvent::PoisonDamage { amount, stacks: 2, .. }) => {
                assert_eq!(*amount, i64::MAX / 20);
            }
            other => panic!("expected a poison tick, got {:?}", other),
        }
    }

    #[test]
    fn test_paralysis_skip_still_ticks_poison() {
        let constants = BattleConstants::default();
        let a = fighter("a", 100, 50, 50, 100);
        let b = fighter("b", 100, 50, 50, 50);

        // A paralyzed and skips, B poisoned
        let mut rng =
            ScriptedRng::new(Some(Status::Paralysis), Some(Status::Poison)).with_rolls([0.1]);
        let mut battle = Battle::new(&a, &b, &constants, &mut rng).unwrap();
        battle.step(&mut rng);

        let lines: Vec<String> = battle.events()[2..].iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec!["a is paralyzed and cannot move!", "b is hurt by poison (-5 HP)!"]
        );
        assert_eq!(battle.combatant(Side::B).current_hp, 95);
        assert_eq!(battle.combatant(Side::B).poison_stacks, 1);
    }

    #[test]
    fn test_burn_chip_precedes_attack() {
        let constants = BattleConstants::default();
        let a = fighter("a", 100, 50, 50, 100);
        let b = fighter("b", 100, 50, 50, 50);

        let mut rng = ScriptedRng::new(Some(Status::Burn), None);
        let mut battle = Battle::new(&a, &b, &constants, &mut rng).unwrap();
        battle.step(&mut rng);

        let lines: Vec<String> = battle.events()[1..].iter().map(ToString::to_string).collect();
        // Damage uses the unhalved attack stat
        assert_eq!(lines, vec!["a is hurt by burn (-5 HP)!", "a hits b for 25 damage!"]);
        assert_eq!(battle.combatant(Side::A).current_hp, 95);
        assert_eq!(battle.combatant(Side::B).current_hp, 75);
    }

    #[test]
    fn test_burn_halving_when_enabled() {
        let constants = BattleConstants {
            burn_halves_attack_damage: true,
            ..Default::default()
        };
        let a = fighter("a", 100, 50, 50, 100);
        let b = fighter("b", 100, 50, 50, 50);

        let mut rng = ScriptedRng::new(Some(Status::Burn), None);
        let mut battle = Battle::new(&a, &b, &constants, &mut rng).unwrap();
        battle.step(&mut rng);

        // 50 / 2 - 50 / 2 = 0, floored to 1
        assert_eq!(battle.combatant(Side::B).current_hp, 99);
    }

    #[test]
    fn test_poison_uses_post_hit_health() {
        let constants = BattleConstants::default();
        let a = fighter("a", 100, 50, 50, 100);
        let b = fighter("b", 100, 50, 50, 50);

        let mut rng = ScriptedRng::new(None, Some(Status::Poison));
        let mut battle = Battle::new(&a, &b, &constants, &mut rng).unwrap();
        battle.step(&mut rng);

        // 100 - 25 = 75, then 75 * 1 / 20 = 3
        assert_eq!(battle.combatant(Side::B).current_hp, 72);
    }

    #[test]
    fn test_step_after_finish_is_noop() {
        let constants = BattleConstants::default();
        let a = fighter("a", 100, 200, 50, 100);
        let b = fighter("b", 10, 10, 10, 50);

        let mut rng = ScriptedRng::healthy();
        let mut battle = Battle::new(&a, &b, &constants, &mut rng).unwrap();
        battle.step(&mut rng);
        assert!(battle.is_over());
        assert_eq!(battle.winner(), Some(Side::A));

        let events = battle.events().len();
        battle.step(&mut rng);
        assert_eq!(battle.turns(), 1);
        assert_eq!(battle.events().len(), events);
    }

    #[test]
    fn test_mutual_knockout_favors_side_a() {
        let constants = BattleConstants::default();
        // A is burned at 1 hp: the chip drops it to 0, then its hit knocks B out
        let a = fighter("a", 1, 100, 10, 100);
        let b = fighter("b", 10, 10, 10, 50);

        let mut rng = ScriptedRng::new(Some(Status::Burn), None);
        let result = Battle::new(&a, &b, &constants, &mut rng).unwrap().run(&mut rng);

        assert!(result.final_hp[0] <= 0 && result.final_hp[1] <= 0);
        assert_eq!(result.winner, "a");
        assert_eq!(result.winner_side, Side::A);
    }
}
