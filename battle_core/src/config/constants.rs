//! Battle rule constants

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Tunable battle rules. Defaults reproduce the reference battle exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleConstants {
    /// Chance a paralyzed attacker loses its turn
    #[serde(default = "default_paralysis_skip_chance")]
    pub paralysis_skip_chance: f64,
    /// Burn chip damage = current hp / divisor
    #[serde(default = "default_divisor")]
    pub burn_chip_divisor: i64,
    /// Poison damage = current hp * stacks / divisor
    #[serde(default = "default_divisor")]
    pub poison_divisor: i64,
    /// Attack damage = attack - defense / divisor
    #[serde(default = "default_defense_divisor")]
    pub defense_divisor: i64,
    /// Floor applied to every damage and chip amount
    #[serde(default = "default_minimum_damage")]
    pub minimum_damage: i64,
    /// Moves kept per combatant in the battle result
    #[serde(default = "default_move_display_limit")]
    pub move_display_limit: usize,
    /// Feed the burn-halved attack stat into the damage formula.
    /// Off by default: the halved value is computed but not used.
    #[serde(default)]
    pub burn_halves_attack_damage: bool,
}

impl Default for BattleConstants {
    fn default() -> Self {
        BattleConstants {
            paralysis_skip_chance: default_paralysis_skip_chance(),
            burn_chip_divisor: default_divisor(),
            poison_divisor: default_divisor(),
            defense_divisor: default_defense_divisor(),
            minimum_damage: default_minimum_damage(),
            move_display_limit: default_move_display_limit(),
            burn_halves_attack_damage: false,
        }
    }
}

fn default_paralysis_skip_chance() -> f64 {
    0.25
}
fn default_divisor() -> i64 {
    20
}
fn default_defense_divisor() -> i64 {
    2
}
fn default_minimum_damage() -> i64 {
    1
}
fn default_move_display_limit() -> usize {
    7
}

impl BattleConstants {
    /// Reject rules that would stall the turn loop or divide by zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.paralysis_skip_chance) {
            return Err(ConfigError::ValidationError(format!(
                "paralysis_skip_chance must be in [0, 1), got {}",
                self.paralysis_skip_chance
            )));
        }
        for (name, value) in [
            ("burn_chip_divisor", self.burn_chip_divisor),
            ("poison_divisor", self.poison_divisor),
            ("defense_divisor", self.defense_divisor),
            ("minimum_damage", self.minimum_damage),
        ] {
            if value < 1 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be at least 1, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let constants = BattleConstants::default();
        assert!((constants.paralysis_skip_chance - 0.25).abs() < f64::EPSILON);
        assert_eq!(constants.burn_chip_divisor, 20);
        assert_eq!(constants.poison_divisor, 20);
        assert_eq!(constants.defense_divisor, 2);
        assert_eq!(constants.minimum_damage, 1);
        assert_eq!(constants.move_display_limit, 7);
        assert!(!constants.burn_halves_attack_damage);
        assert!(constants.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_constants() {
        let toml = r#"
move_display_limit = 4
burn_halves_attack_damage = true
"#;

        let constants: BattleConstants = toml::from_str(toml).unwrap();
        assert_eq!(constants.move_display_limit, 4);
        assert!(constants.burn_halves_attack_damage);
        assert_eq!(constants.poison_divisor, 20);
    }

    #[test]
    fn test_certain_paralysis_rejected() {
        let constants = BattleConstants {
            paralysis_skip_chance: 1.0,
            ..Default::default()
        };
        assert!(constants.validate().is_err());
    }

    #[test]
    fn test_zero_minimum_damage_rejected() {
        let constants = BattleConstants {
            minimum_damage: 0,
            ..Default::default()
        };
        assert!(constants.validate().is_err());
    }
}
