//! Validated combat stats

use serde::{Deserialize, Serialize};

/// The four stats the damage formula and scheduler read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreStats {
    pub hp: i64,
    pub attack: i64,
    pub defense: i64,
    pub speed: i64,
}

impl CoreStats {
    /// Whether this combatant takes the first turn against `other`.
    /// Ties go to `self`, so call it from side A.
    pub fn outspeeds(&self, other: &CoreStats) -> bool {
        self.speed >= other.speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(speed: i64) -> CoreStats {
        CoreStats {
            hp: 10,
            attack: 10,
            defense: 10,
            speed,
        }
    }

    #[test]
    fn test_speed_tie_favors_caller() {
        assert!(stats(50).outspeeds(&stats(50)));
        assert!(stats(51).outspeeds(&stats(50)));
        assert!(!stats(49).outspeeds(&stats(50)));
    }
}
