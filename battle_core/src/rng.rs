//! Random source used by status assignment and paralysis checks
//!
//! Every probabilistic choice in a battle goes through [`BattleRng`], so a
//! seeded generator or a [`ScriptedRng`] reproduces a battle exactly.

use crate::types::Status;
use rand::Rng;
use std::collections::VecDeque;

/// Randomness capability injected into the engine
pub trait BattleRng {
    /// Uniform index in `0..len`. `len` is never zero.
    fn choose_index(&mut self, len: usize) -> usize;

    /// Uniform float in `[0, 1)`
    fn next_f64(&mut self) -> f64;
}

impl<R: Rng> BattleRng for R {
    fn choose_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Deterministic random source with forced statuses and scripted rolls
///
/// The first two choices return the forced statuses for side A and side B.
/// Float rolls are consumed in order; once the queue is empty the fallback
/// roll is returned forever.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    choices: VecDeque<usize>,
    rolls: VecDeque<f64>,
    fallback_roll: f64,
}

impl ScriptedRng {
    /// Force both statuses. Paralysis rolls default to never skipping.
    pub fn new(status_a: Option<Status>, status_b: Option<Status>) -> Self {
        ScriptedRng {
            choices: VecDeque::from(vec![
                Status::choice_index(status_a),
                Status::choice_index(status_b),
            ]),
            rolls: VecDeque::new(),
            fallback_roll: 0.99,
        }
    }

    /// No status on either side
    pub fn healthy() -> Self {
        Self::new(None, None)
    }

    /// Queue float rolls consumed by paralysis checks
    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = f64>) -> Self {
        self.rolls.extend(rolls);
        self
    }

    /// Roll returned after the queue runs dry
    pub fn with_fallback_roll(mut self, roll: f64) -> Self {
        self.fallback_roll = roll;
        self
    }

    /// Number of queued rolls not yet consumed
    pub fn remaining_rolls(&self) -> usize {
        self.rolls.len()
    }
}

impl BattleRng for ScriptedRng {
    fn choose_index(&mut self, len: usize) -> usize {
        self.choices.pop_front().unwrap_or(len - 1) % len
    }

    fn next_f64(&mut self) -> f64 {
        self.rolls.pop_front().unwrap_or(self.fallback_roll)
    }
}

/// Random source that overrides some status draws and delegates the rest
///
/// `None` leaves that side's draw to the inner generator, `Some(status)`
/// forces it. Paralysis rolls always come from the inner generator.
#[derive(Debug, Clone)]
pub struct ForcedStatusRng<R> {
    inner: R,
    forced: VecDeque<Option<usize>>,
}

impl<R> ForcedStatusRng<R> {
    pub fn new(
        inner: R,
        status_a: Option<Option<Status>>,
        status_b: Option<Option<Status>>,
    ) -> Self {
        ForcedStatusRng {
            inner,
            forced: [status_a, status_b]
                .into_iter()
                .map(|forced| forced.map(Status::choice_index))
                .collect(),
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: BattleRng> BattleRng for ForcedStatusRng<R> {
    fn choose_index(&mut self, len: usize) -> usize {
        match self.forced.pop_front() {
            Some(Some(index)) => index % len,
            _ => self.inner.choose_index(len),
        }
    }

    fn next_f64(&mut self) -> f64 {
        self.inner.next_f64()
    }
}
