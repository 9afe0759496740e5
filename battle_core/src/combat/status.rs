//! Status assignment at battle start

use crate::rng::BattleRng;
use crate::types::Status;

/// Draw one status uniformly from paralysis, burn, poison and none
pub fn assign_status<R: BattleRng + ?Sized>(rng: &mut R) -> Option<Status> {
    Status::CHOICES[rng.choose_index(Status::CHOICES.len())]
}
