//! Forced random moves injected by the handicap modes.

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

use crate::{Board, Mode, Player, Position};

/// Turn count (after the human move) at which the handicap fires.
///
/// Two marks on the board means both players have had their first turn,
/// so the forced moves stand in for their second turns.
pub const HANDICAP_TURN: u32 = 2;

impl Mode {
    /// Symbols placed at random when the handicap fires, in placement order.
    pub fn forced_players(self) -> &'static [Player] {
        match self {
            Mode::Mode1 => &[Player::X],
            Mode::Mode2 => &[Player::X, Player::O],
        }
    }
}

/// Picks a uniformly random empty square, `None` when the board is full.
#[instrument(skip(board, rng))]
pub fn random_empty<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let empty = board.empty_positions();
    let choice = empty.choose(rng).copied();
    debug!(candidates = empty.len(), ?choice, "Picked random square");
    choice
}
