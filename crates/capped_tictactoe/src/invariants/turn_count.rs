//! Turn count invariant: every mark on the board was counted.

use super::Invariant;
use crate::GameState;

/// Invariant: `turn_count` equals the number of occupied squares.
///
/// Forced moves count like human ones, so the counter can never drift
/// from the board.
pub struct TurnCountInvariant;

impl Invariant<GameState> for TurnCountInvariant {
    fn holds(game: &GameState) -> bool {
        game.turn_count() as usize == game.board().filled()
    }

    fn description() -> &'static str {
        "Turn count matches occupied squares"
    }
}
