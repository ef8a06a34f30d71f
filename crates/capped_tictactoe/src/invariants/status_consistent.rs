//! Status invariant: the recorded status agrees with the board.

use super::Invariant;
use crate::rules::{LINES, check_winner, is_full};
use crate::{GameState, GameStatus, Square};

/// Invariant: `Won(p)` has a line of `p`, `Draw` is a full board with no
/// line, and `InProgress` has neither.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        match game.status() {
            GameStatus::Won(player) => LINES
                .iter()
                .any(|line| line.iter().all(|pos| board.get(*pos) == Square::Occupied(player))),
            GameStatus::Draw => is_full(board) && check_winner(board).is_none(),
            GameStatus::InProgress => !is_full(board) && check_winner(board).is_none(),
        }
    }

    fn description() -> &'static str {
        "Game status agrees with the board"
    }
}
