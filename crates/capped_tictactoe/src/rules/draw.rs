//! Draw detection logic for tic-tac-toe.

use tracing::instrument;

use super::win::check_winner;
use crate::{Board, Square};

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A draw is a full board with no winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    fn fill(pattern: &str) -> Board {
        let mut board = Board::new();
        for (pos, c) in Position::ALL.iter().zip(pattern.chars()) {
            match c {
                'X' => board.set(*pos, Square::Occupied(Player::X)),
                'O' => board.set(*pos, Square::Occupied(Player::O)),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&fill("X...O....")));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let board = fill("XOXXOOOXX");
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // Full board where X holds the diagonal.
        let board = fill("XOOOXXOXX");
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_every_full_board_is_draw_or_win() {
        // All 2^9 fills: a full board is a draw exactly when nobody has a line.
        for mask in 0u16..512 {
            let mut board = Board::new();
            for pos in Position::ALL {
                let player = if mask & (1 << pos.to_index()) != 0 {
                    Player::X
                } else {
                    Player::O
                };
                board.set(pos, Square::Occupied(player));
            }
            assert_eq!(is_draw(&board), check_winner(&board).is_none());
        }
    }
}
