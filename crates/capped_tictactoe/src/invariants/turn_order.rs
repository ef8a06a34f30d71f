//! Turn order invariant: X never falls behind and never gets two ahead.

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: X holds as many marks as O or one more, and while the game
/// runs X is to move exactly when the counts are level.
///
/// Both handicap modes keep this balance: Mode 1 forces an X right after
/// O's first turn, Mode 2 forces an X and then an O.
pub struct TurnOrderInvariant;

impl Invariant<GameState> for TurnOrderInvariant {
    fn holds(game: &GameState) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        if x != o && x != o + 1 {
            return false;
        }
        if game.status().is_over() {
            return true;
        }
        let expected = if x == o { Player::X } else { Player::O };
        game.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate with X moving first"
    }
}
