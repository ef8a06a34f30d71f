//! Game state and its pure transition function.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::contracts::{Contract, MoveContract};
use crate::handicap::{HANDICAP_TURN, random_empty};
use crate::{Board, EngineError, GameStatus, Mode, Outcome, Player, Position, Square, rules};

/// Complete state of one game.
///
/// Only [`select_mode`] creates a state and only [`GameState::apply_move`]
/// advances it, so the board is never edited from outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    mode: Mode,
    current_player: Player,
    turn_count: u32,
    status: GameStatus,
}

/// Starts a fresh game: empty board, X to move, nothing played.
#[instrument]
pub fn select_mode(mode: Mode) -> GameState {
    info!(%mode, "New game");
    GameState {
        board: Board::new(),
        mode,
        current_player: Player::X,
        turn_count: 0,
        status: GameStatus::InProgress,
    }
}

impl GameState {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mode chosen for this game.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Marks placed so far, forced moves included.
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Places the current player's mark at `index`, then runs win, draw and
    /// handicap sequencing.
    ///
    /// An occupied square is not an error: the state comes back unchanged
    /// with [`Outcome::IgnoredOccupied`].
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidIndex`] when `index` is outside 0-8.
    /// - [`EngineError::InvalidModeTransition`] when the game is already over.
    /// - [`EngineError::InvariantViolation`] when a postcondition fails (debug builds).
    #[instrument(skip(self, rng), fields(mode = %self.mode, player = %self.current_player, turn = self.turn_count))]
    pub fn apply_move<R: Rng + ?Sized>(
        self,
        index: usize,
        rng: &mut R,
    ) -> Result<(GameState, Outcome), EngineError> {
        MoveContract::pre(&self, &index)?;
        let pos = Position::from_index(index).ok_or(EngineError::InvalidIndex(index))?;

        if !self.board.is_empty(pos) {
            debug!(%pos, "Square occupied, ignoring move");
            return Ok((self, Outcome::IgnoredOccupied));
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        let outcome = game.advance(pos, rng);

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        info!(%pos, %outcome, turn = game.turn_count, next = %game.current_player, "Move applied");
        Ok((game, outcome))
    }

    fn advance<R: Rng + ?Sized>(&mut self, pos: Position, rng: &mut R) -> Outcome {
        let player = self.current_player;
        if let Some(outcome) = self.place(pos, player) {
            return outcome;
        }

        if self.turn_count != HANDICAP_TURN {
            self.current_player = player.opponent();
            return Outcome::Continue;
        }

        for &forced in self.mode.forced_players() {
            match random_empty(&self.board, rng) {
                Some(target) => {
                    info!(player = %forced, %target, "Forced random move");
                    if let Some(outcome) = self.place(target, forced) {
                        self.current_player = forced;
                        return outcome;
                    }
                }
                None => debug!(player = %forced, "No empty square, forced move skipped"),
            }
            self.current_player = forced.opponent();
        }
        Outcome::Continue
    }

    /// Sets one square and settles win/draw. Returns the outcome if the game ended.
    fn place(&mut self, pos: Position, player: Player) -> Option<Outcome> {
        self.board.set(pos, Square::Occupied(player));
        self.turn_count += 1;

        if let Some(winner) = rules::check_winner(&self.board) {
            self.status = GameStatus::Won(winner);
            Some(Outcome::Win(winner))
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
