//! Contract-based validation for engine transitions.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}

use tracing::{instrument, warn};

use crate::invariants::{InvariantSet, TicTacToeInvariants};
use crate::{EngineError, GameState, Position, Square};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), EngineError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), EngineError>;
}

/// Precondition: the index names a square.
pub struct IndexInRange;

impl IndexInRange {
    /// Fails with [`EngineError::InvalidIndex`] outside 0-8.
    #[instrument]
    pub fn check(index: usize) -> Result<(), EngineError> {
        match Position::from_index(index) {
            Some(_) => Ok(()),
            None => Err(EngineError::InvalidIndex(index)),
        }
    }
}

/// Precondition: the game is still being played.
pub struct GameInProgress;

impl GameInProgress {
    /// Fails with [`EngineError::InvalidModeTransition`] once the game is over.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), EngineError> {
        if game.status().is_over() {
            Err(EngineError::InvalidModeTransition("the game is over"))
        } else {
            Ok(())
        }
    }
}

/// Relation between two states: occupied squares never change.
pub struct MonotonicBoard;

impl MonotonicBoard {
    /// True when every square occupied in `before` holds the same mark in `after`.
    #[instrument(skip(before, after))]
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let kept = Position::ALL.iter().all(|pos| {
            let old = before.board().get(*pos);
            old == Square::Empty || old == after.board().get(*pos)
        });
        if !kept {
            warn!("Occupied square was overwritten");
        }
        kept
    }
}

/// Contract for placing a mark.
///
/// Preconditions:
/// - Index is in range
/// - Game is in progress
///
/// Postconditions:
/// - No occupied square was overwritten
/// - Every state invariant in [`TicTacToeInvariants`] holds
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    fn pre(game: &GameState, index: &usize) -> Result<(), EngineError> {
        IndexInRange::check(*index)?;
        GameInProgress::check(game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), EngineError> {
        if !MonotonicBoard::holds(before, after) {
            return Err(EngineError::InvariantViolation(
                "Postcondition failed: board squares are monotonic".to_string(),
            ));
        }
        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            EngineError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
