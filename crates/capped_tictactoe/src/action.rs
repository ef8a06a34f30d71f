//! First-class action and error types for the engine.
//!
//! Actions are what the UI asks for; the engine answers with an
//! [`Outcome`](crate::Outcome) or an [`EngineError`].

use serde::{Deserialize, Serialize};

use crate::Mode;

/// A request from the UI to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Start a fresh game in the given mode.
    SelectMode(Mode),
    /// Place the current player's mark at a board index (0-8).
    Place(usize),
    /// Abandon the current game and go back to mode selection.
    ReturnToModeSelection,
}

/// Contract violations raised by the engine.
///
/// None of these are user-recoverable: they mean the caller drove the
/// engine incorrectly.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// The index is outside 0-8.
    #[display("Invalid board index {} (must be 0-8)", _0)]
    InvalidIndex(usize),

    /// A move was applied before a mode was selected, or after the game ended.
    #[display("Cannot place a mark while {}", _0)]
    InvalidModeTransition(&'static str),

    /// A postcondition failed after a transition.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for EngineError {}
