//! Per-move results reported to the UI.

use serde::{Deserialize, Serialize};

use crate::Player;

/// Result of a single engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The game goes on.
    Continue,
    /// The chosen cell was already occupied; nothing changed.
    IgnoredOccupied,
    /// The player completed a line.
    Win(Player),
    /// The board filled up with no winner.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns true when the game is over and the UI should go back to mode selection.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Win(_) | Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Continue => write!(f, "Continue"),
            Outcome::IgnoredOccupied => write!(f, "Square already occupied"),
            Outcome::Win(player) => write!(f, "Player {} wins!", player),
            Outcome::Draw => write!(f, "It's a draw!"),
        }
    }
}
