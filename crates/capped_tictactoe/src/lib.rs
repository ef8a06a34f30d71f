//! Tic-tac-toe game logic with randomized handicap modes.
//!
//! # Architecture
//!
//! - **Types**: board, squares, players, modes and status
//! - **Rules**: pure win/draw detection over a board
//! - **State**: [`GameState`] and its pure transition [`GameState::apply_move`]
//! - **Handicap**: forced random moves fired on the second turn
//! - **Engine**: [`Engine`], the mode-selection phase machine the UI drives
//!
//! # Example
//!
//! ```
//! use capped_tictactoe::{Engine, Mode, Outcome, Player};
//!
//! let mut engine = Engine::seeded(7);
//! engine.select_mode(Mode::Mode1);
//! assert_eq!(engine.apply_move(0), Ok(Outcome::Continue));
//! assert_eq!(engine.apply_move(4), Ok(Outcome::Continue));
//!
//! // The handicap placed a second X for X's second turn; O moves next.
//! let state = engine.state().unwrap();
//! assert_eq!(state.board().count(Player::X), 2);
//! assert_eq!(state.current_player(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod handicap;
mod invariants;
mod outcome;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::{Action, EngineError};
pub use contracts::{Contract, GameInProgress, IndexInRange, MonotonicBoard, MoveContract};
pub use engine::{Engine, Phase};
pub use handicap::{HANDICAP_TURN, random_empty};
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, StatusConsistentInvariant, TicTacToeInvariants,
    TurnCountInvariant, TurnOrderInvariant,
};
pub use outcome::Outcome;
pub use position::Position;
pub use state::{GameState, select_mode};
pub use types::{Board, GameStatus, Mode, Player, Square};
