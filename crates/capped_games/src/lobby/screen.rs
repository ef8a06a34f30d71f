//! Screen trait and transition type for the lobby state machine.

use capped_stats::StatsStore;
use capped_tictactoe::{Board, Mode};
use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::GameSession;

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`LobbyController`](crate::LobbyController) state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Abandon any game and show the mode selection menu.
    GoToModeSelect,
    /// Start a new game in the given mode.
    StartGame(Mode),
    /// Show the win records.
    GoToStatsView,
    /// Zero every record, then confirm.
    ResetStats,
    /// Show a message until the next key press.
    ShowMessage {
        /// Text to display.
        message: String,
        /// Final board to show under the message, if any.
        board: Option<Board>,
    },
    /// Exit the application.
    Quit,
}

/// Trait implemented by each screen in the lobby state machine.
///
/// Each screen owns its own view state; game state lives in the
/// [`GameSession`] the controller passes in.
pub trait Screen<S: StatsStore> {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, session: &GameSession<S>);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, session: &mut GameSession<S>) -> ScreenTransition;
}
