//! Lobby controller: the state machine driving the terminal UI.

use std::time::Duration;

use capped_stats::StatsStore;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal, backend::Backend};
use tracing::{debug, error, info, instrument};

use crate::GameSession;
use crate::lobby::screen::{Screen, ScreenTransition};
use crate::lobby::screens::{InGameScreen, MessageScreen, ModeSelectScreen, StatsViewScreen};

/// Confirmation shown after the records are reset.
pub const RESET_CONFIRMATION: &str = "All player stats have been reset!";

/// Active screen in the lobby state machine.
#[derive(Debug)]
enum ActiveScreen {
    ModeSelect(ModeSelectScreen),
    InGame(InGameScreen),
    StatsView(StatsViewScreen),
    Message(MessageScreen),
}

impl ActiveScreen {
    fn name(&self) -> &'static str {
        match self {
            Self::ModeSelect(_) => "mode_select",
            Self::InGame(_) => "in_game",
            Self::StatsView(_) => "stats_view",
            Self::Message(_) => "message",
        }
    }
}

/// Controller that drives the lobby state machine.
///
/// Call [`LobbyController::run`] to start the event loop, or feed keys
/// through [`LobbyController::handle_key`] directly.
#[derive(Debug)]
pub struct LobbyController<S> {
    session: GameSession<S>,
    screen: ActiveScreen,
}

impl<S: StatsStore> LobbyController<S> {
    /// Creates a controller showing the mode selection menu.
    #[instrument(skip(session))]
    pub fn new(session: GameSession<S>) -> Self {
        info!("Creating LobbyController");
        Self {
            session,
            screen: ActiveScreen::ModeSelect(ModeSelectScreen::new()),
        }
    }

    /// Returns the game session.
    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    /// Name of the screen being shown.
    pub fn screen_name(&self) -> &'static str {
        self.screen.name()
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting lobby event loop");

        loop {
            terminal.draw(|f| self.render(f))?;

            // Short poll timeout keeps the loop responsive.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // crossterm reports both press and release on some platforms.
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if !self.handle_key(key) {
                    info!("Lobby quitting");
                    return Ok(());
                }
            }
        }
    }

    /// Renders the active screen.
    pub fn render(&self, frame: &mut Frame) {
        match &self.screen {
            ActiveScreen::ModeSelect(s) => s.render(frame, &self.session),
            ActiveScreen::InGame(s) => s.render(frame, &self.session),
            ActiveScreen::StatsView(s) => s.render(frame, &self.session),
            ActiveScreen::Message(s) => s.render(frame, &self.session),
        }
    }

    /// Routes one key press to the active screen. Returns `false` once the user quits.
    #[instrument(skip(self, key), fields(screen = self.screen.name(), code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let transition = match &mut self.screen {
            ActiveScreen::ModeSelect(s) => s.handle_key(key, &mut self.session),
            ActiveScreen::InGame(s) => s.handle_key(key, &mut self.session),
            ActiveScreen::StatsView(s) => s.handle_key(key, &mut self.session),
            ActiveScreen::Message(s) => s.handle_key(key, &mut self.session),
        };
        self.apply_transition(transition)
    }

    /// Applies a screen transition. Returns `false` on quit.
    #[instrument(skip(self))]
    fn apply_transition(&mut self, transition: ScreenTransition) -> bool {
        debug!(transition = ?transition, "Applying screen transition");
        self.screen = match transition {
            ScreenTransition::Stay => return true,

            ScreenTransition::GoToModeSelect => {
                self.session.return_to_mode_selection();
                ActiveScreen::ModeSelect(ModeSelectScreen::new())
            }

            ScreenTransition::StartGame(mode) => {
                info!(%mode, "Starting game");
                self.session.select_mode(mode);
                ActiveScreen::InGame(InGameScreen::new())
            }

            ScreenTransition::GoToStatsView => {
                ActiveScreen::StatsView(StatsViewScreen::new(&self.session))
            }

            ScreenTransition::ResetStats => {
                let message = match self.session.reset_stats() {
                    Ok(()) => RESET_CONFIRMATION.to_string(),
                    Err(e) => {
                        error!(error = %e, "Reset failed");
                        format!("Stats could not be reset: {}", e.message)
                    }
                };
                ActiveScreen::Message(MessageScreen::new(message, None))
            }

            ScreenTransition::ShowMessage { message, board } => {
                self.session.return_to_mode_selection();
                ActiveScreen::Message(MessageScreen::new(message, board))
            }

            ScreenTransition::Quit => return false,
        };
        true
    }
}
