//! In-game screen: the board, a cursor, and the status line.

use capped_stats::StatsStore;
use capped_tictactoe::{Outcome, Position};
use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument, warn};

use crate::lobby::board::draw_board;
use crate::lobby::input::{digit_index, move_cursor};
use crate::lobby::screen::{Screen, ScreenTransition};
use crate::{GameSession, TurnReport};

/// State for the in-game screen.
#[derive(Debug, Getters)]
pub struct InGameScreen {
    cursor: Position,
    status: String,
}

impl InGameScreen {
    /// Creates the screen for a freshly started game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            cursor: Position::Center,
            status: "Player X's turn".to_string(),
        }
    }

    /// Sends a move to the session and turns the result into a transition.
    #[instrument(skip(self, session))]
    fn play<S: StatsStore>(&mut self, index: usize, session: &mut GameSession<S>) -> ScreenTransition {
        let turn_before = session.state().map(|s| s.turn_count()).unwrap_or(0);
        match session.play(index) {
            Ok(report) => self.apply_report(&report, turn_before),
            Err(e) => {
                warn!(error = %e, "Move failed");
                self.status = e.to_string();
                ScreenTransition::Stay
            }
        }
    }

    fn apply_report(&mut self, report: &TurnReport, turn_before: u32) -> ScreenTransition {
        let next = report.state().current_player();
        match report.outcome() {
            Outcome::IgnoredOccupied => {
                self.status = format!("That square is taken. Player {}'s turn", next);
                ScreenTransition::Stay
            }
            Outcome::Continue => {
                let forced = report.state().turn_count().saturating_sub(turn_before + 1);
                self.status = if forced > 0 {
                    format!("{} random move(s) placed! Player {}'s turn", forced, next)
                } else {
                    format!("Player {}'s turn", next)
                };
                ScreenTransition::Stay
            }
            outcome @ (Outcome::Win(_) | Outcome::Draw) => {
                info!(%outcome, "Game finished");
                let message = match report.stats_error() {
                    Some(e) => format!("{} (stats could not be saved: {})", outcome, e.message),
                    None => outcome.to_string(),
                };
                ScreenTransition::ShowMessage {
                    message,
                    board: Some(report.state().board().clone()),
                }
            }
        }
    }
}

impl Default for InGameScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StatsStore> Screen<S> for InGameScreen {
    #[instrument(skip(self, frame, session))]
    fn render(&self, frame: &mut Frame, session: &GameSession<S>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(7),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title_text = match session.state() {
            Some(state) => format!("Tic Tac Toe - {}: {}", state.mode(), state.mode().description()),
            None => "Tic Tac Toe".to_string(),
        };
        let title = Paragraph::new(title_text)
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        if let Some(state) = session.state() {
            draw_board(frame, chunks[1], state.board(), Some(self.cursor));
        }

        let status = Paragraph::new(self.status.as_str())
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[2]);

        let help = Paragraph::new("Arrows: Move | Enter/Space: Place | 1-9: Place | Esc: Menu")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key, session))]
    fn handle_key(&mut self, key: KeyEvent, session: &mut GameSession<S>) -> ScreenTransition {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
                debug!(cursor = %self.cursor, "Cursor moved");
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index(), session),
            KeyCode::Esc => {
                info!("Leaving game for mode selection");
                ScreenTransition::GoToModeSelect
            }
            code => match digit_index(code) {
                Some(index) => {
                    if let Some(pos) = Position::from_index(index) {
                        self.cursor = pos;
                    }
                    self.play(index, session)
                }
                None => ScreenTransition::Stay,
            },
        }
    }
}
