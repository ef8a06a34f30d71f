//! Message screen: a game result or confirmation, dismissed by any key.

use capped_stats::StatsStore;
use capped_tictactoe::Board;
use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use derive_new::new;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::instrument;

use crate::GameSession;
use crate::lobby::board::draw_board;
use crate::lobby::screen::{Screen, ScreenTransition};

/// State for the message screen.
#[derive(Debug, Getters, new)]
pub struct MessageScreen {
    message: String,
    board: Option<Board>,
}

impl<S: StatsStore> Screen<S> for MessageScreen {
    #[instrument(skip(self, frame, _session))]
    fn render(&self, frame: &mut Frame, _session: &GameSession<S>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(7),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let message = Paragraph::new(self.message.as_str())
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(message, chunks[0]);

        if let Some(board) = &self.board {
            draw_board(frame, chunks[1], board, None);
        }

        let help = Paragraph::new("Press any key to return to the menu | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key, _session))]
    fn handle_key(&mut self, key: KeyEvent, _session: &mut GameSession<S>) -> ScreenTransition {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::GoToModeSelect,
        }
    }
}
