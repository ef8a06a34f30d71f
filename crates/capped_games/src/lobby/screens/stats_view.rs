//! Records screen: wins per player.

use capped_stats::{StatsRecord, StatsStore};
use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tracing::{info, instrument, warn};

use crate::GameSession;
use crate::lobby::screen::{Screen, ScreenTransition};

/// State for the records screen. Records are read once, on entry.
#[derive(Debug, Getters)]
pub struct StatsViewScreen {
    records: Result<Vec<StatsRecord>, String>,
}

impl StatsViewScreen {
    /// Creates the screen, loading the records immediately.
    #[instrument(skip(session))]
    pub fn new<S: StatsStore>(session: &GameSession<S>) -> Self {
        let records = session.view_stats().map_err(|e| {
            warn!(error = %e, "Could not load records");
            e.to_string()
        });
        if let Ok(records) = &records {
            info!(count = records.len(), "StatsViewScreen initialized");
        }
        Self { records }
    }

    /// One `Player X: Wins: n` line per record.
    pub fn lines(&self) -> Vec<String> {
        match &self.records {
            Ok(records) if records.is_empty() => vec!["No records yet".to_string()],
            Ok(records) => records
                .iter()
                .map(|r| format!("Player {}: Wins: {}", r.player(), r.wins()))
                .collect(),
            Err(e) => vec![format!("Records unavailable: {}", e)],
        }
    }
}

impl<S: StatsStore> Screen<S> for StatsViewScreen {
    #[instrument(skip(self, frame, _session))]
    fn render(&self, frame: &mut Frame, _session: &GameSession<S>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new("Player Records")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let lines: Vec<Line> = self.lines().into_iter().map(Line::from).collect();
        let color = if self.records.is_ok() {
            Color::Green
        } else {
            Color::Red
        };
        let body = Paragraph::new(lines)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Wins"));
        frame.render_widget(body, chunks[1]);

        let help = Paragraph::new("Esc / Enter / b: Back to menu | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key, _session))]
    fn handle_key(&mut self, key: KeyEvent, _session: &mut GameSession<S>) -> ScreenTransition {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('b') | KeyCode::Char('B') => {
                info!("Returning to mode selection from records");
                ScreenTransition::GoToModeSelect
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
