//! Mode selection screen: the hub shown between games.

use capped_stats::StatsStore;
use capped_tictactoe::Mode;
use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::GameSession;
use crate::lobby::screen::{Screen, ScreenTransition};

/// Menu options on the mode selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Play(Mode),
    ViewRecords,
    ResetRecords,
    Quit,
}

impl MenuOption {
    const ALL: [MenuOption; 5] = [
        Self::Play(Mode::Mode1),
        Self::Play(Mode::Mode2),
        Self::ViewRecords,
        Self::ResetRecords,
        Self::Quit,
    ];

    fn label(self) -> String {
        match self {
            Self::Play(mode) => format!("{}: {}", mode, mode.description()),
            Self::ViewRecords => "View Records".to_string(),
            Self::ResetRecords => "Reset Records".to_string(),
            Self::Quit => "Quit".to_string(),
        }
    }

    fn transition(self) -> ScreenTransition {
        match self {
            Self::Play(mode) => ScreenTransition::StartGame(mode),
            Self::ViewRecords => ScreenTransition::GoToStatsView,
            Self::ResetRecords => ScreenTransition::ResetStats,
            Self::Quit => ScreenTransition::Quit,
        }
    }
}

/// State for the mode selection screen.
#[derive(Debug, Getters)]
pub struct ModeSelectScreen {
    list_state: ListState,
}

impl ModeSelectScreen {
    /// Creates the screen with the first mode highlighted.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing ModeSelectScreen");
        let mut state = ListState::default();
        state.select(Some(0));
        Self { list_state: state }
    }

    /// Moves selection up, wrapping to the bottom.
    #[instrument(skip(self))]
    fn select_previous(&mut self) {
        let count = MenuOption::ALL.len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Moves selection down, wrapping to the top.
    #[instrument(skip(self))]
    fn select_next(&mut self) {
        let count = MenuOption::ALL.len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn selected_option(&self) -> MenuOption {
        let idx = self.list_state.selected().unwrap_or(0);
        MenuOption::ALL[idx.min(MenuOption::ALL.len() - 1)]
    }
}

impl Default for ModeSelectScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StatsStore> Screen<S> for ModeSelectScreen {
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

        let title = Paragraph::new("Tic Tac Toe - Select Mode")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = MenuOption::ALL
            .iter()
            .map(|opt| ListItem::new(opt.label()))
            .collect();

        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state;
        frame.render_stateful_widget(menu, chunks[1], &mut list_state);

        let help = Paragraph::new("↑↓: Navigate | Enter: Select | 1/2: Start mode | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key, _session))]
    fn handle_key(&mut self, key: KeyEvent, _session: &mut GameSession<S>) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let option = self.selected_option();
                info!(option = ?option, "Menu option selected");
                option.transition()
            }
            KeyCode::Char('1') => ScreenTransition::StartGame(Mode::Mode1),
            KeyCode::Char('2') => ScreenTransition::StartGame(Mode::Mode2),
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capped_stats::MemoryStatsStore;
    use capped_tictactoe::Engine;

    fn session() -> GameSession<MemoryStatsStore> {
        GameSession::open(Engine::seeded(1), MemoryStatsStore::new()).expect("session opens")
    }

    fn press(screen: &mut ModeSelectScreen, code: KeyCode) -> ScreenTransition {
        let mut session = session();
        Screen::handle_key(screen, KeyEvent::from(code), &mut session)
    }

    #[test]
    fn test_enter_on_first_option_starts_mode1() {
        let mut screen = ModeSelectScreen::new();
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            ScreenTransition::StartGame(Mode::Mode1)
        );
    }

    #[test]
    fn test_menu_walks_to_each_option() {
        let mut screen = ModeSelectScreen::new();
        press(&mut screen, KeyCode::Down);
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            ScreenTransition::StartGame(Mode::Mode2)
        );
        press(&mut screen, KeyCode::Down);
        assert_eq!(press(&mut screen, KeyCode::Enter), ScreenTransition::GoToStatsView);
        press(&mut screen, KeyCode::Down);
        assert_eq!(press(&mut screen, KeyCode::Enter), ScreenTransition::ResetStats);
    }

    #[test]
    fn test_up_wraps_to_quit() {
        let mut screen = ModeSelectScreen::new();
        press(&mut screen, KeyCode::Up);
        assert_eq!(press(&mut screen, KeyCode::Enter), ScreenTransition::Quit);
    }

    #[test]
    fn test_digit_shortcuts() {
        let mut screen = ModeSelectScreen::new();
        assert_eq!(
            press(&mut screen, KeyCode::Char('2')),
            ScreenTransition::StartGame(Mode::Mode2)
        );
        assert_eq!(press(&mut screen, KeyCode::Char('x')), ScreenTransition::Stay);
    }
}
