//! Capped tic-tac-toe: a terminal game with randomized handicap modes and
//! persistent win records.
//!
//! # Architecture
//!
//! - **Session**: [`GameSession`] couples the engine with a stats store
//! - **Lobby**: [`LobbyController`] and its screens, drawn with ratatui
//! - **Config**: [`AppConfig`], read from TOML
//!
//! # Example
//!
//! ```
//! use capped_games::GameSession;
//! use capped_stats::MemoryStatsStore;
//! use capped_tictactoe::{Engine, Mode, Outcome};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = GameSession::open(Engine::seeded(3), MemoryStatsStore::new())?;
//! session.select_mode(Mode::Mode1);
//! let report = session.play(4)?;
//! assert_eq!(*report.outcome(), Outcome::Continue);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod lobby;
mod session;

pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};
pub use lobby::{
    InGameScreen, LobbyController, MessageScreen, ModeSelectScreen, RESET_CONFIRMATION, Screen,
    ScreenTransition, StatsViewScreen,
};
pub use session::{GameSession, SessionError, TurnReport};
