//! Lobby system: mode selection, the game board, records and messages.

mod board;
mod controller;
mod input;
mod screen;
mod screens;

pub use controller::{LobbyController, RESET_CONFIRMATION};
pub use screen::{Screen, ScreenTransition};
pub use screens::{InGameScreen, MessageScreen, ModeSelectScreen, StatsViewScreen};
