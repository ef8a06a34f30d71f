//! Screen implementations for the lobby state machine.

mod in_game;
mod message;
mod mode_select;
mod stats_view;

pub use in_game::InGameScreen;
pub use message::MessageScreen;
pub use mode_select::ModeSelectScreen;
pub use stats_view::StatsViewScreen;
