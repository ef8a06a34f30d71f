//! Command-line interface for capped_games.

use clap::{Parser, Subcommand};

use capped_games::DEFAULT_CONFIG_PATH;

/// Capped Games - tic-tac-toe with randomized handicap modes
#[derive(Parser, Debug)]
#[command(name = "capped_games")]
#[command(about = "Terminal tic-tac-toe with randomized second turns", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: std::path::PathBuf,

    /// Override the stats database path from the config file
    #[arg(long)]
    pub db_path: Option<String>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Print the win records and exit
    Stats,

    /// Reset every player's wins to zero and exit
    ResetStats,
}
