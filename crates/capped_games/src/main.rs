//! Capped Games - terminal tic-tac-toe with handicap modes.

#![warn(missing_docs)]

mod cli;

use std::io;

use anyhow::Result;
use capped_games::{AppConfig, GameSession, LobbyController};
use capped_stats::{SqliteStatsStore, StatsStore};
use capped_tictactoe::{Engine, Player};
use clap::Parser;
use cli::{Cli, Command};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(db_path) = cli.db_path {
        config = config.with_db_path(db_path);
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&config),
        Command::Stats => run_stats(&config),
        Command::ResetStats => run_reset_stats(&config),
    }
}

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Runs the terminal UI until the user quits.
fn run_play(config: &AppConfig) -> Result<()> {
    // Log to a file so output does not tear the terminal UI.
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(db_path = %config.db_path(), "Starting Capped Games");

    let store = SqliteStatsStore::open(config.db_path())?;
    let engine = match config.seed() {
        Some(seed) => Engine::seeded(*seed),
        None => Engine::new(),
    };
    let session = GameSession::open(engine, store)?;
    let mut controller = LobbyController::new(session);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = controller.run(&mut terminal);

    // Restore the terminal even when the loop failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "Lobby exited with error");
    }
    info!("Capped Games exited");
    result
}

fn init_stderr_logging(config: &AppConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(io::stderr)
        .try_init();
}

/// Prints the win records.
#[instrument(skip_all)]
fn run_stats(config: &AppConfig) -> Result<()> {
    init_stderr_logging(config);
    let store = SqliteStatsStore::open(config.db_path())?;
    store.ensure_players(&Player::BOTH)?;
    for record in store.list_stats()? {
        println!("Player {}: Wins: {}", record.player(), record.wins());
    }
    Ok(())
}

/// Zeroes the win records.
#[instrument(skip_all)]
fn run_reset_stats(config: &AppConfig) -> Result<()> {
    init_stderr_logging(config);
    let store = SqliteStatsStore::open(config.db_path())?;
    store.reset_all(&Player::BOTH)?;
    println!("{}", capped_games::RESET_CONFIRMATION);
    Ok(())
}
