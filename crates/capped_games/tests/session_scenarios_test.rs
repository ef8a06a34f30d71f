//! End-to-end session scenarios: games played through the session with
//! their effect on the win records.

use capped_games::{GameSession, SessionError};
use capped_stats::{MemoryStatsStore, SqliteStatsStore, StatsStore};
use capped_tictactoe::{
    Engine, EngineError, GameState, GameStatus, Mode, Outcome, Phase, Player, Position, Square,
};
use tempfile::NamedTempFile;

fn marks(state: &GameState, player: Player) -> Vec<usize> {
    Position::ALL
        .iter()
        .filter(|pos| state.board().get(**pos) == Square::Occupied(player))
        .map(|pos| pos.to_index())
        .collect()
}

/// Opens sessions over successive seeds until the forced moves after
/// `opening` satisfy `accept`.
fn find_session<S: StatsStore>(
    make_store: impl Fn() -> S,
    mode: Mode,
    opening: &[usize],
    accept: impl Fn(&GameState) -> bool,
) -> GameSession<S> {
    for seed in 0..1_000 {
        let mut session =
            GameSession::open(Engine::seeded(seed), make_store()).expect("session opens");
        session.select_mode(mode);
        for &index in opening {
            session.play(index).expect("legal opening move");
        }
        if session.state().is_some_and(&accept) {
            return session;
        }
    }
    panic!("no seed produced the wanted forced moves");
}

/// Mode 1 game where X has 0 and a forced mark on 1 or 2, O has 3 and 6
/// is free. Returns the index that completes X's top row.
fn top_row_setup<S: StatsStore>(make_store: impl Fn() -> S) -> (GameSession<S>, usize) {
    let session = find_session(make_store, Mode::Mode1, &[0, 3], |s| {
        let xs = marks(s, Player::X);
        xs.contains(&1) || xs.contains(&2)
    });
    let xs = marks(session.state().expect("game running"), Player::X);
    let missing = if xs.contains(&1) { 2 } else { 1 };
    (session, missing)
}

fn wins<S: StatsStore>(session: &GameSession<S>) -> Vec<(Player, u32)> {
    session
        .view_stats()
        .expect("stats readable")
        .iter()
        .map(|r| (*r.player(), *r.wins()))
        .collect()
}

#[test]
fn test_top_row_win_counts_for_x_only() {
    let (mut session, missing) = top_row_setup(MemoryStatsStore::new);

    let report = session.play(6).expect("legal move");
    assert_eq!(*report.outcome(), Outcome::Continue);
    let report = session.play(missing).expect("legal move");
    assert_eq!(*report.outcome(), Outcome::Win(Player::X));
    assert_eq!(report.outcome().to_string(), "Player X wins!");
    assert!(report.stats_error().is_none());
    assert_eq!(report.state().status(), GameStatus::Won(Player::X));

    assert_eq!(wins(&session), vec![(Player::X, 1), (Player::O, 0)]);
}

#[test]
fn test_draw_leaves_records_unchanged() {
    // Target: X O X / X O O / O X X
    let x_cells = [0, 2, 3, 7, 8];
    let o_cells = [1, 4, 5, 6];
    let mut session = find_session(MemoryStatsStore::new, Mode::Mode1, &[0, 1], |s| {
        marks(s, Player::X).iter().all(|i| x_cells.contains(i))
    });

    let mut outcome = Outcome::Continue;
    while !outcome.is_terminal() {
        let state = session.state().expect("game running");
        let wanted: &[usize] = match state.current_player() {
            Player::X => &x_cells,
            Player::O => &o_cells,
        };
        let index = wanted
            .iter()
            .copied()
            .find(|i| state.board().squares()[*i] == Square::Empty)
            .expect("a target square is free");
        outcome = *session.play(index).expect("legal move").outcome();
    }

    assert_eq!(outcome, Outcome::Draw);
    assert_eq!(outcome.to_string(), "It's a draw!");
    assert_eq!(wins(&session), vec![(Player::X, 0), (Player::O, 0)]);
}

#[test]
fn test_failed_win_write_keeps_the_win() {
    let (mut session, missing) = top_row_setup(MemoryStatsStore::new);
    session.play(6).expect("legal move");

    session.store().set_unavailable(true);
    let report = session.play(missing).expect("the move itself succeeds");
    assert_eq!(*report.outcome(), Outcome::Win(Player::X));
    assert!(report.stats_error().is_some());
    assert!(matches!(session.phase(), Phase::Finished(_)));

    session.store().set_unavailable(false);
    assert_eq!(wins(&session), vec![(Player::X, 0), (Player::O, 0)]);
}

#[test]
fn test_finished_game_rejects_moves_until_new_mode() {
    let (mut session, missing) = top_row_setup(MemoryStatsStore::new);
    session.play(6).expect("legal move");
    session.play(missing).expect("legal move");

    assert!(matches!(
        session.play(5),
        Err(SessionError::Engine(EngineError::InvalidModeTransition(_)))
    ));
    assert_eq!(wins(&session), vec![(Player::X, 1), (Player::O, 0)]);

    session.return_to_mode_selection();
    let fresh = session.select_mode(Mode::Mode2);
    assert_eq!(fresh.turn_count(), 0);
}

#[test]
fn test_sqlite_win_then_reset() {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();
    let (mut session, missing) = top_row_setup(|| {
        SqliteStatsStore::open(&db_path).expect("Failed to open store")
    });

    // Earlier seeds share the file but never finish a game.
    assert_eq!(wins(&session), vec![(Player::X, 0), (Player::O, 0)]);

    session.play(6).expect("legal move");
    session.play(missing).expect("legal move");
    assert_eq!(wins(&session), vec![(Player::X, 1), (Player::O, 0)]);

    session.reset_stats().expect("reset");
    assert_eq!(wins(&session), vec![(Player::X, 0), (Player::O, 0)]);
}
