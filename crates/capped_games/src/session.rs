//! Game session: the engine plus the stats store it reports wins to.

use capped_stats::{StatsError, StatsRecord, StatsStore};
use capped_tictactoe::{Engine, EngineError, GameState, Mode, Outcome, Phase, Player};
use derive_getters::Getters;
use derive_more::{Display, Error, From};
use derive_new::new;
use tracing::{error, info, instrument, warn};

/// Errors surfaced to the UI by a [`GameSession`].
#[derive(Debug, Clone, Display, Error, From)]
pub enum SessionError {
    /// The engine rejected the request.
    #[display("Engine error: {}", _0)]
    Engine(EngineError),
    /// The stats store failed.
    #[display("{}", _0)]
    Stats(StatsError),
}

/// What one [`GameSession::play`] call produced.
///
/// A failed win write does not undo the game; it rides along in
/// `stats_error` so the UI can report it.
#[derive(Debug, Clone, Getters, new)]
pub struct TurnReport {
    outcome: Outcome,
    state: GameState,
    stats_error: Option<StatsError>,
}

/// One player-facing session: a single engine and its stats store.
#[derive(Debug)]
pub struct GameSession<S> {
    engine: Engine,
    store: S,
}

impl<S: StatsStore> GameSession<S> {
    /// Creates a session and makes sure both players have a record.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError`] if the store cannot be written.
    #[instrument(skip(engine, store))]
    pub fn open(engine: Engine, store: S) -> Result<Self, StatsError> {
        store.ensure_players(&Player::BOTH)?;
        info!("Game session opened");
        Ok(Self { engine, store })
    }

    /// Returns the engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the stats store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the engine phase.
    pub fn phase(&self) -> &Phase {
        self.engine.phase()
    }

    /// Returns the running or just-finished game, if any.
    pub fn state(&self) -> Option<&GameState> {
        self.engine.state()
    }

    /// Starts a new game in `mode`.
    #[instrument(skip(self))]
    pub fn select_mode(&mut self, mode: Mode) -> GameState {
        self.engine.select_mode(mode)
    }

    /// Plays the current player's mark at `index`, recording a win if one results.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Engine`] when the engine rejects the move.
    /// Stats failures are reported inside the [`TurnReport`] instead.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<TurnReport, SessionError> {
        let outcome = self.engine.apply_move(index).inspect_err(|e| {
            error!(error = %e, "Engine rejected move");
        })?;

        let stats_error = match outcome.winner() {
            Some(winner) => match self.store.increment_win(winner) {
                Ok(()) => None,
                Err(e) => {
                    warn!(%winner, error = %e, "Win could not be recorded");
                    Some(e)
                }
            },
            None => None,
        };

        let state = self
            .engine
            .state()
            .cloned()
            .ok_or(EngineError::InvalidModeTransition("no game after a move"))?;
        Ok(TurnReport::new(outcome, state, stats_error))
    }

    /// Abandons any game and goes back to mode selection.
    #[instrument(skip(self))]
    pub fn return_to_mode_selection(&mut self) {
        self.engine.reset_to_mode_selection();
    }

    /// Current win records, X first.
    #[instrument(skip(self))]
    pub fn view_stats(&self) -> Result<Vec<StatsRecord>, StatsError> {
        self.store.list_stats()
    }

    /// Zeroes both players' records.
    #[instrument(skip(self))]
    pub fn reset_stats(&self) -> Result<(), StatsError> {
        self.store.reset_all(&Player::BOTH)?;
        info!("All player stats reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capped_stats::MemoryStatsStore;

    fn session(seed: u64) -> GameSession<MemoryStatsStore> {
        GameSession::open(Engine::seeded(seed), MemoryStatsStore::new()).expect("session opens")
    }

    fn wins(session: &GameSession<MemoryStatsStore>) -> Vec<(Player, u32)> {
        session
            .view_stats()
            .expect("stats readable")
            .iter()
            .map(|r| (*r.player(), *r.wins()))
            .collect()
    }

    #[test]
    fn test_open_ensures_both_players() {
        let session = session(1);
        assert_eq!(wins(&session), vec![(Player::X, 0), (Player::O, 0)]);
    }

    #[test]
    fn test_open_fails_on_unavailable_store() {
        let store = MemoryStatsStore::new();
        store.set_unavailable(true);
        assert!(GameSession::open(Engine::seeded(1), store).is_err());
    }

    #[test]
    fn test_play_before_mode_is_engine_error() {
        let mut session = session(1);
        assert!(matches!(
            session.play(0),
            Err(SessionError::Engine(EngineError::InvalidModeTransition(_)))
        ));
    }

    #[test]
    fn test_play_invalid_index_is_engine_error() {
        let mut session = session(1);
        session.select_mode(Mode::Mode1);
        assert!(matches!(
            session.play(9),
            Err(SessionError::Engine(EngineError::InvalidIndex(9)))
        ));
    }

    #[test]
    fn test_continue_report_carries_state() {
        let mut session = session(1);
        session.select_mode(Mode::Mode2);
        let report = session.play(4).expect("legal move");
        assert_eq!(*report.outcome(), Outcome::Continue);
        assert_eq!(report.state().current_player(), Player::O);
        assert!(report.stats_error().is_none());
    }

    #[test]
    fn test_reset_stats_zeroes_records() {
        let session = session(1);
        session.store().increment_win(Player::X).expect("increment");
        session.reset_stats().expect("reset");
        assert_eq!(wins(&session), vec![(Player::X, 0), (Player::O, 0)]);
    }

    #[test]
    fn test_return_to_mode_selection_discards_game() {
        let mut session = session(1);
        session.select_mode(Mode::Mode1);
        session.play(0).expect("legal move");
        session.return_to_mode_selection();
        assert_eq!(session.phase(), &Phase::ModeSelection);
        assert!(session.state().is_none());
    }
}
