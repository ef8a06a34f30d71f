//! Stateful engine driven by the UI.
//!
//! Wraps the pure [`GameState::apply_move`] transition with the
//! mode-selection phase machine and owns the random source used for
//! forced moves.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, error, info, instrument, warn};

use crate::{Action, EngineError, GameState, Mode, Outcome, select_mode};

/// Where the engine is in the game lifecycle.
///
/// `ModeSelection -> Playing -> Finished -> ModeSelection`; a finished game
/// never resumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// No game; waiting for a mode.
    ModeSelection,
    /// A game is being played.
    Playing(GameState),
    /// The game was won or drawn. Kept so the UI can show the final board.
    Finished(GameState),
}

impl Phase {
    /// Short name for logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Phase::ModeSelection => "mode selection",
            Phase::Playing(_) => "playing",
            Phase::Finished(_) => "finished",
        }
    }
}

/// Game engine: one game at a time, driven synchronously by a single caller.
#[derive(Debug)]
pub struct Engine<R = StdRng> {
    phase: Phase,
    rng: R,
}

impl Engine<StdRng> {
    /// Creates an engine seeded from the operating system.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates an engine whose forced moves are reproducible.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Engine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Engine<R> {
    /// Creates an engine using the given random source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            phase: Phase::ModeSelection,
            rng,
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Returns the running or just-finished game, if any.
    pub fn state(&self) -> Option<&GameState> {
        match &self.phase {
            Phase::ModeSelection => None,
            Phase::Playing(state) | Phase::Finished(state) => Some(state),
        }
    }

    /// Starts a new game, discarding whatever was there before.
    #[instrument(skip(self), fields(phase = self.phase.name()))]
    pub fn select_mode(&mut self, mode: Mode) -> GameState {
        if let Phase::Playing(_) = self.phase {
            warn!("Abandoning game in progress");
        }
        let state = select_mode(mode);
        self.phase = Phase::Playing(state.clone());
        state
    }

    /// Plays the current player's mark at `index`.
    ///
    /// On `Win` or `Draw` the engine moves to [`Phase::Finished`].
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidModeTransition`] outside [`Phase::Playing`], and
    /// the errors of [`GameState::apply_move`]. The engine is unchanged on error.
    #[instrument(skip(self), fields(phase = self.phase.name()))]
    pub fn apply_move(&mut self, index: usize) -> Result<Outcome, EngineError> {
        let state = match &self.phase {
            Phase::Playing(state) => state.clone(),
            Phase::ModeSelection => {
                error!("Move requested before a mode was selected");
                return Err(EngineError::InvalidModeTransition("no mode has been selected"));
            }
            Phase::Finished(_) => {
                error!("Move requested after the game ended");
                return Err(EngineError::InvalidModeTransition("the game is over"));
            }
        };

        let (next, outcome) = state.apply_move(index, &mut self.rng).inspect_err(|e| {
            error!(error = %e, "Move rejected");
        })?;

        self.phase = if outcome.is_terminal() {
            info!(%outcome, "Game over");
            Phase::Finished(next)
        } else {
            Phase::Playing(next)
        };
        Ok(outcome)
    }

    /// Discards the current game and goes back to mode selection.
    #[instrument(skip(self), fields(phase = self.phase.name()))]
    pub fn reset_to_mode_selection(&mut self) {
        debug!("Returning to mode selection");
        self.phase = Phase::ModeSelection;
    }

    /// Applies an [`Action`], returning the outcome it produced.
    ///
    /// Mode selection and reset always report [`Outcome::Continue`].
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) -> Result<Outcome, EngineError> {
        match action {
            Action::SelectMode(mode) => {
                self.select_mode(mode);
                Ok(Outcome::Continue)
            }
            Action::Place(index) => self.apply_move(index),
            Action::ReturnToModeSelection => {
                self.reset_to_mode_selection();
                Ok(Outcome::Continue)
            }
        }
    }
}
