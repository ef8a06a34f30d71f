//! In-memory stats store, for tests and throwaway sessions.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use capped_tictactoe::Player;
use chrono::{NaiveDateTime, Utc};
use tracing::{debug, instrument};

use crate::{StatsError, StatsRecord, StatsStore};

/// Stats store holding counters in a map.
///
/// Can be switched to "unavailable" to exercise persistence failures.
#[derive(Debug, Default)]
pub struct MemoryStatsStore {
    records: Mutex<BTreeMap<Player, (u32, NaiveDateTime)>>,
    unavailable: AtomicBool,
}

impl MemoryStatsStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later call fail (or succeed again).
    #[instrument(skip(self))]
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    #[track_caller]
    fn records(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, BTreeMap<Player, (u32, NaiveDateTime)>>, StatsError>
    {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StatsError::new("In-memory store marked unavailable"));
        }
        self.records
            .lock()
            .map_err(|_| StatsError::new("In-memory store lock poisoned"))
    }
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

impl StatsStore for MemoryStatsStore {
    #[instrument(skip(self))]
    fn ensure_players(&self, players: &[Player]) -> Result<(), StatsError> {
        let mut records = self.records()?;
        for player in players {
            records.entry(*player).or_insert_with(|| (0, now()));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    fn increment_win(&self, player: Player) -> Result<(), StatsError> {
        let mut records = self.records()?;
        let entry = records.entry(player).or_insert_with(|| (0, now()));
        entry.0 += 1;
        entry.1 = now();
        debug!(%player, wins = entry.0, "Win recorded");
        Ok(())
    }

    #[instrument(skip(self))]
    fn list_stats(&self) -> Result<Vec<StatsRecord>, StatsError> {
        let records = self.records()?;
        Ok(records
            .iter()
            .map(|(player, (wins, at))| StatsRecord::new(*player, *wins, *at))
            .collect())
    }

    #[instrument(skip(self))]
    fn reset_all(&self, players: &[Player]) -> Result<(), StatsError> {
        let mut records = self.records()?;
        records.clear();
        for player in players {
            records.insert(*player, (0, now()));
        }
        Ok(())
    }
}
