//! SQLite-backed stats store.

use capped_tictactoe::Player;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument, warn};

use crate::models::{NewStatsRow, StatsRow};
use crate::{StatsError, StatsRecord, StatsStore, schema};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Default database file, next to the working directory.
pub const DEFAULT_DB_PATH: &str = "tictactoe_stats.db";

/// Stats store persisting win counters in a SQLite file.
///
/// Opens a fresh connection per operation; no connection is held between calls.
#[derive(Debug, Clone)]
pub struct SqliteStatsStore {
    db_path: String,
}

impl SqliteStatsStore {
    /// Opens (creating if needed) the database at `db_path` and applies pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError`] if the file cannot be opened or migrated.
    #[instrument(skip(db_path), fields(db_path = %db_path.as_ref()))]
    pub fn open(db_path: impl AsRef<str>) -> Result<Self, StatsError> {
        let store = Self {
            db_path: db_path.as_ref().to_string(),
        };
        let mut conn = store.connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| StatsError::new(format!("Failed to run migrations: {}", e)))?;
        info!(path = %store.db_path, migrations = applied.len(), "Stats store opened");
        Ok(store)
    }

    /// Path of the backing database file.
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, StatsError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| StatsError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }
}

impl StatsStore for SqliteStatsStore {
    #[instrument(skip(self))]
    fn ensure_players(&self, players: &[Player]) -> Result<(), StatsError> {
        let mut conn = self.connection()?;
        let inserted = conn.transaction::<_, StatsError, _>(|conn| {
            let mut inserted = 0;
            for player in players {
                inserted += diesel::insert_or_ignore_into(schema::stats::table)
                    .values(NewStatsRow::zeroed(*player))
                    .execute(conn)?;
            }
            Ok(inserted)
        })?;
        debug!(inserted, "Players ensured");
        Ok(())
    }

    #[instrument(skip(self))]
    fn increment_win(&self, player: Player) -> Result<(), StatsError> {
        use schema::stats::dsl::{stats, updated_at, wins};

        let mut conn = self.connection()?;
        conn.transaction::<_, StatsError, _>(|conn| {
            let updated = diesel::update(stats.find(player.to_string()))
                .set((wins.eq(wins + 1), updated_at.eq(diesel::dsl::now)))
                .execute(conn)?;
            if updated == 0 {
                warn!(%player, "No record for player, creating one");
                diesel::insert_into(stats)
                    .values(NewStatsRow::new(player.to_string(), 1))
                    .execute(conn)?;
            }
            Ok(())
        })?;
        info!(%player, "Win recorded");
        Ok(())
    }

    #[instrument(skip(self))]
    fn list_stats(&self) -> Result<Vec<StatsRecord>, StatsError> {
        let mut conn = self.connection()?;
        let rows = schema::stats::table
            .select(StatsRow::as_select())
            .load(&mut conn)?;

        let mut records = rows
            .into_iter()
            .map(StatsRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        records.sort_by_key(|r| *r.player());

        debug!(count = records.len(), "Stats loaded");
        Ok(records)
    }

    #[instrument(skip(self))]
    fn reset_all(&self, players: &[Player]) -> Result<(), StatsError> {
        let mut conn = self.connection()?;
        let removed = conn.transaction::<_, StatsError, _>(|conn| {
            let removed = diesel::delete(schema::stats::table).execute(conn)?;
            for player in players {
                diesel::insert_into(schema::stats::table)
                    .values(NewStatsRow::zeroed(*player))
                    .execute(conn)?;
            }
            Ok(removed)
        })?;
        info!(removed, "All stats reset");
        Ok(())
    }
}
