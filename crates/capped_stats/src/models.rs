//! Database models and domain types.

use std::str::FromStr;

use capped_tictactoe::Player;
use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{StatsError, schema};

/// Win record for one player symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct StatsRecord {
    player: Player,
    wins: u32,
    updated_at: NaiveDateTime,
}

/// Row in the `stats` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = schema::stats)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct StatsRow {
    player: String,
    wins: i32,
    updated_at: NaiveDateTime,
}

impl TryFrom<StatsRow> for StatsRecord {
    type Error = StatsError;

    #[instrument(skip(row), fields(player = %row.player, wins = row.wins))]
    fn try_from(row: StatsRow) -> Result<Self, Self::Error> {
        let player = Player::from_str(&row.player)
            .map_err(|_| StatsError::new(format!("Invalid player symbol: '{}'", row.player)))?;
        let wins = u32::try_from(row.wins)
            .map_err(|_| StatsError::new(format!("Negative win count: {}", row.wins)))?;
        Ok(StatsRecord::new(player, wins, row.updated_at))
    }
}

/// Insertable row; `updated_at` takes the column default.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::stats)]
pub(crate) struct NewStatsRow {
    player: String,
    wins: i32,
}

impl NewStatsRow {
    /// A zero-win row for `player`.
    pub(crate) fn zeroed(player: Player) -> Self {
        Self::new(player.to_string(), 0)
    }
}
