//! Persistence contract consumed by the game session.

use capped_tictactoe::Player;

use crate::{StatsError, StatsRecord};

/// Durable per-player win counters.
///
/// Every method is one atomic operation: a single player's
/// read-modify-write, or one reset transaction.
pub trait StatsStore {
    /// Guarantees a record exists for each player, leaving existing counts alone.
    fn ensure_players(&self, players: &[Player]) -> Result<(), StatsError>;

    /// Adds one win to `player`'s counter.
    fn increment_win(&self, player: Player) -> Result<(), StatsError>;

    /// All records, X before O.
    fn list_stats(&self) -> Result<Vec<StatsRecord>, StatsError>;

    /// Drops every record and recreates each player at zero wins.
    fn reset_all(&self, players: &[Player]) -> Result<(), StatsError>;
}

impl<T: StatsStore + ?Sized> StatsStore for &T {
    fn ensure_players(&self, players: &[Player]) -> Result<(), StatsError> {
        (**self).ensure_players(players)
    }

    fn increment_win(&self, player: Player) -> Result<(), StatsError> {
        (**self).increment_win(player)
    }

    fn list_stats(&self) -> Result<Vec<StatsRecord>, StatsError> {
        (**self).list_stats()
    }

    fn reset_all(&self, players: &[Player]) -> Result<(), StatsError> {
        (**self).reset_all(players)
    }
}
