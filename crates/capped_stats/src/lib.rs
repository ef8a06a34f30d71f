//! Per-player win records for capped tic-tac-toe.
//!
//! The game never touches records directly: it reports wins through the
//! [`StatsStore`] contract, implemented here by [`SqliteStatsStore`] for
//! durable storage and [`MemoryStatsStore`] for tests.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod memory;
mod models;
mod repository;
mod schema; // Diesel generated schema - internal use only
mod store;

pub use error::StatsError;
pub use memory::MemoryStatsStore;
pub use models::StatsRecord;
pub use repository::{DEFAULT_DB_PATH, SqliteStatsStore};
pub use store::StatsStore;
