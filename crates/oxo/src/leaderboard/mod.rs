//! Persistent win/loss/tie records keyed by player name.

mod backend;
mod error;
mod record;
mod store;

pub use backend::{JsonFileBackend, MemoryBackend};
pub use error::StoreError;
pub use record::LeaderboardRecord;
pub use store::{Leaderboard, LeaderboardBackend, LeaderboardTable};
