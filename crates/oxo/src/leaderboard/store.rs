//! Leaderboard facade over an injected storage backend.

use std::collections::BTreeMap;
use std::path::Path;

use oxo_engine::{Mark, Outcome};
use tracing::{debug, info, instrument, warn};

use crate::leaderboard::{JsonFileBackend, LeaderboardRecord, MemoryBackend, StoreError};

/// Player records keyed by display name.
pub type LeaderboardTable = BTreeMap<String, LeaderboardRecord>;

/// Storage backend for the leaderboard table.
///
/// `load` returns `Ok(None)` when nothing has been stored yet; the
/// leaderboard treats that as an empty table.
pub trait LeaderboardBackend: std::fmt::Debug {
    /// Reads the stored table.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ReadCorrupt`] when data exists but cannot be
    /// read or parsed.
    fn load(&self) -> Result<Option<LeaderboardTable>, StoreError>;

    /// Writes the table.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::WriteFailed`] when the data cannot be
    /// persisted.
    fn save(&mut self, table: &LeaderboardTable) -> Result<(), StoreError>;
}

/// Win/loss/tie records for all known players.
///
/// The table lives in memory and is pushed through the backend after
/// every update. Loading fails soft: a missing or unreadable store
/// yields an empty table instead of an error.
#[derive(Debug)]
pub struct Leaderboard {
    backend: Box<dyn LeaderboardBackend>,
    table: LeaderboardTable,
}

impl Leaderboard {
    /// Creates a leaderboard over `backend`.
    ///
    /// Corrupt stored data is logged and replaced by an empty table
    /// rather than surfaced; the unreadable file is overwritten on the
    /// next save.
    #[instrument(skip(backend))]
    pub fn new(backend: Box<dyn LeaderboardBackend>) -> Self {
        let table = match backend.load() {
            Ok(Some(table)) => {
                debug!(players = table.len(), "Leaderboard loaded");
                table
            }
            Ok(None) => {
                debug!("No stored leaderboard; starting empty");
                LeaderboardTable::new()
            }
            Err(err) => {
                warn!(error = %err, "Stored leaderboard is unreadable; starting empty");
                LeaderboardTable::new()
            }
        };
        Self { backend, table }
    }

    /// Creates a leaderboard backed by the JSON file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::new(Box::new(JsonFileBackend::new(path)))
    }

    /// Creates a leaderboard that lives only in memory.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryBackend::default()))
    }

    /// Applies a finished match to both players' records and pushes the
    /// table through the backend.
    ///
    /// A tie increments both players' `Ties`; a win increments the
    /// winner's `Wins` and the loser's `Losses`. Records are created on
    /// first mention. The in-memory update is never rolled back, and
    /// calling this twice for one match counts the match twice.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::WriteFailed`] when the backend write fails.
    /// The in-memory table has already been updated in that case.
    #[instrument(skip(self))]
    pub fn record_result(
        &mut self,
        outcome: Outcome,
        player_x: &str,
        player_o: &str,
    ) -> Result<(), StoreError> {
        match outcome {
            Outcome::Tie => {
                self.entry(player_x).add_tie();
                self.entry(player_o).add_tie();
            }
            Outcome::Winner(mark) => {
                let (winner, loser) = match mark {
                    Mark::X => (player_x, player_o),
                    Mark::O => (player_o, player_x),
                };
                self.entry(winner).add_win();
                self.entry(loser).add_loss();
            }
        }
        info!(player_x, player_o, %outcome, "Match result recorded");
        self.backend.save(&self.table)
    }

    fn entry(&mut self, player: &str) -> &mut LeaderboardRecord {
        self.table.entry(player.to_string()).or_default()
    }

    /// Returns all records keyed by player name.
    pub fn records(&self) -> &LeaderboardTable {
        &self.table
    }

    /// Returns the record for `player`, all zeros for unknown names.
    pub fn record_for(&self, player: &str) -> LeaderboardRecord {
        self.table.get(player).copied().unwrap_or_default()
    }
}
