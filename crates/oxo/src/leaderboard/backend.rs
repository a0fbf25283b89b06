//! Built-in leaderboard storage backends.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::leaderboard::{LeaderboardBackend, LeaderboardTable, StoreError};

/// Stores the table as pretty-printed JSON at a fixed path.
///
/// The file is an object keyed by player name, each value holding the
/// capitalized `Wins`/`Losses`/`Ties` fields.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Creates a backend writing to `path`. The file is created on the
    /// first save.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_corrupt(&self, detail: impl std::fmt::Display) -> StoreError {
        StoreError::ReadCorrupt {
            path: self.path.display().to_string(),
            detail: detail.to_string(),
        }
    }

    fn write_failed(&self, detail: impl std::fmt::Display) -> StoreError {
        StoreError::WriteFailed {
            path: self.path.display().to_string(),
            detail: detail.to_string(),
        }
    }
}

impl LeaderboardBackend for JsonFileBackend {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Option<LeaderboardTable>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("No leaderboard file yet");
                return Ok(None);
            }
            Err(err) => return Err(self.read_corrupt(err)),
        };
        let table = serde_json::from_str(&raw).map_err(|err| self.read_corrupt(err))?;
        Ok(Some(table))
    }

    #[instrument(skip(self, table), fields(path = %self.path.display(), players = table.len()))]
    fn save(&mut self, table: &LeaderboardTable) -> Result<(), StoreError> {
        let rendered =
            serde_json::to_string_pretty(table).map_err(|err| self.write_failed(err))?;
        fs::write(&self.path, rendered).map_err(|err| self.write_failed(err))?;
        debug!("Leaderboard written");
        Ok(())
    }
}

/// Keeps the table in memory only. Used by tests and ephemeral matches.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    stored: Option<LeaderboardTable>,
}

impl LeaderboardBackend for MemoryBackend {
    fn load(&self) -> Result<Option<LeaderboardTable>, StoreError> {
        Ok(self.stored.clone())
    }

    fn save(&mut self, table: &LeaderboardTable) -> Result<(), StoreError> {
        self.stored = Some(table.clone());
        Ok(())
    }
}
