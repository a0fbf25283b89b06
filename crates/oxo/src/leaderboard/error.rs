//! Leaderboard storage errors.

/// Errors surfaced by leaderboard storage backends.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum StoreError {
    /// Backing data exists but could not be read or parsed.
    #[display("Leaderboard at {path} is unreadable: {detail}")]
    ReadCorrupt {
        /// Location of the backing data.
        path: String,
        /// Parser or I/O detail.
        detail: String,
    },
    /// The updated table could not be written back.
    #[display("Failed to write leaderboard to {path}: {detail}")]
    WriteFailed {
        /// Location of the backing data.
        path: String,
        /// I/O detail.
        detail: String,
    },
}

impl std::error::Error for StoreError {}
