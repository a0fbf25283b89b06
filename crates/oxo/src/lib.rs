//! Tic-tac-toe matches with an unbeatable computer opponent and a
//! persistent leaderboard.
//!
//! The `oxo_engine` crate supplies the board, the rules, and the search;
//! this crate binds named participants to marks, enforces the match
//! lifecycle, and records finished matches through a pluggable store.
//!
//! # Example
//!
//! ```
//! use oxo::{Leaderboard, MatchMode, MatchPhase, MatchSession, Mark};
//!
//! let mut session = MatchSession::new(Leaderboard::in_memory());
//! session.configure(MatchMode::vs_computer("Ada", Mark::X)?)?;
//!
//! session.submit_move(Mark::X, 0, 0)?;
//! // The computer has already answered; it is X's turn again.
//! assert_eq!(session.to_move(), Some(Mark::X));
//! assert_eq!(session.phase(), MatchPhase::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod leaderboard;
mod participants;
mod session;

pub use leaderboard::{
    JsonFileBackend, Leaderboard, LeaderboardBackend, LeaderboardRecord, LeaderboardTable,
    MemoryBackend, StoreError,
};
pub use participants::{
    COMPUTER_NAME, MatchMode, NameError, Participant, ParticipantKind, Participants, PlayerName,
};
pub use session::{MatchError, MatchPhase, MatchSession, Placement};

pub use oxo_engine::{Board, Cell, IllegalMove, Mark, NoLegalMove, Outcome, best_move};
