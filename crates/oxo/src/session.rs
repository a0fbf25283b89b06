//! Match lifecycle: configuration, turn discipline, and automated play.

use derive_getters::Getters;
use derive_new::new;
use oxo_engine::{Board, IllegalMove, Mark, Outcome, best_move};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::leaderboard::Leaderboard;
use crate::participants::{MatchMode, Participants};

/// Lifecycle phase of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// No match is underway; moves are rejected.
    Idle,
    /// A match is accepting moves.
    InProgress,
    /// The match has ended; its outcome is fixed.
    Finished,
}

impl std::fmt::Display for MatchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchPhase::Idle => write!(f, "idle"),
            MatchPhase::InProgress => write!(f, "in progress"),
            MatchPhase::Finished => write!(f, "finished"),
        }
    }
}

/// An accepted placement, kept in the match history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new, Getters)]
pub struct Placement {
    mark: Mark,
    row: usize,
    col: usize,
}

/// Errors surfaced by match operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MatchError {
    /// The board rejected the placement.
    #[display("{}", _0)]
    Illegal(IllegalMove),
    /// A mark tried to move out of turn.
    #[display("It is not {mark}'s turn; {to_move} is to move")]
    NotYourTurn {
        /// The mark that attempted the move.
        mark: Mark,
        /// The mark whose turn it is.
        to_move: Mark,
    },
    /// The match is not accepting moves in its current phase.
    #[display("Match is {phase}; no moves are accepted")]
    NotActive {
        /// The phase the match was in.
        phase: MatchPhase,
    },
    /// The board has no vacant cell to play into.
    #[display("No legal move is available")]
    NoLegalMove,
}

impl std::error::Error for MatchError {}

/// A match between two participants.
///
/// The session owns the board, the turn order, the bound participants,
/// and the leaderboard that finished matches are reported to. Turns held
/// by the automated participant are played internally, so callers only
/// ever submit moves for human seats.
#[derive(Debug)]
pub struct MatchSession {
    board: Board,
    to_move: Mark,
    phase: MatchPhase,
    outcome: Option<Outcome>,
    participants: Option<Participants>,
    history: Vec<Placement>,
    leaderboard: Leaderboard,
}

// ─────────────────────────────────────────────────────────────
//  Construction and lifecycle
// ─────────────────────────────────────────────────────────────

impl MatchSession {
    /// Creates an idle session reporting results to `leaderboard`.
    #[instrument(skip(leaderboard))]
    pub fn new(leaderboard: Leaderboard) -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            phase: MatchPhase::Idle,
            outcome: None,
            participants: None,
            history: Vec::new(),
            leaderboard,
        }
    }

    /// Binds participants and starts a fresh match.
    ///
    /// Works from any phase: an unfinished match is discarded first. X
    /// always moves first; when the engine holds X its opening move is
    /// played before this returns.
    ///
    /// # Errors
    ///
    /// Propagates a [`MatchError`] from the engine's opening move, which
    /// cannot fail on a fresh board.
    #[instrument(skip(self))]
    pub fn configure(&mut self, mode: MatchMode) -> Result<(), MatchError> {
        self.clear();
        let participants = Participants::from_mode(&mode);
        info!(
            player_x = %participants.player_x().name(),
            player_o = %participants.player_o().name(),
            "Match configured"
        );
        self.participants = Some(participants);
        self.phase = MatchPhase::InProgress;
        self.drive_computer()
    }

    /// Discards the current match and returns to `Idle`.
    ///
    /// The board, outcome, and history are cleared; the participants are
    /// kept until the next [`configure`](Self::configure) replaces them.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.clear();
        info!("Match reset");
    }

    fn clear(&mut self) {
        self.board = Board::new();
        self.to_move = Mark::X;
        self.phase = MatchPhase::Idle;
        self.outcome = None;
        self.history.clear();
    }
}

// ─────────────────────────────────────────────────────────────
//  Moves
// ─────────────────────────────────────────────────────────────

impl MatchSession {
    /// Submits a move for `mark` at `(row, col)`.
    ///
    /// After an accepted placement the session advances through any
    /// turns held by the automated participant, so when this returns the
    /// match is either finished or waiting on a human seat.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NotActive`] outside an active match,
    /// [`MatchError::NotYourTurn`] when `mark` is not the turn holder,
    /// and [`MatchError::Illegal`] when the board rejects the placement.
    /// A rejected move leaves the session unchanged.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn submit_move(&mut self, mark: Mark, row: usize, col: usize) -> Result<(), MatchError> {
        self.apply_move(mark, row, col)?;
        self.drive_computer()
    }

    fn apply_move(&mut self, mark: Mark, row: usize, col: usize) -> Result<(), MatchError> {
        if self.phase != MatchPhase::InProgress {
            warn!(phase = %self.phase, "Move submitted outside an active match");
            return Err(MatchError::NotActive { phase: self.phase });
        }
        if mark != self.to_move {
            warn!(%mark, to_move = %self.to_move, "Move submitted out of turn");
            return Err(MatchError::NotYourTurn {
                mark,
                to_move: self.to_move,
            });
        }
        self.board
            .place(row, col, mark)
            .map_err(MatchError::Illegal)?;
        self.history.push(Placement::new(mark, row, col));
        debug!(%mark, row, col, "Placement accepted");

        if self.board.is_winner(mark) {
            self.finish(Outcome::Winner(mark));
        } else if self.board.is_full() {
            self.finish(Outcome::Tie);
        } else {
            self.to_move = mark.opponent();
        }
        Ok(())
    }

    /// Plays engine turns until the match is over or a human is to move.
    fn drive_computer(&mut self) -> Result<(), MatchError> {
        while self.phase == MatchPhase::InProgress && self.turn_is_computer() {
            let (row, col) =
                best_move(&self.board, self.to_move).map_err(|_| MatchError::NoLegalMove)?;
            info!(mark = %self.to_move, row, col, "Computer plays");
            self.apply_move(self.to_move, row, col)?;
        }
        Ok(())
    }

    fn turn_is_computer(&self) -> bool {
        self.participants
            .as_ref()
            .is_some_and(|participants| participants.by_mark(self.to_move).is_computer())
    }

    /// Fixes the outcome and reports it to the leaderboard.
    ///
    /// This is the only path into `Finished`, so each match is reported
    /// exactly once. A failed write is logged and does not fail the move
    /// that ended the match.
    fn finish(&mut self, outcome: Outcome) {
        self.phase = MatchPhase::Finished;
        self.outcome = Some(outcome);
        info!(%outcome, moves = self.history.len(), "Match finished");

        if let Some(participants) = &self.participants {
            let player_x = participants.player_x().name().as_str();
            let player_o = participants.player_o().name().as_str();
            if let Err(err) = self
                .leaderboard
                .record_result(outcome, player_x, player_o)
            {
                warn!(error = %err, "Match result could not be persisted");
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Accessors
// ─────────────────────────────────────────────────────────────

impl MatchSession {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Returns the mark to move, `Some` only while a match is active.
    pub fn to_move(&self) -> Option<Mark> {
        (self.phase == MatchPhase::InProgress).then_some(self.to_move)
    }

    /// Returns the fixed outcome of a finished match.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the bound participants, if any have been configured.
    pub fn participants(&self) -> Option<&Participants> {
        self.participants.as_ref()
    }

    /// Returns the accepted placements of the current match in order.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// Returns the leaderboard this session reports to.
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }
}
