//! Pure tic-tac-toe game logic.
//!
//! This crate holds the board representation, the terminal-condition
//! rules, and an exhaustive minimax search. It performs no I/O; match
//! orchestration and persistence live in the `oxo` crate.
//!
//! # Example
//!
//! ```
//! use oxo_engine::{Board, Mark};
//!
//! let mut board = Board::new();
//! board.place(0, 0, Mark::X)?;
//!
//! // Center is the only reply that holds the draw against a corner.
//! let reply = oxo_engine::best_move(&board, Mark::O)?;
//! assert_eq!(reply, (1, 1));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod rules;
mod search;

pub use board::{Board, Cell, IllegalMove, Mark};
pub use rules::Outcome;
pub use search::{NoLegalMove, best_move};
