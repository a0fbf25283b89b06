//! Exhaustive minimax search for the strongest available move.

use crate::board::{Board, Mark};
use tracing::{debug, instrument};

/// Error returned when a move is requested on a full board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("No legal move: the board is full")]
pub struct NoLegalMove;

impl std::error::Error for NoLegalMove {}

/// Selects the strongest move for `mark` on `board`.
///
/// Every vacant cell is scored by full-depth minimax with terminal values
/// +1 (a `mark` win), -1 (an opponent win), and 0 (a full board with no
/// winner). There is no pruning and no depth discount. Equally scored
/// cells resolve to the first candidate in row-major order, so the choice
/// is deterministic for a given board.
///
/// # Errors
///
/// Returns [`NoLegalMove`] if the board has no vacant cell.
#[instrument(skip(board))]
pub fn best_move(board: &Board, mark: Mark) -> Result<(usize, usize), NoLegalMove> {
    let mut best_value = i32::MIN;
    let mut best_cell = None;
    for (row, col) in board.empty_cells() {
        let mut child = *board;
        child
            .place(row, col, mark)
            .expect("empty_cells yields vacant cells");
        let value = score(&child, mark, mark.opponent());
        if value > best_value {
            best_value = value;
            best_cell = Some((row, col));
        }
    }

    let (row, col) = best_cell.ok_or(NoLegalMove)?;
    debug!(row, col, value = best_value, "Selected best move");
    Ok((row, col))
}

/// Scores a position by exhaustive recursion.
///
/// `maximizing` is the mark the score favors; `to_move` plays next from
/// this position.
fn score(board: &Board, maximizing: Mark, to_move: Mark) -> i32 {
    if board.is_winner(maximizing) {
        return 1;
    }
    if board.is_winner(maximizing.opponent()) {
        return -1;
    }
    if board.is_full() {
        return 0;
    }

    let mut best = if to_move == maximizing {
        i32::MIN
    } else {
        i32::MAX
    };
    for (row, col) in board.empty_cells() {
        let mut child = *board;
        child
            .place(row, col, to_move)
            .expect("empty_cells yields vacant cells");
        let value = score(&child, maximizing, to_move.opponent());
        if to_move == maximizing {
            best = best.max(value);
        } else {
            best = best.min(value);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(row, col, mark) in marks {
            board.place(row, col, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_takes_immediate_win() {
        // X X . / O O . / . . . with X to move: (0, 2) wins on the spot.
        let board = board_with(&[
            (0, 0, Mark::X),
            (0, 1, Mark::X),
            (1, 0, Mark::O),
            (1, 1, Mark::O),
        ]);
        assert_eq!(best_move(&board, Mark::X), Ok((0, 2)));
    }

    #[test]
    fn test_blocks_opponent_win() {
        // O . . / X X . / . . . with O to move: every cell except the
        // block at (1, 2) hands X the middle row.
        let board = board_with(&[
            (1, 0, Mark::X),
            (1, 1, Mark::X),
            (0, 0, Mark::O),
        ]);
        assert_eq!(best_move(&board, Mark::O), Ok((1, 2)));
    }

    #[test]
    fn test_first_cell_on_empty_board() {
        // All openings score 0, so the row-major tie-break picks (0, 0).
        let board = Board::new();
        assert_eq!(best_move(&board, Mark::X), Ok((0, 0)));
    }

    #[test]
    fn test_center_reply_to_corner_opening() {
        let board = board_with(&[(0, 0, Mark::X)]);
        assert_eq!(best_move(&board, Mark::O), Ok((1, 1)));
    }

    #[test]
    fn test_deterministic_choice() {
        let board = board_with(&[(0, 0, Mark::X), (1, 1, Mark::O), (2, 2, Mark::X)]);
        let first = best_move(&board, Mark::O);
        let second = best_move(&board, Mark::O);
        assert!(first.is_ok());
        assert_eq!(first, second);
    }

    #[test]
    fn test_full_board_has_no_move() {
        // X O X / X O O / O X X is a finished tie.
        let board = board_with(&[
            (0, 0, Mark::X),
            (0, 1, Mark::O),
            (0, 2, Mark::X),
            (1, 0, Mark::X),
            (1, 1, Mark::O),
            (1, 2, Mark::O),
            (2, 0, Mark::O),
            (2, 1, Mark::X),
            (2, 2, Mark::X),
        ]);
        assert_eq!(best_move(&board, Mark::X), Err(NoLegalMove));
    }
}
