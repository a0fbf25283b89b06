//! Terminal-condition rules: win lines, fullness, outcome classification.

use crate::board::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};

/// The eight winning lines as cell indices.
const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

impl Board {
    /// Checks whether `mark` holds a complete line.
    ///
    /// Every line is scanned on each call; nothing is tracked
    /// incrementally.
    pub fn is_winner(&self, mark: Mark) -> bool {
        let cells = self.cells();
        LINES
            .iter()
            .any(|line| line.iter().all(|&index| cells[index] == Cell::Occupied(mark)))
    }

    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        if self.is_winner(Mark::X) {
            Some(Mark::X)
        } else if self.is_winner(Mark::O) {
            Some(Mark::O)
        } else {
            None
        }
    }

    /// Checks whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells().iter().all(|cell| *cell != Cell::Empty)
    }

    /// Classifies a terminal board, or `None` while play can continue.
    ///
    /// A complete line takes precedence over fullness, so a winning move
    /// into the last open cell reports the winner rather than a tie.
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(mark) = self.winner() {
            Some(Outcome::Winner(mark))
        } else if self.is_full() {
            Some(Outcome::Tie)
        } else {
            None
        }
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The mark that completed a line.
    Winner(Mark),
    /// Full board with no complete line.
    Tie,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "{} wins", mark),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
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
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!board.is_winner(Mark::X));
        assert!(!board.is_winner(Mark::O));
        assert_eq!(board.winner(), None);
        assert_eq!(board.outcome(), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (0, 0, Mark::X),
            (0, 1, Mark::X),
            (0, 2, Mark::X),
            (1, 0, Mark::O),
            (1, 1, Mark::O),
        ]);
        assert!(board.is_winner(Mark::X));
        assert!(!board.is_winner(Mark::O));
        assert_eq!(board.winner(), Some(Mark::X));
    }

    #[test]
    fn test_winner_middle_column() {
        let board = board_with(&[
            (0, 1, Mark::O),
            (1, 1, Mark::O),
            (2, 1, Mark::O),
            (0, 0, Mark::X),
            (2, 2, Mark::X),
        ]);
        assert_eq!(board.winner(), Some(Mark::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (0, 2, Mark::X),
            (1, 1, Mark::X),
            (2, 0, Mark::X),
            (0, 0, Mark::O),
            (0, 1, Mark::O),
        ]);
        assert_eq!(board.winner(), Some(Mark::X));
        assert_eq!(board.outcome(), Some(Outcome::Winner(Mark::X)));
    }

    #[test]
    fn test_winner_main_diagonal_uncontested() {
        // Placement does not enforce turn order, so three marks with no
        // reply still register as a win.
        let board = board_with(&[(0, 0, Mark::X), (1, 1, Mark::X), (2, 2, Mark::X)]);
        assert!(board.is_winner(Mark::X));
        assert_eq!(board.outcome(), Some(Outcome::Winner(Mark::X)));
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let board = board_with(&[(0, 0, Mark::X), (0, 1, Mark::X)]);
        assert_eq!(board.winner(), None);
        assert_eq!(board.outcome(), None);
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();
        assert!(!board.is_full());
        let marks = [
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
            Mark::X,
        ];
        for (index, mark) in marks.into_iter().enumerate() {
            board.place(index / 3, index % 3, mark).unwrap();
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_tie_on_full_board_without_line() {
        // X O X / X O O / O X X has no complete line.
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
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
        assert_eq!(board.outcome(), Some(Outcome::Tie));
    }

    #[test]
    fn test_win_on_final_cell_beats_fullness() {
        // O X O / X O O / X X X: the bottom row completes for X on the
        // ninth placement.
        let board = board_with(&[
            (0, 0, Mark::O),
            (0, 1, Mark::X),
            (0, 2, Mark::O),
            (1, 0, Mark::X),
            (1, 1, Mark::O),
            (1, 2, Mark::O),
            (2, 0, Mark::X),
            (2, 1, Mark::X),
            (2, 2, Mark::X),
        ]);
        assert!(board.is_full());
        assert_eq!(board.outcome(), Some(Outcome::Winner(Mark::X)));
    }
}
