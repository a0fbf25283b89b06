//! Core board types: marks, cells, and the 3x3 grid.

use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The X mark (moves first).
    X,
    /// The O mark (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Vacant cell.
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Board side length.
    pub const SIZE: usize = 3;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Returns the cell at `(row, col)`, or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= Self::SIZE || col >= Self::SIZE {
            return None;
        }
        Some(self.cells[row * Self::SIZE + col])
    }

    /// Checks whether the cell at `(row, col)` is vacant.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.cell(row, col), Some(Cell::Empty))
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove::OutOfBounds`] when either coordinate falls
    /// outside the grid, and [`IllegalMove::Occupied`] when the cell
    /// already holds a mark. The board is unchanged on error.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), IllegalMove> {
        if row >= Self::SIZE || col >= Self::SIZE {
            return Err(IllegalMove::OutOfBounds(row, col));
        }
        let index = row * Self::SIZE + col;
        if self.cells[index] != Cell::Empty {
            return Err(IllegalMove::Occupied(row, col));
        }
        self.cells[index] = Cell::Occupied(mark);
        Ok(())
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Iterates the vacant cells as `(row, col)` pairs in row-major order.
    ///
    /// This is the canonical candidate order: search tie-breaking and any
    /// scripted traversal rely on it.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| (index / Self::SIZE, index % Self::SIZE))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..Self::SIZE {
            for col in 0..Self::SIZE {
                let symbol = match self.cells[row * Self::SIZE + col] {
                    Cell::Empty => ".",
                    Cell::Occupied(Mark::X) => "X",
                    Cell::Occupied(Mark::O) => "O",
                };
                f.write_str(symbol)?;
                if col < Self::SIZE - 1 {
                    f.write_str("|")?;
                }
            }
            if row < Self::SIZE - 1 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error returned when a placement is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// The coordinates fall outside the 3x3 grid.
    #[display("Position ({}, {}) is outside the board", _0, _1)]
    OutOfBounds(usize, usize),
    /// The cell at the coordinates already holds a mark.
    #[display("Cell ({}, {}) is already occupied", _0, _1)]
    Occupied(usize, usize),
}

impl std::error::Error for IllegalMove {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(|cell| *cell == Cell::Empty));
        assert_eq!(board.empty_cells().count(), 9);
    }

    #[test]
    fn test_place_and_read_back() {
        let mut board = Board::new();
        board.place(1, 2, Mark::X).unwrap();
        assert_eq!(board.cell(1, 2), Some(Cell::Occupied(Mark::X)));
        assert!(!board.is_empty(1, 2));
        assert!(board.is_empty(0, 0));
    }

    #[test]
    fn test_place_occupied_rejected() {
        let mut board = Board::new();
        board.place(0, 0, Mark::X).unwrap();
        let before = board;
        assert_eq!(
            board.place(0, 0, Mark::O),
            Err(IllegalMove::Occupied(0, 0))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_out_of_bounds_rejected() {
        let mut board = Board::new();
        assert_eq!(
            board.place(3, 0, Mark::X),
            Err(IllegalMove::OutOfBounds(3, 0))
        );
        assert_eq!(
            board.place(0, 3, Mark::X),
            Err(IllegalMove::OutOfBounds(0, 3))
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_cell_out_of_bounds_is_none() {
        let board = Board::new();
        assert_eq!(board.cell(3, 0), None);
        assert_eq!(board.cell(0, 3), None);
        assert!(!board.is_empty(3, 3));
    }

    #[test]
    fn test_empty_cells_row_major_order() {
        let mut board = Board::new();
        board.place(0, 0, Mark::X).unwrap();
        board.place(1, 1, Mark::O).unwrap();
        let empties: Vec<_> = board.empty_cells().collect();
        assert_eq!(
            empties,
            vec![(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn test_display_grid() {
        let mut board = Board::new();
        board.place(0, 0, Mark::X).unwrap();
        board.place(1, 1, Mark::O).unwrap();
        assert_eq!(board.to_string(), "X|.|.\n-+-+-\n.|O|.\n-+-+-\n.|.|.");
    }

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }
}
