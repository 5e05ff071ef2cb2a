//! The 9-cell grid.
//!
//! Cell index `i` maps to row `i / 3`, column `i % 3`:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::mark::Mark;

/// Errors from placing a mark on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Cell index outside `0..9`.
    #[error("cell index {0} is out of range (expected 0..9)")]
    OutOfRange(usize),

    /// Cell already holds a mark.
    #[error("cell {0} is already occupied")]
    Occupied(usize),
}

/// A 3×3 board snapshot.
///
/// `Copy` by design: 9 optional marks fit in 9 bytes, so snapshots and the
/// search's working copies cost nothing.
///
/// ```
/// use tictactoe_engine::{Board, Mark};
///
/// let mut board = Board::new();
/// board.place(4, Mark::X).unwrap();
/// assert_eq!(board.get(4), Some(Mark::X));
/// assert_eq!(board.empty_cells().len(), 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; Board::CELL_COUNT],
}

impl Board {
    /// Number of cells on the board.
    pub const CELL_COUNT: usize = 9;

    /// Side length of the grid.
    pub const SIDE: usize = 3;

    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; Board::CELL_COUNT],
        }
    }

    /// Create a board from explicit cell contents.
    #[must_use]
    pub const fn from_cells(cells: [Option<Mark>; Board::CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// The mark at `index`, or `None` for an empty cell.
    ///
    /// Panics if `index >= 9`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells[index]
    }

    /// All cells in index order.
    #[must_use]
    pub const fn cells(&self) -> &[Option<Mark>; Board::CELL_COUNT] {
        &self.cells
    }

    /// Place `mark` at `index`.
    ///
    /// Fails on an out-of-range index or an occupied cell; the board is
    /// unchanged on failure.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), BoardError> {
        if index >= Board::CELL_COUNT {
            return Err(BoardError::OutOfRange(index));
        }
        if self.cells[index].is_some() {
            return Err(BoardError::Occupied(index));
        }
        self.cells[index] = Some(mark);
        Ok(())
    }

    /// Unchecked placement for search backtracking. Caller guarantees the
    /// cell is empty and in range.
    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        debug_assert!(self.cells[index].is_none());
        self.cells[index] = Some(mark);
    }

    /// Undo a hypothetical placement.
    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = None;
    }

    /// Whether every cell holds a mark.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Whether no cell holds a mark.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Indices of all empty cells, ascending.
    #[must_use]
    pub fn empty_cells(&self) -> SmallVec<[usize; Board::CELL_COUNT]> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Row of a cell index.
    #[must_use]
    pub const fn row_of(index: usize) -> usize {
        index / Board::SIDE
    }

    /// Column of a cell index.
    #[must_use]
    pub const fn col_of(index: usize) -> usize {
        index % Board::SIDE
    }

    /// Cell index of a (row, column) pair.
    #[must_use]
    pub const fn index_of(row: usize, col: usize) -> usize {
        row * Board::SIDE + col
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..Board::SIDE {
            for col in 0..Board::SIDE {
                match self.cells[Board::index_of(row, col)] {
                    Some(mark) => write!(f, "{}", mark)?,
                    None => write!(f, ".")?,
                }
            }
            if row + 1 < Board::SIDE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_empty());
        assert!(!board.is_full());
        assert_eq!(board.empty_cells().len(), 9);
    }

    #[test]
    fn test_place_and_get() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(8, Mark::O).unwrap();

        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.get(8), Some(Mark::O));
        assert_eq!(board.get(4), None);
    }

    #[test]
    fn test_place_occupied_fails() {
        let mut board = Board::new();
        board.place(4, Mark::X).unwrap();

        let err = board.place(4, Mark::O).unwrap_err();
        assert_eq!(err, BoardError::Occupied(4));
        // Board unchanged on failure
        assert_eq!(board.get(4), Some(Mark::X));
    }

    #[test]
    fn test_place_out_of_range_fails() {
        let mut board = Board::new();
        assert_eq!(board.place(9, Mark::X), Err(BoardError::OutOfRange(9)));
    }

    #[test]
    fn test_empty_cells_ascending() {
        let mut board = Board::new();
        board.place(1, Mark::X).unwrap();
        board.place(5, Mark::O).unwrap();

        let empty = board.empty_cells();
        assert_eq!(empty.as_slice(), &[0, 2, 3, 4, 6, 7, 8]);
    }

    #[test]
    fn test_row_col_mapping() {
        assert_eq!(Board::row_of(0), 0);
        assert_eq!(Board::col_of(0), 0);
        assert_eq!(Board::row_of(5), 1);
        assert_eq!(Board::col_of(5), 2);
        assert_eq!(Board::index_of(2, 1), 7);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(4, Mark::O).unwrap();

        assert_eq!(board.to_string(), "X..\n.O.\n...");
    }

    #[test]
    fn test_serialization() {
        let mut board = Board::new();
        board.place(2, Mark::O).unwrap();

        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }
}
