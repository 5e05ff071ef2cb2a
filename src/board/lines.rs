//! The 8 fixed win-lines of the 3×3 grid.

use serde::{Deserialize, Serialize};

/// A triple of cell indices that constitutes a win when all three hold the
/// same mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine(pub [usize; 3]);

impl WinLine {
    /// All 8 win-lines in scan order: 3 rows, 3 columns, 2 diagonals.
    ///
    /// This table is constant and never recomputed. Evaluation scans it in
    /// this exact order, so the first matching line is deterministic.
    pub const ALL: [WinLine; 8] = [
        WinLine([0, 1, 2]),
        WinLine([3, 4, 5]),
        WinLine([6, 7, 8]),
        WinLine([0, 3, 6]),
        WinLine([1, 4, 7]),
        WinLine([2, 5, 8]),
        WinLine([0, 4, 8]),
        WinLine([2, 4, 6]),
    ];

    /// The three cell indices of this line.
    #[must_use]
    pub const fn cells(self) -> [usize; 3] {
        self.0
    }

    /// Whether the line passes through cell `index`.
    ///
    /// ```
    /// use tictactoe_engine::WinLine;
    ///
    /// let top_row = WinLine::ALL[0];
    /// assert!(top_row.contains(1));
    /// assert!(!top_row.contains(4));
    /// ```
    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        self.0.contains(&index)
    }
}
