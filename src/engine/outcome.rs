//! Terminal evaluation.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Mark, WinLine};

/// Result of evaluating a board.
///
/// Exactly one outcome applies to any board. `Win` carries the completed
/// line so a UI can highlight it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// No completed line and at least one empty cell.
    InProgress,
    /// Some win-line is fully occupied by `mark`.
    Win { mark: Mark, line: WinLine },
    /// No completed line and no empty cell.
    Draw,
}

impl Outcome {
    /// Whether the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning mark, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }
}

/// Evaluate a board snapshot.
///
/// Scans [`WinLine::ALL`] in its fixed order and reports the first line
/// whose three cells hold the same mark. With no winning line, a full board
/// is a `Draw` and anything else is `InProgress`.
///
/// No legality checks: a malformed board with two "winning" marks resolves
/// deterministically to the first completed line in scan order. Pure and
/// idempotent; repeated calls on the same board return the same outcome.
///
/// ```
/// use tictactoe_engine::{evaluate, Board, Mark, Outcome};
///
/// let mut board = Board::new();
/// for i in [0, 1, 2] {
///     board.place(i, Mark::X).unwrap();
/// }
/// assert_eq!(evaluate(&board).winner(), Some(Mark::X));
/// ```
#[must_use]
pub fn evaluate(board: &Board) -> Outcome {
    for line in WinLine::ALL {
        let [a, b, c] = line.cells();
        if let Some(mark) = board.get(a) {
            if board.get(b) == Some(mark) && board.get(c) == Some(mark) {
                return Outcome::Win { mark, line };
            }
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
