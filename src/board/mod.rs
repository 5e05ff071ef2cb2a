//! Board types: marks, the 9-cell grid, and win-lines.
//!
//! Everything here is a small value type. `Board` is `Copy`, so the search
//! clones it for free and callers can snapshot freely.

pub mod grid;
pub mod lines;
pub mod mark;

pub use grid::{Board, BoardError};
pub use lines::WinLine;
pub use mark::Mark;
