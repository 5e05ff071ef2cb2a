//! Terminal evaluation and optimal-move selection.
//!
//! ## Overview
//!
//! Two decision entry points, both pure functions over a board snapshot:
//!
//! - [`evaluate`]: has the game ended, and how?
//! - [`best_move`]: which cell should a mark take, assuming both sides play
//!   perfectly afterward?
//!
//! `best_move` runs exhaustive minimax. From an empty board that is at most
//! 9! ≈ 363k positions, far fewer mid-game, so a call always completes
//! synchronously well inside a UI event turn. No pruning, no incremental
//! search, no state carried between calls.
//!
//! ## Usage
//!
//! ```
//! use tictactoe_engine::{best_move, evaluate, Board, Mark, Outcome};
//!
//! let board = Board::new();
//! assert_eq!(evaluate(&board), Outcome::InProgress);
//!
//! let cell = best_move(&board, Mark::X).unwrap();
//! assert!(board.get(cell).is_none());
//! ```

pub mod error;
pub mod outcome;
pub mod search;

pub use error::EngineError;
pub use outcome::{evaluate, Outcome};
pub use search::{best_move, scored_moves, search, SearchResult, SearchStats};
