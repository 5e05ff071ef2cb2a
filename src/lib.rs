//! # tictactoe-engine
//!
//! Perfect-play decision logic for 3×3 Tic-Tac-Toe.
//!
//! ## Design Principles
//!
//! 1. **Pure Decisions**: `evaluate` and `best_move` are deterministic
//!    functions over a board snapshot. The engine never mutates caller
//!    state and holds nothing between calls.
//!
//! 2. **Exhaustive Search**: Optimal moves come from full minimax over the
//!    game tree. The 9-cell space is small enough that no pruning is needed.
//!
//! 3. **UI-Agnostic**: Rendering, input, and timing live in the caller.
//!    The `session` layer models the match state machine only; persistence
//!    is an injected key-value trait, never ambient storage.
//!
//! ## Modules
//!
//! - `board`: Marks, the 9-cell grid, and the 8 fixed win-lines
//! - `engine`: Terminal evaluation and minimax move selection
//! - `session`: Match state machine, score tallies, pluggable score store

pub mod board;
pub mod engine;
pub mod session;

// Re-export commonly used types
pub use crate::board::{Board, BoardError, Mark, WinLine};

pub use crate::engine::{
    best_move, evaluate, scored_moves, search,
    EngineError, Outcome, SearchResult, SearchStats,
};

pub use crate::session::{
    GameSession, GameStatus, MemoryStore, Scoreboard, ScoreStore, SessionError, SCORE_KEY,
};
