//! Engine error taxonomy.

use thiserror::Error;

/// Errors from move selection.
///
/// Evaluation never errors: any board, including malformed ones, has a
/// well-defined outcome. Move selection refuses boards with no legal move
/// rather than fabricating an index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A move was requested on a board with no empty cell.
    #[error("no empty cell: cannot select a move on a full board")]
    BoardFull,
}
