//! Exhaustive minimax move selection.
//!
//! Terminal boards score from the perspective of the optimizing mark:
//! `+10 − depth` for its win, `depth − 10` for the opponent's win, `0` for
//! a draw. The depth bias makes faster wins score higher and slower losses
//! score less negative, so the engine takes the quickest kill and drags out
//! lost positions.
//!
//! The search clones the caller's board once into a working copy and runs
//! mutate-then-restore backtracking inside it; the caller's board is
//! untouched. Candidate cells are scanned in ascending index order and ties
//! keep the first (lowest) index, so results are fully deterministic.

use std::time::Instant;

use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, Mark};

use super::error::EngineError;
use super::outcome::{evaluate, Outcome};

/// Score of an immediate win, before the depth bias.
const WIN_SCORE: i32 = 10;

/// Statistics collected during one search call.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Game-tree nodes visited.
    pub nodes: u64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

/// Outcome of a full search: the chosen cell plus diagnostics.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SearchResult {
    /// Index of the optimal cell.
    pub cell: usize,

    /// Minimax score of that cell.
    pub score: i32,

    /// Search diagnostics.
    pub stats: SearchStats,
}

/// Index of the optimal move for `mark`, assuming perfect play by both
/// sides afterward.
///
/// Ties among equally-scored cells break to the lowest index. Fails with
/// [`EngineError::BoardFull`] when no empty cell exists.
///
/// ```
/// use tictactoe_engine::{best_move, Board, Mark};
///
/// // X has two in the top row: take the win at 2.
/// let mut board = Board::new();
/// board.place(0, Mark::X).unwrap();
/// board.place(1, Mark::X).unwrap();
/// board.place(3, Mark::O).unwrap();
/// board.place(4, Mark::O).unwrap();
///
/// assert_eq!(best_move(&board, Mark::X).unwrap(), 2);
/// ```
pub fn best_move(board: &Board, mark: Mark) -> Result<usize, EngineError> {
    search(board, mark).map(|result| result.cell)
}

/// Full search: optimal cell, its score, and diagnostics.
///
/// Same selection as [`best_move`].
pub fn search(board: &Board, mark: Mark) -> Result<SearchResult, EngineError> {
    let start = Instant::now();
    let mut nodes = 0u64;

    let candidates = score_candidates(board, mark, &mut nodes);

    let mut best: Option<(usize, i32)> = None;
    for &(cell, score) in &candidates {
        // Strict comparison over an ascending scan keeps the lowest index
        // among ties.
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((cell, score));
        }
    }

    let (cell, score) = best.ok_or(EngineError::BoardFull)?;
    let stats = SearchStats {
        nodes,
        time_us: start.elapsed().as_micros() as u64,
    };

    debug!(
        "search: {} takes cell {} (score {}, {} nodes, {}us)",
        mark, cell, score, stats.nodes, stats.time_us
    );

    Ok(SearchResult { cell, score, stats })
}

/// Minimax score of every empty cell, in ascending cell order.
///
/// For UIs that surface hints or move quality. Fails with
/// [`EngineError::BoardFull`] when no empty cell exists.
pub fn scored_moves(
    board: &Board,
    mark: Mark,
) -> Result<SmallVec<[(usize, i32); Board::CELL_COUNT]>, EngineError> {
    let mut nodes = 0u64;
    let candidates = score_candidates(board, mark, &mut nodes);

    if candidates.is_empty() {
        return Err(EngineError::BoardFull);
    }
    Ok(candidates)
}

/// Score every top-level candidate cell for `mark`.
fn score_candidates(
    board: &Board,
    mark: Mark,
    nodes: &mut u64,
) -> SmallVec<[(usize, i32); Board::CELL_COUNT]> {
    let mut scratch = *board;
    let mut candidates = SmallVec::new();

    for cell in board.empty_cells() {
        scratch.set(cell, mark);
        let score = minimax(&mut scratch, mark, 0, false, nodes);
        scratch.clear(cell);
        candidates.push((cell, score));
    }

    candidates
}

/// Recursive minimax over `board`, scored for `optimizer`.
///
/// `maximizing` is true when it is the optimizer's turn to place. Every
/// hypothetical placement is undone on the single exit path of its loop
/// iteration, so the board leaves each call exactly as it entered.
fn minimax(board: &mut Board, optimizer: Mark, depth: i32, maximizing: bool, nodes: &mut u64) -> i32 {
    *nodes += 1;

    match evaluate(board) {
        Outcome::Win { mark, .. } if mark == optimizer => return WIN_SCORE - depth,
        Outcome::Win { .. } => return depth - WIN_SCORE,
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    let to_place = if maximizing {
        optimizer
    } else {
        optimizer.opponent()
    };

    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for cell in 0..Board::CELL_COUNT {
        if board.get(cell).is_some() {
            continue;
        }
        board.set(cell, to_place);
        let score = minimax(board, optimizer, depth + 1, !maximizing, nodes);
        board.clear(cell);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
