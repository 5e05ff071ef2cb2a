//! Engine integration tests: evaluation, optimal play, and purity.

use proptest::prelude::*;
use tictactoe_engine::{
    best_move, evaluate, scored_moves, Board, EngineError, Mark, Outcome,
};

fn board_from(spec: &str) -> Board {
    let cells: Vec<Option<Mark>> = spec
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            _ => None,
        })
        .collect();
    Board::from_cells(cells.try_into().expect("spec must have 9 cells"))
}

// =============================================================================
// Evaluation
// =============================================================================

#[test]
fn test_all_eight_lines_detected() {
    let lines: [[usize; 3]; 8] = [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ];

    for mark in [Mark::X, Mark::O] {
        for line in lines {
            let mut cells = [None; 9];
            for i in line {
                cells[i] = Some(mark);
            }
            let board = Board::from_cells(cells);
            assert_eq!(
                evaluate(&board).winner(),
                Some(mark),
                "line {:?} for {} not detected",
                line,
                mark
            );
        }
    }
}

#[test]
fn test_draw_requires_full_board() {
    let drawn = board_from(
        "XOX
         XXO
         OXO",
    );
    assert_eq!(evaluate(&drawn), Outcome::Draw);

    let ongoing = board_from(
        "XOX
         XXO
         OX.",
    );
    assert_eq!(evaluate(&ongoing), Outcome::InProgress);
}

// =============================================================================
// Optimal play
// =============================================================================

#[test]
fn test_win_takes_priority_over_block() {
    // X: 0, 1 and O: 3, 4 — both one move from winning. X to move must
    // complete its own row, not block.
    let board = board_from(
        "XX.
         OO.
         ...",
    );
    assert_eq!(best_move(&board, Mark::X).unwrap(), 2);
}

#[test]
fn test_forced_block() {
    // X threatens 0-1-2; O has no win and must block at 2.
    let board = board_from(
        "XX.
         .O.
         ...",
    );
    assert_eq!(best_move(&board, Mark::O).unwrap(), 2);
}

#[test]
fn test_empty_board_opening_is_optimal() {
    let cell = best_move(&Board::new(), Mark::X).unwrap();
    // Center and corners are the optimal openings; with the lowest-index
    // tie-break, the answer is pinned to 0.
    assert!([0, 2, 4, 6, 8].contains(&cell));
    assert_eq!(cell, 0);
}

#[test]
fn test_self_play_from_empty_board_draws() {
    let mut board = Board::new();
    let mut mark = Mark::X;

    let outcome = loop {
        match evaluate(&board) {
            Outcome::InProgress => {}
            outcome => break outcome,
        }
        let cell = best_move(&board, mark).unwrap();
        board.place(cell, mark).unwrap();
        mark = mark.opponent();
    };

    assert_eq!(outcome, Outcome::Draw, "perfect play must draw:\n{}", board);
}

#[test]
fn test_any_opening_draws_under_perfect_replies() {
    // Every first move is drawable, so engine-vs-engine play after any
    // opening must still end drawn.
    for opening in 0..9 {
        let mut board = Board::new();
        board.place(opening, Mark::X).unwrap();
        let mut mark = Mark::O;

        let outcome = loop {
            match evaluate(&board) {
                Outcome::InProgress => {}
                outcome => break outcome,
            }
            let cell = best_move(&board, mark).unwrap();
            board.place(cell, mark).unwrap();
            mark = mark.opponent();
        };

        assert_eq!(
            outcome,
            Outcome::Draw,
            "opening {} should draw:\n{}",
            opening,
            board
        );
    }
}

#[test]
fn test_full_board_is_refused() {
    let board = board_from(
        "XOX
         XXO
         OXO",
    );
    assert_eq!(best_move(&board, Mark::X), Err(EngineError::BoardFull));
}

// =============================================================================
// Properties
// =============================================================================

fn arb_cell() -> impl Strategy<Value = Option<Mark>> {
    prop_oneof![
        Just(None),
        Just(Some(Mark::X)),
        Just(Some(Mark::O)),
    ]
}

fn arb_board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(arb_cell()).prop_map(Board::from_cells)
}

proptest! {
    #[test]
    fn prop_evaluate_never_panics_and_is_idempotent(board in arb_board()) {
        prop_assert_eq!(evaluate(&board), evaluate(&board));
    }

    #[test]
    fn prop_best_move_returns_empty_cell(board in arb_board()) {
        prop_assume!(!board.is_full());
        let cell = best_move(&board, Mark::X).unwrap();
        prop_assert!(board.get(cell).is_none());
    }

    #[test]
    fn prop_best_move_leaves_board_unchanged(board in arb_board()) {
        prop_assume!(!board.is_full());
        let snapshot = board;
        let _ = best_move(&board, Mark::O).unwrap();
        prop_assert_eq!(board, snapshot);
    }

    #[test]
    fn prop_scored_moves_lists_every_empty_cell(board in arb_board()) {
        prop_assume!(!board.is_full());
        let scores = scored_moves(&board, Mark::X).unwrap();
        let cells: Vec<usize> = scores.iter().map(|&(c, _)| c).collect();
        prop_assert_eq!(cells, board.empty_cells().to_vec());
    }
}
