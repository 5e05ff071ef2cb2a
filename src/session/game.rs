//! The match state machine.

use log::{trace, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, BoardError, Mark, WinLine};
use crate::engine::{best_move, evaluate, EngineError, Outcome};

use super::score::{ScoreStore, Scoreboard};

/// Fixed key under which the scoreboard is persisted.
pub const SCORE_KEY: &str = "tictactoe.scores";

/// Where a session stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves remain and nobody has won.
    InProgress,
    /// `mark` completed `line`.
    Won { mark: Mark, line: WinLine },
    /// The board filled with no winner.
    Drawn,
}

impl GameStatus {
    /// Whether the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl From<Outcome> for GameStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::InProgress => GameStatus::InProgress,
            Outcome::Win { mark, line } => GameStatus::Won { mark, line },
            Outcome::Draw => GameStatus::Drawn,
        }
    }
}

/// Errors from driving a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The targeted cell was occupied or out of range.
    #[error(transparent)]
    Board(#[from] BoardError),

    /// A move was attempted after the game ended.
    #[error("game is over; call restart() before playing")]
    GameOver,

    /// The engine refused to pick a move.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// A running match: board, turn order, status, and scores.
///
/// X moves first by default, matching convention. The session re-evaluates
/// after every placed mark, tallies the score when a game finishes, and
/// persists the tally through the attached [`ScoreStore`], if any.
pub struct GameSession {
    board: Board,
    to_move: Mark,
    starting_mark: Mark,
    status: GameStatus,
    scores: Scoreboard,
    store: Option<Box<dyn ScoreStore>>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            starting_mark: Mark::X,
            status: GameStatus::InProgress,
            scores: Scoreboard::new(),
            store: None,
        }
    }
}

impl GameSession {
    /// Create a session with an empty board, X to move, no store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set which mark opens each game.
    #[must_use]
    pub fn with_starting_mark(mut self, mark: Mark) -> Self {
        self.starting_mark = mark;
        self.to_move = mark;
        self
    }

    /// Attach a score store.
    ///
    /// Any scoreboard already persisted under [`SCORE_KEY`] is loaded;
    /// an unreadable payload is ignored and the tally starts fresh.
    #[must_use]
    pub fn with_store(mut self, store: impl ScoreStore + 'static) -> Self {
        if let Some(payload) = store.load(SCORE_KEY) {
            match serde_json::from_str(&payload) {
                Ok(scores) => self.scores = scores,
                Err(err) => warn!("ignoring unreadable scoreboard payload: {}", err),
            }
        }
        self.store = Some(Box::new(store));
        self
    }

    /// Place the current mark at `index`.
    ///
    /// Rejects occupied cells and finished games. On success the board is
    /// re-evaluated: a terminal outcome is tallied, otherwise the turn
    /// passes. Returns the status after the move.
    pub fn play(&mut self, index: usize) -> Result<GameStatus, SessionError> {
        if self.status.is_terminal() {
            return Err(SessionError::GameOver);
        }

        let mark = self.to_move;
        self.board.place(index, mark)?;
        trace!("session: {} played cell {}", mark, index);

        self.status = evaluate(&self.board).into();
        match self.status {
            GameStatus::Won { mark, .. } => {
                self.scores.record_win(mark);
                self.persist_scores();
            }
            GameStatus::Drawn => {
                self.scores.record_draw();
                self.persist_scores();
            }
            GameStatus::InProgress => {
                self.to_move = mark.opponent();
            }
        }

        Ok(self.status)
    }

    /// Compute the optimal move for the mark to move and play it.
    ///
    /// Returns the cell that was played.
    pub fn play_engine_move(&mut self) -> Result<usize, SessionError> {
        if self.status.is_terminal() {
            return Err(SessionError::GameOver);
        }

        let cell = best_move(&self.board, self.to_move)?;
        self.play(cell)?;
        Ok(cell)
    }

    /// Start a new game. Scores are kept.
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.to_move = self.starting_mark;
        self.status = GameStatus::InProgress;
    }

    /// Zero the tally, persist it, and start a new game.
    pub fn reset_scores(&mut self) {
        self.scores = Scoreboard::new();
        self.persist_scores();
        self.restart();
    }

    /// The current board snapshot.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark that moves next. Meaningless once the game is over.
    #[must_use]
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// The current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The running tally.
    #[must_use]
    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    fn persist_scores(&mut self) {
        if let Some(store) = self.store.as_mut() {
            match serde_json::to_string(&self.scores) {
                Ok(payload) => store.save(SCORE_KEY, payload),
                Err(err) => warn!("failed to serialize scoreboard: {}", err),
            }
        }
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("board", &self.board)
            .field("to_move", &self.to_move)
            .field("status", &self.status)
            .field("scores", &self.scores)
            .field("has_store", &self.store.is_some())
            .finish()
    }
}
