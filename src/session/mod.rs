//! Match state machine and score tallies.
//!
//! ## Overview
//!
//! [`GameSession`] owns what the engine deliberately does not: the live
//! board, whose turn it is, the finished/ongoing status, and the running
//! win/draw tally. It is the state a UI binds to; rendering and input stay
//! with the caller.
//!
//! Score persistence goes through the [`ScoreStore`] trait, an injected
//! string key-value interface. Nothing here touches ambient storage.
//!
//! ## Usage
//!
//! ```
//! use tictactoe_engine::{GameSession, GameStatus, Mark};
//!
//! let mut session = GameSession::new();
//! session.play(4).unwrap();                    // X takes the center
//! let reply = session.play_engine_move().unwrap(); // O answers optimally
//! assert_ne!(reply, 4);
//! assert_eq!(session.status(), GameStatus::InProgress);
//! ```

pub mod game;
pub mod score;

pub use game::{GameSession, GameStatus, SessionError, SCORE_KEY};
pub use score::{MemoryStore, Scoreboard, ScoreStore};
