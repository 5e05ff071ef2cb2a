//! Win/draw tallies and the pluggable score store.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::board::Mark;

/// Running tally of finished games.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Games won by X.
    pub x_wins: u32,

    /// Games won by O.
    pub o_wins: u32,

    /// Drawn games.
    pub draws: u32,
}

impl Scoreboard {
    /// Create an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a win for `mark`.
    pub fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x_wins += 1,
            Mark::O => self.o_wins += 1,
        }
    }

    /// Record a draw.
    pub fn record_draw(&mut self) {
        self.draws += 1;
    }

    /// Wins recorded for `mark`.
    #[must_use]
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Total finished games.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Injected key-value persistence for score tallies.
///
/// Models the browser-storage shim a web UI would supply: string keys,
/// string values, no structure. Implementations decide durability; the
/// session never assumes any.
pub trait ScoreStore {
    /// Fetch the value stored under `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: String);
}

/// In-process store, useful for tests and non-persistent embeddings.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }
}
