//! Player identification and per-player state.
//!
//! ## PlayerId
//!
//! Index into the game's turn order. The first player added is `PlayerId(0)`.
//!
//! ## Player
//!
//! Plain data holder: a name and a square. Only the turn loop moves players.

use serde::{Deserialize, Serialize};

/// Player identifier, 0-based in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub usize);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A named token on the board.
///
/// Position 0 means "not yet on the board". Names are not required
/// to be unique.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    position: u32,
}

impl Player {
    /// Create a player at the start (position 0).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Move the player. No bounds checking; the caller owns that.
    pub fn set_position(&mut self, position: u32) {
        self.position = position;
    }
}
