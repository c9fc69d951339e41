//! Game configuration types.
//!
//! A game is configured up front by providing:
//! - `Jump`: one snake or ladder entry (start square, end square)
//! - `LayoutPolicy`: what to do with entries that aren't valid jumps
//! - `GameConfig`: board size, turn order, layout and optional turn cap
//!
//! `GameConfig::classic()` is the standard 100-square layout for two players.

use serde::{Deserialize, Serialize};

/// A snake or ladder as written in a layout, before validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jump {
    pub start: u32,
    pub end: u32,
}

impl Jump {
    /// Create a new jump.
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

impl From<(u32, u32)> for Jump {
    fn from((start, end): (u32, u32)) -> Self {
        Self::new(start, end)
    }
}

/// Handling of snake/ladder entries that break the ordering or bounds rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutPolicy {
    /// Drop invalid entries without complaint.
    #[default]
    Tolerant,
    /// Refuse to build a game with any invalid entry.
    Strict,
}

/// Complete game configuration.
///
/// Snakes and ladders are applied in list order, so a later entry on the
/// same start square replaces an earlier one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of squares; landing exactly on it wins.
    pub board_size: u32,

    /// Player names in turn order.
    pub players: Vec<String>,

    /// Snake entries.
    #[serde(default)]
    pub snakes: Vec<Jump>,

    /// Ladder entries.
    #[serde(default)]
    pub ladders: Vec<Jump>,

    /// Give up after this many turns without a winner. `None` plays until
    /// someone wins.
    #[serde(default)]
    pub max_turns: Option<u64>,

    /// Handling of invalid snake/ladder entries.
    #[serde(default)]
    pub policy: LayoutPolicy,
}

impl GameConfig {
    /// Create an empty configuration: no players, no jumps, no turn cap.
    #[must_use]
    pub fn new(board_size: u32) -> Self {
        Self {
            board_size,
            players: Vec::new(),
            snakes: Vec::new(),
            ladders: Vec::new(),
            max_turns: None,
            policy: LayoutPolicy::Tolerant,
        }
    }

    /// The standard layout: 100 squares, Alice and Bob, 10 snakes and 9 ladders.
    #[must_use]
    pub fn classic() -> Self {
        const SNAKES: [(u32, u32); 10] = [
            (16, 6),
            (47, 26),
            (49, 11),
            (56, 53),
            (62, 19),
            (64, 60),
            (87, 24),
            (93, 73),
            (95, 75),
            (98, 78),
        ];
        const LADDERS: [(u32, u32); 9] = [
            (1, 38),
            (4, 14),
            (9, 31),
            (21, 42),
            (28, 84),
            (36, 44),
            (51, 67),
            (71, 91),
            (80, 100),
        ];

        Self {
            snakes: SNAKES.into_iter().map(Jump::from).collect(),
            ladders: LADDERS.into_iter().map(Jump::from).collect(),
            ..Self::new(100)
        }
        .with_player("Alice")
        .with_player("Bob")
    }

    /// Append a player to the turn order.
    #[must_use]
    pub fn with_player(mut self, name: impl Into<String>) -> Self {
        self.players.push(name.into());
        self
    }

    /// Add a snake entry.
    #[must_use]
    pub fn with_snake(mut self, start: u32, end: u32) -> Self {
        self.snakes.push(Jump::new(start, end));
        self
    }

    /// Add a ladder entry.
    #[must_use]
    pub fn with_ladder(mut self, start: u32, end: u32) -> Self {
        self.ladders.push(Jump::new(start, end));
        self
    }

    /// Cap the number of turns.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u64) -> Self {
        self.max_turns = Some(max_turns);
        self
    }

    /// Set the invalid-entry policy.
    #[must_use]
    pub fn with_policy(mut self, policy: LayoutPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}
