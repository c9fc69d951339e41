//! The board: a fixed number of squares plus snake and ladder jumps.
//!
//! Snakes and ladders live in two separate tables. Lookup checks snakes
//! first, so a square present in both resolves down the snake.
//!
//! Inserting an invalid jump is tolerated: [`Board::add_snake`] and
//! [`Board::add_ladder`] drop it and return `false`. The `try_` variants
//! report the rejection as an error instead.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// A jump taken after landing on a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    /// Slide down from `start` to `end` (`end < start`).
    Snake { start: u32, end: u32 },
    /// Climb from `start` to `end` (`end > start`).
    Ladder { start: u32, end: u32 },
}

impl Transition {
    /// Square the jump lands on.
    #[must_use]
    pub const fn end(self) -> u32 {
        match self {
            Transition::Snake { end, .. } | Transition::Ladder { end, .. } => end,
        }
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transition::Snake { start, end } => write!(f, "snake {start}->{end}"),
            Transition::Ladder { start, end } => write!(f, "ladder {start}->{end}"),
        }
    }
}

/// Linear board of squares `1..=size`.
#[derive(Clone, Debug)]
pub struct Board {
    size: u32,
    snakes: FxHashMap<u32, u32>,
    ladders: FxHashMap<u32, u32>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(size: u32) -> Self {
        assert!(size > 0, "Board must have at least 1 square");

        Self {
            size,
            snakes: FxHashMap::default(),
            ladders: FxHashMap::default(),
        }
    }

    /// Number of squares; also the winning square.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Record a snake, or drop it silently if it is not a valid snake.
    ///
    /// Valid means `start > end`, `start <= size` and `end > 0`. A later
    /// snake on the same start square replaces the earlier one.
    /// Returns whether the snake was recorded.
    pub fn add_snake(&mut self, start: u32, end: u32) -> bool {
        match self.try_add_snake(start, end) {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(%err, "dropping snake");
                false
            }
        }
    }

    /// Record a ladder, or drop it silently if it is not a valid ladder.
    ///
    /// Valid means `start < end`, `start > 0` and `end <= size`. A later
    /// ladder on the same start square replaces the earlier one.
    /// Returns whether the ladder was recorded.
    pub fn add_ladder(&mut self, start: u32, end: u32) -> bool {
        match self.try_add_ladder(start, end) {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(%err, "dropping ladder");
                false
            }
        }
    }

    /// Record a snake, rejecting invalid ones.
    pub fn try_add_snake(&mut self, start: u32, end: u32) -> Result<(), GameError> {
        if start > end && start <= self.size && end > 0 {
            self.snakes.insert(start, end);
            Ok(())
        } else {
            Err(GameError::InvalidSnake { start, end })
        }
    }

    /// Record a ladder, rejecting invalid ones.
    pub fn try_add_ladder(&mut self, start: u32, end: u32) -> Result<(), GameError> {
        if start < end && start > 0 && end <= self.size {
            self.ladders.insert(start, end);
            Ok(())
        } else {
            Err(GameError::InvalidLadder { start, end })
        }
    }

    /// The jump starting on `square`, if any. Snakes win over ladders.
    #[must_use]
    pub fn transition(&self, square: u32) -> Option<Transition> {
        if let Some(&end) = self.snakes.get(&square) {
            return Some(Transition::Snake { start: square, end });
        }
        self.ladders
            .get(&square)
            .map(|&end| Transition::Ladder { start: square, end })
    }

    /// Where a player landing on `square` actually ends up.
    #[must_use]
    pub fn next_position(&self, square: u32) -> u32 {
        self.transition(square).map_or(square, Transition::end)
    }

    /// Number of recorded snakes.
    #[must_use]
    pub fn snake_count(&self) -> usize {
        self.snakes.len()
    }

    /// Number of recorded ladders.
    #[must_use]
    pub fn ladder_count(&self) -> usize {
        self.ladders.len()
    }
}
