//! What happened on a turn, and how the game ended.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Transition};

/// Outcome of a single turn.
///
/// `Display` renders the report line printed for each turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Who moved.
    pub player: PlayerId,
    /// Their name at the time.
    pub name: String,
    /// Die face rolled.
    pub roll: u8,
    /// Square before the roll.
    pub from: u32,
    /// Square after the roll and any jump. Equals `from` on an overshoot.
    pub to: u32,
    /// Snake or ladder taken, if any.
    pub transition: Option<Transition>,
    /// The roll would have carried the player past the last square.
    pub overshoot: bool,
    /// This turn won the game.
    pub won: bool,
}

impl std::fmt::Display for TurnRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} rolled {} and moved to {}", self.name, self.roll, self.to)
    }
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
    pub name: String,
    /// Total turns played, including the winning one.
    pub turns: u64,
}
