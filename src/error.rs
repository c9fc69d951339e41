//! Errors surfaced by game setup and play.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("board must have at least one square")]
    EmptyBoard,

    #[error("no players have joined the game")]
    NoPlayers,

    #[error("the game already has a winner")]
    GameOver,

    #[error("dice rolled {0}, expected 1..=6")]
    InvalidRoll(u8),

    #[error("invalid snake {start}->{end}")]
    InvalidSnake { start: u32, end: u32 },

    #[error("invalid ladder {start}->{end}")]
    InvalidLadder { start: u32, end: u32 },

    #[error("no winner after {turns} turns")]
    TurnLimitReached { turns: u64 },

    #[error("failed to write game report")]
    Io(#[from] std::io::Error),
}
