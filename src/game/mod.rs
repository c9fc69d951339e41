//! Turn-based play.
//!
//! `Game` owns the board and the players and advances one turn at a time:
//! roll, move (unless the roll overshoots the last square), follow any
//! snake or ladder, check for a win, pass the turn on.
//!
//! Runs end when a player lands exactly on the last square. There is no
//! draw; an optional turn cap turns a game that never finishes into
//! `GameError::TurnLimitReached`.

mod engine;
mod turn;

pub use engine::Game;
pub use turn::{GameResult, TurnRecord};
