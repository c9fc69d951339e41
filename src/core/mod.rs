//! Core types: board, players, dice, RNG, configuration.
//!
//! These are the pieces a game is assembled from. `Game` in the
//! `game` module owns them and drives turns.

pub mod board;
pub mod player;
pub mod rng;
pub mod dice;
pub mod config;

pub use board::{Board, Transition};
pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState, DIE_FACES};
pub use dice::{DiceSource, RandomDice, ScriptedDice};
pub use config::{GameConfig, Jump, LayoutPolicy};
