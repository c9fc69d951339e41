//! # snakes-ladders
//!
//! Snakes and Ladders on a linear board, for any number of players.
//!
//! ## Rules
//!
//! 1. **Movement**: Each turn the current player rolls one die and moves
//!    that many squares, unless that would pass the last square, in which
//!    case they don't move at all.
//!
//! 2. **Jumps**: Landing on the foot of a ladder climbs it; landing on a
//!    snake's head slides down it. Snakes take priority if a square has both.
//!
//! 3. **Winning**: The first player to land exactly on the last square wins.
//!
//! ## Determinism
//!
//! Dice are passed into every turn as a [`DiceSource`]. Seed a
//! [`RandomDice`] to replay a game, or script exact rolls with
//! [`ScriptedDice`].
//!
//! ```
//! use snakes_ladders::{Game, GameConfig, RandomDice};
//!
//! let mut game = Game::from_config(&GameConfig::classic()).unwrap();
//! let result = game.run(&mut RandomDice::new(42), &mut std::io::sink()).unwrap();
//! assert_eq!(game.board().size(), 100);
//! assert!(result.turns > 0);
//! ```
//!
//! ## Modules
//!
//! - `core`: Board, players, dice, RNG, configuration
//! - `game`: Turn loop and results
//! - `error`: Error type

pub mod core;
pub mod error;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Board, Transition,
    Player, PlayerId,
    GameRng, GameRngState,
    DiceSource, RandomDice, ScriptedDice,
    GameConfig, Jump, LayoutPolicy,
};

pub use crate::error::GameError;

pub use crate::game::{Game, GameResult, TurnRecord};
