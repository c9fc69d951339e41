//! The turn loop.

use std::io::Write;

use crate::core::{
    Board, DiceSource, GameConfig, LayoutPolicy, Player, PlayerId, Transition, DIE_FACES,
};
use crate::error::GameError;

use super::turn::{GameResult, TurnRecord};

/// A game in progress or finished.
///
/// The game is finished once `winner` is set; after that `play_turn`
/// refuses to run. Dice are supplied per call, never stored.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    /// Turn order is insertion order.
    players: Vec<Player>,
    current: usize,
    winner: Option<PlayerId>,
    turns_played: u64,
    max_turns: Option<u64>,
}

impl Game {
    /// Create a game with an empty board and no players.
    ///
    /// Panics if `board_size` is 0.
    #[must_use]
    pub fn new(board_size: u32) -> Self {
        Self {
            board: Board::new(board_size),
            players: Vec::new(),
            current: 0,
            winner: None,
            turns_played: 0,
            max_turns: None,
        }
    }

    /// Build a game from a configuration.
    ///
    /// With [`LayoutPolicy::Strict`] the first invalid snake or ladder
    /// aborts the build.
    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        if config.board_size == 0 {
            return Err(GameError::EmptyBoard);
        }

        let mut game = Self::new(config.board_size);
        game.max_turns = config.max_turns;

        for name in &config.players {
            game.add_player(name.clone());
        }

        for jump in &config.snakes {
            match config.policy {
                LayoutPolicy::Tolerant => {
                    game.add_snake(jump.start, jump.end);
                }
                LayoutPolicy::Strict => game.board.try_add_snake(jump.start, jump.end)?,
            }
        }

        for jump in &config.ladders {
            match config.policy {
                LayoutPolicy::Tolerant => {
                    game.add_ladder(jump.start, jump.end);
                }
                LayoutPolicy::Strict => game.board.try_add_ladder(jump.start, jump.end)?,
            }
        }

        Ok(game)
    }

    // === Setup ===

    /// Append a player at square 0. Returns their id.
    pub fn add_player(&mut self, name: impl Into<String>) -> PlayerId {
        let id = PlayerId::new(self.players.len());
        self.players.push(Player::new(name));
        id
    }

    /// See [`Board::add_snake`].
    pub fn add_snake(&mut self, start: u32, end: u32) -> bool {
        self.board.add_snake(start, end)
    }

    /// See [`Board::add_ladder`].
    pub fn add_ladder(&mut self, start: u32, end: u32) -> bool {
        self.board.add_ladder(start, end)
    }

    /// Cap the total number of turns `run` will play.
    pub fn set_max_turns(&mut self, max_turns: Option<u64>) {
        self.max_turns = max_turns;
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Index of the player whose turn is next (or who just won).
    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.winner.and_then(|id| self.player(id))
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    #[must_use]
    pub fn turns_played(&self) -> u64 {
        self.turns_played
    }

    #[must_use]
    pub fn max_turns(&self) -> Option<u64> {
        self.max_turns
    }

    /// The result, once someone has won.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        let winner = self.winner?;
        Some(GameResult {
            winner,
            name: self.players[winner.index()].name().to_string(),
            turns: self.turns_played,
        })
    }

    // === Play ===

    /// Play one turn for the current player.
    ///
    /// Rolls once. If the roll would carry the player past the last square
    /// they stay put; otherwise they move and follow any snake or ladder
    /// on the square they land on. Landing exactly on the last square wins
    /// and keeps the turn with the winner; any other turn passes to the
    /// next player in order.
    pub fn play_turn<D>(&mut self, dice: &mut D) -> Result<TurnRecord, GameError>
    where
        D: DiceSource + ?Sized,
    {
        if self.players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        if self.winner.is_some() {
            return Err(GameError::GameOver);
        }

        let roll = dice.roll();
        if !(1..=DIE_FACES).contains(&roll) {
            return Err(GameError::InvalidRoll(roll));
        }

        let size = self.board.size();
        let id = PlayerId::new(self.current);
        let player = &mut self.players[self.current];

        let from = player.position();
        let candidate = from.saturating_add(u32::from(roll));
        let overshoot = candidate > size;

        let transition = if overshoot {
            None
        } else {
            let transition = self.board.transition(candidate);
            player.set_position(transition.map_or(candidate, Transition::end));
            transition
        };

        let to = player.position();
        let won = to == size;
        let record = TurnRecord {
            player: id,
            name: player.name().to_string(),
            roll,
            from,
            to,
            transition,
            overshoot,
            won,
        };

        self.turns_played += 1;
        if won {
            self.winner = Some(id);
        } else {
            self.current = (self.current + 1) % self.players.len();
        }

        tracing::debug!(
            turn = self.turns_played,
            player = %record.name,
            roll,
            from,
            to,
            overshoot,
            jump = ?transition,
            "turn played"
        );

        Ok(record)
    }

    /// Play until someone wins, writing the report to `out`.
    ///
    /// Writes a start line, one line per turn, then a blank line and the
    /// winner. Fails with [`GameError::TurnLimitReached`] if a turn cap is
    /// set and reached first.
    pub fn run<D, W>(&mut self, dice: &mut D, out: &mut W) -> Result<GameResult, GameError>
    where
        D: DiceSource + ?Sized,
        W: Write + ?Sized,
    {
        if self.players.is_empty() {
            return Err(GameError::NoPlayers);
        }

        tracing::info!(
            players = self.players.len(),
            board_size = self.board.size(),
            snakes = self.board.snake_count(),
            ladders = self.board.ladder_count(),
            "game started"
        );
        writeln!(out, "Game started!")?;

        let result = loop {
            if let Some(result) = self.result() {
                break result;
            }

            if let Some(max) = self.max_turns {
                if self.turns_played >= max {
                    tracing::warn!(turns = self.turns_played, "turn limit reached without a winner");
                    return Err(GameError::TurnLimitReached {
                        turns: self.turns_played,
                    });
                }
            }

            let record = self.play_turn(dice)?;
            writeln!(out, "{record}")?;
        };

        writeln!(out)?;
        writeln!(out, "{} wins the game!", result.name)?;
        tracing::info!(winner = %result.name, turns = result.turns, "game over");

        Ok(result)
    }
}
