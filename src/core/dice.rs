//! Dice sources.
//!
//! Turn resolution never owns its randomness: callers pass a
//! [`DiceSource`] into [`Game::play_turn`](crate::game::Game::play_turn).
//! Production runs use [`RandomDice`]; tests use [`ScriptedDice`] to
//! replay an exact roll sequence.

use super::rng::{GameRng, GameRngState, DIE_FACES};

/// Anything that can produce the next die face.
///
/// Implementations must return a value in `1..=6`. The game rejects
/// anything else without changing state.
pub trait DiceSource {
    /// Roll once.
    fn roll(&mut self) -> u8;
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

/// Fair six-sided die backed by a seeded [`GameRng`].
#[derive(Clone, Debug)]
pub struct RandomDice {
    rng: GameRng,
}

impl RandomDice {
    /// Reproducible die from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Die seeded from entropy. Call [`RandomDice::seed`] to replay it.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }

    /// Resume a die from a captured stream state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(state),
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Capture the stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl DiceSource for RandomDice {
    fn roll(&mut self) -> u8 {
        self.rng.roll_die()
    }
}

/// Die that replays a fixed sequence of faces, wrapping around at the end.
///
/// ```
/// use snakes_ladders::core::{DiceSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([2, 5]);
/// assert_eq!(dice.roll(), 2);
/// assert_eq!(dice.roll(), 5);
/// assert_eq!(dice.roll(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    faces: Vec<u8>,
    next: usize,
}

impl ScriptedDice {
    /// Create from a non-empty list of faces in `1..=6`.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        let faces: Vec<u8> = faces.into_iter().collect();
        assert!(!faces.is_empty(), "Scripted dice need at least one face");
        assert!(
            faces.iter().all(|f| (1..=DIE_FACES).contains(f)),
            "Scripted faces must be in 1..=6"
        );

        Self { faces, next: 0 }
    }

    /// Always roll the same face.
    pub fn constant(face: u8) -> Self {
        Self::new([face])
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> u8 {
        let face = self.faces[self.next % self.faces.len()];
        self.next += 1;
        face
    }
}
