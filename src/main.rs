use std::io;

use snakes_ladders::{Game, GameConfig, GameError, RandomDice};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), GameError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    let mut game = Game::from_config(&GameConfig::classic())?;
    let mut dice = RandomDice::from_entropy();
    tracing::info!(seed = dice.seed(), "dice seeded");

    let stdout = io::stdout();
    game.run(&mut dice, &mut stdout.lock())?;
    Ok(())
}
