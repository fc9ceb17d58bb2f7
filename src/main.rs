use anyhow::{Context, Result};
use bugsquasher2::{engine::Engine, Config, Game, GameContext};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::default();
    let ctx = GameContext::load(config).context("Couldn't load the game's assets")?;
    let game = Game::new(ctx);

    let mut engine = Engine::new();
    engine.run(game)?;

    Ok(())
}
