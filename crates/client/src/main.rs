//! Gauntlet client binary.
//!
//! Configuration comes from the environment (a `.env` file is honored), logs
//! go to a per-session file, and the game itself runs on stdin/stdout.
//!
//! ```bash
//! GAUNTLET_SEED=7 RUST_LOG=debug cargo run -p gauntlet-client
//! ```

use std::io;

use anyhow::{Context, Result};
use game_content::{ConfigLoader, LevelLoader};
use gauntlet_client::{App, ClientConfig, Console, logging};
use runtime::{FileSaveRepository, RuntimeConfig};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    logging::setup_logging(&config.log_dir, config.session_id.as_deref())?;

    tracing::info!("Starting gauntlet client");
    tracing::info!(seed = config.seed, save_file = %config.save_file.display(), "client configured");

    let game_config = ConfigLoader::load_or_default(config.config_file.as_deref())?;
    let catalog = LevelLoader::load_or_builtin(config.levels_file.as_deref())?;
    let repository = FileSaveRepository::new(&config.save_file).with_context(|| {
        format!("cannot prepare save file {}", config.save_file.display())
    })?;

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut app = App::new(console, Box::new(repository))
        .with_config(RuntimeConfig {
            game_config,
            seed: config.seed,
        })
        .with_catalog(catalog);

    app.run()?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
