//! Dungeon game client binary.
//!
//! Usage: `dungeon [WORLD_FILE]`. Without an argument the world file comes
//! from `DUNGEON_WORLD_FILE` or defaults to `dungeon.json` in
//! `DUNGEON_DATA_DIR` (`data`).

use std::io;

use anyhow::{Context, Result};
use dungeon_client::{ClientConfig, Interface, logging};
use game_content::{ConfigLoader, WorldLoader};
use game_core::GameConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let mut config = ClientConfig::from_env();
    if let Some(world_file) = std::env::args_os().nth(1) {
        config = config.with_world_file(world_file);
    }

    let _guard = logging::setup_logging(&config.log_dir)?;
    tracing::info!("Starting dungeon client");
    tracing::debug!(?config, "Client configuration");

    let game_config = match &config.config_file {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("failed to load game config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    let dungeon = WorldLoader::load(&config.world_file).with_context(|| {
        format!("failed to load world from {}", config.world_file.display())
    })?;
    tracing::info!(
        rooms = dungeon.room_count(),
        world = %config.world_file.display(),
        "World loaded"
    );

    let mut interface = Interface::builder()
        .dungeon(dungeon)
        .config(&game_config)
        .input(io::stdin().lock())
        .output(io::stdout().lock())
        .menu_file(&config.menu_file)
        .text_delay(config.text_delay)
        .build()?;

    interface.run().inspect_err(|error| {
        tracing::error!(%error, "Session aborted");
    })?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
