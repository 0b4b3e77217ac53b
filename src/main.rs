use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::{GameConfig, driver};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "grid-snake", version, about = "Grid snake with wraparound edges")]
struct Cli {
    /// JSON file with game settings; missing fields use defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for target placement and respawn directions.
    #[arg(long)]
    seed: Option<u64>,

    /// Frames per move (10 at 60 fps is six moves a second).
    #[arg(long)]
    move_divisor: Option<u32>,

    #[arg(long)]
    fps: Option<u32>,

    /// Draw the checkerboard background.
    #[arg(long)]
    show_grid: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    info!(seed = ?cli.seed, "launching");
    driver::run(config, rng)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(divisor) = cli.move_divisor {
        config.move_divisor = divisor;
    }
    if let Some(fps) = cli.fps {
        config.fps = fps;
    }
    config.show_grid |= cli.show_grid;
    config.validate().context("invalid command-line overrides")?;
    Ok(config)
}
