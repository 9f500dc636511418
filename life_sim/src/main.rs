// main.rs - Game of Life desktop simulator
// Loads the configuration once, builds the runner and hands it to the egui app

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui;

mod clock;
mod config;
mod patterns;
mod runner;
mod ui;

use config::GameConfig;
use runner::SimulationRunner;
use ui::LifeApp;

const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Parser)]
#[command(name = "game-of-life")]
#[command(version)]
#[command(about = "Bounded Game of Life with an edit mode and a turn timer")]
struct Cli {
    /// Configuration file (JSON). Defaults to ./config.json, then built-in settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the built-in configuration to this path and exit
    #[arg(long, value_name = "PATH")]
    init: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.init {
        GameConfig::default().save(&path).with_context(|| format!("writing {}", path.display()))?;
        println!("Default configuration written to {}", path.display());
        return Ok(());
    }

    let (config, source) = load_config(cli.config)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.logging.log_level.as_str())).init();
    log::info!("Configuration: {source}");
    log::info!("Grid: {:?}, turn timeout: {} ms", config.video_settings.grid_dim, config.simulation.turn_timeout);

    let runner = SimulationRunner::new(&config).context("initial grid does not fit the configured bounds")?;
    let app = LifeApp::new(&config, runner);

    let [width, height] = config.video_settings.res;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width as f32, height as f32]),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )
    .map_err(|err| anyhow::anyhow!("window error: {err}"))
}

/// An explicit path must load; otherwise try the default path and fall back to built-in settings.
fn load_config(path: Option<PathBuf>) -> anyhow::Result<(GameConfig, String)> {
    if let Some(path) = path {
        let config = GameConfig::from_file(&path).with_context(|| format!("loading {}", path.display()))?;
        return Ok((config, format!("loaded from {}", path.display())));
    }

    match GameConfig::from_file(DEFAULT_CONFIG_PATH) {
        Ok(config) => Ok((config, format!("loaded from {DEFAULT_CONFIG_PATH}"))),
        Err(err) => Ok((GameConfig::default(), format!("built-in defaults ({DEFAULT_CONFIG_PATH}: {err})"))),
    }
}
