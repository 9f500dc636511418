//! Game configuration.
//!
//! Loaded once from a JSON file at start-up and passed down explicitly.

use std::path::Path;
use std::time::Duration;

use life_core::GridBounds;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("bad file extension, the only supported one is 'json', not '{0}'")]
    BadExtension(String),

    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub video_settings: VideoSettings,
    pub ui: UiSettings,
    pub simulation: SimulationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Window and grid sizes. Grid pairs are `[rows, cols]`, resolutions `[width, height]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSettings {
    /// Window resolution, also the ceiling for grid dimensions
    pub res: [usize; 2],
    pub res_min: [usize; 2],
    pub res_max: [usize; 2],
    /// Grid the edit mode starts with
    pub grid_dim: [usize; 2],
    pub min_grid_dim: [usize; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    pub background_color: [u8; 3],
    pub cell_color: [u8; 3],
    pub grid_color: [u8; 3],
    pub text_color: [u8; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSettings {
    /// Milliseconds between two turns
    pub turn_timeout: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default filter when RUST_LOG is unset (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            video_settings: VideoSettings::default(),
            ui: UiSettings::default(),
            simulation: SimulationSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for VideoSettings {
    fn default() -> Self {
        Self {
            res: [1024, 768],
            res_min: [320, 240],
            res_max: [3840, 2160],
            grid_dim: [48, 64],
            min_grid_dim: [4, 4],
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            background_color: [30, 30, 30],
            cell_color: [0, 200, 0],
            grid_color: [60, 60, 60],
            text_color: [230, 230, 230],
        }
    }
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self { turn_timeout: 200 }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { log_level: "info".to_string() }
    }
}

impl GameConfig {
    /// Load and validate a configuration file. Only `.json` files are accepted.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();
        if extension != "json" {
            return Err(ConfigError::BadExtension(extension.to_string()));
        }

        let contents = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let video = &self.video_settings;

        check_even("res", video.res)?;
        check_within("res", video.res, video.res_min, video.res_max)?;
        check_even("min_grid_dim", video.min_grid_dim)?;
        if video.min_grid_dim.iter().zip(video.res).any(|(&min, max)| min > max) {
            return Err(ConfigError::Invalid(format!(
                "min_grid_dim {:?} should not exceed res {:?}",
                video.min_grid_dim, video.res
            )));
        }
        check_even("grid_dim", video.grid_dim)?;
        check_within("grid_dim", video.grid_dim, video.min_grid_dim, video.res)?;

        if self.simulation.turn_timeout == 0 {
            return Err(ConfigError::Invalid("turn timeout interval must be greater than 0".to_string()));
        }
        Ok(())
    }

    /// Limits every grid is validated against: `min_grid_dim` up to `res`.
    pub fn grid_bounds(&self) -> GridBounds {
        GridBounds::new(self.video_settings.min_grid_dim, self.video_settings.res)
    }

    pub fn turn_timeout(&self) -> Duration {
        Duration::from_millis(self.simulation.turn_timeout)
    }
}

fn check_even(name: &str, pair: [usize; 2]) -> Result<(), ConfigError> {
    if pair.iter().any(|v| v % 2 != 0) {
        return Err(ConfigError::Invalid(format!("{name} {pair:?} should be even numbers")));
    }
    Ok(())
}

fn check_within(name: &str, pair: [usize; 2], low: [usize; 2], high: [usize; 2]) -> Result<(), ConfigError> {
    let inside = (0..2).all(|axis| low[axis] <= pair[axis] && pair[axis] <= high[axis]);
    if !inside {
        return Err(ConfigError::Invalid(format!("{name} {pair:?} should be between {low:?} and {high:?}")));
    }
    Ok(())
}
