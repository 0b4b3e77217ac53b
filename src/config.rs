use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::Grid;

/// Errors raised while loading or validating a [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value is out of range or inconsistent with another one.
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colors used by the render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    pub grid_light: Rgb,
    pub grid_dark: Rgb,
    pub player: Rgb,
    pub target: Rgb,
    pub border: Rgb,
    pub text: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb(173, 216, 230),
            grid_light: Rgb(200, 200, 200),
            grid_dark: Rgb(120, 120, 120),
            player: Rgb(0, 0, 255),
            target: Rgb(255, 0, 0),
            border: Rgb(0, 0, 0),
            text: Rgb(0, 0, 0),
        }
    }
}

/// Static configuration shared by every part of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window width in pixels; must be a multiple of `cell_size`.
    pub width: u32,
    /// Window height in pixels; must be a multiple of `cell_size`.
    pub height: u32,
    /// Edge length of one cell in pixels.
    pub cell_size: u32,
    /// Target frames per second.
    pub fps: u32,
    /// Frames per simulation step.
    pub move_divisor: u32,
    /// Integer scale applied to the 5x7 bitmap font.
    pub font_scale: u32,
    /// Draw the checkerboard under the entities.
    pub show_grid: bool,
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            cell_size: 20,
            fps: 60,
            move_divisor: 10,
            font_scale: 4,
            show_grid: false,
            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::Invalid("cell_size must be non-zero"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid("width and height must be non-zero"));
        }
        if self.width % self.cell_size != 0 || self.height % self.cell_size != 0 {
            return Err(ConfigError::Invalid(
                "width and height must be multiples of cell_size",
            ));
        }
        if self.fps == 0 {
            return Err(ConfigError::Invalid("fps must be non-zero"));
        }
        if self.move_divisor == 0 {
            return Err(ConfigError::Invalid("move_divisor must be non-zero"));
        }
        if self.font_scale == 0 {
            return Err(ConfigError::Invalid("font_scale must be non-zero"));
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.cell_size, self.width / self.cell_size, self.height / self.cell_size)
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }

    /// Simulation steps per second implied by `fps` and `move_divisor`.
    pub fn moves_per_second(&self) -> f32 {
        self.fps as f32 / self.move_divisor as f32
    }
}
