//! Runtime configuration
//!
//! Loaded from the JSON file named by `SHOOTER_CONFIG`; every field is
//! optional and falls back to the defaults below.

use std::path::Path;
use std::time::Duration;

use log::info;
use serde::{Deserialize, Serialize};

use crate::entities::{Bounds, ENEMY_WIDTH, PLAYER_HEIGHT, PLAYER_WIDTH};
use crate::error::{GameError, Result};

/// Environment variable holding the config file path.
pub const CONFIG_ENV: &str = "SHOOTER_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Play-area width in canvas units
    pub canvas_width: f32,
    /// Play-area height in canvas units
    pub canvas_height: f32,
    /// Target frame duration (16 ms ≈ 60 FPS)
    pub frame_ms: u64,
    /// Real time between enemy spawns
    pub spawn_interval_ms: u64,
    /// Fixed RNG seed for reproducible spawn positions
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            frame_ms: 16,
            spawn_interval_ms: 1000,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Read the file named by `SHOOTER_CONFIG`, or use defaults when unset.
    /// Either way the result has passed `validate`.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => {
                info!("{} not set, using default config", CONFIG_ENV);
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self =
            serde_json::from_str(&text).map_err(|source| GameError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// The play area must fit a player and an enemy, and timers must tick.
    pub fn validate(&self) -> Result<()> {
        let min_width = PLAYER_WIDTH.max(ENEMY_WIDTH);
        if self.canvas_width.is_nan() || self.canvas_width < min_width {
            return Err(GameError::InvalidConfig(format!(
                "canvas_width must be at least {}, got {}",
                min_width, self.canvas_width
            )));
        }
        if self.canvas_height.is_nan() || self.canvas_height < PLAYER_HEIGHT {
            return Err(GameError::InvalidConfig(format!(
                "canvas_height must be at least {}, got {}",
                PLAYER_HEIGHT, self.canvas_height
            )));
        }
        if self.frame_ms == 0 {
            return Err(GameError::InvalidConfig("frame_ms must be positive".into()));
        }
        if self.spawn_interval_ms == 0 {
            return Err(GameError::InvalidConfig(
                "spawn_interval_ms must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.canvas_width, self.canvas_height)
    }

    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }
}
