//! Game configuration
//!
//! Persisted as JSON next to the other per-user files. Anything missing or
//! unreadable falls back to the defaults in [`crate::consts`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::persistence::{self, PersistError};

/// Tunables handed to the simulation at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid dimension N (the board is N×N)
    pub grid_size: u32,
    /// Starting speed in ticks per second
    pub base_speed: u32,
    /// Speed cap in ticks per second
    pub max_speed: u32,
    /// Speed goes up by one every time the score hits a multiple of this
    pub speed_increment_every: u32,
    /// Snake length at the start of each round
    pub initial_length: u32,
    /// Where the high score lives (None = per-user default)
    pub high_score_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_CELLS,
            base_speed: BASE_SPEED,
            max_speed: MAX_SPEED,
            speed_increment_every: SPEED_INCREMENT_EVERY,
            initial_length: INITIAL_LENGTH,
            high_score_path: None,
        }
    }
}

impl GameConfig {
    /// Clamp values the simulation cannot work with
    pub fn sanitized(mut self) -> Self {
        self.grid_size = self.grid_size.clamp(MIN_GRID_CELLS, MAX_GRID_CELLS);
        self.initial_length = self
            .initial_length
            .clamp(INITIAL_LENGTH, self.grid_size / 2 + 1);
        self.base_speed = self.base_speed.clamp(1, MAX_TICK_RATE);
        self.max_speed = self.max_speed.clamp(self.base_speed, MAX_TICK_RATE);
        self.speed_increment_every = self.speed_increment_every.max(1);
        self
    }

    /// Speed after the score has just become `score`, starting from `current`
    pub fn speed_after_score(&self, current: u32, score: u32) -> u32 {
        if score > 0 && score % self.speed_increment_every == 0 {
            current.saturating_add(1).min(self.max_speed)
        } else {
            current
        }
    }

    /// Default config file: `<config dir>/grid-snake/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join("config.json"))
    }

    /// Load config from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config.sanitized()
            }
            Err(e) if e.is_not_found() => {
                log::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn try_load_from(path: &Path) -> Result<Self, PersistError> {
        let json = fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|e| PersistError::Parse(e.to_string()))
    }

    /// Save config as pretty JSON
    pub fn save_to(&self, path: &Path) -> Result<(), PersistError> {
        let json =
            serde_json::to_string_pretty(self).map_err(|e| PersistError::Parse(e.to_string()))?;
        persistence::write_atomic(path, json.as_bytes())?;
        log::info!("Config saved to {}", path.display());
        Ok(())
    }
}
