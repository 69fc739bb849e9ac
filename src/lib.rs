//! Grid Snake - a fixed-tick snake game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, snake, food, tick state machine)
//! - `game`: Session glue between the simulation and the high score
//! - `input`: Key bindings and the per-tick input buffer
//! - `renderer`: Board widget and terminal output (ratatui)
//! - `platform`: Terminal setup, event polling and tick pacing
//! - `persistence`: Small-file reads and atomic writes
//! - `highscores`: The persisted best score
//! - `settings`: Game configuration

pub mod game;
pub mod highscores;
pub mod input;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use highscores::{FileStore, HighScore, HighScoreStore, MemoryStore};
pub use settings::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Default grid dimension (24x24)
    pub const GRID_CELLS: u32 = 24;
    /// Smallest grid that fits the start snake
    pub const MIN_GRID_CELLS: u32 = 5;
    /// Largest grid the terminal renderer is expected to show
    pub const MAX_GRID_CELLS: u32 = 64;

    /// Starting speed (ticks per second)
    pub const BASE_SPEED: u32 = 10;
    /// Speed cap (ticks per second)
    pub const MAX_SPEED: u32 = 30;
    /// Highest speed a config may ask for (ticks per second)
    pub const MAX_TICK_RATE: u32 = 120;
    /// Speed goes up every N points
    pub const SPEED_INCREMENT_EVERY: u32 = 5;

    /// Snake length at round start
    pub const INITIAL_LENGTH: u32 = 3;

    /// High score file, relative to the home directory
    pub const HIGH_SCORE_FILE_NAME: &str = ".snake_highscore.txt";
    /// Directory name under the per-user config/data dirs
    pub const APP_DIR_NAME: &str = "grid-snake";
}
