//! High score record
//!
//! A single scalar best score, persisted as a decimal integer in a per-user
//! file. Loaded once at startup and written only when a round beats it.
//! Storage failures never reach the game: a bad read counts as "no record",
//! and a failed write leaves the in-memory record correct.

use std::path::{Path, PathBuf};

use crate::consts::HIGH_SCORE_FILE_NAME;
use crate::persistence::{self, PersistError};

/// Backing storage for the best score
pub trait HighScoreStore {
    fn load(&self) -> Result<u32, PersistError>;
    fn save(&mut self, value: u32) -> Result<(), PersistError>;
}

/// Plain-text file store
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.snake_highscore.txt`, or the working directory if there is no home
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(HIGH_SCORE_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileStore {
    fn load(&self) -> Result<u32, PersistError> {
        persistence::read_scalar(&self.path)
    }

    fn save(&mut self, value: u32) -> Result<(), PersistError> {
        persistence::write_scalar(&self.path, value)
    }
}

/// In-memory store, optionally failing every write
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub value: Option<u32>,
    pub fail_writes: bool,
    pub writes: u32,
}

impl MemoryStore {
    pub fn with_value(value: u32) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u32, PersistError> {
        self.value.ok_or_else(|| {
            PersistError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no stored value",
            ))
        })
    }

    fn save(&mut self, value: u32) -> Result<(), PersistError> {
        if self.fail_writes {
            return Err(PersistError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "store is read-only",
            )));
        }
        self.value = Some(value);
        self.writes += 1;
        Ok(())
    }
}

/// The current best score plus where it is kept
#[derive(Debug)]
pub struct HighScore<S: HighScoreStore> {
    best: u32,
    store: S,
}

impl<S: HighScoreStore> HighScore<S> {
    /// Read the stored record; any failure means 0
    pub fn load(store: S) -> Self {
        let best = match store.load() {
            Ok(value) => {
                log::info!("Loaded high score {}", value);
                value
            }
            Err(e) if e.is_not_found() => {
                log::info!("No high score yet, starting at 0");
                0
            }
            Err(e) => {
                log::warn!("Ignoring unreadable high score ({}), starting at 0", e);
                0
            }
        };
        Self { best, store }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Offer a final score. Returns true if it set a new record.
    pub fn record(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        match self.store.save(score) {
            Ok(()) => log::info!("New high score {} saved", score),
            Err(e) => log::warn!("New high score {} not saved: {}", score, e),
        }
        true
    }
}
