//! Errors raised by the combat and progression engine.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// Enemy identifier that matches no archetype. This is a data error,
    /// not something the player can recover from.
    #[error("Unknown enemy archetype: {0}")]
    InvalidArchetype(String),

    #[error("Location {location} has an empty {pool} pool")]
    EmptyPool {
        location: String,
        pool: &'static str,
    },

    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    #[error("{location} requires level {required_level} (player is level {level})")]
    LocationLocked {
        location: String,
        required_level: u32,
        level: u32,
    },

    /// Missing, unreadable or malformed save. Callers fall back to a fresh player.
    #[error("Failed to load save from {}: {reason}", path.display())]
    LoadFailed { path: PathBuf, reason: String },

    #[error("Failed to save game: {0}")]
    SaveFailed(String),

    #[error("Invalid world catalog: {0}")]
    InvalidCatalog(#[from] serde_json::Error),
}

pub type GameResult<T> = Result<T, GameError>;
