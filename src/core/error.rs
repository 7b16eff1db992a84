//! Error types shared by the game core and the persistence layer.

use std::io;
use thiserror::Error;

/// Errors that can occur outside the pure simulation.
#[derive(Error, Debug)]
pub enum GameError {
    /// Reading or writing a file in the data directory failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// A JSON document could not be encoded or decoded.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No home directory to put `~/.flappy/` in.
    #[error("could not determine home directory")]
    NoHomeDir,

    /// The log subscriber could not be installed.
    #[error("logging setup failed: {0}")]
    Logging(String),
}

/// Result type for fallible game operations.
pub type GameResult<T> = Result<T, GameError>;
