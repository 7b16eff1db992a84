//! Save files under `~/.flappy/`: the high score and the optional config.

use crate::core::config::GameConfig;
use crate::core::constants::{CONFIG_FILE_NAME, DATA_DIR_NAME};
use crate::core::error::{GameError, GameResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Get the ~/.flappy/ directory path, creating it if needed.
pub fn data_dir() -> GameResult<PathBuf> {
    let home_dir = dirs::home_dir().ok_or(GameError::NoHomeDir)?;
    let dir = home_dir.join(DATA_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Read `config.json` from `dir`. A missing file is `Ok(None)`; any other
/// read failure or a bad setting is an error.
pub fn read_config(dir: &Path) -> GameResult<Option<GameConfig>> {
    let path = dir.join(CONFIG_FILE_NAME);
    match fs::read_to_string(&path) {
        Ok(json) => GameConfig::from_json(&json).map(Some),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Plain-text file holding the best score as a decimal integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored high score.
    ///
    /// A missing file means no game has been saved yet and yields 0.
    /// Contents that are not a non-negative integer also yield 0.
    pub fn load(&self) -> u32 {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("High score file not found. Returning 0 as high score");
                return 0;
            }
            Err(e) => {
                warn!(
                    "Could not read high score from {}: {}. Returning 0",
                    self.path.display(),
                    e
                );
                return 0;
            }
        };

        match parse_high_score(&text) {
            Some(score) => {
                info!("Loading the high score: {} from text file", score);
                score
            }
            None => {
                warn!(
                    "High score file {} holds {:?}, not a score. Returning 0",
                    self.path.display(),
                    text.trim()
                );
                0
            }
        }
    }

    /// Overwrite the stored high score.
    pub fn save(&self, score: u32) -> GameResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, score.to_string())?;
        info!("Saving the high score: {} to the text file", score);
        Ok(())
    }
}

fn parse_high_score(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok()
}
