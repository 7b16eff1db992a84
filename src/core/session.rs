//! Per-run context shared by every state.

use crate::core::config::GameConfig;
use crate::utils::persistence::HighScoreStore;
use tracing::{error, info};

/// Sound effects the core can request. The frontend decides how to play them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    Scored,
    Thump,
}

/// State that outlives any single game world: settings, the high score,
/// the ground scroll offset and queued sounds.
#[derive(Debug)]
pub struct Session {
    pub config: GameConfig,
    pub ground_scroll: f64,
    high_score: u32,
    saved_high_score: u32,
    store: HighScoreStore,
    sounds: Vec<Sound>,
}

impl Session {
    /// Start a session, reading the high score from `store`.
    pub fn new(config: GameConfig, store: HighScoreStore) -> Self {
        let high_score = store.load();
        Self {
            config,
            ground_scroll: 0.0,
            high_score,
            saved_high_score: high_score,
            store,
            sounds: Vec::new(),
        }
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Raise the high score if `score` beats it. Returns true on a new record.
    pub fn record_score(&mut self, score: u32) -> bool {
        if score > self.high_score {
            self.high_score = score;
            info!("New High score: {} !!!", score);
            true
        } else {
            false
        }
    }

    /// Whether the high score changed since it was last written.
    pub fn has_unsaved_high_score(&self) -> bool {
        self.high_score != self.saved_high_score
    }

    /// Persist the high score. Failures are logged and the game carries on.
    pub fn save_high_score(&mut self) -> bool {
        match self.store.save(self.high_score) {
            Ok(()) => {
                self.saved_high_score = self.high_score;
                true
            }
            Err(e) => {
                error!(
                    "Failed to save high score to {}: {}",
                    self.store.path().display(),
                    e
                );
                false
            }
        }
    }

    /// Advance the ground strip, wrapping it once it has moved a full tile.
    pub fn scroll_ground(&mut self, dt: f64) {
        self.ground_scroll -= self.config.scroll_speed * self.config.frames(dt);
        if self.ground_scroll.abs() > self.config.ground_scroll_limit {
            self.ground_scroll = 0.0;
        }
    }

    pub fn play(&mut self, sound: Sound) {
        self.sounds.push(sound);
    }

    /// Sounds queued since the last call.
    pub fn drain_sounds(&mut self) -> Vec<Sound> {
        std::mem::take(&mut self.sounds)
    }
}
