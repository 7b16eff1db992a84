//! Tunable game parameters, loaded from `~/.flappy/config.json`.

use crate::core::error::{GameError, GameResult};
use serde::{Deserialize, Serialize};

/// Physics, pacing and file-name settings.
///
/// Every field has a default, so a config file only needs the keys it
/// changes. The defaults reproduce the classic 60 FPS tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Frame cap for the run loop.
    pub frame_rate: u32,
    /// Frame rate the per-tick physics constants were tuned at.
    /// Movement is scaled by `dt * reference_fps`.
    pub reference_fps: f64,

    /// Downward velocity gained per reference frame.
    pub gravity: f64,
    pub max_fall_speed: f64,
    /// Velocity a jump sets (negative is upward).
    pub jump_velocity: f64,
    pub flap_interval_secs: f64,
    /// Degrees of bird rotation per unit of velocity.
    pub rotation_factor: f64,

    /// Horizontal scroll per reference frame, shared by pipes and ground.
    pub scroll_speed: f64,
    pub pipe_frequency_secs: f64,
    pub pipe_gap: i32,
    pub pipe_offset_min: i32,
    pub pipe_offset_max: i32,
    pub ground_scroll_limit: f64,

    /// Largest slice of time integrated in one physics step.
    pub max_step_secs: f64,
    /// Elapsed time beyond this is dropped (e.g. after the process was suspended).
    pub max_frame_secs: f64,

    /// Ring the terminal bell for sound effects.
    pub sound_bell: bool,
    pub high_score_file: String,
    pub log_file: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            reference_fps: 60.0,
            gravity: 0.5,
            max_fall_speed: 8.0,
            jump_velocity: -7.0,
            flap_interval_secs: 0.1,
            rotation_factor: -2.0,
            scroll_speed: 5.0,
            pipe_frequency_secs: 1.5,
            pipe_gap: 150,
            pipe_offset_min: -100,
            pipe_offset_max: 100,
            ground_scroll_limit: 35.0,
            max_step_secs: 1.0 / 60.0,
            max_frame_secs: 0.25,
            sound_bell: true,
            high_score_file: "high_score.txt".to_string(),
            log_file: "game.log".to_string(),
        }
    }
}

impl GameConfig {
    /// Parse a JSON document. Unknown keys are ignored, missing keys default.
    pub fn from_json(json: &str) -> GameResult<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> GameResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every value keeps the simulation well defined.
    pub fn validate(&self) -> GameResult<()> {
        fn positive(name: &str, value: f64) -> GameResult<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(GameError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )))
            }
        }

        if self.frame_rate == 0 {
            return Err(GameError::InvalidConfig(
                "frame_rate must be at least 1".to_string(),
            ));
        }
        positive("reference_fps", self.reference_fps)?;
        positive("max_fall_speed", self.max_fall_speed)?;
        positive("flap_interval_secs", self.flap_interval_secs)?;
        positive("scroll_speed", self.scroll_speed)?;
        positive("pipe_frequency_secs", self.pipe_frequency_secs)?;
        positive("ground_scroll_limit", self.ground_scroll_limit)?;
        positive("max_step_secs", self.max_step_secs)?;
        positive("max_frame_secs", self.max_frame_secs)?;

        if !self.gravity.is_finite() || self.gravity < 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "gravity must not be negative, got {}",
                self.gravity
            )));
        }
        if !self.jump_velocity.is_finite() || self.jump_velocity >= 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "jump_velocity must be negative (upward), got {}",
                self.jump_velocity
            )));
        }
        if self.pipe_gap <= 0 {
            return Err(GameError::InvalidConfig(format!(
                "pipe_gap must be positive, got {}",
                self.pipe_gap
            )));
        }
        if self.pipe_offset_min > self.pipe_offset_max {
            return Err(GameError::InvalidConfig(format!(
                "pipe offset range is inverted: {}..={}",
                self.pipe_offset_min, self.pipe_offset_max
            )));
        }
        if self.high_score_file.trim().is_empty() || self.log_file.trim().is_empty() {
            return Err(GameError::InvalidConfig(
                "file names must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Scale factor turning per-reference-frame constants into per-`dt` amounts.
    pub fn frames(&self, dt: f64) -> f64 {
        dt * self.reference_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.pipe_gap, 150);
        assert!((config.jump_velocity - (-7.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{ "pipe_gap": 200, "sound_bell": false }"#).unwrap();
        assert_eq!(config.pipe_gap, 200);
        assert!(!config.sound_bell);
        assert_eq!(config.pipe_offset_max, 100);
        assert_eq!(config.high_score_file, "high_score.txt");
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = GameConfig::default();
        config.scroll_speed = 6.5;
        let json = config.to_json().unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_inverted_offset_range() {
        let result = GameConfig::from_json(r#"{ "pipe_offset_min": 50, "pipe_offset_max": -50 }"#);
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_upward_gravity_and_downward_jump() {
        let config = GameConfig {
            gravity: -1.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            jump_velocity: 3.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_rates() {
        let config = GameConfig {
            frame_rate: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            pipe_frequency_secs: 0.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(GameError::Json(_))
        ));
    }

    #[test]
    fn test_frames_scale() {
        let config = GameConfig::default();
        assert!((config.frames(1.0 / 60.0) - 1.0).abs() < 1e-9);
        assert!((config.frames(0.5) - 30.0).abs() < 1e-9);
    }
}
