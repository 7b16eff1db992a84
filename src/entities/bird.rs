//! The player's bird.

use crate::core::config::GameConfig;
use crate::core::constants::{BIRD_FRAME_COUNT, BIRD_HEIGHT, BIRD_WIDTH, GROUND_Y_POS};
use crate::core::geometry::Bounds;

#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Top-left corner in surface units.
    pub x: f64,
    pub y: f64,
    /// Vertical velocity per reference frame, positive is downward.
    pub velocity: f64,
    /// Wing animation frame, `0..BIRD_FRAME_COUNT`.
    pub frame: usize,
    animation_timer: f64,
}

impl Bird {
    /// Bird centered on `(cx, cy)`, at rest.
    pub fn new(cx: i32, cy: i32) -> Self {
        let start = Bounds::centered(cx, cy, BIRD_WIDTH, BIRD_HEIGHT);
        Self {
            x: start.x as f64,
            y: start.y as f64,
            velocity: 0.0,
            frame: 0,
            animation_timer: 0.0,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.x.floor() as i32,
            self.y.floor() as i32,
            BIRD_WIDTH,
            BIRD_HEIGHT,
        )
    }

    /// Advance by `dt` seconds.
    ///
    /// Gravity is applied and capped first, the bird falls only while above
    /// the ground, and a jump then overrides whatever velocity gravity left.
    pub fn update(&mut self, dt: f64, jump: bool, config: &GameConfig) {
        self.apply_gravity(dt, config);
        if self.bounds().bottom() < GROUND_Y_POS {
            self.y += self.velocity * config.frames(dt);
        }

        if jump {
            self.jump(config);
        }

        self.animate(dt, config);
    }

    pub fn apply_gravity(&mut self, dt: f64, config: &GameConfig) {
        self.velocity = (self.velocity + config.gravity * config.frames(dt)).min(config.max_fall_speed);
    }

    pub fn jump(&mut self, config: &GameConfig) {
        self.velocity = config.jump_velocity;
    }

    /// Wing frames cycle on a fixed timer regardless of how the bird moves.
    fn animate(&mut self, dt: f64, config: &GameConfig) {
        self.animation_timer += dt;
        if self.animation_timer >= config.flap_interval_secs {
            self.animation_timer = 0.0;
            self.frame = (self.frame + 1) % BIRD_FRAME_COUNT;
        }
    }

    /// Rotation in degrees for drawing; rising tilts the nose up.
    pub fn angle(&self, config: &GameConfig) -> f64 {
        self.velocity * config.rotation_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 1.0 / 60.0;

    #[test]
    fn test_new_centers_bird() {
        let bird = Bird::new(100, 368);
        assert_eq!(bird.bounds().center(), (100, 368));
        assert_eq!(bird.velocity, 0.0);
    }

    #[test]
    fn test_gravity_accumulates_per_reference_frame() {
        let config = GameConfig::default();
        let mut bird = Bird::new(100, 300);
        bird.apply_gravity(DT, &config);
        assert!((bird.velocity - 0.5).abs() < 1e-9);
        bird.apply_gravity(2.0 * DT, &config);
        assert!((bird.velocity - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_gravity_is_capped() {
        let config = GameConfig::default();
        let mut bird = Bird::new(100, 300);
        bird.velocity = 7.9;
        bird.apply_gravity(1.0, &config);
        assert_eq!(bird.velocity, config.max_fall_speed);
    }

    #[test]
    fn test_zero_dt_keeps_velocity() {
        let config = GameConfig::default();
        let mut bird = Bird::new(100, 300);
        bird.velocity = 2.0;
        bird.apply_gravity(0.0, &config);
        assert_eq!(bird.velocity, 2.0);
    }

    #[test]
    fn test_jump_overrides_velocity() {
        let config = GameConfig::default();
        for start in [-20.0, 0.0, 8.0] {
            let mut bird = Bird::new(100, 300);
            bird.velocity = start;
            bird.update(DT, true, &config);
            assert_eq!(bird.velocity, config.jump_velocity);
        }
    }

    #[test]
    fn test_falls_while_airborne() {
        let config = GameConfig::default();
        let mut bird = Bird::new(100, 300);
        let y0 = bird.y;
        bird.update(DT, false, &config);
        assert!((bird.y - (y0 + 0.5)).abs() < 1e-9);
    }

    #[test]
    fn test_short_step_moves_in_proportion() {
        let config = GameConfig::default();
        let mut bird = Bird::new(100, 300);
        bird.velocity = 6.0;
        let y0 = bird.y;
        bird.update(DT / 10.0, false, &config);
        assert!((bird.velocity - 6.05).abs() < 1e-9);
        assert!((bird.y - (y0 + 0.605)).abs() < 1e-9);
    }

    #[test]
    fn test_does_not_fall_through_ground() {
        let config = GameConfig::default();
        let mut bird = Bird::new(100, 300);
        bird.y = (GROUND_Y_POS - BIRD_HEIGHT) as f64;
        bird.velocity = 5.0;
        bird.update(DT, false, &config);
        assert_eq!(bird.bounds().bottom(), GROUND_Y_POS);
    }

    #[test]
    fn test_wing_frames_cycle_on_timer() {
        let config = GameConfig::default();
        let mut bird = Bird::new(100, 300);
        bird.update(0.05, false, &config);
        assert_eq!(bird.frame, 0);
        bird.update(0.06, false, &config);
        assert_eq!(bird.frame, 1);
        bird.update(0.1, false, &config);
        bird.update(0.1, false, &config);
        assert_eq!(bird.frame, 0);
    }

    #[test]
    fn test_angle_follows_velocity() {
        let config = GameConfig::default();
        let mut bird = Bird::new(100, 300);
        bird.velocity = -7.0;
        assert_eq!(bird.angle(&config), 14.0);
        bird.velocity = 8.0;
        assert_eq!(bird.angle(&config), -16.0);
    }
}
