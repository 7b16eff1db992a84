//! Pipe obstacles. Pipes come in top/bottom pairs sharing one gap.

use crate::core::config::GameConfig;
use crate::core::constants::{PIPE_HEIGHT, PIPE_WIDTH};
use crate::core::geometry::Bounds;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipePosition {
    /// Hangs from above; its bottom edge is the top of the gap.
    Top,
    /// Stands below; its top edge is the bottom of the gap.
    Bottom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge, fractional for smooth scrolling.
    pub x: f64,
    /// Top edge.
    pub y: i32,
    pub position: PipePosition,
}

impl Pipe {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x.floor() as i32, self.y, PIPE_WIDTH, PIPE_HEIGHT)
    }

    /// Scroll left by `dt` seconds' worth of movement.
    pub fn update(&mut self, dt: f64, config: &GameConfig) {
        self.x -= config.scroll_speed * config.frames(dt);
    }

    /// Fully past the left edge of the surface.
    pub fn is_off_screen(&self) -> bool {
        self.bounds().right() < 0
    }
}

/// Build the two pipes of a pair with their gap centered on `gap_center`.
pub fn pipe_pair(x: f64, gap_center: i32, gap: i32) -> [Pipe; 2] {
    let gap_top = gap_center - gap / 2;
    let gap_bottom = gap_top + gap;
    [
        Pipe {
            x,
            y: gap_top - PIPE_HEIGHT,
            position: PipePosition::Top,
        },
        Pipe {
            x,
            y: gap_bottom,
            position: PipePosition::Bottom,
        },
    ]
}

/// Vertical gap offset for a new pair, uniform over the configured range.
pub fn random_offset<R: Rng>(rng: &mut R, config: &GameConfig) -> i32 {
    rng.gen_range(config.pipe_offset_min..=config.pipe_offset_max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_pair_gap_matches_config() {
        for (center, gap) in [(468, 150), (368, 150), (568, 151), (400, 2)] {
            let [top, bottom] = pipe_pair(864.0, center, gap);
            assert_eq!(top.position, PipePosition::Top);
            assert_eq!(bottom.position, PipePosition::Bottom);
            assert_eq!(bottom.bounds().top() - top.bounds().bottom(), gap);
            assert_eq!(top.x, bottom.x);
        }
    }

    #[test]
    fn test_pair_gap_is_centered() {
        let [top, bottom] = pipe_pair(864.0, 500, 150);
        assert_eq!(top.bounds().bottom(), 425);
        assert_eq!(bottom.bounds().top(), 575);
        assert_eq!((top.bounds().bottom() + bottom.bounds().top()) / 2, 500);
    }

    #[test]
    fn test_scrolls_left_at_scroll_speed() {
        let config = GameConfig::default();
        let [mut pipe, _] = pipe_pair(864.0, 468, 150);
        pipe.update(0.5, &config);
        // 5 units per reference frame, 30 frames
        assert!((pipe.x - 714.0).abs() < 1e-9);
    }

    #[test]
    fn test_off_screen_once_right_edge_passes_left_boundary() {
        let [mut pipe, _] = pipe_pair(0.0, 468, 150);
        pipe.x = -(PIPE_WIDTH as f64);
        assert!(!pipe.is_off_screen());
        pipe.x -= 1.0;
        assert!(pipe.is_off_screen());
    }

    #[test]
    fn test_random_offset_stays_in_range() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            let offset = random_offset(&mut rng, &config);
            assert!((-100..=100).contains(&offset));
        }
    }

    #[test]
    fn test_degenerate_offset_range() {
        let config = GameConfig {
            pipe_offset_min: 12,
            pipe_offset_max: 12,
            ..GameConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(random_offset(&mut rng, &config), 12);
    }
}
