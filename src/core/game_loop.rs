//! The game driver: owns the state stack and session, and turns elapsed
//! wall-clock time into fixed-size simulation steps.

use crate::core::canvas::{Canvas, Sprite};
use crate::core::constants::{GROUND_Y_POS, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::core::geometry::Bounds;
use crate::core::session::{Session, Sound};
use crate::input::{Actions, Pointer};
use crate::states::{State, StateStack, TitleScreen};
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::info;

/// Time below this is treated as fully consumed.
const STEP_EPSILON: f64 = 1e-9;

pub struct Game {
    stack: StateStack,
    session: Session,
    running: bool,
}

impl Game {
    /// New game sitting on the title screen.
    pub fn new(session: Session) -> Self {
        info!("Game initialized...");
        Self {
            stack: StateStack::new(State::Title(TitleScreen::new())),
            session,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stack(&self) -> &StateStack {
        &self.stack
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Run one frame's worth of simulation.
    ///
    /// `elapsed` is clamped to `max_frame_secs` and integrated in steps of
    /// at most `max_step_secs`. The frame's actions apply to the first step
    /// only; later steps see no input. Stepping stops at the first
    /// transition so a new state never inherits the rest of the frame.
    pub fn tick<R: Rng>(&mut self, elapsed: f64, actions: &Actions, rng: &mut R) {
        if !self.running {
            return;
        }
        if actions.quit {
            info!("Quit requested");
            self.running = false;
            return;
        }

        let max_step = self.session.config.max_step_secs;
        let mut remaining = elapsed.clamp(0.0, self.session.config.max_frame_secs);
        let idle = Actions::idle(Pointer {
            just_pressed: false,
            ..actions.pointer
        });
        let mut step_actions = *actions;

        loop {
            let dt = remaining.min(max_step);
            remaining -= dt;

            let transition = self
                .stack
                .update(dt, &step_actions, &mut self.session, rng);
            let changed = !matches!(transition, crate::states::Transition::None);
            self.running = self.stack.apply(transition);

            if changed || !self.running || remaining <= STEP_EPSILON {
                break;
            }
            step_actions = idle;
        }
    }

    /// Draw background, ground, then the state stack.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.draw_sprite(
            Sprite::Background,
            Bounds::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT),
        );
        canvas.draw_sprite(
            Sprite::Ground {
                scroll: self.session.ground_scroll,
            },
            Bounds::new(0, GROUND_Y_POS, SCREEN_WIDTH, SCREEN_HEIGHT - GROUND_Y_POS),
        );
        self.stack.render(canvas, &self.session);
    }

    /// Sounds requested since the last call.
    pub fn drain_sounds(&mut self) -> Vec<Sound> {
        self.session.drain_sounds()
    }

    /// Persist anything unsaved before the process exits.
    pub fn shutdown(&mut self) {
        self.running = false;
        if self.session.has_unsaved_high_score() {
            self.session.save_high_score();
        }
        info!("Exiting the game...");
    }
}

/// Paces the run loop to a target frame rate and measures frame time.
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(frame_rate: u32) -> Self {
        Self {
            frame: Duration::from_secs_f64(1.0 / frame_rate.max(1) as f64),
            last: Instant::now(),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Time left before the current frame is due.
    pub fn time_left(&self) -> Duration {
        self.frame.saturating_sub(self.last.elapsed())
    }

    /// Seconds since the previous call, restarting the measurement.
    pub fn lap(&mut self) -> f64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last).as_secs_f64();
        self.last = now;
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_clock_duration() {
        let clock = FrameClock::new(60);
        let frame = clock.frame_duration().as_secs_f64();
        assert!((frame - 1.0 / 60.0).abs() < 1e-6);
        assert!(clock.time_left() <= clock.frame_duration());
    }

    #[test]
    fn test_frame_clock_zero_rate_is_clamped() {
        let clock = FrameClock::new(0);
        assert_eq!(clock.frame_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_frame_clock_lap_is_monotonic() {
        let mut clock = FrameClock::new(60);
        std::thread::sleep(Duration::from_millis(2));
        assert!(clock.lap() >= 0.002);
        assert!(clock.lap() < 1.0);
    }
}
