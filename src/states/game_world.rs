//! The playing field: bird, pipes, scoring and crash detection.

use super::{GameOverMenu, PauseMenu, State, Transition};
use crate::core::canvas::{Align, Canvas, Sprite, TextStyle};
use crate::core::config::GameConfig;
use crate::core::constants::{
    BIRD_INITIAL_X, BIRD_INITIAL_Y, CRASHED_BIRD_ANGLE, GROUND_Y_POS, HALF_SCREEN_HEIGHT,
    HALF_SCREEN_WIDTH, HIGH_SCORE_X_OFFSET, HIGH_SCORE_Y_POS, SCORE_Y_POS, SCREEN_WIDTH,
};
use crate::core::session::{Session, Sound};
use crate::entities::{pipe_pair, random_offset, Bird, Pipe, PipePosition};
use crate::input::Actions;
use rand::Rng;
use tracing::{debug, info, warn};

/// What ended a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crash {
    Pipe,
    Ceiling,
    Ground,
}

impl Crash {
    pub fn describe(self) -> &'static str {
        match self {
            Crash::Pipe => "bird hit a pipe",
            Crash::Ceiling => "bird flew out of the top of the screen",
            Crash::Ground => "bird hit the ground",
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameWorld {
    pub bird: Bird,
    /// Live pipes, oldest first. Pairs are pushed together.
    pub pipes: Vec<Pipe>,
    pub score: u32,
    /// Seconds since the last pair spawned.
    pub spawn_timer: f64,
    /// The bird is inside the leading pipe's span and has not cleared it yet.
    pub passing_through: bool,
    crash: Option<Crash>,
}

impl GameWorld {
    /// Fresh run with the bird at its start position and one pair already
    /// entering from the right.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let mut world = Self::empty();
        world.spawn_pipes(config, rng);
        world
    }

    /// A run with no pipes yet.
    pub fn empty() -> Self {
        Self {
            bird: Bird::new(BIRD_INITIAL_X, BIRD_INITIAL_Y),
            pipes: Vec::new(),
            score: 0,
            spawn_timer: 0.0,
            passing_through: false,
            crash: None,
        }
    }

    pub fn crash(&self) -> Option<Crash> {
        self.crash
    }

    /// One tick of play.
    ///
    /// Once the run has ended every further update is a no-op, so a crash
    /// condition that persists over several ticks ends the game only once.
    pub fn update<R: Rng>(
        &mut self,
        dt: f64,
        actions: &Actions,
        session: &mut Session,
        rng: &mut R,
    ) -> Transition {
        if self.crash.is_some() {
            return Transition::None;
        }
        if actions.pause {
            info!("Pausing the game...");
            return Transition::Push(State::PauseMenu(PauseMenu::new()));
        }

        self.advance(dt, actions.jump, session, rng);
        self.check_passing(session);

        match self.detect_crash() {
            Some(crash) => self.end_run(crash, session),
            None => Transition::None,
        }
    }

    /// Move everything forward by `dt` seconds.
    fn advance<R: Rng>(&mut self, dt: f64, jump: bool, session: &mut Session, rng: &mut R) {
        let config = &session.config;
        self.bird.update(dt, jump, config);

        self.spawn_timer += dt;
        if self.spawn_timer >= config.pipe_frequency_secs {
            self.spawn_pipes(config, rng);
            self.spawn_timer -= config.pipe_frequency_secs;
        }

        for pipe in &mut self.pipes {
            pipe.update(dt, config);
        }
        let before = self.pipes.len();
        self.pipes.retain(|pipe| !pipe.is_off_screen());
        if self.pipes.len() < before {
            debug!("Removed {} off-screen pipes", before - self.pipes.len());
        }

        session.scroll_ground(dt);
    }

    /// Add a top/bottom pair at the right edge with a random gap height.
    pub fn spawn_pipes<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) {
        let offset = random_offset(rng, config);
        let gap_center = HALF_SCREEN_HEIGHT + offset;
        self.pipes
            .extend(pipe_pair(SCREEN_WIDTH as f64, gap_center, config.pipe_gap));
        debug!("Spawned pipe pair with gap centered at y={}", gap_center);
    }

    /// Two-edge pass detection against the leading pipe.
    ///
    /// The bird first has to be fully inside the pipe's horizontal span,
    /// then its left edge has to clear the pipe's right edge. Returns true
    /// on the tick a point is scored.
    pub fn check_passing(&mut self, session: &mut Session) -> bool {
        let Some(pipe) = self.pipes.first() else {
            return false;
        };
        let bird = self.bird.bounds();
        let pipe = pipe.bounds();

        if !self.passing_through && bird.left() > pipe.left() && bird.right() < pipe.right() {
            self.passing_through = true;
        }

        if self.passing_through && bird.left() > pipe.right() {
            self.passing_through = false;
            self.score += 1;
            info!("Score: {}", self.score);
            session.record_score(self.score);
            session.play(Sound::Scored);
            return true;
        }
        false
    }

    /// Pipe contact, flying off the top, or touching the ground.
    pub fn detect_crash(&self) -> Option<Crash> {
        let bird = self.bird.bounds();
        if self.pipes.iter().any(|pipe| bird.overlaps(&pipe.bounds())) {
            Some(Crash::Pipe)
        } else if bird.top() < 0 {
            Some(Crash::Ceiling)
        } else if bird.bottom() >= GROUND_Y_POS {
            Some(Crash::Ground)
        } else {
            None
        }
    }

    fn end_run(&mut self, crash: Crash, session: &mut Session) -> Transition {
        self.crash = Some(crash);
        session.play(Sound::Thump);
        warn!("Game over: {} (score {})", crash.describe(), self.score);
        session.save_high_score();
        Transition::Push(State::GameOver(GameOverMenu::new(self.score)))
    }

    pub fn render(&self, canvas: &mut dyn Canvas, session: &Session) {
        let angle = if self.crash.is_some() {
            CRASHED_BIRD_ANGLE
        } else {
            self.bird.angle(&session.config)
        };
        canvas.draw_sprite(
            Sprite::Bird {
                frame: self.bird.frame,
                angle,
            },
            self.bird.bounds(),
        );

        for pipe in &self.pipes {
            canvas.draw_sprite(
                Sprite::Pipe {
                    flipped: pipe.position == PipePosition::Top,
                },
                pipe.bounds(),
            );
        }

        canvas.draw_text(
            &format!("High Score: {}", session.high_score()),
            SCREEN_WIDTH - HIGH_SCORE_X_OFFSET,
            HIGH_SCORE_Y_POS,
            Align::Right,
            TextStyle::Hud,
        );
        canvas.draw_text(
            &self.score.to_string(),
            HALF_SCREEN_WIDTH,
            SCORE_Y_POS,
            Align::Center,
            TextStyle::Score,
        );
    }
}
