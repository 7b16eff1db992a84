//! Screen states and the stack that orders them.
//!
//! The stack's top state is the active one: it alone receives updates.
//! Overlay states (pause, game over) are drawn on top of the state below
//! them so the frozen world stays visible.

pub mod game_over;
pub mod game_world;
pub mod pause_menu;
pub mod title;

pub use game_over::GameOverMenu;
pub use game_world::{Crash, GameWorld};
pub use pause_menu::PauseMenu;
pub use title::TitleScreen;

use crate::core::canvas::Canvas;
use crate::core::session::Session;
use crate::input::Actions;
use rand::Rng;
use tracing::{info, warn};

/// One screen of the game.
#[derive(Debug, Clone)]
pub enum State {
    Title(TitleScreen),
    GameWorld(Box<GameWorld>),
    PauseMenu(PauseMenu),
    GameOver(GameOverMenu),
}

/// What the active state wants to happen to the stack after an update.
#[derive(Debug)]
pub enum Transition {
    None,
    /// Suspend the active state under a new one.
    Push(State),
    /// Drop the active state and resume the one below.
    Pop,
    /// Unwind to the root state and start the given one on top of it.
    Restart(State),
    /// Stop the run loop.
    Quit,
}

impl State {
    pub fn name(&self) -> &'static str {
        match self {
            State::Title(_) => "Title",
            State::GameWorld(_) => "GameWorld",
            State::PauseMenu(_) => "PauseMenu",
            State::GameOver(_) => "GameOverMenu",
        }
    }

    /// Whether the state below should be drawn first.
    pub fn is_overlay(&self) -> bool {
        matches!(self, State::PauseMenu(_) | State::GameOver(_))
    }

    pub fn update<R: Rng>(
        &mut self,
        dt: f64,
        actions: &Actions,
        session: &mut Session,
        rng: &mut R,
    ) -> Transition {
        match self {
            State::Title(title) => title.update(actions, session, rng),
            State::GameWorld(world) => world.update(dt, actions, session, rng),
            State::PauseMenu(pause) => pause.update(actions, session),
            State::GameOver(game_over) => game_over.update(actions, session, rng),
        }
    }

    pub fn render(&self, canvas: &mut dyn Canvas, session: &Session) {
        match self {
            State::Title(title) => title.render(canvas),
            State::GameWorld(world) => world.render(canvas, session),
            State::PauseMenu(pause) => pause.render(canvas),
            State::GameOver(game_over) => game_over.render(canvas, session),
        }
    }

    /// Called when the state becomes part of the stack.
    pub fn enter(&mut self) {
        info!("Entering {}", self.name());
        match self {
            State::Title(title) => title.reset_focus(),
            State::PauseMenu(pause) => pause.reset_focus(),
            State::GameOver(game_over) => game_over.reset_focus(),
            State::GameWorld(_) => {}
        }
    }

    /// Called when the state is removed from the stack.
    pub fn exit(&mut self) {
        info!("Leaving {}", self.name());
    }
}

/// Ordered states, bottom first. Never empty.
#[derive(Debug)]
pub struct StateStack {
    states: Vec<State>,
}

impl StateStack {
    pub fn new(mut root: State) -> Self {
        root.enter();
        Self { states: vec![root] }
    }

    pub fn depth(&self) -> usize {
        self.states.len()
    }

    pub fn top(&self) -> &State {
        self.states.last().expect("state stack is never empty")
    }

    pub fn top_mut(&mut self) -> &mut State {
        self.states.last_mut().expect("state stack is never empty")
    }

    /// Names bottom to top, for logs and tests.
    pub fn names(&self) -> Vec<&'static str> {
        self.states.iter().map(State::name).collect()
    }

    pub fn get(&self, index: usize) -> Option<&State> {
        self.states.get(index)
    }

    pub fn push(&mut self, mut state: State) {
        state.enter();
        self.states.push(state);
    }

    /// Remove the active state. The root state cannot be popped.
    pub fn pop(&mut self) -> Option<State> {
        if self.states.len() <= 1 {
            warn!("Refusing to pop the root {} state", self.top().name());
            return None;
        }
        let mut state = self.states.pop()?;
        state.exit();
        Some(state)
    }

    pub fn update<R: Rng>(
        &mut self,
        dt: f64,
        actions: &Actions,
        session: &mut Session,
        rng: &mut R,
    ) -> Transition {
        self.top_mut().update(dt, actions, session, rng)
    }

    /// Apply a transition. Returns false once the game should stop.
    pub fn apply(&mut self, transition: Transition) -> bool {
        match transition {
            Transition::None => {}
            Transition::Push(state) => self.push(state),
            Transition::Pop => {
                self.pop();
            }
            Transition::Restart(state) => {
                while self.states.len() > 1 {
                    self.pop();
                }
                self.push(state);
            }
            Transition::Quit => return false,
        }
        true
    }

    /// Draw the active state, preceded by whatever it overlays.
    pub fn render(&self, canvas: &mut dyn Canvas, session: &Session) {
        let mut first = self.states.len() - 1;
        while first > 0 && self.states[first].is_overlay() {
            first -= 1;
        }
        for state in &self.states[first..] {
            state.render(canvas, session);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack() -> StateStack {
        StateStack::new(State::Title(TitleScreen::new()))
    }

    #[test]
    fn test_root_cannot_be_popped() {
        let mut stack = stack();
        assert!(stack.pop().is_none());
        assert_eq!(stack.depth(), 1);
        assert!(stack.apply(Transition::Pop));
        assert_eq!(stack.names(), vec!["Title"]);
    }

    #[test]
    fn test_push_and_pop() {
        let mut stack = stack();
        stack.apply(Transition::Push(State::GameWorld(Box::new(GameWorld::empty()))));
        stack.apply(Transition::Push(State::PauseMenu(PauseMenu::new())));
        assert_eq!(stack.names(), vec!["Title", "GameWorld", "PauseMenu"]);
        assert!(stack.top().is_overlay());

        stack.apply(Transition::Pop);
        assert_eq!(stack.top().name(), "GameWorld");
    }

    #[test]
    fn test_restart_unwinds_to_root() {
        let mut stack = stack();
        stack.push(State::GameWorld(Box::new(GameWorld::empty())));
        stack.push(State::GameOver(GameOverMenu::new(2)));

        assert!(stack.apply(Transition::Restart(State::GameWorld(Box::new(
            GameWorld::empty()
        )))));
        assert_eq!(stack.names(), vec!["Title", "GameWorld"]);
    }

    #[test]
    fn test_quit_reports_stop() {
        let mut stack = stack();
        assert!(!stack.apply(Transition::Quit));
        assert!(stack.apply(Transition::None));
    }
}
