//! Title screen: logo plus start and exit buttons.

use super::{GameWorld, State, Transition};
use crate::core::canvas::Canvas;
use crate::core::constants::{
    EXIT_BUTTON_SIZE, START_BUTTON_SIZE, TITLE_BUTTON_SCALE, TITLE_CENTER, TITLE_EXIT_CENTER,
    TITLE_SCALE, TITLE_SIZE, TITLE_START_CENTER,
};
use crate::core::elements::{ButtonGroup, Element, Visual};
use crate::core::session::Session;
use crate::input::Actions;
use rand::Rng;
use tracing::info;

const START: usize = 0;
const EXIT: usize = 1;

#[derive(Debug, Clone)]
pub struct TitleScreen {
    logo: Element,
    buttons: ButtonGroup,
}

impl TitleScreen {
    pub fn new() -> Self {
        Self {
            logo: Element::new(TITLE_CENTER, TITLE_SIZE, TITLE_SCALE, Visual::Title),
            buttons: ButtonGroup::new(vec![
                Element::button(
                    TITLE_START_CENTER,
                    START_BUTTON_SIZE,
                    TITLE_BUTTON_SCALE,
                    "START",
                ),
                Element::button(
                    TITLE_EXIT_CENTER,
                    EXIT_BUTTON_SIZE,
                    TITLE_BUTTON_SCALE,
                    "EXIT",
                ),
            ]),
        }
    }

    pub fn buttons(&self) -> &ButtonGroup {
        &self.buttons
    }

    pub fn reset_focus(&mut self) {
        self.buttons.reset_focus();
    }

    pub fn update<R: Rng>(
        &mut self,
        actions: &Actions,
        session: &mut Session,
        rng: &mut R,
    ) -> Transition {
        match self.buttons.poll(actions) {
            Some(START) => {
                info!("Starting the game...");
                Transition::Push(State::GameWorld(Box::new(GameWorld::new(
                    &session.config,
                    rng,
                ))))
            }
            Some(EXIT) => {
                info!("Exit selected on the title screen");
                Transition::Quit
            }
            _ => Transition::None,
        }
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        self.logo.draw(canvas, false);
        self.buttons.draw(canvas);
    }
}

impl Default for TitleScreen {
    fn default() -> Self {
        Self::new()
    }
}
