//! Pause overlay drawn over the suspended world.

use super::Transition;
use crate::core::canvas::{Align, Canvas, TextStyle};
use crate::core::constants::{
    EXIT_BUTTON_SIZE, HALF_SCREEN_WIDTH, PAUSE_BUTTON_SCALE, PAUSE_EXIT_CENTER,
    PAUSE_RESUME_CENTER, RESUME_BUTTON_SIZE,
};
use crate::core::elements::{ButtonGroup, Element};
use crate::core::session::Session;
use crate::input::Actions;
use tracing::info;

const RESUME: usize = 0;
const EXIT: usize = 1;

#[derive(Debug, Clone)]
pub struct PauseMenu {
    buttons: ButtonGroup,
}

impl PauseMenu {
    pub fn new() -> Self {
        Self {
            buttons: ButtonGroup::new(vec![
                Element::button(
                    PAUSE_RESUME_CENTER,
                    RESUME_BUTTON_SIZE,
                    PAUSE_BUTTON_SCALE,
                    "RESUME",
                ),
                Element::button(
                    PAUSE_EXIT_CENTER,
                    EXIT_BUTTON_SIZE,
                    PAUSE_BUTTON_SCALE,
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

    pub fn update(&mut self, actions: &Actions, session: &mut Session) -> Transition {
        if actions.pause {
            info!("Resuming the game...");
            return Transition::Pop;
        }
        match self.buttons.poll(actions) {
            Some(RESUME) => {
                info!("Resuming the game...");
                Transition::Pop
            }
            Some(EXIT) => {
                info!("Exiting from the pause menu");
                session.save_high_score();
                Transition::Quit
            }
            _ => Transition::None,
        }
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.draw_text(
            "PAUSED",
            HALF_SCREEN_WIDTH,
            PAUSE_RESUME_CENTER.1 - 120,
            Align::Center,
            TextStyle::Score,
        );
        self.buttons.draw(canvas);
    }
}

impl Default for PauseMenu {
    fn default() -> Self {
        Self::new()
    }
}
