//! Game over overlay: final score, high score, restart or exit.

use super::{GameWorld, State, Transition};
use crate::core::canvas::{Align, Canvas, TextStyle};
use crate::core::constants::{
    EXIT_BUTTON_SIZE, FINAL_HIGH_SCORE_POS, FINAL_SCORE_POS, GAME_OVER_EXIT_CENTER,
    GAME_OVER_EXIT_SCALE, GAME_OVER_RESTART_CENTER, GAME_OVER_RESTART_SCALE, RESTART_BUTTON_SIZE,
};
use crate::core::elements::{ButtonGroup, Element};
use crate::core::session::Session;
use crate::input::Actions;
use rand::Rng;
use tracing::info;

const RESTART: usize = 0;
const EXIT: usize = 1;

#[derive(Debug, Clone)]
pub struct GameOverMenu {
    pub score: u32,
    buttons: ButtonGroup,
}

impl GameOverMenu {
    pub fn new(score: u32) -> Self {
        Self {
            score,
            buttons: ButtonGroup::new(vec![
                Element::button(
                    GAME_OVER_RESTART_CENTER,
                    RESTART_BUTTON_SIZE,
                    GAME_OVER_RESTART_SCALE,
                    "RESTART",
                ),
                Element::button(
                    GAME_OVER_EXIT_CENTER,
                    EXIT_BUTTON_SIZE,
                    GAME_OVER_EXIT_SCALE,
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
            Some(RESTART) => {
                info!("Restarting the Game...");
                Transition::Restart(State::GameWorld(Box::new(GameWorld::new(
                    &session.config,
                    rng,
                ))))
            }
            Some(EXIT) => {
                info!("Exiting from the game over menu");
                session.save_high_score();
                Transition::Quit
            }
            _ => Transition::None,
        }
    }

    pub fn render(&self, canvas: &mut dyn Canvas, session: &Session) {
        canvas.draw_text(
            &format!("Your Score: {}", self.score),
            FINAL_SCORE_POS.0,
            FINAL_SCORE_POS.1,
            Align::Left,
            TextStyle::Hud,
        );
        canvas.draw_text(
            &format!("High Score: {}", session.high_score()),
            FINAL_HIGH_SCORE_POS.0,
            FINAL_HIGH_SCORE_POS.1,
            Align::Left,
            TextStyle::Hud,
        );
        self.buttons.draw(canvas);
    }
}
