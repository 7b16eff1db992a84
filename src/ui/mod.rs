//! Terminal frontend: lays the game surface out on the terminal and draws it.

pub mod game_common;
pub mod terminal_canvas;
pub mod viewport;

pub use terminal_canvas::TerminalCanvas;
pub use viewport::Viewport;

use crate::core::game_loop::Game;
use game_common::{controls_for, is_too_small, render_footer, render_too_small};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Split the terminal into the play area and the one-line footer.
pub fn split(size: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(size);
    (chunks[0], chunks[1])
}

/// Viewport the game surface occupies for a terminal of `size`.
pub fn viewport_for(size: Rect) -> Viewport {
    Viewport::new(split(size).0)
}

/// Draw one frame of the game.
pub fn draw(frame: &mut Frame, game: &Game) {
    let size = frame.size();
    if is_too_small(size.width, size.height) {
        render_too_small(frame, size);
        return;
    }

    let (play_area, footer) = split(size);
    {
        let mut canvas = TerminalCanvas::new(frame.buffer_mut(), Viewport::new(play_area));
        game.render(&mut canvas);
    }
    render_footer(frame, footer, controls_for(game.stack().top()));
}
