//! Shared chrome around the play area: the controls footer and the
//! terminal-too-small notice.

use crate::core::constants::{MIN_TERMINAL_COLS, MIN_TERMINAL_ROWS};
use crate::states::State;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Key hints for the active state, as (key, action) pairs.
pub fn controls_for(state: &State) -> &'static [(&'static str, &'static str)] {
    match state {
        State::GameWorld(_) => &[
            ("[Enter/Up/Click]", "Flap"),
            ("[Space]", "Pause"),
            ("[Esc]", "Quit"),
        ],
        State::PauseMenu(_) => &[
            ("[Up/Down]", "Move"),
            ("[Enter]", "Select"),
            ("[Space]", "Resume"),
            ("[Esc]", "Quit"),
        ],
        State::Title(_) | State::GameOver(_) => &[
            ("[Up/Down]", "Move"),
            ("[Enter/Click]", "Select"),
            ("[Esc]", "Quit"),
        ],
    }
}

/// Render a one-line footer of (key, action) hints, centered.
pub fn render_footer(frame: &mut Frame, area: Rect, controls: &[(&str, &str)]) {
    if area.height < 1 {
        return;
    }

    let mut spans = Vec::new();
    for (i, (key, action)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default()));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, Rect { height: 1, ..area });
}

/// Whether the terminal is below the minimum playable size.
pub fn is_too_small(cols: u16, rows: u16) -> bool {
    cols < MIN_TERMINAL_COLS || rows < MIN_TERMINAL_ROWS
}

/// Render a "terminal too small" message in place of the game.
pub fn render_too_small(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Terminal too small",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Need: {}x{}   Have: {}x{}",
                MIN_TERMINAL_COLS, MIN_TERMINAL_ROWS, area.width, area.height
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Please resize your terminal.",
            Style::default().fg(Color::White),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::{GameOverMenu, GameWorld, PauseMenu, TitleScreen};

    #[test]
    fn test_minimum_size() {
        assert!(!is_too_small(40, 16));
        assert!(is_too_small(39, 16));
        assert!(is_too_small(40, 15));
        assert!(!is_too_small(200, 60));
    }

    #[test]
    fn test_every_state_mentions_quit() {
        let states = [
            State::Title(TitleScreen::new()),
            State::GameWorld(Box::new(GameWorld::empty())),
            State::PauseMenu(PauseMenu::new()),
            State::GameOver(GameOverMenu::new(3)),
        ];
        for state in &states {
            assert!(controls_for(state).iter().any(|(_, action)| *action == "Quit"));
        }
    }

    #[test]
    fn test_pause_menu_offers_resume() {
        let controls = controls_for(&State::PauseMenu(PauseMenu::new()));
        assert!(controls.iter().any(|(key, _)| *key == "[Space]"));
    }
}
