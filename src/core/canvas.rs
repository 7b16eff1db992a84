//! Drawing seam between the game core and whatever renders it.
//!
//! States describe a frame as sprites placed at bounds plus text at
//! positions, all in logical surface coordinates. The terminal frontend
//! implements [`Canvas`] over a ratatui buffer; tests implement it with a
//! recorder.

use crate::core::geometry::Bounds;

/// Artwork the core can ask for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sprite {
    /// Full-surface sky.
    Background,
    /// Ground strip, shifted left by `scroll` surface units.
    Ground { scroll: f64 },
    /// Bird with its wing frame and rotation in degrees (positive is nose-up).
    Bird { frame: usize, angle: f64 },
    /// Pipe body; `flipped` pipes hang from the top with the cap at the bottom.
    Pipe { flipped: bool },
    /// Game logo.
    Title,
    /// Menu button.
    Button { label: &'static str, focused: bool },
}

/// Horizontal anchoring of text relative to its x position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    /// `x` is the right edge of the text.
    Right,
}

/// Visual weight of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Large running score.
    Score,
    /// Heads-up and menu text.
    Hud,
}

/// A surface the game can draw on.
pub trait Canvas {
    fn draw_sprite(&mut self, sprite: Sprite, bounds: Bounds);

    fn draw_text(&mut self, text: &str, x: i32, y: i32, align: Align, style: TextStyle);
}
