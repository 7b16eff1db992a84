//! Mapping between the logical game surface and terminal cells.

use crate::core::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use ratatui::layout::Rect;

/// The terminal area the surface is stretched over.
///
/// Scaling is independent per axis so the surface always fills the area;
/// terminal cells are roughly twice as tall as they are wide, which keeps
/// the picture close to the surface's proportions on common sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub area: Rect,
}

impl Viewport {
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    fn cols_f(&self) -> f64 {
        self.area.width as f64
    }

    fn rows_f(&self) -> f64 {
        self.area.height as f64
    }

    /// Surface point under the centre of a terminal cell, or `None` if the
    /// cell is outside the area.
    pub fn to_surface(&self, column: u16, row: u16) -> Option<(i32, i32)> {
        let area = self.area;
        if column < area.x
            || row < area.y
            || column >= area.x + area.width
            || row >= area.y + area.height
        {
            return None;
        }
        let x = ((column - area.x) as f64 + 0.5) * SCREEN_WIDTH as f64 / self.cols_f();
        let y = ((row - area.y) as f64 + 0.5) * SCREEN_HEIGHT as f64 / self.rows_f();
        Some((x.floor() as i32, y.floor() as i32))
    }

    /// Terminal cell containing a surface point. May lie outside the area.
    pub fn to_cell(&self, x: f64, y: f64) -> (i32, i32) {
        (self.column_at(x), self.row_at(y))
    }

    pub fn column_at(&self, x: f64) -> i32 {
        self.area.x as i32 + (x * self.cols_f() / SCREEN_WIDTH as f64).floor() as i32
    }

    pub fn row_at(&self, y: f64) -> i32 {
        self.area.y as i32 + (y * self.rows_f() / SCREEN_HEIGHT as f64).floor() as i32
    }

    /// Cells covered by a surface span, at least one cell wide.
    pub fn column_span(&self, left: i32, right: i32) -> (i32, i32) {
        let start = self.column_at(left as f64);
        let end =
            self.area.x as i32 + (right as f64 * self.cols_f() / SCREEN_WIDTH as f64).ceil() as i32;
        (start, end.max(start + 1))
    }

    /// Rows covered by a surface span, at least one row tall.
    pub fn row_span(&self, top: i32, bottom: i32) -> (i32, i32) {
        let start = self.row_at(top as f64);
        let end = self.area.y as i32
            + (bottom as f64 * self.rows_f() / SCREEN_HEIGHT as f64).ceil() as i32;
        (start, end.max(start + 1))
    }
}
