//! Terminal rendition of the game surface on a ratatui buffer.

use crate::core::canvas::{Align, Canvas, Sprite, TextStyle};
use crate::core::constants::{GROUND_Y_POS, SCREEN_WIDTH};
use crate::core::geometry::Bounds;
use crate::ui::viewport::Viewport;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Widget},
};

const SKY_TOP: (u8, u8, u8) = (78, 192, 202);
const SKY_BOTTOM: (u8, u8, u8) = (200, 238, 232);
const GRASS: Color = Color::Rgb(115, 191, 46);
const GRASS_DARK: Color = Color::Rgb(84, 150, 32);
const DIRT: Color = Color::Rgb(222, 216, 149);
const PIPE_BODY: Color = Color::Rgb(99, 176, 45);
const PIPE_SHADE: Color = Color::Rgb(62, 128, 30);
const PIPE_CAP: Color = Color::Rgb(70, 140, 36);
const BUTTON: Color = Color::Rgb(232, 97, 1);
const BUTTON_IDLE: Color = Color::Rgb(120, 72, 30);

/// Surface width of one ground stripe.
const STRIPE_WIDTH: f64 = 24.0;

const WING_GLYPHS: [char; 3] = ['^', '-', 'v'];
const TITLE_TEXT: &str = "FLAPPY BIRD";

/// Draws sprites and text into `buffer` within the viewport's area.
pub struct TerminalCanvas<'a> {
    buffer: &'a mut Buffer,
    viewport: Viewport,
}

impl<'a> TerminalCanvas<'a> {
    pub fn new(buffer: &'a mut Buffer, viewport: Viewport) -> Self {
        Self { buffer, viewport }
    }

    fn area(&self) -> Rect {
        self.viewport.area.intersection(self.buffer.area)
    }

    /// Cell rectangle for surface bounds, clipped to the drawable area.
    fn cell_rect(&self, bounds: &Bounds) -> Option<Rect> {
        let (left, right) = self.viewport.column_span(bounds.left(), bounds.right());
        let (top, bottom) = self.viewport.row_span(bounds.top(), bounds.bottom());
        clip((left, right), (top, bottom), self.area())
    }

    fn put(&mut self, column: i32, row: i32, ch: char, style: Style) {
        let area = self.area();
        if column < area.x as i32
            || row < area.y as i32
            || column >= area.right() as i32
            || row >= area.bottom() as i32
        {
            return;
        }
        self.buffer
            .get_mut(column as u16, row as u16)
            .set_char(ch)
            .set_style(style);
    }

    fn fill(&mut self, rect: Rect, bg: Color) {
        for row in rect.top()..rect.bottom() {
            for column in rect.left()..rect.right() {
                self.buffer.get_mut(column, row).set_char(' ').set_bg(bg);
            }
        }
    }

    fn text_at(&mut self, text: &str, column: i32, row: i32, style: Style) {
        for (i, ch) in text.chars().enumerate() {
            self.put(column + i as i32, row, ch, style);
        }
    }

    /// Centre `text` on the middle row of `rect`.
    fn label(&mut self, text: &str, rect: Rect, style: Style) {
        let width = text.chars().count() as i32;
        let column = rect.x as i32 + (rect.width as i32 - width) / 2;
        let row = rect.y as i32 + rect.height as i32 / 2;
        self.text_at(text, column, row, style);
    }

    fn draw_background(&mut self) {
        let area = self.area();
        let span = area.height.max(1) as f64;
        for row in area.top()..area.bottom() {
            let t = (row - area.y) as f64 / span;
            let color = Color::Rgb(
                lerp(SKY_TOP.0, SKY_BOTTOM.0, t),
                lerp(SKY_TOP.1, SKY_BOTTOM.1, t),
                lerp(SKY_TOP.2, SKY_BOTTOM.2, t),
            );
            self.fill(Rect::new(area.x, row, area.width, 1), color);
        }
    }

    fn draw_ground(&mut self, scroll: f64, bounds: &Bounds) {
        let Some(rect) = self.cell_rect(bounds) else {
            return;
        };
        self.fill(rect, DIRT);
        for column in rect.left()..rect.right() {
            let x = self.surface_x(column) - scroll;
            let stripe = (x / STRIPE_WIDTH).floor() as i64;
            let color = if stripe.rem_euclid(2) == 0 {
                GRASS
            } else {
                GRASS_DARK
            };
            self.buffer
                .get_mut(column, rect.y)
                .set_char('▀')
                .set_fg(color)
                .set_bg(DIRT);
        }
    }

    fn draw_pipe(&mut self, flipped: bool, bounds: &Bounds) {
        // Pipes slide under the ground strip
        let ground_row = self.viewport.row_at(GROUND_Y_POS as f64);
        let (left, right) = self.viewport.column_span(bounds.left(), bounds.right());
        let (top, bottom) = self.viewport.row_span(bounds.top(), bounds.bottom());
        let bottom = bottom.min(ground_row);
        let mut area = self.area();
        area.height = area.height.min((ground_row - area.y as i32).max(0) as u16);

        if let Some(body) = clip((left, right), (top, bottom), area) {
            self.fill(body, PIPE_BODY);
            for row in body.top()..body.bottom() {
                self.buffer.get_mut(body.right() - 1, row).set_bg(PIPE_SHADE);
            }
        }

        let cap_row = if flipped { bottom - 1 } else { top };
        if cap_row >= top && cap_row < bottom {
            if let Some(cap) = clip((left - 1, right + 1), (cap_row, cap_row + 1), area) {
                for column in cap.left()..cap.right() {
                    self.buffer
                        .get_mut(column, cap.y)
                        .set_char('█')
                        .set_fg(PIPE_CAP);
                }
            }
        }
    }

    fn draw_bird(&mut self, frame: usize, angle: f64, bounds: &Bounds) {
        let (center_x, center_y) = bounds.center();
        let (column, row) = self.viewport.to_cell(center_x as f64, center_y as f64);
        let beak = if angle <= -45.0 {
            '↓'
        } else if angle >= 5.0 {
            '↗'
        } else {
            '>'
        };
        let style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        self.put(column - 1, row, WING_GLYPHS[frame % WING_GLYPHS.len()], style);
        self.put(column, row, '●', style);
        self.put(column + 1, row, beak, style.fg(Color::LightRed));
    }

    fn draw_title(&mut self, bounds: &Bounds) {
        let style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let Some(rect) = self.cell_rect(bounds) else {
            return;
        };
        if rect.height >= 3 && rect.width >= TITLE_TEXT.len() as u16 + 2 {
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(style)
                .render(rect, self.buffer);
        }
        self.label(TITLE_TEXT, rect, style.fg(Color::White));
    }

    fn draw_button(&mut self, label: &str, focused: bool, bounds: &Bounds) {
        let Some(rect) = self.cell_rect(bounds) else {
            return;
        };
        let (bg, border) = if focused {
            (BUTTON, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        } else {
            (BUTTON_IDLE, Style::default().fg(Color::White))
        };
        self.fill(rect, bg);
        if rect.height >= 3 {
            Block::default()
                .borders(Borders::ALL)
                .border_type(if focused {
                    BorderType::Thick
                } else {
                    BorderType::Rounded
                })
                .border_style(border)
                .render(rect, self.buffer);
            self.label(label, rect, border.fg(Color::White));
        } else if focused {
            self.label(&format!("> {} <", label), rect, border);
        } else {
            self.label(label, rect, border);
        }
    }

    /// Surface x of a column's centre.
    fn surface_x(&self, column: u16) -> f64 {
        let area = self.viewport.area;
        ((column - area.x) as f64 + 0.5) * SCREEN_WIDTH as f64
            / area.width.max(1) as f64
    }
}

impl Canvas for TerminalCanvas<'_> {
    fn draw_sprite(&mut self, sprite: Sprite, bounds: Bounds) {
        match sprite {
            Sprite::Background => self.draw_background(),
            Sprite::Ground { scroll } => self.draw_ground(scroll, &bounds),
            Sprite::Pipe { flipped } => self.draw_pipe(flipped, &bounds),
            Sprite::Bird { frame, angle } => self.draw_bird(frame, angle, &bounds),
            Sprite::Title => self.draw_title(&bounds),
            Sprite::Button { label, focused } => self.draw_button(label, focused, &bounds),
        }
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, align: Align, style: TextStyle) {
        let (column, row) = self.viewport.to_cell(x as f64, y as f64);
        let width = text.chars().count() as i32;
        let start = match align {
            Align::Left => column,
            Align::Center => column - width / 2,
            Align::Right => column - width,
        };
        let style = match style {
            TextStyle::Score => Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            TextStyle::Hud => Style::default().fg(Color::Black),
        };
        self.text_at(text, start, row, style);
    }
}

fn lerp(from: u8, to: u8, t: f64) -> u8 {
    (from as f64 + (to as f64 - from as f64) * t.clamp(0.0, 1.0)).round() as u8
}

/// Intersect a half-open cell span with `area`.
fn clip(columns: (i32, i32), rows: (i32, i32), area: Rect) -> Option<Rect> {
    let left = columns.0.max(area.left() as i32);
    let right = columns.1.min(area.right() as i32);
    let top = rows.0.max(area.top() as i32);
    let bottom = rows.1.min(area.bottom() as i32);
    if left >= right || top >= bottom {
        return None;
    }
    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::SCREEN_HEIGHT;

    const COLS: u16 = 108;
    const ROWS: u16 = 39;

    fn buffer() -> Buffer {
        Buffer::empty(Rect::new(0, 0, COLS, ROWS + 1))
    }

    fn viewport() -> Viewport {
        Viewport::new(Rect::new(0, 0, COLS, ROWS))
    }

    fn row_text(buf: &Buffer, row: u16) -> String {
        (0..COLS).map(|x| buf.get(x, row).symbol()).collect()
    }

    #[test]
    fn test_background_fills_viewport_only() {
        let mut buf = buffer();
        TerminalCanvas::new(&mut buf, viewport()).draw_sprite(
            Sprite::Background,
            Bounds::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT),
        );
        assert!(matches!(buf.get(0, 0).bg, Color::Rgb(78, 192, 202)));
        assert_eq!(buf.get(0, ROWS).bg, Color::Reset);
    }

    #[test]
    fn test_centered_text() {
        let mut buf = buffer();
        TerminalCanvas::new(&mut buf, viewport()).draw_text(
            "12",
            432,
            40,
            Align::Center,
            TextStyle::Score,
        );
        let row = row_text(&buf, 1);
        assert_eq!(row.find("12"), Some(53));
    }

    #[test]
    fn test_right_aligned_text_ends_at_anchor() {
        let mut buf = buffer();
        TerminalCanvas::new(&mut buf, viewport()).draw_text(
            "High Score: 3",
            844,
            40,
            Align::Right,
            TextStyle::Hud,
        );
        let row = row_text(&buf, 1);
        let start = row.find("High Score: 3").unwrap();
        assert_eq!(start + "High Score: 3".len(), 105);
    }

    #[test]
    fn test_button_shows_label() {
        let mut buf = buffer();
        let bounds = Bounds::centered(432, 338, 192, 84);
        TerminalCanvas::new(&mut buf, viewport()).draw_sprite(
            Sprite::Button {
                label: "START",
                focused: true,
            },
            bounds,
        );
        assert!((0..ROWS).any(|row| row_text(&buf, row).contains("START")));
    }

    #[test]
    fn test_pipe_stops_at_ground() {
        let mut buf = buffer();
        let ground_row = viewport().row_at(GROUND_Y_POS as f64) as u16;
        TerminalCanvas::new(&mut buf, viewport()).draw_sprite(
            Sprite::Pipe { flipped: false },
            Bounds::new(400, 600, 78, 560),
        );
        assert_eq!(buf.get(51, ground_row - 1).bg, PIPE_BODY);
        assert_eq!(buf.get(51, ground_row).bg, Color::Reset);
    }

    #[test]
    fn test_offscreen_sprites_are_clipped() {
        let mut buf = buffer();
        let mut canvas = TerminalCanvas::new(&mut buf, viewport());
        canvas.draw_sprite(Sprite::Pipe { flipped: true }, Bounds::new(-200, -400, 78, 560));
        canvas.draw_sprite(Sprite::Pipe { flipped: false }, Bounds::new(900, 500, 78, 560));
        canvas.draw_sprite(
            Sprite::Bird {
                frame: 2,
                angle: -90.0,
            },
            Bounds::new(-40, -40, 51, 36),
        );
        canvas.draw_text("far away", 5000, 5000, Align::Left, TextStyle::Hud);
    }

    #[test]
    fn test_bird_beak_follows_angle() {
        let mut buf = buffer();
        let bounds = Bounds::new(100, 400, 51, 36);
        TerminalCanvas::new(&mut buf, viewport()).draw_sprite(
            Sprite::Bird {
                frame: 0,
                angle: -90.0,
            },
            bounds,
        );
        let (x, y) = bounds.center();
        let (column, row) = viewport().to_cell(x as f64, y as f64);
        assert_eq!(buf.get(column as u16, row as u16).symbol(), "●");
        assert_eq!(buf.get(column as u16 + 1, row as u16).symbol(), "↓");
        assert_eq!(buf.get(column as u16 - 1, row as u16).symbol(), "^");
    }
}
