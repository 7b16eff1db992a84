//! Menu artwork and buttons.
//!
//! An [`Element`] is something drawable at fixed bounds. Giving it a
//! [`ClickLatch`] makes it a button; there is no separate button type.

use crate::core::canvas::{Canvas, Sprite};
use crate::core::geometry::Bounds;
use crate::input::{Actions, Pointer};

/// What an element looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visual {
    Title,
    Button(&'static str),
}

/// Click detection for an element.
///
/// Fires once per press while the pointer is over the element, even when
/// the release arrived in the same tick. The latch re-arms only after the
/// button is released over the element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickLatch {
    clicked: bool,
}

impl ClickLatch {
    pub fn check(&mut self, bounds: &Bounds, pointer: &Pointer) -> bool {
        let Some((px, py)) = pointer.pos else {
            return false;
        };
        if !bounds.contains_point(px, py) {
            return false;
        }

        let mut fired = false;
        if pointer.just_pressed && !self.clicked {
            self.clicked = true;
            fired = true;
        }
        if !pointer.held {
            self.clicked = false;
        }
        fired
    }
}

/// Drawable menu element with optional click capability.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub bounds: Bounds,
    pub visual: Visual,
    click: Option<ClickLatch>,
}

impl Element {
    /// Static artwork: `size` is the unscaled image, centered on `center`.
    pub fn new(center: (i32, i32), size: (i32, i32), scale: f64, visual: Visual) -> Self {
        let bounds = Bounds::centered(center.0, center.1, size.0, size.1).scaled(scale);
        Self {
            bounds,
            visual,
            click: None,
        }
    }

    /// Clickable button with the given label.
    pub fn button(center: (i32, i32), size: (i32, i32), scale: f64, label: &'static str) -> Self {
        Self {
            click: Some(ClickLatch::default()),
            ..Self::new(center, size, scale, Visual::Button(label))
        }
    }

    pub fn is_clickable(&self) -> bool {
        self.click.is_some()
    }

    /// True on the tick the element is clicked. Always false for artwork.
    pub fn pressed(&mut self, pointer: &Pointer) -> bool {
        match self.click.as_mut() {
            Some(latch) => latch.check(&self.bounds, pointer),
            None => false,
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, focused: bool) {
        let sprite = match self.visual {
            Visual::Title => Sprite::Title,
            Visual::Button(label) => Sprite::Button { label, focused },
        };
        canvas.draw_sprite(sprite, self.bounds);
    }
}

/// A vertical list of buttons with keyboard focus.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonGroup {
    buttons: Vec<Element>,
    focus: usize,
}

impl ButtonGroup {
    pub fn new(buttons: Vec<Element>) -> Self {
        Self { buttons, focus: 0 }
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn reset_focus(&mut self) {
        self.focus = 0;
    }

    pub fn buttons(&self) -> &[Element] {
        &self.buttons
    }

    /// Index of the button activated this tick, by pointer or keyboard.
    ///
    /// Every button's latch sees the pointer each tick, like polling each
    /// button in turn; the first hit wins.
    pub fn poll(&mut self, actions: &Actions) -> Option<usize> {
        let count = self.buttons.len();
        if count == 0 {
            return None;
        }
        if actions.focus_prev {
            self.focus = (self.focus + count - 1) % count;
        }
        if actions.focus_next {
            self.focus = (self.focus + 1) % count;
        }

        let mut hit = None;
        for (i, button) in self.buttons.iter_mut().enumerate() {
            if button.pressed(&actions.pointer) && hit.is_none() {
                hit = Some(i);
            }
        }
        if let Some(i) = hit {
            self.focus = i;
            return hit;
        }

        actions.confirm.then_some(self.focus)
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        for (i, button) in self.buttons.iter().enumerate() {
            button.draw(canvas, i == self.focus);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_at(x: i32, y: i32) -> Pointer {
        Pointer {
            pos: Some((x, y)),
            held: true,
            just_pressed: true,
        }
    }

    fn hold_at(x: i32, y: i32) -> Pointer {
        Pointer {
            pos: Some((x, y)),
            held: true,
            just_pressed: false,
        }
    }

    fn release_at(x: i32, y: i32) -> Pointer {
        Pointer {
            pos: Some((x, y)),
            held: false,
            just_pressed: false,
        }
    }

    #[test]
    fn test_button_bounds_are_scaled_about_center() {
        let button = Element::button((432, 468), (240, 105), 0.8, "START");
        assert_eq!(button.bounds.width, 192);
        assert_eq!(button.bounds.height, 84);
        assert_eq!(button.bounds.center(), (432, 468));
    }

    #[test]
    fn test_press_fires_once_per_press() {
        let mut button = Element::button((100, 100), (100, 50), 1.0, "GO");
        assert!(button.pressed(&press_at(100, 100)));
        assert!(!button.pressed(&hold_at(100, 100)));
        assert!(!button.pressed(&release_at(100, 100)));
        assert!(button.pressed(&press_at(100, 100)));
    }

    #[test]
    fn test_press_and_release_in_one_tick_fires() {
        let mut button = Element::button((100, 100), (100, 50), 1.0, "GO");
        let tap = Pointer {
            pos: Some((100, 100)),
            held: false,
            just_pressed: true,
        };
        assert!(button.pressed(&tap));
        assert!(!button.pressed(&release_at(100, 100)));
        assert!(button.pressed(&tap));
    }

    #[test]
    fn test_press_outside_is_ignored() {
        let mut button = Element::button((100, 100), (100, 50), 1.0, "GO");
        assert!(!button.pressed(&press_at(400, 400)));
        assert!(!button.pressed(&Pointer::default()));
    }

    #[test]
    fn test_held_pointer_entering_button_does_not_fire() {
        let mut button = Element::button((100, 100), (100, 50), 1.0, "GO");
        assert!(!button.pressed(&hold_at(100, 100)));
    }

    #[test]
    fn test_artwork_is_never_pressed() {
        let mut title = Element::new((432, 150), (270, 60), 2.0, Visual::Title);
        assert!(!title.is_clickable());
        assert!(!title.pressed(&press_at(432, 150)));
    }

    fn group() -> ButtonGroup {
        ButtonGroup::new(vec![
            Element::button((100, 100), (100, 50), 1.0, "A"),
            Element::button((100, 300), (100, 50), 1.0, "B"),
        ])
    }

    #[test]
    fn test_group_keyboard_focus_wraps() {
        let mut g = group();
        let prev = Actions {
            focus_prev: true,
            ..Actions::default()
        };
        assert_eq!(g.poll(&prev), None);
        assert_eq!(g.focus(), 1);

        let next = Actions {
            focus_next: true,
            ..Actions::default()
        };
        g.poll(&next);
        assert_eq!(g.focus(), 0);
    }

    #[test]
    fn test_group_confirm_activates_focused() {
        let mut g = group();
        let actions = Actions {
            focus_next: true,
            confirm: true,
            ..Actions::default()
        };
        assert_eq!(g.poll(&actions), Some(1));
    }

    #[test]
    fn test_group_click_wins_and_moves_focus() {
        let mut g = group();
        let actions = Actions::idle(press_at(100, 300));
        assert_eq!(g.poll(&actions), Some(1));
        assert_eq!(g.focus(), 1);
    }
}
