//! Input handling: turns crossterm events into per-tick game actions.

use crate::ui::Viewport;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Primary pointer state in surface coordinates.
///
/// `held` persists across ticks; `just_pressed` is only true on the tick
/// the press arrived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pointer {
    pub pos: Option<(i32, i32)>,
    pub held: bool,
    pub just_pressed: bool,
}

/// Everything the player asked for during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Actions {
    pub quit: bool,
    pub jump: bool,
    pub pause: bool,
    /// Activate the focused menu button.
    pub confirm: bool,
    pub focus_prev: bool,
    pub focus_next: bool,
    pub pointer: Pointer,
}

impl Actions {
    /// Actions for a tick with no input besides the pointer carried over.
    pub fn idle(pointer: Pointer) -> Self {
        Self {
            pointer,
            ..Self::default()
        }
    }

    /// Only the quit request survives, and the pointer loses its press edge
    /// so no button can fire.
    pub fn quit_only(&self) -> Self {
        Self {
            quit: self.quit,
            ..Self::idle(Pointer {
                just_pressed: false,
                ..self.pointer
            })
        }
    }
}

/// Collects events between ticks.
#[derive(Debug, Default)]
pub struct InputCollector {
    pointer: Pointer,
    pending: Actions,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one terminal event into the pending actions.
    pub fn handle_event(&mut self, event: &Event, viewport: &Viewport) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse, viewport),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        // Windows reports releases too
        if key.kind != KeyEventKind::Press {
            return;
        }
        let actions = &mut self.pending;
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => actions.quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                actions.quit = true
            }
            KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => actions.pause = true,
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => {
                actions.jump = true;
                actions.focus_prev = true;
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => actions.focus_next = true,
            KeyCode::Enter => {
                actions.jump = true;
                actions.confirm = true;
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent, viewport: &Viewport) {
        let pos = viewport.to_surface(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pointer.pos = pos;
                self.pointer.held = true;
                self.pointer.just_pressed = true;
                // Clicks on the footer or letterbox do not flap
                self.pending.jump |= pos.is_some();
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.pointer.pos = pos;
                self.pointer.held = false;
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.pointer.pos = pos;
            }
            _ => {}
        }
    }

    /// Hand out this tick's actions and start collecting the next tick's.
    pub fn take(&mut self) -> Actions {
        let mut actions = std::mem::take(&mut self.pending);
        actions.pointer = self.pointer;
        self.pointer.just_pressed = false;
        actions
    }
}
