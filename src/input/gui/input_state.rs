use std::collections::HashSet;

use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

use crate::controllers::session::ports::input_source::{InputSource, Key};
use crate::core::data::normalized_point::NormalizedPoint;

/// Maps a physical key to the session key it drives.
#[must_use]
pub fn key_for(key_code: KeyCode) -> Option<Key> {
    match key_code {
        KeyCode::Equal | KeyCode::NumpadAdd => Some(Key::ZoomIn),
        KeyCode::Minus | KeyCode::NumpadSubtract => Some(Key::ZoomOut),
        KeyCode::ArrowUp => Some(Key::PanUp),
        KeyCode::ArrowDown => Some(Key::PanDown),
        KeyCode::ArrowLeft => Some(Key::PanLeft),
        KeyCode::ArrowRight => Some(Key::PanRight),
        _ => None,
    }
}

/// Device state accumulated from window events and polled by the session.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GuiInputState {
    held: HashSet<Key>,
    left_button_held: bool,
    cursor: Option<(f64, f64)>,
    window_size: (u32, u32),
}

impl GuiInputState {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            window_size: (width, height),
            ..Self::default()
        }
    }

    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState) {
        let Some(key) = key_for(key_code) else {
            return;
        };

        match state {
            ElementState::Pressed => {
                self.held.insert(key);
            }
            ElementState::Released => {
                self.held.remove(&key);
            }
        }
    }

    pub fn handle_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.left_button_held = state == ElementState::Pressed;
        }
    }

    pub fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor = Some((x, y));
    }

    pub fn handle_cursor_left(&mut self) {
        self.cursor = None;
        self.left_button_held = false;
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
    }

    /// Whether the pointer is over the window.
    #[must_use]
    pub fn has_pointer(&self) -> bool {
        self.cursor.is_some()
    }

    /// Drops all held keys and buttons, e.g. when focus is lost.
    pub fn reset(&mut self) {
        self.held.clear();
        self.left_button_held = false;
    }
}

impl InputSource for GuiInputState {
    fn pointer_pressed(&self) -> bool {
        self.left_button_held && self.cursor.is_some()
    }

    fn pointer_position(&self) -> NormalizedPoint {
        let (width, height) = self.window_size;

        self.cursor
            .and_then(|(x, y)| {
                NormalizedPoint::from_window_position(x, y, f64::from(width), f64::from(height))
            })
            .unwrap_or(NormalizedPoint::CENTER)
    }

    fn is_key_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}
