//! Keyboard and window-event polling

use macroquad::input::{KeyCode, is_key_down, is_quit_requested, prevent_quit};

use crate::sim::TickInput;

/// Raw directional keys held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Where a frame's input comes from
pub trait InputSource {
    fn keys(&self) -> KeyState;
    /// Consume a pending quit request, if any
    fn take_quit(&mut self) -> bool;
}

/// Live keyboard and window events from macroquad
#[derive(Debug)]
pub struct WindowInput;

impl WindowInput {
    /// Take over the window close button so quitting goes through the loop
    pub fn install() -> Self {
        prevent_quit();
        Self
    }
}

impl InputSource for WindowInput {
    fn keys(&self) -> KeyState {
        KeyState {
            up: is_key_down(KeyCode::W) || is_key_down(KeyCode::Up),
            down: is_key_down(KeyCode::S) || is_key_down(KeyCode::Down),
            left: is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
        }
    }

    fn take_quit(&mut self) -> bool {
        is_quit_requested()
    }
}

/// Gather this frame's tick input
pub fn poll_input(source: &mut impl InputSource) -> TickInput {
    let quit = source.take_quit();
    let keys = source.keys();
    TickInput {
        up: keys.up,
        down: keys.down,
        left: keys.left,
        right: keys.right,
        quit,
    }
}
