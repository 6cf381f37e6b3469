//! Platform abstraction layer
//!
//! Handles the pieces the frame loop reads from the outside world:
//! - Frame timing
//! - Keyboard input latched into held-key flags
//! - Close requests
//! - Console commands standing in for a keyboard in the headless binary

mod console;

use std::time::Instant;

pub use console::{ConsoleInput, key_events_for_line};

use crate::sim::TickInput;

/// Measures elapsed seconds between frames
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous call (or since creation)
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    W,
    S,
    Up,
    Down,
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Release,
}

/// Held-key flags and the close signal
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    moving_up: bool,
    moving_down: bool,
    close_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one key event. Press latches a flag, release clears it.
    pub fn handle_key(&mut self, key: Key, action: KeyAction) {
        let pressed = action == KeyAction::Press;
        match key {
            Key::W | Key::Up => self.moving_up = pressed,
            Key::S | Key::Down => self.moving_down = pressed,
            Key::Escape => {
                if pressed {
                    self.request_close();
                }
            }
            Key::Other => {}
        }
    }

    pub fn up(&self) -> bool {
        self.moving_up
    }

    pub fn down(&self) -> bool {
        self.moving_down
    }

    pub fn request_close(&mut self) {
        if !self.close_requested {
            log::info!("Close requested");
        }
        self.close_requested = true;
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Snapshot for the next simulation step
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            up: self.moving_up,
            down: self.moving_down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release_latch() {
        let mut input = InputState::new();
        input.handle_key(Key::W, KeyAction::Press);
        assert!(input.up());
        assert!(!input.down());

        input.handle_key(Key::Down, KeyAction::Press);
        assert_eq!(input.tick_input(), TickInput { up: true, down: true });

        input.handle_key(Key::Up, KeyAction::Release);
        input.handle_key(Key::S, KeyAction::Release);
        assert_eq!(input.tick_input(), TickInput::default());
    }

    #[test]
    fn test_escape_requests_close() {
        let mut input = InputState::new();
        input.handle_key(Key::Escape, KeyAction::Release);
        assert!(!input.close_requested());
        input.handle_key(Key::Other, KeyAction::Press);
        assert!(!input.close_requested());
        input.handle_key(Key::Escape, KeyAction::Press);
        assert!(input.close_requested());
    }

    #[test]
    fn test_clock_is_monotonic() {
        let mut clock = FrameClock::new();
        let a = clock.tick();
        let b = clock.tick();
        assert!(a >= 0.0);
        assert!(b >= 0.0);
    }
}
