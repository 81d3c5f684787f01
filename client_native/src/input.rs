//! Keyboard and gamepad input handling

use game_core::Direction;
use gilrs::Button;
use winit::keyboard::{Key, NamedKey};

/// A key that steers the human paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteerKey {
    Up,
    Down,
}

/// Map a logical key to a steering key
pub fn steer_key(key: &Key) -> Option<SteerKey> {
    match key {
        Key::Named(NamedKey::ArrowUp) => Some(SteerKey::Up),
        Key::Named(NamedKey::ArrowDown) => Some(SteerKey::Down),
        Key::Character(c) if c.eq_ignore_ascii_case("w") => Some(SteerKey::Up),
        Key::Character(c) if c.eq_ignore_ascii_case("s") => Some(SteerKey::Down),
        _ => None,
    }
}

pub fn is_quit_key(key: &Key) -> bool {
    matches!(key, Key::Named(NamedKey::Escape))
}

/// Map a gamepad button to a steering key; the left stick click pushes down
pub fn pad_steer(button: Button) -> Option<SteerKey> {
    match button {
        Button::DPadUp => Some(SteerKey::Up),
        Button::DPadDown | Button::LeftThumb => Some(SteerKey::Down),
        _ => None,
    }
}

/// Held state of the steering keys
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    up: bool,
    down: bool,
}

impl KeyState {
    pub fn set(&mut self, key: SteerKey, pressed: bool) {
        match key {
            SteerKey::Up => self.up = pressed,
            SteerKey::Down => self.down = pressed,
        }
    }

    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    /// Up wins when both keys are held
    pub fn direction(&self) -> Direction {
        if self.up {
            Direction::Up
        } else if self.down {
            Direction::Down
        } else {
            Direction::Idle
        }
    }
}

/// Steering from the keyboard, or from the gamepad while one is connected
#[derive(Debug, Clone, Copy, Default)]
pub struct Steering {
    keys: KeyState,
    pad: KeyState,
    pads: usize,
}

impl Steering {
    pub fn new(pads: usize) -> Self {
        Self {
            pads,
            ..Self::default()
        }
    }

    pub fn key(&mut self, key: SteerKey, pressed: bool) {
        self.keys.set(key, pressed);
    }

    pub fn pad_button(&mut self, button: Button, pressed: bool) {
        if let Some(key) = pad_steer(button) {
            self.pad.set(key, pressed);
        }
    }

    /// Record how many gamepads are connected now
    pub fn set_pads(&mut self, pads: usize) {
        self.pads = pads;
        if pads == 0 {
            self.pad.release_all();
        }
    }

    /// Key releases are lost while the window is unfocused
    pub fn release_keys(&mut self) {
        self.keys.release_all();
    }

    pub fn has_pad(&self) -> bool {
        self.pads > 0
    }

    pub fn direction(&self) -> Direction {
        if self.has_pad() {
            self.pad.direction()
        } else {
            self.keys.direction()
        }
    }
}
