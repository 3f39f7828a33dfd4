//! Keyboard input
//!
//! Raw key events are normalized to a paddle direction. Only changes are
//! reported; consumers hold the latest known direction between reports.

use serde::{Deserialize, Serialize};

/// Intended paddle direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    #[default]
    Stop,
    Right,
}

impl Direction {
    /// -1, 0 or +1
    #[inline]
    pub fn as_f32(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Stop => 0.0,
            Direction::Right => 1.0,
        }
    }
}

/// Keys the game distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` name
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Key::Left,
            "ArrowRight" => Key::Right,
            _ => Key::Other,
        }
    }
}

/// A raw keyboard event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Down(Key),
    Up(Key),
}

impl KeyEvent {
    /// Direction this event asks for; anything but a direction key press stops
    pub fn direction(self) -> Direction {
        match self {
            KeyEvent::Down(Key::Left) => Direction::Left,
            KeyEvent::Down(Key::Right) => Direction::Right,
            KeyEvent::Down(Key::Other) | KeyEvent::Up(_) => Direction::Stop,
        }
    }
}

/// Latest known direction with duplicate suppression
#[derive(Debug, Clone, Default)]
pub struct Input {
    latest: Direction,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one event; returns the new direction only if it changed
    pub fn apply(&mut self, event: KeyEvent) -> Option<Direction> {
        let direction = event.direction();
        if direction == self.latest {
            return None;
        }
        self.latest = direction;
        Some(direction)
    }

    /// Sample the most recently observed direction
    #[inline]
    pub fn latest(&self) -> Direction {
        self.latest
    }
}

/// Steers the paddle toward the ball (headless demo input)
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Distance from the paddle center tolerated before moving
    pub dead_zone: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { dead_zone: 8.0 }
    }
}

impl Autopilot {
    /// Key event that moves the paddle toward `ball_x`
    pub fn steer(&self, paddle: f32, ball_x: f32) -> KeyEvent {
        let offset = ball_x - paddle;
        if offset < -self.dead_zone {
            KeyEvent::Down(Key::Left)
        } else if offset > self.dead_zone {
            KeyEvent::Down(Key::Right)
        } else {
            KeyEvent::Up(Key::Other)
        }
    }
}
