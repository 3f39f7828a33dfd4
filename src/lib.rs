//! Breakout - paddle, ball and a wall of bricks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (clock, input, paddle, physics, session)
//! - `driver`: Session lifecycle (intro, running, restart after a pause)
//! - `render`: Snapshot to draw-command translation and draw surfaces
//! - `config`: Runtime configuration with fail-fast validation

pub mod config;
pub mod driver;
pub mod error;
pub mod render;
pub mod sim;

pub use config::Config;
pub use driver::{Driver, Phase};
pub use error::ConfigError;

/// Game configuration constants
pub mod consts {
    /// Target frame interval in milliseconds (60 Hz, rounded up)
    pub const TICK_INTERVAL_MS: f64 = 17.0;

    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 480.0;
    pub const CANVAS_HEIGHT: f32 = 320.0;

    /// Paddle defaults - paddle rests on the floor
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Pixels per second at full direction
    pub const PADDLE_SPEED: f32 = 240.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Scale applied to the ball direction vector
    pub const BALL_SPEED: f32 = 60.0;
    pub const BALL_START_DIRECTION: (f32, f32) = (2.0, 2.0);

    /// Brick grid defaults
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLUMNS: u32 = 7;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_GAP: f32 = 3.0;
    pub const BRICK_TOP_OFFSET: f32 = 20.0;
    /// Points per destroyed brick
    pub const BRICK_SCORE: u64 = 10;
    /// Largest brick grid a session accepts
    pub const MAX_BRICKS: u32 = 10_000;

    /// Pause between a finished session and the next one
    pub const RESTART_DELAY_MS: f64 = 1000.0;
}
