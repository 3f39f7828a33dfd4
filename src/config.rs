//! Game configuration
//!
//! Every tunable lives here so a session can be built for any canvas size.
//! Validated once when a session is constructed.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Runtime configuration for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Canvas ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_speed: f32,
    /// Initial direction; only its signs change during play
    pub ball_direction: (f32, f32),

    // === Bricks ===
    pub brick_rows: u32,
    pub brick_columns: u32,
    pub brick_height: f32,
    pub brick_gap: f32,
    pub brick_top_offset: f32,
    pub brick_score: u64,

    // === Timing ===
    /// Nominal frame interval (ms); physics always uses measured time
    pub tick_interval_ms: f64,
    /// Pause before a new session starts (ms)
    pub restart_delay_ms: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            ball_direction: BALL_START_DIRECTION,

            brick_rows: BRICK_ROWS,
            brick_columns: BRICK_COLUMNS,
            brick_height: BRICK_HEIGHT,
            brick_gap: BRICK_GAP,
            brick_top_offset: BRICK_TOP_OFFSET,
            brick_score: BRICK_SCORE,

            tick_interval_ms: TICK_INTERVAL_MS,
            restart_delay_ms: RESTART_DELAY_MS,
        }
    }
}

impl Config {
    /// Default configuration for a canvas of the given size
    pub fn for_canvas(width: f32, height: f32) -> Self {
        Self {
            canvas_width: width,
            canvas_height: height,
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Leftmost allowed paddle center
    pub fn paddle_min(&self) -> f32 {
        self.paddle_width / 2.0
    }

    /// Rightmost allowed paddle center
    pub fn paddle_max(&self) -> f32 {
        self.canvas_width - self.paddle_width / 2.0
    }

    /// Width of each brick so that the columns and gaps span the canvas
    pub fn brick_width(&self) -> f32 {
        let columns = self.brick_columns as f32;
        (self.canvas_width - self.brick_gap - self.brick_gap * columns) / columns
    }

    /// Ball y-position beyond which the paddle band starts
    pub fn paddle_band_top(&self) -> f32 {
        self.canvas_height - self.paddle_height - self.ball_radius / 2.0
    }

    /// Ball y-position beyond which the ball is lost
    pub fn floor_line(&self) -> f32 {
        self.canvas_height - self.ball_radius
    }

    /// Bottom edge of the lowest brick row
    fn brick_grid_bottom(&self) -> f32 {
        let rows = self.brick_rows as f32;
        rows * (self.brick_height + self.brick_gap) + self.brick_top_offset
    }

    /// Reject configurations no session can run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let canvas_ok = |v: f32| v.is_finite() && v > 0.0;
        if !canvas_ok(self.canvas_width) || !canvas_ok(self.canvas_height) {
            return Err(ConfigError::InvalidCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }

        let positive = [
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
            ("brick_height", self.brick_height),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidField { field, value });
            }
        }

        let non_negative = [
            ("paddle_speed", self.paddle_speed),
            ("ball_speed", self.ball_speed),
            ("brick_gap", self.brick_gap),
            ("brick_top_offset", self.brick_top_offset),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidField { field, value });
            }
        }

        // Direction may point anywhere but must be a real vector
        let (dx, dy) = self.ball_direction;
        if !dx.is_finite() {
            return Err(ConfigError::InvalidField {
                field: "ball_direction.x",
                value: dx,
            });
        }
        if !dy.is_finite() {
            return Err(ConfigError::InvalidField {
                field: "ball_direction.y",
                value: dy,
            });
        }

        if !(self.restart_delay_ms >= 0.0) {
            return Err(ConfigError::InvalidField {
                field: "restart_delay_ms",
                value: self.restart_delay_ms as f32,
            });
        }
        if !(self.tick_interval_ms > 0.0) {
            return Err(ConfigError::InvalidField {
                field: "tick_interval_ms",
                value: self.tick_interval_ms as f32,
            });
        }

        if self.paddle_width > self.canvas_width {
            return Err(ConfigError::PaddleTooWide {
                paddle_width: self.paddle_width,
                canvas_width: self.canvas_width,
            });
        }

        if self.ball_radius * 2.0 >= self.canvas_width.min(self.canvas_height) {
            return Err(ConfigError::InvalidField {
                field: "ball_radius",
                value: self.ball_radius,
            });
        }

        if self.brick_rows == 0 || self.brick_columns == 0 {
            return Err(ConfigError::BrickGrid(format!(
                "needs at least one row and column, got {}x{}",
                self.brick_rows, self.brick_columns
            )));
        }
        let count = self
            .brick_rows
            .checked_mul(self.brick_columns)
            .filter(|&count| count <= MAX_BRICKS)
            .ok_or_else(|| {
                ConfigError::BrickGrid(format!(
                    "{}x{} exceeds the limit of {} bricks",
                    self.brick_rows, self.brick_columns, MAX_BRICKS
                ))
            })?;
        if self.brick_width() < 1.0 {
            return Err(ConfigError::BrickGrid(format!(
                "{} columns do not fit canvas width {}",
                self.brick_columns, self.canvas_width
            )));
        }
        if u64::from(count).checked_mul(self.brick_score).is_none() {
            return Err(ConfigError::BrickGrid(format!(
                "{} points per brick overflows the score for {} bricks",
                self.brick_score, count
            )));
        }
        if self.brick_grid_bottom() >= self.paddle_band_top() {
            return Err(ConfigError::BrickGrid(format!(
                "{} rows reach the paddle band at y={}",
                self.brick_rows,
                self.paddle_band_top()
            )));
        }

        Ok(())
    }
}
