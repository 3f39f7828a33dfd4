//! Draw command generation for 2D primitives

use glam::Vec2;

use crate::config::Config;
use crate::sim::{Ball, Brick, Snapshot, TerminalReason};

/// Font used for the intro and overlay messages
pub const MESSAGE_FONT: &str = "24px Courier New";
/// Font used for the score
pub const SCORE_FONT: &str = "16px Courier New";
/// Baseline of the score text
const SCORE_BASELINE: f32 = 16.0;

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        }
    }
}

/// One drawing primitive, in canvas coordinates (top-left origin)
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Erase a rectangle
    Clear {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    /// Filled rectangle from its top-left corner
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    /// Filled circle
    Circle { center: Vec2, radius: f32 },
    Text {
        text: String,
        x: f32,
        y: f32,
        align: TextAlign,
        font: &'static str,
    },
}

fn clear_all(config: &Config) -> DrawCommand {
    DrawCommand::Clear {
        x: 0.0,
        y: 0.0,
        width: config.canvas_width,
        height: config.canvas_height,
    }
}

/// Start screen
pub fn intro(config: &Config) -> Vec<DrawCommand> {
    vec![
        clear_all(config),
        DrawCommand::Text {
            text: "Start".to_string(),
            x: config.canvas_width / 2.0,
            y: config.canvas_height / 2.0,
            align: TextAlign::Center,
            font: MESSAGE_FONT,
        },
    ]
}

/// Paddle resting on the floor, centered at `position`
pub fn paddle(position: f32, config: &Config) -> DrawCommand {
    DrawCommand::Rect {
        x: position - config.paddle_width / 2.0,
        y: config.canvas_height - config.paddle_height,
        width: config.paddle_width,
        height: config.paddle_height,
    }
}

pub fn ball(ball: &Ball, config: &Config) -> DrawCommand {
    DrawCommand::Circle {
        center: ball.position,
        radius: config.ball_radius,
    }
}

/// Brick rectangle converted from center to corner coordinates
pub fn brick(brick: &Brick) -> DrawCommand {
    DrawCommand::Rect {
        x: brick.x - brick.width / 2.0,
        y: brick.y - brick.height / 2.0,
        width: brick.width,
        height: brick.height,
    }
}

pub fn score(score: u64, config: &Config) -> DrawCommand {
    DrawCommand::Text {
        text: score.to_string(),
        x: config.brick_gap,
        y: SCORE_BASELINE,
        align: TextAlign::Left,
        font: SCORE_FONT,
    }
}

/// Full frame: clear, paddle, ball, bricks, score
pub fn frame(snapshot: &Snapshot, config: &Config) -> Vec<DrawCommand> {
    let state = &snapshot.state;
    let mut commands = Vec::with_capacity(state.bricks.len() + 4);

    commands.push(clear_all(config));
    commands.push(paddle(snapshot.paddle, config));
    commands.push(ball(&state.ball, config));
    commands.extend(state.bricks.iter().map(brick));
    commands.push(score(state.score, config));

    commands
}

/// End-of-session message drawn over the middle of the board
pub fn overlay(reason: TerminalReason, config: &Config) -> Vec<DrawCommand> {
    let (w, h) = (config.canvas_width, config.canvas_height);
    vec![
        DrawCommand::Clear {
            x: w / 4.0,
            y: h / 3.0,
            width: w / 2.0,
            height: h / 3.0,
        },
        DrawCommand::Text {
            text: reason.message().to_string(),
            x: w / 2.0,
            y: h / 2.0,
            align: TextAlign::Center,
            font: MESSAGE_FONT,
        },
    ]
}
