//! Game state and core simulation types
//!
//! A fresh `GameState` is built for every session and thrown away when the
//! session ends.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec2,
    /// Velocity before scaling by the ball speed; bounces only flip signs
    pub direction: Vec2,
}

impl Ball {
    /// Ball at the canvas center, heading in the configured direction
    pub fn centered(config: &Config) -> Self {
        let (dx, dy) = config.ball_direction;
        Self {
            position: Vec2::new(config.canvas_width / 2.0, config.canvas_height / 2.0),
            direction: Vec2::new(dx, dy),
        }
    }

    /// Where the ball will be after one unscaled direction step
    #[inline]
    pub fn projected(&self) -> Vec2 {
        self.position + self.direction
    }
}

/// A brick (center-based rectangle)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Brick {
    /// Strict containment; points on the edge do not count
    pub fn contains(&self, point: Vec2) -> bool {
        point.x > self.x - self.width / 2.0
            && point.x < self.x + self.width / 2.0
            && point.y > self.y - self.height / 2.0
            && point.y < self.y + self.height / 2.0
    }
}

/// What the ball touched during the last tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collisions {
    pub paddle: bool,
    pub floor: bool,
    pub wall: bool,
    pub ceiling: bool,
    pub brick: bool,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    /// Surviving bricks in grid order
    pub bricks: Vec<Brick>,
    pub collisions: Collisions,
    pub score: u64,
}

impl GameState {
    /// Full brick grid, centered ball, zero score
    pub fn new(config: &Config) -> Self {
        Self {
            ball: Ball::centered(config),
            bricks: create_bricks(config),
            collisions: Collisions::default(),
            score: 0,
        }
    }
}

/// Lay out the brick grid row by row, left to right
pub fn create_bricks(config: &Config) -> Vec<Brick> {
    let width = config.brick_width();
    let gap = config.brick_gap;
    let height = config.brick_height;

    let count = (config.brick_rows as usize).saturating_mul(config.brick_columns as usize);
    let mut bricks = Vec::with_capacity(count);
    for row in 0..config.brick_rows {
        for column in 0..config.brick_columns {
            bricks.push(Brick {
                x: column as f32 * (width + gap) + width / 2.0 + gap,
                y: row as f32 * (height + gap) + height / 2.0 + gap + config.brick_top_offset,
                width,
                height,
            });
        }
    }
    bricks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let config = Config::default();
        let state = GameState::new(&config);
        assert_eq!(state.score, 0);
        assert_eq!(state.bricks.len(), 35);
        assert_eq!(state.ball.position, Vec2::new(240.0, 160.0));
        assert_eq!(state.ball.direction, Vec2::new(2.0, 2.0));
        assert_eq!(state.collisions, Collisions::default());
    }

    #[test]
    fn test_brick_grid_layout() {
        let config = Config::default();
        let bricks = create_bricks(&config);
        let width = config.brick_width();

        let first = bricks[0];
        assert!((first.x - (width / 2.0 + 3.0)).abs() < 1e-4);
        assert_eq!(first.y, 10.0 + 3.0 + 20.0);

        // Second row starts after all columns of the first
        let second_row = bricks[7];
        assert_eq!(second_row.y, 23.0 + 33.0);
        assert_eq!(second_row.x, first.x);

        // Last column ends one gap short of the right edge
        let last = bricks[6];
        assert!((last.x + width / 2.0 - (config.canvas_width - config.brick_gap)).abs() < 1e-3);
    }

    #[test]
    fn test_brick_contains_is_strict() {
        let brick = Brick {
            x: 100.0,
            y: 50.0,
            width: 40.0,
            height: 20.0,
        };
        assert!(brick.contains(Vec2::new(100.0, 50.0)));
        assert!(brick.contains(Vec2::new(119.9, 59.9)));
        assert!(!brick.contains(Vec2::new(120.0, 50.0)));
        assert!(!brick.contains(Vec2::new(100.0, 40.0)));
    }
}
