//! Paddle motion
//!
//! Advances on every tick with the latest known direction and stays clamped
//! to the canvas.

use serde::{Deserialize, Serialize};

use super::clock::Tick;
use super::input::Direction;
use crate::config::Config;

/// Integrate one tick of paddle motion, clamped to the playable range
pub fn advance(prev: f32, tick: &Tick, direction: Direction, config: &Config) -> f32 {
    let next = prev + direction.as_f32() * tick.dt() * config.paddle_speed;
    next.min(config.paddle_max()).max(config.paddle_min())
}

/// The player's paddle (horizontal center position)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub position: f32,
}

impl Paddle {
    /// Paddle centered on the canvas
    pub fn centered(config: &Config) -> Self {
        Self {
            position: config.canvas_width / 2.0,
        }
    }

    /// Advance one tick; returns the new position only if it moved
    pub fn update(&mut self, tick: &Tick, direction: Direction, config: &Config) -> Option<f32> {
        let next = advance(self.position, tick, direction, config);
        if next == self.position {
            return None;
        }
        self.position = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tick(dt: f32) -> Tick {
        Tick {
            time: 0.0,
            delta_time: Some(dt),
        }
    }

    #[test]
    fn test_starts_centered() {
        let config = Config::default();
        assert_eq!(Paddle::centered(&config).position, 240.0);
    }

    #[test]
    fn test_moves_by_speed_times_dt() {
        let config = Config::default();
        let next = advance(240.0, &tick(0.5), Direction::Right, &config);
        assert!((next - 360.0).abs() < 1e-4);

        let next = advance(240.0, &tick(0.25), Direction::Left, &config);
        assert!((next - 180.0).abs() < 1e-4);
    }

    #[test]
    fn test_first_tick_does_not_move() {
        let config = Config::default();
        let first = Tick {
            time: 0.0,
            delta_time: None,
        };
        assert_eq!(advance(240.0, &first, Direction::Right, &config), 240.0);
    }

    #[test]
    fn test_clamped_at_edges() {
        let config = Config::default();
        assert_eq!(advance(60.0, &tick(1.0), Direction::Left, &config), 50.0);
        assert_eq!(advance(420.0, &tick(1.0), Direction::Right, &config), 430.0);
    }

    #[test]
    fn test_unchanged_position_suppressed() {
        let config = Config::default();
        let mut paddle = Paddle::centered(&config);
        assert_eq!(paddle.update(&tick(0.1), Direction::Stop, &config), None);
        assert!(paddle.update(&tick(0.1), Direction::Right, &config).is_some());

        // Pinned against the wall
        paddle.position = config.paddle_max();
        assert_eq!(paddle.update(&tick(0.1), Direction::Right, &config), None);
    }

    fn direction_strategy() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Left),
            Just(Direction::Stop),
            Just(Direction::Right)
        ]
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_in_bounds(
            steps in prop::collection::vec((direction_strategy(), 0.0f32..2.0), 1..200)
        ) {
            let config = Config::default();
            let mut paddle = Paddle::centered(&config);
            for (direction, dt) in steps {
                paddle.update(&tick(dt), direction, &config);
                prop_assert!(paddle.position >= config.paddle_min());
                prop_assert!(paddle.position <= config.paddle_max());
            }
        }
    }
}
