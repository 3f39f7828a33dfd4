//! One play-through
//!
//! Composes the tick scan, input, paddle and physics into one snapshot per
//! tick. Within a tick the paddle samples the latest direction and physics
//! samples the freshly advanced paddle, so a snapshot never mixes ticks.

use log::{info, trace};
use serde::{Deserialize, Serialize};

use super::clock::{Tick, Ticker};
use super::input::{Direction, Input, KeyEvent};
use super::paddle::Paddle;
use super::physics;
use super::state::GameState;
use crate::config::Config;
use crate::error::ConfigError;

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminalReason {
    /// Ball fell through the floor
    GameOver,
    /// Every brick is gone
    Congratulations,
}

impl TerminalReason {
    /// Stable reason code
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminalReason::GameOver => "game over",
            TerminalReason::Congratulations => "cong",
        }
    }

    /// Text shown over the board
    pub fn message(&self) -> &'static str {
        match self {
            TerminalReason::GameOver => "GAME OVER",
            TerminalReason::Congratulations => "Congratulations",
        }
    }
}

/// Result of evaluating one snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Continue,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continue)
    }

    pub fn reason(&self) -> Option<TerminalReason> {
        match self {
            Outcome::Continue => None,
            Outcome::Won => Some(TerminalReason::Congratulations),
            Outcome::Lost => Some(TerminalReason::GameOver),
        }
    }
}

/// Check a state for the end of the game; a lost ball beats a cleared board
pub fn evaluate(state: &GameState, config: &Config) -> Outcome {
    if state.ball.position.y > config.floor_line() {
        Outcome::Lost
    } else if state.bricks.is_empty() {
        Outcome::Won
    } else {
        Outcome::Continue
    }
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: Tick,
    pub paddle: f32,
    pub state: GameState,
}

/// A live session
#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
    ticker: Ticker,
    input: Input,
    paddle: Paddle,
    state: GameState,
    ticks: u64,
}

impl Session {
    /// Start a fresh session; fails fast on an unusable config
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let session = Self {
            ticker: Ticker::new(),
            input: Input::new(),
            paddle: Paddle::centered(&config),
            state: GameState::new(&config),
            ticks: 0,
            config,
        };
        info!(
            "Session started: {} bricks, paddle at {}",
            session.state.bricks.len(),
            session.paddle.position
        );
        Ok(session)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn paddle(&self) -> f32 {
        self.paddle.position
    }

    pub fn direction(&self) -> Direction {
        self.input.latest()
    }

    /// Ticks processed so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Feed a key event; the next tick picks it up
    pub fn key(&mut self, event: KeyEvent) {
        if let Some(direction) = self.input.apply(event) {
            trace!("Direction -> {:?}", direction);
        }
    }

    /// Handle a frame timestamp (ms)
    pub fn frame(&mut self, now: f64) -> (Snapshot, Outcome) {
        let tick = self.ticker.tick(now);
        self.tick(tick)
    }

    /// Advance by one tick
    pub fn tick(&mut self, tick: Tick) -> (Snapshot, Outcome) {
        self.ticks += 1;

        let direction = self.input.latest();
        if let Some(position) = self.paddle.update(&tick, direction, &self.config) {
            trace!("Paddle -> {:.1}", position);
        }

        self.state = physics::step(&self.state, &tick, self.paddle.position, &self.config);

        let outcome = evaluate(&self.state, &self.config);
        if let Some(reason) = outcome.reason() {
            info!(
                "Session ended ({}) after {} ticks, score {}",
                reason.as_str(),
                self.ticks,
                self.state.score
            );
        }

        let snapshot = Snapshot {
            tick,
            paddle: self.paddle.position,
            state: self.state.clone(),
        };
        (snapshot, outcome)
    }
}
