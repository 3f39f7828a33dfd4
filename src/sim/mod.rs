//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through `Tick`
//! - No randomness
//! - Stable brick iteration order
//! - No rendering or platform dependencies

pub mod clock;
pub mod input;
pub mod paddle;
pub mod physics;
pub mod session;
pub mod state;

pub use clock::{Clock, FrameSource, Tick, Ticker, VirtualClock};
pub use input::{Autopilot, Direction, Input, Key, KeyEvent};
pub use paddle::{Paddle, advance};
pub use physics::{is_brick_hit, is_paddle_hit, step};
pub use session::{Outcome, Session, Snapshot, TerminalReason, evaluate};
pub use state::{Ball, Brick, Collisions, GameState, create_bricks};
