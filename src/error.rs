//! Configuration errors
//!
//! Raised when a session is built from nonsensical settings. The end of a
//! session (win or loss) is not an error; see `sim::session::Outcome`.

use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    /// Canvas width or height is zero, negative or not finite
    InvalidCanvas { width: f32, height: f32 },
    /// A size or speed field is out of range
    InvalidField { field: &'static str, value: f32 },
    /// Paddle is wider than the canvas
    PaddleTooWide { paddle_width: f32, canvas_width: f32 },
    /// Brick grid needs zero rows/columns or does not fit on the canvas
    BrickGrid(String),
    /// JSON could not be parsed
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCanvas { width, height } => {
                write!(f, "invalid canvas size {}x{}", width, height)
            }
            ConfigError::InvalidField { field, value } => {
                write!(f, "invalid value {} for `{}`", value, field)
            }
            ConfigError::PaddleTooWide {
                paddle_width,
                canvas_width,
            } => write!(
                f,
                "paddle width {} does not fit canvas width {}",
                paddle_width, canvas_width
            ),
            ConfigError::BrickGrid(reason) => write!(f, "brick grid: {}", reason),
            ConfigError::Parse(err) => write!(f, "config parse error: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}
