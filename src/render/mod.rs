//! Rendering module
//!
//! The simulation hands over a finished `Snapshot`; `scene` turns it into a
//! list of 2D draw commands and a `Surface` executes them. No game logic
//! happens on this side.

pub mod scene;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::{DrawCommand, TextAlign};
pub use surface::{RecordingSurface, Surface};
