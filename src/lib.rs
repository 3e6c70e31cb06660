//! First-person renderer over a fixed 2D tile grid. One ray is marched per
//! screen column with a DDA walk against the map; the perpendicular hit
//! distance sets the height of that column's wall strip. The player pose is
//! mutated between frames by collision-checked translation and paired-vector
//! rotation.
//!
//! The core (map, player, movement, raycast, render, session) is independent
//! of any window system: it consumes abstract [`input::Command`] values and
//! produces ordered [`render::DrawCommand`] sequences. The binary wires it to
//! a winit window and a softbuffer surface.

pub mod config;
pub mod input;
pub mod map;
pub mod movement;
pub mod player;
pub mod raycast;
pub mod render;
pub mod scaler;
pub mod session;

pub use config::Config;
pub use input::Command;
pub use map::Map;
pub use movement::MoveDirection;
pub use player::PlayerState;
pub use raycast::{RayResult, Side};
pub use render::DrawCommand;
pub use session::{Session, SessionState};

/// Errors surfaced outside the render core. The core itself never fails at
/// render time; its invariants are enforced at construction or by per-command
/// guards.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// Reading a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file did not parse
    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// Window event loop failed
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

/// Result alias used throughout the crate.
pub type EngineResult<T> = Result<T, EngineError>;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
