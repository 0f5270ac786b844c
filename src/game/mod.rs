//! Core game logic
//!
//! Everything needed to run the simulation without any I/O or rendering
//! dependency: the board model, the snake, and the per-tick transition.
//! The driving loop, key handling, and drawing live in the sibling modules.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome};
pub use state::{CollisionKind, GameState, Position, Snake};
