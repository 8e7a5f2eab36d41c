//! Core module - pure game logic with no external dependencies
//!
//! This module contains the board engine: grid storage, the move/merge
//! algorithm, spawn placement, and terminal-state detection. It has zero
//! dependencies on UI, configuration parsing, or I/O.

pub mod board;
pub mod game_state;
pub mod rng;
pub mod spawn;

// Re-export commonly used types
pub use board::Grid;
pub use game_state::{GameState, Ruleset};
pub use rng::SimpleRng;
pub use spawn::SpawnRule;
