//! Terminal 2048.
//!
//! The `core` module is the board engine: deterministic, seedable, and
//! UI-free. Everything else is glue around it - `config` loads the JSON
//! rule parameters, `term` renders the grid into a terminal framebuffer,
//! and `input` maps keys to game actions.

pub mod config;
pub mod core;
pub mod input;
pub mod term;
pub mod types;
