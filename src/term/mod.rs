//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view renders game state
//! into a framebuffer of styled character cells, and the renderer flushes
//! that framebuffer to the terminal. The view stays pure so it can be
//! unit-tested; only the renderer touches I/O.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, MoveEffects, Viewport};
pub use renderer::TerminalRenderer;
