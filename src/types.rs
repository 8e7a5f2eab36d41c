//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default rule parameters (overridable via config.json)
pub const DEFAULT_BOARD_SIZE: usize = 4;
pub const DEFAULT_TARGET_SCORE: u32 = 2048;
pub const DEFAULT_INITIAL_TILES: usize = 2;

/// Presentation timing (in milliseconds)
pub const EFFECT_FLASH_MS: u64 = 220;
pub const EFFECT_FRAME_MS: u64 = 33;
pub const IDLE_POLL_MS: u64 = 250;

/// Grid position as (row, col)
pub type Pos = (usize, usize);

/// The four move directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Player commands forwarded into the core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Move(Direction),
    Restart,
}

/// A single tile's change during an accepted move.
///
/// `from` is `None` for the tile spawned after the move (it appears in
/// place). Merges produce two records sharing the same `to` cell, each
/// carrying the pre-merge value; the destination holds `value * 2`
/// afterwards. Slides that land on their source cell emit no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Option<Pos>,
    pub to: Pos,
    pub value: u32,
    pub is_merge: bool,
}

/// Outcome of `GameState::attempt_move`.
///
/// A rejected move (`moved == false`) carries no transitions and implies
/// no state change at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub moved: bool,
    pub score_delta: u32,
    pub transitions: Vec<Transition>,
}

impl MoveResult {
    /// The silent no-op result (illegal move, or game already over)
    pub fn rejected() -> Self {
        Self {
            moved: false,
            score_delta: 0,
            transitions: Vec::new(),
        }
    }
}
