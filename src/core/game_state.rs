//! Game state module - the board engine
//!
//! Owns the grid, the score, and the terminal flags, and executes moves:
//! per-line compaction with merge semantics, spawn placement after each
//! accepted move, and win/loss detection. Pure and deterministic given a
//! seed; no I/O or UI dependencies.

use crate::core::{Grid, SimpleRng, SpawnRule};
use crate::types::{
    Direction, MoveResult, Pos, Transition, DEFAULT_BOARD_SIZE, DEFAULT_INITIAL_TILES,
    DEFAULT_TARGET_SCORE,
};

/// Rule parameters fixed for the lifetime of a game instance
#[derive(Debug, Clone, PartialEq)]
pub struct Ruleset {
    pub board_size: usize,
    pub target_score: u32,
    pub initial_tiles: usize,
    pub spawn_rule: SpawnRule,
}

impl Default for Ruleset {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            target_score: DEFAULT_TARGET_SCORE,
            initial_tiles: DEFAULT_INITIAL_TILES,
            spawn_rule: SpawnRule::default(),
        }
    }
}

/// One tile's movement within a line, in travel-order indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineStep {
    from: usize,
    to: usize,
    value: u32,
    is_merge: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    score: u32,
    won: bool,
    game_over: bool,
    rules: Ruleset,
    rng: SimpleRng,
}

impl GameState {
    /// Create a new game and populate the initial tiles
    pub fn new(rules: Ruleset, seed: u32) -> Self {
        let mut state = Self {
            grid: Grid::new(rules.board_size),
            score: 0,
            won: false,
            game_over: false,
            rules,
            rng: SimpleRng::new(seed),
        };
        state.reset();
        state
    }

    /// Build a state around an existing grid (fixtures, tooling).
    ///
    /// Score and flags start cleared; no initial tiles are spawned.
    pub fn from_rows(rows: &[Vec<u32>], rules: Ruleset, seed: u32) -> Self {
        let grid = Grid::from_rows(rows);
        assert_eq!(grid.size(), rules.board_size);
        Self {
            grid,
            score: 0,
            won: false,
            game_over: false,
            rules,
            rng: SimpleRng::new(seed),
        }
    }

    /// Start over: empty grid, zero score, cleared flags, fresh initial
    /// tiles. The RNG stream keeps running so consecutive games differ.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.won = false;
        self.game_over = false;
        for _ in 0..self.rules.initial_tiles {
            self.spawn_tile();
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Read-only snapshot of the grid as rows
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.grid.to_rows()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn rules(&self) -> &Ruleset {
        &self.rules
    }

    /// Execute a move, or reject it silently.
    ///
    /// A move is accepted when at least one line changes. On acceptance
    /// the grid and score are updated, one tile spawns, and the terminal
    /// flags are re-evaluated; the result carries every tile transition
    /// for the presentation layer. A rejected move changes nothing.
    ///
    /// Once `game_over` is set all moves are rejected. `won` does not
    /// block moves: play continues after reaching the target.
    pub fn attempt_move(&mut self, direction: Direction) -> MoveResult {
        if self.game_over {
            return MoveResult::rejected();
        }

        let n = self.grid.size();
        let mut transitions = Vec::new();
        let mut score_delta: u32 = 0;
        let mut moved = false;

        for line in 0..n {
            // Extract the line in travel order, tracking where each
            // non-zero tile sits along the travel axis.
            let mut original = Vec::with_capacity(n);
            let mut tiles: Vec<(usize, u32)> = Vec::with_capacity(n);
            for step in 0..n {
                let (row, col) = line_cell(n, direction, line, step);
                let value = self.grid.get(row, col);
                original.push(value);
                if value != 0 {
                    tiles.push((step, value));
                }
            }

            let (compacted, line_score, steps) = compact_line(&tiles);

            let mut updated = compacted;
            updated.resize(n, 0);
            if updated == original {
                continue;
            }

            // Lines are disjoint per direction, so writing a changed line
            // back immediately cannot disturb lines not yet processed. No
            // line is written unless it changed, which keeps rejected
            // moves free of side effects.
            moved = true;
            score_delta += line_score;
            for (step, &value) in updated.iter().enumerate() {
                let (row, col) = line_cell(n, direction, line, step);
                self.grid.set(row, col, value);
            }
            for step in steps {
                transitions.push(Transition {
                    from: Some(line_cell(n, direction, line, step.from)),
                    to: line_cell(n, direction, line, step.to),
                    value: step.value,
                    is_merge: step.is_merge,
                });
            }
        }

        if !moved {
            return MoveResult::rejected();
        }

        self.score += score_delta;
        if let Some((pos, value)) = self.spawn_tile() {
            transitions.push(Transition {
                from: None,
                to: pos,
                value,
                is_merge: false,
            });
        }
        self.evaluate_terminal_state();

        MoveResult {
            moved: true,
            score_delta,
            transitions,
        }
    }

    /// Place one new tile on a uniformly chosen empty cell.
    ///
    /// Returns the cell and value, or `None` on a full grid (no-op).
    pub fn spawn_tile(&mut self) -> Option<(Pos, u32)> {
        let empty = self.grid.empty_cells();
        if empty.is_empty() {
            return None;
        }

        let (row, col) = empty[self.rng.next_range(empty.len() as u32) as usize];
        let value = self.rules.spawn_rule.pick(self.rng.next_f64());
        self.grid.set(row, col, value);
        Some(((row, col), value))
    }

    /// Re-check the terminal flags against the current grid.
    ///
    /// `won` latches once any tile reaches the target score and is never
    /// cleared by later moves; `game_over` latches when no move remains.
    pub fn evaluate_terminal_state(&mut self) {
        if self.grid.max_value() >= self.rules.target_score {
            self.won = true;
        }
        if !self.grid.has_moves() {
            self.game_over = true;
        }
    }

    /// Cheap sufficient check: an empty cell or an equal right/lower
    /// neighbor guarantees at least one direction changes the grid.
    pub fn has_valid_moves(&self) -> bool {
        self.grid.has_moves()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Ruleset::default(), 1)
    }
}

/// Map a travel-order index into grid coordinates.
///
/// `line` selects the row (left/right) or column (up/down); `step` counts
/// from the leading edge of the move, so step 0 is where tiles pile up.
fn line_cell(n: usize, direction: Direction, line: usize, step: usize) -> Pos {
    match direction {
        Direction::Left => (line, step),
        Direction::Right => (line, n - 1 - step),
        Direction::Up => (step, line),
        Direction::Down => (n - 1 - step, line),
    }
}

/// Compact a line of non-zero tiles toward index 0.
///
/// `tiles` pairs each value with its travel-order index. Equal adjacent
/// tiles merge once each (no cascading); a merge scores its combined
/// value. Returns the compacted values, the score contribution, and the
/// per-tile steps - merges always emit both sources, plain slides only
/// when the tile actually moves.
fn compact_line(tiles: &[(usize, u32)]) -> (Vec<u32>, u32, Vec<LineStep>) {
    let mut compacted = Vec::with_capacity(tiles.len());
    let mut score = 0u32;
    let mut steps = Vec::new();

    let mut i = 0;
    while i < tiles.len() {
        let (from, value) = tiles[i];
        let to = compacted.len();

        if i + 1 < tiles.len() && tiles[i + 1].1 == value {
            let merged = value * 2;
            score += merged;
            steps.push(LineStep {
                from,
                to,
                value,
                is_merge: true,
            });
            steps.push(LineStep {
                from: tiles[i + 1].0,
                to,
                value,
                is_merge: true,
            });
            compacted.push(merged);
            i += 2;
        } else {
            if from != to {
                steps.push(LineStep {
                    from,
                    to,
                    value,
                    is_merge: false,
                });
            }
            compacted.push(value);
            i += 1;
        }
    }

    (compacted, score, steps)
}
