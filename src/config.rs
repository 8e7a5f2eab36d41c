//! External configuration loader.
//!
//! Reads the original `config.json` format: `board_size`, `target_score`,
//! `initial_tiles`, and a `probabilities` object keyed by tile value.
//! Rendering-related fields from older config files (colors, fonts,
//! window geometry) are ignored. A missing file falls back to defaults;
//! a malformed one is a startup error.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::Map;

use crate::core::{Ruleset, SpawnRule};
use crate::types::{DEFAULT_BOARD_SIZE, DEFAULT_INITIAL_TILES, DEFAULT_TARGET_SCORE};

/// Validated game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub board_size: usize,
    pub target_score: u32,
    pub initial_tiles: usize,
    /// Ordered (value, weight) spawn table
    pub probabilities: Vec<(u32, f64)>,
}

// JSON schema; `probabilities` keeps insertion order (serde_json's
// preserve_order feature), which fixes the cumulative-walk order.
#[derive(Deserialize, Debug)]
struct RawConfig {
    #[serde(default = "default_board_size")]
    board_size: usize,
    #[serde(default = "default_target_score")]
    target_score: u32,
    #[serde(default = "default_initial_tiles")]
    initial_tiles: usize,
    #[serde(default = "default_probabilities")]
    probabilities: Map<String, serde_json::Value>,
}

fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

fn default_target_score() -> u32 {
    DEFAULT_TARGET_SCORE
}

fn default_initial_tiles() -> usize {
    DEFAULT_INITIAL_TILES
}

fn default_probabilities() -> Map<String, serde_json::Value> {
    let mut map = Map::new();
    map.insert("2".into(), serde_json::json!(0.9));
    map.insert("4".into(), serde_json::json!(0.1));
    map
}

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            target_score: DEFAULT_TARGET_SCORE,
            initial_tiles: DEFAULT_INITIAL_TILES,
            probabilities: vec![(2, 0.9), (4, 0.1)],
        }
    }
}

impl GameConfig {
    /// Load from a JSON file, falling back to defaults when absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Parse and validate a JSON config document.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(text)?;

        let mut probabilities = Vec::with_capacity(raw.probabilities.len());
        for (key, value) in &raw.probabilities {
            let tile: u32 = key
                .parse()
                .with_context(|| format!("probability key {:?} is not a tile value", key))?;
            let weight = value
                .as_f64()
                .with_context(|| format!("probability for tile {} is not a number", tile))?;
            probabilities.push((tile, weight));
        }

        let config = Self {
            board_size: raw.board_size,
            target_score: raw.target_score,
            initial_tiles: raw.initial_tiles,
            probabilities,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.board_size < 2 {
            bail!("board_size must be at least 2, got {}", self.board_size);
        }
        if self.initial_tiles < 1 {
            bail!("initial_tiles must be at least 1");
        }
        if self.initial_tiles > self.board_size * self.board_size {
            bail!(
                "initial_tiles {} does not fit a {}x{} board",
                self.initial_tiles,
                self.board_size,
                self.board_size
            );
        }
        if self.probabilities.is_empty() {
            bail!("probabilities must not be empty");
        }
        let mut sum = 0.0;
        for &(tile, weight) in &self.probabilities {
            if !(weight > 0.0 && weight.is_finite()) {
                bail!("probability for tile {} must be positive, got {}", tile, weight);
            }
            sum += weight;
        }
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            bail!("probabilities must sum to 1.0, got {}", sum);
        }
        Ok(())
    }

    /// Convert into the core's rule parameters.
    pub fn to_rules(&self) -> Ruleset {
        // validate() guarantees a non-empty positive-weight table.
        let spawn_rule = SpawnRule::new(&self.probabilities).unwrap();
        Ruleset {
            board_size: self.board_size,
            target_score: self.target_score,
            initial_tiles: self.initial_tiles,
            spawn_rule,
        }
    }
}
