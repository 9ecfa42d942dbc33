//! Game configuration, loadable from JSON

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::HexError;

/// Board size used when nothing else is configured
pub const DEFAULT_SIZE: usize = 8;

/// Search depth used when nothing else is configured
pub const DEFAULT_DEPTH: u32 = 4;

/// Settings for a single game
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the board
    pub size: usize,
    /// Plies searched by the computer
    pub depth: u32,
    /// Whether the human (RED) moves first
    pub human_first: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            depth: DEFAULT_DEPTH,
            human_first: true,
        }
    }
}

impl GameConfig {
    /// Load from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), HexError> {
        if self.size == 0 {
            return Err(HexError::InvalidConfig("size must be > 0".into()));
        }
        if self.depth == 0 {
            return Err(HexError::InvalidConfig("depth must be > 0".into()));
        }
        Ok(())
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }
}
