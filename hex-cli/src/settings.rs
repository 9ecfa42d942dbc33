//! Board settings shared by every subcommand
//!
//! Level 4 - Configuration

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use hex_core::GameConfig;

#[derive(Args, Clone, Debug, Default)]
pub struct BoardArgs {
    /// JSON game config file (flags below override it)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Board side length [default: 8]
    #[arg(long)]
    pub size: Option<usize>,

    /// Computer search depth [default: 4]
    #[arg(long)]
    pub depth: Option<u32>,
}

impl BoardArgs {
    /// Merge the config file (if any) with command-line overrides
    pub fn resolve(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        config.validate()?;
        Ok(config)
    }
}
