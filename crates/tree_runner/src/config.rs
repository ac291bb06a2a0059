//! Runner configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::engines::AlgorithmKind;
use crate::playback::DEFAULT_SPEED;

/// Settings shared by the CLI subcommands. Command-line flags override them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Engine used by `run` and `step`
    pub algorithm: AlgorithmKind,
    /// Alpha-beta cut-offs (ignored by the other engines)
    pub pruning: bool,
    /// Playback speed, 1 (slowest) to 10
    pub speed: u8,
    /// Print the tree after each step / at the end of a run
    pub show_tree: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            algorithm: AlgorithmKind::AlphaBeta,
            pruning: true,
            speed: DEFAULT_SPEED,
            show_tree: true,
        }
    }
}

impl RunnerConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("invalid runner configuration")
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&contents)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize runner configuration")
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
