//! Configuration for a WriterBot instance.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{BotError, BotResult};

/// Configuration for a WriterBot instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BotConfig {
    /// Directory holding the word-list files.
    pub data_dir: PathBuf,
    /// RNG seed for reproducible output. Seeded from the OS when unset.
    pub seed: Option<u64>,
    /// Stand-in for the main character's name in plot bunnies.
    pub blank_name: String,
    /// One surname in this many is double-barrelled (minimum 1).
    pub double_surname_odds: u32,
    /// Upper bound on sentences per `babble` call.
    pub max_babble: usize,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            seed: None,
            blank_name: "____".to_string(),
            double_surname_odds: 5,
            max_babble: 5,
        }
    }
}

impl BotConfig {
    /// Read a config from a TOML file. Missing keys take their defaults.
    ///
    /// A relative `data_dir` is resolved against the file's own directory.
    pub fn from_file(path: &Path) -> BotResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| BotError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut cfg = Self::from_toml(&text).map_err(|message| BotError::Config {
            path: path.to_path_buf(),
            message,
        })?;
        if cfg.data_dir.is_relative() {
            let parent = path.parent().unwrap_or(Path::new(""));
            cfg.data_dir = parent.join(&cfg.data_dir);
        }
        Ok(cfg)
    }

    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, String> {
        let mut cfg: Self = toml::from_str(text).map_err(|e| e.to_string())?;
        cfg.double_surname_odds = cfg.double_surname_odds.max(1);
        cfg.max_babble = cfg.max_babble.max(1);
        Ok(cfg)
    }

    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the double-surname odds (clamped to at least 1).
    pub fn with_double_surname_odds(mut self, odds: u32) -> Self {
        self.double_surname_odds = odds.max(1);
        self
    }

    /// Set the stand-in name for plot bunnies.
    pub fn with_blank_name(mut self, name: impl Into<String>) -> Self {
        self.blank_name = name.into();
        self
    }

    /// Set the babble cap (clamped to at least 1).
    pub fn with_max_babble(mut self, max: usize) -> Self {
        self.max_babble = max.max(1);
        self
    }
}
