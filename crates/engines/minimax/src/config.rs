//! Engine configuration loaded from TOML.
//!
//! ```toml
//! depth = 3          # omit to pick the depth from the time budget
//! discount = 0.9
//!
//! [depth_tables]
//! threshold = 127.0
//! near_terminal = [7416, 24016, 129892, 1457973, 5266859, 51633889]
//! midgame = [1419, 77200, 359061, 6874063, 46678036]
//! ```
//!
//! Every field is optional and falls back to the defaults above.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use halma_core::DepthTables;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::search::DEFAULT_DISCOUNT;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid engine config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("discount must be in (0, 1], got {0}")]
    Discount(f64),

    #[error("fixed depth must be at least 1")]
    ZeroDepth,

    #[error("{table} depth table must be non-empty and strictly increasing")]
    DepthTable { table: &'static str },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fixed search depth; None lets the depth tables decide.
    pub depth: Option<u8>,
    pub discount: f64,
    pub depth_tables: DepthTables,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: None,
            discount: DEFAULT_DISCOUNT,
            depth_tables: DepthTables::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.discount > 0.0 && self.discount <= 1.0) {
            return Err(ConfigError::Discount(self.discount));
        }
        if self.depth == Some(0) {
            return Err(ConfigError::ZeroDepth);
        }
        let tables = [
            ("near_terminal", &self.depth_tables.near_terminal),
            ("midgame", &self.depth_tables.midgame),
        ];
        for (table, costs) in tables {
            if costs.is_empty() || costs.windows(2).any(|w| w[0] >= w[1]) {
                return Err(ConfigError::DepthTable { table });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
