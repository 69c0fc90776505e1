//! Configuration for Cinebot
//!
//! Settings live in `~/.cinebot/config.json`. Every field is optional; missing
//! fields fall back to defaults. Environment variables override the file:
//!
//! - `CINEBOT_DATA_PATH`: path to the movie CSV file
//! - `CINEBOT_RECOMMENDATIONS`: how many titles a genre recommendation returns

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CinebotError, Result};

/// Default number of titles returned by a genre recommendation.
pub const DEFAULT_RECOMMENDATIONS: usize = 5;

const ENV_DATA_PATH: &str = "CINEBOT_DATA_PATH";
const ENV_RECOMMENDATIONS: &str = "CINEBOT_RECOMMENDATIONS";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Location of the movie table.
    pub data_path: PathBuf,
    /// Maximum titles returned by a genre recommendation.
    pub recommendations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: Self::dir().join("movies.csv"),
            recommendations: DEFAULT_RECOMMENDATIONS,
        }
    }
}

impl Config {
    /// Cinebot home directory (`~/.cinebot`).
    pub fn dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".cinebot")
    }

    /// Path of the config file (`~/.cinebot/config.json`).
    pub fn path() -> PathBuf {
        Self::dir().join("config.json")
    }

    /// Load the config from the default path and apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::path())?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load the config from a specific file. A missing or blank file yields
    /// the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            CinebotError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str(&content).map_err(|e| {
            CinebotError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Apply overrides from an environment lookup. Unparseable values are
    /// ignored with a warning.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_DATA_PATH).filter(|v| !v.trim().is_empty()) {
            self.data_path = PathBuf::from(path.trim());
        }

        if let Some(raw) = lookup(ENV_RECOMMENDATIONS) {
            match raw.trim().parse::<usize>() {
                Ok(n) => self.recommendations = n,
                Err(_) => warn!(value = %raw, "ignoring invalid {}", ENV_RECOMMENDATIONS),
            }
        }
    }

    /// Reject settings the assistant cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.recommendations == 0 {
            return Err(CinebotError::Config(
                "recommendations must be at least 1".to_string(),
            ));
        }
        if self.data_path.as_os_str().is_empty() {
            return Err(CinebotError::Config("data_path cannot be empty".to_string()));
        }
        Ok(())
    }
}
