//! Configuration management

use crate::error::{Result, ZenithError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_breathing_secs() -> u32 {
    60
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default guided-breathing session length in seconds
    #[serde(default = "default_breathing_secs")]
    pub breathing_secs: u32,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            breathing_secs: default_breathing_secs(),
            created: Utc::now(),
        }
    }

    /// Load config from .zenith/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".zenith").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ZenithError::NotZenithDirectory(path.to_path_buf())
            } else {
                ZenithError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| ZenithError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .zenith/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let zenith_dir = path.join(".zenith");
        let config_path = zenith_dir.join("config.toml");

        // Ensure .zenith directory exists
        if !zenith_dir.exists() {
            fs::create_dir(&zenith_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| ZenithError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
