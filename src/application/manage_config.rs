//! Config management use case

use crate::error::{Result, ZenithError};
use crate::infrastructure::{Config, JsonFileStore};

/// Service for managing journal configuration
pub struct ConfigService {
    store: JsonFileStore,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(store: JsonFileStore) -> Self {
        ConfigService { store }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.store.load_config()?;

        match key {
            "breathing_secs" => Ok(config.breathing_secs.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(ZenithError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: breathing_secs, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.store.load_config()?;

        match key {
            "breathing_secs" => {
                let secs: u32 = value.parse().map_err(|_| {
                    ZenithError::Config(format!(
                        "Invalid breathing_secs: '{}'. Expected a positive integer",
                        value
                    ))
                })?;
                if secs == 0 {
                    return Err(ZenithError::Config(
                        "breathing_secs must be greater than zero".to_string(),
                    ));
                }
                config.breathing_secs = secs;
            }
            "created" => {
                return Err(ZenithError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(ZenithError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: breathing_secs",
                    key
                )));
            }
        }

        self.store.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.store.load_config()
    }
}
