//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, JsonFileStore};
use std::fs;
use std::path::Path;

/// Initialize a new zenith journal at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let store = JsonFileStore::new(path.to_path_buf());

    // Initialize .zenith directory
    store.initialize()?;

    // Create and save default config
    let config = Config::new();
    store.save_config(&config)?;

    println!("Initialized zenith journal at {}", path.display());

    Ok(())
}
