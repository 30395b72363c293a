//! Error types for zenith

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the zenith application
#[derive(Debug, Error)]
pub enum ZenithError {
    #[error("Not a zenith directory: {0}")]
    NotZenithDirectory(PathBuf),

    #[error("Invalid month reference: {0}")]
    InvalidMonth(String),

    #[error("Unknown emotion: {0}")]
    UnknownEmotion(String),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ZenithError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ZenithError::NotZenithDirectory(_) => 2,
            ZenithError::InvalidMonth(_) => 3,
            ZenithError::UnknownEmotion(_) => 4,
            ZenithError::RecordNotFound(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ZenithError::NotZenithDirectory(path) => {
                format!(
                    "Not a zenith directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'zenith init' in this directory to create a new journal\n\
                    • Navigate to an existing zenith directory\n\
                    • Set ZENITH_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            ZenithError::InvalidMonth(month) => {
                format!(
                    "Invalid month reference: '{}'\n\n\
                    Expected format: YYYY-MM\n\n\
                    Examples:\n\
                    zenith calendar 2025-01\n\
                    zenith calendar 2024-12",
                    month
                )
            }
            ZenithError::UnknownEmotion(name) => {
                format!(
                    "Unknown emotion: '{}'\n\n\
                    Suggestions:\n\
                    • Run 'zenith emotions' to list available emotions\n\
                    • Emotion names are case-insensitive (e.g., feliz, Triste)",
                    name
                )
            }
            ZenithError::RecordNotFound(id) => {
                format!(
                    "Record not found: '{}'\n\n\
                    Suggestions:\n\
                    • Run 'zenith list' to see record ids\n\
                    • The record may have already been deleted",
                    id
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ZenithError
pub type Result<T> = std::result::Result<T, ZenithError>;
