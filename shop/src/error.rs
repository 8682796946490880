//! Unified error handling for the storefront.

use std::path::PathBuf;

use crate::config::ConfigError;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Engine error: {0}")]
    Engine(#[from] storefront_engine::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read catalog {}: {source}", path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid command: {0}")]
    BadCommand(String),
}

impl AppError {
    /// Whether the session can carry on after this error.
    ///
    /// Command and lookup errors only affect the line that caused them.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::BadCommand(_) | AppError::Engine(_))
    }
}

/// Result type alias for the storefront.
pub type Result<T> = std::result::Result<T, AppError>;
