//! Configuration management for the storefront.

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use storefront_engine::{Catalog, IncrementPolicy};

use crate::error::{AppError, Result};

/// How views are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text views
    #[default]
    Text,
    /// One JSON snapshot per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidOutputFormat(other.to_string())),
        }
    }
}

/// Storefront configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Catalog JSON file; the built-in catalog is used when unset
    pub catalog_path: Option<PathBuf>,
    /// Currency label printed after prices
    pub currency: String,
    /// Heading shown above the product grid
    pub title: String,
    /// What `inc` does for a product that is not in the cart
    pub increment_policy: IncrementPolicy,
    /// Output format for rendered views
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            currency: "schmeckles".to_string(),
            title: "Rick and Morty Shop".to_string(),
            increment_policy: IncrementPolicy::Strict,
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> std::result::Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let catalog_path = lookup("STOREFRONT_CATALOG")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let currency = lookup("STOREFRONT_CURRENCY").unwrap_or(defaults.currency);

        let title = lookup("STOREFRONT_TITLE").unwrap_or(defaults.title);

        let increment_policy = match lookup("STOREFRONT_INCREMENT_POLICY") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidIncrementPolicy(value))?,
            None => defaults.increment_policy,
        };

        let output = match lookup("STOREFRONT_OUTPUT") {
            Some(value) => value.parse()?,
            None => defaults.output,
        };

        Ok(Self {
            catalog_path,
            currency,
            title,
            increment_policy,
            output,
        })
    }

    /// Load the catalog from `catalog_path`, or the built-in one.
    pub async fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => load_catalog_file(path).await,
            None => {
                tracing::info!("Using built-in catalog");
                Ok(Catalog::seed())
            }
        }
    }
}

async fn load_catalog_file(path: &Path) -> Result<Catalog> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| AppError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;

    let catalog = Catalog::from_json(&json)?;
    tracing::info!(
        path = %path.display(),
        products = catalog.len(),
        "Loaded catalog"
    );
    Ok(catalog)
}

/// Configuration errors.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid STOREFRONT_INCREMENT_POLICY value: {0} (expected strict or add-if-missing)")]
    InvalidIncrementPolicy(String),

    #[error("Invalid STOREFRONT_OUTPUT value: {0} (expected text or json)")]
    InvalidOutputFormat(String),
}
