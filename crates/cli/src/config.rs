//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `RECIPE_CATALOG` - Default catalog file (default: `catalog.yaml`)
//! - `RECIPE_CURRENCY` - Currency used to display amounts (default: `IDR`)
//! - `RUST_LOG` - Log filter (default: `info`)
//!
//! `main` loads a `.env` file from the working directory, when present, before
//! any of these are read. Command-line flags take precedence over the
//! environment.

use std::path::PathBuf;

use recipe_costing_core::CurrencyCode;
use thiserror::Error;

const DEFAULT_CATALOG_PATH: &str = "catalog.yaml";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Settings shared by all commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Catalog used when `--catalog` is not given.
    pub catalog_path: PathBuf,
    /// Currency for displayed amounts.
    pub currency: CurrencyCode,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            currency: CurrencyCode::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `RECIPE_CURRENCY` is not a supported currency code.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = get("RECIPE_CATALOG").filter(|p| !p.trim().is_empty()) {
            config.catalog_path = PathBuf::from(path);
        }

        if let Some(code) = get("RECIPE_CURRENCY") {
            config.currency = code
                .parse()
                .map_err(|e: String| ConfigError::InvalidEnvVar("RECIPE_CURRENCY".to_owned(), e))?;
        }

        Ok(config)
    }

    /// Catalog path from a flag, falling back to the configured default.
    #[must_use]
    pub fn catalog_or(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.unwrap_or_else(|| self.catalog_path.clone())
    }
}
