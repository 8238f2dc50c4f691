//! Reading YAML input documents.
//!
//! Catalogs, production plans and journals are plain serde mappings of the
//! core records. Validation problems are logged one per line before the
//! command fails, so a user can fix them all in one pass.

use std::path::Path;

use recipe_costing_core::{Catalog, Transaction, ledger};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{error, info, instrument};

/// Errors that can occur while loading an input document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File being read.
        path: String,
        /// Underlying error.
        source: std::io::Error,
    },

    /// File is not valid YAML for the expected document.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// File being parsed.
        path: String,
        /// Underlying error.
        source: serde_yaml::Error,
    },

    /// Document parsed but failed validation.
    #[error("{count} validation errors found in {path}")]
    Invalid {
        /// File being validated.
        path: String,
        /// Number of problems reported.
        count: usize,
    },
}

/// Read and deserialize a YAML document.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub async fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;

    serde_yaml::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Load and validate a catalog.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or fails validation.
#[instrument(skip_all, fields(path = %path.display()))]
pub async fn load_catalog(path: &Path) -> Result<Catalog, LoadError> {
    let catalog: Catalog = read_yaml(path).await?;

    if let Err(errors) = catalog.validate() {
        error!("Catalog validation failed:");
        for err in &errors {
            error!("  - {err}");
        }
        return Err(LoadError::Invalid {
            path: path.display().to_string(),
            count: errors.len(),
        });
    }

    info!(
        ingredients = catalog.ingredients.len(),
        recipes = catalog.recipes.len(),
        "Loaded catalog"
    );
    Ok(catalog)
}

/// Load and validate a transaction journal.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or fails validation.
#[instrument(skip_all, fields(path = %path.display()))]
pub async fn load_journal(path: &Path) -> Result<Vec<Transaction>, LoadError> {
    let journal: Vec<Transaction> = read_yaml(path).await?;

    if let Err(errors) = ledger::validate(&journal) {
        error!("Journal validation failed:");
        for err in &errors {
            error!("  - {err}");
        }
        return Err(LoadError::Invalid {
            path: path.display().to_string(),
            count: errors.len(),
        });
    }

    info!(transactions = journal.len(), "Loaded journal");
    Ok(journal)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;

    const GOOD_CATALOG: &str = "
ingredients:
  - id: 1
    name: Flour
    price: 12000
    package_qty: 1
    unit: Kg
";

    const NEGATIVE_PRICE_CATALOG: &str = "
ingredients:
  - id: 1
    name: A
    price: -1
    package_qty: 1
    unit: Kg
";

    /// Write `content` into a fresh directory that is removed when dropped.
    async fn write_temp(name: &str, content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(name);
        tokio::fs::write(&path, content).await.unwrap();
        (dir, path)
    }

    #[tokio::test]
    async fn test_load_catalog_ok() {
        let (_dir, path) = write_temp("catalog-ok.yaml", GOOD_CATALOG).await;

        let catalog = load_catalog(&path).await.unwrap();
        assert_eq!(catalog.ingredients.len(), 1);
        assert!(catalog.recipes.is_empty());
    }

    #[tokio::test]
    async fn test_load_catalog_invalid() {
        let (_dir, path) = write_temp("catalog-bad.yaml", NEGATIVE_PRICE_CATALOG).await;

        let err = load_catalog(&path).await.unwrap_err();
        assert!(matches!(err, LoadError::Invalid { count: 1, .. }));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = read_yaml::<Catalog>(Path::new("/definitely/not/here.yaml"))
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[tokio::test]
    async fn test_parse_error() {
        let (_dir, path) = write_temp("journal-bad.yaml", "- id: one\n").await;
        let err = load_journal(&path).await.unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_temp_files_are_removed() {
        let (dir, path) = write_temp("journal.yaml", "[]\n").await;
        assert!(load_journal(&path).await.unwrap().is_empty());

        drop(dir);
        assert!(!path.exists());
    }
}
