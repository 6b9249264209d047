//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for catalog-search outer layers.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods in the binary. The search pipeline itself is infallible.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when loading a catalog fails.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("Failed to read catalog at {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Catalog contents are not valid JSON.
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    /// Top-level JSON value is not an array of records.
    #[error("Catalog must be a JSON array of records, found {found}")]
    NotAnArray { found: &'static str },
    /// Every record in a non-empty catalog was malformed.
    #[error("Catalog has {count} records but none of them are usable")]
    InvalidRecord { count: usize },
}

/// Error returned when loading or validating configuration fails.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config at {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config at {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid config: {message}")]
    Validation { message: String },
}
