use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, saving or editing the catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The recipe file is not in the three-section layout
    #[error("Invalid recipe file format at line {line}: {message}")]
    Format { line: usize, message: String },

    /// Position outside the current collection
    #[error("Index {index} is out of range (catalog has {len} recipes)")]
    IndexOutOfRange { index: usize, len: usize },

    /// No canonical entry matches the given recipe
    #[error("Recipe not found: {name}")]
    NotFound { name: String },

    /// A constructor argument was rejected
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading or writing the recipe file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Failed to serialize recipes as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
        CatalogError::Format {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
