//! Error types for manifest discovery and parsing.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ManifestError>;

#[derive(Debug, Error)]
pub enum ManifestError {
    // Discovery errors
    #[error("package manifest not found under {0}")]
    NotFound(PathBuf),

    // Parsing errors
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("invalid manifest value: {0}")]
    InvalidValue(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
