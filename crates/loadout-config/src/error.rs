//! Error types for configuration resolution and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Manifest lookup errors
    #[error(transparent)]
    Manifest(#[from] loadout_manifest::ManifestError),

    // Settings loading errors
    #[error("invalid resolver settings: {0}")]
    InvalidSettings(String),

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    // Schema validation errors (no filesystem checks)
    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // Filesystem validation errors (for CLI use)
    #[error("context directory not found: {0}")]
    ContextNotFound(PathBuf),

    #[error("entry path not found: {0}")]
    EntryNotFound(PathBuf),

    #[error("html template not found: {0}")]
    TemplateNotFound(PathBuf),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
