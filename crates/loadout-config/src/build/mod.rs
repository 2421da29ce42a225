//! Core build output types shared across the resolved configuration.

mod css;
pub(crate) mod helpers;
mod html;
mod loader;
mod plugin;
mod stats;
mod types;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use css::CssPostProcessor;
pub use html::HtmlOptions;
pub use loader::{CssTransformOptions, LoaderRule, TransformStep};
pub use plugin::{MinifyOptions, PluginSpec};
pub use stats::StatsOptions;
pub use types::{HashStrategy, SourceMapOptions};

use helpers::{
    default_context_dir, default_output_dir, default_public_path, default_resolve_extensions,
};

/// Where emitted files land and how they are addressed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputPolicy {
    /// Directory receiving emitted files
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// URL prefix under which emitted files are served
    #[serde(default = "default_public_path")]
    pub public_path: String,

    /// Filename template for entry chunks
    pub filename: String,

    /// Cache-busting strategy behind the template tokens
    #[serde(default)]
    pub hash: HashStrategy,
}

impl Default for OutputPolicy {
    fn default() -> Self {
        let hash = HashStrategy::default();
        Self {
            dir: default_output_dir(),
            public_path: default_public_path(),
            filename: hash.entry_template(),
            hash,
        }
    }
}

/// How bare import specifiers are resolved to files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Directory searched for project-local specifiers
    #[serde(default = "default_context_dir")]
    pub root: PathBuf,

    /// Extensions tried when an import omits one
    #[serde(default = "default_resolve_extensions")]
    pub extensions: Vec<String>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            root: default_context_dir(),
            extensions: default_resolve_extensions(),
        }
    }
}
