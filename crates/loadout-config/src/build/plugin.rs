use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::build::helpers::default_true;
use crate::build::html::HtmlOptions;

/// A build step in the resolved plugin list.
///
/// The list is ordered; earlier plugins run earlier. Serialized form is
/// tagged by `name`, so a plugin list reads as a flat array of named
/// entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "kebab-case")]
pub enum PluginSpec {
    /// Substitute compile-time constants into application code
    Define { defines: IndexMap<String, String> },

    /// Generate an HTML page referencing the emitted bundles
    Html(HtmlOptions),

    /// Split third-party modules into a separate long-lived chunk
    VendorChunk {
        chunk_name: String,
        filename: String,
        modules: Vec<String>,
    },

    /// Swap edited modules into the running page without a reload
    HotReload,

    /// Replace modules with environment-specific implementations
    ModuleSubstitution {
        substitutions: IndexMap<String, String>,
    },

    /// Move compiled CSS out of the JS bundle into its own file
    CssExtract { filename: String },

    /// Order modules by usage frequency for better compression
    OccurrenceOrder,

    /// Drop duplicated modules from the output
    Dedupe,

    /// Merge small chunks into their parents
    AggressiveMerging,

    /// Minify emitted JavaScript
    Minify(MinifyOptions),
}

impl PluginSpec {
    /// Tag under which the plugin serializes
    pub fn name(&self) -> &'static str {
        match self {
            PluginSpec::Define { .. } => "define",
            PluginSpec::Html(_) => "html",
            PluginSpec::VendorChunk { .. } => "vendor-chunk",
            PluginSpec::HotReload => "hot-reload",
            PluginSpec::ModuleSubstitution { .. } => "module-substitution",
            PluginSpec::CssExtract { .. } => "css-extract",
            PluginSpec::OccurrenceOrder => "occurrence-order",
            PluginSpec::Dedupe => "dedupe",
            PluginSpec::AggressiveMerging => "aggressive-merging",
            PluginSpec::Minify(_) => "minify",
        }
    }
}

/// JavaScript minification options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinifyOptions {
    /// Drop bindings that are never referenced
    #[serde(default = "default_true")]
    pub drop_unused: bool,

    /// Remove statically unreachable statements
    #[serde(default = "default_true")]
    pub drop_dead_code: bool,

    /// Strip console calls from shipped code
    #[serde(default = "default_true")]
    pub drop_console: bool,

    /// Report compressor warnings during the build
    #[serde(default)]
    pub show_warnings: bool,

    /// Preserve comments in minified output
    #[serde(default)]
    pub keep_comments: bool,
}

impl Default for MinifyOptions {
    fn default() -> Self {
        Self {
            drop_unused: true,
            drop_dead_code: true,
            drop_console: true,
            show_warnings: false,
            keep_comments: false,
        }
    }
}
