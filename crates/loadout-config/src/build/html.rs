use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::build::helpers::{default_html_filename, default_html_template, default_true};

/// HTML page generation options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlOptions {
    /// Source template, relative to the context directory
    #[serde(default = "default_html_template")]
    pub template: PathBuf,

    /// Output filename for the generated page (default: "index.html")
    #[serde(default = "default_html_filename")]
    pub filename: String,

    /// Inject script and link tags for the emitted bundles
    #[serde(default = "default_true")]
    pub inject: bool,

    /// Append a cache-busting query to injected asset URLs
    ///
    /// Off by default; the filename templates already carry a fingerprint.
    #[serde(default)]
    pub hash: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            template: default_html_template(),
            filename: default_html_filename(),
            inject: true,
            hash: false,
        }
    }
}
