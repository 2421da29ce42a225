use serde::{Deserialize, Serialize};

/// Cache-busting token family used in output filename templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashStrategy {
    /// Whole-build fingerprint; every emitted file shares it
    Hash,
    /// Per-chunk fingerprint; changes only when the chunk's contents do
    #[default]
    Chunkhash,
}

impl HashStrategy {
    /// Token spliced into filename templates
    pub fn token(&self) -> &'static str {
        match self {
            HashStrategy::Hash => "hash",
            HashStrategy::Chunkhash => "chunkhash",
        }
    }

    /// Filename template for entry chunks, e.g. `[name]-[chunkhash].js`
    pub fn entry_template(&self) -> String {
        format!("[name]-[{}].js", self.token())
    }

    /// Filename template for a named chunk, e.g. `vendor-[chunkhash].js`
    pub fn chunk_template(&self, chunk_name: &str) -> String {
        format!("{}-[{}].js", chunk_name, self.token())
    }

    /// Filename template for extracted stylesheets
    pub fn stylesheet_template(&self) -> String {
        format!("[name]-[{}].css", self.token())
    }
}

/// Source map generation options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMapOptions {
    /// No source maps
    #[default]
    None,
    /// Inline eval-style maps, cheap to regenerate on rebuild
    Inline,
}
