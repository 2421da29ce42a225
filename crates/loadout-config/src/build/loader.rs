use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A source transformation rule.
///
/// Rules claim files by extension and run their steps in order: the first
/// step sees the raw source, each later step sees its predecessor's output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderRule {
    /// File extensions this rule claims, without the leading dot
    pub extensions: Vec<String>,

    /// Directory excluded from the rule, matched against path components
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<PathBuf>,

    /// Transform steps in application order
    pub steps: Vec<TransformStep>,

    /// Route final CSS into the extracted stylesheet instead of the page
    #[serde(default)]
    pub extract: bool,
}

impl LoaderRule {
    /// Whether this rule applies to `path`.
    ///
    /// A path is excluded when any of its directory components equals the
    /// rule's `exclude` entry, so `node_modules` is skipped at any depth.
    pub fn matches(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        if let Some(exclude) = &self.exclude {
            if path
                .components()
                .any(|c| c.as_os_str() == exclude.as_os_str())
            {
                return false;
            }
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}

/// One stage in a loader rule's transform chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "kebab-case")]
pub enum TransformStep {
    /// Transpile modern JavaScript and JSX to the supported target
    Compile,

    /// Wrap component modules so edits hot-swap into the running page
    HotInstrument,

    /// Compile Sass sources to CSS
    Sass {
        #[serde(default)]
        source_maps: bool,
    },

    /// Resolve CSS imports and optionally scope class names per module
    Css(CssTransformOptions),

    /// Run the configured post-processing pipeline over compiled CSS
    PostCss,

    /// Attach CSS to the page through a style tag
    InjectStyles,
}

/// Options for the CSS resolution step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CssTransformOptions {
    /// Scope class names to the importing module
    #[serde(default)]
    pub modules: bool,

    /// Template for scoped class names, e.g. `[local][hash:base64:5]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_ident_template: Option<String>,

    /// Emit source maps for the compiled CSS
    #[serde(default)]
    pub source_maps: bool,
}
