use serde::{Deserialize, Serialize};

/// A post-processing stage applied to compiled CSS.
///
/// Stages run in list order over the output of the loader chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CssPostProcessor {
    /// Add vendor prefixes for the supported browser matrix
    VendorPrefix,
    /// Structural CSS minification
    Minify,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&CssPostProcessor::VendorPrefix).unwrap(),
            "\"vendor-prefix\""
        );
        assert_eq!(
            serde_json::to_string(&CssPostProcessor::Minify).unwrap(),
            "\"minify\""
        );
    }
}
