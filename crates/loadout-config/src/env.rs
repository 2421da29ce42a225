//! Environment mode detection and the compile-time globals derived from it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable consulted by [`EnvironmentMode::from_env`].
pub const NODE_ENV: &str = "NODE_ENV";

/// The environment a build is produced for.
///
/// Everything that differs between builds is keyed off this value: plugin
/// lists, loader chains, hashing, source maps, and CSS post-processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentMode {
    /// Fast rebuilds, hot reload, inline source maps (default)
    #[default]
    Development,
    /// Minified, cache-friendly output
    Production,
    /// Bare configuration for test runners
    Test,
}

impl EnvironmentMode {
    /// Resolve a raw discriminator value to a mode.
    ///
    /// Absent or unrecognized values fall back to [`Development`], so a
    /// checkout with no environment set behaves like a development
    /// machine. Unrecognized values are logged at debug level.
    ///
    /// [`Development`]: EnvironmentMode::Development
    ///
    /// # Example
    ///
    /// ```
    /// use loadout_config::EnvironmentMode;
    ///
    /// assert_eq!(EnvironmentMode::resolve(Some("production")), EnvironmentMode::Production);
    /// assert_eq!(EnvironmentMode::resolve(None), EnvironmentMode::Development);
    /// assert_eq!(EnvironmentMode::resolve(Some("staging")), EnvironmentMode::Development);
    /// ```
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            Some("production") => EnvironmentMode::Production,
            Some("test") => EnvironmentMode::Test,
            Some("development") | None => EnvironmentMode::Development,
            Some(other) => {
                debug!(value = other, "unrecognized environment, using development");
                EnvironmentMode::Development
            }
        }
    }

    /// Resolve the mode from the `NODE_ENV` environment variable.
    pub fn from_env() -> Self {
        Self::resolve(std::env::var(NODE_ENV).ok().as_deref())
    }

    /// Canonical lowercase name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvironmentMode::Development => "development",
            EnvironmentMode::Production => "production",
            EnvironmentMode::Test => "test",
        }
    }
}

impl std::fmt::Display for EnvironmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One-hot convenience flags mirroring the active mode.
///
/// Exactly one flag is true for any mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    pub development: bool,
    pub production: bool,
    pub test: bool,
}

impl FeatureFlags {
    /// Derive the flag set for a mode.
    pub fn for_mode(mode: EnvironmentMode) -> Self {
        Self {
            development: mode == EnvironmentMode::Development,
            production: mode == EnvironmentMode::Production,
            test: mode == EnvironmentMode::Test,
        }
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self::for_mode(EnvironmentMode::default())
    }
}

/// Compile-time constant definitions for a mode.
///
/// Values are JavaScript literal source text, ready for direct substitution
/// into application code. The entry order is fixed, so serialized output is
/// identical across runs.
///
/// # Example
///
/// ```
/// use loadout_config::{global_defines, EnvironmentMode};
///
/// let defines = global_defines(EnvironmentMode::Production);
/// assert_eq!(defines["process.env.NODE_ENV"], "\"production\"");
/// assert_eq!(defines["__PROD__"], "true");
/// ```
pub fn global_defines(mode: EnvironmentMode) -> IndexMap<String, String> {
    let flags = FeatureFlags::for_mode(mode);
    let mut defines = IndexMap::new();
    defines.insert(
        "process.env.NODE_ENV".to_string(),
        format!("\"{}\"", mode.as_str()),
    );
    defines.insert("__DEV__".to_string(), flags.development.to_string());
    defines.insert("__PROD__".to_string(), flags.production.to_string());
    defines.insert("__TEST__".to_string(), flags.test.to_string());
    defines
}
