//! Project-level resolver settings, independent of environment mode.
//!
//! Settings describe the project: where sources live, where output goes,
//! which modules get swapped in development. The environment mode then
//! decides what is done with them.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format as _, Serialized, Toml},
    Figment,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::build::helpers::{
    default_context_dir, default_dependency_dir, default_entry, default_host,
    default_html_filename, default_html_template, default_output_dir, default_port,
    default_public_path, default_resolve_extensions,
};
use crate::error::{ConfigError, Result};

/// Settings file searched for in the project root.
pub const SETTINGS_FILE: &str = "loadout.toml";

/// Prefix for environment variable overrides, e.g. `LOADOUT_DEV_PORT`.
pub const ENV_PREFIX: &str = "LOADOUT_";

/// Name of the application entry chunk. Part of the output contract.
pub const APP_CHUNK: &str = "app";

/// Name of the third-party dependency chunk. Part of the output contract.
pub const VENDOR_CHUNK: &str = "vendor";

/// Scoped class name template applied to CSS modules in development.
///
/// Keeps the authored class name visible in dev tools while still making
/// it unique per module.
pub const SCOPED_CLASS_TEMPLATE: &str = "[local][hash:base64:5]";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverSettings {
    /// Application entry module, relative to the context directory
    #[serde(default = "default_entry")]
    pub entry: String,

    /// Directory module paths resolve against
    #[serde(default = "default_context_dir")]
    pub context: PathBuf,

    /// Directory receiving emitted bundles
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// URL prefix under which bundles are served
    #[serde(default = "default_public_path")]
    pub public_path: String,

    /// HTML template consumed by the page plugin
    #[serde(default = "default_html_template")]
    pub html_template: PathBuf,

    /// Output filename for the generated page
    #[serde(default = "default_html_filename")]
    pub html_filename: String,

    /// Development server bind address
    #[serde(default = "default_host")]
    pub dev_host: String,

    /// Development server port
    #[serde(default = "default_port")]
    pub dev_port: u16,

    /// Directory excluded from JavaScript compilation
    #[serde(default = "default_dependency_dir")]
    pub dependency_dir: PathBuf,

    /// Extensions tried for extensionless imports
    #[serde(default = "default_resolve_extensions")]
    pub resolve_extensions: Vec<String>,

    /// Module replacements applied in development builds.
    ///
    /// Maps a module specifier to the development double that should load
    /// in its place.
    #[serde(default = "default_substitutions")]
    pub substitutions: IndexMap<String, String>,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            entry: default_entry(),
            context: default_context_dir(),
            output_dir: default_output_dir(),
            public_path: default_public_path(),
            html_template: default_html_template(),
            html_filename: default_html_filename(),
            dev_host: default_host(),
            dev_port: default_port(),
            dependency_dir: default_dependency_dir(),
            resolve_extensions: default_resolve_extensions(),
            substitutions: default_substitutions(),
        }
    }
}

impl ResolverSettings {
    /// Load settings for a project root.
    ///
    /// Priority: environment variables > `loadout.toml` > defaults.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use loadout_config::ResolverSettings;
    ///
    /// let settings = ResolverSettings::load(".").unwrap();
    /// ```
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let settings_file = root.join(SETTINGS_FILE);
        if settings_file.exists() {
            debug!(path = %settings_file.display(), "merging settings file");
            figment = figment.merge(Toml::file(settings_file));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        figment
            .extract()
            .map_err(|e| ConfigError::InvalidSettings(e.to_string()))
    }
}

fn default_substitutions() -> IndexMap<String, String> {
    // Store wiring and the root domain ship development doubles
    IndexMap::from([
        (
            "store/configure".to_string(),
            "store/configure.dev".to_string(),
        ),
        (
            "domains/Root".to_string(),
            "domains/Root/index.dev".to_string(),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_a_conventional_project() {
        let settings = ResolverSettings::default();
        assert_eq!(settings.entry, "index.js");
        assert_eq!(settings.context, PathBuf::from("src"));
        assert_eq!(settings.output_dir, PathBuf::from("dist"));
        assert_eq!(settings.public_path, "/");
        assert_eq!(settings.html_template, PathBuf::from("index.html"));
        assert_eq!(settings.dev_host, "0.0.0.0");
        assert_eq!(settings.dev_port, 4000);
        assert_eq!(settings.dependency_dir, PathBuf::from("node_modules"));
    }

    #[test]
    fn default_substitutions_point_at_dev_doubles() {
        let subs = default_substitutions();
        assert_eq!(subs["store/configure"], "store/configure.dev");
        assert_eq!(subs["domains/Root"], "domains/Root/index.dev");
    }

    #[test]
    fn load_without_sources_yields_defaults() {
        figment::Jail::expect_with(|jail| {
            let settings = ResolverSettings::load(jail.directory())
                .map_err(|e| figment::Error::from(e.to_string()))?;
            assert_eq!(settings, ResolverSettings::default());
            Ok(())
        });
    }

    #[test]
    fn settings_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                SETTINGS_FILE,
                r#"
                    entry = "main.jsx"
                    dev_port = 8080
                "#,
            )?;

            let settings = ResolverSettings::load(jail.directory())
                .map_err(|e| figment::Error::from(e.to_string()))?;
            assert_eq!(settings.entry, "main.jsx");
            assert_eq!(settings.dev_port, 8080);
            // Untouched fields keep their defaults
            assert_eq!(settings.public_path, "/");
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_settings_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(SETTINGS_FILE, r#"dev_port = 8080"#)?;
            jail.set_env("LOADOUT_DEV_PORT", "9000");
            jail.set_env("LOADOUT_PUBLIC_PATH", "/assets/");

            let settings = ResolverSettings::load(jail.directory())
                .map_err(|e| figment::Error::from(e.to_string()))?;
            assert_eq!(settings.dev_port, 9000);
            assert_eq!(settings.public_path, "/assets/");
            Ok(())
        });
    }

    #[test]
    fn malformed_settings_file_is_an_error() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(SETTINGS_FILE, "dev_port = \"not a number")?;

            let result = ResolverSettings::load(jail.directory());
            assert!(matches!(result, Err(ConfigError::InvalidSettings(_))));
            Ok(())
        });
    }
}
