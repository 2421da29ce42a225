//! Pluggable validation strategies for resolved configurations
//!
//! Separates schema validation (for library use) from filesystem validation
//! (for CLI use). Resolution itself never validates; callers opt in.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::build::{CssPostProcessor, PluginSpec};
use crate::config::BuildConfig;
use crate::error::{ConfigError, Result};
use crate::settings::APP_CHUNK;

/// Trait for pluggable validation strategies
pub trait ConfigValidator {
    /// Validate a resolved configuration
    fn validate(&self, config: &BuildConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// Use this for library use cases where project files are in-memory or
/// virtual.
///
/// # Example
///
/// ```
/// use loadout_config::{BuildConfig, ConfigValidator, EnvironmentMode, SchemaValidator};
/// use loadout_manifest::PackageManifest;
///
/// let config = BuildConfig::resolve(EnvironmentMode::Development, &PackageManifest::default());
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        // Exactly one feature flag describes the mode
        let set = [
            config.flags.development,
            config.flags.production,
            config.flags.test,
        ]
        .into_iter()
        .filter(|flag| *flag)
        .count();
        if set != 1 {
            return Err(ConfigError::SchemaValidation {
                message: format!("{set} feature flags set, expected exactly one"),
                hint: Some("Derive the flags with FeatureFlags::for_mode".to_string()),
            });
        }

        // Define values are spliced into sources verbatim and must stay
        // valid JSON string or boolean literals
        for (name, value) in &config.defines {
            match serde_json::from_str::<serde_json::Value>(value) {
                Ok(serde_json::Value::String(_) | serde_json::Value::Bool(_)) => {}
                _ => {
                    return Err(ConfigError::SchemaValidation {
                        message: format!(
                            "define '{name}' is not a JSON string or boolean literal"
                        ),
                        hint: Some(format!("Quote '{value}' or map it to true/false")),
                    });
                }
            }
        }

        // Entry validation: the application chunk must seed at least one module
        let app_entries = config.entries.get(APP_CHUNK);
        match app_entries {
            None => {
                return Err(ConfigError::SchemaValidation {
                    message: format!("no '{APP_CHUNK}' entry chunk"),
                    hint: Some("Resolve the configuration rather than building it by hand".to_string()),
                });
            }
            Some(entries) if entries.iter().all(|e| e.trim().is_empty()) => {
                return Err(ConfigError::SchemaValidation {
                    message: "application entry cannot be empty".to_string(),
                    hint: Some("Set 'entry' to the application's entry module".to_string()),
                });
            }
            Some(_) => {}
        }

        // Served URLs are always absolute
        if !config.output.public_path.starts_with('/') {
            return Err(ConfigError::SchemaValidation {
                message: format!(
                    "public path '{}' must start with '/'",
                    config.output.public_path
                ),
                hint: Some("Use an absolute URL prefix such as '/' or '/assets/'".to_string()),
            });
        }

        // Entry templates must distinguish chunks by name
        if !config.output.filename.contains("[name]") {
            return Err(ConfigError::SchemaValidation {
                message: format!(
                    "output filename '{}' is missing the [name] token",
                    config.output.filename
                ),
                hint: Some("Chunks would overwrite each other without it".to_string()),
            });
        }

        if config.dev_server.port == 0 {
            return Err(ConfigError::SchemaValidation {
                message: "dev server port cannot be 0".to_string(),
                hint: None,
            });
        }

        // Loader rules need something to match and something to do, and the
        // first matching rule wins, so no extension may be claimed twice
        let mut claimed = HashSet::new();
        for rule in &config.loaders {
            if rule.extensions.is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "loader rule claims no extensions".to_string(),
                    hint: None,
                });
            }
            if rule.steps.is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!(
                        "loader rule for {:?} has no transform steps",
                        rule.extensions
                    ),
                    hint: None,
                });
            }
            for extension in &rule.extensions {
                if !claimed.insert(extension.as_str()) {
                    return Err(ConfigError::SchemaValidation {
                        message: format!(
                            "extension '{extension}' is claimed by more than one loader rule"
                        ),
                        hint: Some("Merge the duplicate rules into one chain".to_string()),
                    });
                }
            }
        }

        // Minification and extraction are single-instance passes
        let minify = config
            .plugins
            .iter()
            .filter(|plugin| matches!(plugin, PluginSpec::Minify(_)))
            .count();
        if minify > 1 {
            return Err(ConfigError::SchemaValidation {
                message: "more than one minify plugin".to_string(),
                hint: None,
            });
        }
        let extract = config
            .plugins
            .iter()
            .filter(|plugin| matches!(plugin, PluginSpec::CssExtract { .. }))
            .count();
        if extract > 1 {
            return Err(ConfigError::SchemaValidation {
                message: "more than one css extract plugin".to_string(),
                hint: None,
            });
        }

        for plugin in &config.plugins {
            if let PluginSpec::VendorChunk { modules, .. } = plugin {
                if modules.iter().any(|name| name.trim().is_empty()) {
                    return Err(ConfigError::SchemaValidation {
                        message: "vendor chunk lists an empty module name".to_string(),
                        hint: Some("Check the dependency manifest for blank keys".to_string()),
                    });
                }
            }
        }

        // Prefixing rewrites declarations and must run before minification
        let prefix = config
            .css_pipeline
            .iter()
            .position(|step| *step == CssPostProcessor::VendorPrefix);
        let css_minify = config
            .css_pipeline
            .iter()
            .position(|step| *step == CssPostProcessor::Minify);
        if let (Some(prefix), Some(css_minify)) = (prefix, css_minify) {
            if css_minify < prefix {
                return Err(ConfigError::SchemaValidation {
                    message: "css pipeline minifies before adding vendor prefixes".to_string(),
                    hint: None,
                });
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Validates that the context directory, application entries, and the HTML
/// template exist on disk. Vendor chunk entries are package names resolved
/// from the dependency directory and are not checked here.
///
/// Failures other than absence (an unreadable directory, traversal through
/// a non-directory) surface as [`ConfigError::Io`], not as a not-found
/// error.
///
/// # Example
///
/// ```no_run
/// use loadout_config::{BuildConfig, ConfigValidator, FsValidator};
///
/// let config = BuildConfig::resolve_from_env(".").unwrap();
/// FsValidator::new(".").validate(&config).unwrap();
/// ```
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    /// Create a new filesystem validator with a project root
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

/// Stat a path, mapping only `NotFound` to `Ok(None)`. Any other
/// filesystem error propagates.
fn metadata_if_found(path: &Path) -> Result<Option<fs::Metadata>> {
    match fs::metadata(path) {
        Ok(meta) => Ok(Some(meta)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        // First run schema validation
        SchemaValidator.validate(config)?;

        let context = self.root.join(&config.context);
        match metadata_if_found(&context)? {
            Some(meta) if meta.is_dir() => {}
            _ => return Err(ConfigError::ContextNotFound(context)),
        }

        if let Some(entries) = config.entries.get(APP_CHUNK) {
            for entry in entries {
                let path = context.join(entry);
                if metadata_if_found(&path)?.is_none() {
                    return Err(ConfigError::EntryNotFound(path));
                }
            }
        }

        for plugin in &config.plugins {
            if let PluginSpec::Html(options) = plugin {
                let path = context.join(&options.template);
                if metadata_if_found(&path)?.is_none() {
                    return Err(ConfigError::TemplateNotFound(path));
                }
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &BuildConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &BuildConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
