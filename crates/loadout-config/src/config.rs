//! The resolved build configuration.
//!
//! This module provides the main `BuildConfig` struct and its assembly
//! logic. For settings discovery, see the `settings` module.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use loadout_manifest::{discover, PackageManifest};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::build::{
    CssPostProcessor, HtmlOptions, LoaderRule, OutputPolicy, PluginSpec, ResolveOptions,
    SourceMapOptions, StatsOptions,
};
use crate::dev::DevServerOptions;
use crate::env::{global_defines, EnvironmentMode, FeatureFlags};
use crate::error::{ConfigError, Result};
use crate::profile::ModeProfile;
use crate::settings::{ResolverSettings, APP_CHUNK, VENDOR_CHUNK};

/// A fully resolved build configuration.
///
/// The value is plain data: resolving performs no I/O and mutates nothing,
/// so equal inputs always produce equal configurations. Field and map
/// ordering is fixed, making serialized output byte-identical across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// The mode this configuration was resolved for
    pub mode: EnvironmentMode,

    /// One-hot flags mirroring the mode
    pub flags: FeatureFlags,

    /// Compile-time constant definitions
    pub defines: IndexMap<String, String>,

    /// Source map generation
    pub source_maps: SourceMapOptions,

    /// Directory module paths resolve against
    pub context: PathBuf,

    /// Named entry chunks and the modules that seed them
    pub entries: IndexMap<String, Vec<String>>,

    /// Import resolution rules
    pub resolve: ResolveOptions,

    /// Output location and filename templates
    pub output: OutputPolicy,

    /// Ordered plugin list
    pub plugins: Vec<PluginSpec>,

    /// Source transformation rules
    pub loaders: Vec<LoaderRule>,

    /// Build report verbosity
    pub stats: StatsOptions,

    /// Development server configuration
    pub dev_server: DevServerOptions,

    /// CSS post-processing pipeline
    pub css_pipeline: Vec<CssPostProcessor>,
}

impl BuildConfig {
    /// Resolve the configuration for `mode` with default settings.
    ///
    /// # Example
    ///
    /// ```
    /// use loadout_config::{BuildConfig, EnvironmentMode};
    /// use loadout_manifest::PackageManifest;
    ///
    /// let manifest = PackageManifest::default();
    /// let config = BuildConfig::resolve(EnvironmentMode::Production, &manifest);
    /// assert!(config.flags.production);
    /// ```
    pub fn resolve(mode: EnvironmentMode, manifest: &PackageManifest) -> Self {
        Self::resolve_with(mode, manifest, &ResolverSettings::default())
    }

    /// Resolve the configuration for `mode` with explicit settings.
    ///
    /// Pure assembly: no filesystem or environment access happens here.
    pub fn resolve_with(
        mode: EnvironmentMode,
        manifest: &PackageManifest,
        settings: &ResolverSettings,
    ) -> Self {
        let ModeProfile {
            hash,
            source_maps,
            stats,
            plugins: mode_plugins,
            loaders,
            css_pipeline,
        } = ModeProfile::for_mode(mode, settings);

        let defines = global_defines(mode);

        // The base plugins ship in every mode; the profile appends the rest.
        let mut plugins = vec![
            PluginSpec::Define {
                defines: defines.clone(),
            },
            PluginSpec::Html(HtmlOptions {
                template: settings.html_template.clone(),
                filename: settings.html_filename.clone(),
                inject: true,
                hash: false,
            }),
            PluginSpec::VendorChunk {
                chunk_name: VENDOR_CHUNK.to_string(),
                filename: hash.chunk_template(VENDOR_CHUNK),
                modules: manifest.dependency_names(),
            },
        ];
        plugins.extend(mode_plugins);

        let mut entries = IndexMap::new();
        entries.insert(APP_CHUNK.to_string(), vec![settings.entry.clone()]);
        entries.insert(VENDOR_CHUNK.to_string(), manifest.dependency_names());

        let config = Self {
            mode,
            flags: FeatureFlags::for_mode(mode),
            defines,
            source_maps,
            context: settings.context.clone(),
            entries,
            resolve: ResolveOptions {
                root: settings.context.clone(),
                extensions: settings.resolve_extensions.clone(),
            },
            output: OutputPolicy {
                dir: settings.output_dir.clone(),
                public_path: settings.public_path.clone(),
                filename: hash.entry_template(),
                hash,
            },
            plugins,
            loaders,
            stats,
            dev_server: DevServerOptions {
                host: settings.dev_host.clone(),
                port: settings.dev_port,
                public_path: settings.public_path.clone(),
                hot: true,
                history_api_fallback: true,
                stats,
            },
            css_pipeline,
        };

        debug!(
            mode = %config.mode,
            plugins = config.plugins.len(),
            loaders = config.loaders.len(),
            "resolved build configuration"
        );

        config
    }

    /// Resolve from the process environment and a project root on disk.
    ///
    /// Reads `NODE_ENV`, loads `package.json` and settings (with
    /// `LOADOUT_*` overrides) from `root`, then resolves.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use loadout_config::BuildConfig;
    ///
    /// let config = BuildConfig::resolve_from_env(".").unwrap();
    /// ```
    pub fn resolve_from_env(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let mode = EnvironmentMode::from_env();
        let manifest = discover(root)?;
        let settings = ResolverSettings::load(root)?;
        Ok(Self::resolve_with(mode, &manifest, &settings))
    }

    /// Create from serde_json::Value (for programmatic config from DB/API)
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::resolve(EnvironmentMode::default(), &PackageManifest::default())
    }
}
