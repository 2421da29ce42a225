//! Per-mode build profiles.
//!
//! Everything that varies with the environment mode is decided in one
//! table: [`ModeProfile::for_mode`]. The assembled configuration layers the
//! mode-independent pieces on top.

use serde::{Deserialize, Serialize};

use crate::build::{
    CssPostProcessor, CssTransformOptions, HashStrategy, LoaderRule, MinifyOptions, PluginSpec,
    SourceMapOptions, StatsOptions, TransformStep,
};
use crate::env::EnvironmentMode;
use crate::settings::{ResolverSettings, SCOPED_CLASS_TEMPLATE};

/// The mode-conditioned slice of a build configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeProfile {
    /// Cache-busting strategy for filename templates
    pub hash: HashStrategy,

    /// Source map generation
    pub source_maps: SourceMapOptions,

    /// Report verbosity
    pub stats: StatsOptions,

    /// Plugins appended after the always-present base set
    pub plugins: Vec<PluginSpec>,

    /// The full loader rule set for the mode
    pub loaders: Vec<LoaderRule>,

    /// Post-processors applied to compiled CSS, in order
    pub css_pipeline: Vec<CssPostProcessor>,
}

impl ModeProfile {
    /// Build the profile for `mode`.
    ///
    /// Each arm is the complete delta for its mode; nothing else consults
    /// the mode when these pieces are assembled into a configuration.
    pub fn for_mode(mode: EnvironmentMode, settings: &ResolverSettings) -> Self {
        match mode {
            EnvironmentMode::Development => Self {
                hash: HashStrategy::Hash,
                source_maps: SourceMapOptions::Inline,
                stats: StatsOptions::with_chunk_display(false),
                plugins: vec![
                    PluginSpec::HotReload,
                    PluginSpec::ModuleSubstitution {
                        substitutions: settings.substitutions.clone(),
                    },
                ],
                loaders: vec![
                    LoaderRule {
                        extensions: script_extensions(),
                        exclude: Some(settings.dependency_dir.clone()),
                        steps: vec![TransformStep::Compile, TransformStep::HotInstrument],
                        extract: false,
                    },
                    LoaderRule {
                        extensions: vec!["scss".to_string()],
                        exclude: None,
                        steps: vec![
                            TransformStep::Sass { source_maps: true },
                            TransformStep::Css(CssTransformOptions {
                                modules: true,
                                local_ident_template: Some(SCOPED_CLASS_TEMPLATE.to_string()),
                                source_maps: true,
                            }),
                            TransformStep::InjectStyles,
                        ],
                        extract: false,
                    },
                    LoaderRule {
                        extensions: vec!["css".to_string()],
                        exclude: None,
                        steps: vec![
                            TransformStep::Css(CssTransformOptions::default()),
                            TransformStep::InjectStyles,
                        ],
                        extract: false,
                    },
                ],
                css_pipeline: vec![],
            },

            EnvironmentMode::Production => {
                let hash = HashStrategy::Chunkhash;
                Self {
                    hash,
                    source_maps: SourceMapOptions::None,
                    stats: StatsOptions::with_chunk_display(true),
                    plugins: vec![
                        PluginSpec::CssExtract {
                            filename: hash.stylesheet_template(),
                        },
                        PluginSpec::OccurrenceOrder,
                        PluginSpec::Dedupe,
                        PluginSpec::AggressiveMerging,
                        PluginSpec::Minify(MinifyOptions::default()),
                    ],
                    loaders: vec![
                        LoaderRule {
                            extensions: script_extensions(),
                            exclude: Some(settings.dependency_dir.clone()),
                            steps: vec![TransformStep::Compile],
                            extract: false,
                        },
                        LoaderRule {
                            extensions: vec!["scss".to_string()],
                            exclude: None,
                            steps: vec![
                                TransformStep::Sass { source_maps: false },
                                TransformStep::PostCss,
                                TransformStep::Css(CssTransformOptions {
                                    modules: true,
                                    local_ident_template: None,
                                    source_maps: false,
                                }),
                            ],
                            extract: true,
                        },
                        LoaderRule {
                            extensions: vec!["css".to_string()],
                            exclude: None,
                            steps: vec![TransformStep::Css(CssTransformOptions::default())],
                            extract: true,
                        },
                    ],
                    css_pipeline: vec![CssPostProcessor::VendorPrefix, CssPostProcessor::Minify],
                }
            }

            // Test runs load modules directly and never bundle.
            EnvironmentMode::Test => Self {
                hash: HashStrategy::Chunkhash,
                source_maps: SourceMapOptions::None,
                stats: StatsOptions::with_chunk_display(true),
                plugins: vec![],
                loaders: vec![],
                css_pipeline: vec![],
            },
        }
    }
}

fn script_extensions() -> Vec<String> {
    vec!["js".to_string(), "jsx".to_string()]
}
