//! End-to-end resolution tests across the three environment modes.

use loadout_config::{
    BuildConfig, CssPostProcessor, EnvironmentMode, HashStrategy, MinifyOptions, PluginSpec,
    ResolverSettings, SourceMapOptions, TransformStep, APP_CHUNK, VENDOR_CHUNK,
};
use loadout_manifest::PackageManifest;
use serde_json::json;

fn sample_manifest() -> PackageManifest {
    PackageManifest::from_value(json!({
        "name": "storefront",
        "version": "1.0.0",
        "dependencies": {
            "axios": "^0.14.0",
            "react": "^15.3.1",
            "react-dom": "^15.3.1",
            "react-redux": "^4.4.5",
            "redux": "^3.5.2"
        },
        "devDependencies": {
            "eslint": "^3.5.0"
        }
    }))
    .unwrap()
}

fn plugin_names(config: &BuildConfig) -> Vec<&str> {
    config.plugins.iter().map(PluginSpec::name).collect()
}

#[test]
fn development_build_is_hot_and_inline_mapped() {
    let config = BuildConfig::resolve(EnvironmentMode::Development, &sample_manifest());

    assert_eq!(
        plugin_names(&config),
        vec![
            "define",
            "html",
            "vendor-chunk",
            "hot-reload",
            "module-substitution"
        ]
    );

    match &config.plugins[1] {
        PluginSpec::Html(options) => {
            assert_eq!(options.template, std::path::PathBuf::from("index.html"));
            assert_eq!(options.filename, "index.html");
            assert!(options.inject);
            assert!(!options.hash);
        }
        other => panic!("expected html plugin, got {other:?}"),
    }

    match &config.plugins[2] {
        PluginSpec::VendorChunk { filename, .. } => assert_eq!(filename, "vendor-[hash].js"),
        other => panic!("expected vendor chunk plugin, got {other:?}"),
    }

    assert_eq!(config.output.hash, HashStrategy::Hash);
    assert_eq!(config.output.filename, "[name]-[hash].js");
    assert_eq!(config.source_maps, SourceMapOptions::Inline);
    assert!(config.css_pipeline.is_empty());
    assert!(!config.stats.chunks);
    assert!(!config.stats.chunk_modules);

    assert_eq!(config.loaders.len(), 3);
    let script_rule = &config.loaders[0];
    assert!(script_rule.steps.contains(&TransformStep::Compile));
    assert!(script_rule.steps.contains(&TransformStep::HotInstrument));
    assert!(config.loaders.iter().all(|rule| !rule.extract));

    assert!(config.flags.development);
    assert!(!config.flags.production);
    assert!(!config.flags.test);
}

#[test]
fn production_build_is_minified_and_extracted() {
    let config = BuildConfig::resolve(EnvironmentMode::Production, &sample_manifest());

    assert_eq!(
        plugin_names(&config),
        vec![
            "define",
            "html",
            "vendor-chunk",
            "css-extract",
            "occurrence-order",
            "dedupe",
            "aggressive-merging",
            "minify"
        ]
    );

    let minify_count = config
        .plugins
        .iter()
        .filter(|p| matches!(p, PluginSpec::Minify(_)))
        .count();
    assert_eq!(minify_count, 1);

    let extract_count = config
        .plugins
        .iter()
        .filter(|p| matches!(p, PluginSpec::CssExtract { .. }))
        .count();
    assert_eq!(extract_count, 1);

    for plugin in &config.plugins {
        match plugin {
            PluginSpec::Minify(options) => assert_eq!(options, &MinifyOptions::default()),
            PluginSpec::CssExtract { filename } => {
                assert_eq!(filename, "[name]-[chunkhash].css");
            }
            PluginSpec::VendorChunk { filename, .. } => {
                assert_eq!(filename, "vendor-[chunkhash].js");
            }
            _ => {}
        }
    }

    assert_eq!(config.output.hash, HashStrategy::Chunkhash);
    assert_eq!(config.output.filename, "[name]-[chunkhash].js");
    assert_eq!(config.source_maps, SourceMapOptions::None);
    assert_eq!(
        config.css_pipeline,
        vec![CssPostProcessor::VendorPrefix, CssPostProcessor::Minify]
    );
    assert!(config.stats.chunks);
    assert!(config.stats.chunk_modules);

    // Hot reload machinery never reaches production
    assert!(!plugin_names(&config).contains(&"hot-reload"));
    assert!(!plugin_names(&config).contains(&"module-substitution"));
    for rule in &config.loaders {
        assert!(!rule.steps.contains(&TransformStep::HotInstrument));
    }

    let sass_rule = &config.loaders[1];
    assert!(sass_rule.extract);
    assert!(sass_rule.steps.contains(&TransformStep::PostCss));
}

#[test]
fn test_build_carries_only_the_base_set() {
    let config = BuildConfig::resolve(EnvironmentMode::Test, &sample_manifest());

    assert_eq!(plugin_names(&config), vec!["define", "html", "vendor-chunk"]);
    assert!(config.loaders.is_empty());
    assert!(config.css_pipeline.is_empty());
    assert_eq!(config.output.hash, HashStrategy::Chunkhash);
    assert_eq!(config.output.filename, "[name]-[chunkhash].js");
    assert_eq!(config.source_maps, SourceMapOptions::None);
    assert!(config.stats.chunks);
    assert!(config.stats.chunk_modules);
    assert!(config.flags.test);
}

#[test]
fn vendor_list_mirrors_manifest_key_order() {
    let manifest = sample_manifest();
    let expected = manifest.dependency_names();

    for mode in [
        EnvironmentMode::Development,
        EnvironmentMode::Production,
        EnvironmentMode::Test,
    ] {
        let config = BuildConfig::resolve(mode, &manifest);
        assert_eq!(config.entries[VENDOR_CHUNK], expected);

        match &config.plugins[2] {
            PluginSpec::VendorChunk { modules, .. } => assert_eq!(modules, &expected),
            other => panic!("expected vendor chunk plugin, got {other:?}"),
        }
    }
}

#[test]
fn each_mode_defines_its_own_globals() {
    let manifest = sample_manifest();

    let dev = BuildConfig::resolve(EnvironmentMode::Development, &manifest);
    assert_eq!(dev.defines["process.env.NODE_ENV"], "\"development\"");
    assert_eq!(dev.defines["__DEV__"], "true");
    assert_eq!(dev.defines["__PROD__"], "false");

    let prod = BuildConfig::resolve(EnvironmentMode::Production, &manifest);
    assert_eq!(prod.defines["process.env.NODE_ENV"], "\"production\"");
    assert_eq!(prod.defines["__PROD__"], "true");
    assert_eq!(prod.defines["__TEST__"], "false");

    let test = BuildConfig::resolve(EnvironmentMode::Test, &manifest);
    assert_eq!(test.defines["process.env.NODE_ENV"], "\"test\"");
    assert_eq!(test.defines["__TEST__"], "true");
    assert_eq!(test.defines["__DEV__"], "false");
}

#[test]
fn resolution_is_deterministic() {
    let manifest = sample_manifest();

    for mode in [
        EnvironmentMode::Development,
        EnvironmentMode::Production,
        EnvironmentMode::Test,
    ] {
        let first = BuildConfig::resolve(mode, &manifest);
        let second = BuildConfig::resolve(mode, &manifest);
        assert_eq!(first, second);

        let first_json = serde_json::to_string(&first).unwrap();
        let second_json = serde_json::to_string(&second).unwrap();
        assert_eq!(first_json, second_json, "serialized output differs for {mode}");
    }
}

#[test]
fn settings_shape_the_output() {
    let mut settings = ResolverSettings::default();
    settings.entry = "main.jsx".to_string();
    settings.output_dir = "build".into();
    settings.public_path = "/static/".to_string();
    settings.dev_port = 9999;
    settings.html_filename = "app.html".to_string();

    let config = BuildConfig::resolve_with(
        EnvironmentMode::Development,
        &sample_manifest(),
        &settings,
    );

    assert_eq!(config.entries[APP_CHUNK], vec!["main.jsx"]);
    assert_eq!(config.output.dir, std::path::PathBuf::from("build"));
    assert_eq!(config.output.public_path, "/static/");
    assert_eq!(config.dev_server.port, 9999);
    assert_eq!(config.dev_server.public_path, "/static/");

    match &config.plugins[1] {
        PluginSpec::Html(options) => assert_eq!(options.filename, "app.html"),
        other => panic!("expected html plugin, got {other:?}"),
    }
}

#[test]
fn resolve_from_env_reads_the_process_environment() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "package.json",
            r#"{
                "name": "storefront",
                "dependencies": {
                    "react": "^15.3.1",
                    "redux": "^3.5.2"
                }
            }"#,
        )?;
        jail.create_file("loadout.toml", r#"entry = "main.js""#)?;
        jail.set_env("NODE_ENV", "production");

        let config = BuildConfig::resolve_from_env(jail.directory())
            .map_err(|e| figment::Error::from(e.to_string()))?;

        assert_eq!(config.mode, EnvironmentMode::Production);
        assert!(config.flags.production);
        assert_eq!(config.entries[APP_CHUNK], vec!["main.js"]);
        assert_eq!(config.entries[VENDOR_CHUNK], vec!["react", "redux"]);
        Ok(())
    });
}

#[test]
fn resolve_from_env_treats_unknown_environments_as_development() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("package.json", r#"{ "name": "storefront" }"#)?;
        jail.set_env("NODE_ENV", "staging");

        let config = BuildConfig::resolve_from_env(jail.directory())
            .map_err(|e| figment::Error::from(e.to_string()))?;

        assert_eq!(config.mode, EnvironmentMode::Development);
        Ok(())
    });
}

#[test]
fn resolve_from_env_requires_a_manifest() {
    figment::Jail::expect_with(|jail| {
        jail.set_env("NODE_ENV", "production");

        let result = BuildConfig::resolve_from_env(jail.directory());
        assert!(result.is_err());
        Ok(())
    });
}
