use std::path::PathBuf;

// Helper defaults
pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

pub(crate) fn default_public_path() -> String {
    "/".to_string()
}

pub(crate) fn default_context_dir() -> PathBuf {
    PathBuf::from("src")
}

pub(crate) fn default_entry() -> String {
    "index.js".to_string()
}

pub(crate) fn default_html_template() -> PathBuf {
    PathBuf::from("index.html")
}

pub(crate) fn default_html_filename() -> String {
    "index.html".to_string()
}

pub(crate) fn default_dependency_dir() -> PathBuf {
    PathBuf::from("node_modules")
}

pub(crate) fn default_resolve_extensions() -> Vec<String> {
    // The empty entry keeps fully-specified imports resolving as written
    vec!["".to_string(), ".js".to_string(), ".jsx".to_string()]
}

pub(crate) fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub(crate) fn default_port() -> u16 {
    4000
}
