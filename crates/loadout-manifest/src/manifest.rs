//! The `package.json` data model.
//!
//! Only the fields the resolver cares about are modeled; anything else in
//! the file is ignored on deserialization.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ManifestError, Result};

/// Conventional manifest file name searched for during discovery.
pub const MANIFEST_FILE: &str = "package.json";

/// A parsed `package.json` manifest.
///
/// Dependency maps preserve declaration order from the file, so any list
/// derived from them is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageManifest {
    /// Package name, if declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Package version, if declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Runtime dependencies, mapping package name to version requirement.
    #[serde(default)]
    pub dependencies: IndexMap<String, String>,

    /// Development-only dependencies. Never bundled.
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: IndexMap<String, String>,
}

impl PackageManifest {
    /// Parse a manifest from an in-memory JSON value.
    ///
    /// # Example
    ///
    /// ```
    /// use loadout_manifest::PackageManifest;
    /// use serde_json::json;
    ///
    /// let manifest = PackageManifest::from_value(json!({
    ///     "dependencies": { "react": "^15.0.0" }
    /// })).unwrap();
    /// assert_eq!(manifest.dependency_names(), vec!["react"]);
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ManifestError::InvalidValue(e.to_string()))
    }

    /// Serialize the manifest back to a JSON value.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ManifestError::InvalidValue(e.to_string()))
    }

    /// Load and parse a manifest file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| ManifestError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Names of the runtime dependencies, in declaration order.
    ///
    /// This is the module list that ends up in the vendor chunk.
    pub fn dependency_names(&self) -> Vec<String> {
        self.dependencies.keys().cloned().collect()
    }
}
