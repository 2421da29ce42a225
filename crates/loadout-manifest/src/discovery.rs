//! File-based manifest discovery.
//!
//! Handles finding and loading `package.json` from a project root.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ManifestError, Result};
use crate::manifest::{PackageManifest, MANIFEST_FILE};

/// File-based manifest discovery
///
/// Searches a project root for `package.json` and loads it. Library users
/// holding an in-memory value should use `PackageManifest::from_value()`
/// directly.
///
/// # Example
///
/// ```no_run
/// use loadout_manifest::ManifestDiscovery;
///
/// let discovery = ManifestDiscovery::new(".");
/// let manifest = discovery.load().unwrap();
/// ```
pub struct ManifestDiscovery {
    root: PathBuf,
}

impl ManifestDiscovery {
    /// Create a new manifest discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find the manifest file in the root directory
    pub fn find(&self) -> Option<PathBuf> {
        let path = self.root.join(MANIFEST_FILE);
        if path.exists() {
            debug!(path = %path.display(), "found package manifest");
            return Some(path);
        }
        None
    }

    /// Load the manifest from the discovered file
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::NotFound` if the root has no `package.json`.
    pub fn load(&self) -> Result<PackageManifest> {
        let path = self
            .find()
            .ok_or_else(|| ManifestError::NotFound(self.root.clone()))?;
        PackageManifest::load(path)
    }
}

/// Discover and load the manifest under `root` (convenience function)
///
/// # Example
///
/// ```no_run
/// use loadout_manifest::discover;
///
/// let manifest = discover(".").unwrap();
/// ```
pub fn discover(root: impl AsRef<Path>) -> Result<PackageManifest> {
    ManifestDiscovery::new(root).load()
}
