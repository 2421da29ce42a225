//! Discovery and parsing of `package.json` manifests.
//!
//! The build configuration resolver derives its vendor chunk contents from
//! the dependency table of the host project's manifest. This crate owns that
//! lookup: finding the file, parsing the fields the resolver cares about,
//! and exposing dependency names in declaration order.

pub mod discovery;
pub mod error;
pub mod manifest;

pub use discovery::{discover, ManifestDiscovery};
pub use error::{ManifestError, Result};
pub use manifest::{PackageManifest, MANIFEST_FILE};
