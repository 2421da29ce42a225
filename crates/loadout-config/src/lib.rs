//! Environment-conditioned build configuration resolver.
//!
//! One discriminator (`NODE_ENV`) and one dependency manifest go in; a
//! complete, deterministic build configuration comes out. All behavior
//! differences between development, production, and test builds are decided
//! in [`profile::ModeProfile::for_mode`] and assembled by
//! [`config::BuildConfig::resolve_with`].

pub mod build;
pub mod config;
pub mod dev;
pub mod env;
pub mod error;
pub mod profile;
pub mod settings;
pub mod validation;

#[cfg(feature = "logging")]
pub mod logging;

// Re-export main types
pub use build::*;
pub use config::*;
pub use dev::*;
pub use env::*;
pub use error::*;
pub use settings::*;

// Re-export profiles and validation
pub use profile::ModeProfile;
pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
