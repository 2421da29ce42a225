use serde::{Deserialize, Serialize};

use crate::build::helpers::default_true;

/// Build report verbosity.
///
/// Chunk-level detail is noisy during watch rebuilds, so development keeps
/// it off while production and test report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsOptions {
    /// Colorize report output
    #[serde(default = "default_true")]
    pub colors: bool,

    /// Print the build fingerprint
    #[serde(default)]
    pub hash: bool,

    /// Print per-phase timing information
    #[serde(default = "default_true")]
    pub timings: bool,

    /// List emitted chunks
    #[serde(default)]
    pub chunks: bool,

    /// List the modules inside each chunk
    #[serde(default)]
    pub chunk_modules: bool,

    /// List every module in the build
    #[serde(default)]
    pub modules: bool,
}

impl StatsOptions {
    /// Reporting preset with chunk-level detail toggled as a unit
    pub fn with_chunk_display(chunks: bool) -> Self {
        Self {
            colors: true,
            hash: false,
            timings: true,
            chunks,
            chunk_modules: chunks,
            modules: false,
        }
    }
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self::with_chunk_display(false)
    }
}
