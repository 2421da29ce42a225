//! Development server configuration types.

use serde::{Deserialize, Serialize};

use crate::build::helpers::{default_host, default_port, default_public_path, default_true};
use crate::build::StatsOptions;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevServerOptions {
    /// Bind address; 0.0.0.0 keeps the server reachable from other devices
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// URL prefix the served bundles are addressed under
    #[serde(default = "default_public_path")]
    pub public_path: String,

    /// Enable hot module swapping
    #[serde(default = "default_true")]
    pub hot: bool,

    /// Serve the index page for unknown paths (client-side routing)
    #[serde(default = "default_true")]
    pub history_api_fallback: bool,

    /// Report verbosity for rebuilds
    #[serde(default)]
    pub stats: StatsOptions,
}

impl Default for DevServerOptions {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_path: default_public_path(),
            hot: true,
            history_api_fallback: true,
            stats: StatsOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_all_interfaces() {
        let dev = DevServerOptions::default();
        assert_eq!(dev.host, "0.0.0.0");
        assert_eq!(dev.port, 4000);
        assert_eq!(dev.public_path, "/");
        assert!(dev.hot);
        assert!(dev.history_api_fallback);
    }
}
