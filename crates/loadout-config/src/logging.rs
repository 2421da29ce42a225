//! Subscriber setup behind the `logging` cargo feature.
//!
//! Library code only emits `tracing` events and never installs a
//! subscriber. Embedders that want the resolver's diagnostics on stderr
//! call [`init_logging_from_env`] (or [`init_logging`]) once at startup;
//! everyone else wires up `tracing` themselves and ignores this module.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the diagnostic level, e.g. `LOADOUT_LOG=debug`.
pub const LOG_ENV: &str = "LOADOUT_LOG";

static INIT: Once = Once::new();

/// Filter level for the resolver's diagnostic stream.
///
/// Resolution decisions (mode fallback, manifest discovery, settings
/// layering) are recorded at debug level, so [`LogLevel::Debug`] is the
/// level that surfaces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Drop all output
    Silent,
    /// Failures only
    Error,
    /// Failures and high-level progress (default)
    #[default]
    Info,
    /// Everything, including resolution decisions
    Debug,
}

impl LogLevel {
    /// Resolve a raw [`LOG_ENV`] value to a level.
    ///
    /// Absent or unrecognized values fall back to [`Info`]. Matching is
    /// case-sensitive, like [`EnvironmentMode::resolve`].
    ///
    /// [`Info`]: LogLevel::Info
    /// [`EnvironmentMode::resolve`]: crate::env::EnvironmentMode::resolve
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            Some("silent" | "off") => LogLevel::Silent,
            Some("error") => LogLevel::Error,
            Some("debug") => LogLevel::Debug,
            _ => LogLevel::Info,
        }
    }

    /// Directive string understood by [`EnvFilter`].
    fn directive(self) -> &'static str {
        match self {
            LogLevel::Silent => "off",
            LogLevel::Error => "error",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.directive())
    }
}

/// Install a global subscriber filtered at exactly `level`.
///
/// The environment is not consulted; use [`init_logging_from_env`] to
/// honor `RUST_LOG` and [`LOG_ENV`]. Only the first initialization call
/// in a process takes effect, later ones are no-ops.
///
/// # Example
///
/// ```no_run
/// use loadout_config::logging::{init_logging, LogLevel};
///
/// init_logging(LogLevel::Debug);
/// ```
pub fn init_logging(level: LogLevel) {
    init_with_filter(EnvFilter::new(level.directive()));
}

/// Install a global subscriber configured from the environment.
///
/// `RUST_LOG` directives win when set. Otherwise the level named by
/// [`LOG_ENV`] applies, falling back to [`LogLevel::Info`].
///
/// # Example
///
/// ```no_run
/// loadout_config::logging::init_logging_from_env();
/// ```
pub fn init_logging_from_env() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = LogLevel::resolve(std::env::var(LOG_ENV).ok().as_deref());
        EnvFilter::new(level.directive())
    });
    init_with_filter(filter);
}

// Diagnostics go to stderr; stdout stays free for the resolved
// configuration.
fn init_with_filter(filter: EnvFilter) {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    });
}
