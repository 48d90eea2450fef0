//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Initialize the Rapport tracing/logging system.
///
/// Reads the `RAPPORT_LOG` environment variable for per-target log levels.
/// Format: `RAPPORT_LOG=rapport_trust=debug,rapport_storage=warn`
///
/// Falls back to `rapport=<log_level>` from the config if `RAPPORT_LOG` is
/// not set or is invalid. Logs go to stderr so command output stays clean.
///
/// This function is idempotent: only the first call installs a subscriber.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("RAPPORT_LOG")
            .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.log_level)));

        let registry = tracing_subscriber::registry().with(filter);
        if config.json_logs {
            registry
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}

/// Filter directives applying `level` to every rapport crate.
pub fn default_directives(level: &str) -> String {
    [
        "rapport",
        "rapport_core",
        "rapport_trust",
        "rapport_storage",
        "rapport_session",
    ]
    .iter()
    .map(|target| format!("{target}={level}"))
    .collect::<Vec<_>>()
    .join(",")
}
