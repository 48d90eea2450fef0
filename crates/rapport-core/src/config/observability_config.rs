use serde::{Deserialize, Serialize};

use crate::constants::defaults;

/// Logging configuration consumed by [`crate::tracing::init_tracing`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Level applied to the `rapport` targets when `RAPPORT_LOG` is unset.
    pub log_level: String,
    /// Emit newline-delimited JSON instead of human-readable lines.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            json_logs: false,
        }
    }
}
