//! Top-level Rapport configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ObservabilityConfig, ProfileConfig, StorageConfig};
use crate::errors::ConfigError;

/// Name of the project config file looked up in the working root.
pub const PROJECT_CONFIG_FILE: &str = "rapport.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`RAPPORT_*`)
/// 3. Project config (`rapport.toml` in the root, or an explicit path)
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RapportConfig {
    pub profile: ProfileConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub profile_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub no_audit: bool,
}

impl RapportConfig {
    /// Load configuration with layered resolution.
    ///
    /// When `explicit` is given it must exist; otherwise `rapport.toml` in
    /// `root` is read if present.
    pub fn load(
        root: &Path,
        explicit: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let project = root.join(PROJECT_CONFIG_FILE);
                if project.exists() {
                    Self::from_file(&project)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides_with(|key| std::env::var(key).ok());

        if let Some(cli) = cli_overrides {
            config.apply_cli_overrides(cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let profile = &self.profile;
        let threshold = profile.predictor_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::ValidationFailed {
                field: "profile.predictor_threshold".to_string(),
                message: "must be greater than 0.0 and at most 1.0".to_string(),
            });
        }
        if !(profile.response_time.is_finite() && profile.response_time > 0.0) {
            return Err(ConfigError::ValidationFailed {
                field: "profile.response_time".to_string(),
                message: "must be a positive number of minutes".to_string(),
            });
        }
        if !profile.attitude.is_finite() {
            return Err(ConfigError::ValidationFailed {
                field: "profile.attitude".to_string(),
                message: "must be a finite number".to_string(),
            });
        }
        if let Some(kinship) = profile.initial_kinship {
            if !(0.0..=1.0).contains(&kinship) {
                return Err(ConfigError::ValidationFailed {
                    field: "profile.initial_kinship".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if self.observability.log_level.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides read through `lookup`.
    /// Pattern: `RAPPORT_PROFILE_DIR`, `RAPPORT_DEFAULT_THRESHOLD`, etc.
    /// Unparseable values are ignored.
    pub fn apply_env_overrides_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("RAPPORT_PROFILE_DIR") {
            self.storage.profile_dir = PathBuf::from(val);
        }
        if let Some(v) = lookup("RAPPORT_AUDIT_ENABLED").and_then(|v| v.parse::<bool>().ok()) {
            self.storage.audit_enabled = v;
        }
        if let Some(v) = lookup("RAPPORT_DEFAULT_ATTITUDE").and_then(|v| v.parse::<f64>().ok()) {
            self.profile.attitude = v;
        }
        if let Some(v) =
            lookup("RAPPORT_DEFAULT_RESPONSE_TIME").and_then(|v| v.parse::<f64>().ok())
        {
            self.profile.response_time = v;
        }
        if let Some(v) = lookup("RAPPORT_DEFAULT_THRESHOLD").and_then(|v| v.parse::<f64>().ok()) {
            self.profile.predictor_threshold = v;
        }
        if let Some(val) = lookup("RAPPORT_LOG_LEVEL") {
            self.observability.log_level = val;
        }
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(ref dir) = cli.profile_dir {
            self.storage.profile_dir = dir.clone();
        }
        if let Some(ref level) = cli.log_level {
            self.observability.log_level = level.clone();
        }
        if cli.no_audit {
            self.storage.audit_enabled = false;
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
