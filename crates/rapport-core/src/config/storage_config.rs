use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::defaults;

/// Where profiles and audit logs live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding one `<user>.yaml` profile per collaborator.
    pub profile_dir: PathBuf,
    /// Whether subtask and mission rows are appended to the audit log.
    pub audit_enabled: bool,
    /// Suffix appended to the user name to form the audit file name.
    pub audit_suffix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            profile_dir: PathBuf::from(defaults::DEFAULT_PROFILE_DIR),
            audit_enabled: true,
            audit_suffix: defaults::DEFAULT_AUDIT_SUFFIX.to_string(),
        }
    }
}
