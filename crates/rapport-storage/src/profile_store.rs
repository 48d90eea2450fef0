//! YAML-backed profile store: one `<user>.yaml` file per collaborator.
//!
//! A missing profile is created from [`ProfileConfig`] defaults on first
//! load. Updates re-read the file, merge the changed fields and rewrite it
//! through a temporary file, so unrelated fields edited by hand survive.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use rapport_core::config::ProfileConfig;
use rapport_core::errors::{RapportResult, StorageError};
use rapport_core::models::{InteractionState, StateUpdate};
use rapport_core::traits::IStateStore;

use crate::{check_user, io_error};

const PROFILE_EXTENSION: &str = "yaml";

#[derive(Debug, Clone)]
pub struct YamlProfileStore {
    dir: PathBuf,
    defaults: ProfileConfig,
}

impl YamlProfileStore {
    pub fn new(dir: impl Into<PathBuf>, defaults: ProfileConfig) -> Self {
        Self {
            dir: dir.into(),
            defaults,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the profile file for `user`.
    pub fn profile_path(&self, user: &str) -> PathBuf {
        self.dir.join(format!("{user}.{PROFILE_EXTENSION}"))
    }

    fn read(&self, path: &Path) -> Result<InteractionState, StorageError> {
        let content = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
        serde_yaml::from_str(&content).map_err(|e| StorageError::Decode {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn write(&self, user: &str, state: &InteractionState) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|e| io_error(&self.dir, e))?;

        let yaml = serde_yaml::to_string(state).map_err(|e| StorageError::Encode {
            user: user.to_string(),
            message: e.to_string(),
        })?;

        let path = self.profile_path(user);
        let tmp = path.with_extension(format!("{PROFILE_EXTENSION}.tmp"));
        fs::write(&tmp, yaml).map_err(|e| io_error(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| io_error(&path, e))
    }

    fn load_or_create(&self, user: &str) -> Result<InteractionState, StorageError> {
        check_user(user)?;
        let path = self.profile_path(user);
        if path.exists() {
            return self.read(&path);
        }

        let state = self.defaults.initial_state();
        self.write(user, &state)?;
        info!(user, path = %path.display(), "created profile with defaults");
        Ok(state)
    }
}

impl IStateStore for YamlProfileStore {
    fn load(&self, user: &str) -> RapportResult<InteractionState> {
        let state = self.load_or_create(user)?;
        debug!(user, "loaded profile");
        Ok(state)
    }

    fn update(&self, user: &str, update: &StateUpdate) -> RapportResult<()> {
        if update.is_empty() {
            return Ok(());
        }
        let mut state = self.load_or_create(user)?;
        state.apply(update);
        self.write(user, &state)?;
        debug!(user, ?update, "updated profile");
        Ok(())
    }
}
