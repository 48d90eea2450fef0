//! # rapport-storage
//!
//! External collaborators of the trust engine:
//!
//! - [`profile_store`]: one YAML profile per collaborator
//! - [`audit`]: append-only CSV audit trail
//! - [`memory`]: in-memory implementations for tests and embedding

pub mod audit;
pub mod memory;
pub mod profile_store;

use std::path::{Component, Path};

use rapport_core::errors::StorageError;

pub use audit::{AuditKind, AuditRow, CsvAuditSink, NullAuditSink};
pub use memory::{InMemoryAuditSink, InMemoryStateStore};
pub use profile_store::YamlProfileStore;

/// User names become file names; reject anything that could escape the
/// storage directory.
pub(crate) fn check_user(user: &str) -> Result<(), StorageError> {
    let invalid = |reason: &str| StorageError::InvalidUser {
        user: user.to_string(),
        reason: reason.to_string(),
    };
    if user.trim().is_empty() {
        return Err(invalid("must not be empty"));
    }
    let mut components = Path::new(user).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(invalid("must be a plain file name")),
    }
}

pub(crate) fn io_error(path: &Path, err: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}
