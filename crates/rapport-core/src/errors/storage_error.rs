/// Errors from the profile store and the audit log.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("failed to decode profile {path}: {message}")]
    Decode { path: String, message: String },

    #[error("failed to encode profile for {user}: {message}")]
    Encode { user: String, message: String },

    #[error("audit write failed for {user}: {message}")]
    AuditWrite { user: String, message: String },

    #[error("invalid user name {user:?}: {reason}")]
    InvalidUser { user: String, reason: String },
}

impl super::RapportErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        super::error_code::STORAGE_ERROR
    }
}
