//! Top-level error aggregating every subsystem error.

use super::error_code::RapportErrorCode;
use super::{ConfigError, StorageError, TrustError};

/// Result alias used across crate boundaries.
pub type RapportResult<T> = Result<T, RapportError>;

/// Errors surfaced by the session layer and the binary.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum RapportError {
    #[error("Trust error: {0}")]
    Trust(#[from] TrustError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl RapportErrorCode for RapportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Trust(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
        }
    }
}
