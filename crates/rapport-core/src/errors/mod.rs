//! Error handling for Rapport.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod rapport_error;
pub mod storage_error;
pub mod trust_error;

pub use config_error::ConfigError;
pub use error_code::RapportErrorCode;
pub use rapport_error::{RapportError, RapportResult};
pub use storage_error::StorageError;
pub use trust_error::{TrustError, TrustResult};
