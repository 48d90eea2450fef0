//! RapportErrorCode trait for callers that need a stable error identifier.

/// Every error enum implements this to provide a structured error code
/// string that survives message rewording.
pub trait RapportErrorCode {
    /// Returns the error code string (e.g., "EMPTY_MISSION").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_ROLE: &str = "INVALID_ROLE";
pub const INVALID_RANGE: &str = "INVALID_RANGE";
pub const UNDEFINED_TRUST: &str = "UNDEFINED_TRUST";
pub const EMPTY_MISSION: &str = "EMPTY_MISSION";
pub const DIVISION_BY_ZERO: &str = "DIVISION_BY_ZERO";
pub const INSUFFICIENT_DATA: &str = "INSUFFICIENT_DATA";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
