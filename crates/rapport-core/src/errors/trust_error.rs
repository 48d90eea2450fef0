//! Errors raised by the trust computation engine and its input validation.

use super::error_code::{self, RapportErrorCode};

/// Result alias for engine operations.
pub type TrustResult<T> = Result<T, TrustError>;

/// Contract violations and invalid inputs of the trust engine.
///
/// `InvalidRole` and `InvalidRange` are rejected at the call that introduced
/// the bad value. `UndefinedTrust` and `EmptyMission` mean the caller asked
/// for a result before any evidence existed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrustError {
    #[error("invalid role {value:?}: expected 1 (monitor), 2 (collaborator) or 3 (validator)")]
    InvalidRole { value: String },

    #[error("{field} = {value} is out of range, expected {expected}")]
    InvalidRange {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("trust is undefined: both experience counts are zero")]
    UndefinedTrust,

    #[error("cannot finalize mission: {statuses} goal statuses and {deviations} deviations recorded")]
    EmptyMission { statuses: usize, deviations: usize },

    #[error("division by zero: {field} is 0")]
    DivisionByZero { field: &'static str },

    #[error("insufficient data: {what}")]
    InsufficientData { what: &'static str },
}

impl RapportErrorCode for TrustError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRole { .. } => error_code::INVALID_ROLE,
            Self::InvalidRange { .. } => error_code::INVALID_RANGE,
            Self::UndefinedTrust => error_code::UNDEFINED_TRUST,
            Self::EmptyMission { .. } => error_code::EMPTY_MISSION,
            Self::DivisionByZero { .. } => error_code::DIVISION_BY_ZERO,
            Self::InsufficientData { .. } => error_code::INSUFFICIENT_DATA,
        }
    }
}
