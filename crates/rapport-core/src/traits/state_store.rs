use crate::errors::RapportResult;
use crate::models::{InteractionState, StateUpdate};

/// Durable per-user state record.
///
/// Implementations are not required to serialize concurrent writers for the
/// same user: callers must run at most one session per user at a time.
pub trait IStateStore: Send + Sync {
    /// Load the record for `user`, creating it with defaults on first use.
    fn load(&self, user: &str) -> RapportResult<InteractionState>;

    /// Persist the fields present in `update`, leaving the rest untouched.
    fn update(&self, user: &str, update: &StateUpdate) -> RapportResult<()>;
}
