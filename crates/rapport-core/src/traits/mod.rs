//! Seams between the session and its external collaborators.

pub mod audit_sink;
pub mod state_store;

pub use audit_sink::{IAuditSink, MissionRecord, SubtaskRecord};
pub use state_store::IStateStore;
