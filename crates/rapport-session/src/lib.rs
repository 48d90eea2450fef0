//! # rapport-session
//!
//! [`InteractionSession`] is the surface an agent talks to: it loads a
//! collaborator's record, runs each subtask through the trust engine,
//! persists the result and keeps the current mission's outcomes until the
//! mission is finalized.
//!
//! At most one session per user may be open at a time. The stores do not
//! serialize concurrent writers.

pub mod builder;
pub mod profile;
pub mod session;

pub use builder::open_session;
pub use profile::ProfileUpdate;
pub use session::InteractionSession;
