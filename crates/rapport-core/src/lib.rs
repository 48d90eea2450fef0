//! # rapport-core
//!
//! Foundation crate for the Rapport trust engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::RapportConfig;
pub use errors::{RapportError, RapportResult, TrustError, TrustResult};
pub use models::{
    Experience, InteractionState, MissionAccumulator, Role, StateUpdate, SubtaskAssessment,
    SubtaskObservation, TrustVector,
};
