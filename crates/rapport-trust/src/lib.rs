//! # rapport-trust
//!
//! The trust computation engine. Every function here is a pure numeric
//! computation over its arguments: no I/O, no hidden state.
//!
//! Per subtask: [`scorer`] → [`classifier`] → [`vector`] → [`cooperation`].
//! Per mission: [`kinship`] folds the accumulated (status, deviation) pairs
//! into the relationship estimate used by the next mission.
//!
//! ## Modules
//!
//! - [`scorer`] — competency, conformance, reliability
//! - [`classifier`] — predictor value and positive/negative experience
//! - [`certainty`] — Beta-shaped certainty over experience counts
//! - [`vector`] — trust, distrust, uncertainty
//! - [`kinship`] — cross-mission relationship estimate
//! - [`cooperation`] — cooperation probability policy
//! - [`pipeline`] — the full per-subtask evaluation

pub mod certainty;
pub mod classifier;
pub mod cooperation;
pub mod kinship;
pub mod pipeline;
pub mod precision;
pub mod scorer;
pub mod vector;

pub use certainty::certainty;
pub use classifier::{classify, Classification};
pub use cooperation::cooperation_probability;
pub use kinship::{update_kinship, KinshipUpdate};
pub use pipeline::evaluate_subtask;
pub use scorer::{Conformance, PerformanceScorer, PerformanceScores};
pub use vector::update_trust_vector;
