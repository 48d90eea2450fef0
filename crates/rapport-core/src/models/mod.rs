//! Domain models shared by the engine, the stores and the session.

pub mod assessment;
pub mod interaction_state;
pub mod mission;
pub mod observation;
pub mod role;
pub mod trust_vector;

pub use assessment::{Experience, SubtaskAssessment};
pub use interaction_state::{InteractionState, StateUpdate};
pub use mission::{MissionAccumulator, MissionSummary};
pub use observation::SubtaskObservation;
pub use role::Role;
pub use trust_vector::TrustVector;
