//! PerformanceScorer — turn one subtask's raw outcome into three normalized
//! scores: competency, conformance and reliability.

pub mod competency;
pub mod conformance;
pub mod reliability;

use serde::{Deserialize, Serialize};
use tracing::debug;

use rapport_core::errors::TrustResult;
use rapport_core::models::{InteractionState, SubtaskObservation};

pub use conformance::Conformance;

/// Scores for one subtask.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceScores {
    pub competency: f64,
    pub time_deviation: f64,
    pub response_deviation: f64,
    pub conformance: f64,
    pub reliability: f64,
}

/// Scores subtasks against a collaborator's profile.
pub struct PerformanceScorer;

impl PerformanceScorer {
    /// Score `observation` for the collaborator described by `state`.
    ///
    /// `goal_statuses` is the mission history *including* this subtask's
    /// status; reliability is computed over all of it.
    pub fn score(
        observation: &SubtaskObservation,
        state: &InteractionState,
        goal_statuses: &[bool],
    ) -> TrustResult<PerformanceScores> {
        let competency =
            competency::calculate(observation.role, observation.goal_reached, state.attitude);
        let conformance = conformance::calculate(
            observation.actual_time,
            observation.expected_time,
            &observation.response_times,
            state.expected_response_time,
        );
        let reliability = reliability::calculate(goal_statuses)?;

        debug!(
            role = %observation.role,
            knowledge = observation.role.knowledge(),
            attitude = state.attitude,
            competency,
            time_deviation = conformance.time_deviation,
            response_deviation = conformance.response_deviation,
            conformance = conformance.value,
            reliability,
            "scored subtask"
        );

        Ok(PerformanceScores {
            competency,
            time_deviation: conformance.time_deviation,
            response_deviation: conformance.response_deviation,
            conformance: conformance.value,
            reliability,
        })
    }
}
