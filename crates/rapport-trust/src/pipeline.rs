//! Full per-subtask evaluation: score, classify, count, update the vector.
//!
//! Nothing here mutates the caller's state. The session persists the
//! returned [`StateUpdate`] and only then commits it, so a failure at any
//! step leaves the stored record untouched.

use tracing::debug;

use rapport_core::errors::TrustResult;
use rapport_core::models::{
    Experience, InteractionState, StateUpdate, SubtaskAssessment, SubtaskObservation,
};

use crate::classifier::classify;
use crate::scorer::PerformanceScorer;
use crate::vector::update_trust_vector;

/// Evaluate one subtask for the collaborator described by `state`.
///
/// `mission_statuses` holds the goal statuses of the subtasks already
/// recorded in the current mission; this subtask's status is appended before
/// reliability is computed.
pub fn evaluate_subtask(
    state: &InteractionState,
    mission_statuses: &[bool],
    observation: &SubtaskObservation,
) -> TrustResult<SubtaskAssessment> {
    observation.validate()?;

    let mut statuses = Vec::with_capacity(mission_statuses.len() + 1);
    statuses.extend_from_slice(mission_statuses);
    statuses.push(observation.goal_reached);

    let scores = PerformanceScorer::score(observation, state, &statuses)?;
    let classification = classify(&scores, state.predictor_threshold)?;

    let (positive_count, negative_count) = match classification.experience {
        Experience::Positive => (state.positive_count.saturating_add(1), state.negative_count),
        Experience::Negative => (state.positive_count, state.negative_count.saturating_add(1)),
    };

    let trust_vector = update_trust_vector(positive_count, negative_count, state.kinship)?;

    debug!(
        subtask_index = statuses.len(),
        positive_count,
        negative_count,
        "evaluated subtask"
    );

    Ok(SubtaskAssessment {
        role: observation.role,
        goal_reached: observation.goal_reached,
        competency: scores.competency,
        time_deviation: scores.time_deviation,
        response_deviation: scores.response_deviation,
        conformance: scores.conformance,
        reliability: scores.reliability,
        predictor_value: classification.predictor_value,
        experience: classification.experience,
        deviation: classification.deviation,
        positive_count,
        negative_count,
        trust_vector,
        kinship: state.kinship,
    })
}

/// The persisted fields an assessment changes.
pub fn state_update(assessment: &SubtaskAssessment) -> StateUpdate {
    StateUpdate {
        positive_count: Some(assessment.positive_count),
        negative_count: Some(assessment.negative_count),
        trust_vector: Some(assessment.trust_vector),
        ..StateUpdate::default()
    }
}
