//! InteractionSession: compute, persist, then commit.
//!
//! Every mutating operation computes its full result first, hands the
//! changed fields to the [`IStateStore`], and only touches the in-memory
//! record once the store accepted them. A failed call leaves both the stored
//! and the in-memory state as they were.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use rapport_core::errors::RapportResult;
use rapport_core::models::{
    InteractionState, MissionAccumulator, MissionSummary, StateUpdate, SubtaskAssessment,
    SubtaskObservation, TrustVector,
};
use rapport_core::traits::{IAuditSink, IStateStore, MissionRecord, SubtaskRecord};
use rapport_trust::pipeline::state_update;
use rapport_trust::{cooperation_probability, evaluate_subtask, update_kinship};

use crate::profile::ProfileUpdate;

pub struct InteractionSession {
    user: String,
    store: Arc<dyn IStateStore>,
    audit: Arc<dyn IAuditSink>,
    state: InteractionState,
    mission: MissionAccumulator,
}

impl std::fmt::Debug for InteractionSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionSession")
            .field("user", &self.user)
            .field("state", &self.state)
            .field("mission", &self.mission)
            .finish_non_exhaustive()
    }
}

impl InteractionSession {
    /// Load `user`'s record (creating it with defaults if needed) and start
    /// an empty mission.
    #[instrument(skip(store, audit))]
    pub fn open(
        user: &str,
        store: Arc<dyn IStateStore>,
        audit: Arc<dyn IAuditSink>,
    ) -> RapportResult<Self> {
        let state = store.load(user)?;
        info!(
            positive_count = state.positive_count,
            negative_count = state.negative_count,
            missions_worked_together = state.missions_worked_together,
            "opened session"
        );
        Ok(Self {
            user: user.to_string(),
            store,
            audit,
            state,
            mission: MissionAccumulator::new(),
        })
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn trust_vector(&self) -> TrustVector {
        self.state.trust_vector()
    }

    /// Outcomes recorded so far in the current mission.
    pub fn mission(&self) -> &MissionAccumulator {
        &self.mission
    }

    /// Expected human response time in minutes. Must be finite and positive.
    pub fn set_response_time(&mut self, minutes: f64) -> RapportResult<()> {
        self.update_profile(&ProfileUpdate {
            response_time: Some(minutes),
            ..ProfileUpdate::default()
        })
    }

    pub fn set_attitude(&mut self, attitude: f64) -> RapportResult<()> {
        self.update_profile(&ProfileUpdate {
            attitude: Some(attitude),
            ..ProfileUpdate::default()
        })
    }

    /// Seed the relationship estimate. Must lie in [0, 1].
    pub fn set_initial_kinship(&mut self, kinship: f64) -> RapportResult<()> {
        self.update_profile(&ProfileUpdate {
            initial_kinship: Some(kinship),
            ..ProfileUpdate::default()
        })
    }

    /// Positive/negative decision boundary. Must lie in (0, 1].
    pub fn set_predictor_threshold(&mut self, threshold: f64) -> RapportResult<()> {
        self.update_profile(&ProfileUpdate {
            predictor_threshold: Some(threshold),
            ..ProfileUpdate::default()
        })
    }

    /// Overwrite one or both experience tallies, e.g. to import history.
    /// The trust vector is left as it is until the next subtask.
    pub fn set_experience_counts(
        &mut self,
        positive: Option<u32>,
        negative: Option<u32>,
    ) -> RapportResult<()> {
        self.update_profile(&ProfileUpdate {
            positive_count: positive,
            negative_count: negative,
            ..ProfileUpdate::default()
        })
    }

    /// Validate every value in `update`, then persist them in one write.
    /// A rejected value leaves the profile untouched.
    #[instrument(skip(self), fields(user = %self.user))]
    pub fn update_profile(&mut self, update: &ProfileUpdate) -> RapportResult<()> {
        update.validate()?;
        self.commit(update.state_update())?;
        debug!("updated profile values");
        Ok(())
    }

    /// Evaluate one subtask, persist the new counts and trust vector, and
    /// add its outcome to the current mission.
    #[instrument(skip(self, observation), fields(user = %self.user, role = %observation.role))]
    pub fn record_subtask(
        &mut self,
        observation: SubtaskObservation,
    ) -> RapportResult<SubtaskAssessment> {
        let assessment = evaluate_subtask(&self.state, self.mission.goal_statuses(), &observation)?;

        self.commit(state_update(&assessment))?;
        self.mission.push(assessment.goal_reached, assessment.deviation);

        let record = SubtaskRecord {
            recorded_at: Utc::now(),
            observation: &observation,
            assessment: &assessment,
        };
        if let Err(err) = self.audit.record_subtask(&self.user, &record) {
            warn!(error = %err, "failed to audit subtask");
        }

        info!(
            experience = %assessment.experience,
            predictor_value = assessment.predictor_value,
            subtasks_in_mission = self.mission.len(),
            "recorded subtask"
        );
        Ok(assessment)
    }

    /// Fold the current mission into kinship, bump the mission counter and
    /// start a new mission. Fails with `EmptyMission` if nothing was
    /// recorded.
    #[instrument(skip(self), fields(user = %self.user))]
    pub fn finalize_mission(&mut self) -> RapportResult<f64> {
        let update = update_kinship(
            self.mission.goal_statuses(),
            self.mission.deviations(),
            self.state.kinship,
            self.state.missions_worked_together,
        )?;

        self.commit(StateUpdate {
            kinship: Some(update.kinship),
            missions_worked_together: Some(update.missions_worked_together),
            ..StateUpdate::default()
        })?;

        let summary = MissionSummary {
            subtasks: self.mission.len(),
            kinship: update.kinship,
            missions_worked_together: update.missions_worked_together,
            positive_count: self.state.positive_count,
            negative_count: self.state.negative_count,
            trust_vector: self.state.trust_vector(),
        };
        self.mission.reset();

        let record = MissionRecord {
            recorded_at: Utc::now(),
            summary: &summary,
        };
        if let Err(err) = self.audit.record_mission(&self.user, &record) {
            warn!(error = %err, "failed to audit mission");
        }

        info!(
            kinship = summary.kinship,
            missions_worked_together = summary.missions_worked_together,
            "finalized mission"
        );
        Ok(update.kinship)
    }

    /// Probability that the agent should cooperate with this collaborator.
    pub fn cooperation_probability(&self) -> f64 {
        cooperation_probability(&self.state.trust_vector())
    }

    fn commit(&mut self, update: StateUpdate) -> RapportResult<()> {
        self.store.update(&self.user, &update)?;
        self.state.apply(&update);
        Ok(())
    }
}
