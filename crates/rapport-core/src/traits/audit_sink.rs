use chrono::{DateTime, Utc};

use crate::errors::RapportResult;
use crate::models::{MissionSummary, SubtaskAssessment, SubtaskObservation};

/// A subtask row: the raw observation and everything derived from it.
#[derive(Debug, Clone)]
pub struct SubtaskRecord<'a> {
    pub recorded_at: DateTime<Utc>,
    pub observation: &'a SubtaskObservation,
    pub assessment: &'a SubtaskAssessment,
}

/// A mission summary row.
#[derive(Debug, Clone)]
pub struct MissionRecord<'a> {
    pub recorded_at: DateTime<Utc>,
    pub summary: &'a MissionSummary,
}

/// Append-only sink for the audit trail.
pub trait IAuditSink: Send + Sync {
    fn record_subtask(&self, user: &str, record: &SubtaskRecord<'_>) -> RapportResult<()>;
    fn record_mission(&self, user: &str, record: &MissionRecord<'_>) -> RapportResult<()>;
}
