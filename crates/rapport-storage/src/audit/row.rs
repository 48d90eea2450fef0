use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rapport_core::models::Role;
use rapport_core::traits::{MissionRecord, SubtaskRecord};

/// Separator between response times inside the single CSV column.
const RESPONSE_TIME_SEPARATOR: &str = ";";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditKind {
    Subtask,
    Mission,
}

/// One line of the audit CSV. Subtask-only and mission-only columns are
/// left empty on the other kind of row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRow {
    pub kind: AuditKind,
    pub recorded_at: DateTime<Utc>,
    pub task: Option<String>,
    pub role: Option<Role>,
    pub expected_time: Option<f64>,
    pub actual_time: Option<f64>,
    pub response_times: Option<String>,
    pub goal_reached: Option<bool>,
    pub competency: Option<f64>,
    pub conformance: Option<f64>,
    pub reliability: Option<f64>,
    pub predictor_value: Option<f64>,
    pub experience: Option<String>,
    pub deviation: Option<f64>,
    pub subtasks: Option<usize>,
    pub positive_count: u32,
    pub negative_count: u32,
    pub trust: f64,
    pub distrust: f64,
    pub uncertainty: f64,
    pub kinship: Option<f64>,
    pub missions_worked_together: Option<u32>,
}

impl AuditRow {
    pub fn from_subtask(record: &SubtaskRecord<'_>) -> Self {
        let obs = record.observation;
        let a = record.assessment;
        let response_times = obs
            .response_times
            .iter()
            .map(f64::to_string)
            .collect::<Vec<_>>()
            .join(RESPONSE_TIME_SEPARATOR);

        Self {
            kind: AuditKind::Subtask,
            recorded_at: record.recorded_at,
            task: obs.task.clone(),
            role: Some(obs.role),
            expected_time: Some(obs.expected_time),
            actual_time: Some(obs.actual_time),
            response_times: Some(response_times),
            goal_reached: Some(obs.goal_reached),
            competency: Some(a.competency),
            conformance: Some(a.conformance),
            reliability: Some(a.reliability),
            predictor_value: Some(a.predictor_value),
            experience: Some(a.experience.name().to_string()),
            deviation: Some(a.deviation),
            subtasks: None,
            positive_count: a.positive_count,
            negative_count: a.negative_count,
            trust: a.trust_vector.trust,
            distrust: a.trust_vector.distrust,
            uncertainty: a.trust_vector.uncertainty,
            kinship: a.kinship,
            missions_worked_together: None,
        }
    }

    pub fn from_mission(record: &MissionRecord<'_>) -> Self {
        let s = record.summary;
        Self {
            kind: AuditKind::Mission,
            recorded_at: record.recorded_at,
            task: None,
            role: None,
            expected_time: None,
            actual_time: None,
            response_times: None,
            goal_reached: None,
            competency: None,
            conformance: None,
            reliability: None,
            predictor_value: None,
            experience: None,
            deviation: None,
            subtasks: Some(s.subtasks),
            positive_count: s.positive_count,
            negative_count: s.negative_count,
            trust: s.trust_vector.trust,
            distrust: s.trust_vector.distrust,
            uncertainty: s.trust_vector.uncertainty,
            kinship: Some(s.kinship),
            missions_worked_together: Some(s.missions_worked_together),
        }
    }

    /// Parse the `;`-joined response times back into numbers.
    /// Unparseable entries are skipped.
    pub fn response_time_values(&self) -> Vec<f64> {
        self.response_times
            .as_deref()
            .unwrap_or_default()
            .split(RESPONSE_TIME_SEPARATOR)
            .filter_map(|v| v.trim().parse().ok())
            .collect()
    }
}
