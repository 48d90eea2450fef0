//! Per-mission accumulation of subtask outcomes.

use serde::{Deserialize, Serialize};

use super::TrustVector;

/// Goal statuses and deviations of the subtasks processed so far in the
/// current mission, one pair per subtask.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MissionAccumulator {
    goal_statuses: Vec<bool>,
    deviations: Vec<f64>,
}

impl MissionAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, goal_reached: bool, deviation: f64) {
        self.goal_statuses.push(goal_reached);
        self.deviations.push(deviation);
    }

    pub fn goal_statuses(&self) -> &[bool] {
        &self.goal_statuses
    }

    pub fn deviations(&self) -> &[f64] {
        &self.deviations
    }

    pub fn len(&self) -> usize {
        self.goal_statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goal_statuses.is_empty()
    }

    pub fn reset(&mut self) {
        self.goal_statuses.clear();
        self.deviations.clear();
    }
}

/// State of a relationship right after a mission was finalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionSummary {
    pub subtasks: usize,
    pub kinship: f64,
    pub missions_worked_together: u32,
    pub positive_count: u32,
    pub negative_count: u32,
    pub trust_vector: TrustVector,
}
