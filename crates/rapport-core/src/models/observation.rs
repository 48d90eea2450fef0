//! Raw outcome of one subtask.

use serde::{Deserialize, Serialize};

use super::Role;
use crate::errors::{TrustError, TrustResult};

/// Outcome of a single subtask as reported by the calling agent.
/// Times are in minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtaskObservation {
    pub role: Role,
    pub expected_time: f64,
    pub actual_time: f64,
    /// Human response time for each interaction, in order. May be empty.
    #[serde(default)]
    pub response_times: Vec<f64>,
    pub goal_reached: bool,
    /// Optional free-text label carried into the audit log.
    #[serde(default)]
    pub task: Option<String>,
}

impl SubtaskObservation {
    pub fn new(
        role: Role,
        expected_time: f64,
        response_times: Vec<f64>,
        goal_reached: bool,
        actual_time: f64,
    ) -> Self {
        Self {
            role,
            expected_time,
            actual_time,
            response_times,
            goal_reached,
            task: None,
        }
    }

    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        self.task = Some(task.into());
        self
    }

    /// Reject non-finite times and negative response times.
    pub fn validate(&self) -> TrustResult<()> {
        if !self.expected_time.is_finite() {
            return Err(TrustError::InvalidRange {
                field: "expected_time",
                value: self.expected_time,
                expected: "a finite number of minutes",
            });
        }
        if !self.actual_time.is_finite() {
            return Err(TrustError::InvalidRange {
                field: "actual_time",
                value: self.actual_time,
                expected: "a finite number of minutes",
            });
        }
        if let Some(&bad) = self
            .response_times
            .iter()
            .find(|r| !r.is_finite() || **r < 0.0)
        {
            return Err(TrustError::InvalidRange {
                field: "response_times",
                value: bad,
                expected: "finite and non-negative minutes",
            });
        }
        Ok(())
    }
}
