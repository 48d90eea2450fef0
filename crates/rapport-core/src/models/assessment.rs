//! Everything derived from one subtask, exposed for callers and the audit log.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Role, TrustVector};

/// Whether a subtask counted as a positive or a negative experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Experience {
    Positive,
    Negative,
}

impl Experience {
    pub fn is_positive(&self) -> bool {
        matches!(self, Self::Positive)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Intermediate scores and resulting belief for one recorded subtask.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtaskAssessment {
    pub role: Role,
    pub goal_reached: bool,
    pub competency: f64,
    /// Time-to-goal sub-measure of conformance.
    pub time_deviation: f64,
    /// Responsiveness sub-measure of conformance.
    pub response_deviation: f64,
    pub conformance: f64,
    pub reliability: f64,
    pub predictor_value: f64,
    pub experience: Experience,
    pub deviation: f64,
    pub positive_count: u32,
    pub negative_count: u32,
    pub trust_vector: TrustVector,
    /// Kinship that weighted the trust vector, if any.
    pub kinship: Option<f64>,
}
