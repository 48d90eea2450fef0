//! Per-collaborator record persisted across missions.

use serde::{Deserialize, Serialize};

use super::TrustVector;
use crate::constants::defaults;

/// Everything the engine knows about one human collaborator.
///
/// Field names on disk follow the profile format: `response_time`,
/// `positive_exp_count`, `negative_exp_count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionState {
    pub attitude: f64,
    #[serde(rename = "response_time")]
    pub expected_response_time: f64,
    pub predictor_threshold: f64,
    /// `None` means no relationship estimate exists yet.
    #[serde(default)]
    pub kinship: Option<f64>,
    #[serde(rename = "positive_exp_count")]
    pub positive_count: u32,
    #[serde(rename = "negative_exp_count")]
    pub negative_count: u32,
    pub missions_worked_together: u32,
    pub trust: f64,
    pub distrust: f64,
    pub uncertainty: f64,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            attitude: defaults::DEFAULT_ATTITUDE,
            expected_response_time: defaults::DEFAULT_RESPONSE_TIME,
            predictor_threshold: defaults::DEFAULT_PREDICTOR_THRESHOLD,
            kinship: None,
            positive_count: 0,
            negative_count: 0,
            missions_worked_together: 0,
            trust: 0.0,
            distrust: 0.0,
            uncertainty: 0.0,
        }
    }
}

impl InteractionState {
    pub fn trust_vector(&self) -> TrustVector {
        TrustVector::new(self.trust, self.distrust, self.uncertainty)
    }

    /// Whether any experience, positive or negative, has been recorded.
    pub fn has_experience(&self) -> bool {
        self.positive_count > 0 || self.negative_count > 0
    }

    /// Merge the fields present in `update` into this record.
    pub fn apply(&mut self, update: &StateUpdate) {
        if let Some(v) = update.attitude {
            self.attitude = v;
        }
        if let Some(v) = update.expected_response_time {
            self.expected_response_time = v;
        }
        if let Some(v) = update.predictor_threshold {
            self.predictor_threshold = v;
        }
        if let Some(v) = update.kinship {
            self.kinship = Some(v);
        }
        if let Some(v) = update.positive_count {
            self.positive_count = v;
        }
        if let Some(v) = update.negative_count {
            self.negative_count = v;
        }
        if let Some(v) = update.missions_worked_together {
            self.missions_worked_together = v;
        }
        if let Some(vector) = update.trust_vector {
            self.trust = vector.trust;
            self.distrust = vector.distrust;
            self.uncertainty = vector.uncertainty;
        }
    }
}

/// Partial update of an [`InteractionState`]. Only `Some` fields change.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StateUpdate {
    pub attitude: Option<f64>,
    pub expected_response_time: Option<f64>,
    pub predictor_threshold: Option<f64>,
    pub kinship: Option<f64>,
    pub positive_count: Option<u32>,
    pub negative_count: Option<u32>,
    pub missions_worked_together: Option<u32>,
    pub trust_vector: Option<TrustVector>,
}

impl StateUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
