//! Belief about a collaborator: trust, distrust and uncertainty.

use serde::{Deserialize, Serialize};

use crate::constants::VECTOR_SUM_TOLERANCE;

/// The triple (trust, distrust, uncertainty).
///
/// Once any experience has been recorded the three values sum to 1 within
/// rounding tolerance. Before that all three are 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrustVector {
    pub trust: f64,
    pub distrust: f64,
    pub uncertainty: f64,
}

impl TrustVector {
    pub fn new(trust: f64, distrust: f64, uncertainty: f64) -> Self {
        Self {
            trust,
            distrust,
            uncertainty,
        }
    }

    /// True when neither trust nor distrust carries any weight.
    pub fn is_unformed(&self) -> bool {
        self.trust == 0.0 && self.distrust == 0.0
    }

    pub fn sum(&self) -> f64 {
        self.trust + self.distrust + self.uncertainty
    }

    /// Whether the components sum to 1 within rounding tolerance.
    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() <= VECTOR_SUM_TOLERANCE
    }
}
