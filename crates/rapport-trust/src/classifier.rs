//! ExperienceClassifier — fold the three performance scores into a predictor
//! value and judge the subtask a positive or negative experience.
//!
//! Predictor: `(competency + reliability) / 6 + 2 · conformance / 3`
//!
//! Conformance dominates with weight 2/3; competency and reliability share
//! the remaining third. A positive experience always carries deviation 1
//! into kinship. A negative one carries
//! `max(0, predictor - |predictor - threshold| / threshold)`.

use serde::{Deserialize, Serialize};
use tracing::info;

use rapport_core::errors::{TrustError, TrustResult};
use rapport_core::models::Experience;

use crate::scorer::PerformanceScores;

/// Outcome of classifying one subtask.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub experience: Experience,
    pub deviation: f64,
    pub predictor_value: f64,
}

impl Classification {
    pub fn is_positive(&self) -> bool {
        self.experience.is_positive()
    }
}

/// Predictor value combining the three scores.
pub fn predictor_value(competency: f64, conformance: f64, reliability: f64) -> f64 {
    (competency + reliability) / 6.0 + 2.0 * conformance / 3.0
}

/// Classify a subtask against `predictor_threshold`.
///
/// A threshold of exactly 0 is rejected with `DivisionByZero`; setters and
/// config validation keep it in (0, 1], so this only fires on a record that
/// bypassed them.
///
/// # Examples
///
/// ```
/// use rapport_trust::classifier::classify_scores;
///
/// let c = classify_scores(1.0, 0.3083, 0.6667, 0.5).unwrap();
/// assert!(!c.is_positive());
/// assert!((c.deviation - 0.45).abs() < 0.01);
/// ```
pub fn classify_scores(
    competency: f64,
    conformance: f64,
    reliability: f64,
    predictor_threshold: f64,
) -> TrustResult<Classification> {
    if predictor_threshold == 0.0 {
        return Err(TrustError::DivisionByZero {
            field: "predictor_threshold",
        });
    }

    let value = predictor_value(competency, conformance, reliability);

    let classification = if predictor_threshold <= value {
        Classification {
            experience: Experience::Positive,
            deviation: 1.0,
            predictor_value: value,
        }
    } else {
        let distance = (value - predictor_threshold).abs() / predictor_threshold;
        Classification {
            experience: Experience::Negative,
            deviation: (value - distance).max(0.0),
            predictor_value: value,
        }
    };

    info!(
        predictor_value = value,
        predictor_threshold,
        experience = %classification.experience,
        deviation = classification.deviation,
        "classified experience"
    );

    Ok(classification)
}

/// Classify a scored subtask.
pub fn classify(
    scores: &PerformanceScores,
    predictor_threshold: f64,
) -> TrustResult<Classification> {
    classify_scores(
        scores.competency,
        scores.conformance,
        scores.reliability,
        predictor_threshold,
    )
}
