//! KinshipEstimator — fold a finished mission into the running relationship
//! estimate.
//!
//! ```text
//! avg = Σ status_i · deviation_i / len
//! new = (M · prior + avg) / (M + 1)   when a prior estimate exists
//! new = avg / (M + 1)                 otherwise
//! ```
//!
//! with `M` the number of missions already worked together. Each mission
//! weighs equally over the growing mission count.

use serde::{Deserialize, Serialize};
use tracing::info;

use rapport_core::errors::{TrustError, TrustResult};

use crate::precision::round_persisted;

/// New kinship and the incremented mission counter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinshipUpdate {
    pub kinship: f64,
    pub missions_worked_together: u32,
}

/// Compute the kinship after a mission.
///
/// `goal_statuses` and `deviations` hold one entry per subtask and must be
/// non-empty and of equal length, otherwise `EmptyMission`.
///
/// # Examples
///
/// ```
/// use rapport_trust::update_kinship;
///
/// let update = update_kinship(&[false, true, true], &[1.0, 1.0, 0.45], None, 0).unwrap();
/// assert_eq!(update.kinship, 0.48);
/// assert_eq!(update.missions_worked_together, 1);
/// ```
pub fn update_kinship(
    goal_statuses: &[bool],
    deviations: &[f64],
    prior_kinship: Option<f64>,
    missions_worked_together: u32,
) -> TrustResult<KinshipUpdate> {
    if goal_statuses.is_empty() || goal_statuses.len() != deviations.len() {
        return Err(TrustError::EmptyMission {
            statuses: goal_statuses.len(),
            deviations: deviations.len(),
        });
    }

    let weighted: f64 = goal_statuses
        .iter()
        .zip(deviations)
        .filter(|(reached, _)| **reached)
        .map(|(_, deviation)| *deviation)
        .sum();
    let average = weighted / goal_statuses.len() as f64;

    let missions = f64::from(missions_worked_together);
    let raw = match prior_kinship {
        Some(prior) => (missions * prior) / (missions + 1.0) + average / (missions + 1.0),
        None => average / (missions + 1.0),
    };
    let kinship = round_persisted(raw).clamp(0.0, 1.0);
    let missions_worked_together = missions_worked_together.saturating_add(1);

    info!(
        subtasks = goal_statuses.len(),
        average_deviation = average,
        ?prior_kinship,
        kinship,
        missions_worked_together,
        "updated kinship"
    );

    Ok(KinshipUpdate {
        kinship,
        missions_worked_together,
    })
}
