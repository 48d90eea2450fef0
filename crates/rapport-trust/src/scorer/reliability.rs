use rapport_core::errors::{TrustError, TrustResult};

/// Reliability over every goal status seen so far in the mission.
///
/// `0` when no goal was reached, `1` when every goal was reached, otherwise
/// `1 - s²` with `s²` the unbiased sample variance of the 0/1 statuses.
pub fn calculate(goal_statuses: &[bool]) -> TrustResult<f64> {
    if goal_statuses.is_empty() {
        return Err(TrustError::InsufficientData {
            what: "reliability needs at least one goal status",
        });
    }
    if goal_statuses.iter().all(|&reached| !reached) {
        return Ok(0.0);
    }
    if goal_statuses.iter().all(|&reached| reached) {
        return Ok(1.0);
    }
    Ok(1.0 - sample_variance(goal_statuses))
}

/// Unbiased (n-1) variance of 0/1 values. Requires at least two values.
fn sample_variance(values: &[bool]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().filter(|&&v| v).count() as f64 / n;
    let squared: f64 = values
        .iter()
        .map(|&v| {
            let x = if v { 1.0 } else { 0.0 };
            (x - mean).powi(2)
        })
        .sum();
    squared / (n - 1.0)
}
