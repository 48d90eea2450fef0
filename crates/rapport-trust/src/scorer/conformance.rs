use rapport_core::constants::{CONFORMANCE_RESPONSE_WEIGHT, CONFORMANCE_TIME_WEIGHT};

/// Conformance with its two sub-measures, kept for observability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conformance {
    /// Time-to-goal deviation `dt`.
    pub time_deviation: f64,
    /// Mean response-time ratio `dr`.
    pub response_deviation: f64,
    /// `3·dt/4 + dr/4`.
    pub value: f64,
}

/// Conformance of the human to the expected timing of a subtask.
///
/// Time is weighted three times more than responsiveness.
pub fn calculate(
    actual_time: f64,
    expected_time: f64,
    response_times: &[f64],
    expected_response_time: f64,
) -> Conformance {
    let time_deviation = time_to_goal(actual_time, expected_time);
    let response_deviation = response_time(response_times, expected_response_time);
    Conformance {
        time_deviation,
        response_deviation,
        value: CONFORMANCE_TIME_WEIGHT * time_deviation
            + CONFORMANCE_RESPONSE_WEIGHT * response_deviation,
    }
}

/// `0` when no time was expected, `1` when on time, otherwise the relative
/// overrun subtracted from 1 and floored at 0.
pub fn time_to_goal(actual: f64, expected: f64) -> f64 {
    if expected <= 0.0 {
        return 0.0;
    }
    overrun_ratio(actual, expected)
}

/// Mean per-interaction ratio, or 0 when there were no interactions.
///
/// `expected` must be positive; profile setters and config validation
/// guarantee it.
pub fn response_time(response_times: &[f64], expected: f64) -> f64 {
    if response_times.is_empty() {
        return 0.0;
    }
    let total: f64 = response_times
        .iter()
        .map(|&r| overrun_ratio(r, expected))
        .sum();
    total / response_times.len() as f64
}

fn overrun_ratio(actual: f64, expected: f64) -> f64 {
    if actual <= expected {
        1.0
    } else {
        (1.0 - (actual - expected).abs() / expected).max(0.0)
    }
}
