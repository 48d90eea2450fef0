//! Rounding applied to persisted values.

use rapport_core::constants::PERSISTED_DECIMALS;

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Round to the precision trust values are persisted with.
pub fn round_persisted(value: f64) -> f64 {
    round_to(value, PERSISTED_DECIMALS)
}
