//! Beta-density certainty terms via the `statrs` crate.
//!
//! For counts `a, b ≥ 1` the Beta(a, b) density `f` integrates to 1 over
//! [0, 1], so the area where `f > 1` equals the area where `f < 1` and
//!
//! ```text
//! ∫ |f - 1| / 2 = ∫_{f > 1} (f - 1) = F(x₂) - F(x₁) - (x₂ - x₁)
//! ```
//!
//! where `[x₁, x₂]` is the interval on which the unimodal density exceeds 1
//! and `F` is the Beta CDF.

use statrs::distribution::{Beta, Continuous, ContinuousCDF};
use statrs::function::beta::ln_beta;

use rapport_core::errors::{TrustError, TrustResult};

const BISECTION_STEPS: usize = 200;
const BISECTION_TOLERANCE: f64 = 1e-15;

/// The Beta function `Γ(a)Γ(b)/Γ(a+b)`. Underflows to 0 for large counts.
///
/// Both arguments must be positive.
pub fn beta_function(a: f64, b: f64) -> f64 {
    ln_beta(a, b).exp()
}

/// Integral of `|p^(a-1)(1-p)^(b-1) - 1| / 2`, the fallback used when the
/// Beta function is not representable.
///
/// The kernel never exceeds 1 for `a, b ≥ 1`, so the integral is
/// `(1 - B(a, b)) / 2`.
pub fn unnormalized_deviation(beta_fn: f64) -> f64 {
    (1.0 - beta_fn) / 2.0
}

/// Half the L1 distance between Beta(a, b) and Uniform(0, 1), for `a, b ≥ 1`.
///
/// Fails with `InvalidRange` when a shape is not a finite positive number.
pub fn distance_from_uniform(a: f64, b: f64) -> TrustResult<f64> {
    for shape in [a, b] {
        if !(shape.is_finite() && shape > 0.0) {
            return Err(invalid_shape(shape));
        }
    }
    let a_flat = a == 1.0;
    let b_flat = b == 1.0;
    let distance = match (a_flat, b_flat) {
        (true, true) => 0.0,
        (true, false) => {
            // Density b(1-x)^(b-1) is decreasing and above 1 on [0, x).
            let x = 1.0 - b.powf(-1.0 / (b - 1.0));
            let cdf = 1.0 - (1.0 - x).powf(b);
            cdf - x
        }
        (false, true) => {
            // Density a·x^(a-1) is increasing and above 1 on (x, 1].
            let x = a.powf(-1.0 / (a - 1.0));
            x - x.powf(a)
        }
        (false, false) => interior_distance(a, b)?,
    };
    Ok(distance.clamp(0.0, 1.0))
}

/// Both shapes above 1: the density rises from 0, peaks at the mode and
/// falls back to 0, crossing 1 once on each side.
fn interior_distance(a: f64, b: f64) -> TrustResult<f64> {
    let dist = Beta::new(a, b).map_err(|_| invalid_shape(a))?;

    let mode = (a - 1.0) / (a + b - 2.0);
    if dist.ln_pdf(mode) <= 0.0 {
        return Ok(0.0);
    }

    let low = crossing(&dist, 0.0, mode, true);
    let high = crossing(&dist, mode, 1.0, false);

    Ok((dist.cdf(high) - dist.cdf(low)) - (high - low))
}

fn invalid_shape(value: f64) -> TrustError {
    TrustError::InvalidRange {
        field: "beta_shape",
        value,
        expected: "finite and positive experience counts",
    }
}

/// Bisect for `ln f(x) = 0` on `[lo, hi]`. `rising` says whether the
/// density increases across the bracket.
fn crossing(dist: &Beta, mut lo: f64, mut hi: f64, rising: bool) -> f64 {
    for _ in 0..BISECTION_STEPS {
        if hi - lo <= BISECTION_TOLERANCE {
            break;
        }
        let mid = 0.5 * (lo + hi);
        let above = dist.ln_pdf(mid) > 0.0;
        if above == rising {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    0.5 * (lo + hi)
}
