//! Certainty — how far the belief over a collaborator's positive-experience
//! rate has moved away from "anything is equally likely".
//!
//! Certainty is `∫₀¹ g(p) dp` where `g` depends on which counts are nonzero:
//!
//! | positive | negative | g(p) |
//! |---|---|---|
//! | > 0 | > 0 | `|p^(P-1)(1-p)^(N-1) / B(P,N) - 1| / 2` |
//! | 0 | > 0 | `|(1-p)^(N-1) - 1|` |
//! | > 0 | 0 | `|p^(P-1) - 1|` |
//! | 0 | 0 | undefined |
//!
//! The one-sided integrands are polynomials and integrate exactly to
//! `1 - 1/k`. The two-sided integrand is half the L1 distance between the
//! Beta(P, N) density and the uniform density, which [`beta`] evaluates from
//! the Beta CDF. When `B(P, N)` underflows to 0 the unnormalized kernel is
//! used instead, as the table's fallback row prescribes.

pub mod beta;

use tracing::debug;

use rapport_core::errors::{TrustError, TrustResult};

/// Which integrand applies to a pair of counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertaintyBranch {
    /// Both counts nonzero; the Beta function is representable.
    TwoSided,
    /// Both counts nonzero but `B(P, N)` underflowed to 0.
    Unnormalized,
    /// Only negative experience.
    NegativeOnly,
    /// Only positive experience.
    PositiveOnly,
}

/// Certainty for `positive_count` positive and `negative_count` negative
/// experiences. Fails with `UndefinedTrust` when both are zero.
///
/// # Examples
///
/// ```
/// use rapport_trust::certainty;
///
/// assert_eq!(certainty(1, 0).unwrap(), 0.0);
/// assert!((certainty(2, 0).unwrap() - 0.5).abs() < 1e-12);
/// assert!((certainty(2, 1).unwrap() - 0.25).abs() < 1e-9);
/// assert!(certainty(0, 0).is_err());
/// ```
pub fn certainty(positive_count: u32, negative_count: u32) -> TrustResult<f64> {
    let (branch, value) = match (positive_count, negative_count) {
        (0, 0) => return Err(TrustError::UndefinedTrust),
        (0, n) => (CertaintyBranch::NegativeOnly, one_sided(n)),
        (p, 0) => (CertaintyBranch::PositiveOnly, one_sided(p)),
        (p, n) => {
            let (a, b) = (f64::from(p), f64::from(n));
            let beta_fn = beta::beta_function(a, b);
            if beta_fn == 0.0 {
                (
                    CertaintyBranch::Unnormalized,
                    beta::unnormalized_deviation(beta_fn),
                )
            } else {
                (CertaintyBranch::TwoSided, beta::distance_from_uniform(a, b)?)
            }
        }
    };

    debug!(
        positive_count,
        negative_count,
        ?branch,
        certainty = value,
        "computed certainty"
    );
    Ok(value)
}

/// `∫₀¹ |x^(k-1) - 1| dx = 1 - 1/k` for `k ≥ 1`.
fn one_sided(count: u32) -> f64 {
    1.0 - 1.0 / f64::from(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Midpoint-rule reference for the tabulated integrands.
    fn reference(p: u32, n: u32, steps: usize) -> f64 {
        let (a, b) = (f64::from(p), f64::from(n));
        let norm = beta::beta_function(a, b);
        let h = 1.0 / steps as f64;
        (0..steps)
            .map(|i| {
                let x = (i as f64 + 0.5) * h;
                let g = match (p, n) {
                    (0, _) => ((1.0 - x).powf(b - 1.0) - 1.0).abs(),
                    (_, 0) => (x.powf(a - 1.0) - 1.0).abs(),
                    _ => {
                        let kernel = x.powf(a - 1.0) * (1.0 - x).powf(b - 1.0);
                        (kernel / norm - 1.0).abs() / 2.0
                    }
                };
                g * h
            })
            .sum()
    }

    #[test]
    fn both_zero_is_undefined() {
        assert_eq!(certainty(0, 0), Err(TrustError::UndefinedTrust));
    }

    #[test]
    fn single_experience_carries_no_certainty() {
        assert_eq!(certainty(1, 0).unwrap(), 0.0);
        assert_eq!(certainty(0, 1).unwrap(), 0.0);
        assert!(certainty(1, 1).unwrap().abs() < 1e-9);
    }

    #[test]
    fn one_sided_is_symmetric() {
        for k in 1..20 {
            assert_eq!(certainty(k, 0).unwrap(), certainty(0, k).unwrap());
        }
    }

    #[test]
    fn two_sided_is_symmetric() {
        for (p, n) in [(2, 1), (3, 5), (7, 2), (10, 30)] {
            let forward = certainty(p, n).unwrap();
            let backward = certainty(n, p).unwrap();
            assert!((forward - backward).abs() < 1e-9, "({p},{n})");
        }
    }

    #[test]
    fn matches_numerical_integration() {
        for p in 0..8 {
            for n in 0..8 {
                if p == 0 && n == 0 {
                    continue;
                }
                let closed = certainty(p, n).unwrap();
                let numeric = reference(p, n, 200_000);
                assert!(
                    (closed - numeric).abs() < 1e-6,
                    "({p},{n}): closed {closed} vs numeric {numeric}"
                );
            }
        }
    }

    #[test]
    fn underflowed_beta_uses_unnormalized_kernel() {
        // B(2000, 2000) is below the smallest f64, so the kernel is used
        // unnormalized and never exceeds 1: (1 - 0) / 2.
        assert_eq!(beta::beta_function(2000.0, 2000.0), 0.0);
        assert_eq!(certainty(2000, 2000).unwrap(), 0.5);
        assert_eq!(certainty(5000, 1200).unwrap(), 0.5);
    }

    #[test]
    fn known_values() {
        // Beta(2,2): density 6p(1-p) crosses 1 at (3 ± √3)/6.
        assert!((certainty(2, 2).unwrap() - 0.19245).abs() < 1e-5);
        // Beta(3,1): density 3p² crosses 1 at 1/√3.
        assert!((certainty(3, 1).unwrap() - 0.38490).abs() < 1e-5);
    }
}
