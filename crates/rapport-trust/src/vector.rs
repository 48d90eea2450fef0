//! TrustVectorEngine — derive (trust, distrust, uncertainty) from the
//! experience counts, the certainty they imply, and optionally kinship.
//!
//! ```text
//! c = certainty(P, N)
//! trust       = round(k · P · c / (P + N))        k = kinship, or 1 if absent
//! distrust    = round((1 - k) · N · c / (P + N))  (1 - k) is 1 if absent
//! uncertainty = round(1 - (trust + distrust))
//! ```
//!
//! Every value is rounded once, to the persisted precision.

use tracing::info;

use rapport_core::errors::TrustResult;
use rapport_core::models::TrustVector;

use crate::certainty::certainty;
use crate::precision::round_persisted;

/// Compute the trust vector. Fails with `UndefinedTrust` when both counts
/// are zero.
///
/// A kinship of exactly 0.0 is applied as a weight, not treated as absent.
/// A mission in which no goal was reached stores kinship 0.0, and every
/// later vector then carries zero trust until a mission raises kinship
/// again. Profiles written by tools that test kinship for truthiness treat
/// 0.0 as absent instead; the two diverge only at that value.
///
/// # Examples
///
/// ```
/// use rapport_trust::update_trust_vector;
///
/// let v = update_trust_vector(2, 1, None).unwrap();
/// assert_eq!((v.trust, v.distrust, v.uncertainty), (0.17, 0.08, 0.75));
/// ```
pub fn update_trust_vector(
    positive_count: u32,
    negative_count: u32,
    kinship: Option<f64>,
) -> TrustResult<TrustVector> {
    let c = certainty(positive_count, negative_count)?;
    let p = f64::from(positive_count);
    let n = f64::from(negative_count);
    let total = p + n;

    let (trust_weight, distrust_weight) = match kinship {
        Some(k) => (k, 1.0 - k),
        None => (1.0, 1.0),
    };

    let trust = round_persisted(trust_weight * p * c / total);
    let distrust = round_persisted(distrust_weight * n * c / total);
    let uncertainty = round_persisted(1.0 - (trust + distrust));

    info!(
        positive_count,
        negative_count,
        ?kinship,
        certainty = c,
        trust,
        distrust,
        uncertainty,
        "updated trust vector"
    );

    Ok(TrustVector::new(trust, distrust, uncertainty))
}
