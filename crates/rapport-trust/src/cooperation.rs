//! CooperationPolicy — the probability with which the agent should follow
//! its human collaborator.
//!
//! Evaluated in order:
//! 1. no trust and no distrust → 1
//! 2. uncertainty outweighs trust + distrust → 1
//! 3. trust ≥ distrust → 1
//! 4. otherwise `1 - (distrust - trust) / (trust + distrust)`
//!
//! Rule 1 also fires when evidence exists but rounded to zero trust and
//! zero distrust (a single positive experience without kinship, for
//! example); that case is deliberately not distinguished from "no evidence".

use rapport_core::models::TrustVector;

/// Cooperation probability in [0, 1].
///
/// # Examples
///
/// ```
/// use rapport_core::models::TrustVector;
/// use rapport_trust::cooperation_probability;
///
/// assert_eq!(cooperation_probability(&TrustVector::default()), 1.0);
/// let p = cooperation_probability(&TrustVector::new(0.2, 0.6, 0.2));
/// assert!((p - 0.5).abs() < 1e-12);
/// ```
pub fn cooperation_probability(vector: &TrustVector) -> f64 {
    let TrustVector {
        trust,
        distrust,
        uncertainty,
    } = *vector;

    let p = if vector.is_unformed() || uncertainty > trust + distrust || trust >= distrust {
        1.0
    } else {
        1.0 - (distrust - trust) / (trust + distrust)
    };
    p.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_interaction_cooperates() {
        assert_eq!(cooperation_probability(&TrustVector::new(0.0, 0.0, 1.0)), 1.0);
    }

    #[test]
    fn uncertain_belief_cooperates() {
        assert_eq!(
            cooperation_probability(&TrustVector::new(0.08, 0.17, 0.75)),
            1.0
        );
    }

    #[test]
    fn trust_at_least_distrust_cooperates() {
        assert_eq!(cooperation_probability(&TrustVector::new(0.3, 0.3, 0.4)), 1.0);
        assert_eq!(cooperation_probability(&TrustVector::new(0.5, 0.0, 0.5)), 1.0);
    }

    #[test]
    fn distrust_lowers_probability() {
        let p = cooperation_probability(&TrustVector::new(0.1, 0.7, 0.2));
        assert!((p - 0.25).abs() < 1e-12);
    }

    #[test]
    fn pure_distrust_never_cooperates() {
        assert_eq!(cooperation_probability(&TrustVector::new(0.0, 0.8, 0.2)), 0.0);
    }
}
