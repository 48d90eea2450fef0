//! Validated changes to a collaborator's profile values.

use rapport_core::errors::{TrustError, TrustResult};
use rapport_core::models::StateUpdate;

/// Profile values to change together. Absent fields are left alone.
///
/// Every present value is checked by [`ProfileUpdate::validate`] before
/// anything is written, so a bad value rejects the whole update.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProfileUpdate {
    /// Expected response time in minutes, finite and > 0.
    pub response_time: Option<f64>,
    /// Finite.
    pub attitude: Option<f64>,
    /// In [0, 1].
    pub initial_kinship: Option<f64>,
    /// In (0, 1].
    pub predictor_threshold: Option<f64>,
    pub positive_count: Option<u32>,
    pub negative_count: Option<u32>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> TrustResult<()> {
        if let Some(minutes) = self.response_time {
            if !(minutes.is_finite() && minutes > 0.0) {
                return Err(TrustError::InvalidRange {
                    field: "response_time",
                    value: minutes,
                    expected: "a positive number of minutes",
                });
            }
        }
        if let Some(attitude) = self.attitude {
            if !attitude.is_finite() {
                return Err(TrustError::InvalidRange {
                    field: "attitude",
                    value: attitude,
                    expected: "a finite number",
                });
            }
        }
        if let Some(kinship) = self.initial_kinship {
            if !(0.0..=1.0).contains(&kinship) {
                return Err(TrustError::InvalidRange {
                    field: "kinship",
                    value: kinship,
                    expected: "[0, 1]",
                });
            }
        }
        if let Some(threshold) = self.predictor_threshold {
            if !(threshold > 0.0 && threshold <= 1.0) {
                return Err(TrustError::InvalidRange {
                    field: "predictor_threshold",
                    value: threshold,
                    expected: "(0, 1]",
                });
            }
        }
        Ok(())
    }

    pub(crate) fn state_update(&self) -> StateUpdate {
        StateUpdate {
            attitude: self.attitude,
            expected_response_time: self.response_time,
            predictor_threshold: self.predictor_threshold,
            kinship: self.initial_kinship,
            positive_count: self.positive_count,
            negative_count: self.negative_count,
            ..StateUpdate::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_bad_value_is_reported() {
        let update = ProfileUpdate {
            response_time: Some(7.0),
            attitude: Some(0.2),
            initial_kinship: Some(2.0),
            ..ProfileUpdate::default()
        };
        assert!(matches!(
            update.validate(),
            Err(TrustError::InvalidRange { field: "kinship", .. })
        ));
    }

    #[test]
    fn boundaries() {
        let ok = ProfileUpdate {
            initial_kinship: Some(0.0),
            predictor_threshold: Some(1.0),
            attitude: Some(-0.5),
            ..ProfileUpdate::default()
        };
        assert!(ok.validate().is_ok());

        for bad in [
            ProfileUpdate {
                predictor_threshold: Some(0.0),
                ..ProfileUpdate::default()
            },
            ProfileUpdate {
                response_time: Some(f64::NAN),
                ..ProfileUpdate::default()
            },
            ProfileUpdate {
                initial_kinship: Some(-0.01),
                ..ProfileUpdate::default()
            },
        ] {
            assert!(bad.validate().is_err(), "{bad:?}");
        }
    }

    #[test]
    fn maps_to_state_fields() {
        let update = ProfileUpdate {
            response_time: Some(3.0),
            positive_count: Some(4),
            ..ProfileUpdate::default()
        }
        .state_update();
        assert_eq!(update.expected_response_time, Some(3.0));
        assert_eq!(update.positive_count, Some(4));
        assert!(update.trust_vector.is_none());
        assert!(update.missions_worked_together.is_none());
    }
}
