//! Defaults applied to a user profile the first time it is loaded.
//!
//! # Examples
//!
//! ```
//! use rapport_core::config::ProfileConfig;
//!
//! let config = ProfileConfig::default();
//! assert!((config.predictor_threshold - 0.5).abs() < f64::EPSILON);
//! assert!(config.initial_kinship.is_none());
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::defaults;
use crate::models::InteractionState;

/// Profile defaults for first-seen collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Attitude contributed to competency. Default: 1.0.
    pub attitude: f64,
    /// Expected response time in minutes. Default: 2.0.
    pub response_time: f64,
    /// Positive/negative decision boundary. Default: 0.5.
    pub predictor_threshold: f64,
    /// Kinship estimate for a brand new relationship. Default: absent.
    pub initial_kinship: Option<f64>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            attitude: defaults::DEFAULT_ATTITUDE,
            response_time: defaults::DEFAULT_RESPONSE_TIME,
            predictor_threshold: defaults::DEFAULT_PREDICTOR_THRESHOLD,
            initial_kinship: None,
        }
    }
}

impl ProfileConfig {
    /// Build the state record a new user starts from.
    pub fn initial_state(&self) -> InteractionState {
        InteractionState {
            attitude: self.attitude,
            expected_response_time: self.response_time,
            predictor_threshold: self.predictor_threshold,
            kinship: self.initial_kinship,
            ..InteractionState::default()
        }
    }
}
