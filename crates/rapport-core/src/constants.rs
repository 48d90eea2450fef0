//! Fixed constants of the scoring model.

/// Knowledge attributed to a human who only monitors the robot.
pub const KNOWLEDGE_MONITOR: f64 = 0.33;

/// Knowledge attributed to a human working alongside the robot.
pub const KNOWLEDGE_COLLABORATOR: f64 = 0.66;

/// Knowledge attributed to a human who validates the finished work.
pub const KNOWLEDGE_VALIDATOR: f64 = 1.0;

/// Weight of the time-to-goal deviation inside conformance.
pub const CONFORMANCE_TIME_WEIGHT: f64 = 0.75;

/// Weight of the response-time deviation inside conformance.
pub const CONFORMANCE_RESPONSE_WEIGHT: f64 = 0.25;

/// Decimal places kept for every persisted trust, distrust, uncertainty
/// and kinship value.
pub const PERSISTED_DECIMALS: i32 = 2;

/// Tolerance used when checking that a trust vector sums to one.
pub const VECTOR_SUM_TOLERANCE: f64 = 0.01;

/// Default profile values for a user seen for the first time.
pub mod defaults {
    pub const DEFAULT_ATTITUDE: f64 = 1.0;
    pub const DEFAULT_RESPONSE_TIME: f64 = 2.0;
    pub const DEFAULT_PREDICTOR_THRESHOLD: f64 = 0.5;
    pub const DEFAULT_PROFILE_DIR: &str = "config";
    pub const DEFAULT_AUDIT_SUFFIX: &str = "_audit.csv";
    pub const DEFAULT_LOG_LEVEL: &str = "info";
}
