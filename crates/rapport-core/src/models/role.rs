//! Role a human plays during a subtask.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{KNOWLEDGE_COLLABORATOR, KNOWLEDGE_MONITOR, KNOWLEDGE_VALIDATOR};
use crate::errors::TrustError;

/// Role of the human collaborator while a subtask is performed.
///
/// Integer codes follow the historical profile format: 1 = monitor,
/// 2 = collaborator, 3 = validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Watches the robot without full knowledge of the area.
    Monitor,
    /// Works alongside the robot and knows the environment.
    Collaborator,
    /// Knows the environment and validates the finished work.
    Validator,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Monitor, Role::Collaborator, Role::Validator];

    /// Knowledge constant contributed to competency.
    pub fn knowledge(&self) -> f64 {
        match self {
            Self::Monitor => KNOWLEDGE_MONITOR,
            Self::Collaborator => KNOWLEDGE_COLLABORATOR,
            Self::Validator => KNOWLEDGE_VALIDATOR,
        }
    }

    /// Integer code of the role.
    pub fn code(&self) -> u8 {
        match self {
            Self::Monitor => 1,
            Self::Collaborator => 2,
            Self::Validator => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Monitor => "monitor",
            Self::Collaborator => "collaborator",
            Self::Validator => "validator",
        }
    }
}

impl TryFrom<u8> for Role {
    type Error = TrustError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Monitor),
            2 => Ok(Self::Collaborator),
            3 => Ok(Self::Validator),
            other => Err(TrustError::InvalidRole {
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for Role {
    type Err = TrustError;

    /// Accepts a role name (case-insensitive) or its integer code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u8>() {
            return Self::try_from(code);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "monitor" => Ok(Self::Monitor),
            "collaborator" => Ok(Self::Collaborator),
            "validator" => Ok(Self::Validator),
            _ => Err(TrustError::InvalidRole {
                value: trimmed.to_string(),
            }),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
