//! Mission scripts: optional profile setup followed by a list of subtasks,
//! run through one session and finalized as a single mission.
//!
//! ```toml
//! user = "user19"
//!
//! [setup]
//! response_time = 2.0
//!
//! [[subtask]]
//! role = 1                       # or "monitor"
//! expected_time = 10.05
//! response_times = [1.2, 0.5, 2.0]
//! goal_reached = false
//! actual_time = 12.03
//! ```

use std::path::Path;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use tracing::debug;

use rapport_core::errors::{RapportResult, TrustError, TrustResult};
use rapport_core::models::{Role, SubtaskAssessment, SubtaskObservation, TrustVector};
use rapport_session::{InteractionSession, ProfileUpdate};

/// Profile values applied before any subtask runs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SetupValues {
    pub response_time: Option<f64>,
    pub attitude: Option<f64>,
    pub initial_kinship: Option<f64>,
    pub predictor_threshold: Option<f64>,
    pub positive_count: Option<u32>,
    pub negative_count: Option<u32>,
}

impl SetupValues {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn profile_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            response_time: self.response_time,
            attitude: self.attitude,
            initial_kinship: self.initial_kinship,
            predictor_threshold: self.predictor_threshold,
            positive_count: self.positive_count,
            negative_count: self.negative_count,
        }
    }

    /// Check every present value without writing anything.
    pub fn validate(&self) -> TrustResult<()> {
        self.profile_update().validate()
    }

    /// Persist every present value in one write. A rejected value leaves
    /// the profile untouched.
    pub fn apply(&self, session: &mut InteractionSession) -> RapportResult<()> {
        session.update_profile(&self.profile_update())
    }
}

/// A role written either as its integer code or its name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScriptRole {
    Code(i64),
    Name(String),
}

impl ScriptRole {
    pub fn resolve(&self) -> TrustResult<Role> {
        match self {
            Self::Code(code) => u8::try_from(*code)
                .map_err(|_| TrustError::InvalidRole {
                    value: code.to_string(),
                })
                .and_then(Role::try_from),
            Self::Name(name) => name.parse(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptedSubtask {
    pub role: ScriptRole,
    pub expected_time: f64,
    pub actual_time: f64,
    #[serde(default)]
    pub response_times: Vec<f64>,
    pub goal_reached: bool,
    #[serde(default)]
    pub task: Option<String>,
}

impl ScriptedSubtask {
    pub fn observation(&self) -> TrustResult<SubtaskObservation> {
        let mut observation = SubtaskObservation::new(
            self.role.resolve()?,
            self.expected_time,
            self.response_times.clone(),
            self.goal_reached,
            self.actual_time,
        );
        observation.task = self.task.clone();
        Ok(observation)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MissionScript {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub setup: SetupValues,
    #[serde(default, rename = "subtask")]
    pub subtasks: Vec<ScriptedSubtask>,
}

/// One executed subtask and the probability right after it.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub task: Option<String>,
    pub assessment: SubtaskAssessment,
    pub cooperation_probability: f64,
}

/// Everything a script run produced.
#[derive(Debug, Clone, Serialize)]
pub struct MissionOutcome {
    pub user: String,
    pub initial_probability: f64,
    pub steps: Vec<StepReport>,
    pub kinship: f64,
    pub missions_worked_together: u32,
    pub trust_vector: TrustVector,
    pub cooperation_probability: f64,
}

impl MissionScript {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read mission script {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("invalid mission script {}", path.display()))
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let script: Self = toml::from_str(content)?;
        if script.subtasks.is_empty() {
            bail!("mission script has no [[subtask]] entries");
        }
        Ok(script)
    }

    /// Apply the setup, record every subtask in order and finalize.
    ///
    /// The setup values and every role are checked before anything is
    /// written, so a bad value leaves the profile untouched.
    pub fn execute(&self, session: &mut InteractionSession) -> anyhow::Result<MissionOutcome> {
        let observations = self
            .subtasks
            .iter()
            .enumerate()
            .map(|(i, subtask)| {
                subtask
                    .observation()
                    .with_context(|| format!("subtask {}", i + 1))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        self.setup.validate().context("invalid [setup]")?;

        self.setup.apply(session).context("setup failed")?;
        let initial_probability = session.cooperation_probability();

        let mut steps = Vec::with_capacity(observations.len());
        for (i, observation) in observations.into_iter().enumerate() {
            let task = observation.task.clone();
            let assessment = session
                .record_subtask(observation)
                .with_context(|| format!("subtask {} failed", i + 1))?;
            let cooperation_probability = session.cooperation_probability();
            debug!(step = i + 1, cooperation_probability, "script step done");
            steps.push(StepReport {
                task,
                assessment,
                cooperation_probability,
            });
        }

        let kinship = session.finalize_mission()?;
        Ok(MissionOutcome {
            user: session.user().to_string(),
            initial_probability,
            steps,
            kinship,
            missions_worked_together: session.state().missions_worked_together,
            trust_vector: session.trust_vector(),
            cooperation_probability: session.cooperation_probability(),
        })
    }
}
