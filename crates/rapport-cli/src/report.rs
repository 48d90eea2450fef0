//! Human-readable and JSON renderings of session state and script runs.

use std::fmt::Write;

use serde::Serialize;

use rapport_core::models::{InteractionState, TrustVector};
use rapport_session::InteractionSession;

use crate::script::MissionOutcome;

#[derive(Debug, Clone, Serialize)]
pub struct StateReport<'a> {
    pub user: &'a str,
    #[serde(flatten)]
    pub state: &'a InteractionState,
    pub cooperation_probability: f64,
}

impl<'a> StateReport<'a> {
    pub fn new(session: &'a InteractionSession) -> Self {
        Self {
            user: session.user(),
            state: session.state(),
            cooperation_probability: session.cooperation_probability(),
        }
    }
}

fn vector_line(v: &TrustVector) -> String {
    format!(
        "trust {:.2}  distrust {:.2}  uncertainty {:.2}",
        v.trust, v.distrust, v.uncertainty
    )
}

fn kinship_text(kinship: Option<f64>) -> String {
    kinship.map_or_else(|| "unset".to_string(), |k| format!("{k:.2}"))
}

pub fn render_state(session: &InteractionSession) -> String {
    let s = session.state();
    let mut out = String::new();
    let _ = writeln!(out, "user:                {}", session.user());
    let _ = writeln!(out, "attitude:            {}", s.attitude);
    let _ = writeln!(out, "response time:       {} min", s.expected_response_time);
    let _ = writeln!(out, "predictor threshold: {}", s.predictor_threshold);
    let _ = writeln!(out, "kinship:             {}", kinship_text(s.kinship));
    let _ = writeln!(
        out,
        "experiences:         {} positive, {} negative",
        s.positive_count, s.negative_count
    );
    let _ = writeln!(out, "missions together:   {}", s.missions_worked_together);
    let _ = writeln!(out, "belief:              {}", vector_line(&s.trust_vector()));
    let _ = writeln!(
        out,
        "cooperation:         {:.2}",
        session.cooperation_probability()
    );
    out
}

pub fn render_outcome(outcome: &MissionOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "mission for {} (initial cooperation {:.2})",
        outcome.user, outcome.initial_probability
    );
    for (i, step) in outcome.steps.iter().enumerate() {
        let a = &step.assessment;
        let label = step.task.as_deref().unwrap_or("-");
        let _ = writeln!(out, "\n[{}] {} ({})", i + 1, label, a.role);
        let _ = writeln!(
            out,
            "    competency {:.3}  conformance {:.3}  reliability {:.3}",
            a.competency, a.conformance, a.reliability
        );
        let _ = writeln!(
            out,
            "    predictor {:.3} -> {}  deviation {:.3}",
            a.predictor_value, a.experience, a.deviation
        );
        let _ = writeln!(
            out,
            "    counts {}/{}  {}",
            a.positive_count,
            a.negative_count,
            vector_line(&a.trust_vector)
        );
        let _ = writeln!(out, "    cooperation {:.2}", step.cooperation_probability);
    }
    let _ = writeln!(
        out,
        "\nkinship {:.2} after {} mission(s); {}; cooperation {:.2}",
        outcome.kinship,
        outcome.missions_worked_together,
        vector_line(&outcome.trust_vector),
        outcome.cooperation_probability
    );
    out
}
