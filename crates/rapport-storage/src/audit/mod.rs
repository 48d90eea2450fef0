//! Append-only audit trail of subtask evaluations and mission summaries.

mod csv_sink;
mod row;

use rapport_core::errors::RapportResult;
use rapport_core::traits::{IAuditSink, MissionRecord, SubtaskRecord};

pub use csv_sink::CsvAuditSink;
pub use row::{AuditKind, AuditRow};

/// Sink used when auditing is disabled in the configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAuditSink;

impl IAuditSink for NullAuditSink {
    fn record_subtask(&self, _user: &str, _record: &SubtaskRecord<'_>) -> RapportResult<()> {
        Ok(())
    }

    fn record_mission(&self, _user: &str, _record: &MissionRecord<'_>) -> RapportResult<()> {
        Ok(())
    }
}
