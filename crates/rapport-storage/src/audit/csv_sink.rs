use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use tracing::debug;

use rapport_core::errors::{RapportResult, StorageError};
use rapport_core::traits::{IAuditSink, MissionRecord, SubtaskRecord};

use super::row::AuditRow;
use crate::{check_user, io_error};

/// Appends rows to `<dir>/<user><suffix>`. The header is written only when
/// the file is created.
#[derive(Debug, Clone)]
pub struct CsvAuditSink {
    dir: PathBuf,
    suffix: String,
}

impl CsvAuditSink {
    pub fn new(dir: impl Into<PathBuf>, suffix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            suffix: suffix.into(),
        }
    }

    pub fn audit_path(&self, user: &str) -> PathBuf {
        self.dir.join(format!("{user}{}", self.suffix))
    }

    /// Read back every row recorded for `user`. A missing file yields no rows.
    pub fn read_rows(&self, user: &str) -> RapportResult<Vec<AuditRow>> {
        check_user(user)?;
        let path = self.audit_path(user);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = csv::Reader::from_path(&path).map_err(|e| decode_error(&path, e))?;
        let rows = reader
            .deserialize()
            .collect::<Result<Vec<AuditRow>, _>>()
            .map_err(|e| decode_error(&path, e))?;
        Ok(rows)
    }

    fn append(&self, user: &str, row: &AuditRow) -> Result<(), StorageError> {
        check_user(user)?;
        fs::create_dir_all(&self.dir).map_err(|e| io_error(&self.dir, e))?;

        let path = self.audit_path(user);
        let needs_header = fs::metadata(&path).map(|m| m.len() == 0).unwrap_or(true);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| io_error(&path, e))?;

        let write_error = |message: String| StorageError::AuditWrite {
            user: user.to_string(),
            message,
        };
        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer.serialize(row).map_err(|e| write_error(e.to_string()))?;
        writer.flush().map_err(|e| write_error(e.to_string()))?;

        debug!(user, kind = ?row.kind, path = %path.display(), "appended audit row");
        Ok(())
    }
}

fn decode_error(path: &Path, err: csv::Error) -> StorageError {
    StorageError::Decode {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

impl IAuditSink for CsvAuditSink {
    fn record_subtask(&self, user: &str, record: &SubtaskRecord<'_>) -> RapportResult<()> {
        self.append(user, &AuditRow::from_subtask(record))?;
        Ok(())
    }

    fn record_mission(&self, user: &str, record: &MissionRecord<'_>) -> RapportResult<()> {
        self.append(user, &AuditRow::from_mission(record))?;
        Ok(())
    }
}
