//! In-memory store and sink. Nothing survives the process.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use rapport_core::config::ProfileConfig;
use rapport_core::errors::RapportResult;
use rapport_core::models::{InteractionState, StateUpdate};
use rapport_core::traits::{IAuditSink, IStateStore, MissionRecord, SubtaskRecord};

use crate::audit::AuditRow;
use crate::check_user;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    defaults: ProfileConfig,
    states: Mutex<HashMap<String, InteractionState>>,
}

impl InMemoryStateStore {
    pub fn new(defaults: ProfileConfig) -> Self {
        Self {
            defaults,
            states: Mutex::new(HashMap::new()),
        }
    }

    /// Seed or replace the record for `user`.
    pub fn insert(&self, user: &str, state: InteractionState) {
        lock(&self.states).insert(user.to_string(), state);
    }

    /// Current record for `user` without creating one.
    pub fn get(&self, user: &str) -> Option<InteractionState> {
        lock(&self.states).get(user).cloned()
    }
}

impl IStateStore for InMemoryStateStore {
    fn load(&self, user: &str) -> RapportResult<InteractionState> {
        check_user(user)?;
        let mut states = lock(&self.states);
        let state = states
            .entry(user.to_string())
            .or_insert_with(|| self.defaults.initial_state());
        Ok(state.clone())
    }

    fn update(&self, user: &str, update: &StateUpdate) -> RapportResult<()> {
        check_user(user)?;
        let mut states = lock(&self.states);
        states
            .entry(user.to_string())
            .or_insert_with(|| self.defaults.initial_state())
            .apply(update);
        Ok(())
    }
}

/// Audit sink that keeps rows in memory, keyed by user.
#[derive(Debug, Default)]
pub struct InMemoryAuditSink {
    rows: Mutex<Vec<(String, AuditRow)>>,
}

impl InMemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows_for(&self, user: &str) -> Vec<AuditRow> {
        lock(&self.rows)
            .iter()
            .filter(|(u, _)| u == user)
            .map(|(_, row)| row.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        lock(&self.rows).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IAuditSink for InMemoryAuditSink {
    fn record_subtask(&self, user: &str, record: &SubtaskRecord<'_>) -> RapportResult<()> {
        lock(&self.rows).push((user.to_string(), AuditRow::from_subtask(record)));
        Ok(())
    }

    fn record_mission(&self, user: &str, record: &MissionRecord<'_>) -> RapportResult<()> {
        lock(&self.rows).push((user.to_string(), AuditRow::from_mission(record)));
        Ok(())
    }
}
