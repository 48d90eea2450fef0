//! Wire a session to the file-backed stores named in the configuration.

use std::sync::Arc;

use rapport_core::config::RapportConfig;
use rapport_core::errors::RapportResult;
use rapport_core::traits::{IAuditSink, IStateStore};
use rapport_storage::{CsvAuditSink, NullAuditSink, YamlProfileStore};

use crate::InteractionSession;

/// Open a session for `user` backed by `<profile_dir>/<user>.yaml` and, when
/// auditing is enabled, `<profile_dir>/<user><audit_suffix>`.
pub fn open_session(config: &RapportConfig, user: &str) -> RapportResult<InteractionSession> {
    let storage = &config.storage;
    let store: Arc<dyn IStateStore> = Arc::new(YamlProfileStore::new(
        &storage.profile_dir,
        config.profile.clone(),
    ));
    let audit: Arc<dyn IAuditSink> = if storage.audit_enabled {
        Arc::new(CsvAuditSink::new(&storage.profile_dir, &storage.audit_suffix))
    } else {
        Arc::new(NullAuditSink)
    };
    InteractionSession::open(user, store, audit)
}
