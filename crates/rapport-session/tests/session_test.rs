//! Session behaviour over in-memory and file-backed collaborators.

use std::sync::Arc;

use rapport_core::config::{ProfileConfig, RapportConfig};
use rapport_core::errors::{RapportError, RapportResult, StorageError, TrustError};
use rapport_core::models::{
    Experience, InteractionState, Role, StateUpdate, SubtaskObservation, TrustVector,
};
use rapport_core::traits::{IAuditSink, IStateStore, MissionRecord, SubtaskRecord};
use rapport_session::{open_session, InteractionSession, ProfileUpdate};
use rapport_storage::{AuditKind, CsvAuditSink, InMemoryAuditSink, InMemoryStateStore};

fn in_memory(user: &str) -> (InteractionSession, Arc<InMemoryStateStore>, Arc<InMemoryAuditSink>) {
    let store = Arc::new(InMemoryStateStore::new(ProfileConfig::default()));
    let audit = Arc::new(InMemoryAuditSink::new());
    let session = InteractionSession::open(user, store.clone(), audit.clone()).unwrap();
    (session, store, audit)
}

fn first_mission() -> Vec<SubtaskObservation> {
    vec![
        SubtaskObservation::new(Role::Monitor, 10.05, vec![1.2, 0.5, 2.0], false, 12.03),
        SubtaskObservation::new(Role::Collaborator, 20.0, vec![343.0], true, 1.0),
        SubtaskObservation::new(Role::Validator, 20.0, vec![2.0, 23.0, 56.0], true, 34.0),
    ]
}

/// Store that accepts loads but refuses every write.
struct ReadOnlyStore(InteractionState);

impl IStateStore for ReadOnlyStore {
    fn load(&self, _user: &str) -> RapportResult<InteractionState> {
        Ok(self.0.clone())
    }

    fn update(&self, user: &str, _update: &StateUpdate) -> RapportResult<()> {
        Err(StorageError::Io {
            path: format!("{user}.yaml"),
            message: "read-only file system".to_string(),
        }
        .into())
    }
}

/// Audit sink whose every write fails.
struct BrokenAudit;

impl IAuditSink for BrokenAudit {
    fn record_subtask(&self, user: &str, _record: &SubtaskRecord<'_>) -> RapportResult<()> {
        Err(StorageError::AuditWrite {
            user: user.to_string(),
            message: "disk full".to_string(),
        }
        .into())
    }

    fn record_mission(&self, user: &str, _record: &MissionRecord<'_>) -> RapportResult<()> {
        Err(StorageError::AuditWrite {
            user: user.to_string(),
            message: "disk full".to_string(),
        }
        .into())
    }
}

#[test]
fn first_mission_scenario() {
    let (mut session, store, audit) = in_memory("user19");
    assert_eq!(session.cooperation_probability(), 1.0);

    let mut subtasks = first_mission().into_iter();

    let a = session.record_subtask(subtasks.next().unwrap()).unwrap();
    assert!((a.predictor_value - 0.642).abs() < 1e-3);
    assert_eq!(a.experience, Experience::Positive);
    assert_eq!(session.trust_vector(), TrustVector::new(0.0, 0.0, 1.0));
    assert_eq!(session.cooperation_probability(), 1.0);

    let a = session.record_subtask(subtasks.next().unwrap()).unwrap();
    assert_eq!(a.conformance, 0.75);
    assert_eq!(a.reliability, 0.5);
    assert_eq!(session.trust_vector(), TrustVector::new(0.5, 0.0, 0.5));
    assert_eq!(session.cooperation_probability(), 1.0);

    let a = session.record_subtask(subtasks.next().unwrap()).unwrap();
    assert_eq!(a.experience, Experience::Negative);
    assert!((a.deviation - 0.45).abs() < 1e-3);
    assert_eq!(session.trust_vector(), TrustVector::new(0.17, 0.08, 0.75));
    assert_eq!(session.cooperation_probability(), 1.0);
    assert_eq!(session.mission().len(), 3);

    let kinship = session.finalize_mission().unwrap();
    assert_eq!(kinship, 0.48);
    assert_eq!(session.state().missions_worked_together, 1);
    assert!(session.mission().is_empty());

    let stored = store.get("user19").unwrap();
    assert_eq!(&stored, session.state());
    assert_eq!(stored.kinship, Some(0.48));
    assert_eq!((stored.positive_count, stored.negative_count), (2, 1));

    let rows = audit.rows_for("user19");
    assert_eq!(rows.len(), 4);
    assert!(rows[..3].iter().all(|r| r.kind == AuditKind::Subtask));
    assert_eq!(rows[3].kind, AuditKind::Mission);
    assert_eq!(rows[3].kinship, Some(0.48));
}

#[test]
fn second_mission_weights_by_kinship() {
    let (mut session, _, _) = in_memory("user19");
    for obs in first_mission() {
        session.record_subtask(obs).unwrap();
    }
    session.finalize_mission().unwrap();

    let a = session
        .record_subtask(SubtaskObservation::new(Role::Validator, 20.0, vec![1.0], true, 10.0))
        .unwrap();
    assert_eq!(a.kinship, Some(0.48));
    assert_eq!((a.positive_count, a.negative_count), (3, 1));
    // Reliability restarts with the new mission.
    assert_eq!(a.reliability, 1.0);

    let kinship = session.finalize_mission().unwrap();
    // (1 * 0.48) / 2 + 1.0 / 2
    assert_eq!(kinship, 0.74);
    assert_eq!(session.state().missions_worked_together, 2);
}

#[test]
fn finalize_without_subtasks_fails_and_changes_nothing() {
    let (mut session, store, audit) = in_memory("idle");
    let err = session.finalize_mission().unwrap_err();
    assert!(matches!(
        err,
        RapportError::Trust(TrustError::EmptyMission { statuses: 0, .. })
    ));
    assert_eq!(session.state().missions_worked_together, 0);
    assert_eq!(store.get("idle").unwrap().missions_worked_together, 0);
    assert!(audit.is_empty());
}

#[test]
fn setters_validate_before_mutating() {
    let (mut session, store, _) = in_memory("ana");
    let before = session.state().clone();

    for result in [
        session.set_initial_kinship(1.5),
        session.set_initial_kinship(-0.1),
        session.set_initial_kinship(f64::NAN),
        session.set_predictor_threshold(0.0),
        session.set_predictor_threshold(1.01),
        session.set_response_time(0.0),
        session.set_response_time(f64::INFINITY),
        session.set_attitude(f64::NAN),
    ] {
        assert!(matches!(
            result,
            Err(RapportError::Trust(TrustError::InvalidRange { .. }))
        ));
    }
    assert_eq!(session.state(), &before);
    assert_eq!(store.get("ana").unwrap(), before);
}

#[test]
fn profile_update_with_one_bad_value_writes_nothing() {
    let (mut session, store, _) = in_memory("ana");
    let err = session
        .update_profile(&ProfileUpdate {
            response_time: Some(7.0),
            attitude: Some(0.2),
            initial_kinship: Some(2.0),
            ..ProfileUpdate::default()
        })
        .unwrap_err();
    assert!(matches!(
        err,
        RapportError::Trust(TrustError::InvalidRange { field: "kinship", .. })
    ));

    let stored = store.get("ana").unwrap();
    assert_eq!(stored.expected_response_time, 2.0);
    assert_eq!(stored.attitude, 1.0);
    assert_eq!(stored.kinship, None);
    assert_eq!(session.state(), &stored);
}

#[test]
fn profile_update_applies_all_values_together() {
    let (mut session, store, _) = in_memory("ana");
    session
        .update_profile(&ProfileUpdate {
            response_time: Some(7.0),
            attitude: Some(0.2),
            initial_kinship: Some(0.6),
            predictor_threshold: Some(0.45),
            positive_count: Some(10),
            negative_count: None,
        })
        .unwrap();

    let stored = store.get("ana").unwrap();
    assert_eq!(stored.expected_response_time, 7.0);
    assert_eq!(stored.attitude, 0.2);
    assert_eq!(stored.kinship, Some(0.6));
    assert_eq!(stored.predictor_threshold, 0.45);
    assert_eq!(stored.positive_count, 10);
}

#[test]
fn setters_persist_valid_values() {
    let (mut session, store, _) = in_memory("ana");
    session.set_initial_kinship(0.0).unwrap();
    session.set_predictor_threshold(1.0).unwrap();
    session.set_response_time(3.5).unwrap();
    session.set_attitude(0.4).unwrap();
    session.set_experience_counts(Some(5), None).unwrap();

    let stored = store.get("ana").unwrap();
    assert_eq!(stored.kinship, Some(0.0));
    assert_eq!(stored.predictor_threshold, 1.0);
    assert_eq!(stored.expected_response_time, 3.5);
    assert_eq!(stored.attitude, 0.4);
    assert_eq!((stored.positive_count, stored.negative_count), (5, 0));
    // Seeding counts does not recompute the vector.
    assert_eq!(stored.trust_vector(), TrustVector::new(0.0, 0.0, 0.0));
}

#[test]
fn zero_kinship_is_used_as_a_weight() {
    let (mut session, _, _) = in_memory("cold");
    session.set_initial_kinship(0.0).unwrap();
    session.set_experience_counts(Some(1), None).unwrap();
    let a = session
        .record_subtask(SubtaskObservation::new(Role::Validator, 20.0, vec![1.0], true, 10.0))
        .unwrap();
    assert_eq!((a.positive_count, a.negative_count), (2, 0));
    assert_eq!(a.trust_vector.trust, 0.0);
    assert_eq!(a.trust_vector.uncertainty, 1.0);
}

#[test]
fn zero_kinship_after_failed_mission_pins_trust_at_zero() {
    let (mut session, _, _) = in_memory("unlucky");
    let missed = SubtaskObservation::new(Role::Monitor, 10.0, vec![1.0], false, 5.0);
    assert_eq!(session.record_subtask(missed).unwrap().experience, Experience::Positive);
    assert_eq!(session.finalize_mission().unwrap(), 0.0);
    assert_eq!(session.state().kinship, Some(0.0));

    for _ in 0..3 {
        let a = session
            .record_subtask(SubtaskObservation::new(Role::Validator, 20.0, vec![1.0], true, 10.0))
            .unwrap();
        assert_eq!(a.experience, Experience::Positive);
        assert_eq!(a.trust_vector.trust, 0.0);
    }
    assert_eq!(session.state().positive_count, 4);
    assert_eq!(session.trust_vector().uncertainty, 1.0);
}

#[test]
fn failed_persist_leaves_session_untouched() {
    let store = Arc::new(ReadOnlyStore(InteractionState::default()));
    let mut session =
        InteractionSession::open("ro", store, Arc::new(InMemoryAuditSink::new())).unwrap();

    let obs = SubtaskObservation::new(Role::Monitor, 10.0, vec![1.0], true, 5.0);
    let err = session.record_subtask(obs).unwrap_err();
    assert!(matches!(err, RapportError::Storage(StorageError::Io { .. })));
    assert_eq!(session.state(), &InteractionState::default());
    assert!(session.mission().is_empty());

    assert!(session.set_attitude(0.5).is_err());
    assert_eq!(session.state().attitude, 1.0);
}

#[test]
fn invalid_observation_is_rejected_without_side_effects() {
    let (mut session, store, audit) = in_memory("ana");
    let obs = SubtaskObservation::new(Role::Monitor, f64::NAN, vec![1.0], true, 5.0);
    assert!(matches!(
        session.record_subtask(obs),
        Err(RapportError::Trust(TrustError::InvalidRange { field: "expected_time", .. }))
    ));
    assert!(session.mission().is_empty());
    assert_eq!(store.get("ana").unwrap().positive_count, 0);
    assert!(audit.is_empty());
}

#[test]
fn zero_threshold_in_stored_profile_is_recoverable() {
    let store = Arc::new(InMemoryStateStore::new(ProfileConfig::default()));
    store.insert(
        "legacy",
        InteractionState {
            predictor_threshold: 0.0,
            ..InteractionState::default()
        },
    );
    let mut session =
        InteractionSession::open("legacy", store, Arc::new(InMemoryAuditSink::new())).unwrap();

    let obs = SubtaskObservation::new(Role::Monitor, 10.0, vec![1.0], true, 5.0);
    assert!(matches!(
        session.record_subtask(obs.clone()),
        Err(RapportError::Trust(TrustError::DivisionByZero { .. }))
    ));

    session.set_predictor_threshold(0.5).unwrap();
    assert!(session.record_subtask(obs).is_ok());
}

#[test]
fn audit_failure_does_not_fail_the_operation() {
    let store = Arc::new(InMemoryStateStore::new(ProfileConfig::default()));
    let mut session = InteractionSession::open("ana", store.clone(), Arc::new(BrokenAudit)).unwrap();

    let obs = SubtaskObservation::new(Role::Validator, 10.0, vec![1.0], true, 5.0);
    session.record_subtask(obs).unwrap();
    session.finalize_mission().unwrap();
    assert_eq!(store.get("ana").unwrap().missions_worked_together, 1);
}

#[test]
fn file_backed_session_survives_reopen() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = RapportConfig::default();
    config.storage.profile_dir = tmp.path().join("profiles");

    {
        let mut session = open_session(&config, "user19").unwrap();
        for obs in first_mission() {
            session.record_subtask(obs.with_task("site survey")).unwrap();
        }
        session.finalize_mission().unwrap();
    }

    let session = open_session(&config, "user19").unwrap();
    assert_eq!(session.state().kinship, Some(0.48));
    assert_eq!(session.state().missions_worked_together, 1);
    assert_eq!(session.trust_vector(), TrustVector::new(0.17, 0.08, 0.75));

    let audit = CsvAuditSink::new(&config.storage.profile_dir, &config.storage.audit_suffix);
    let rows = audit.read_rows("user19").unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].task.as_deref(), Some("site survey"));
}

#[test]
fn disabled_audit_writes_no_file() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = RapportConfig::default();
    config.storage.profile_dir = tmp.path().to_path_buf();
    config.storage.audit_enabled = false;

    let mut session = open_session(&config, "quiet").unwrap();
    session
        .record_subtask(SubtaskObservation::new(Role::Monitor, 10.0, vec![], true, 5.0))
        .unwrap();

    assert!(tmp.path().join("quiet.yaml").exists());
    assert!(!tmp.path().join("quiet_audit.csv").exists());
}
