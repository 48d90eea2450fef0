use proptest::prelude::*;
use rapport_core::errors::TrustError;
use rapport_core::models::*;

#[test]
fn role_codes_match_knowledge_constants() {
    assert_eq!(Role::try_from(1u8).unwrap(), Role::Monitor);
    assert_eq!(Role::try_from(2u8).unwrap(), Role::Collaborator);
    assert_eq!(Role::try_from(3u8).unwrap(), Role::Validator);
    assert_eq!(Role::Monitor.knowledge(), 0.33);
    assert_eq!(Role::Collaborator.knowledge(), 0.66);
    assert_eq!(Role::Validator.knowledge(), 1.0);
}

#[test]
fn role_parses_names_and_codes() {
    assert_eq!("Validator".parse::<Role>().unwrap(), Role::Validator);
    assert_eq!(" 2 ".parse::<Role>().unwrap(), Role::Collaborator);
    assert!(matches!(
        "pilot".parse::<Role>(),
        Err(TrustError::InvalidRole { .. })
    ));
}

proptest! {
    #[test]
    fn unknown_role_codes_are_rejected(code in 4u8..=255) {
        let is_invalid_role = matches!(Role::try_from(code), Err(TrustError::InvalidRole { .. }));
        prop_assert!(is_invalid_role);
    }

    #[test]
    fn role_code_roundtrip(idx in 0usize..3) {
        let role = Role::ALL[idx];
        prop_assert_eq!(Role::try_from(role.code()).unwrap(), role);
        prop_assert_eq!(role.name().parse::<Role>().unwrap(), role);
    }
}

#[test]
fn fresh_state_has_no_experience() {
    let state = InteractionState::default();
    assert!(!state.has_experience());
    assert!(state.trust_vector().is_unformed());
    assert!(state.kinship.is_none());
}

#[test]
fn state_update_only_touches_present_fields() {
    let mut state = InteractionState::default();
    state.apply(&StateUpdate {
        positive_count: Some(2),
        trust_vector: Some(TrustVector::new(0.5, 0.0, 0.5)),
        ..StateUpdate::default()
    });
    assert_eq!(state.positive_count, 2);
    assert_eq!(state.negative_count, 0);
    assert_eq!(state.trust, 0.5);
    assert_eq!(state.uncertainty, 0.5);
    assert_eq!(state.attitude, 1.0);
    assert!(state.has_experience());
}

#[test]
fn empty_update_is_detected() {
    assert!(StateUpdate::default().is_empty());
    assert!(!StateUpdate {
        kinship: Some(0.1),
        ..StateUpdate::default()
    }
    .is_empty());
}

#[test]
fn trust_vector_normalization() {
    assert!(TrustVector::new(0.17, 0.08, 0.75).is_normalized());
    assert!(!TrustVector::default().is_normalized());
}

#[test]
fn mission_accumulator_keeps_pairs_aligned() {
    let mut mission = MissionAccumulator::new();
    mission.push(false, 1.0);
    mission.push(true, 0.45);
    assert_eq!(mission.len(), 2);
    assert_eq!(mission.goal_statuses(), &[false, true]);
    assert_eq!(mission.deviations(), &[1.0, 0.45]);
    mission.reset();
    assert!(mission.is_empty());
    assert!(mission.deviations().is_empty());
}

#[test]
fn observation_validation_rejects_bad_times() {
    let ok = SubtaskObservation::new(Role::Monitor, 10.0, vec![1.0], true, 8.0);
    assert!(ok.validate().is_ok());

    let nan = SubtaskObservation::new(Role::Monitor, f64::NAN, vec![], true, 8.0);
    assert!(matches!(
        nan.validate(),
        Err(TrustError::InvalidRange { field: "expected_time", .. })
    ));

    let negative = SubtaskObservation::new(Role::Monitor, 10.0, vec![1.0, -2.0], true, 8.0);
    assert!(matches!(
        negative.validate(),
        Err(TrustError::InvalidRange { field: "response_times", .. })
    ));
}

#[test]
fn experience_display() {
    assert_eq!(Experience::Positive.to_string(), "positive");
    assert!(!Experience::Negative.is_positive());
}
