// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    TIMEZONE, create_test_actor, create_test_cause, create_test_details, create_test_state,
    post_shift, run, shift_date,
};
use crate::{Command, CoreError, State, Subject, TransitionResult, apply};
use care_shifts_domain::{
    DomainError, ErrorKind, FacilityId, ShiftDetails, ShiftId, ShiftStatus, WorkerId,
};

#[test]
fn test_unknown_timezone_is_rejected() {
    assert_eq!(
        State::new("Atlantis/Lost"),
        Err(DomainError::InvalidTimezone(String::from("Atlantis/Lost")))
    );
    assert_eq!(State::new(TIMEZONE).unwrap().timezone(), TIMEZONE);
}

#[test]
fn test_create_shift_returns_open_shift_with_new_id() {
    let state: State = create_test_state();

    let (new_state, shift_id) = post_shift(&state, shift_date());

    let shift = new_state.shift(&shift_id).unwrap();
    assert_eq!(shift_id.value(), "s_1");
    assert_eq!(shift.status(), ShiftStatus::Open);
    assert_eq!(shift.worker_id(), None);
    assert_eq!(shift.facility_id(), &FacilityId::new("f_1"));
    assert_eq!(shift.facility_name(), "Sunrise Senior Living");
}

#[test]
fn test_shift_ids_are_never_reused() {
    let state: State = create_test_state();
    let (state, first) = post_shift(&state, shift_date());
    let (_, second) = post_shift(&state, shift_date());
    assert_ne!(first, second);
    assert_eq!(second.value(), "s_2");
}

#[test]
fn test_valid_command_emits_audit_event() {
    let state: State = create_test_state();

    let result: TransitionResult = apply(
        &state,
        Command::CreateShift {
            facility_id: FacilityId::new("f_1"),
            details: create_test_details(shift_date()),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();

    assert_eq!(result.subject, Subject::Shift(ShiftId::new("s_1")));
    assert_eq!(result.audit_event.action.name, "CreateShift");
    assert_eq!(result.audit_event.actor.id, "admin-1");
    assert_eq!(result.audit_event.cause.id, "req-1");
    assert_eq!(result.audit_event.subject, "shift:s_1");
    assert_eq!(result.audit_event.before.data, "absent");
    assert_eq!(result.audit_event.after.data, "status=OPEN,worker=-");
    assert!(
        result
            .audit_event
            .action
            .details
            .as_ref()
            .unwrap()
            .contains("Weekend Night Shift")
    );
}

#[test]
fn test_audit_event_contains_before_and_after_state() {
    let state: State = create_test_state();
    let (state, shift_id) = post_shift(&state, shift_date());

    let result: TransitionResult = apply(
        &state,
        Command::OfferToWorker {
            shift_id,
            worker_id: WorkerId::new("w_1"),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();

    assert_eq!(result.audit_event.before.data, "status=OPEN,worker=-");
    assert_eq!(
        result.audit_event.after.data,
        "status=PENDING_ACCEPTANCE,worker=w_1"
    );
}

#[test]
fn test_create_shift_requires_approved_facility() {
    let state: State = run(
        &State::new(TIMEZONE).unwrap(),
        Command::RegisterFacility {
            profile: crate::tests::helpers::create_test_facility_profile(),
        },
    );

    let result = apply(
        &state,
        Command::CreateShift {
            facility_id: FacilityId::new("f_1"),
            details: create_test_details(shift_date()),
        },
        create_test_actor(),
        create_test_cause(),
    );

    let Err(CoreError::DomainViolation(err)) = result else {
        panic!("expected a domain violation");
    };
    assert_eq!(err, DomainError::FacilityNotApproved(FacilityId::new("f_1")));
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
}

#[test]
fn test_create_shift_for_unknown_facility_fails_not_found() {
    let state: State = create_test_state();
    let result = apply(
        &state,
        Command::CreateShift {
            facility_id: FacilityId::new("f_404"),
            details: create_test_details(shift_date()),
        },
        create_test_actor(),
        create_test_cause(),
    );
    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::FacilityNotFound(
            FacilityId::new("f_404")
        )))
    );
}

#[test]
fn test_create_shift_validates_details() {
    let state: State = create_test_state();
    let details: ShiftDetails = ShiftDetails {
        duration_hours: 0,
        ..create_test_details(shift_date())
    };

    let result = apply(
        &state,
        Command::CreateShift {
            facility_id: FacilityId::new("f_1"),
            details,
        },
        create_test_actor(),
        create_test_cause(),
    );

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidDuration {
            hours: 0
        }))
    );
}

#[test]
fn test_offer_requires_existing_approved_worker() {
    let state: State = create_test_state();
    let (state, shift_id) = post_shift(&state, shift_date());

    let missing = apply(
        &state,
        Command::OfferToWorker {
            shift_id: shift_id.clone(),
            worker_id: WorkerId::new("w_404"),
        },
        create_test_actor(),
        create_test_cause(),
    );
    assert_eq!(
        missing,
        Err(CoreError::DomainViolation(DomainError::WorkerNotFound(
            WorkerId::new("w_404")
        )))
    );

    let state: State = run(
        &state,
        Command::RegisterWorker {
            profile: crate::tests::helpers::create_test_worker_profile("New Starter", "Leeds"),
            documents: Vec::new(),
        },
    );
    let pending = apply(
        &state,
        Command::OfferToWorker {
            shift_id,
            worker_id: WorkerId::new("w_2"),
        },
        create_test_actor(),
        create_test_cause(),
    );
    assert_eq!(
        pending,
        Err(CoreError::DomainViolation(DomainError::WorkerNotApproved(
            WorkerId::new("w_2")
        )))
    );
}

#[test]
fn test_operations_on_unknown_shift_fail_not_found() {
    let state: State = create_test_state();
    let unknown: ShiftId = ShiftId::new("s_404");

    let commands: Vec<Command> = vec![
        Command::OfferToWorker {
            shift_id: unknown.clone(),
            worker_id: WorkerId::new("w_1"),
        },
        Command::WorkerAccepts {
            shift_id: unknown.clone(),
        },
        Command::WorkerRejects {
            shift_id: unknown.clone(),
        },
        Command::StartShift {
            shift_id: unknown.clone(),
            at: crate::tests::helpers::scheduled_start(),
        },
        Command::MarkComplete {
            shift_id: unknown.clone(),
        },
        Command::ApproveAndPay {
            shift_id: unknown.clone(),
            score: 5,
            comment: None,
        },
        Command::RateFacility {
            shift_id: unknown.clone(),
            score: 5,
            comment: None,
        },
    ];

    for command in commands {
        let name: &str = command.name();
        let result = apply(&state, command, create_test_actor(), create_test_cause());
        assert_eq!(
            result,
            Err(CoreError::DomainViolation(DomainError::ShiftNotFound(
                unknown.clone()
            ))),
            "{name} should fail with not found"
        );
    }
}

#[test]
fn test_failed_command_leaves_state_unchanged() {
    let state: State = create_test_state();
    let (state, shift_id) = post_shift(&state, shift_date());
    let before: State = state.clone();

    let result = apply(
        &state,
        Command::MarkComplete { shift_id },
        create_test_actor(),
        create_test_cause(),
    );

    assert!(result.is_err());
    assert_eq!(state, before);
}
