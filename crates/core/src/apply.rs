// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The shift lifecycle engine.
//!
//! `apply` works on a clone of the current state. On success the caller
//! swaps in `new_state`; on failure the caller's state is untouched, so
//! every failed command leaves the store unchanged.

use crate::command::Command;
use crate::error::CoreError;
use crate::registry;
use crate::state::{State, Subject, TransitionResult, absent_snapshot, shift_snapshot};
use care_shifts_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use care_shifts_domain::{
    DomainError, FacilityId, Rating, Shift, ShiftDetails, ShiftId, ShiftStatus, StartWindow,
    WorkerId, ensure_worker_available, resolve_start_window, validate_shift_details,
};
use time::OffsetDateTime;

/// What a successful command changed, before it is wrapped in an audit event.
pub(crate) struct Change {
    pub subject: Subject,
    pub before: StateSnapshot,
    pub after: StateSnapshot,
    pub details: Option<String>,
}

/// Applies a command to the current state, producing a new state and audit event.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and audit event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - A referenced shift, worker or facility does not exist
/// - The shift is not in the status the command requires
/// - A rating is outside 1..=5
/// - A shift is started before its start window opens
/// - Accepting would double-book the worker
/// - The facility or worker has not been approved
/// - A supplied field fails validation
pub fn apply(
    state: &State,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    let action_name: &'static str = command.name();
    let mut new_state: State = state.clone();

    let change: Change = match command {
        Command::CreateShift {
            facility_id,
            details,
        } => create_shift(&mut new_state, &facility_id, details)?,
        Command::OfferToWorker {
            shift_id,
            worker_id,
        } => offer_to_worker(&mut new_state, &shift_id, worker_id)?,
        Command::WorkerAccepts { shift_id } => worker_accepts(&mut new_state, &shift_id)?,
        Command::WorkerRejects { shift_id } => worker_rejects(&mut new_state, &shift_id)?,
        Command::StartShift { shift_id, at } => start_shift(&mut new_state, &shift_id, at)?,
        Command::MarkComplete { shift_id } => mark_complete(&mut new_state, &shift_id)?,
        Command::ApproveAndPay {
            shift_id,
            score,
            comment,
        } => approve_and_pay(&mut new_state, &shift_id, score, comment)?,
        Command::RateFacility {
            shift_id,
            score,
            comment,
        } => rate_facility(&mut new_state, &shift_id, score, comment)?,
        registry_command => registry::apply_registry(&mut new_state, registry_command)?,
    };

    let action: Action = Action::new(String::from(action_name), change.details);
    let audit_event: AuditEvent = AuditEvent::new(
        actor,
        cause,
        action,
        change.subject.to_string(),
        change.before,
        change.after,
    );

    Ok(TransitionResult {
        new_state,
        audit_event,
        subject: change.subject,
    })
}

fn create_shift(
    state: &mut State,
    facility_id: &FacilityId,
    details: ShiftDetails,
) -> Result<Change, CoreError> {
    let facility = state.facility(facility_id)?;
    if !facility.is_approved() {
        return Err(DomainError::FacilityNotApproved(facility_id.clone()).into());
    }
    validate_shift_details(&details, state.timezone())?;

    let facility = facility.clone();
    let shift_id: ShiftId = state.allocate_shift_id();
    let shift: Shift = Shift::open(shift_id.clone(), &facility, details);
    let after: StateSnapshot = shift_snapshot(&shift);
    let summary: String = format!(
        "Posted '{}' on {} at {} for {}h",
        shift.details().title,
        shift.date(),
        shift.details().start_time,
        shift.details().duration_hours
    );
    state.add_shift(shift);

    Ok(Change {
        subject: Subject::Shift(shift_id),
        before: absent_snapshot(),
        after,
        details: Some(summary),
    })
}

fn offer_to_worker(
    state: &mut State,
    shift_id: &ShiftId,
    worker_id: WorkerId,
) -> Result<Change, CoreError> {
    state
        .shift(shift_id)?
        .ensure_can_transition_to(ShiftStatus::PendingAcceptance)?;

    let worker = state.worker(&worker_id)?;
    if !worker.is_approved() {
        return Err(DomainError::WorkerNotApproved(worker_id).into());
    }

    let details: String = format!("Offered to worker '{worker_id}'");
    let shift: &mut Shift = state.shift_mut(shift_id)?;
    let before: StateSnapshot = shift_snapshot(shift);
    shift.offer_to(worker_id)?;

    Ok(Change {
        subject: Subject::Shift(shift_id.clone()),
        before,
        after: shift_snapshot(shift),
        details: Some(details),
    })
}

fn worker_accepts(state: &mut State, shift_id: &ShiftId) -> Result<Change, CoreError> {
    let shift: &Shift = state.shift(shift_id)?;
    shift.ensure_can_transition_to(ShiftStatus::Booked)?;

    let worker_id: WorkerId = assigned_worker(shift)?;
    ensure_worker_available(state.shifts(), &worker_id, shift.date(), Some(shift_id))?;

    transition(state, shift_id, None, Shift::accept)
}

fn worker_rejects(state: &mut State, shift_id: &ShiftId) -> Result<Change, CoreError> {
    let worker_id: Option<WorkerId> = state.shift(shift_id)?.worker_id().cloned();
    let details: Option<String> = worker_id.map(|id| format!("Declined by worker '{id}'"));
    transition(state, shift_id, details, Shift::decline)
}

fn start_shift(
    state: &mut State,
    shift_id: &ShiftId,
    at: OffsetDateTime,
) -> Result<Change, CoreError> {
    let shift: &Shift = state.shift(shift_id)?;
    shift.ensure_can_transition_to(ShiftStatus::InProgress)?;

    let window: StartWindow =
        resolve_start_window(shift.date(), shift.details().start_time, state.timezone())?;
    window.ensure_open_at(shift_id, at)?;

    transition(state, shift_id, Some(format!("Started at {at}")), Shift::start)
}

fn mark_complete(state: &mut State, shift_id: &ShiftId) -> Result<Change, CoreError> {
    transition(state, shift_id, None, Shift::complete)
}

fn approve_and_pay(
    state: &mut State,
    shift_id: &ShiftId,
    score: i64,
    comment: Option<String>,
) -> Result<Change, CoreError> {
    let shift: &Shift = state.shift(shift_id)?;
    let rating: Rating = Rating::from_score(score)?;
    shift.ensure_can_transition_to(ShiftStatus::Closed)?;
    let worker_id: WorkerId = assigned_worker(shift)?;

    // Fail before touching the shift if the worker record is gone.
    state.worker(&worker_id)?;

    let shift: &mut Shift = state.shift_mut(shift_id)?;
    let before: StateSnapshot = shift_snapshot(shift);
    shift.close(rating, comment)?;
    let after: StateSnapshot = shift_snapshot(shift);

    let worker = state.worker_mut(&worker_id)?;
    worker.record_completed_shift(rating);
    let details: String = format!(
        "Worker '{worker_id}' rated {}; average now {:.4} over {} ratings",
        rating.value(),
        worker.stats().rating.average(),
        worker.stats().rating.count()
    );

    Ok(Change {
        subject: Subject::Shift(shift_id.clone()),
        before,
        after,
        details: Some(details),
    })
}

fn rate_facility(
    state: &mut State,
    shift_id: &ShiftId,
    score: i64,
    comment: Option<String>,
) -> Result<Change, CoreError> {
    let facility_id: FacilityId = state.shift(shift_id)?.facility_id().clone();
    let rating: Rating = Rating::from_score(score)?;
    state.facility(&facility_id)?;

    let shift: &mut Shift = state.shift_mut(shift_id)?;
    let before: StateSnapshot = shift_snapshot(shift);
    shift.rate_facility(rating, comment)?;
    let after: StateSnapshot = shift_snapshot(shift);

    let facility = state.facility_mut(&facility_id)?;
    facility.record_rating(rating);
    let details: String = format!(
        "Facility '{facility_id}' rated {}; average now {:.4} over {} ratings",
        rating.value(),
        facility.rating().average(),
        facility.rating().count()
    );

    Ok(Change {
        subject: Subject::Shift(shift_id.clone()),
        before,
        after,
        details: Some(details),
    })
}

fn transition(
    state: &mut State,
    shift_id: &ShiftId,
    details: Option<String>,
    step: fn(&mut Shift) -> Result<(), DomainError>,
) -> Result<Change, CoreError> {
    let shift: &mut Shift = state.shift_mut(shift_id)?;
    let before: StateSnapshot = shift_snapshot(shift);
    step(shift)?;
    Ok(Change {
        subject: Subject::Shift(shift_id.clone()),
        before,
        after: shift_snapshot(shift),
        details,
    })
}

fn assigned_worker(shift: &Shift) -> Result<WorkerId, CoreError> {
    shift.worker_id().cloned().ok_or_else(|| {
        CoreError::Internal(format!(
            "shift '{}' is {} but has no assigned worker",
            shift.id(),
            shift.status()
        ))
    })
}
