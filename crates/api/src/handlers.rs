// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! State-changing handlers never mutate the store they are given. They
//! return the new state alongside the response and audit event, and the
//! caller commits all three together.

use care_shifts::{
    Command, HistoryFilter, PeriodFilter, ShiftFilter, State, Subject, TransitionResult, apply,
    facilities_by_approval, list_shifts as query_shifts, worker_availability, workers_by_approval,
    workers_in_city, years_in,
};
use care_shifts_audit::{Actor, AuditEvent, AuditLog, Cause, RecordedEvent};
use care_shifts_domain::{
    ComplianceDocument, DocumentKind, DomainError, Facility, FacilityId, FacilityProfile,
    FacilityProfileUpdate, Shift, ShiftDetails, ShiftId, StatusGroup, Worker, WorkerId,
    WorkerProfile, WorkerProfileUpdate,
};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, Time};

use crate::collaborators::{DescriptionGenerator, NotificationDispatcher, describe_shift};
use crate::error::{ApiError, invalid, translate_core_error, translate_domain_error};
use crate::idempotency::IdempotencyLedger;
use crate::request_response::{
    AcceptShiftRequest, ApproveShiftRequest, ApproveShiftResponse, AuditEventInfo,
    AvailabilityResponse, CreateShiftRequest, DescribeShiftRequest, DescribeShiftResponse,
    DocumentInfo, FacilityInfo, FacilityResponse, FeedbackInfo, ListFacilitiesResponse,
    ListShiftsQuery, ListShiftsResponse, ListWorkersResponse, OfferShiftRequest,
    RateFacilityRequest, RegisterFacilityRequest, RegisterWorkerRequest, ShiftInfo, ShiftResponse,
    TimelineResponse, UpdateFacilityRequest, UpdateWorkerRequest, WorkerInfo, WorkerResponse,
};

/// The result of an API operation that includes both the response and the audit event.
///
/// This ensures that successful API operations always produce an audit trail.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The audit event generated by this operation.
    pub audit_event: AuditEvent,
    /// The new state after the operation.
    pub new_state: State,
}

/// The result of an operation that accepts an idempotency key.
#[derive(Debug, Clone, PartialEq)]
pub enum Idempotent<T> {
    /// The command was applied and must be committed.
    Applied(ApiResult<T>),
    /// The key was seen before; nothing was applied.
    Replayed(T),
}

impl<T> Idempotent<T> {
    /// The response to return to the caller.
    #[must_use]
    pub const fn response(&self) -> &T {
        match self {
            Self::Applied(result) => &result.response,
            Self::Replayed(response) => response,
        }
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

/// Converts a facility into its display form.
#[must_use]
pub fn facility_info(facility: &Facility) -> FacilityInfo {
    let profile: &FacilityProfile = facility.profile();
    FacilityInfo {
        facility_id: facility.id().to_string(),
        name: profile.name.clone(),
        city: profile.city.clone(),
        post_code: profile.post_code.clone(),
        address: profile.address.clone(),
        contact_person: profile.contact_person.clone(),
        phone_number: profile.phone_number.clone(),
        care_type: profile.care_type.clone(),
        has_parking: profile.has_parking,
        description: profile.description.clone(),
        approved: facility.is_approved(),
        rating: facility.rating().average(),
        total_ratings: facility.rating().count(),
    }
}

/// Converts a worker into its display form.
#[must_use]
pub fn worker_info(worker: &Worker) -> WorkerInfo {
    let profile: &WorkerProfile = worker.profile();
    WorkerInfo {
        worker_id: worker.id().to_string(),
        name: profile.name.clone(),
        email: profile.email.clone(),
        mobile_number: profile.mobile_number.clone(),
        city: profile.city.clone(),
        post_code: profile.post_code.clone(),
        bio: profile.bio.clone(),
        hourly_rate: profile.hourly_rate,
        skills: profile.skills.clone(),
        driving_licence_number: profile.driving_licence_number.clone(),
        visa_status: profile.visa_status.clone(),
        documents: worker.documents().iter().map(document_info).collect(),
        verified_documents: worker.verified_document_count(),
        dbs_verified: worker.has_verified(DocumentKind::Dbs),
        approved: worker.is_approved(),
        rating: worker.stats().rating.average(),
        total_ratings: worker.stats().rating.count(),
        shifts_completed: worker.stats().shifts_completed,
    }
}

fn document_info(document: &ComplianceDocument) -> DocumentInfo {
    DocumentInfo {
        kind: document.kind.to_string(),
        name: document.name.clone(),
        verified: document.verified,
    }
}

/// Converts a shift into its display form.
#[must_use]
pub fn shift_info(shift: &Shift) -> ShiftInfo {
    let details: &ShiftDetails = shift.details();
    let feedback = shift.feedback();
    ShiftInfo {
        shift_id: shift.id().to_string(),
        facility_id: shift.facility_id().to_string(),
        facility_name: shift.facility_name().to_string(),
        worker_id: shift.worker_id().map(ToString::to_string),
        title: details.title.clone(),
        description: details.description.clone(),
        date: shift.date().to_string(),
        start_time: format_start_time(details.start_time),
        duration_hours: details.duration_hours,
        hourly_rate: details.hourly_rate,
        total_pay: shift.total_pay(),
        location: details.location.clone(),
        status: shift.status().to_string(),
        feedback: FeedbackInfo {
            facility_to_worker_rating: feedback.facility_to_worker.map(u8::from),
            facility_to_worker_comment: feedback.facility_to_worker_comment.clone(),
            worker_to_facility_rating: feedback.worker_to_facility.map(u8::from),
            worker_to_facility_comment: feedback.worker_to_facility_comment.clone(),
        },
    }
}

/// Converts a recorded audit event into its display form.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted.
pub fn audit_event_info(recorded: &RecordedEvent) -> Result<AuditEventInfo, ApiError> {
    let event: &AuditEvent = &recorded.event;
    let recorded_at: String =
        recorded
            .recorded_at
            .format(&Rfc3339)
            .map_err(|e| ApiError::Internal {
                message: format!("Failed to format audit timestamp: {e}"),
            })?;

    Ok(AuditEventInfo {
        event_id: recorded.event_id,
        recorded_at,
        actor_id: event.actor.id.clone(),
        actor_type: event.actor.actor_type.clone(),
        cause_id: event.cause.id.clone(),
        cause_description: event.cause.description.clone(),
        action: event.action.name.clone(),
        details: event.action.details.clone(),
        subject: event.subject.clone(),
        before: event.before.data.clone(),
        after: event.after.data.clone(),
    })
}

fn format_start_time(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Parses a `YYYY-MM-DD` date supplied for `field`.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` naming `field` if the text is not a date.
pub fn parse_date(field: &str, value: &str) -> Result<Date, ApiError> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|e| invalid(field, format!("'{value}' is not a YYYY-MM-DD date: {e}")))
}

/// Parses an `HH:MM` time supplied for `field`.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` naming `field` if the text is not a time.
pub fn parse_time(field: &str, value: &str) -> Result<Time, ApiError> {
    Time::parse(value.trim(), format_description!("[hour]:[minute]"))
        .map_err(|e| invalid(field, format!("'{value}' is not an HH:MM time: {e}")))
}

/// Parses a document kind supplied for `document_kind`.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the kind is unknown.
pub fn parse_document_kind(value: &str) -> Result<DocumentKind, ApiError> {
    value.parse().map_err(translate_domain_error)
}

fn parse_period<T: std::str::FromStr>(
    field: &str,
    value: Option<&str>,
) -> Result<PeriodFilter<T>, ApiError> {
    match value.map(str::trim) {
        None | Some("") => Ok(PeriodFilter::All),
        Some(v) if v.eq_ignore_ascii_case("ALL") => Ok(PeriodFilter::All),
        Some(v) => v
            .parse()
            .map(PeriodFilter::Only)
            .map_err(|_| invalid(field, format!("'{v}' is not a number or ALL"))),
    }
}

fn parse_history_filter(query: &ListShiftsQuery) -> Result<HistoryFilter, ApiError> {
    let year: PeriodFilter<i32> = parse_period("year", query.year.as_deref())?;
    let month: PeriodFilter<u8> = parse_period("month", query.month.as_deref())?;
    if let PeriodFilter::Only(m) = month {
        if !(1..=12).contains(&m) {
            return Err(invalid("month", format!("{m} is not a month (1-12)")));
        }
    }
    Ok(HistoryFilter { year, month })
}

// ---------------------------------------------------------------------------
// Facilities
// ---------------------------------------------------------------------------

/// Registers a new, unapproved facility.
///
/// # Errors
///
/// Returns an error if the name or city is blank.
pub fn register_facility(
    state: &State,
    request: RegisterFacilityRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<FacilityResponse>, ApiError> {
    let profile: FacilityProfile = FacilityProfile {
        name: request.name,
        city: request.city,
        post_code: request.post_code,
        address: request.address,
        contact_person: request.contact_person,
        phone_number: request.phone_number,
        care_type: request.care_type,
        has_parking: request.has_parking,
        description: request.description,
    };

    let result: TransitionResult = apply(
        state,
        Command::RegisterFacility { profile },
        actor,
        cause,
    )
    .map_err(translate_core_error)?;
    let facility: &Facility = facility_subject(&result)?;

    tracing::info!(facility_id = %facility.id(), "Registered facility");
    let response: FacilityResponse = FacilityResponse {
        message: format!(
            "Registered facility '{}'; awaiting approval",
            facility.profile().name
        ),
        facility: Some(facility_info(facility)),
    };

    Ok(ApiResult {
        response,
        audit_event: result.audit_event,
        new_state: result.new_state,
    })
}

/// Approves a pending facility.
///
/// # Errors
///
/// Returns an error if the facility does not exist or is already approved.
pub fn approve_facility(
    state: &State,
    facility_id: &str,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<FacilityResponse>, ApiError> {
    let command: Command = Command::ApproveFacility {
        facility_id: FacilityId::new(facility_id),
    };
    let result: TransitionResult =
        apply(state, command, actor, cause).map_err(translate_core_error)?;
    let facility: &Facility = facility_subject(&result)?;

    tracing::info!(facility_id, "Approved facility");
    let response: FacilityResponse = FacilityResponse {
        message: format!("Approved facility '{}'", facility.profile().name),
        facility: Some(facility_info(facility)),
    };

    Ok(ApiResult {
        response,
        audit_event: result.audit_event,
        new_state: result.new_state,
    })
}

/// Rejects and deletes a pending facility.
///
/// # Errors
///
/// Returns an error if the facility does not exist or is already approved.
pub fn reject_facility(
    state: &State,
    facility_id: &str,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<FacilityResponse>, ApiError> {
    let command: Command = Command::RejectFacility {
        facility_id: FacilityId::new(facility_id),
    };
    let result: TransitionResult =
        apply(state, command, actor, cause).map_err(translate_core_error)?;

    tracing::info!(facility_id, "Rejected facility registration");
    Ok(ApiResult {
        response: FacilityResponse {
            facility: None,
            message: format!("Rejected facility '{facility_id}'"),
        },
        audit_event: result.audit_event,
        new_state: result.new_state,
    })
}

/// Edits the allowlisted fields of a facility profile.
///
/// # Errors
///
/// Returns an error if the facility does not exist or the merged profile
/// is invalid.
pub fn update_facility(
    state: &State,
    facility_id: &str,
    request: UpdateFacilityRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<FacilityResponse>, ApiError> {
    let update: FacilityProfileUpdate = FacilityProfileUpdate {
        name: request.name,
        city: request.city,
        post_code: request.post_code,
        address: request.address,
        contact_person: request.contact_person,
        phone_number: request.phone_number,
        care_type: request.care_type,
        has_parking: request.has_parking,
        description: request.description,
    };
    let command: Command = Command::UpdateFacilityProfile {
        facility_id: FacilityId::new(facility_id),
        update,
    };
    let result: TransitionResult =
        apply(state, command, actor, cause).map_err(translate_core_error)?;
    let facility: &Facility = facility_subject(&result)?;

    let response: FacilityResponse = FacilityResponse {
        message: format!("Updated facility '{}'", facility.profile().name),
        facility: Some(facility_info(facility)),
    };

    Ok(ApiResult {
        response,
        audit_event: result.audit_event,
        new_state: result.new_state,
    })
}

/// Reads one facility.
///
/// # Errors
///
/// Returns an error if the facility does not exist.
pub fn get_facility(state: &State, facility_id: &str) -> Result<FacilityInfo, ApiError> {
    state
        .facility(&FacilityId::new(facility_id))
        .map(facility_info)
        .map_err(translate_domain_error)
}

/// Lists facilities, optionally by approval flag.
#[must_use]
pub fn list_facilities(state: &State, approved: Option<bool>) -> ListFacilitiesResponse {
    let facilities: Vec<&Facility> = match approved {
        Some(flag) => facilities_by_approval(state, flag),
        None => state.facilities().collect(),
    };
    ListFacilitiesResponse {
        facilities: facilities.into_iter().map(facility_info).collect(),
    }
}

// ---------------------------------------------------------------------------
// Workers
// ---------------------------------------------------------------------------

/// Registers a new, unapproved worker and sends a welcome message.
///
/// # Errors
///
/// Returns an error if the name or city is blank or the rate is invalid.
pub fn register_worker(
    state: &State,
    request: RegisterWorkerRequest,
    notifier: &dyn NotificationDispatcher,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<WorkerResponse>, ApiError> {
    let documents: Vec<DocumentKind> = request
        .documents
        .iter()
        .map(String::as_str)
        .map(parse_document_kind)
        .collect::<Result<_, _>>()?;
    let profile: WorkerProfile = WorkerProfile {
        name: request.name,
        email: request.email,
        mobile_number: request.mobile_number,
        city: request.city,
        post_code: request.post_code,
        bio: request.bio,
        hourly_rate: request.hourly_rate,
        skills: request.skills,
        driving_licence_number: request.driving_licence_number,
        visa_status: request.visa_status,
    };

    let command: Command = Command::RegisterWorker { profile, documents };
    let result: TransitionResult =
        apply(state, command, actor, cause).map_err(translate_core_error)?;
    let worker: &Worker = worker_subject(&result)?;

    tracing::info!(worker_id = %worker.id(), "Registered worker");
    if let Err(e) = notifier.welcome(worker) {
        tracing::warn!(worker_id = %worker.id(), error = %e, "Welcome message not sent");
    }

    let response: WorkerResponse = WorkerResponse {
        message: format!(
            "Registered worker '{}'; awaiting approval",
            worker.profile().name
        ),
        worker: Some(worker_info(worker)),
    };

    Ok(ApiResult {
        response,
        audit_event: result.audit_event,
        new_state: result.new_state,
    })
}

/// Approves a pending worker.
///
/// # Errors
///
/// Returns an error if the worker does not exist or is already approved.
pub fn approve_worker(
    state: &State,
    worker_id: &str,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<WorkerResponse>, ApiError> {
    let command: Command = Command::ApproveWorker {
        worker_id: WorkerId::new(worker_id),
    };
    let result: TransitionResult =
        apply(state, command, actor, cause).map_err(translate_core_error)?;
    let worker: &Worker = worker_subject(&result)?;

    tracing::info!(worker_id, "Approved worker");
    let response: WorkerResponse = WorkerResponse {
        message: format!("Approved worker '{}'", worker.profile().name),
        worker: Some(worker_info(worker)),
    };

    Ok(ApiResult {
        response,
        audit_event: result.audit_event,
        new_state: result.new_state,
    })
}

/// Rejects and deletes a pending worker.
///
/// # Errors
///
/// Returns an error if the worker does not exist or is already approved.
pub fn reject_worker(
    state: &State,
    worker_id: &str,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<WorkerResponse>, ApiError> {
    let command: Command = Command::RejectWorker {
        worker_id: WorkerId::new(worker_id),
    };
    let result: TransitionResult =
        apply(state, command, actor, cause).map_err(translate_core_error)?;

    tracing::info!(worker_id, "Rejected worker registration");
    Ok(ApiResult {
        response: WorkerResponse {
            worker: None,
            message: format!("Rejected worker '{worker_id}'"),
        },
        audit_event: result.audit_event,
        new_state: result.new_state,
    })
}

/// Edits the allowlisted fields of a worker profile.
///
/// # Errors
///
/// Returns an error if the worker does not exist or the merged profile is
/// invalid.
pub fn update_worker(
    state: &State,
    worker_id: &str,
    request: UpdateWorkerRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<WorkerResponse>, ApiError> {
    let update: WorkerProfileUpdate = WorkerProfileUpdate {
        name: request.name,
        email: request.email,
        mobile_number: request.mobile_number,
        city: request.city,
        post_code: request.post_code,
        bio: request.bio,
        hourly_rate: request.hourly_rate,
        skills: request.skills,
        driving_licence_number: request.driving_licence_number,
        visa_status: request.visa_status,
    };
    let command: Command = Command::UpdateWorkerProfile {
        worker_id: WorkerId::new(worker_id),
        update,
    };
    let result: TransitionResult =
        apply(state, command, actor, cause).map_err(translate_core_error)?;
    let worker: &Worker = worker_subject(&result)?;

    let response: WorkerResponse = WorkerResponse {
        message: format!("Updated worker '{}'", worker.profile().name),
        worker: Some(worker_info(worker)),
    };

    Ok(ApiResult {
        response,
        audit_event: result.audit_event,
        new_state: result.new_state,
    })
}

/// Marks one of a worker's declared documents verified.
///
/// # Errors
///
/// Returns an error if:
/// - The worker does not exist
/// - The kind is unknown or was never declared
/// - The document is already verified
pub fn verify_worker_document(
    state: &State,
    worker_id: &str,
    kind: &str,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<WorkerResponse>, ApiError> {
    let kind: DocumentKind = parse_document_kind(kind)?;
    let command: Command = Command::VerifyWorkerDocument {
        worker_id: WorkerId::new(worker_id),
        kind,
    };
    let result: TransitionResult =
        apply(state, command, actor, cause).map_err(translate_core_error)?;
    let worker: &Worker = worker_subject(&result)?;

    tracing::info!(worker_id, kind = %kind, "Verified worker document");
    let response: WorkerResponse = WorkerResponse {
        message: format!(
            "Verified {kind} document for '{}'; {} of {} verified",
            worker.profile().name,
            worker.verified_document_count(),
            worker.documents().len()
        ),
        worker: Some(worker_info(worker)),
    };

    Ok(ApiResult {
        response,
        audit_event: result.audit_event,
        new_state: result.new_state,
    })
}

/// Reads one worker.
///
/// # Errors
///
/// Returns an error if the worker does not exist.
pub fn get_worker(state: &State, worker_id: &str) -> Result<WorkerInfo, ApiError> {
    state
        .worker(&WorkerId::new(worker_id))
        .map(worker_info)
        .map_err(translate_domain_error)
}

/// Lists workers, optionally by approval flag and city.
#[must_use]
pub fn list_workers(
    state: &State,
    approved: Option<bool>,
    city: Option<&str>,
) -> ListWorkersResponse {
    let candidates: Vec<&Worker> = match (approved, city) {
        (_, Some(city)) => workers_in_city(state, city),
        (Some(flag), None) => workers_by_approval(state, flag),
        (None, None) => state.workers().collect(),
    };
    ListWorkersResponse {
        workers: candidates
            .into_iter()
            .filter(|worker| approved.is_none_or(|flag| worker.is_approved() == flag))
            .map(worker_info)
            .collect(),
    }
}

/// Checks whether a worker is free on a date.
///
/// # Errors
///
/// Returns an error if the worker does not exist or the date is malformed.
pub fn check_availability(
    state: &State,
    worker_id: &str,
    date: &str,
    exclude: Option<&str>,
) -> Result<AvailabilityResponse, ApiError> {
    let parsed: Date = parse_date("date", date)?;
    let excluding: Option<ShiftId> = exclude.map(ShiftId::new);
    let available: bool = worker_availability(
        state,
        &WorkerId::new(worker_id),
        parsed,
        excluding.as_ref(),
    )
    .map_err(translate_domain_error)?;

    Ok(AvailabilityResponse {
        worker_id: worker_id.to_string(),
        date: parsed.to_string(),
        available,
    })
}

// ---------------------------------------------------------------------------
// Shifts
// ---------------------------------------------------------------------------

/// Posts a new open shift.
///
/// # Errors
///
/// Returns an error if:
/// - The facility does not exist or is not approved
/// - The date or start time is malformed
/// - A field fails validation
pub fn create_shift(
    state: &State,
    request: CreateShiftRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<ShiftResponse>, ApiError> {
    let duration_hours: u8 = u8::try_from(request.duration_hours).map_err(|_| {
        translate_domain_error(DomainError::InvalidDuration {
            hours: request.duration_hours,
        })
    })?;
    let details: ShiftDetails = ShiftDetails {
        date: parse_date("date", &request.date)?,
        start_time: parse_time("start_time", &request.start_time)?,
        title: request.title,
        description: request.description,
        duration_hours,
        hourly_rate: request.hourly_rate,
        location: request.location,
    };
    let command: Command = Command::CreateShift {
        facility_id: FacilityId::new(request.facility_id),
        details,
    };

    let result: ApiResult<ShiftResponse> = apply_shift_command(state, command, actor, cause, |s| {
        format!("Posted shift '{}' on {}", s.details().title, s.date())
    })?;
    tracing::info!(
        shift_id = %result.response.shift.shift_id,
        facility_id = %result.response.shift.facility_id,
        "Shift posted"
    );
    Ok(result)
}

/// Drafts a description for a shift that is about to be posted.
#[must_use]
pub fn describe(
    generator: &dyn DescriptionGenerator,
    request: &DescribeShiftRequest,
) -> DescribeShiftResponse {
    DescribeShiftResponse {
        description: describe_shift(generator, &request.title, request.requirements.as_deref()),
    }
}

/// Offers an open shift to a worker and notifies them.
///
/// A failed notification is logged and does not undo the offer.
///
/// # Errors
///
/// Returns an error if the shift is not open or the worker does not exist
/// or is not approved.
pub fn offer_shift(
    state: &State,
    shift_id: &str,
    request: OfferShiftRequest,
    notifier: &dyn NotificationDispatcher,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<ShiftResponse>, ApiError> {
    let worker_id: WorkerId = WorkerId::new(request.worker_id);
    let command: Command = Command::OfferToWorker {
        shift_id: ShiftId::new(shift_id),
        worker_id: worker_id.clone(),
    };
    let result: ApiResult<ShiftResponse> = apply_shift_command(state, command, actor, cause, |s| {
        format!("Offered '{}' to worker '{worker_id}'", s.details().title)
    })?;

    tracing::info!(shift_id, worker_id = %worker_id, "Shift offered");
    let id: ShiftId = ShiftId::new(shift_id);
    if let (Ok(worker), Ok(shift)) = (
        result.new_state.worker(&worker_id),
        result.new_state.shift(&id),
    ) {
        if let Err(e) = notifier.notify(worker, shift) {
            tracing::warn!(shift_id, worker_id = %worker_id, error = %e, "Offer notification not sent");
        }
    }

    Ok(result)
}

/// The offered worker accepts the shift.
///
/// # Errors
///
/// Returns an error if:
/// - The shift is not pending acceptance
/// - The worker already holds a confirmed shift on the same date
/// - The idempotency key was used for a different shift
pub fn accept_shift(
    state: &State,
    ledger: &mut IdempotencyLedger<ShiftResponse>,
    shift_id: &str,
    request: AcceptShiftRequest,
    actor: Actor,
    cause: Cause,
) -> Result<Idempotent<ShiftResponse>, ApiError> {
    let id: ShiftId = ShiftId::new(shift_id);
    if let Some(key) = request.idempotency_key.as_deref() {
        if let Some(response) = ledger.replay(key, &id)? {
            tracing::debug!(shift_id, key, "Replaying accepted shift");
            return Ok(Idempotent::Replayed(response));
        }
    }

    let command: Command = Command::WorkerAccepts {
        shift_id: id.clone(),
    };
    let result: ApiResult<ShiftResponse> = apply_shift_command(state, command, actor, cause, |s| {
        format!("Booked '{}' on {}", s.details().title, s.date())
    })?;

    tracing::info!(shift_id, "Shift accepted");
    if let Some(key) = request.idempotency_key.as_deref() {
        ledger.record(key, &id, &result.response);
    }
    Ok(Idempotent::Applied(result))
}

/// The offered worker declines the shift, returning it to open.
///
/// # Errors
///
/// Returns an error if the shift is not pending acceptance.
pub fn reject_shift(
    state: &State,
    shift_id: &str,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<ShiftResponse>, ApiError> {
    let command: Command = Command::WorkerRejects {
        shift_id: ShiftId::new(shift_id),
    };
    let result: ApiResult<ShiftResponse> = apply_shift_command(state, command, actor, cause, |s| {
        format!("Declined '{}'; the shift is open again", s.details().title)
    })?;
    tracing::info!(shift_id, "Shift declined");
    Ok(result)
}

/// The worker starts a booked shift at `now`.
///
/// # Errors
///
/// Returns an error if the shift is not booked or the start window has
/// not opened.
pub fn start_shift(
    state: &State,
    shift_id: &str,
    now: OffsetDateTime,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<ShiftResponse>, ApiError> {
    let command: Command = Command::StartShift {
        shift_id: ShiftId::new(shift_id),
        at: now,
    };
    let result: ApiResult<ShiftResponse> = apply_shift_command(state, command, actor, cause, |s| {
        format!("Started '{}'", s.details().title)
    })?;
    tracing::info!(shift_id, "Shift started");
    Ok(result)
}

/// The worker marks a shift in progress as finished.
///
/// # Errors
///
/// Returns an error if the shift is not in progress.
pub fn complete_shift(
    state: &State,
    shift_id: &str,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<ShiftResponse>, ApiError> {
    let command: Command = Command::MarkComplete {
        shift_id: ShiftId::new(shift_id),
    };
    let result: ApiResult<ShiftResponse> = apply_shift_command(state, command, actor, cause, |s| {
        format!("Completed '{}'; awaiting facility approval", s.details().title)
    })?;
    tracing::info!(shift_id, "Shift completed");
    Ok(result)
}

/// The facility approves a completed shift and rates the worker.
///
/// # Errors
///
/// Returns an error if:
/// - The shift is not awaiting approval
/// - The rating is outside 1..=5
/// - The idempotency key was used for a different shift
pub fn approve_shift(
    state: &State,
    ledger: &mut IdempotencyLedger<ApproveShiftResponse>,
    shift_id: &str,
    request: ApproveShiftRequest,
    actor: Actor,
    cause: Cause,
) -> Result<Idempotent<ApproveShiftResponse>, ApiError> {
    let id: ShiftId = ShiftId::new(shift_id);
    if let Some(key) = request.idempotency_key.as_deref() {
        if let Some(response) = ledger.replay(key, &id)? {
            tracing::debug!(shift_id, key, "Replaying approved shift");
            return Ok(Idempotent::Replayed(response));
        }
    }

    let command: Command = Command::ApproveAndPay {
        shift_id: id.clone(),
        score: request.rating,
        comment: request.comment,
    };
    let result: TransitionResult =
        apply(state, command, actor, cause).map_err(translate_core_error)?;

    let shift: &Shift = result
        .new_state
        .shift(&id)
        .map_err(translate_domain_error)?;
    let worker_id: &WorkerId = shift.worker_id().ok_or_else(|| ApiError::Internal {
        message: format!("Closed shift '{shift_id}' has no worker"),
    })?;
    let worker: &Worker = result
        .new_state
        .worker(worker_id)
        .map_err(translate_domain_error)?;

    tracing::info!(
        shift_id,
        worker_id = %worker_id,
        rating = request.rating,
        "Shift approved and paid"
    );
    let response: ApproveShiftResponse = ApproveShiftResponse {
        shift: shift_info(shift),
        worker: worker_info(worker),
        message: format!(
            "Approved '{}'; {} is now rated {:.1} over {} shifts",
            shift.details().title,
            worker.profile().name,
            worker.stats().rating.average(),
            worker.stats().rating.count()
        ),
    };

    if let Some(key) = request.idempotency_key.as_deref() {
        ledger.record(key, &id, &response);
    }
    Ok(Idempotent::Applied(ApiResult {
        response,
        audit_event: result.audit_event,
        new_state: result.new_state,
    }))
}

/// The worker rates the facility for a closed shift.
///
/// # Errors
///
/// Returns an error if the shift is not closed, was already rated, or the
/// rating is outside 1..=5.
pub fn rate_facility(
    state: &State,
    shift_id: &str,
    request: RateFacilityRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<ShiftResponse>, ApiError> {
    let command: Command = Command::RateFacility {
        shift_id: ShiftId::new(shift_id),
        score: request.rating,
        comment: request.comment,
    };
    let result: ApiResult<ShiftResponse> = apply_shift_command(state, command, actor, cause, |s| {
        format!("Rated {} for '{}'", s.facility_name(), s.details().title)
    })?;
    tracing::info!(shift_id, rating = request.rating, "Facility rated");
    Ok(result)
}

/// Reads one shift.
///
/// # Errors
///
/// Returns an error if the shift does not exist.
pub fn get_shift(state: &State, shift_id: &str) -> Result<ShiftInfo, ApiError> {
    state
        .shift(&ShiftId::new(shift_id))
        .map(shift_info)
        .map_err(translate_domain_error)
}

/// Lists shifts matching the query, newest first.
///
/// # Errors
///
/// Returns an error if the group, year or month cannot be parsed.
pub fn list_shifts(state: &State, query: &ListShiftsQuery) -> Result<ListShiftsResponse, ApiError> {
    let group: Option<StatusGroup> = query
        .group
        .as_deref()
        .map(str::parse::<StatusGroup>)
        .transpose()
        .map_err(translate_domain_error)?;

    let period: HistoryFilter = parse_history_filter(query)?;
    let mut filter: ShiftFilter = ShiftFilter {
        facility_id: query.facility_id.as_deref().map(FacilityId::new),
        worker_id: query.worker_id.as_deref().map(WorkerId::new),
        group,
        period: HistoryFilter::default(),
    };
    // Years ignore the period filter.
    let years: Vec<i32> = years_in(query_shifts(state, &filter));
    filter.period = period;

    Ok(ListShiftsResponse {
        years,
        shifts: query_shifts(state, &filter)
            .into_iter()
            .map(shift_info)
            .collect(),
    })
}

// ---------------------------------------------------------------------------
// Audit
// ---------------------------------------------------------------------------

/// Lists audit events in append order, optionally for one subject.
///
/// # Errors
///
/// Returns an error if an event timestamp cannot be formatted.
pub fn get_timeline(log: &AuditLog, subject: Option<&str>) -> Result<TimelineResponse, ApiError> {
    let events: Vec<AuditEventInfo> = log
        .timeline(subject)
        .into_iter()
        .map(audit_event_info)
        .collect::<Result<_, _>>()?;
    Ok(TimelineResponse { events })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn apply_shift_command(
    state: &State,
    command: Command,
    actor: Actor,
    cause: Cause,
    message: impl FnOnce(&Shift) -> String,
) -> Result<ApiResult<ShiftResponse>, ApiError> {
    let result: TransitionResult =
        apply(state, command, actor, cause).map_err(translate_core_error)?;
    let Subject::Shift(shift_id) = &result.subject else {
        return Err(unexpected_subject(&result.subject));
    };
    let shift: &Shift = result
        .new_state
        .shift(shift_id)
        .map_err(translate_domain_error)?;

    let response: ShiftResponse = ShiftResponse {
        message: message(shift),
        shift: shift_info(shift),
    };
    Ok(ApiResult {
        response,
        audit_event: result.audit_event,
        new_state: result.new_state,
    })
}

fn facility_subject(result: &TransitionResult) -> Result<&Facility, ApiError> {
    match &result.subject {
        Subject::Facility(id) => result.new_state.facility(id).map_err(translate_domain_error),
        other => Err(unexpected_subject(other)),
    }
}

fn worker_subject(result: &TransitionResult) -> Result<&Worker, ApiError> {
    match &result.subject {
        Subject::Worker(id) => result.new_state.worker(id).map_err(translate_domain_error),
        other => Err(unexpected_subject(other)),
    }
}

fn unexpected_subject(subject: &Subject) -> ApiError {
    ApiError::Internal {
        message: format!("Command changed unexpected record {subject}"),
    }
}
