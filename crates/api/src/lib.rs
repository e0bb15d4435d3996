// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request-level operations over the care shift marketplace.
//!
//! Handlers translate request DTOs into core commands, map failures onto
//! [`ApiError`], and hand back the new state together with the audit event
//! the caller must commit. Notification and description collaborators are
//! injected as trait objects so the transport layer decides their
//! implementations.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod collaborators;
mod error;
mod handlers;
mod idempotency;
mod request_response;

#[cfg(test)]
mod tests;

pub use collaborators::{
    DEFAULT_REQUIREMENTS, DescriptionGenerator, EMPTY_DESCRIPTION_FALLBACK,
    GENERIC_DESCRIPTION_FALLBACK, GenerationError, LogNotifier, NotificationDispatcher,
    NotificationError, TemplateDescriptionGenerator, describe_shift,
};
pub use error::{ApiError, rules, translate_core_error, translate_domain_error};
pub use handlers::{
    ApiResult, Idempotent, accept_shift, approve_facility, approve_shift, approve_worker,
    audit_event_info, check_availability, complete_shift, create_shift, describe, facility_info,
    get_facility, get_shift, get_timeline, get_worker, list_facilities, list_shifts, list_workers,
    offer_shift, parse_date, parse_document_kind, parse_time, rate_facility, register_facility,
    register_worker, reject_facility, reject_shift, reject_worker, shift_info, start_shift,
    update_facility, update_worker, verify_worker_document, worker_info,
};
pub use idempotency::{DEFAULT_LEDGER_CAPACITY, IdempotencyLedger};
pub use request_response::{
    AcceptShiftRequest, ApproveShiftRequest, ApproveShiftResponse, AuditEventInfo,
    AvailabilityResponse, CreateShiftRequest, DescribeShiftRequest, DescribeShiftResponse,
    DocumentInfo, FacilityInfo, FacilityResponse, FeedbackInfo, ListFacilitiesResponse,
    ListShiftsQuery, ListShiftsResponse, ListWorkersResponse, OfferShiftRequest,
    RateFacilityRequest, RegisterFacilityRequest, RegisterWorkerRequest, ShiftInfo, ShiftResponse,
    TimelineResponse, UpdateFacilityRequest, UpdateWorkerRequest, WorkerInfo, WorkerResponse,
};
