// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates travel as `YYYY-MM-DD` strings and start times as `HH:MM`.

use serde::{Deserialize, Serialize};

/// API request to register a care facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterFacilityRequest {
    /// Display name.
    pub name: String,
    /// City.
    pub city: String,
    /// Post code.
    #[serde(default)]
    pub post_code: Option<String>,
    /// Street address.
    #[serde(default)]
    pub address: Option<String>,
    /// Named contact.
    #[serde(default)]
    pub contact_person: Option<String>,
    /// Landline.
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Kind of care provided.
    #[serde(default)]
    pub care_type: Option<String>,
    /// Whether on-site parking is available.
    #[serde(default)]
    pub has_parking: bool,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
}

/// API request to edit a facility profile.
///
/// Unknown fields, including ratings and the approval flag, are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateFacilityRequest {
    /// New display name.
    #[serde(default)]
    pub name: Option<String>,
    /// New city.
    #[serde(default)]
    pub city: Option<String>,
    /// New post code.
    #[serde(default)]
    pub post_code: Option<String>,
    /// New street address.
    #[serde(default)]
    pub address: Option<String>,
    /// New contact.
    #[serde(default)]
    pub contact_person: Option<String>,
    /// New landline.
    #[serde(default)]
    pub phone_number: Option<String>,
    /// New care type.
    #[serde(default)]
    pub care_type: Option<String>,
    /// New parking flag.
    #[serde(default)]
    pub has_parking: Option<bool>,
    /// New description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Facility information for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityInfo {
    /// The facility identifier.
    pub facility_id: String,
    /// Display name.
    pub name: String,
    /// City.
    pub city: String,
    /// Post code.
    pub post_code: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// Named contact.
    pub contact_person: Option<String>,
    /// Landline.
    pub phone_number: Option<String>,
    /// Kind of care provided.
    pub care_type: Option<String>,
    /// Whether on-site parking is available.
    pub has_parking: bool,
    /// Free-text description.
    pub description: Option<String>,
    /// Whether the registration has been approved.
    pub approved: bool,
    /// Average of worker ratings.
    pub rating: f64,
    /// Number of worker ratings.
    pub total_ratings: u32,
}

/// API response for facility commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityResponse {
    /// The facility after the command; `None` once rejected.
    pub facility: Option<FacilityInfo>,
    /// A success message.
    pub message: String,
}

/// API response listing facilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListFacilitiesResponse {
    /// The matching facilities.
    pub facilities: Vec<FacilityInfo>,
}

/// API request to register a care worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterWorkerRequest {
    /// Display name.
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Mobile number.
    #[serde(default)]
    pub mobile_number: Option<String>,
    /// Home city.
    pub city: String,
    /// Post code.
    #[serde(default)]
    pub post_code: Option<String>,
    /// Free-text biography.
    #[serde(default)]
    pub bio: String,
    /// Expected hourly rate.
    pub hourly_rate: f64,
    /// Declared skills.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Driving licence number, if the worker drives.
    #[serde(default)]
    pub driving_licence_number: Option<String>,
    /// Right-to-work status.
    #[serde(default)]
    pub visa_status: Option<String>,
    /// Compliance documents held: any of `DBS`, `ID`, `CERTIFICATE`.
    #[serde(default)]
    pub documents: Vec<String>,
}

/// API request to edit a worker profile.
///
/// Unknown fields, including ratings, counters, document verification
/// and the approval flag, are rejected. A blank string clears an optional
/// text field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateWorkerRequest {
    /// New display name.
    #[serde(default)]
    pub name: Option<String>,
    /// New email.
    #[serde(default)]
    pub email: Option<String>,
    /// New mobile number.
    #[serde(default)]
    pub mobile_number: Option<String>,
    /// New city.
    #[serde(default)]
    pub city: Option<String>,
    /// New post code.
    #[serde(default)]
    pub post_code: Option<String>,
    /// New biography.
    #[serde(default)]
    pub bio: Option<String>,
    /// New hourly rate.
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    /// Replacement skill list.
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    /// New driving licence number.
    #[serde(default)]
    pub driving_licence_number: Option<String>,
    /// New right-to-work status.
    #[serde(default)]
    pub visa_status: Option<String>,
}

/// Worker information for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerInfo {
    /// The worker identifier.
    pub worker_id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: Option<String>,
    /// Mobile number.
    pub mobile_number: Option<String>,
    /// Home city.
    pub city: String,
    /// Post code.
    pub post_code: Option<String>,
    /// Free-text biography.
    pub bio: String,
    /// Expected hourly rate.
    pub hourly_rate: f64,
    /// Declared skills.
    pub skills: Vec<String>,
    /// Driving licence number.
    pub driving_licence_number: Option<String>,
    /// Right-to-work status.
    pub visa_status: Option<String>,
    /// Declared compliance documents.
    pub documents: Vec<DocumentInfo>,
    /// How many documents have been verified.
    pub verified_documents: usize,
    /// Whether a verified DBS certificate is on file.
    pub dbs_verified: bool,
    /// Whether the registration has been approved.
    pub approved: bool,
    /// Average of facility ratings.
    pub rating: f64,
    /// Number of facility ratings.
    pub total_ratings: u32,
    /// Number of closed shifts.
    pub shifts_completed: u32,
}

/// A compliance document for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// `DBS`, `ID` or `CERTIFICATE`.
    pub kind: String,
    /// Display name.
    pub name: String,
    /// Whether an administrator has checked it.
    pub verified: bool,
}

/// API response for worker commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerResponse {
    /// The worker after the command; `None` once rejected.
    pub worker: Option<WorkerInfo>,
    /// A success message.
    pub message: String,
}

/// API response listing workers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListWorkersResponse {
    /// The matching workers.
    pub workers: Vec<WorkerInfo>,
}

/// API response for an availability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    /// The worker checked.
    pub worker_id: String,
    /// The date checked.
    pub date: String,
    /// Whether the worker is free on that date.
    pub available: bool,
}

/// API request to post a shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateShiftRequest {
    /// The posting facility.
    pub facility_id: String,
    /// Short title.
    pub title: String,
    /// Role description.
    #[serde(default)]
    pub description: String,
    /// Shift date (`YYYY-MM-DD`).
    pub date: String,
    /// Start time (`HH:MM`).
    pub start_time: String,
    /// Length in whole hours.
    pub duration_hours: i64,
    /// Pay per hour.
    pub hourly_rate: f64,
    /// Display location.
    #[serde(default)]
    pub location: String,
}

/// API request to draft a shift description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescribeShiftRequest {
    /// The shift title.
    pub title: String,
    /// Key requirements to mention.
    #[serde(default)]
    pub requirements: Option<String>,
}

/// API response carrying a drafted description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescribeShiftResponse {
    /// The drafted text.
    pub description: String,
}

/// API request to offer a shift to a worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferShiftRequest {
    /// The worker receiving the offer.
    pub worker_id: String,
}

/// API request to accept an offered shift.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptShiftRequest {
    /// Client-supplied retry key.
    #[serde(default)]
    pub idempotency_key: Option<String>,
}

/// API request to approve a completed shift and rate the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproveShiftRequest {
    /// Score in 1..=5.
    pub rating: i64,
    /// Optional comment for the worker.
    #[serde(default)]
    pub comment: Option<String>,
    /// Client-supplied retry key.
    #[serde(default)]
    pub idempotency_key: Option<String>,
}

/// API request to rate the facility for a closed shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateFacilityRequest {
    /// Score in 1..=5.
    pub rating: i64,
    /// Optional comment for the facility.
    #[serde(default)]
    pub comment: Option<String>,
}

/// Feedback exchanged on a shift.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackInfo {
    /// Facility's rating of the worker.
    pub facility_to_worker_rating: Option<u8>,
    /// Facility's comment.
    pub facility_to_worker_comment: Option<String>,
    /// Worker's rating of the facility.
    pub worker_to_facility_rating: Option<u8>,
    /// Worker's comment.
    pub worker_to_facility_comment: Option<String>,
}

/// Shift information for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftInfo {
    /// The shift identifier.
    pub shift_id: String,
    /// The posting facility.
    pub facility_id: String,
    /// The posting facility's name.
    pub facility_name: String,
    /// The assigned worker, if any.
    pub worker_id: Option<String>,
    /// Short title.
    pub title: String,
    /// Role description.
    pub description: String,
    /// Shift date (`YYYY-MM-DD`).
    pub date: String,
    /// Start time (`HH:MM`).
    pub start_time: String,
    /// Length in whole hours.
    pub duration_hours: u8,
    /// Pay per hour.
    pub hourly_rate: f64,
    /// Hourly rate multiplied by duration.
    pub total_pay: f64,
    /// Display location.
    pub location: String,
    /// Lifecycle status (e.g. `PENDING_ACCEPTANCE`).
    pub status: String,
    /// Exchanged feedback.
    pub feedback: FeedbackInfo,
}

/// API response for shift commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftResponse {
    /// The shift after the command.
    pub shift: ShiftInfo,
    /// A success message.
    pub message: String,
}

/// API response for approving a completed shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproveShiftResponse {
    /// The closed shift.
    pub shift: ShiftInfo,
    /// The worker with updated statistics.
    pub worker: WorkerInfo,
    /// A success message.
    pub message: String,
}

/// Query parameters for listing shifts.
///
/// `year` and `month` accept `ALL` (or absence) for no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListShiftsQuery {
    /// Restrict to one facility.
    #[serde(default)]
    pub facility_id: Option<String>,
    /// Restrict to one worker.
    #[serde(default)]
    pub worker_id: Option<String>,
    /// Restrict to a status group (e.g. `history`).
    #[serde(default)]
    pub group: Option<String>,
    /// Calendar year or `ALL`.
    #[serde(default)]
    pub year: Option<String>,
    /// Calendar month (`1`-`12` or `01`-`12`) or `ALL`.
    #[serde(default)]
    pub month: Option<String>,
}

/// API response listing shifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListShiftsResponse {
    /// The matching shifts, newest first.
    pub shifts: Vec<ShiftInfo>,
    /// Distinct years among the matching shifts, newest first.
    pub years: Vec<i32>,
}

/// An audit event for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEventInfo {
    /// Position in the log.
    pub event_id: u64,
    /// When the event was recorded (RFC 3339).
    pub recorded_at: String,
    /// The acting party.
    pub actor_id: String,
    /// The acting party's type.
    pub actor_type: String,
    /// The request that caused the change.
    pub cause_id: String,
    /// Description of the cause.
    pub cause_description: String,
    /// The command name.
    pub action: String,
    /// Additional details.
    pub details: Option<String>,
    /// The record that changed.
    pub subject: String,
    /// The record before the change.
    pub before: String,
    /// The record after the change.
    pub after: String,
}

/// API response for the audit timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineResponse {
    /// Events in append order.
    pub events: Vec<AuditEventInfo>,
}
