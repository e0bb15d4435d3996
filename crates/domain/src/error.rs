// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::shift_status::ShiftStatus;
use crate::types::{DocumentKind, FacilityId, RecordKind, ShiftId, WorkerId};
use time::{Date, OffsetDateTime, Time};

/// Broad classification of a domain failure.
///
/// Callers that only need to decide how to present a failure can match on
/// the kind instead of every individual variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A referenced shift, worker or facility does not exist.
    NotFound,
    /// The operation is not permitted from the record's current state.
    InvalidTransition,
    /// A rating outside 1..=5.
    InvalidRating,
    /// A shift start was attempted before its start window opened.
    NotYetStartable,
    /// The worker already holds a confirmed shift on the same date.
    Unavailable,
    /// The facility or worker has not been approved.
    Unauthorized,
    /// A supplied field failed validation.
    InvalidInput,
}

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Shift does not exist.
    ShiftNotFound(ShiftId),
    /// Worker does not exist.
    WorkerNotFound(WorkerId),
    /// Facility does not exist.
    FacilityNotFound(FacilityId),
    /// The shift is not in a status from which the requested one is reachable.
    InvalidTransition {
        /// The shift being transitioned.
        shift_id: ShiftId,
        /// The shift's current status.
        from: ShiftStatus,
        /// The status that was requested.
        to: ShiftStatus,
    },
    /// The worker has already rated the facility for this shift.
    FacilityAlreadyRated(ShiftId),
    /// Rating score outside 1..=5.
    InvalidRating {
        /// The rejected score.
        score: i64,
    },
    /// The shift's start window has not opened yet.
    NotYetStartable {
        /// The shift that was being started.
        shift_id: ShiftId,
        /// The scheduled start instant.
        scheduled_start: OffsetDateTime,
        /// The earliest instant at which the shift may be started.
        opens_at: OffsetDateTime,
    },
    /// The worker already holds a confirmed commitment on the date.
    WorkerUnavailable {
        /// The double-booked worker.
        worker_id: WorkerId,
        /// The contested date.
        date: Date,
        /// The shift already holding the worker on that date.
        conflicting_shift: ShiftId,
    },
    /// The facility has not been approved.
    FacilityNotApproved(FacilityId),
    /// The worker has not been approved.
    WorkerNotApproved(WorkerId),
    /// The registration has already been approved.
    RegistrationAlreadyApproved {
        /// The kind of record.
        record: RecordKind,
        /// The record identifier.
        id: String,
    },
    /// A record with this identifier already exists.
    DuplicateId {
        /// The kind of record.
        record: RecordKind,
        /// The duplicated identifier.
        id: String,
    },
    /// The worker has no document of this kind on file.
    DocumentNotFound {
        /// The worker.
        worker_id: WorkerId,
        /// The missing document kind.
        kind: DocumentKind,
    },
    /// The document has already been verified.
    DocumentAlreadyVerified {
        /// The worker.
        worker_id: WorkerId,
        /// The verified document kind.
        kind: DocumentKind,
    },
    /// Unknown document kind.
    InvalidDocumentKind(String),
    /// Shift title is empty or invalid.
    InvalidTitle(String),
    /// Shift duration outside the accepted range.
    InvalidDuration {
        /// The rejected duration in hours.
        hours: i64,
    },
    /// Hourly rate is not a positive amount.
    InvalidHourlyRate(String),
    /// Name is empty or invalid.
    InvalidName(String),
    /// City is empty or invalid.
    InvalidCity(String),
    /// Unknown IANA timezone name.
    InvalidTimezone(String),
    /// Unknown shift status string.
    InvalidShiftStatus(String),
    /// Unknown status group string.
    InvalidStatusGroup(String),
    /// The local start time does not exist in the timezone (DST gap).
    NonexistentStartTime {
        /// The shift date.
        date: Date,
        /// The local start time.
        start_time: Time,
        /// The timezone the time was resolved in.
        timezone: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl DomainError {
    /// Classifies this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ShiftNotFound(_)
            | Self::WorkerNotFound(_)
            | Self::FacilityNotFound(_)
            | Self::DocumentNotFound { .. } => ErrorKind::NotFound,
            Self::InvalidTransition { .. }
            | Self::FacilityAlreadyRated(_)
            | Self::RegistrationAlreadyApproved { .. }
            | Self::DocumentAlreadyVerified { .. } => ErrorKind::InvalidTransition,
            Self::InvalidRating { .. } => ErrorKind::InvalidRating,
            Self::NotYetStartable { .. } => ErrorKind::NotYetStartable,
            Self::WorkerUnavailable { .. } => ErrorKind::Unavailable,
            Self::FacilityNotApproved(_) | Self::WorkerNotApproved(_) => ErrorKind::Unauthorized,
            Self::DuplicateId { .. }
            | Self::InvalidTitle(_)
            | Self::InvalidDuration { .. }
            | Self::InvalidHourlyRate(_)
            | Self::InvalidName(_)
            | Self::InvalidCity(_)
            | Self::InvalidTimezone(_)
            | Self::InvalidShiftStatus(_)
            | Self::InvalidStatusGroup(_)
            | Self::InvalidDocumentKind(_)
            | Self::NonexistentStartTime { .. }
            | Self::DateArithmeticOverflow { .. } => ErrorKind::InvalidInput,
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShiftNotFound(id) => write!(f, "Shift '{id}' not found"),
            Self::WorkerNotFound(id) => write!(f, "Worker '{id}' not found"),
            Self::FacilityNotFound(id) => write!(f, "Facility '{id}' not found"),
            Self::InvalidTransition { shift_id, from, to } => {
                write!(
                    f,
                    "Shift '{shift_id}' cannot move from {from} to {to}"
                )
            }
            Self::FacilityAlreadyRated(id) => {
                write!(f, "The facility has already been rated for shift '{id}'")
            }
            Self::InvalidRating { score } => {
                write!(f, "Invalid rating: {score}. Must be between 1 and 5")
            }
            Self::NotYetStartable {
                shift_id,
                scheduled_start,
                opens_at,
            } => {
                write!(
                    f,
                    "Shift '{shift_id}' cannot be started before {opens_at} (scheduled start {scheduled_start})"
                )
            }
            Self::WorkerUnavailable {
                worker_id,
                date,
                conflicting_shift,
            } => {
                write!(
                    f,
                    "Worker '{worker_id}' already has a confirmed shift on {date} ('{conflicting_shift}')"
                )
            }
            Self::FacilityNotApproved(id) => write!(f, "Facility '{id}' has not been approved"),
            Self::WorkerNotApproved(id) => write!(f, "Worker '{id}' has not been approved"),
            Self::RegistrationAlreadyApproved { record, id } => {
                write!(f, "{record} '{id}' has already been approved")
            }
            Self::DuplicateId { record, id } => write!(f, "{record} '{id}' already exists"),
            Self::DocumentNotFound { worker_id, kind } => {
                write!(f, "Worker '{worker_id}' has no {kind} document on file")
            }
            Self::DocumentAlreadyVerified { worker_id, kind } => {
                write!(f, "Worker '{worker_id}' {kind} document is already verified")
            }
            Self::InvalidDocumentKind(s) => write!(f, "Invalid document kind: '{s}'"),
            Self::InvalidTitle(msg) => write!(f, "Invalid title: {msg}"),
            Self::InvalidDuration { hours } => {
                write!(f, "Invalid duration: {hours} hours. Must be between 1 and 24")
            }
            Self::InvalidHourlyRate(msg) => write!(f, "Invalid hourly rate: {msg}"),
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidCity(msg) => write!(f, "Invalid city: {msg}"),
            Self::InvalidTimezone(tz) => write!(f, "Invalid timezone: '{tz}'"),
            Self::InvalidShiftStatus(s) => write!(f, "Invalid shift status: '{s}'"),
            Self::InvalidStatusGroup(s) => write!(f, "Invalid status group: '{s}'"),
            Self::NonexistentStartTime {
                date,
                start_time,
                timezone,
            } => {
                write!(
                    f,
                    "Start time {start_time} on {date} does not exist in timezone {timezone}"
                )
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
