// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use care_shifts_domain::{
    DocumentKind, FacilityId, FacilityProfile, FacilityProfileUpdate, ShiftDetails, ShiftId,
    WorkerId, WorkerProfile, WorkerProfileUpdate,
};
use time::OffsetDateTime;

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Register a new, unapproved facility.
    RegisterFacility {
        /// The facility's profile.
        profile: FacilityProfile,
    },
    /// Register a new, unapproved worker.
    RegisterWorker {
        /// The worker's profile.
        profile: WorkerProfile,
        /// Compliance documents the worker says they hold.
        documents: Vec<DocumentKind>,
    },
    /// Approve a pending facility registration.
    ApproveFacility {
        /// The facility to approve.
        facility_id: FacilityId,
    },
    /// Mark one of a worker's declared documents verified.
    VerifyWorkerDocument {
        /// The worker holding the document.
        worker_id: WorkerId,
        /// The document to verify.
        kind: DocumentKind,
    },
    /// Approve a pending worker registration.
    ApproveWorker {
        /// The worker to approve.
        worker_id: WorkerId,
    },
    /// Reject and delete a pending facility registration.
    RejectFacility {
        /// The facility to reject.
        facility_id: FacilityId,
    },
    /// Reject and delete a pending worker registration.
    RejectWorker {
        /// The worker to reject.
        worker_id: WorkerId,
    },
    /// Merge editable fields into a worker's profile.
    UpdateWorkerProfile {
        /// The worker to update.
        worker_id: WorkerId,
        /// The supplied fields.
        update: WorkerProfileUpdate,
    },
    /// Merge editable fields into a facility's profile.
    UpdateFacilityProfile {
        /// The facility to update.
        facility_id: FacilityId,
        /// The supplied fields.
        update: FacilityProfileUpdate,
    },
    /// Post a new open shift.
    CreateShift {
        /// The posting facility.
        facility_id: FacilityId,
        /// The posted fields.
        details: ShiftDetails,
    },
    /// Offer an open shift to a worker.
    OfferToWorker {
        /// The shift being offered.
        shift_id: ShiftId,
        /// The worker receiving the offer.
        worker_id: WorkerId,
    },
    /// The offered worker confirms the shift.
    WorkerAccepts {
        /// The shift being accepted.
        shift_id: ShiftId,
    },
    /// The offered worker declines the shift.
    WorkerRejects {
        /// The shift being declined.
        shift_id: ShiftId,
    },
    /// The worker begins a booked shift.
    StartShift {
        /// The shift being started.
        shift_id: ShiftId,
        /// The authoritative current instant.
        at: OffsetDateTime,
    },
    /// The worker finishes a shift in progress.
    MarkComplete {
        /// The shift being completed.
        shift_id: ShiftId,
    },
    /// The facility signs off a completed shift and rates the worker.
    ApproveAndPay {
        /// The shift being closed.
        shift_id: ShiftId,
        /// Score in 1..=5.
        score: i64,
        /// Optional comment for the worker.
        comment: Option<String>,
    },
    /// The worker rates the facility for a closed shift.
    RateFacility {
        /// The closed shift.
        shift_id: ShiftId,
        /// Score in 1..=5.
        score: i64,
        /// Optional comment for the facility.
        comment: Option<String>,
    },
}

impl Command {
    /// The action name recorded in audit events.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RegisterFacility { .. } => "RegisterFacility",
            Self::RegisterWorker { .. } => "RegisterWorker",
            Self::VerifyWorkerDocument { .. } => "VerifyWorkerDocument",
            Self::ApproveFacility { .. } => "ApproveFacility",
            Self::ApproveWorker { .. } => "ApproveWorker",
            Self::RejectFacility { .. } => "RejectFacility",
            Self::RejectWorker { .. } => "RejectWorker",
            Self::UpdateWorkerProfile { .. } => "UpdateWorkerProfile",
            Self::UpdateFacilityProfile { .. } => "UpdateFacilityProfile",
            Self::CreateShift { .. } => "CreateShift",
            Self::OfferToWorker { .. } => "OfferToWorker",
            Self::WorkerAccepts { .. } => "WorkerAccepts",
            Self::WorkerRejects { .. } => "WorkerRejects",
            Self::StartShift { .. } => "StartShift",
            Self::MarkComplete { .. } => "MarkComplete",
            Self::ApproveAndPay { .. } => "ApproveAndPay",
            Self::RateFacility { .. } => "RateFacility",
        }
    }
}
