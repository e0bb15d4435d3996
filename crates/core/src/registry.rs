// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Registration, approval and profile commands for facilities and workers.

use crate::apply::Change;
use crate::command::Command;
use crate::error::CoreError;
use crate::state::{State, Subject, absent_snapshot, facility_snapshot, worker_snapshot};
use care_shifts_audit::StateSnapshot;
use care_shifts_domain::{
    DomainError, Facility, FacilityId, FacilityProfile, RecordKind, Worker, WorkerId,
    WorkerProfile, validate_facility_profile, validate_worker_profile,
};

pub(crate) fn apply_registry(state: &mut State, command: Command) -> Result<Change, CoreError> {
    match command {
        Command::RegisterFacility { profile } => {
            validate_facility_profile(&profile)?;
            let facility_id: FacilityId = state.allocate_facility_id();
            let details: String = format!("Registered facility '{}'", profile.name);
            let facility: Facility = Facility::new(facility_id.clone(), profile);
            let after: StateSnapshot = facility_snapshot(&facility);
            state.add_facility(facility);

            Ok(Change {
                subject: Subject::Facility(facility_id),
                before: absent_snapshot(),
                after,
                details: Some(details),
            })
        }
        Command::RegisterWorker { profile, documents } => {
            validate_worker_profile(&profile)?;
            let worker_id: WorkerId = state.allocate_worker_id();
            let details: String = format!("Registered worker '{}'", profile.name);
            let mut worker: Worker = Worker::new(worker_id.clone(), profile);
            worker.declare_documents(&documents);
            let after: StateSnapshot = worker_snapshot(&worker);
            state.add_worker(worker);

            Ok(Change {
                subject: Subject::Worker(worker_id),
                before: absent_snapshot(),
                after,
                details: Some(details),
            })
        }
        Command::ApproveFacility { facility_id } => {
            let facility: &mut Facility = state.facility_mut(&facility_id)?;
            let before: StateSnapshot = facility_snapshot(facility);
            facility.approve()?;

            Ok(Change {
                after: facility_snapshot(facility),
                subject: Subject::Facility(facility_id),
                before,
                details: None,
            })
        }
        Command::ApproveWorker { worker_id } => {
            let worker: &mut Worker = state.worker_mut(&worker_id)?;
            let before: StateSnapshot = worker_snapshot(worker);
            worker.approve()?;

            Ok(Change {
                after: worker_snapshot(worker),
                subject: Subject::Worker(worker_id),
                before,
                details: None,
            })
        }
        Command::VerifyWorkerDocument { worker_id, kind } => {
            let worker: &mut Worker = state.worker_mut(&worker_id)?;
            let before: StateSnapshot = worker_snapshot(worker);
            worker.verify_document(kind)?;

            Ok(Change {
                after: worker_snapshot(worker),
                subject: Subject::Worker(worker_id),
                before,
                details: Some(format!("Verified {kind} document")),
            })
        }
        Command::RejectFacility { facility_id } => {
            let facility: &Facility = state.facility(&facility_id)?;
            if facility.is_approved() {
                return Err(DomainError::RegistrationAlreadyApproved {
                    record: RecordKind::Facility,
                    id: facility_id.to_string(),
                }
                .into());
            }
            let before: StateSnapshot = facility_snapshot(facility);
            let details: String = format!("Rejected facility '{}'", facility.profile().name);
            state.remove_facility(&facility_id);

            Ok(Change {
                subject: Subject::Facility(facility_id),
                before,
                after: absent_snapshot(),
                details: Some(details),
            })
        }
        Command::RejectWorker { worker_id } => {
            let worker: &Worker = state.worker(&worker_id)?;
            if worker.is_approved() {
                return Err(DomainError::RegistrationAlreadyApproved {
                    record: RecordKind::Worker,
                    id: worker_id.to_string(),
                }
                .into());
            }
            let before: StateSnapshot = worker_snapshot(worker);
            let details: String = format!("Rejected worker '{}'", worker.profile().name);
            state.remove_worker(&worker_id);

            Ok(Change {
                subject: Subject::Worker(worker_id),
                before,
                after: absent_snapshot(),
                details: Some(details),
            })
        }
        Command::UpdateWorkerProfile { worker_id, update } => {
            let worker: &mut Worker = state.worker_mut(&worker_id)?;
            let profile: WorkerProfile = update.merged_into(worker.profile());
            validate_worker_profile(&profile)?;

            let before: StateSnapshot = worker_snapshot(worker);
            worker.replace_profile(profile);

            Ok(Change {
                after: worker_snapshot(worker),
                subject: Subject::Worker(worker_id),
                before,
                details: Some(format!("Updated {}", update.touched_fields().join(", "))),
            })
        }
        Command::UpdateFacilityProfile {
            facility_id,
            update,
        } => {
            let facility: &mut Facility = state.facility_mut(&facility_id)?;
            let profile: FacilityProfile = update.merged_into(facility.profile());
            validate_facility_profile(&profile)?;

            let before: StateSnapshot = facility_snapshot(facility);
            facility.replace_profile(profile);

            Ok(Change {
                after: facility_snapshot(facility),
                subject: Subject::Facility(facility_id),
                before,
                details: None,
            })
        }
        other => Err(CoreError::Internal(format!(
            "{} is not a registry command",
            other.name()
        ))),
    }
}
