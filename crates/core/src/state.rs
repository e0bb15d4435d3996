// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use care_shifts_audit::{AuditEvent, StateSnapshot};
use care_shifts_domain::{
    DomainError, Facility, FacilityId, RecordKind, Shift, ShiftId, Worker, WorkerId,
    is_worker_available, parse_timezone,
};
use time::Date;

/// The in-memory entity store.
///
/// Facilities, workers and shifts are keyed by id. Shifts are never
/// removed. Facilities and workers are removed only when a pending
/// registration is rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    timezone: String,
    facilities: BTreeMap<FacilityId, Facility>,
    workers: BTreeMap<WorkerId, Worker>,
    shifts: BTreeMap<ShiftId, Shift>,
    next_facility: u64,
    next_worker: u64,
    next_shift: u64,
}

impl State {
    /// Creates an empty store whose shift times are expressed in `timezone`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimezone` if the IANA name is unknown.
    pub fn new(timezone: &str) -> Result<Self, DomainError> {
        parse_timezone(timezone)?;
        Ok(Self {
            timezone: timezone.to_string(),
            facilities: BTreeMap::new(),
            workers: BTreeMap::new(),
            shifts: BTreeMap::new(),
            next_facility: 1,
            next_worker: 1,
            next_shift: 1,
        })
    }

    /// The marketplace timezone.
    #[must_use]
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// Looks up a shift.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ShiftNotFound` if no such shift exists.
    pub fn shift(&self, shift_id: &ShiftId) -> Result<&Shift, DomainError> {
        self.shifts
            .get(shift_id)
            .ok_or_else(|| DomainError::ShiftNotFound(shift_id.clone()))
    }

    /// Looks up a worker.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::WorkerNotFound` if no such worker exists.
    pub fn worker(&self, worker_id: &WorkerId) -> Result<&Worker, DomainError> {
        self.workers
            .get(worker_id)
            .ok_or_else(|| DomainError::WorkerNotFound(worker_id.clone()))
    }

    /// Looks up a facility.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::FacilityNotFound` if no such facility exists.
    pub fn facility(&self, facility_id: &FacilityId) -> Result<&Facility, DomainError> {
        self.facilities
            .get(facility_id)
            .ok_or_else(|| DomainError::FacilityNotFound(facility_id.clone()))
    }

    /// All shifts, ordered by id.
    pub fn shifts(&self) -> impl Iterator<Item = &Shift> {
        self.shifts.values()
    }

    /// All workers, ordered by id.
    pub fn workers(&self) -> impl Iterator<Item = &Worker> {
        self.workers.values()
    }

    /// All facilities, ordered by id.
    pub fn facilities(&self) -> impl Iterator<Item = &Facility> {
        self.facilities.values()
    }

    /// Returns true if the worker holds no confirmed commitment on `date`
    /// other than `excluding`.
    #[must_use]
    pub fn is_worker_available(
        &self,
        worker_id: &WorkerId,
        date: Date,
        excluding: Option<&ShiftId>,
    ) -> bool {
        is_worker_available(self.shifts.values(), worker_id, date, excluding)
    }

    /// Inserts a facility with existing history, e.g. when seeding.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateId` if the id is taken.
    pub fn insert_facility(&mut self, facility: Facility) -> Result<(), DomainError> {
        if self.facilities.contains_key(facility.id()) {
            return Err(DomainError::DuplicateId {
                record: RecordKind::Facility,
                id: facility.id().to_string(),
            });
        }
        self.facilities.insert(facility.id().clone(), facility);
        Ok(())
    }

    /// Inserts a worker with existing history, e.g. when seeding.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateId` if the id is taken.
    pub fn insert_worker(&mut self, worker: Worker) -> Result<(), DomainError> {
        if self.workers.contains_key(worker.id()) {
            return Err(DomainError::DuplicateId {
                record: RecordKind::Worker,
                id: worker.id().to_string(),
            });
        }
        self.workers.insert(worker.id().clone(), worker);
        Ok(())
    }

    pub(crate) fn shift_mut(&mut self, shift_id: &ShiftId) -> Result<&mut Shift, DomainError> {
        self.shifts
            .get_mut(shift_id)
            .ok_or_else(|| DomainError::ShiftNotFound(shift_id.clone()))
    }

    pub(crate) fn worker_mut(&mut self, worker_id: &WorkerId) -> Result<&mut Worker, DomainError> {
        self.workers
            .get_mut(worker_id)
            .ok_or_else(|| DomainError::WorkerNotFound(worker_id.clone()))
    }

    pub(crate) fn facility_mut(
        &mut self,
        facility_id: &FacilityId,
    ) -> Result<&mut Facility, DomainError> {
        self.facilities
            .get_mut(facility_id)
            .ok_or_else(|| DomainError::FacilityNotFound(facility_id.clone()))
    }

    pub(crate) fn add_shift(&mut self, shift: Shift) {
        self.shifts.insert(shift.id().clone(), shift);
    }

    pub(crate) fn add_worker(&mut self, worker: Worker) {
        self.workers.insert(worker.id().clone(), worker);
    }

    pub(crate) fn add_facility(&mut self, facility: Facility) {
        self.facilities.insert(facility.id().clone(), facility);
    }

    pub(crate) fn remove_worker(&mut self, worker_id: &WorkerId) {
        self.workers.remove(worker_id);
    }

    pub(crate) fn remove_facility(&mut self, facility_id: &FacilityId) {
        self.facilities.remove(facility_id);
    }

    // Ids are never reused, including ids taken by seeded records.
    pub(crate) fn allocate_shift_id(&mut self) -> ShiftId {
        loop {
            let id: ShiftId = ShiftId::new(format!("s_{}", self.next_shift));
            self.next_shift += 1;
            if !self.shifts.contains_key(&id) {
                return id;
            }
        }
    }

    pub(crate) fn allocate_worker_id(&mut self) -> WorkerId {
        loop {
            let id: WorkerId = WorkerId::new(format!("w_{}", self.next_worker));
            self.next_worker += 1;
            if !self.workers.contains_key(&id) {
                return id;
            }
        }
    }

    pub(crate) fn allocate_facility_id(&mut self) -> FacilityId {
        loop {
            let id: FacilityId = FacilityId::new(format!("f_{}", self.next_facility));
            self.next_facility += 1;
            if !self.facilities.contains_key(&id) {
                return id;
            }
        }
    }
}

/// The record a command changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    /// A shift.
    Shift(ShiftId),
    /// A worker.
    Worker(WorkerId),
    /// A facility.
    Facility(FacilityId),
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shift(id) => write!(f, "shift:{id}"),
            Self::Worker(id) => write!(f, "worker:{id}"),
            Self::Facility(id) => write!(f, "facility:{id}"),
        }
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
    /// The record the transition changed.
    pub subject: Subject,
}

pub(crate) fn shift_snapshot(shift: &Shift) -> StateSnapshot {
    StateSnapshot::new(format!(
        "status={},worker={}",
        shift.status(),
        shift.worker_id().map_or("-", WorkerId::value)
    ))
}

pub(crate) fn worker_snapshot(worker: &Worker) -> StateSnapshot {
    StateSnapshot::new(format!(
        "approved={},rating={:.4},total_ratings={},shifts_completed={},verified_documents={}/{}",
        worker.is_approved(),
        worker.stats().rating.average(),
        worker.stats().rating.count(),
        worker.stats().shifts_completed,
        worker.verified_document_count(),
        worker.documents().len()
    ))
}

pub(crate) fn facility_snapshot(facility: &Facility) -> StateSnapshot {
    StateSnapshot::new(format!(
        "approved={},rating={:.4},total_ratings={}",
        facility.is_approved(),
        facility.rating().average(),
        facility.rating().count()
    ))
}

pub(crate) fn absent_snapshot() -> StateSnapshot {
    StateSnapshot::new(String::from("absent"))
}
