// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only projections over the entity store.
//!
//! Shift listings are ordered newest first by date and start time, then
//! by id. Nothing here mutates state or emits audit events.

use crate::state::State;
use care_shifts_domain::{
    DomainError, Facility, FacilityId, Shift, ShiftId, StatusGroup, Worker, WorkerId,
};
use std::cmp::Reverse;
use time::Date;

/// Either every value on an axis or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeriodFilter<T> {
    /// No restriction on this axis.
    #[default]
    All,
    /// Only this value.
    Only(T),
}

impl<T: PartialEq> PeriodFilter<T> {
    /// Returns true if `value` passes the filter.
    #[must_use]
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

/// A (year, month) window over closed shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryFilter {
    /// Calendar year.
    pub year: PeriodFilter<i32>,
    /// Calendar month, 1 through 12.
    pub month: PeriodFilter<u8>,
}

impl HistoryFilter {
    /// Returns true if `date` falls inside the window.
    #[must_use]
    pub fn matches(&self, date: Date) -> bool {
        self.year.matches(&date.year()) && self.month.matches(&u8::from(date.month()))
    }
}

/// Criteria for listing shifts. Every criterion that is set must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftFilter {
    /// Restrict to one facility's shifts.
    pub facility_id: Option<FacilityId>,
    /// Restrict to one worker's shifts.
    pub worker_id: Option<WorkerId>,
    /// Restrict to a dashboard status group.
    pub group: Option<StatusGroup>,
    /// Restrict by shift date.
    pub period: HistoryFilter,
}

impl ShiftFilter {
    fn matches(&self, shift: &Shift) -> bool {
        self.facility_id
            .as_ref()
            .is_none_or(|id| shift.facility_id() == id)
            && self
                .worker_id
                .as_ref()
                .is_none_or(|id| shift.worker_id() == Some(id))
            && self.group.is_none_or(|group| group.contains(shift.status()))
            && self.period.matches(shift.date())
    }
}

fn newest_first(mut shifts: Vec<&Shift>) -> Vec<&Shift> {
    shifts.sort_by_key(|shift| {
        (
            Reverse((shift.date(), shift.details().start_time)),
            shift.id().clone(),
        )
    });
    shifts
}

/// Lists shifts matching every criterion in `filter`.
#[must_use]
pub fn list_shifts<'a>(state: &'a State, filter: &ShiftFilter) -> Vec<&'a Shift> {
    newest_first(state.shifts().filter(|shift| filter.matches(shift)).collect())
}

/// Shifts posted by a facility.
#[must_use]
pub fn shifts_for_facility<'a>(state: &'a State, facility_id: &FacilityId) -> Vec<&'a Shift> {
    list_shifts(
        state,
        &ShiftFilter {
            facility_id: Some(facility_id.clone()),
            ..ShiftFilter::default()
        },
    )
}

/// Shifts currently or previously assigned to a worker.
#[must_use]
pub fn shifts_for_worker<'a>(state: &'a State, worker_id: &WorkerId) -> Vec<&'a Shift> {
    list_shifts(
        state,
        &ShiftFilter {
            worker_id: Some(worker_id.clone()),
            ..ShiftFilter::default()
        },
    )
}

/// Shifts whose status falls in `group`.
#[must_use]
pub fn shifts_in_group(state: &State, group: StatusGroup) -> Vec<&Shift> {
    list_shifts(
        state,
        &ShiftFilter {
            group: Some(group),
            ..ShiftFilter::default()
        },
    )
}

/// Shifts open for offers.
#[must_use]
pub fn open_shifts(state: &State) -> Vec<&Shift> {
    shifts_in_group(state, StatusGroup::Open)
}

/// Closed shifts inside the (year, month) window.
#[must_use]
pub fn history(state: &State, filter: HistoryFilter) -> Vec<&Shift> {
    list_shifts(
        state,
        &ShiftFilter {
            group: Some(StatusGroup::History),
            period: filter,
            ..ShiftFilter::default()
        },
    )
}

/// Distinct years that appear in `shifts`, newest first.
#[must_use]
pub fn years_in<'a, I>(shifts: I) -> Vec<i32>
where
    I: IntoIterator<Item = &'a Shift>,
{
    let mut years: Vec<i32> = shifts.into_iter().map(|shift| shift.date().year()).collect();
    years.sort_unstable_by_key(|year| Reverse(*year));
    years.dedup();
    years
}

/// Workers whose approval flag equals `approved`.
#[must_use]
pub fn workers_by_approval(state: &State, approved: bool) -> Vec<&Worker> {
    state
        .workers()
        .filter(|worker| worker.is_approved() == approved)
        .collect()
}

/// Workers in `city`, compared trimmed and case-insensitively.
#[must_use]
pub fn workers_in_city<'a>(state: &'a State, city: &str) -> Vec<&'a Worker> {
    let wanted: String = normalize_city(city);
    state
        .workers()
        .filter(|worker| normalize_city(&worker.profile().city) == wanted)
        .collect()
}

/// Facilities whose approval flag equals `approved`.
#[must_use]
pub fn facilities_by_approval(state: &State, approved: bool) -> Vec<&Facility> {
    state
        .facilities()
        .filter(|facility| facility.is_approved() == approved)
        .collect()
}

/// Checks whether a known worker is free on `date`.
///
/// # Errors
///
/// Returns `DomainError::WorkerNotFound` if the worker does not exist.
pub fn worker_availability(
    state: &State,
    worker_id: &WorkerId,
    date: Date,
    excluding: Option<&ShiftId>,
) -> Result<bool, DomainError> {
    state.worker(worker_id)?;
    Ok(state.is_worker_available(worker_id, date, excluding))
}

fn normalize_city(city: &str) -> String {
    city.trim().to_lowercase()
}
