// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Worker availability (double-booking) checks.
//!
//! A worker is unavailable on a date if they hold another shift on that
//! date whose status is a confirmed commitment (`Booked`, `InProgress`,
//! `CompletedPendingApproval` or `Closed`). Open offers do not count, so a
//! worker may hold several pending offers for one day but confirm only one.

use crate::error::DomainError;
use crate::types::{Shift, ShiftId, WorkerId};
use time::Date;

/// Returns the first shift that already commits `worker_id` on `date`.
///
/// The shift named by `excluding` is ignored, so a shift never conflicts
/// with itself.
pub fn find_conflicting_shift<'a, I>(
    shifts: I,
    worker_id: &WorkerId,
    date: Date,
    excluding: Option<&ShiftId>,
) -> Option<&'a Shift>
where
    I: IntoIterator<Item = &'a Shift>,
{
    shifts.into_iter().find(|shift| {
        excluding != Some(shift.id())
            && shift.worker_id() == Some(worker_id)
            && shift.date() == date
            && shift.status().is_commitment()
    })
}

/// Returns true if `worker_id` holds no confirmed commitment on `date`.
pub fn is_worker_available<'a, I>(
    shifts: I,
    worker_id: &WorkerId,
    date: Date,
    excluding: Option<&ShiftId>,
) -> bool
where
    I: IntoIterator<Item = &'a Shift>,
{
    find_conflicting_shift(shifts, worker_id, date, excluding).is_none()
}

/// Fails if `worker_id` already holds a confirmed commitment on `date`.
///
/// # Errors
///
/// Returns `DomainError::WorkerUnavailable` naming the conflicting shift.
pub fn ensure_worker_available<'a, I>(
    shifts: I,
    worker_id: &WorkerId,
    date: Date,
    excluding: Option<&ShiftId>,
) -> Result<(), DomainError>
where
    I: IntoIterator<Item = &'a Shift>,
{
    match find_conflicting_shift(shifts, worker_id, date, excluding) {
        Some(conflict) => Err(DomainError::WorkerUnavailable {
            worker_id: worker_id.clone(),
            date,
            conflicting_shift: conflict.id().clone(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::types::{Facility, FacilityId, FacilityProfile, Rating, ShiftDetails};
    use time::macros::{date, time};

    fn facility() -> Facility {
        Facility::new(
            FacilityId::new("f_1"),
            FacilityProfile {
                name: String::from("Sunrise Senior Living"),
                city: String::from("Manchester"),
                post_code: None,
                address: None,
                contact_person: None,
                phone_number: None,
                care_type: None,
                has_parking: false,
                description: None,
            },
        )
    }

    fn shift_on(id: &str, date: Date) -> Shift {
        Shift::open(
            ShiftId::new(id),
            &facility(),
            ShiftDetails {
                title: String::from("Night Shift"),
                description: String::new(),
                date,
                start_time: time!(20:00),
                duration_hours: 12,
                hourly_rate: 24.0,
                location: String::from("Manchester, UK"),
            },
        )
    }

    fn booked(id: &str, worker: &WorkerId, date: Date) -> Shift {
        let mut shift = shift_on(id, date);
        shift.offer_to(worker.clone()).unwrap();
        shift.accept().unwrap();
        shift
    }

    #[test]
    fn test_worker_with_no_shifts_is_available() {
        let worker = WorkerId::new("w_1");
        let shifts: Vec<Shift> = Vec::new();
        assert!(is_worker_available(&shifts, &worker, date!(2024 - 06 - 01), None));
    }

    #[test]
    fn test_booked_shift_on_same_date_conflicts() {
        let worker = WorkerId::new("w_1");
        let shifts = vec![booked("s_1", &worker, date!(2024 - 06 - 01))];

        let result = ensure_worker_available(&shifts, &worker, date!(2024 - 06 - 01), None);
        assert_eq!(
            result,
            Err(DomainError::WorkerUnavailable {
                worker_id: worker,
                date: date!(2024 - 06 - 01),
                conflicting_shift: ShiftId::new("s_1"),
            })
        );
    }

    #[test]
    fn test_booked_shift_on_other_date_does_not_conflict() {
        let worker = WorkerId::new("w_1");
        let shifts = vec![booked("s_1", &worker, date!(2024 - 06 - 01))];
        assert!(is_worker_available(&shifts, &worker, date!(2024 - 06 - 02), None));
    }

    #[test]
    fn test_pending_offer_does_not_conflict() {
        let worker = WorkerId::new("w_1");
        let mut pending = shift_on("s_1", date!(2024 - 06 - 01));
        pending.offer_to(worker.clone()).unwrap();
        let shifts = vec![pending];
        assert!(is_worker_available(&shifts, &worker, date!(2024 - 06 - 01), None));
    }

    #[test]
    fn test_other_workers_commitments_are_ignored() {
        let worker = WorkerId::new("w_1");
        let other = WorkerId::new("w_2");
        let shifts = vec![booked("s_1", &other, date!(2024 - 06 - 01))];
        assert!(is_worker_available(&shifts, &worker, date!(2024 - 06 - 01), None));
    }

    #[test]
    fn test_excluded_shift_never_conflicts_with_itself() {
        let worker = WorkerId::new("w_1");
        let shifts = vec![booked("s_1", &worker, date!(2024 - 06 - 01))];
        let excluded = ShiftId::new("s_1");
        assert!(is_worker_available(
            &shifts,
            &worker,
            date!(2024 - 06 - 01),
            Some(&excluded)
        ));
    }

    #[test]
    fn test_closed_shift_still_counts_as_commitment() {
        let worker = WorkerId::new("w_1");
        let mut shift = booked("s_1", &worker, date!(2024 - 06 - 01));
        shift.start().unwrap();
        shift.complete().unwrap();
        shift.close(Rating::new(5).unwrap(), None).unwrap();
        let shifts = vec![shift];
        assert!(!is_worker_available(&shifts, &worker, date!(2024 - 06 - 01), None));
    }
}
