// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::macros::{date, time};

use crate::{
    DomainError, FacilityProfile, ShiftDetails, WorkerProfile, validate_facility_profile,
    validate_hourly_rate, validate_shift_details, validate_worker_profile,
};

use super::helpers::{create_test_details, create_test_facility_profile, create_test_worker_profile};

const TZ: &str = "Europe/London";

#[test]
fn test_validate_shift_details_accepts_valid_shift() {
    assert!(validate_shift_details(&create_test_details(), TZ).is_ok());
}

#[test]
fn test_validate_shift_details_rejects_blank_title() {
    let details = ShiftDetails {
        title: String::from("   "),
        ..create_test_details()
    };
    assert!(matches!(
        validate_shift_details(&details, TZ),
        Err(DomainError::InvalidTitle(_))
    ));
}

#[test]
fn test_validate_shift_details_rejects_zero_duration() {
    let details = ShiftDetails {
        duration_hours: 0,
        ..create_test_details()
    };
    assert_eq!(
        validate_shift_details(&details, TZ),
        Err(DomainError::InvalidDuration { hours: 0 })
    );
}

#[test]
fn test_validate_shift_details_rejects_overlong_duration() {
    let details = ShiftDetails {
        duration_hours: 25,
        ..create_test_details()
    };
    assert_eq!(
        validate_shift_details(&details, TZ),
        Err(DomainError::InvalidDuration { hours: 25 })
    );
}

#[test]
fn test_validate_shift_details_rejects_non_positive_rate() {
    let details = ShiftDetails {
        hourly_rate: 0.0,
        ..create_test_details()
    };
    assert!(matches!(
        validate_shift_details(&details, TZ),
        Err(DomainError::InvalidHourlyRate(_))
    ));
}

#[test]
fn test_validate_shift_details_rejects_start_in_dst_gap() {
    let details = ShiftDetails {
        date: date!(2024 - 03 - 31),
        start_time: time!(01:15),
        ..create_test_details()
    };
    assert!(matches!(
        validate_shift_details(&details, TZ),
        Err(DomainError::NonexistentStartTime { .. })
    ));
}

#[test]
fn test_validate_hourly_rate_rejects_nan() {
    assert!(validate_hourly_rate(f64::NAN).is_err());
    assert!(validate_hourly_rate(f64::INFINITY).is_err());
    assert!(validate_hourly_rate(-3.0).is_err());
    assert!(validate_hourly_rate(15.0).is_ok());
}

#[test]
fn test_validate_worker_profile_requires_name_and_city() {
    assert!(validate_worker_profile(&create_test_worker_profile()).is_ok());

    let nameless = WorkerProfile {
        name: String::new(),
        ..create_test_worker_profile()
    };
    assert!(matches!(
        validate_worker_profile(&nameless),
        Err(DomainError::InvalidName(_))
    ));

    let homeless = WorkerProfile {
        city: String::from(" "),
        ..create_test_worker_profile()
    };
    assert!(matches!(
        validate_worker_profile(&homeless),
        Err(DomainError::InvalidCity(_))
    ));
}

#[test]
fn test_validate_facility_profile_requires_name_and_city() {
    assert!(validate_facility_profile(&create_test_facility_profile()).is_ok());

    let nameless = FacilityProfile {
        name: String::new(),
        ..create_test_facility_profile()
    };
    assert!(matches!(
        validate_facility_profile(&nameless),
        Err(DomainError::InvalidName(_))
    ));
}
