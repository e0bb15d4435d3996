// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::start_window::resolve_start_window;
use crate::types::{FacilityProfile, ShiftDetails, WorkerProfile};

/// Longest shift that may be posted, in hours.
pub const MAX_SHIFT_HOURS: u8 = 24;

/// Validates the fields of a shift before it is posted.
///
/// # Arguments
///
/// * `details` - The posted shift fields
/// * `timezone` - The marketplace timezone the date and time are expressed in
///
/// # Errors
///
/// Returns an error if:
/// - The title is blank
/// - The duration is zero or longer than a day
/// - The hourly rate is not a positive finite amount
/// - The start time does not exist on that date in the timezone
pub fn validate_shift_details(details: &ShiftDetails, timezone: &str) -> Result<(), DomainError> {
    if details.title.trim().is_empty() {
        return Err(DomainError::InvalidTitle(String::from(
            "Title cannot be empty",
        )));
    }

    if details.duration_hours == 0 || details.duration_hours > MAX_SHIFT_HOURS {
        return Err(DomainError::InvalidDuration {
            hours: i64::from(details.duration_hours),
        });
    }

    validate_hourly_rate(details.hourly_rate)?;

    resolve_start_window(details.date, details.start_time, timezone)?;

    Ok(())
}

/// Validates a worker profile on registration or after an update.
///
/// # Errors
///
/// Returns an error if the name or city is blank or the rate is invalid.
pub fn validate_worker_profile(profile: &WorkerProfile) -> Result<(), DomainError> {
    if profile.name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }

    if profile.city.trim().is_empty() {
        return Err(DomainError::InvalidCity(String::from(
            "City cannot be empty",
        )));
    }

    validate_hourly_rate(profile.hourly_rate)
}

/// Validates a facility profile on registration or after an update.
///
/// # Errors
///
/// Returns an error if the name or city is blank.
pub fn validate_facility_profile(profile: &FacilityProfile) -> Result<(), DomainError> {
    if profile.name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }

    if profile.city.trim().is_empty() {
        return Err(DomainError::InvalidCity(String::from(
            "City cannot be empty",
        )));
    }

    Ok(())
}

/// Validates that an hourly rate is a positive, finite amount.
///
/// # Errors
///
/// Returns `DomainError::InvalidHourlyRate` otherwise.
pub fn validate_hourly_rate(rate: f64) -> Result<(), DomainError> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(DomainError::InvalidHourlyRate(format!(
            "{rate} is not a positive amount"
        )));
    }
    Ok(())
}
