// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The pre-start window for booked shifts.
//!
//! ## Invariants
//!
//! - A shift's date and start time are wall-clock values in the
//!   marketplace timezone
//! - The window opens exactly `START_WINDOW_MINUTES` before the
//!   scheduled start and never closes
//! - Ambiguous local times (DST fall-back) resolve to the earlier instant
//! - Local times inside a DST gap do not exist and are rejected

use crate::error::DomainError;
use crate::types::ShiftId;
use chrono::{NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;
use time::{Date, Duration, OffsetDateTime, Time};

/// How long before the scheduled start a worker may begin a shift.
pub const START_WINDOW_MINUTES: i64 = 15;

/// The resolved start window of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartWindow {
    /// The scheduled start, in UTC.
    pub scheduled_start: OffsetDateTime,
    /// The earliest instant at which the shift may be started.
    pub opens_at: OffsetDateTime,
}

impl StartWindow {
    /// Returns true if a start at `at` is permitted.
    #[must_use]
    pub fn is_open_at(&self, at: OffsetDateTime) -> bool {
        at >= self.opens_at
    }

    /// Fails if `at` is before the window opens.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotYetStartable`.
    pub fn ensure_open_at(&self, shift_id: &ShiftId, at: OffsetDateTime) -> Result<(), DomainError> {
        if self.is_open_at(at) {
            Ok(())
        } else {
            Err(DomainError::NotYetStartable {
                shift_id: shift_id.clone(),
                scheduled_start: self.scheduled_start,
                opens_at: self.opens_at,
            })
        }
    }
}

/// Parses an IANA timezone name.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimezone` if the name is unknown.
pub fn parse_timezone(timezone: &str) -> Result<Tz, DomainError> {
    timezone
        .parse()
        .map_err(|_| DomainError::InvalidTimezone(timezone.to_string()))
}

/// Resolves the start window for a shift on `date` at `start_time`.
///
/// # Errors
///
/// Returns an error if:
/// - The timezone is unknown
/// - The local start time does not exist on that date
/// - The resulting instant is out of range
pub fn resolve_start_window(
    date: Date,
    start_time: Time,
    timezone: &str,
) -> Result<StartWindow, DomainError> {
    let tz: Tz = parse_timezone(timezone)?;

    // Convert time::Date to chrono::NaiveDate
    let naive_date = NaiveDate::from_ymd_opt(
        date.year(),
        u32::from(u8::from(date.month())),
        u32::from(date.day()),
    )
    .ok_or_else(|| DomainError::DateArithmeticOverflow {
        operation: format!("converting shift date {date}"),
    })?;

    // Convert time::Time to chrono::NaiveTime
    let naive_time = NaiveTime::from_hms_opt(
        u32::from(start_time.hour()),
        u32::from(start_time.minute()),
        u32::from(start_time.second()),
    )
    .ok_or_else(|| DomainError::DateArithmeticOverflow {
        operation: format!("converting start time {start_time}"),
    })?;

    let local = tz
        .from_local_datetime(&naive_date.and_time(naive_time))
        .earliest()
        .ok_or_else(|| DomainError::NonexistentStartTime {
            date,
            start_time,
            timezone: timezone.to_string(),
        })?;

    let scheduled_start: OffsetDateTime = OffsetDateTime::from_unix_timestamp(local.timestamp())
        .map_err(|e| DomainError::DateArithmeticOverflow {
            operation: format!("resolving scheduled start: {e}"),
        })?;

    let opens_at: OffsetDateTime = scheduled_start
        .checked_sub(Duration::minutes(START_WINDOW_MINUTES))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: String::from("computing start window opening"),
        })?;

    Ok(StartWindow {
        scheduled_start,
        opens_at,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use time::macros::{date, datetime, time};

    #[test]
    fn test_window_opens_fifteen_minutes_before_start_in_utc_zone() {
        let window = resolve_start_window(date!(2024 - 01 - 15), time!(20:00), "UTC").unwrap();
        assert_eq!(window.scheduled_start, datetime!(2024-01-15 20:00 UTC));
        assert_eq!(window.opens_at, datetime!(2024-01-15 19:45 UTC));
    }

    #[test]
    fn test_british_summer_time_is_applied() {
        let window =
            resolve_start_window(date!(2024 - 06 - 01), time!(20:00), "Europe/London").unwrap();
        assert_eq!(window.scheduled_start, datetime!(2024-06-01 19:00 UTC));
    }

    #[test]
    fn test_exactly_at_opening_is_permitted() {
        let window = resolve_start_window(date!(2024 - 01 - 15), time!(20:00), "UTC").unwrap();
        assert!(window.is_open_at(datetime!(2024-01-15 19:45 UTC)));
        assert!(window.is_open_at(datetime!(2024-01-16 03:00 UTC)));
    }

    #[test]
    fn test_one_second_early_is_rejected() {
        let window = resolve_start_window(date!(2024 - 01 - 15), time!(20:00), "UTC").unwrap();
        let result = window.ensure_open_at(&ShiftId::new("s_1"), datetime!(2024-01-15 19:44:59 UTC));
        assert!(matches!(result, Err(DomainError::NotYetStartable { .. })));
    }

    #[test]
    fn test_time_in_spring_forward_gap_is_rejected() {
        let result = resolve_start_window(date!(2024 - 03 - 31), time!(01:30), "Europe/London");
        assert!(matches!(
            result,
            Err(DomainError::NonexistentStartTime { .. })
        ));
    }

    #[test]
    fn test_unknown_timezone_is_rejected() {
        let result = resolve_start_window(date!(2024 - 01 - 15), time!(20:00), "Mars/Olympus");
        assert!(matches!(result, Err(DomainError::InvalidTimezone(_))));
    }
}
