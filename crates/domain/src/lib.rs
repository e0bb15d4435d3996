// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod availability;
mod error;
mod shift_status;
mod start_window;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use availability::{ensure_worker_available, find_conflicting_shift, is_worker_available};
pub use error::{DomainError, ErrorKind};
pub use shift_status::{ShiftStatus, StatusGroup};
pub use start_window::{START_WINDOW_MINUTES, StartWindow, parse_timezone, resolve_start_window};

// Re-export public types
pub use types::{
    ComplianceDocument, DocumentKind, Facility, FacilityId, FacilityProfile,
    FacilityProfileUpdate, Feedback, Rating, RatingSummary, RecordKind, Shift, ShiftDetails,
    ShiftId, Worker, WorkerId, WorkerProfile, WorkerProfileUpdate, WorkerStats,
};
pub use validation::{
    MAX_SHIFT_HOURS, validate_facility_profile, validate_hourly_rate, validate_shift_details,
    validate_worker_profile,
};
