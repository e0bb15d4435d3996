// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, State, apply};
use care_shifts_audit::{Actor, Cause};
use care_shifts_domain::{
    FacilityId, FacilityProfile, Rating, RatingSummary, ShiftDetails, ShiftId, Worker, WorkerId,
    WorkerProfile, WorkerStats,
};
use time::macros::{date, datetime, time};
use time::{Date, OffsetDateTime};

pub const TIMEZONE: &str = "Europe/London";

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("admin-1"), String::from("admin"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-1"), String::from("Test request"))
}

pub fn create_test_facility_profile() -> FacilityProfile {
    FacilityProfile {
        name: String::from("Sunrise Senior Living"),
        city: String::from("Manchester"),
        post_code: Some(String::from("M1 4BT")),
        address: Some(String::from("12 Oak Street")),
        contact_person: Some(String::from("Alice Thompson")),
        phone_number: None,
        care_type: Some(String::from("Residential & Nursing")),
        has_parking: true,
        description: None,
    }
}

pub fn create_test_worker_profile(name: &str, city: &str) -> WorkerProfile {
    WorkerProfile {
        name: String::from(name),
        email: None,
        mobile_number: None,
        city: String::from(city),
        post_code: None,
        bio: String::new(),
        hourly_rate: 22.0,
        skills: Vec::new(),
        driving_licence_number: None,
        visa_status: None,
    }
}

pub fn create_test_details(date: Date) -> ShiftDetails {
    ShiftDetails {
        title: String::from("Weekend Night Shift"),
        description: String::from("Night cover on the dementia unit."),
        date,
        start_time: time!(20:00),
        duration_hours: 12,
        hourly_rate: 24.0,
        location: String::from("Manchester, UK"),
    }
}

/// Applies a command and returns the new state, panicking on failure.
pub fn run(state: &State, command: Command) -> State {
    apply(state, command, create_test_actor(), create_test_cause())
        .unwrap()
        .new_state
}

/// A store with one approved facility `f_1` and approved worker `w_1`
/// (rating 4.9 over 45 ratings, 142 shifts completed).
pub fn create_test_state() -> State {
    let mut state: State = State::new(TIMEZONE).unwrap();
    state = run(
        &state,
        Command::RegisterFacility {
            profile: create_test_facility_profile(),
        },
    );
    state = run(
        &state,
        Command::ApproveFacility {
            facility_id: FacilityId::new("f_1"),
        },
    );
    state
        .insert_worker(Worker::with_stats(
            WorkerId::new("w_1"),
            create_test_worker_profile("Sarah Jenkins", "Manchester"),
            true,
            WorkerStats {
                rating: RatingSummary::new(4.9, 45),
                shifts_completed: 142,
            },
        ))
        .unwrap();
    state
}

/// Posts a shift on `date` and returns the updated state and its id.
pub fn post_shift(state: &State, date: Date) -> (State, ShiftId) {
    let result = apply(
        state,
        Command::CreateShift {
            facility_id: FacilityId::new("f_1"),
            details: create_test_details(date),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();
    let shift_id: ShiftId = match result.subject {
        crate::Subject::Shift(id) => id,
        other => panic!("unexpected subject {other}"),
    };
    (result.new_state, shift_id)
}

/// Drives a posted shift through offer and acceptance by `w_1`.
pub fn book_for_w1(state: &State, shift_id: &ShiftId) -> State {
    let state = run(
        state,
        Command::OfferToWorker {
            shift_id: shift_id.clone(),
            worker_id: WorkerId::new("w_1"),
        },
    );
    run(
        &state,
        Command::WorkerAccepts {
            shift_id: shift_id.clone(),
        },
    )
}

/// Default shift date used across the lifecycle tests.
pub const fn shift_date() -> Date {
    date!(2024 - 06 - 01)
}

/// 19:00 UTC is 20:00 in London on the default shift date.
pub const fn scheduled_start() -> OffsetDateTime {
    datetime!(2024-06-01 19:00 UTC)
}

/// Drives a shift from booked through to closed with `score`.
pub fn close_booked(state: &State, shift_id: &ShiftId, score: i64) -> State {
    let state = run(
        state,
        Command::StartShift {
            shift_id: shift_id.clone(),
            at: scheduled_start(),
        },
    );
    let state = run(
        &state,
        Command::MarkComplete {
            shift_id: shift_id.clone(),
        },
    );
    run(
        &state,
        Command::ApproveAndPay {
            shift_id: shift_id.clone(),
            score,
            comment: None,
        },
    )
}

pub fn rating(score: u8) -> Rating {
    Rating::new(score).unwrap()
}
