// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::sync::Mutex;

use care_shifts::State;
use care_shifts_audit::{Actor, Cause};
use care_shifts_domain::{Shift, Worker};
use time::OffsetDateTime;
use time::macros::datetime;

use crate::{
    AcceptShiftRequest, ApproveShiftRequest, CreateShiftRequest, IdempotencyLedger,
    NotificationDispatcher, NotificationError, OfferShiftRequest, RegisterFacilityRequest,
    RegisterWorkerRequest, accept_shift, approve_facility, approve_worker, complete_shift,
    create_shift, offer_shift, register_facility, register_worker, start_shift,
};

pub const TIMEZONE: &str = "Europe/London";

/// Comfortably inside the start window of a 2024-06-01 20:00 shift.
pub const START_TIME: OffsetDateTime = datetime!(2024-06-01 19:00 UTC);

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("admin-1"), String::from("admin"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("api-req-1"), String::from("API request"))
}

/// Records every message instead of sending it.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub offers: Mutex<Vec<(String, String)>>,
    pub welcomes: Mutex<Vec<String>>,
}

impl NotificationDispatcher for RecordingNotifier {
    fn notify(&self, worker: &Worker, shift: &Shift) -> Result<(), NotificationError> {
        self.offers
            .lock()
            .unwrap()
            .push((worker.id().to_string(), shift.id().to_string()));
        Ok(())
    }

    fn welcome(&self, worker: &Worker) -> Result<(), NotificationError> {
        self.welcomes.lock().unwrap().push(worker.id().to_string());
        Ok(())
    }
}

/// Fails every delivery.
pub struct BrokenNotifier;

impl NotificationDispatcher for BrokenNotifier {
    fn notify(&self, worker: &Worker, _shift: &Shift) -> Result<(), NotificationError> {
        Err(NotificationError::Delivery {
            channel: String::from("email"),
            reason: format!("mailbox for {} is full", worker.id()),
        })
    }

    fn welcome(&self, worker: &Worker) -> Result<(), NotificationError> {
        Err(NotificationError::NoChannel {
            worker_id: worker.id().to_string(),
        })
    }
}

pub fn create_facility_request() -> RegisterFacilityRequest {
    RegisterFacilityRequest {
        name: String::from("Sunrise Senior Living"),
        city: String::from("Manchester"),
        post_code: Some(String::from("M1 4BT")),
        address: Some(String::from("12 Oak Street")),
        contact_person: Some(String::from("Alice Thompson")),
        phone_number: Some(String::from("0161 496 0000")),
        care_type: Some(String::from("Residential & Nursing")),
        has_parking: true,
        description: None,
    }
}

pub fn create_worker_request(name: &str, city: &str) -> RegisterWorkerRequest {
    RegisterWorkerRequest {
        name: String::from(name),
        email: Some(format!("{}@example.com", name.to_lowercase().replace(' ', "."))),
        mobile_number: None,
        city: String::from(city),
        post_code: None,
        bio: String::from("Experienced senior carer."),
        hourly_rate: 22.5,
        skills: vec![String::from("Dementia Care")],
        driving_licence_number: None,
        visa_status: None,
        documents: vec![String::from("DBS"), String::from("ID")],
    }
}

pub fn create_shift_request(facility_id: &str, date: &str) -> CreateShiftRequest {
    CreateShiftRequest {
        facility_id: String::from(facility_id),
        title: String::from("Weekend Night Shift"),
        description: String::from("Night cover on the dementia unit."),
        date: String::from(date),
        start_time: String::from("20:00"),
        duration_hours: 12,
        hourly_rate: 24.0,
        location: String::from("Manchester, UK"),
    }
}

/// A store with approved facility `f_1` and approved workers `w_1`
/// (Sarah Jenkins) and `w_2` (Marcus Johnson).
pub fn create_marketplace() -> State {
    let notifier = RecordingNotifier::default();
    let mut state: State = State::new(TIMEZONE).unwrap();

    state = register_facility(
        &state,
        create_facility_request(),
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap()
    .new_state;
    state = approve_facility(&state, "f_1", create_test_actor(), create_test_cause())
        .unwrap()
        .new_state;

    for (name, id) in [("Sarah Jenkins", "w_1"), ("Marcus Johnson", "w_2")] {
        state = register_worker(
            &state,
            create_worker_request(name, "Manchester"),
            &notifier,
            create_test_actor(),
            create_test_cause(),
        )
        .unwrap()
        .new_state;
        state = approve_worker(&state, id, create_test_actor(), create_test_cause())
            .unwrap()
            .new_state;
    }

    state
}

/// Posts a shift for `f_1` on `date` and returns its id.
pub fn post_shift(state: &State, date: &str) -> (State, String) {
    let result = create_shift(
        state,
        create_shift_request("f_1", date),
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();
    let id: String = result.response.shift.shift_id.clone();
    (result.new_state, id)
}

/// Offers `shift_id` to `worker_id` and accepts it.
pub fn book(state: &State, shift_id: &str, worker_id: &str) -> State {
    let notifier = RecordingNotifier::default();
    let offered = offer_shift(
        state,
        shift_id,
        OfferShiftRequest {
            worker_id: String::from(worker_id),
        },
        &notifier,
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap()
    .new_state;

    let mut ledger = IdempotencyLedger::new();
    match accept_shift(
        &offered,
        &mut ledger,
        shift_id,
        AcceptShiftRequest::default(),
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap()
    {
        crate::Idempotent::Applied(result) => result.new_state,
        crate::Idempotent::Replayed(_) => panic!("fresh ledger replayed a response"),
    }
}

/// Books, starts and completes a 2024-06-01 shift for `w_1`.
pub fn completed_shift(state: &State) -> (State, String) {
    let (state, id) = post_shift(state, "2024-06-01");
    let state = book(&state, &id, "w_1");
    let state = start_shift(
        &state,
        &id,
        START_TIME,
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap()
    .new_state;
    let state = complete_shift(&state, &id, create_test_actor(), create_test_cause())
        .unwrap()
        .new_state;
    (state, id)
}

pub fn approve_request(rating: u8, key: Option<&str>) -> ApproveShiftRequest {
    ApproveShiftRequest {
        rating: rating.into(),
        comment: Some(String::from("Sarah was fantastic with the residents.")),
        idempotency_key: key.map(String::from),
    }
}
