// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::macros::{date, time};

use crate::{
    Facility, FacilityId, FacilityProfile, Shift, ShiftDetails, ShiftId, WorkerProfile,
};

pub fn create_test_facility_profile() -> FacilityProfile {
    FacilityProfile {
        name: String::from("Sunrise Senior Living"),
        city: String::from("Manchester"),
        post_code: Some(String::from("M1 4BT")),
        address: None,
        contact_person: Some(String::from("Alice Thompson")),
        phone_number: None,
        care_type: Some(String::from("Residential & Nursing")),
        has_parking: true,
        description: None,
    }
}

pub fn create_test_facility() -> Facility {
    Facility::new(FacilityId::new("f_1"), create_test_facility_profile())
}

pub fn create_test_worker_profile() -> WorkerProfile {
    WorkerProfile {
        name: String::from("Sarah Jenkins"),
        email: Some(String::from("sarah@example.com")),
        mobile_number: None,
        city: String::from("Manchester"),
        post_code: Some(String::from("M14 5AB")),
        bio: String::from("Certified nursing assistant."),
        hourly_rate: 22.0,
        skills: vec![String::from("Dementia Care")],
        driving_licence_number: Some(String::from("JENKI801015S99AB")),
        visa_status: None,
    }
}

pub fn create_test_details() -> ShiftDetails {
    ShiftDetails {
        title: String::from("Weekend Night Shift"),
        description: String::from("Cover a night shift."),
        date: date!(2024 - 06 - 01),
        start_time: time!(20:00),
        duration_hours: 12,
        hourly_rate: 24.0,
        location: String::from("Manchester, UK"),
    }
}

pub fn create_test_shift() -> Shift {
    Shift::open(ShiftId::new("s_1"), &create_test_facility(), create_test_details())
}
