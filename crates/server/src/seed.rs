// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Demo data: one approved facility, three approved workers and one open
//! shift.

use care_shifts_api::{ApiError, CreateShiftRequest, create_shift, translate_domain_error};
use care_shifts_audit::{Actor, Cause};
use care_shifts_domain::{
    DocumentKind, DomainError, Facility, FacilityId, FacilityProfile, RatingSummary, Worker,
    WorkerId, WorkerProfile, WorkerStats,
};
use tracing::info;

use crate::Marketplace;

struct DemoWorker {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    city: &'static str,
    post_code: &'static str,
    bio: &'static str,
    hourly_rate: f64,
    skills: &'static [&'static str],
    rating: f64,
    total_ratings: u32,
    shifts_completed: u32,
    documents: &'static [DocumentKind],
    verified: &'static [DocumentKind],
}

const DEMO_WORKERS: [DemoWorker; 3] = [
    DemoWorker {
        id: "w_1",
        name: "Sarah Jenkins",
        email: "sarah.jenkins@example.com",
        city: "Manchester",
        post_code: "M14 5AB",
        bio: "Certified nursing assistant with 5 years experience in dementia care. Friendly, patient, and reliable.",
        hourly_rate: 22.0,
        skills: &["Dementia Care", "Medication Admin", "Night Shift"],
        rating: 4.9,
        total_ratings: 45,
        shifts_completed: 142,
        documents: &[DocumentKind::Dbs, DocumentKind::Certificate, DocumentKind::Id],
        verified: &[DocumentKind::Dbs, DocumentKind::Certificate, DocumentKind::Id],
    },
    DemoWorker {
        id: "w_2",
        name: "David Okafor",
        email: "david.okafor@example.com",
        city: "Manchester",
        post_code: "M20 2CD",
        bio: "Hardworking care assistant. Available for night shifts and weekends. Recent graduate.",
        hourly_rate: 19.0,
        skills: &["Mobility Support", "Personal Care"],
        rating: 4.5,
        total_ratings: 12,
        shifts_completed: 34,
        documents: &[DocumentKind::Dbs, DocumentKind::Id],
        verified: &[DocumentKind::Dbs],
    },
    DemoWorker {
        id: "w_3",
        name: "Maria Gonzalez",
        email: "maria.gonzalez@example.com",
        city: "Bolton",
        post_code: "BL1 4TH",
        bio: "Senior carer with extensive experience in palliative care. Compassionate and detail-oriented.",
        hourly_rate: 25.0,
        skills: &["Palliative Care", "Team Leadership", "First Aid"],
        rating: 4.7,
        total_ratings: 89,
        shifts_completed: 215,
        documents: &[DocumentKind::Dbs, DocumentKind::Certificate],
        verified: &[DocumentKind::Dbs, DocumentKind::Certificate],
    },
];

fn demo_facility() -> Facility {
    Facility::with_rating(
        FacilityId::new("f_1"),
        FacilityProfile {
            name: String::from("Sunrise Senior Living"),
            city: String::from("Manchester"),
            post_code: Some(String::from("M1 4BT")),
            address: None,
            contact_person: Some(String::from("Alice Thompson")),
            phone_number: Some(String::from("0161 123 4567")),
            care_type: Some(String::from("Residential & Nursing")),
            has_parking: true,
            description: Some(String::from(
                "A warm and welcoming community providing high-quality residential and nursing care for older people.",
            )),
        },
        true,
        RatingSummary::new(4.8, 124),
    )
}

fn demo_worker(demo: &DemoWorker) -> Result<Worker, DomainError> {
    let mut worker: Worker = Worker::with_stats(
        WorkerId::new(demo.id),
        WorkerProfile {
            name: demo.name.to_string(),
            email: Some(demo.email.to_string()),
            mobile_number: None,
            city: demo.city.to_string(),
            post_code: Some(demo.post_code.to_string()),
            bio: demo.bio.to_string(),
            hourly_rate: demo.hourly_rate,
            skills: demo.skills.iter().map(ToString::to_string).collect(),
            driving_licence_number: None,
            visa_status: None,
        },
        true,
        WorkerStats {
            rating: RatingSummary::new(demo.rating, demo.total_ratings),
            shifts_completed: demo.shifts_completed,
        },
    );
    worker.declare_documents(demo.documents);
    for kind in demo.verified {
        worker.verify_document(*kind)?;
    }
    Ok(worker)
}

/// Loads the demo records into an empty marketplace.
///
/// The facility and workers are inserted with their existing history; the
/// shift is posted through the normal create operation so it appears in
/// the audit trail.
///
/// # Errors
///
/// Returns an error if any demo id is already taken or the shift cannot
/// be posted.
pub fn seed_demo(marketplace: &mut Marketplace) -> Result<(), ApiError> {
    marketplace
        .state
        .insert_facility(demo_facility())
        .map_err(translate_domain_error)?;
    for demo in &DEMO_WORKERS {
        marketplace
            .state
            .insert_worker(demo_worker(demo).map_err(translate_domain_error)?)
            .map_err(translate_domain_error)?;
    }

    let request: CreateShiftRequest = CreateShiftRequest {
        facility_id: String::from("f_1"),
        title: String::from("Weekend Night Shift"),
        description: String::from(
            "Looking for a reliable carer to cover a night shift this Saturday. Must have experience with mobility aids.",
        ),
        date: String::from("2023-11-25"),
        start_time: String::from("20:00"),
        duration_hours: 12,
        hourly_rate: 24.0,
        location: String::from("Manchester, UK"),
    };
    let result = create_shift(
        &marketplace.state,
        request,
        Actor::system(),
        Cause::new(String::from("seed"), String::from("Demo data")),
    )?;
    let shift_id: String = result.response.shift.shift_id.clone();
    marketplace.commit(result);

    info!(
        facility_id = "f_1",
        workers = DEMO_WORKERS.len(),
        shift_id = %shift_id,
        "Loaded demo data"
    );
    Ok(())
}
