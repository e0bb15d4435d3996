// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use care_shifts_api::{
    CreateShiftRequest, FacilityResponse, ListFacilitiesResponse, ListWorkersResponse,
    RegisterFacilityRequest, RegisterWorkerRequest, ShiftResponse, TimelineResponse, WorkerInfo,
    WorkerResponse,
};
use serde_json::json;

use super::{create_seeded_app, create_test_app, send, send_empty, send_raw};
use crate::ErrorResponse;

fn facility_request() -> RegisterFacilityRequest {
    RegisterFacilityRequest {
        name: String::from("Meadow View Care Home"),
        city: String::from("Leeds"),
        post_code: None,
        address: None,
        contact_person: None,
        phone_number: None,
        care_type: None,
        has_parking: false,
        description: None,
    }
}

fn worker_request(name: &str, city: &str) -> RegisterWorkerRequest {
    RegisterWorkerRequest {
        name: String::from(name),
        email: None,
        mobile_number: Some(String::from("07700 900123")),
        city: String::from(city),
        post_code: None,
        bio: String::new(),
        hourly_rate: 20.0,
        skills: Vec::new(),
        driving_licence_number: None,
        visa_status: None,
        documents: Vec::new(),
    }
}

fn shift_request(facility_id: &str) -> CreateShiftRequest {
    CreateShiftRequest {
        facility_id: String::from(facility_id),
        title: String::from("Early Shift"),
        description: String::new(),
        date: String::from("2024-07-01"),
        start_time: String::from("07:00"),
        duration_hours: 8,
        hourly_rate: 20.0,
        location: String::from("Leeds, UK"),
    }
}

#[tokio::test]
async fn test_facility_must_be_approved_before_posting() {
    let app = create_test_app();

    let (status, registered): (StatusCode, FacilityResponse) =
        send(&app, "POST", "/facilities", Some(&facility_request())).await;
    assert_eq!(status, StatusCode::OK);
    let facility = registered.facility.unwrap();
    assert_eq!(facility.facility_id, "f_1");
    assert!(!facility.approved);

    let (status, error): (StatusCode, ErrorResponse) =
        send(&app, "POST", "/shifts", Some(&shift_request("f_1"))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(error.error);

    let (status, _): (StatusCode, FacilityResponse) =
        send_empty(&app, "POST", "/facilities/f_1/approve").await;
    assert_eq!(status, StatusCode::OK);

    let (status, posted): (StatusCode, ShiftResponse) =
        send(&app, "POST", "/shifts", Some(&shift_request("f_1"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(posted.shift.status, "OPEN");
}

#[tokio::test]
async fn test_second_approval_is_a_conflict() {
    let app = create_test_app();
    let (status, _): (StatusCode, WorkerResponse) = send(
        &app,
        "POST",
        "/workers",
        Some(&worker_request("Tom Hughes", "Leeds")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, approved): (StatusCode, WorkerResponse) =
        send_empty(&app, "POST", "/workers/w_1/approve").await;
    assert_eq!(status, StatusCode::OK);
    assert!(approved.worker.unwrap().approved);

    let (status, _): (StatusCode, ErrorResponse) =
        send_empty(&app, "POST", "/workers/w_1/approve").await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_rejected_worker_is_gone() {
    let app = create_test_app();
    let (_, _): (StatusCode, WorkerResponse) = send(
        &app,
        "POST",
        "/workers",
        Some(&worker_request("Tom Hughes", "Leeds")),
    )
    .await;

    let (status, rejected): (StatusCode, WorkerResponse) =
        send_empty(&app, "POST", "/workers/w_1/reject").await;
    assert_eq!(status, StatusCode::OK);
    assert!(rejected.worker.is_none());

    let (status, _): (StatusCode, ErrorResponse) = send_empty(&app, "GET", "/workers/w_1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_profile_update_cannot_touch_statistics() {
    let app = create_seeded_app();

    let (status, updated): (StatusCode, WorkerResponse) = send(
        &app,
        "PATCH",
        "/workers/w_1",
        Some(&json!({ "bio": "Now also trained in first aid." })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let worker = updated.worker.unwrap();
    assert_eq!(worker.bio, "Now also trained in first aid.");
    assert_eq!(worker.shifts_completed, 142);

    let request = Request::builder()
        .method("PATCH")
        .uri("/workers/w_1")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"rating":5.0,"shifts_completed":999}"#))
        .unwrap();
    assert_eq!(
        send_raw(&app, request).await,
        StatusCode::UNPROCESSABLE_ENTITY
    );
}

#[tokio::test]
async fn test_worker_documents_are_verified_by_admin_endpoint() {
    let app = create_test_app();
    let mut request = worker_request("Tom Hughes", "Leeds");
    request.documents = vec![String::from("DBS"), String::from("CERTIFICATE")];
    request.visa_status = Some(String::from("Skilled Worker"));
    let (status, registered): (StatusCode, WorkerResponse) =
        send(&app, "POST", "/workers", Some(&request)).await;
    assert_eq!(status, StatusCode::OK);
    let worker: WorkerInfo = registered.worker.unwrap();
    assert_eq!(worker.documents.len(), 2);
    assert!(!worker.dbs_verified);
    assert_eq!(worker.visa_status.as_deref(), Some("Skilled Worker"));

    let (status, verified): (StatusCode, WorkerResponse) =
        send_empty(&app, "POST", "/workers/w_1/documents/DBS/verify").await;
    assert_eq!(status, StatusCode::OK);
    let worker: WorkerInfo = verified.worker.unwrap();
    assert!(worker.dbs_verified);
    assert_eq!(worker.verified_documents, 1);

    let (status, _): (StatusCode, ErrorResponse) =
        send_empty(&app, "POST", "/workers/w_1/documents/DBS/verify").await;
    assert_eq!(status, StatusCode::CONFLICT);
    let (status, _): (StatusCode, ErrorResponse) =
        send_empty(&app, "POST", "/workers/w_1/documents/ID/verify").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _): (StatusCode, ErrorResponse) =
        send_empty(&app, "POST", "/workers/w_1/documents/PASSPORT/verify").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_profile_update_cannot_verify_documents() {
    let app = create_seeded_app();
    let request = Request::builder()
        .method("PATCH")
        .uri("/workers/w_2")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"documents":[{"kind":"ID","verified":true}]}"#))
        .unwrap();
    assert_eq!(
        send_raw(&app, request).await,
        StatusCode::UNPROCESSABLE_ENTITY
    );

    let (_, worker): (StatusCode, WorkerInfo) = send_empty(&app, "GET", "/workers/w_2").await;
    assert!(worker.dbs_verified);
    assert_eq!(worker.verified_documents, 1);
    assert_eq!(worker.documents.len(), 2);
    assert!(!worker.documents[1].verified);
}

#[tokio::test]
async fn test_list_workers_by_city() {
    let app = create_seeded_app();

    let (status, manchester): (StatusCode, ListWorkersResponse) =
        send_empty(&app, "GET", "/workers?city=manchester").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = manchester.workers.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Sarah Jenkins"));
    assert!(names.contains(&"David Okafor"));

    let (_, pending): (StatusCode, ListWorkersResponse) =
        send_empty(&app, "GET", "/workers?approved=false").await;
    assert!(pending.workers.is_empty());
}

#[tokio::test]
async fn test_list_facilities_by_approval() {
    let app = create_seeded_app();
    let (_, _): (StatusCode, FacilityResponse) =
        send(&app, "POST", "/facilities", Some(&facility_request())).await;

    let (_, pending): (StatusCode, ListFacilitiesResponse) =
        send_empty(&app, "GET", "/facilities?approved=false").await;
    assert_eq!(pending.facilities.len(), 1);
    assert_eq!(pending.facilities[0].name, "Meadow View Care Home");

    let (_, all): (StatusCode, ListFacilitiesResponse) =
        send_empty(&app, "GET", "/facilities").await;
    assert_eq!(all.facilities.len(), 2);
}

#[tokio::test]
async fn test_requests_without_actor_headers_are_anonymous() {
    let app = create_test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/facilities")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&facility_request()).unwrap()))
        .unwrap();
    assert_eq!(send_raw(&app, request).await, StatusCode::OK);

    let (_, timeline): (StatusCode, TimelineResponse) =
        send_empty(&app, "GET", "/audit/timeline").await;
    assert_eq!(timeline.events.len(), 1);
    assert_eq!(timeline.events[0].actor_id, "anonymous");
    assert_eq!(timeline.events[0].cause_description, "HTTP POST /facilities");
}

#[tokio::test]
async fn test_blank_actor_header_is_rejected() {
    let app = create_test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/facilities")
        .header("content-type", "application/json")
        .header("x-actor-id", "   ")
        .body(Body::from(serde_json::to_string(&facility_request()).unwrap()))
        .unwrap();
    assert_eq!(send_raw(&app, request).await, StatusCode::BAD_REQUEST);
}
