// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-process tests that drive the router with `tower::ServiceExt::oneshot`.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod registry_tests;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use care_shifts_api::DEFAULT_LEDGER_CAPACITY;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::{AppState, Marketplace, build_router, seed};

pub const TIMEZONE: &str = "Europe/London";

/// A router over an empty marketplace.
pub fn create_test_app() -> Router {
    let marketplace: Marketplace = Marketplace::new(TIMEZONE, DEFAULT_LEDGER_CAPACITY).unwrap();
    build_router(AppState::new(marketplace))
}

/// A router over the demo marketplace.
pub fn create_seeded_app() -> Router {
    let mut marketplace: Marketplace =
        Marketplace::new(TIMEZONE, DEFAULT_LEDGER_CAPACITY).unwrap();
    seed::seed_demo(&mut marketplace).unwrap();
    build_router(AppState::new(marketplace))
}

/// Sends a request and returns the status and parsed JSON body.
pub async fn send<T: DeserializeOwned>(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&impl Serialize>,
) -> (StatusCode, T) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-actor-id", "admin-1")
        .header("x-actor-type", "admin");
    let body: Body = body.map_or_else(Body::empty, |b| {
        Body::from(serde_json::to_string(b).unwrap())
    });

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status: StatusCode = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Sends a request without a body.
pub async fn send_empty<T: DeserializeOwned>(
    app: &Router,
    method: &str,
    uri: &str,
) -> (StatusCode, T) {
    send::<T>(app, method, uri, None::<&serde_json::Value>).await
}

/// Sends a raw request and returns only the status.
pub async fn send_raw(app: &Router, request: Request<Body>) -> StatusCode {
    app.clone().oneshot(request).await.unwrap().status()
}
