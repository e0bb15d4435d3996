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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod context;
mod seed;

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use care_shifts::State;
use care_shifts_api::{
    AcceptShiftRequest, ApiError, ApiResult, ApproveShiftRequest, ApproveShiftResponse,
    AvailabilityResponse, CreateShiftRequest, DEFAULT_LEDGER_CAPACITY, DescribeShiftRequest,
    DescribeShiftResponse, DescriptionGenerator, FacilityInfo, FacilityResponse,
    IdempotencyLedger, Idempotent, ListFacilitiesResponse, ListShiftsQuery, ListShiftsResponse,
    ListWorkersResponse, LogNotifier, NotificationDispatcher, OfferShiftRequest,
    RateFacilityRequest, RegisterFacilityRequest, RegisterWorkerRequest, ShiftInfo, ShiftResponse,
    TemplateDescriptionGenerator, TimelineResponse, UpdateFacilityRequest, UpdateWorkerRequest,
    WorkerInfo, WorkerResponse, rules,
};
use care_shifts_audit::AuditLog;
use care_shifts_domain::parse_timezone;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::context::RequestContext;

/// Care Shifts Server - HTTP server for the care shift marketplace
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// IANA timezone in which shift dates and start times are expressed
    #[arg(short, long, default_value = "Europe/London")]
    timezone: String,

    /// Load a demo facility, three workers and one open shift
    #[arg(long)]
    seed_demo: bool,

    /// Idempotency keys remembered per lifecycle operation
    #[arg(long, default_value_t = DEFAULT_LEDGER_CAPACITY)]
    idempotency_capacity: usize,
}

/// Everything a command may change, guarded by one lock.
#[derive(Debug)]
struct Marketplace {
    /// The entity store.
    state: State,
    /// Every committed audit event.
    audit_log: AuditLog,
    /// Remembered acceptances by idempotency key.
    accept_ledger: IdempotencyLedger<ShiftResponse>,
    /// Remembered approvals by idempotency key.
    approve_ledger: IdempotencyLedger<ApproveShiftResponse>,
}

impl Marketplace {
    /// Creates an empty marketplace in `timezone` whose ledgers each
    /// remember up to `ledger_capacity` keys.
    fn new(timezone: &str, ledger_capacity: usize) -> Result<Self, ApiError> {
        Ok(Self {
            state: State::new(timezone).map_err(care_shifts_api::translate_domain_error)?,
            audit_log: AuditLog::new(),
            accept_ledger: IdempotencyLedger::with_capacity(ledger_capacity),
            approve_ledger: IdempotencyLedger::with_capacity(ledger_capacity),
        })
    }

    /// Installs the new state and records its audit event.
    fn commit<T>(&mut self, result: ApiResult<T>) -> T {
        let event_id: u64 = self
            .audit_log
            .append(result.audit_event, OffsetDateTime::now_utc());
        self.state = result.new_state;
        debug!(event_id, "Committed transition");
        result.response
    }

    /// Commits an applied outcome; replayed responses change nothing.
    fn settle<T>(&mut self, outcome: Idempotent<T>) -> T {
        match outcome {
            Idempotent::Applied(result) => self.commit(result),
            Idempotent::Replayed(response) => {
                debug!("Replayed idempotent response");
                response
            }
        }
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The marketplace, serialized behind a single mutex.
    marketplace: Arc<Mutex<Marketplace>>,
    /// Sends offer and welcome messages.
    notifier: Arc<dyn NotificationDispatcher>,
    /// Drafts shift descriptions.
    generator: Arc<dyn DescriptionGenerator>,
    /// Numbers requests for audit causes.
    request_counter: Arc<AtomicU64>,
}

impl AppState {
    fn new(marketplace: Marketplace) -> Self {
        Self {
            marketplace: Arc::new(Mutex::new(marketplace)),
            notifier: Arc::new(LogNotifier),
            generator: Arc::new(TemplateDescriptionGenerator),
            request_counter: Arc::new(AtomicU64::new(0)),
        }
    }
}

/// Query parameters for listing facilities.
#[derive(Debug, Deserialize)]
struct ListFacilitiesQuery {
    /// Restrict to approved or pending facilities.
    approved: Option<bool>,
}

/// Query parameters for listing workers.
#[derive(Debug, Deserialize)]
struct ListWorkersQuery {
    /// Restrict to approved or pending workers.
    approved: Option<bool>,
    /// Restrict to one city.
    city: Option<String>,
}

/// Query parameters for an availability check.
#[derive(Debug, Deserialize)]
struct AvailabilityQuery {
    /// The date to check (YYYY-MM-DD).
    date: String,
    /// A shift to ignore, typically the one being accepted.
    exclude: Option<String>,
}

/// Query parameters for the audit timeline.
#[derive(Debug, Deserialize)]
struct TimelineQuery {
    /// Restrict to one subject, e.g. `shift:s_1`.
    subject: Option<String>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::DomainRuleViolation { rule, .. } if rule == rules::NOT_YET_STARTABLE => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::DomainRuleViolation { .. } => StatusCode::CONFLICT,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Facilities
// ---------------------------------------------------------------------------

/// Handler for POST `/facilities` endpoint.
async fn handle_register_facility(
    AxumState(app_state): AxumState<AppState>,
    RequestContext(actor, cause): RequestContext,
    Json(req): Json<RegisterFacilityRequest>,
) -> Result<Json<FacilityResponse>, HttpError> {
    info!(name = %req.name, city = %req.city, "Handling register_facility request");

    let mut marketplace = app_state.marketplace.lock().await;
    let result = care_shifts_api::register_facility(&marketplace.state, req, actor, cause)?;
    Ok(Json(marketplace.commit(result)))
}

/// Handler for POST `/facilities/{id}/approve` endpoint.
async fn handle_approve_facility(
    AxumState(app_state): AxumState<AppState>,
    Path(facility_id): Path<String>,
    RequestContext(actor, cause): RequestContext,
) -> Result<Json<FacilityResponse>, HttpError> {
    info!(facility_id = %facility_id, "Handling approve_facility request");

    let mut marketplace = app_state.marketplace.lock().await;
    let result =
        care_shifts_api::approve_facility(&marketplace.state, &facility_id, actor, cause)?;
    Ok(Json(marketplace.commit(result)))
}

/// Handler for POST `/facilities/{id}/reject` endpoint.
async fn handle_reject_facility(
    AxumState(app_state): AxumState<AppState>,
    Path(facility_id): Path<String>,
    RequestContext(actor, cause): RequestContext,
) -> Result<Json<FacilityResponse>, HttpError> {
    info!(facility_id = %facility_id, "Handling reject_facility request");

    let mut marketplace = app_state.marketplace.lock().await;
    let result = care_shifts_api::reject_facility(&marketplace.state, &facility_id, actor, cause)?;
    Ok(Json(marketplace.commit(result)))
}

/// Handler for PATCH `/facilities/{id}` endpoint.
async fn handle_update_facility(
    AxumState(app_state): AxumState<AppState>,
    Path(facility_id): Path<String>,
    RequestContext(actor, cause): RequestContext,
    Json(req): Json<UpdateFacilityRequest>,
) -> Result<Json<FacilityResponse>, HttpError> {
    info!(facility_id = %facility_id, "Handling update_facility request");

    let mut marketplace = app_state.marketplace.lock().await;
    let result =
        care_shifts_api::update_facility(&marketplace.state, &facility_id, req, actor, cause)?;
    Ok(Json(marketplace.commit(result)))
}

/// Handler for GET `/facilities/{id}` endpoint.
async fn handle_get_facility(
    AxumState(app_state): AxumState<AppState>,
    Path(facility_id): Path<String>,
) -> Result<Json<FacilityInfo>, HttpError> {
    let marketplace = app_state.marketplace.lock().await;
    Ok(Json(care_shifts_api::get_facility(
        &marketplace.state,
        &facility_id,
    )?))
}

/// Handler for GET `/facilities` endpoint.
async fn handle_list_facilities(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListFacilitiesQuery>,
) -> Json<ListFacilitiesResponse> {
    let marketplace = app_state.marketplace.lock().await;
    Json(care_shifts_api::list_facilities(
        &marketplace.state,
        query.approved,
    ))
}

// ---------------------------------------------------------------------------
// Workers
// ---------------------------------------------------------------------------

/// Handler for POST `/workers` endpoint.
async fn handle_register_worker(
    AxumState(app_state): AxumState<AppState>,
    RequestContext(actor, cause): RequestContext,
    Json(req): Json<RegisterWorkerRequest>,
) -> Result<Json<WorkerResponse>, HttpError> {
    info!(name = %req.name, city = %req.city, "Handling register_worker request");

    let mut marketplace = app_state.marketplace.lock().await;
    let result = care_shifts_api::register_worker(
        &marketplace.state,
        req,
        app_state.notifier.as_ref(),
        actor,
        cause,
    )?;
    Ok(Json(marketplace.commit(result)))
}

/// Handler for POST `/workers/{id}/approve` endpoint.
async fn handle_approve_worker(
    AxumState(app_state): AxumState<AppState>,
    Path(worker_id): Path<String>,
    RequestContext(actor, cause): RequestContext,
) -> Result<Json<WorkerResponse>, HttpError> {
    info!(worker_id = %worker_id, "Handling approve_worker request");

    let mut marketplace = app_state.marketplace.lock().await;
    let result = care_shifts_api::approve_worker(&marketplace.state, &worker_id, actor, cause)?;
    Ok(Json(marketplace.commit(result)))
}

/// Handler for POST `/workers/{id}/reject` endpoint.
async fn handle_reject_worker(
    AxumState(app_state): AxumState<AppState>,
    Path(worker_id): Path<String>,
    RequestContext(actor, cause): RequestContext,
) -> Result<Json<WorkerResponse>, HttpError> {
    info!(worker_id = %worker_id, "Handling reject_worker request");

    let mut marketplace = app_state.marketplace.lock().await;
    let result = care_shifts_api::reject_worker(&marketplace.state, &worker_id, actor, cause)?;
    Ok(Json(marketplace.commit(result)))
}

/// Handler for POST `/workers/{id}/documents/{kind}/verify` endpoint.
async fn handle_verify_worker_document(
    AxumState(app_state): AxumState<AppState>,
    Path((worker_id, kind)): Path<(String, String)>,
    RequestContext(actor, cause): RequestContext,
) -> Result<Json<WorkerResponse>, HttpError> {
    info!(worker_id = %worker_id, kind = %kind, "Handling verify_worker_document request");

    let mut marketplace = app_state.marketplace.lock().await;
    let result = care_shifts_api::verify_worker_document(
        &marketplace.state,
        &worker_id,
        &kind,
        actor,
        cause,
    )?;
    Ok(Json(marketplace.commit(result)))
}

/// Handler for PATCH `/workers/{id}` endpoint.
async fn handle_update_worker(
    AxumState(app_state): AxumState<AppState>,
    Path(worker_id): Path<String>,
    RequestContext(actor, cause): RequestContext,
    Json(req): Json<UpdateWorkerRequest>,
) -> Result<Json<WorkerResponse>, HttpError> {
    info!(worker_id = %worker_id, "Handling update_worker request");

    let mut marketplace = app_state.marketplace.lock().await;
    let result =
        care_shifts_api::update_worker(&marketplace.state, &worker_id, req, actor, cause)?;
    Ok(Json(marketplace.commit(result)))
}

/// Handler for GET `/workers/{id}` endpoint.
async fn handle_get_worker(
    AxumState(app_state): AxumState<AppState>,
    Path(worker_id): Path<String>,
) -> Result<Json<WorkerInfo>, HttpError> {
    let marketplace = app_state.marketplace.lock().await;
    Ok(Json(care_shifts_api::get_worker(
        &marketplace.state,
        &worker_id,
    )?))
}

/// Handler for GET `/workers` endpoint.
async fn handle_list_workers(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListWorkersQuery>,
) -> Json<ListWorkersResponse> {
    let marketplace = app_state.marketplace.lock().await;
    Json(care_shifts_api::list_workers(
        &marketplace.state,
        query.approved,
        query.city.as_deref(),
    ))
}

/// Handler for GET `/workers/{id}/availability` endpoint.
async fn handle_check_availability(
    AxumState(app_state): AxumState<AppState>,
    Path(worker_id): Path<String>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, HttpError> {
    let marketplace = app_state.marketplace.lock().await;
    Ok(Json(care_shifts_api::check_availability(
        &marketplace.state,
        &worker_id,
        &query.date,
        query.exclude.as_deref(),
    )?))
}

// ---------------------------------------------------------------------------
// Shifts
// ---------------------------------------------------------------------------

/// Handler for POST `/shifts` endpoint.
async fn handle_create_shift(
    AxumState(app_state): AxumState<AppState>,
    RequestContext(actor, cause): RequestContext,
    Json(req): Json<CreateShiftRequest>,
) -> Result<Json<ShiftResponse>, HttpError> {
    info!(
        facility_id = %req.facility_id,
        date = %req.date,
        "Handling create_shift request"
    );

    let mut marketplace = app_state.marketplace.lock().await;
    let result = care_shifts_api::create_shift(&marketplace.state, req, actor, cause)?;
    Ok(Json(marketplace.commit(result)))
}

/// Handler for POST `/shifts/describe` endpoint.
///
/// Drafts a description without touching the marketplace.
#[allow(clippy::unused_async)]
async fn handle_describe_shift(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<DescribeShiftRequest>,
) -> Json<DescribeShiftResponse> {
    Json(care_shifts_api::describe(app_state.generator.as_ref(), &req))
}

/// Handler for GET `/shifts` endpoint.
async fn handle_list_shifts(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListShiftsQuery>,
) -> Result<Json<ListShiftsResponse>, HttpError> {
    let marketplace = app_state.marketplace.lock().await;
    Ok(Json(care_shifts_api::list_shifts(
        &marketplace.state,
        &query,
    )?))
}

/// Handler for GET `/shifts/{id}` endpoint.
async fn handle_get_shift(
    AxumState(app_state): AxumState<AppState>,
    Path(shift_id): Path<String>,
) -> Result<Json<ShiftInfo>, HttpError> {
    let marketplace = app_state.marketplace.lock().await;
    Ok(Json(care_shifts_api::get_shift(
        &marketplace.state,
        &shift_id,
    )?))
}

/// Handler for POST `/shifts/{id}/offer` endpoint.
async fn handle_offer_shift(
    AxumState(app_state): AxumState<AppState>,
    Path(shift_id): Path<String>,
    RequestContext(actor, cause): RequestContext,
    Json(req): Json<OfferShiftRequest>,
) -> Result<Json<ShiftResponse>, HttpError> {
    info!(shift_id = %shift_id, worker_id = %req.worker_id, "Handling offer_shift request");

    let mut marketplace = app_state.marketplace.lock().await;
    let result = care_shifts_api::offer_shift(
        &marketplace.state,
        &shift_id,
        req,
        app_state.notifier.as_ref(),
        actor,
        cause,
    )?;
    Ok(Json(marketplace.commit(result)))
}

/// Handler for POST `/shifts/{id}/accept` endpoint.
async fn handle_accept_shift(
    AxumState(app_state): AxumState<AppState>,
    Path(shift_id): Path<String>,
    RequestContext(actor, cause): RequestContext,
    Json(req): Json<AcceptShiftRequest>,
) -> Result<Json<ShiftResponse>, HttpError> {
    info!(shift_id = %shift_id, "Handling accept_shift request");

    let mut guard = app_state.marketplace.lock().await;
    let marketplace: &mut Marketplace = &mut guard;
    let outcome = care_shifts_api::accept_shift(
        &marketplace.state,
        &mut marketplace.accept_ledger,
        &shift_id,
        req,
        actor,
        cause,
    )?;
    Ok(Json(marketplace.settle(outcome)))
}

/// Handler for POST `/shifts/{id}/reject` endpoint.
async fn handle_reject_shift(
    AxumState(app_state): AxumState<AppState>,
    Path(shift_id): Path<String>,
    RequestContext(actor, cause): RequestContext,
) -> Result<Json<ShiftResponse>, HttpError> {
    info!(shift_id = %shift_id, "Handling reject_shift request");

    let mut marketplace = app_state.marketplace.lock().await;
    let result = care_shifts_api::reject_shift(&marketplace.state, &shift_id, actor, cause)?;
    Ok(Json(marketplace.commit(result)))
}

/// Handler for POST `/shifts/{id}/start` endpoint.
///
/// The start instant is the server clock at the time of the request.
async fn handle_start_shift(
    AxumState(app_state): AxumState<AppState>,
    Path(shift_id): Path<String>,
    RequestContext(actor, cause): RequestContext,
) -> Result<Json<ShiftResponse>, HttpError> {
    info!(shift_id = %shift_id, "Handling start_shift request");

    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let mut marketplace = app_state.marketplace.lock().await;
    let result = care_shifts_api::start_shift(&marketplace.state, &shift_id, now, actor, cause)?;
    Ok(Json(marketplace.commit(result)))
}

/// Handler for POST `/shifts/{id}/complete` endpoint.
async fn handle_complete_shift(
    AxumState(app_state): AxumState<AppState>,
    Path(shift_id): Path<String>,
    RequestContext(actor, cause): RequestContext,
) -> Result<Json<ShiftResponse>, HttpError> {
    info!(shift_id = %shift_id, "Handling complete_shift request");

    let mut marketplace = app_state.marketplace.lock().await;
    let result = care_shifts_api::complete_shift(&marketplace.state, &shift_id, actor, cause)?;
    Ok(Json(marketplace.commit(result)))
}

/// Handler for POST `/shifts/{id}/approve` endpoint.
async fn handle_approve_shift(
    AxumState(app_state): AxumState<AppState>,
    Path(shift_id): Path<String>,
    RequestContext(actor, cause): RequestContext,
    Json(req): Json<ApproveShiftRequest>,
) -> Result<Json<ApproveShiftResponse>, HttpError> {
    info!(shift_id = %shift_id, rating = req.rating, "Handling approve_shift request");

    let mut guard = app_state.marketplace.lock().await;
    let marketplace: &mut Marketplace = &mut guard;
    let outcome = care_shifts_api::approve_shift(
        &marketplace.state,
        &mut marketplace.approve_ledger,
        &shift_id,
        req,
        actor,
        cause,
    )?;
    Ok(Json(marketplace.settle(outcome)))
}

/// Handler for POST `/shifts/{id}/rate` endpoint.
async fn handle_rate_facility(
    AxumState(app_state): AxumState<AppState>,
    Path(shift_id): Path<String>,
    RequestContext(actor, cause): RequestContext,
    Json(req): Json<RateFacilityRequest>,
) -> Result<Json<ShiftResponse>, HttpError> {
    info!(shift_id = %shift_id, rating = req.rating, "Handling rate_facility request");

    let mut marketplace = app_state.marketplace.lock().await;
    let result =
        care_shifts_api::rate_facility(&marketplace.state, &shift_id, req, actor, cause)?;
    Ok(Json(marketplace.commit(result)))
}

// ---------------------------------------------------------------------------
// Audit
// ---------------------------------------------------------------------------

/// Handler for GET `/audit/timeline` endpoint.
async fn handle_get_audit_timeline(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<TimelineQuery>,
) -> Result<Json<TimelineResponse>, HttpError> {
    let marketplace = app_state.marketplace.lock().await;
    Ok(Json(care_shifts_api::get_timeline(
        &marketplace.audit_log,
        query.subject.as_deref(),
    )?))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/facilities",
            post(handle_register_facility).get(handle_list_facilities),
        )
        .route(
            "/facilities/{id}",
            get(handle_get_facility).patch(handle_update_facility),
        )
        .route("/facilities/{id}/approve", post(handle_approve_facility))
        .route("/facilities/{id}/reject", post(handle_reject_facility))
        .route(
            "/workers",
            post(handle_register_worker).get(handle_list_workers),
        )
        .route("/workers/{id}", get(handle_get_worker).patch(handle_update_worker))
        .route("/workers/{id}/approve", post(handle_approve_worker))
        .route("/workers/{id}/reject", post(handle_reject_worker))
        .route(
            "/workers/{id}/documents/{kind}/verify",
            post(handle_verify_worker_document),
        )
        .route("/workers/{id}/availability", get(handle_check_availability))
        .route("/shifts", post(handle_create_shift).get(handle_list_shifts))
        .route("/shifts/describe", post(handle_describe_shift))
        .route("/shifts/{id}", get(handle_get_shift))
        .route("/shifts/{id}/offer", post(handle_offer_shift))
        .route("/shifts/{id}/accept", post(handle_accept_shift))
        .route("/shifts/{id}/reject", post(handle_reject_shift))
        .route("/shifts/{id}/start", post(handle_start_shift))
        .route("/shifts/{id}/complete", post(handle_complete_shift))
        .route("/shifts/{id}/approve", post(handle_approve_shift))
        .route("/shifts/{id}/rate", post(handle_rate_facility))
        .route("/audit/timeline", get(handle_get_audit_timeline))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Care Shifts Server");

    parse_timezone(&args.timezone)?;
    info!(timezone = %args.timezone, "Using marketplace timezone");

    let mut marketplace: Marketplace =
        Marketplace::new(&args.timezone, args.idempotency_capacity)?;
    info!(
        capacity = args.idempotency_capacity,
        "Idempotency ledgers configured"
    );
    if args.seed_demo {
        seed::seed_demo(&mut marketplace)?;
    }

    let app: Router = build_router(AppState::new(marketplace));

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests;
