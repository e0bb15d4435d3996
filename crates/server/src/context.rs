// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request context extraction for the server.
//!
//! Every state-changing request is attributed to an actor and a cause
//! before it reaches the api layer. The actor comes from the optional
//! `X-Actor-Id` and `X-Actor-Type` headers; requests without them are
//! attributed to an anonymous actor. The cause is a per-process request
//! number plus the method and path.

use std::sync::atomic::Ordering;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use care_shifts_audit::{Actor, Cause};
use tracing::{debug, warn};

use crate::AppState;

/// Header naming the acting user.
pub const ACTOR_ID_HEADER: &str = "x-actor-id";
/// Header naming the acting user's role, e.g. `facility` or `worker`.
pub const ACTOR_TYPE_HEADER: &str = "x-actor-type";

const ANONYMOUS_ACTOR: &str = "anonymous";

/// Extractor for the actor and cause of a request.
///
/// # Usage
///
/// ```ignore
/// async fn my_handler(
///     RequestContext(actor, cause): RequestContext,
/// ) -> Result<Json<Response>, HttpError> {
///     Ok(Json(Response { ... }))
/// }
/// ```
///
/// # Errors
///
/// Returns HTTP 400 Bad Request if an actor header is not valid text or
/// is blank.
pub struct RequestContext(pub Actor, pub Cause);

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = ContextError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let actor_id: String = header_value(&parts.headers, ACTOR_ID_HEADER)?
            .unwrap_or_else(|| ANONYMOUS_ACTOR.to_string());
        let actor_type: String = header_value(&parts.headers, ACTOR_TYPE_HEADER)?
            .unwrap_or_else(|| ANONYMOUS_ACTOR.to_string());

        let request_number: u64 = state.request_counter.fetch_add(1, Ordering::Relaxed) + 1;
        let cause: Cause = Cause::new(
            format!("req-{request_number}"),
            format!("HTTP {} {}", parts.method, parts.uri.path()),
        );

        debug!(
            actor_id = %actor_id,
            actor_type = %actor_type,
            cause_id = %cause.id,
            "Request context extracted"
        );

        Ok(Self(Actor::new(actor_id, actor_type), cause))
    }
}

fn header_value(headers: &HeaderMap, name: &'static str) -> Result<Option<String>, ContextError> {
    let Some(raw) = headers.get(name) else {
        return Ok(None);
    };

    let text: &str = raw.to_str().map_err(|_| {
        warn!(header = name, "Actor header is not valid text");
        ContextError::InvalidHeader(name)
    })?;

    let trimmed: &str = text.trim();
    if trimmed.is_empty() {
        warn!(header = name, "Actor header is blank");
        return Err(ContextError::InvalidHeader(name));
    }
    Ok(Some(trimmed.to_string()))
}

/// Request context extraction errors.
#[derive(Debug)]
pub enum ContextError {
    /// The named header is blank or not valid text.
    InvalidHeader(&'static str),
}

impl IntoResponse for ContextError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidHeader(name) => crate::HttpError {
                status: StatusCode::BAD_REQUEST,
                message: format!("Header '{name}' must be non-empty text"),
            }
            .into_response(),
        }
    }
}
