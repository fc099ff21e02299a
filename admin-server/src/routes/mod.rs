//! Router assembly
//!
//! Registers every API router and stacks the tower-http middleware plus the
//! global authentication gate.

use axum::Router;
use http::{HeaderName, HeaderValue};
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api;
use crate::auth;
use crate::core::ServerState;

/// Upper bound on request handling; a stuck store call surfaces as a
/// timeout response instead of hanging the connection
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).unwrap()))
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Health API - public route
        .merge(api::health::router())
        // Auth API - login is public, the rest authenticated
        .merge(api::auth::router())
        // Admin APIs - authenticated + admin role
        .merge(api::departments::router())
        .merge(api::employees::router())
}

/// Build the fully configured application with middleware
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router()
        // CORS - handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Request timeout
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        // Trace - request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - generate a unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        // JWT authentication - runs before routes, injects CurrentUser
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth::require_auth,
        ))
}
