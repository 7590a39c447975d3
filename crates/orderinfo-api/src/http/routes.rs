//! HTTP route definitions and handlers.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequest, Request, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::limit::RequestBodyLimitLayer;

use orderinfo_domain::Order;

use super::state::AppState;
use crate::middleware::{HttpMetricsLayer, RequestLoggingLayer};
use crate::observability::{metrics_handler, MetricsState};

/// Custom JSON extractor that returns 400 Bad Request instead of 422
/// Unprocessable Entity for deserialization errors.
///
/// Preserves 413 Payload Too Large for body limit errors.
pub struct JsonBadRequest<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBadRequest<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ApiError>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBadRequest(value)),
            Err(rejection) => {
                use axum::extract::rejection::JsonRejection;

                // BytesRejection wraps body limit errors - keep the 413
                let status = match &rejection {
                    JsonRejection::BytesRejection(_) => {
                        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                            StatusCode::PAYLOAD_TOO_LARGE
                        } else {
                            StatusCode::BAD_REQUEST
                        }
                    }
                    _ => StatusCode::BAD_REQUEST,
                };

                let message = rejection.body_text();
                let error = if status == StatusCode::PAYLOAD_TOO_LARGE {
                    ApiError::payload_too_large(message)
                } else {
                    ApiError::bad_request(message)
                };

                Err((status, Json(error)))
            }
        }
    }
}

/// Default request body size limit (1MB).
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Private helper for the domain routes.
fn api_routes() -> Router<Arc<AppState>> {
    Router::new().route("/orders/info", post(post_orders_info))
}

/// Creates the HTTP router with the default body size limit.
pub fn create_router(state: AppState) -> Router {
    create_router_with_body_limit(state, DEFAULT_BODY_LIMIT)
}

/// Creates the HTTP router with a custom body size limit.
///
/// # Arguments
///
/// * `state` - Application state with the order batch handler
/// * `body_limit` - Maximum request body size in bytes
pub fn create_router_with_body_limit(state: AppState, body_limit: usize) -> Router {
    let shared_state = Arc::new(state);
    api_routes()
        .route("/health", get(health_check))
        .with_state(shared_state)
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(RequestLoggingLayer::new())
        .layer(HttpMetricsLayer::new())
}

/// Creates the HTTP router with the Prometheus metrics endpoint.
///
/// Applies the default body size limit.
pub fn create_router_with_observability(state: AppState, metrics_state: MetricsState) -> Router {
    create_router_with_observability_and_limit(state, metrics_state, DEFAULT_BODY_LIMIT)
}

/// Creates the HTTP router with the Prometheus metrics endpoint and a
/// custom body size limit.
pub fn create_router_with_observability_and_limit(
    state: AppState,
    metrics_state: MetricsState,
    body_limit: usize,
) -> Router {
    let shared_state = Arc::new(state);

    // Body size limit applies to the domain routes only
    let api_router = api_routes()
        .with_state(shared_state)
        .layer(RequestBodyLimitLayer::new(body_limit));

    // Observability router (metrics, health) - no body limit needed
    let observability_router = Router::new()
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_check))
        .with_state(metrics_state);

    api_router
        .merge(observability_router)
        .layer(RequestLoggingLayer::new())
        .layer(HttpMetricsLayer::new())
}

// ============================================================
// Error Handling
// ============================================================

/// Transport-level error codes.
///
/// Domain validation failures are never reported through these: they are
/// first-class data inside the 200 response. These codes cover only what
/// happens before the pipeline runs (undecodable body, oversized payload)
/// or after it (encoding failure).
pub mod error_codes {
    /// Request body could not be decoded into an order batch.
    pub const BAD_REQUEST: &str = "bad_request";
    /// Request body exceeds the configured size limit.
    pub const PAYLOAD_TOO_LARGE: &str = "payload_too_large";
    /// Unexpected internal server error.
    pub const INTERNAL_ERROR: &str = "internal_error";
}

/// API error response body.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates a bad request error (400).
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(error_codes::BAD_REQUEST, message)
    }

    /// Creates a payload too large error (413).
    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::new(error_codes::PAYLOAD_TOO_LARGE, message)
    }

    /// Creates an internal error (500).
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(error_codes::INTERNAL_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        use error_codes::*;

        let status = match self.code.as_str() {
            BAD_REQUEST => StatusCode::BAD_REQUEST,
            PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

// ============================================================
// Health Check
// ============================================================

/// Basic health check - returns 200 if the server is running.
///
/// This is a liveness probe; it has no dependencies to verify.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Orders Operation
// ============================================================

/// POST /orders/info - validate and aggregate an order batch.
///
/// The pipeline itself never fails: every decodable batch, however
/// malformed domain-wise, yields a 200 with a well-formed response whose
/// error list carries the per-order validation failures.
async fn post_orders_info(
    State(state): State<Arc<AppState>>,
    JsonBadRequest(orders): JsonBadRequest<Vec<Order>>,
) -> impl IntoResponse {
    Json(state.handler.process(&orders))
}
