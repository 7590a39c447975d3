//! Prometheus metrics infrastructure.
//!
//! Uses the `metrics` crate with `metrics-exporter-prometheus` for
//! exposition.
//!
//! # Metrics Exposed
//!
//! - `orderinfo_http_requests_total` - HTTP requests by method, path, status
//! - `orderinfo_http_request_duration_seconds` - Request duration histogram
//! - `orderinfo_orders_processed_total` - Orders that passed validation
//! - `orderinfo_orders_rejected_total` - Orders that failed validation
//! - `orderinfo_items_aggregated_total` - Items folded into summaries

use std::sync::Arc;

use axum::{extract::State, http::header::CONTENT_TYPE, response::IntoResponse};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Shared state containing the Prometheus handle for metrics rendering.
#[derive(Clone)]
pub struct MetricsState {
    handle: Arc<PrometheusHandle>,
}

impl MetricsState {
    /// Creates a new metrics state with the given Prometheus handle.
    pub fn new(handle: PrometheusHandle) -> Self {
        Self {
            handle: Arc::new(handle),
        }
    }

    /// Renders the current metrics in Prometheus text format.
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// Error type for metrics initialization.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("failed to install Prometheus recorder: recorder already installed")]
    AlreadyInstalled,
}

/// Initializes the Prometheus metrics recorder.
///
/// Must be called once at application startup, before any metrics are
/// recorded. Returns a handle used to render the `/metrics` output.
///
/// # Errors
///
/// Returns an error if a recorder is already installed.
pub fn init_metrics() -> Result<MetricsState, MetricsError> {
    let builder = PrometheusBuilder::new();
    let handle = builder
        .install_recorder()
        .map_err(|_| MetricsError::AlreadyInstalled)?;

    register_default_metrics();

    Ok(MetricsState::new(handle))
}

/// Registers default application metrics.
///
/// Describes the metrics that will be collected; the actual recording
/// happens in the middleware and the batch handler.
fn register_default_metrics() {
    metrics::describe_counter!(
        "orderinfo_http_requests_total",
        "Total number of HTTP requests"
    );
    metrics::describe_histogram!(
        "orderinfo_http_request_duration_seconds",
        "HTTP request duration in seconds"
    );

    metrics::describe_counter!(
        "orderinfo_orders_processed_total",
        "Total number of orders that passed validation"
    );
    metrics::describe_counter!(
        "orderinfo_orders_rejected_total",
        "Total number of orders that failed validation"
    );
    metrics::describe_counter!(
        "orderinfo_items_aggregated_total",
        "Total number of items folded into customer summaries"
    );
}

/// GET /metrics - Prometheus text exposition.
pub async fn metrics_handler(State(state): State<MetricsState>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.render(),
    )
}
