//! Observability infrastructure for orderinfo.
//!
//! This module provides:
//! - Structured logging configuration
//! - Prometheus metrics endpoint

mod logging;
mod metrics;

pub use logging::{create_json_layer, init_logging, LoggingConfig};
pub use metrics::{init_metrics, metrics_handler, MetricsError, MetricsState};
