//! orderinfo-api: HTTP API layer
//!
//! This crate provides the HTTP surface of the service:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               orderinfo-api                  │
//! ├─────────────────────────────────────────────┤
//! │  http/          - REST endpoints (Axum)     │
//! │  middleware/    - Request logging, metrics  │
//! │  observability/ - Logging + Prometheus init │
//! └─────────────────────────────────────────────┘
//! ```

pub mod http;
pub mod middleware;
pub mod observability;
