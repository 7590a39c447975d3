//! HTTP REST API endpoints.
//!
//! # Endpoints
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/orders/info` | POST | Validate and aggregate an order batch |
//! | `/health` | GET | Liveness check |
//! | `/metrics` | GET | Prometheus metrics |

pub mod routes;
pub mod state;

pub use routes::{
    create_router, create_router_with_body_limit, create_router_with_observability,
    create_router_with_observability_and_limit, DEFAULT_BODY_LIMIT,
};
pub use state::AppState;
