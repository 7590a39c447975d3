//! Application state for HTTP handlers.

use std::sync::Arc;

use orderinfo_server::handlers::orders::OrdersHandler;

/// Application state shared across all HTTP handlers.
///
/// The pipeline is stateless per request; the state only carries the
/// shared handler so every request runs through one instance. Nothing
/// survives a request, so no synchronization is needed.
#[derive(Clone, Default)]
pub struct AppState {
    /// The order batch handler.
    pub handler: Arc<OrdersHandler>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new() -> Self {
        Self::default()
    }
}
