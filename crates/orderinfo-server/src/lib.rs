//! orderinfo-server: request handlers and configuration
//!
//! This crate contains the business logic layer:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              orderinfo-server                │
//! ├─────────────────────────────────────────────┤
//! │  config.rs   - Configuration management     │
//! │  handlers/   - Request handlers             │
//! │    orders/   - Order batch pipeline         │
//! └─────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod handlers;

// Re-exports for convenience
pub use config::{ConfigLoadError, ServerConfig};
