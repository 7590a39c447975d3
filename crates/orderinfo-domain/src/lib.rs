//! orderinfo-domain: order batch validation and aggregation
//!
//! Pure request-scoped logic with no I/O:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              orderinfo-domain                │
//! ├─────────────────────────────────────────────┤
//! │  order.rs      - input/output data model    │
//! │  validation.rs - structural order checks    │
//! │  aggregate.rs  - per-customer aggregation   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Every entity here lives for exactly one request: decoded from the
//! incoming batch, consumed by validation and aggregation, and handed back
//! to the HTTP layer by value.

pub mod aggregate;
pub mod order;
pub mod validation;

// Re-exports for convenience
pub use aggregate::{aggregate, Aggregator};
pub use order::{CustomerItem, CustomerSummary, Item, Order};
pub use validation::{validate, OrderDefect};
