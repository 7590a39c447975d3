//! Order batch pipeline: validate, aggregate, assemble the response.
//!
//! Each incoming batch runs through one pipeline instance:
//!
//! 1. **Validation**: every order is checked independently; the first
//!    defect per order becomes one entry in the response's error list and
//!    the order is skipped.
//! 2. **Aggregation**: surviving orders are folded into the flattened item
//!    list and the per-customer summaries.
//!
//! Partial success is the normal outcome: invalid orders never block the
//! rest of the batch, and every input yields a well-formed response.

mod handler;
mod types;

pub use handler::OrdersHandler;
pub use types::{OrdersResponse, ValidationError, EMPTY_BATCH_MESSAGE};

#[cfg(test)]
mod tests;
