//! Data types for the order batch pipeline.

use orderinfo_domain::{CustomerItem, CustomerSummary};
use serde::Serialize;

/// Error reported for a batch containing no orders at all.
pub const EMPTY_BATCH_MESSAGE: &str = "Request must contain at least one order to process";

/// A validation failure for one order in the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    /// Position of the offending order in the input array.
    pub index: usize,
    /// The orderId as supplied, possibly empty.
    pub order_id: String,
    /// Human-readable description of the first defect found.
    pub error: String,
}

/// The combined result of one batch run.
///
/// `items` and `summaries` are always serialized, possibly empty; the
/// `errors` key is omitted entirely when no order failed validation.
#[derive(Debug, Clone, Serialize)]
pub struct OrdersResponse {
    /// Flattened valid items, order of appearance preserved.
    pub items: Vec<CustomerItem>,
    /// One summary per distinct customer with at least one valid item.
    pub summaries: Vec<CustomerSummary>,
    /// One entry per invalid order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}
