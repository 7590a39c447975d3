//! Order batch handler implementation.

use orderinfo_domain::{validate, Aggregator, Order};
use tracing::debug;

use super::types::{OrdersResponse, ValidationError, EMPTY_BATCH_MESSAGE};

/// Handler for the order batch pipeline.
///
/// The handler itself carries no state; every call to
/// [`OrdersHandler::process`] builds its accumulator from scratch, so
/// concurrent requests need no synchronization.
#[derive(Debug, Clone, Default)]
pub struct OrdersHandler;

impl OrdersHandler {
    /// Creates a new handler.
    pub fn new() -> Self {
        Self
    }

    /// Runs the full pipeline over one batch.
    ///
    /// An empty batch short-circuits into a single index-0 error with an
    /// empty orderId and skips aggregation entirely. Otherwise every order
    /// is validated independently and the batch is partially applied:
    /// valid orders aggregate, invalid ones only contribute an error
    /// entry stamped with their position in the input array.
    pub fn process(&self, orders: &[Order]) -> OrdersResponse {
        if orders.is_empty() {
            metrics::counter!("orderinfo_orders_rejected_total").increment(1);
            return OrdersResponse {
                items: Vec::new(),
                summaries: Vec::new(),
                errors: vec![ValidationError {
                    index: 0,
                    order_id: String::new(),
                    error: EMPTY_BATCH_MESSAGE.to_string(),
                }],
            };
        }

        let mut errors = Vec::new();
        let mut aggregator = Aggregator::new();

        for (index, order) in orders.iter().enumerate() {
            match validate(order) {
                Ok(()) => aggregator.absorb(order),
                Err(defect) => {
                    debug!(
                        index,
                        order_id = %order.order_id,
                        %defect,
                        "order failed validation"
                    );
                    errors.push(ValidationError {
                        index,
                        order_id: order.order_id.clone(),
                        error: defect.to_string(),
                    });
                }
            }
        }

        let (items, summaries) = aggregator.finish();

        metrics::counter!("orderinfo_orders_processed_total")
            .increment((orders.len() - errors.len()) as u64);
        metrics::counter!("orderinfo_orders_rejected_total").increment(errors.len() as u64);
        metrics::counter!("orderinfo_items_aggregated_total").increment(items.len() as u64);

        OrdersResponse {
            items,
            summaries,
            errors,
        }
    }
}
