//! Structural validation of incoming orders.
//!
//! Checks run in a fixed sequence and stop at the first failure, so an
//! order with several defects reports only the earliest one. Absence of a
//! defect is the success signal; no panics or early exits are used for
//! control flow.

use thiserror::Error;

use crate::order::Order;

/// The first structural defect found in an order.
///
/// The `Display` output is the wire-format error message, carried verbatim
/// into the response's error list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderDefect {
    /// customerId is empty or whitespace-only.
    #[error("Missing required field: customerId")]
    MissingCustomerId,

    /// orderId is empty or whitespace-only.
    #[error("Missing required field: orderId")]
    MissingOrderId,

    /// timestamp is empty or whitespace-only.
    #[error("Missing required field: timestamp")]
    MissingTimestamp,

    /// The items collection is empty.
    #[error("Missing required field: items must have at least one item")]
    NoItems,

    /// An item has an empty or whitespace-only itemId.
    #[error("Item {index} missing required field: itemId")]
    ItemMissingId { index: usize },

    /// An item's cost is not strictly positive. The message wording is
    /// historical; a cost of exactly 0 is rejected as well.
    #[error("Item {index} has negative cost. {cost} must be non-negative")]
    NonPositiveCost { index: usize, cost: i64 },
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validates one order against the structural rules.
///
/// Returns the first defect encountered, in check order: customerId,
/// orderId, timestamp, items presence, then each item (itemId before
/// cost). Remaining items go unchecked once one fails.
pub fn validate(order: &Order) -> Result<(), OrderDefect> {
    if is_blank(&order.customer_id) {
        return Err(OrderDefect::MissingCustomerId);
    }

    if is_blank(&order.order_id) {
        return Err(OrderDefect::MissingOrderId);
    }

    if is_blank(&order.timestamp) {
        return Err(OrderDefect::MissingTimestamp);
    }

    if order.items.is_empty() {
        return Err(OrderDefect::NoItems);
    }

    for (index, item) in order.items.iter().enumerate() {
        if is_blank(&item.item_id) {
            return Err(OrderDefect::ItemMissingId { index });
        }

        if item.cost_eur <= 0 {
            return Err(OrderDefect::NonPositiveCost {
                index,
                cost: item.cost_eur,
            });
        }
    }

    Ok(())
}
