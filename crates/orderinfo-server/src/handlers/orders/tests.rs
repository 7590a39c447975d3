//! Pipeline tests for the order batch handler.

use std::collections::HashMap;

use orderinfo_domain::{CustomerSummary, Item, Order};

use super::handler::OrdersHandler;
use super::types::EMPTY_BATCH_MESSAGE;

fn order(customer: &str, id: &str, timestamp: &str, items: Vec<Item>) -> Order {
    Order {
        customer_id: customer.to_string(),
        order_id: id.to_string(),
        timestamp: timestamp.to_string(),
        items,
    }
}

fn item(id: &str, cost: i64) -> Item {
    Item {
        item_id: id.to_string(),
        cost_eur: cost,
    }
}

fn summary_map(summaries: &[CustomerSummary]) -> HashMap<String, (u64, i64)> {
    summaries
        .iter()
        .map(|s| {
            (
                s.customer_id.clone(),
                (s.nbr_of_purchased_items, s.total_amount_eur),
            )
        })
        .collect()
}

#[test]
fn test_valid_batch_produces_items_summaries_and_no_errors() {
    let handler = OrdersHandler::new();
    let orders = vec![
        order("C1", "O1", "1", vec![item("I1", 10)]),
        order("C2", "O2", "2", vec![item("I2", 15)]),
    ];

    let response = handler.process(&orders);

    assert_eq!(response.items.len(), 2);
    assert_eq!(response.summaries.len(), 2);
    assert!(response.errors.is_empty());

    let by_customer = summary_map(&response.summaries);
    assert_eq!(by_customer["C1"], (1, 10));
    assert_eq!(by_customer["C2"], (1, 15));
}

#[test]
fn test_empty_batch_yields_single_error() {
    let handler = OrdersHandler::new();

    let response = handler.process(&[]);

    assert!(response.items.is_empty());
    assert!(response.summaries.is_empty());
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].index, 0);
    assert_eq!(response.errors[0].order_id, "");
    assert_eq!(response.errors[0].error, EMPTY_BATCH_MESSAGE);
}

#[test]
fn test_invalid_order_does_not_block_the_batch() {
    let handler = OrdersHandler::new();
    let orders = vec![
        order("C1", "O1", "1", vec![item("I1", 5)]),
        order("", "O2", "2", vec![item("I2", 3)]),
    ];

    let response = handler.process(&orders);

    assert_eq!(response.items.len(), 1);
    assert_eq!(response.items[0].customer_id, "C1");
    assert_eq!(response.summaries.len(), 1);
    assert_eq!(response.summaries[0].customer_id, "C1");
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].index, 1);
    assert_eq!(response.errors[0].order_id, "O2");
    assert_eq!(
        response.errors[0].error,
        "Missing required field: customerId"
    );
}

#[test]
fn test_zero_cost_item_rejects_the_order() {
    let handler = OrdersHandler::new();
    let orders = vec![order("C1", "O1", "1", vec![item("I1", 0)])];

    let response = handler.process(&orders);

    assert!(response.items.is_empty());
    assert!(response.summaries.is_empty());
    assert_eq!(response.errors.len(), 1);
    assert_eq!(
        response.errors[0].error,
        "Item 0 has negative cost. 0 must be non-negative"
    );
}

/// An order with several defects reports only the first one.
#[test]
fn test_one_error_per_invalid_order() {
    let handler = OrdersHandler::new();
    let orders = vec![order("C1", "", "", Vec::new())];

    let response = handler.process(&orders);

    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].error, "Missing required field: orderId");
}

/// The error entry carries the orderId as supplied, even when the orderId
/// itself is the field being reported.
#[test]
fn test_error_carries_original_order_id() {
    let handler = OrdersHandler::new();
    let orders = vec![order("C1", "  ", "1", vec![item("I1", 5)])];

    let response = handler.process(&orders);

    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].order_id, "  ");
}

#[test]
fn test_same_customer_across_orders_merges_into_one_summary() {
    let handler = OrdersHandler::new();
    let orders = vec![
        order("C1", "O1", "1", vec![item("I1", 10), item("I2", 20)]),
        order("C1", "O2", "2", vec![item("I3", 5)]),
    ];

    let response = handler.process(&orders);

    assert_eq!(response.items.len(), 3);
    assert_eq!(response.summaries.len(), 1);
    assert_eq!(response.summaries[0].nbr_of_purchased_items, 3);
    assert_eq!(response.summaries[0].total_amount_eur, 35);
}

#[test]
fn test_all_invalid_batch_yields_only_errors() {
    let handler = OrdersHandler::new();
    let orders = vec![
        order("", "O1", "1", vec![item("I1", 5)]),
        order("C2", "O2", "2", Vec::new()),
    ];

    let response = handler.process(&orders);

    assert!(response.items.is_empty());
    assert!(response.summaries.is_empty());
    assert_eq!(response.errors.len(), 2);
    assert_eq!(response.errors[0].index, 0);
    assert_eq!(response.errors[1].index, 1);
}

/// Re-running the pipeline over the same batch yields identical items and
/// identical (customer -> count, total) pairs.
#[test]
fn test_processing_is_idempotent() {
    let handler = OrdersHandler::new();
    let orders = vec![
        order("C1", "O1", "1", vec![item("I1", 10)]),
        order("C2", "O2", "2", vec![item("I2", 15)]),
        order("", "O3", "3", vec![item("I3", 1)]),
    ];

    let first = handler.process(&orders);
    let second = handler.process(&orders);

    assert_eq!(first.items, second.items);
    assert_eq!(summary_map(&first.summaries), summary_map(&second.summaries));
    assert_eq!(first.errors, second.errors);
}

/// Serialization contract: `errors` is omitted when empty, `items` and
/// `summaries` are always present.
#[test]
fn test_errors_key_omitted_when_empty() {
    let handler = OrdersHandler::new();

    let clean = handler.process(&[order("C1", "O1", "1", vec![item("I1", 10)])]);
    let json = serde_json::to_value(&clean).unwrap();
    assert!(json.get("items").is_some());
    assert!(json.get("summaries").is_some());
    assert!(json.get("errors").is_none());

    let failed = handler.process(&[]);
    let json = serde_json::to_value(&failed).unwrap();
    assert_eq!(json["items"], serde_json::json!([]));
    assert_eq!(json["summaries"], serde_json::json!([]));
    assert_eq!(json["errors"].as_array().unwrap().len(), 1);
    assert_eq!(json["errors"][0]["orderId"], "");
}
