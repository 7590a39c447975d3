//! Order input and output data model.
//!
//! Input types (`Order`, `Item`) decode from the request batch; output
//! types (`CustomerItem`, `CustomerSummary`) are produced by aggregation.
//! All types map to the camelCase wire format.

use serde::{Deserialize, Serialize};

/// A customer order as submitted in the request batch.
///
/// Absent JSON fields decode to their empty values rather than failing
/// deserialization; validation reports them afterwards.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    /// The customer placing the order.
    pub customer_id: String,
    /// The order identifier as supplied by the client.
    pub order_id: String,
    /// Client-supplied timestamp, passed through unparsed.
    pub timestamp: String,
    /// The purchased items, in submission order.
    pub items: Vec<Item>,
}

/// A single line item within an order.
///
/// Items have no identity of their own; they are owned by their order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    /// The item identifier.
    pub item_id: String,
    /// Cost in whole EUR units. Must be strictly positive to validate.
    pub cost_eur: i64,
}

/// A flattened (customer, item, cost) triple.
///
/// One per item across all valid orders, in order of appearance: orders in
/// input order, items in per-order order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerItem {
    pub customer_id: String,
    pub item_id: String,
    pub cost_eur: i64,
}

/// Per-customer aggregate over all valid items in a batch.
///
/// At most one summary exists per distinct `customer_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub customer_id: String,
    pub nbr_of_purchased_items: u64,
    pub total_amount_eur: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_decodes_camel_case_fields() {
        let order: Order = serde_json::from_str(
            r#"{
                "customerId": "C1",
                "orderId": "O1",
                "timestamp": "2024-01-15T10:30:00Z",
                "items": [{"itemId": "I1", "costEur": 10}]
            }"#,
        )
        .unwrap();

        assert_eq!(order.customer_id, "C1");
        assert_eq!(order.order_id, "O1");
        assert_eq!(order.timestamp, "2024-01-15T10:30:00Z");
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].item_id, "I1");
        assert_eq!(order.items[0].cost_eur, 10);
    }

    #[test]
    fn test_absent_fields_decode_to_empty_values() {
        // Missing fields are a validation concern, not a decode failure.
        let order: Order = serde_json::from_str(r#"{"orderId": "O1"}"#).unwrap();

        assert_eq!(order.customer_id, "");
        assert_eq!(order.order_id, "O1");
        assert_eq!(order.timestamp, "");
        assert!(order.items.is_empty());
    }

    #[test]
    fn test_non_integer_cost_fails_to_decode() {
        let result: Result<Order, _> = serde_json::from_str(
            r#"{"customerId": "C1", "orderId": "O1", "timestamp": "1",
                "items": [{"itemId": "I1", "costEur": "ten"}]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_summary_serializes_to_wire_names() {
        let summary = CustomerSummary {
            customer_id: "C1".to_string(),
            nbr_of_purchased_items: 2,
            total_amount_eur: 25,
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["customerId"], "C1");
        assert_eq!(json["nbrOfPurchasedItems"], 2);
        assert_eq!(json["totalAmountEur"], 25);
    }
}
