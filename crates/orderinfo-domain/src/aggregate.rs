//! Per-customer aggregation over valid orders.

use std::collections::HashMap;

use crate::order::{CustomerItem, CustomerSummary, Order};

/// Accumulates valid orders into a flattened item list and per-customer
/// summaries.
///
/// One accumulator lives per request and is consumed by
/// [`Aggregator::finish`]. Item order follows order of appearance; summary
/// output order follows map iteration order and is unspecified.
#[derive(Debug, Default)]
pub struct Aggregator {
    items: Vec<CustomerItem>,
    summaries: HashMap<String, CustomerSummary>,
}

impl Aggregator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one valid order into the running totals.
    ///
    /// Each item appends a [`CustomerItem`] and bumps the owning
    /// customer's summary counters, creating the summary the first time
    /// the customer is seen.
    pub fn absorb(&mut self, order: &Order) {
        for item in &order.items {
            self.items.push(CustomerItem {
                customer_id: order.customer_id.clone(),
                item_id: item.item_id.clone(),
                cost_eur: item.cost_eur,
            });

            let summary = self
                .summaries
                .entry(order.customer_id.clone())
                .or_insert_with(|| CustomerSummary {
                    customer_id: order.customer_id.clone(),
                    nbr_of_purchased_items: 0,
                    total_amount_eur: 0,
                });
            summary.nbr_of_purchased_items += 1;
            summary.total_amount_eur += item.cost_eur;
        }
    }

    /// Consumes the accumulator, returning the flattened items and the
    /// summaries.
    pub fn finish(self) -> (Vec<CustomerItem>, Vec<CustomerSummary>) {
        let summaries = self.summaries.into_values().collect();
        (self.items, summaries)
    }
}

/// Aggregates a set of valid orders in one pass.
pub fn aggregate<'a, I>(orders: I) -> (Vec<CustomerItem>, Vec<CustomerSummary>)
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut aggregator = Aggregator::new();
    for order in orders {
        aggregator.absorb(order);
    }
    aggregator.finish()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::order::Item;

    fn order(customer: &str, id: &str, items: Vec<Item>) -> Order {
        Order {
            customer_id: customer.to_string(),
            order_id: id.to_string(),
            timestamp: "1".to_string(),
            items,
        }
    }

    fn item(id: &str, cost: i64) -> Item {
        Item {
            item_id: id.to_string(),
            cost_eur: cost,
        }
    }

    fn summary_map(summaries: Vec<CustomerSummary>) -> HashMap<String, (u64, i64)> {
        summaries
            .into_iter()
            .map(|s| {
                (
                    s.customer_id,
                    (s.nbr_of_purchased_items, s.total_amount_eur),
                )
            })
            .collect()
    }

    #[test]
    fn test_each_item_produces_one_customer_item() {
        let orders = vec![
            order("C1", "O1", vec![item("I1", 10), item("I2", 20)]),
            order("C2", "O2", vec![item("I3", 15)]),
        ];

        let (items, summaries) = aggregate(&orders);

        assert_eq!(items.len(), 3);
        assert_eq!(summaries.len(), 2);
    }

    /// Items appear in input order: orders first, items within each order
    /// second.
    #[test]
    fn test_item_order_of_appearance_is_preserved() {
        let orders = vec![
            order("C1", "O1", vec![item("I1", 10), item("I2", 20)]),
            order("C1", "O2", vec![item("I3", 30)]),
        ];

        let (items, _) = aggregate(&orders);

        let ids: Vec<&str> = items.iter().map(|i| i.item_id.as_str()).collect();
        assert_eq!(ids, vec!["I1", "I2", "I3"]);
        assert!(items.iter().all(|i| i.customer_id == "C1"));
    }

    #[test]
    fn test_summaries_accumulate_across_orders() {
        let orders = vec![
            order("C1", "O1", vec![item("I1", 10)]),
            order("C2", "O2", vec![item("I2", 15)]),
            order("C1", "O3", vec![item("I3", 5), item("I4", 7)]),
        ];

        let (_, summaries) = aggregate(&orders);
        let by_customer = summary_map(summaries);

        assert_eq!(by_customer.len(), 2);
        assert_eq!(by_customer["C1"], (3, 22));
        assert_eq!(by_customer["C2"], (1, 15));
    }

    /// At most one summary per customerId, however many orders contribute.
    #[test]
    fn test_one_summary_per_customer() {
        let orders: Vec<Order> = (0..5)
            .map(|i| order("C1", &format!("O{i}"), vec![item("I", 1)]))
            .collect();

        let (_, summaries) = aggregate(&orders);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].nbr_of_purchased_items, 5);
        assert_eq!(summaries[0].total_amount_eur, 5);
    }

    /// Re-running over the same orders yields identical items and the same
    /// (customer -> count, total) pairs, regardless of map iteration order.
    #[test]
    fn test_aggregation_is_idempotent() {
        let orders = vec![
            order("C1", "O1", vec![item("I1", 10), item("I2", 20)]),
            order("C2", "O2", vec![item("I3", 15)]),
        ];

        let (items_a, summaries_a) = aggregate(&orders);
        let (items_b, summaries_b) = aggregate(&orders);

        assert_eq!(items_a, items_b);
        assert_eq!(summary_map(summaries_a), summary_map(summaries_b));
    }

    #[test]
    fn test_empty_input_produces_empty_output() {
        let (items, summaries) = aggregate(&[]);
        assert!(items.is_empty());
        assert!(summaries.is_empty());
    }
}
