use super::{LineItem, NormalizedOrder, RawCartSnapshot};

/// Convert a raw cart snapshot into the widget's order contract.
///
/// Pure pass-through: item order and quantities are preserved verbatim and
/// product ids are coerced to their canonical string form. No deduplication,
/// no sorting.
pub fn normalize(cart: &RawCartSnapshot) -> NormalizedOrder {
    let line_items = cart
        .items
        .iter()
        .map(|item| LineItem {
            product_id: item.product_id.as_canonical_string(),
            quantity: item.quantity,
        })
        .collect();

    NormalizedOrder {
        line_items,
        currency: cart.currency.clone(),
        total_price: cart.total_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{ProductId, RawLineItem};

    #[test]
    fn numeric_id_coerced_to_string() {
        let cart = RawCartSnapshot {
            items: vec![RawLineItem {
                product_id: ProductId::Numeric(42),
                quantity: 2,
            }],
            currency: "GBP".to_string(),
            total_price: 1999.0,
        };

        let order = normalize(&cart);

        assert_eq!(order.line_items.len(), 1);
        assert_eq!(order.line_items[0].product_id, "42");
        assert_eq!(order.line_items[0].quantity, 2);
        assert_eq!(order.currency, "GBP");
        assert_eq!(order.total_price, 1999.0);
    }

    #[test]
    fn string_id_passes_through() {
        let cart = RawCartSnapshot {
            items: vec![RawLineItem {
                product_id: ProductId::Text("sku-9".to_string()),
                quantity: 1,
            }],
            currency: "USD".to_string(),
            total_price: 500.0,
        };

        let order = normalize(&cart);

        assert_eq!(order.line_items[0].product_id, "sku-9");
    }

    #[test]
    fn item_order_and_quantities_preserved() {
        let cart = RawCartSnapshot {
            items: vec![
                RawLineItem {
                    product_id: ProductId::Numeric(3),
                    quantity: 7,
                },
                RawLineItem {
                    product_id: ProductId::Numeric(1),
                    quantity: 1,
                },
                RawLineItem {
                    product_id: ProductId::Text("z".to_string()),
                    quantity: 4,
                },
            ],
            currency: "EUR".to_string(),
            total_price: 4200.0,
        };

        let order = normalize(&cart);

        let ids: Vec<&str> = order
            .line_items
            .iter()
            .map(|item| item.product_id.as_str())
            .collect();
        assert_eq!(ids, vec!["3", "1", "z"]);
        let quantities: Vec<u32> = order.line_items.iter().map(|item| item.quantity).collect();
        assert_eq!(quantities, vec![7, 1, 4]);
    }

    #[test]
    fn empty_cart_normalizes_to_empty_order() {
        let order = normalize(&RawCartSnapshot::empty_placeholder());
        assert!(order.is_empty());
    }

    #[test]
    fn duplicate_items_are_not_merged() {
        let cart = RawCartSnapshot {
            items: vec![
                RawLineItem {
                    product_id: ProductId::Numeric(5),
                    quantity: 1,
                },
                RawLineItem {
                    product_id: ProductId::Numeric(5),
                    quantity: 2,
                },
            ],
            currency: "GBP".to_string(),
            total_price: 900.0,
        };

        let order = normalize(&cart);

        assert_eq!(order.line_items.len(), 2);
    }
}
