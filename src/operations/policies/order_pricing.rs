use crate::operations::domain::{LineSummary, Order, Product};

/// Default tax multiplier (16% VAT)
pub const DEFAULT_TAX_MULTIPLIER: f64 = 1.16;

/// Rounds to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Priced order: subtotal is unrounded, total is rounded once
#[derive(Debug, Clone, PartialEq)]
pub struct OrderTotal {
    pub subtotal: f64,
    pub total: f64,
    pub lines: Vec<LineSummary>,
}

/// Prices orders against a product catalog with a fixed tax multiplier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderPricing {
    tax_multiplier: f64,
}

impl OrderPricing {
    pub fn new(tax_multiplier: f64) -> Self {
        Self { tax_multiplier }
    }

    pub fn tax_multiplier(&self) -> f64 {
        self.tax_multiplier
    }

    /// Resolves each line's unit price by SKU, or by `productId` against the
    /// product `_id`. An unknown product prices at 0 and is labelled with
    /// whatever reference the line carried.
    pub fn price(&self, order: &Order, catalog: &[Product]) -> OrderTotal {
        let lines: Vec<LineSummary> = order
            .lines
            .iter()
            .map(|line| {
                let product = catalog.iter().find(|p| {
                    (line.sku.is_some() && p.sku == line.sku)
                        || (line.product_id.is_some() && p.id == line.product_id)
                });
                LineSummary {
                    label: product
                        .map(|p| p.name.clone())
                        .or_else(|| line.sku.clone())
                        .or_else(|| line.product_id.clone())
                        .unwrap_or_default(),
                    quantity: line.quantity,
                    unit_price: product.map(|p| p.price).unwrap_or(0.0),
                }
            })
            .collect();

        let subtotal: f64 = lines.iter().map(|l| l.unit_price * l.quantity).sum();

        OrderTotal {
            subtotal,
            total: round2(subtotal * self.tax_multiplier),
            lines,
        }
    }
}

impl Default for OrderPricing {
    fn default() -> Self {
        Self::new(DEFAULT_TAX_MULTIPLIER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::domain::OrderLine;

    fn product(id: &str, sku: &str, price: f64) -> Product {
        Product {
            id: Some(id.to_string()),
            sku: Some(sku.to_string()),
            name: format!("Product {}", sku),
            category: None,
            price,
            stock: Some(10.0),
        }
    }

    fn order(lines: Vec<OrderLine>) -> Order {
        Order {
            id: Some("o1".to_string()),
            creator_id: None,
            status: None,
            created_at: None,
            lines,
        }
    }

    fn line(sku: &str, quantity: f64) -> OrderLine {
        OrderLine {
            sku: Some(sku.to_string()),
            product_id: None,
            quantity,
        }
    }

    #[test]
    fn test_subtotal_and_total_with_tax() {
        let catalog = vec![product("p1", "X", 100.0), product("p2", "Y", 50.0)];
        let priced = OrderPricing::new(1.16).price(&order(vec![line("X", 2.0), line("Y", 1.0)]), &catalog);
        assert_eq!(round2(priced.subtotal), 250.0);
        assert_eq!(priced.total, 290.0);
    }

    #[test]
    fn test_missing_product_prices_at_zero() {
        let catalog = vec![product("p1", "X", 100.0)];
        let priced = OrderPricing::default().price(&order(vec![line("X", 1.0), line("GONE", 3.0)]), &catalog);
        assert_eq!(priced.subtotal, 100.0);
        assert_eq!(priced.lines[1].unit_price, 0.0);
        assert_eq!(priced.lines[1].label, "GONE");
    }

    #[test]
    fn test_lookup_by_product_id() {
        let catalog = vec![product("p9", "Z", 12.5)];
        let by_id = OrderLine {
            sku: None,
            product_id: Some("p9".to_string()),
            quantity: 2.0,
        };
        let priced = OrderPricing::new(1.0).price(&order(vec![by_id]), &catalog);
        assert_eq!(priced.total, 25.0);
        assert_eq!(priced.lines[0].label, "Product Z");
    }

    #[test]
    fn test_rounding_happens_once_on_total() {
        // Rounding each line first would give 3 × 1.00 = 3.00
        let catalog = vec![
            product("p1", "A", 1.004),
            product("p2", "B", 1.004),
            product("p3", "C", 1.004),
        ];
        let priced = OrderPricing::new(1.0)
            .price(&order(vec![line("A", 1.0), line("B", 1.0), line("C", 1.0)]), &catalog);
        assert_eq!(priced.total, 3.01);
    }

    #[test]
    fn test_empty_order_totals_zero() {
        let priced = OrderPricing::default().price(&order(vec![]), &[]);
        assert_eq!(priced.subtotal, 0.0);
        assert_eq!(priced.total, 0.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(290.00000000000006), 290.0);
        assert_eq!(round2(12.344), 12.34);
        assert_eq!(round2(12.346), 12.35);
    }
}
