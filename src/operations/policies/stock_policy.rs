use crate::operations::domain::StockStatus;

/// Default low-stock threshold (units)
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 10;

/// Classifies inventory levels against a configured low-stock threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockPolicy {
    low_stock_threshold: u32,
}

impl StockPolicy {
    pub fn new(low_stock_threshold: u32) -> Self {
        Self {
            low_stock_threshold,
        }
    }

    pub fn low_stock_threshold(&self) -> u32 {
        self.low_stock_threshold
    }

    /// `stock <= 0` → out-of-stock, `0 < stock < threshold` → low-stock,
    /// otherwise in-stock. Negative stock (oversold) counts as out-of-stock.
    pub fn classify(&self, stock: f64) -> StockStatus {
        if stock <= 0.0 {
            StockStatus::OutOfStock
        } else if stock < f64::from(self.low_stock_threshold) {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Like [`StockPolicy::classify`], with a missing level → unknown
    pub fn classify_level(&self, stock: Option<f64>) -> StockStatus {
        stock.map_or(StockStatus::Unknown, |stock| self.classify(stock))
    }
}

impl Default for StockPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_LOW_STOCK_THRESHOLD)
    }
}
