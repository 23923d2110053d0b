mod order_pricing;
mod stock_policy;
mod threshold_policy;
mod zone_policy;

pub use order_pricing::{round2, OrderPricing, OrderTotal, DEFAULT_TAX_MULTIPLIER};
pub use stock_policy::{StockPolicy, DEFAULT_LOW_STOCK_THRESHOLD};
pub use threshold_policy::{ThresholdBand, ThresholdTable, UNKNOWN_LABEL};
pub use zone_policy::ZonePolicy;
