use crate::operations::domain::{Alert, Measurement, StatusLabel, ZoneStatus};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Names of the derived fields written by the built-in rules
pub mod fields {
    pub const AVG_TEMPERATURE: &str = "avgTemperature";
    pub const AVG_HUMIDITY: &str = "avgHumidity";
    pub const TEMPERATURE_STATUS: &str = "temperatureStatus";
    pub const HUMIDITY_STATUS: &str = "humidityStatus";
    pub const ENVIRONMENT_STATUS: &str = "environmentStatus";
    pub const CURRENT_OCCUPANCY: &str = "currentOccupancy";
    pub const ACCESSES_TODAY: &str = "accessesToday";
    pub const MEMBER_COUNT: &str = "memberCount";
    pub const PRODUCT_COUNT: &str = "productCount";
    pub const LOW_STOCK_COUNT: &str = "lowStockCount";
    pub const OUT_OF_STOCK_COUNT: &str = "outOfStockCount";
    pub const PRODUCTS_TO_REVIEW: &str = "productsToReview";
    pub const ORDER_COUNT: &str = "orderCount";
    pub const PENDING_ORDERS: &str = "pendingCount";
    pub const ORDERS: &str = "orders";
    pub const ORDERS_TOTAL: &str = "ordersTotal";
    pub const ZONES: &str = "zones";
    pub const ACTIVE_ALERTS: &str = "activeAlerts";
    pub const ALERTS: &str = "alerts";
    pub const EMPLOYEE_COUNT: &str = "employeeCount";
    pub const ACTIVE_EMPLOYEES: &str = "activeEmployees";
    pub const INACTIVE_EMPLOYEES: &str = "inactiveEmployees";
}

/// One priced order line
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSummary {
    pub label: String,
    pub quantity: f64,
    pub unit_price: f64,
}

/// Derived totals of one order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: Option<String>,
    pub creator_name: String,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub subtotal: f64,
    pub total: f64,
    pub lines: Vec<LineSummary>,
}

/// Derived environmental state of one zone
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneSummary {
    pub zone: String,
    pub temperature: Measurement,
    pub humidity: Measurement,
    pub status: ZoneStatus,
    pub last_updated: Option<String>,
}

/// A single derived field value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum DerivedValue {
    Number(f64),
    NoData,
    Count(usize),
    Money(f64),
    Label(StatusLabel),
    Names(Vec<String>),
    Alerts(Vec<Alert>),
    Orders(Vec<OrderSummary>),
    Zones(Vec<ZoneSummary>),
}

impl From<Measurement> for DerivedValue {
    fn from(measurement: Measurement) -> Self {
        match measurement {
            Measurement::Value(v) => DerivedValue::Number(v),
            Measurement::NoData => DerivedValue::NoData,
        }
    }
}

impl DerivedValue {
    /// Reads the value back as a measurement, if it is numeric
    pub fn as_measurement(&self) -> Option<Measurement> {
        match self {
            DerivedValue::Number(v) | DerivedValue::Money(v) => Some(Measurement::Value(*v)),
            DerivedValue::Count(n) => Some(Measurement::Value(*n as f64)),
            DerivedValue::NoData => Some(Measurement::NoData),
            _ => None,
        }
    }
}

/// The screen-ready mapping of derived fields.
///
/// Built by the derivation engine from one snapshot. `degraded` lists the
/// fields computed from missing inputs, which therefore hold defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ViewModel {
    values: BTreeMap<String, DerivedValue>,
    degraded: BTreeSet<String>,
}

impl ViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, value: DerivedValue) {
        self.values.insert(field.into(), value);
    }

    pub fn mark_degraded(&mut self, field: impl Into<String>) {
        self.degraded.insert(field.into());
    }

    pub fn get(&self, field: &str) -> Option<&DerivedValue> {
        self.values.get(field)
    }

    pub fn measurement(&self, field: &str) -> Option<Measurement> {
        self.get(field).and_then(DerivedValue::as_measurement)
    }

    pub fn label(&self, field: &str) -> Option<&StatusLabel> {
        match self.get(field)? {
            DerivedValue::Label(label) => Some(label),
            _ => None,
        }
    }

    pub fn count(&self, field: &str) -> Option<usize> {
        match self.get(field)? {
            DerivedValue::Count(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_degraded(&self, field: &str) -> bool {
        self.degraded.contains(field)
    }

    pub fn degraded(&self) -> impl Iterator<Item = &str> {
        self.degraded.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DerivedValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_conversion() {
        assert_eq!(
            DerivedValue::from(Measurement::Value(2.5)),
            DerivedValue::Number(2.5)
        );
        assert_eq!(DerivedValue::from(Measurement::NoData), DerivedValue::NoData);
    }

    #[test]
    fn test_typed_accessors() {
        let mut view = ViewModel::new();
        view.insert(fields::AVG_TEMPERATURE, DerivedValue::Number(23.0));
        view.insert(fields::TEMPERATURE_STATUS, DerivedValue::Label("ok".into()));
        view.insert(fields::LOW_STOCK_COUNT, DerivedValue::Count(3));

        assert_eq!(
            view.measurement(fields::AVG_TEMPERATURE),
            Some(Measurement::Value(23.0))
        );
        assert_eq!(view.label(fields::TEMPERATURE_STATUS).unwrap().as_str(), "ok");
        assert_eq!(view.count(fields::LOW_STOCK_COUNT), Some(3));
        assert_eq!(view.label(fields::LOW_STOCK_COUNT), None);
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn test_degraded_tracking() {
        let mut view = ViewModel::new();
        view.insert(fields::AVG_HUMIDITY, DerivedValue::NoData);
        view.mark_degraded(fields::AVG_HUMIDITY);
        assert!(view.is_degraded(fields::AVG_HUMIDITY));
        assert_eq!(view.degraded().collect::<Vec<_>>(), vec![fields::AVG_HUMIDITY]);
    }

    #[test]
    fn test_serializes_with_kind_tags() {
        let mut view = ViewModel::new();
        view.insert(fields::LOW_STOCK_COUNT, DerivedValue::Count(2));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["values"]["lowStockCount"]["kind"], "count");
        assert_eq!(json["values"]["lowStockCount"]["value"], 2);
    }
}
