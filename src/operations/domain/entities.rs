//! Typed read-only views over backend records.
//!
//! Each view reads only the fields the engine needs and tolerates the
//! spelling variants the backend has used over time (`temp` vs
//! `temperature`, `valor` vs `value`, ...). Missing fields become
//! defaults, except a product's stock level, which stays unknown;
//! nothing here fails.

use crate::operations::domain::Record;

/// Inventory product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Option<String>,
    pub sku: Option<String>,
    pub name: String,
    pub category: Option<String>,
    pub price: f64,
    /// `None` when the backend sends no numeric stock level
    pub stock: Option<f64>,
}

impl Product {
    pub fn from_record(record: &Record) -> Self {
        let sku = record.text("sku");
        Self {
            id: record.text("_id"),
            name: record
                .text("name")
                .or_else(|| sku.clone())
                .unwrap_or_default(),
            sku,
            category: record.text("category"),
            price: record.number("price").unwrap_or(0.0),
            stock: record.number("stock"),
        }
    }
}

/// One line of an order
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub sku: Option<String>,
    pub product_id: Option<String>,
    pub quantity: f64,
}

impl OrderLine {
    /// A missing, non-numeric or non-positive quantity counts as 1
    pub fn from_record(record: &Record) -> Self {
        Self {
            sku: record.text("sku"),
            product_id: record.text("productId"),
            quantity: record
                .number("quantity")
                .filter(|q| *q > 0.0)
                .unwrap_or(1.0),
        }
    }
}

/// Customer order
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Option<String>,
    pub creator_id: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub lines: Vec<OrderLine>,
}

impl Order {
    /// Backend spellings of the order status, in lookup order
    pub const STATUS_FIELDS: [&'static str; 2] = ["Status", "status"];
    /// Backend spellings of the creation date, in lookup order
    pub const CREATED_AT_FIELDS: [&'static str; 2] = ["createDate", "createdAt"];

    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.id(),
            creator_id: record.first_text(&["IDUser", "userId"]),
            status: record.first_text(&Self::STATUS_FIELDS),
            created_at: record.first_text(&Self::CREATED_AT_FIELDS),
            lines: record
                .records("Products")
                .into_iter()
                .chain(record.records("products"))
                .map(|line| OrderLine::from_record(&line))
                .collect(),
        }
    }
}

/// Staff user account
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub roles: Vec<String>,
    pub active: bool,
}

impl Employee {
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.text("_id"),
            first_name: record.text("firstName").filter(|n| !n.trim().is_empty()),
            last_name: record.text("lastName").filter(|n| !n.trim().is_empty()),
            roles: record.text_list("roles"),
            active: record.flag("status").unwrap_or(false),
        }
    }

    pub fn primary_role(&self) -> Option<&str> {
        self.roles.first().map(String::as_str)
    }
}

/// What a sensor reading measures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorKind {
    Temperature,
    Humidity,
}

impl SensorKind {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "temperature" | "temperatura" | "temp" => Some(SensorKind::Temperature),
            "humidity" | "humedad" => Some(SensorKind::Humidity),
            _ => None,
        }
    }
}

/// A single sensor measurement in a zone
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    pub zone: String,
    pub kind: SensorKind,
    pub value: Option<f64>,
    pub timestamp: Option<String>,
}

impl SensorReading {
    /// Expands one record into its readings.
    ///
    /// Accepts combined records (`temperature`/`temp` and `humidity`
    /// fields) and typed records (`type` plus `valor`/`value`). A reading
    /// whose value is not numeric (e.g. `"--"` from an offline sensor) is
    /// kept with `value: None` so its zone is still known.
    pub fn from_record(record: &Record) -> Vec<SensorReading> {
        let zone = record
            .text("zone")
            .or_else(|| record.text("zoneName"))
            .unwrap_or_else(|| "unassigned".to_string());
        let timestamp = record
            .text("timestamp")
            .or_else(|| record.text("lastUpdated"));

        let reading = |kind, value| SensorReading {
            zone: zone.clone(),
            kind,
            value,
            timestamp: timestamp.clone(),
        };

        if let Some(kind) = record.text("type").as_deref().and_then(SensorKind::parse) {
            let value = record.number("valor").or_else(|| record.number("value"));
            return vec![reading(kind, value)];
        }

        let mut readings = Vec::new();
        if record.get("temperature").is_some() || record.get("temp").is_some() {
            let value = record
                .number("temperature")
                .or_else(|| record.number("temp"));
            readings.push(reading(SensorKind::Temperature, value));
        }
        if record.get("humidity").is_some() {
            readings.push(reading(SensorKind::Humidity, record.number("humidity")));
        }
        readings
    }
}

/// Direction of a turnstile/door event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDirection {
    Entry,
    Exit,
    Denied,
}

impl AccessDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessDirection::Entry => "entry",
            AccessDirection::Exit => "exit",
            AccessDirection::Denied => "denied",
        }
    }
}

/// A member access event
#[derive(Debug, Clone, PartialEq)]
pub struct AccessRecord {
    pub member_id: Option<String>,
    pub member_name: Option<String>,
    pub direction: Option<AccessDirection>,
    pub timestamp: Option<String>,
}

impl AccessRecord {
    pub fn from_record(record: &Record) -> Self {
        let direction = record
            .first_text(&["type", "direction"])
            .and_then(|raw| match raw.trim().to_lowercase().as_str() {
                "entry" | "in" | "entrada" => Some(AccessDirection::Entry),
                "exit" | "out" | "salida" => Some(AccessDirection::Exit),
                "denied" | "denegado" => Some(AccessDirection::Denied),
                _ => None,
            });

        Self {
            member_id: record
                .text("clientId")
                .or_else(|| record.text("memberId"))
                .or_else(|| record.text("IDClient")),
            member_name: record.text("memberName").filter(|n| !n.trim().is_empty()),
            direction,
            timestamp: record.text("timestamp"),
        }
    }
}

/// Gym member (client)
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: Option<String>,
    pub name: Option<String>,
    pub membership: Option<String>,
}

impl Client {
    pub fn from_record(record: &Record) -> Self {
        let full_name = match (record.text("firstName"), record.text("lastName")) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            (Some(first), None) => Some(first),
            (None, Some(last)) => Some(last),
            (None, None) => None,
        };

        Self {
            id: record.text("_id").or_else(|| record.text("id")),
            name: record.text("name").or(full_name),
            membership: record.text("membershipType"),
        }
    }
}
