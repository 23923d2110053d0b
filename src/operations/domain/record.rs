use serde::Serialize;
use serde_json::{Map, Value};

/// An externally-owned entity as returned by the backend.
///
/// Records are opaque JSON objects; the engine reads a handful of named
/// fields through the lenient accessors below and never mutates the
/// originals. Annotations produce a new record via [`Record::with_field`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Wraps a JSON value if it is an object
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_object().map(|map| Self(map.clone()))
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field).filter(|v| !v.is_null())
    }

    /// Stable identifier: `_id`, then `id`, then `sku`
    pub fn id(&self) -> Option<String> {
        ["_id", "id", "sku"]
            .iter()
            .find_map(|field| self.text(field))
    }

    /// Reads a field as text; numbers and booleans are rendered
    pub fn text(&self, field: &str) -> Option<String> {
        match self.get(field)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Text of the first of `fields` that is present
    pub fn first_text(&self, fields: &[&str]) -> Option<String> {
        fields.iter().find_map(|field| self.text(field))
    }

    /// Reads a field as a number; numeric strings are accepted
    pub fn number(&self, field: &str) -> Option<f64> {
        match self.get(field)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|v| v.is_finite())
    }

    /// Reads a field as a boolean; `"true"`/`"false"` strings are accepted
    pub fn flag(&self, field: &str) -> Option<bool> {
        match self.get(field)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => s.trim().parse::<bool>().ok(),
            _ => None,
        }
    }

    /// Reads a field as a list of strings
    pub fn text_list(&self, field: &str) -> Vec<String> {
        match self.get(field) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_str().map(String::from))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Reads a field as a list of nested records
    pub fn records(&self, field: &str) -> Vec<Record> {
        match self.get(field) {
            Some(Value::Array(items)) => items.iter().filter_map(Record::from_value).collect(),
            _ => Vec::new(),
        }
    }

    /// Returns a copy with `field` set to `value`
    pub fn with_field(&self, field: &str, value: impl Into<Value>) -> Self {
        let mut fields = self.0.clone();
        fields.insert(field.to_string(), value.into());
        Self(fields)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Declares where a resource's entity array lives in its payload.
///
/// Endpoints return either a bare array or an object wrapping the array
/// in a named field; both shapes are accepted for every resource.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PayloadShape {
    array_fields: Vec<String>,
}

impl PayloadShape {
    /// Bare array only (an object payload yields no records)
    pub fn bare() -> Self {
        Self::default()
    }

    /// Bare array, or the first of `fields` holding an array
    pub fn wrapped(fields: &[&str]) -> Self {
        Self {
            array_fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Normalizes a payload into records.
    ///
    /// A missing or `null` wrapper field yields an empty list, and
    /// non-object array entries are skipped.
    pub fn records(&self, payload: &Value) -> Vec<Record> {
        let items = match payload {
            Value::Array(items) => Some(items),
            Value::Object(map) => self
                .array_fields
                .iter()
                .find_map(|field| map.get(field).and_then(Value::as_array)),
            _ => None,
        };

        items
            .map(|items| items.iter().filter_map(Record::from_value).collect())
            .unwrap_or_default()
    }
}
