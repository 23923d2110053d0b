use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};
use serde::Serialize;

/// User-supplied predicates for a screen's display subset.
///
/// Unset or blank fields are wildcards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub text_query: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub date_range: DateRange,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, query: impl Into<String>) -> Self {
        self.text_query = Some(query.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_date_range(mut self, start: Option<String>, end: Option<String>) -> Self {
        self.date_range = DateRange { start, end };
        self
    }

    /// Trimmed text query, `None` when blank
    pub fn active_text(&self) -> Option<&str> {
        active(&self.text_query)
    }

    pub fn active_category(&self) -> Option<&str> {
        active(&self.category)
    }

    pub fn active_status(&self) -> Option<&str> {
        active(&self.status)
    }

    /// True when no predicate restricts the collection
    pub fn is_wildcard(&self) -> bool {
        self.active_text().is_none()
            && self.active_category().is_none()
            && self.active_status().is_none()
            && !self.date_range.is_active()
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Inclusive calendar-date range with optional, unparsed boundaries.
///
/// Boundaries stay as the user typed them; an unparseable boundary is
/// treated as absent rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl DateRange {
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start.as_deref().and_then(parse_date)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end.as_deref().and_then(parse_date)
    }

    pub fn is_active(&self) -> bool {
        self.start_date().is_some() || self.end_date().is_some()
    }

    /// Whether `date` falls within `[start, end]`
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date().map_or(true, |start| date >= start)
            && self.end_date().map_or(true, |end| date <= end)
    }
}

/// Parses `YYYY-MM-DD`, RFC 3339, or a naive `YYYY-MM-DDTHH:MM:SS` timestamp
/// into a calendar date (UTC for zoned timestamps).
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    parse_date_at(raw, Utc.fix())
}

/// Like [`parse_date`], but zoned timestamps land on their calendar day at
/// `offset`. Plain dates and naive timestamps are taken as written.
pub fn parse_date_at(raw: &str, offset: FixedOffset) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&offset).date_naive());
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|timestamp| timestamp.date())
}

/// Designated record fields each criterion is evaluated against
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterFields {
    pub text: Vec<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub date: Option<String>,
    /// Offset whose calendar day zoned dates fall on; `None` is UTC
    pub utc_offset: Option<FixedOffset>,
}

impl FilterFields {
    pub fn text(fields: &[&str]) -> Self {
        Self {
            text: fields.iter().map(|f| f.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, field: &str) -> Self {
        self.category = Some(field.to_string());
        self
    }

    pub fn with_status(mut self, field: &str) -> Self {
        self.status = Some(field.to_string());
        self
    }

    pub fn with_date(mut self, field: &str) -> Self {
        self.date = Some(field.to_string());
        self
    }

    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = Some(offset);
        self
    }

    /// Calendar date of a record's date field
    pub fn record_date(&self, raw: &str) -> Option<NaiveDate> {
        parse_date_at(raw, self.utc_offset.unwrap_or_else(|| Utc.fix()))
    }
}
