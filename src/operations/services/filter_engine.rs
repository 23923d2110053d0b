use crate::operations::domain::{FilterCriteria, FilterFields, Record};

/// FilterEngine service for computing display subsets
///
/// Every active criterion must hold for a record to be kept. A criterion
/// whose field is not designated for the screen is ignored. The source
/// collection is only read; the subset is a fresh, order-preserving copy.
pub struct FilterEngine;

impl FilterEngine {
    /// Recomputes the display subset from scratch
    ///
    /// # Arguments
    /// * `collection` - The screen's derived collection
    /// * `criteria` - User-supplied predicates; blank values are wildcards
    /// * `fields` - Which record fields each criterion is evaluated against
    pub fn filter(collection: &[Record], criteria: &FilterCriteria, fields: &FilterFields) -> Vec<Record> {
        if criteria.is_wildcard() {
            return collection.to_vec();
        }

        collection
            .iter()
            .filter(|record| Self::matches(record, criteria, fields))
            .cloned()
            .collect()
    }

    /// Whether a single record satisfies every active criterion
    pub fn matches(record: &Record, criteria: &FilterCriteria, fields: &FilterFields) -> bool {
        Self::matches_text(record, criteria, fields)
            && Self::matches_exact(record, criteria.active_category(), fields.category.as_deref())
            && Self::matches_exact(record, criteria.active_status(), fields.status.as_deref())
            && Self::matches_date(record, criteria, fields)
    }

    fn matches_text(record: &Record, criteria: &FilterCriteria, fields: &FilterFields) -> bool {
        let Some(query) = criteria.active_text() else {
            return true;
        };
        if fields.text.is_empty() {
            return true;
        }

        let query = query.to_lowercase();
        fields.text.iter().any(|field| {
            record
                .text(field)
                .is_some_and(|value| value.to_lowercase().contains(&query))
        })
    }

    fn matches_exact(record: &Record, expected: Option<&str>, field: Option<&str>) -> bool {
        match (expected, field) {
            (Some(expected), Some(field)) => record.text(field).as_deref() == Some(expected),
            _ => true,
        }
    }

    fn matches_date(record: &Record, criteria: &FilterCriteria, fields: &FilterFields) -> bool {
        let Some(field) = fields.date.as_deref() else {
            return true;
        };
        if !criteria.date_range.is_active() {
            return true;
        }

        record
            .text(field)
            .as_deref()
            .and_then(|raw| fields.record_date(raw))
            .is_some_and(|date| criteria.date_range.contains(date))
    }
}
