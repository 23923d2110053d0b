use crate::application::profiles::ScreenKind;
use crate::operations::domain::{FetchFailure, FilterCriteria, FilterFields, Record, ViewModel};
use crate::operations::services::FilterEngine;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Inline notice for one source that failed during the cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceNotice {
    pub source: String,
    pub failure: FetchFailure,
}

impl SourceNotice {
    pub fn new(source: impl Into<String>, failure: FetchFailure) -> Self {
        Self {
            source: source.into(),
            failure,
        }
    }

    pub fn message(&self) -> String {
        format!("{} unavailable: {}", self.source, self.failure)
    }
}

/// ScreenView - Everything a screen renders after one refresh cycle
///
/// The collection is fixed for the lifetime of the view. Only the
/// display subset changes, and only through [`ScreenView::apply_filter`],
/// which re-filters without fetching again.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenView {
    screen: ScreenKind,
    cycle_id: Uuid,
    captured_at: DateTime<Utc>,
    view_model: ViewModel,
    criteria: FilterCriteria,
    collection_size: usize,
    subset: Vec<Record>,
    notices: Vec<SourceNotice>,
    #[serde(skip)]
    collection: Vec<Record>,
    #[serde(skip)]
    filter_fields: FilterFields,
}

impl ScreenView {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        screen: ScreenKind,
        cycle_id: Uuid,
        captured_at: DateTime<Utc>,
        view_model: ViewModel,
        collection: Vec<Record>,
        filter_fields: FilterFields,
        criteria: FilterCriteria,
        notices: Vec<SourceNotice>,
    ) -> Self {
        let subset = FilterEngine::filter(&collection, &criteria, &filter_fields);
        Self {
            screen,
            cycle_id,
            captured_at,
            view_model,
            criteria,
            collection_size: collection.len(),
            subset,
            notices,
            collection,
            filter_fields,
        }
    }

    /// Replaces the criteria and recomputes the subset from the collection
    pub fn apply_filter(&mut self, criteria: FilterCriteria) {
        self.subset = FilterEngine::filter(&self.collection, &criteria, &self.filter_fields);
        self.criteria = criteria;
    }

    pub fn has_failures(&self) -> bool {
        !self.notices.is_empty()
    }

    pub fn screen(&self) -> ScreenKind {
        self.screen
    }

    pub fn cycle_id(&self) -> Uuid {
        self.cycle_id
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    pub fn collection(&self) -> &[Record] {
        &self.collection
    }

    pub fn subset(&self) -> &[Record] {
        &self.subset
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn notices(&self) -> &[SourceNotice] {
        &self.notices
    }
}
