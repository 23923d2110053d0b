use crate::operations::domain::{PayloadShape, Record};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

/// Why a single resource could not be fetched.
///
/// Failures are values, not control flow: they are recorded per source
/// in the snapshot and never abort sibling fetches or derivation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FetchFailure {
    /// Network unreachable, timeout, or the body could not be read
    #[error("transport error: {message}")]
    Transport { message: String },

    /// Non-2xx HTTP status, with the server's message when it sent one
    #[error("rejected with HTTP {status}{}", .message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// The body was not valid JSON
    #[error("malformed response body: {message}")]
    Decode { message: String },

    /// The request could not be built (e.g. unbound path placeholder)
    #[error("invalid request: {message}")]
    InvalidRequest { message: String },
}

/// Outcome of one resource fetch
pub type ResourceOutcome = std::result::Result<Value, FetchFailure>;

/// One source's settled outcome within a snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct SourceOutcome {
    id: String,
    shape: PayloadShape,
    outcome: ResourceOutcome,
}

impl SourceOutcome {
    pub fn new(id: impl Into<String>, shape: PayloadShape, outcome: ResourceOutcome) -> Self {
        Self {
            id: id.into(),
            shape,
            outcome,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn outcome(&self) -> &ResourceOutcome {
        &self.outcome
    }
}

/// One refresh cycle's complete set of per-resource outcomes.
///
/// A snapshot is built once, after every source has settled, and is
/// never mutated afterwards; a newer cycle produces a new snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSnapshot {
    cycle_id: Uuid,
    captured_at: DateTime<Utc>,
    outcomes: Vec<SourceOutcome>,
}

impl RawSnapshot {
    pub fn new(outcomes: Vec<SourceOutcome>) -> Self {
        Self::captured_at(outcomes, Utc::now())
    }

    /// Builds a snapshot with an explicit capture time
    pub fn captured_at(outcomes: Vec<SourceOutcome>, captured_at: DateTime<Utc>) -> Self {
        Self {
            cycle_id: Uuid::new_v4(),
            captured_at,
            outcomes,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn cycle_id(&self) -> Uuid {
        self.cycle_id
    }

    pub fn capture_time(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn outcomes(&self) -> &[SourceOutcome] {
        &self.outcomes
    }

    pub fn get(&self, id: &str) -> Option<&ResourceOutcome> {
        self.outcomes
            .iter()
            .find(|o| o.id == id)
            .map(|o| &o.outcome)
    }

    /// Successful payload for `id`, if any
    pub fn payload(&self, id: &str) -> Option<&Value> {
        self.get(id).and_then(|outcome| outcome.as_ref().ok())
    }

    /// Normalized records for `id`; `None` when the source failed or is absent
    pub fn records(&self, id: &str) -> Option<Vec<Record>> {
        let source = self.outcomes.iter().find(|o| o.id == id)?;
        let payload = source.outcome.as_ref().ok()?;
        Some(source.shape.records(payload))
    }

    /// Failed sources in request order
    pub fn failures(&self) -> impl Iterator<Item = (&str, &FetchFailure)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.outcome.as_ref().err().map(|e| (o.id.as_str(), e)))
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}
