/// Operations core - the fetch/derive/filter engine
///
/// - `domain`: snapshots, records, view models and filter criteria
/// - `policies`: classification and pricing rules
/// - `services`: aggregation, derivation, collection building and filtering
pub mod domain;
pub mod policies;
pub mod services;
