mod aggregator;
mod collection_builder;
mod derivation;
mod directory;
mod filter_engine;

pub use aggregator::Aggregator;
pub use collection_builder::{Annotation, CollectionBuilder, CollectionSpec};
pub use derivation::{DerivationEngine, DerivationRule, NumericSeries};
pub use directory::{creator_name, member_name, UNKNOWN_NAME};
pub use filter_engine::FilterEngine;
