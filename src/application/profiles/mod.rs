/// Declarative screen profiles
///
/// A profile is the whole per-screen configuration of the refresh
/// pipeline: which resources to fetch, how to derive the view model,
/// which collection to build and which fields each filter reads.
mod catalog;
mod screen_kind;

pub use catalog::{resources, EngineSettings, ScreenCatalog, ScreenProfile};
pub use screen_kind::ScreenKind;
