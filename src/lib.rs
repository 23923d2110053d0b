//! gym-console - operational state engine for a gym-management console
//!
//! This library fetches a screen's resources from the gym backend REST API,
//! derives the screen's view model from the collected snapshot, and filters
//! the screen's collection for display, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Operations Layer** (`operations`): Pure aggregation, derivation and filtering logic
//! - **Application Layer** (`application`): Use cases, screen profiles and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use gym_console::prelude::*;
//! use std::time::Duration;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let fetcher = HttpResourceFetcher::new("http://localhost:3000", Duration::from_secs(10))?;
//! let credentials = EnvCredentialProvider::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = RefreshScreenUseCase::new(
//!     fetcher,
//!     credentials,
//!     progress_reporter,
//!     ScreenCatalog::default(),
//! );
//!
//! // Execute
//! let request = RefreshRequest::new(ScreenKind::Inventory)
//!     .with_criteria(FilterCriteria::new().with_status("low-stock"));
//! let mut view = use_case.execute(request).await;
//!
//! // Narrow the display subset without fetching again
//! view.apply_filter(FilterCriteria::new().with_text("protein"));
//!
//! // Format output
//! let output = TextFormatter::new().format(&view)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod operations;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{
        QuietProgressReporter, StderrProgressReporter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::network::HttpResourceFetcher;
    pub use crate::adapters::outbound::session::{EnvCredentialProvider, StaticCredentialProvider};
    pub use crate::application::dto::{OutputFormat, RefreshRequest, ScreenView, SourceNotice};
    pub use crate::application::profiles::{EngineSettings, ScreenCatalog, ScreenKind};
    pub use crate::application::use_cases::RefreshScreenUseCase;
    pub use crate::application::LatestViews;
    pub use crate::operations::domain::{
        DerivedValue, FetchFailure, FilterCriteria, FilterFields, Measurement, RawSnapshot,
        Record, ViewModel,
    };
    pub use crate::operations::services::{
        Aggregator, CollectionBuilder, DerivationEngine, DerivationRule, FilterEngine,
    };
    pub use crate::ports::inbound::ScreenRefreshPort;
    pub use crate::ports::outbound::{
        Credential, CredentialProvider, OutputPresenter, ProgressReporter, ResourceFetcher,
        ViewFormatter,
    };
    pub use crate::shared::Result;
}
