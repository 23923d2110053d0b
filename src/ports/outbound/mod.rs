/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the engine uses to reach
/// the backend, the session store and the console.
pub mod credential_provider;
pub mod output_presenter;
pub mod progress_reporter;
pub mod resource_fetcher;
pub mod view_formatter;

pub use credential_provider::{Credential, CredentialProvider};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use resource_fetcher::ResourceFetcher;
pub use view_formatter::ViewFormatter;
