/// Mock implementations for testing
mod mock_credential_provider;
mod mock_progress_reporter;
mod mock_resource_fetcher;

pub use mock_credential_provider::MockCredentialProvider;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_resource_fetcher::{FetchCall, MockResourceFetcher};
