use crate::operations::domain::{EndpointDescriptor, ResourceOutcome};
use crate::ports::outbound::Credential;
use async_trait::async_trait;

/// ResourceFetcher port for calling one named remote resource
///
/// This port abstracts the HTTP backend. Implementations attach the
/// bearer credential when one is given, decode the JSON body and
/// normalize every failure into a `FetchFailure`. They must not cache
/// or retry: a failed source is retried by re-running the whole cycle.
///
/// # Async Support
/// Implementations must be `Send + Sync` so that all sources of a cycle
/// can be fetched concurrently.
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    /// Fetches a resource
    ///
    /// # Arguments
    /// * `descriptor` - Path template, method and parameters
    /// * `credential` - Bearer credential, if the resource requires one
    ///
    /// # Returns
    /// The decoded JSON payload, or the failure kind
    async fn fetch(
        &self,
        descriptor: &EndpointDescriptor,
        credential: Option<&Credential>,
    ) -> ResourceOutcome;
}
