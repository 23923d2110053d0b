use crate::operations::domain::{RawSnapshot, ResourceRequest, SourceOutcome};
use crate::ports::outbound::{Credential, ResourceFetcher};
use futures::future::join_all;

/// Aggregator service for fetching a screen's sources in one cycle
///
/// All requests are issued concurrently and the snapshot is built only
/// after every one of them has settled. A failing source never cancels
/// or short-circuits its siblings.
pub struct Aggregator;

impl Aggregator {
    /// Fetches every request and merges the outcomes into a snapshot
    ///
    /// # Arguments
    /// * `fetcher` - Gateway used for each request
    /// * `requests` - Resources of the screen, in display order
    /// * `credential` - Bearer credential for resources that require one
    ///
    /// # Returns
    /// A snapshot with exactly one outcome per request, in request order.
    /// Zero requests yield an empty snapshot.
    pub async fn aggregate<F>(
        fetcher: &F,
        requests: &[ResourceRequest],
        credential: Option<&Credential>,
    ) -> RawSnapshot
    where
        F: ResourceFetcher + ?Sized,
    {
        let fetches = requests.iter().map(|request| {
            let credential = credential.filter(|_| request.requires_auth());
            async move {
                let outcome = fetcher.fetch(request.descriptor(), credential).await;
                SourceOutcome::new(request.id(), request.shape().clone(), outcome)
            }
        });

        RawSnapshot::new(join_all(fetches).await)
    }
}
