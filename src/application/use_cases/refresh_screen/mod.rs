use crate::application::dto::{RefreshRequest, ScreenView, SourceNotice};
use crate::application::profiles::ScreenCatalog;
use crate::operations::services::{Aggregator, CollectionBuilder, DerivationEngine};
use crate::ports::inbound::ScreenRefreshPort;
use crate::ports::outbound::{CredentialProvider, ProgressReporter, ResourceFetcher};
use async_trait::async_trait;

/// RefreshScreenUseCase - Core use case for one screen refresh cycle
///
/// This use case runs the whole pipeline for a screen:
/// credential → aggregation → derivation → collection → filter.
/// Infrastructure is injected through generic type parameters.
///
/// # Type Parameters
/// * `F` - ResourceFetcher implementation
/// * `C` - CredentialProvider implementation
/// * `PR` - ProgressReporter implementation
pub struct RefreshScreenUseCase<F, C, PR> {
    fetcher: F,
    credential_provider: C,
    progress_reporter: PR,
    catalog: ScreenCatalog,
}

impl<F, C, PR> RefreshScreenUseCase<F, C, PR>
where
    F: ResourceFetcher,
    C: CredentialProvider,
    PR: ProgressReporter,
{
    /// Creates a new RefreshScreenUseCase with injected dependencies
    pub fn new(
        fetcher: F,
        credential_provider: C,
        progress_reporter: PR,
        catalog: ScreenCatalog,
    ) -> Self {
        Self {
            fetcher,
            credential_provider,
            progress_reporter,
            catalog,
        }
    }

    /// Executes one refresh cycle
    ///
    /// # Arguments
    /// * `request` - Screen to refresh, with its initial filter
    ///
    /// # Returns
    /// ScreenView with the derived view model, the filtered subset and
    /// one notice per failed source
    pub async fn execute(&self, request: RefreshRequest) -> ScreenView {
        let profile = self.catalog.profile(&request);
        let total = profile.requests.len();

        // Step 1: Read the session token for this cycle only
        let credential = self.credential_provider.current_token();
        if credential.is_none() && profile.requests.iter().any(|r| r.requires_auth()) {
            self.progress_reporter.report_error(
                "⚠️  Warning: No session token available. Authenticated sources may be rejected.",
            );
        }

        // Step 2: Fetch every source and wait for all of them to settle
        self.progress_reporter.report(&format!(
            "🔄 Refreshing {} screen ({} source(s))...",
            request.screen, total
        ));
        self.progress_reporter.begin_cycle(total);

        let snapshot =
            Aggregator::aggregate(&self.fetcher, &profile.requests, credential.as_ref()).await;

        self.progress_reporter
            .report_progress(snapshot.len(), total, Some("sources settled"));

        // Step 3: Surface failed sources without aborting the cycle
        let notices: Vec<SourceNotice> = snapshot
            .failures()
            .map(|(source, failure)| SourceNotice::new(source, failure.clone()))
            .collect();
        for notice in &notices {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {}", notice.message()));
        }

        // Step 4: Derive the view model and the filterable collection
        let view_model = DerivationEngine::derive(&snapshot, &profile.rules);
        let collection = CollectionBuilder::build(&snapshot, &profile.collection);

        let view = ScreenView::new(
            request.screen,
            snapshot.cycle_id(),
            snapshot.capture_time(),
            view_model,
            collection,
            profile.filter_fields,
            request.criteria,
            notices,
        );

        self.progress_reporter.report_completion(&format!(
            "✅ {} refreshed: {} of {} record(s) shown, {} of {} source(s) failed",
            view.screen(),
            view.subset().len(),
            view.collection().len(),
            view.notices().len(),
            total
        ));

        view
    }
}

#[async_trait]
impl<F, C, PR> ScreenRefreshPort for RefreshScreenUseCase<F, C, PR>
where
    F: ResourceFetcher,
    C: CredentialProvider,
    PR: ProgressReporter,
{
    async fn refresh(&self, request: RefreshRequest) -> ScreenView {
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests;
