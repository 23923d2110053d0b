use crate::application::dto::{RefreshRequest, ScreenView};
use async_trait::async_trait;

/// ScreenRefreshPort - Inbound port for the screen refresh use case
///
/// This port defines the interface that external adapters (CLI, API, etc.)
/// use to refresh a console screen. It represents the application's public API.
#[async_trait]
pub trait ScreenRefreshPort: Send + Sync {
    /// Runs one refresh cycle for a screen
    ///
    /// # Arguments
    /// * `request` - Screen, initial filter and sensor query
    ///
    /// # Returns
    /// The derived view. Per-source failures are reported as notices on
    /// the view; a refresh itself never fails.
    async fn refresh(&self, request: RefreshRequest) -> ScreenView;
}
