use crate::application::dto::ScreenView;
use crate::shared::Result;

/// ViewFormatter port for rendering a screen view
///
/// This port abstracts the presentation format (JSON, text tables, etc.).
pub trait ViewFormatter {
    /// Formats a refreshed screen view
    ///
    /// # Arguments
    /// * `view` - View model, display subset and per-source notices
    ///
    /// # Returns
    /// Formatted content as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, view: &ScreenView) -> Result<String>;
}
