use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts where the formatted view content is presented.
pub trait OutputPresenter {
    /// Presents the formatted view content to the output destination
    ///
    /// # Arguments
    /// * `content` - The formatted view content to present
    ///
    /// # Returns
    /// Success or error if presentation fails
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}
