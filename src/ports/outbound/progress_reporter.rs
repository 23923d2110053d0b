/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress reporting (e.g., to stderr)
/// to provide user feedback while sources are being fetched.
/// Implementations must be `Send + Sync` so that refresh cycles can
/// run on spawned tasks.
pub trait ProgressReporter: Send + Sync {
    /// Reports a progress message
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Marks the start of a refresh cycle over `total` sources
    ///
    /// Each call is matched by exactly one `report_completion`. Cycles may
    /// overlap when a watch tick fires before the previous one settles.
    fn begin_cycle(&self, total: usize) {
        self.report_progress(0, total, Some("fetching sources"));
    }

    /// Reports how many of a cycle's sources have settled
    ///
    /// # Arguments
    /// * `current` - Settled sources
    /// * `total` - Sources in the cycle
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    ///
    /// # Arguments
    /// * `message` - The error/warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    ///
    /// # Arguments
    /// * `message` - Completion message
    fn report_completion(&self, message: &str);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for Box<T> {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn begin_cycle(&self, total: usize) {
        (**self).begin_cycle(total)
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        (**self).report_progress(current, total, message)
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message)
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message)
    }
}
