/// Console adapters for progress output and stdout presentation
mod progress_reporter;
mod stdout_presenter;

pub use progress_reporter::{QuietProgressReporter, StderrProgressReporter};
pub use stdout_presenter::StdoutPresenter;
