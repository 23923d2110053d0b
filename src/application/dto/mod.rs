/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the operations layer isolated.
mod output_format;
mod refresh_request;
mod screen_view;

pub use output_format::OutputFormat;
pub use refresh_request::RefreshRequest;
pub use screen_view::{ScreenView, SourceNotice};
