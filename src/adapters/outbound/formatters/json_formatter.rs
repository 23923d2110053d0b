use crate::application::dto::ScreenView;
use crate::ports::outbound::ViewFormatter;
use crate::shared::Result;

/// JsonFormatter adapter for machine-readable screen output
///
/// Serializes the whole screen view: derived fields, degraded field names,
/// the active criteria, the display subset and any source notices.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewFormatter for JsonFormatter {
    fn format(&self, view: &ScreenView) -> Result<String> {
        serde_json::to_string_pretty(view).map_err(Into::into)
    }
}
