use crate::application::profiles::ScreenKind;
use crate::operations::domain::FilterCriteria;

/// RefreshRequest - Internal request DTO for the screen refresh use case
///
/// `zone` and `date` narrow the sensor query of the monitoring screen and
/// are ignored by screens that do not fetch sensor readings.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshRequest {
    /// Screen to refresh
    pub screen: ScreenKind,
    /// Initial filter applied to the screen's collection
    pub criteria: FilterCriteria,
    /// Zone passed to the sensor readings endpoint
    pub zone: Option<String>,
    /// Day passed to the sensor readings endpoint
    pub date: Option<String>,
}

impl RefreshRequest {
    pub fn new(screen: ScreenKind) -> Self {
        Self {
            screen,
            criteria: FilterCriteria::default(),
            zone: None,
            date: None,
        }
    }

    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn with_zone(mut self, zone: Option<String>) -> Self {
        self.zone = zone;
        self
    }

    pub fn with_date(mut self, date: Option<String>) -> Self {
        self.date = date;
        self
    }
}
