use crate::operations::domain::{Measurement, StatusLabel};
use crate::shared::error::ConsoleError;
use crate::shared::Result;

/// Label assigned to the "no data" sentinel by the default tables
pub const UNKNOWN_LABEL: &str = "info";

/// One band of a threshold table: values up to and including `max`
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdBand {
    max: f64,
    label: StatusLabel,
}

impl ThresholdBand {
    pub fn new(max: f64, label: impl Into<StatusLabel>) -> Self {
        Self {
            max,
            label: label.into(),
        }
    }

    /// A band with no upper bound
    pub fn unbounded(label: impl Into<StatusLabel>) -> Self {
        Self::new(f64::INFINITY, label)
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn label(&self) -> &StatusLabel {
        &self.label
    }
}

/// Ordered (upper bound, label) bands evaluated low-to-high.
///
/// Classification is total: a value gets the label of the first band whose
/// bound it does not exceed (`value <= max`), a value above every bound
/// gets the last band's label, and `NoData` gets the unknown label.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdTable {
    name: String,
    bands: Vec<ThresholdBand>,
    unknown: StatusLabel,
}

impl ThresholdTable {
    /// # Errors
    /// Returns an error if the table is empty, a bound is NaN, or bounds
    /// are not strictly ascending.
    pub fn new(
        name: impl Into<String>,
        bands: Vec<ThresholdBand>,
        unknown: impl Into<StatusLabel>,
    ) -> Result<Self> {
        let name = name.into();
        let invalid = |reason: String| ConsoleError::InvalidThresholds {
            name: name.clone(),
            reason,
        };

        if bands.is_empty() {
            return Err(invalid("at least one band is required".to_string()).into());
        }

        if let Some(band) = bands.iter().find(|b| b.max.is_nan()) {
            return Err(invalid(format!("band '{}' has no numeric bound", band.label)).into());
        }

        if let Some(pair) = bands.windows(2).find(|pair| pair[0].max >= pair[1].max) {
            return Err(invalid(format!(
                "bound {} of '{}' is not below bound {} of '{}'",
                pair[0].max, pair[0].label, pair[1].max, pair[1].label
            ))
            .into());
        }

        Ok(Self {
            name,
            bands,
            unknown: unknown.into(),
        })
    }

    /// 26 → ok, 28 → warning, above → danger (°C)
    pub fn default_temperature() -> Self {
        Self {
            name: "temperature".to_string(),
            bands: vec![
                ThresholdBand::new(26.0, "ok"),
                ThresholdBand::new(28.0, "warning"),
                ThresholdBand::unbounded("danger"),
            ],
            unknown: UNKNOWN_LABEL.into(),
        }
    }

    /// 60 → ok, 70 → warning, above → danger (% relative humidity)
    pub fn default_humidity() -> Self {
        Self {
            name: "humidity".to_string(),
            bands: vec![
                ThresholdBand::new(60.0, "ok"),
                ThresholdBand::new(70.0, "warning"),
                ThresholdBand::unbounded("danger"),
            ],
            unknown: UNKNOWN_LABEL.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bands(&self) -> &[ThresholdBand] {
        &self.bands
    }

    pub fn unknown_label(&self) -> &StatusLabel {
        &self.unknown
    }

    /// Index of the band `measurement` falls into; `None` for `NoData`
    pub fn band_index(&self, measurement: Measurement) -> Option<usize> {
        let value = measurement.value()?;
        let last = self.bands.len() - 1;
        Some(
            self.bands
                .iter()
                .position(|band| value <= band.max)
                .unwrap_or(last),
        )
    }

    pub fn classify(&self, measurement: Measurement) -> StatusLabel {
        match self.band_index(measurement) {
            Some(index) => self.bands[index].label.clone(),
            None => self.unknown.clone(),
        }
    }

    /// Whether `measurement` is above the first (nominal) band
    pub fn exceeds_nominal(&self, measurement: Measurement) -> bool {
        self.band_index(measurement).is_some_and(|index| index > 0)
    }
}
