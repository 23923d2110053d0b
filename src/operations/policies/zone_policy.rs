use crate::operations::domain::{Measurement, SensorKind, SensorReading, ZoneStatus, ZoneSummary};
use crate::operations::policies::ThresholdTable;
use std::collections::BTreeMap;

/// Derives per-zone environmental status from sensor readings.
///
/// A zone with no numeric reading at all is `sensor-offline`. Otherwise a
/// temperature above the nominal band wins over humidity above the
/// nominal band; a zone within both nominal bands is `optimal`.
#[derive(Debug, Clone, PartialEq)]
pub struct ZonePolicy {
    temperature: ThresholdTable,
    humidity: ThresholdTable,
}

impl ZonePolicy {
    pub fn new(temperature: ThresholdTable, humidity: ThresholdTable) -> Self {
        Self {
            temperature,
            humidity,
        }
    }

    pub fn temperature(&self) -> &ThresholdTable {
        &self.temperature
    }

    pub fn humidity(&self) -> &ThresholdTable {
        &self.humidity
    }

    pub fn status(&self, temperature: Measurement, humidity: Measurement) -> ZoneStatus {
        if temperature.is_no_data() && humidity.is_no_data() {
            ZoneStatus::SensorOffline
        } else if self.temperature.exceeds_nominal(temperature) {
            ZoneStatus::HighTemperature
        } else if self.humidity.exceeds_nominal(humidity) {
            ZoneStatus::HighHumidity
        } else {
            ZoneStatus::Optimal
        }
    }

    /// Groups readings by zone (sorted by zone name) and summarizes each
    pub fn summarize(&self, readings: &[SensorReading]) -> Vec<ZoneSummary> {
        let mut zones: BTreeMap<&str, Vec<&SensorReading>> = BTreeMap::new();
        for reading in readings {
            zones.entry(reading.zone.as_str()).or_default().push(reading);
        }

        zones
            .into_iter()
            .map(|(zone, readings)| {
                let series = |kind: SensorKind| -> Vec<f64> {
                    readings
                        .iter()
                        .filter(|r| r.kind == kind)
                        .filter_map(|r| r.value)
                        .collect()
                };
                let temperature = Measurement::mean(&series(SensorKind::Temperature));
                let humidity = Measurement::mean(&series(SensorKind::Humidity));
                let last_updated = readings
                    .iter()
                    .filter_map(|r| r.timestamp.clone())
                    .max();

                ZoneSummary {
                    zone: zone.to_string(),
                    temperature,
                    humidity,
                    status: self.status(temperature, humidity),
                    last_updated,
                }
            })
            .collect()
    }
}

impl Default for ZonePolicy {
    fn default() -> Self {
        Self::new(
            ThresholdTable::default_temperature(),
            ThresholdTable::default_humidity(),
        )
    }
}
