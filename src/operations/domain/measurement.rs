use serde::Serialize;

/// A numeric aggregate, or the "no data" sentinel when there was nothing
/// to aggregate.
///
/// `NoData` replaces both NaN and missing values so that classification
/// can route it to an unknown label instead of comparing it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Measurement {
    Value(f64),
    NoData,
}

impl Measurement {
    /// Arithmetic mean of a series; `NoData` for an empty series.
    ///
    /// Non-finite entries are ignored so a NaN never reaches a label.
    pub fn mean(values: &[f64]) -> Self {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return Measurement::NoData;
        }
        Measurement::Value(finite.iter().sum::<f64>() / finite.len() as f64)
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Measurement::Value(v) => Some(*v),
            Measurement::NoData => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Measurement::NoData)
    }
}

impl From<Option<f64>> for Measurement {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() => Measurement::Value(v),
            _ => Measurement::NoData,
        }
    }
}
