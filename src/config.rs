//! Configuration file support for gym-console.
//!
//! Provides YAML-based configuration through `gym-console.config.yml` files,
//! including data structures, file loading, validation, and conversion into
//! the engine settings used by the screen catalog.

use anyhow::Context;
use chrono::FixedOffset;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::application::profiles::{resources, EngineSettings};
use crate::operations::policies::{
    OrderPricing, StockPolicy, ThresholdBand, ThresholdTable, UNKNOWN_LABEL,
};
use crate::shared::error::ConsoleError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "gym-console.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub low_stock_threshold: Option<u32>,
    pub tax_multiplier: Option<f64>,
    pub temperature_thresholds: Option<Vec<BandConfig>>,
    pub humidity_thresholds: Option<Vec<BandConfig>>,
    /// Resource id → path template override.
    pub endpoints: Option<BTreeMap<String, String>>,
    /// Offset of the gym's local day, e.g. `-06:00`. Defaults to UTC.
    pub utc_offset: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// One classification band. `max` may be omitted on the last band only.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BandConfig {
    pub max: Option<f64>,
    pub label: String,
}

impl ConfigFile {
    /// Engine settings with every configured value applied over the defaults.
    ///
    /// # Errors
    /// Returns an error if a threshold list does not form a valid table
    pub fn engine_settings(&self) -> Result<EngineSettings> {
        let mut settings = EngineSettings::default();

        if let Some(threshold) = self.low_stock_threshold {
            settings.stock = StockPolicy::new(threshold);
        }
        if let Some(multiplier) = self.tax_multiplier {
            settings.pricing = OrderPricing::new(multiplier);
        }
        if let Some(bands) = &self.temperature_thresholds {
            settings.temperature = threshold_table("temperature", bands)?;
        }
        if let Some(bands) = &self.humidity_thresholds {
            settings.humidity = threshold_table("humidity", bands)?;
        }
        if let Some(endpoints) = &self.endpoints {
            settings.endpoints = endpoints.clone();
        }
        if let Some(offset) = &self.utc_offset {
            settings.utc_offset = parse_utc_offset(offset)?;
        }

        Ok(settings)
    }
}

fn threshold_table(name: &str, bands: &[BandConfig]) -> Result<ThresholdTable> {
    let bands = bands
        .iter()
        .map(|band| match band.max {
            Some(max) => ThresholdBand::new(max, band.label.as_str()),
            None => ThresholdBand::unbounded(band.label.as_str()),
        })
        .collect();
    ThresholdTable::new(name, bands, UNKNOWN_LABEL)
}

fn parse_utc_offset(raw: &str) -> Result<FixedOffset> {
    raw.trim().parse::<FixedOffset>().map_err(|e| {
        ConsoleError::InvalidConfig {
            field: "utc_offset".to_string(),
            reason: format!("'{}' is not a UTC offset ({})", raw, e),
            hint: "Use a signed offset such as -06:00 or +01:00.".to_string(),
        }
        .into()
    })
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_regular_file(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is a regular file.",
            path.display()
        )
    })?;

    let content =
        std::fs::read_to_string(path).map_err(|e| ConsoleError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    let invalid = |field: String, reason: &str, hint: &str| ConsoleError::InvalidConfig {
        field,
        reason: reason.to_string(),
        hint: hint.to_string(),
    };

    if config.timeout_seconds == Some(0) {
        return Err(invalid(
            "timeout_seconds".to_string(),
            "must be greater than zero",
            "Use a timeout of at least 1 second (default: 10).",
        )
        .into());
    }

    if let Some(multiplier) = config.tax_multiplier {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(invalid(
                "tax_multiplier".to_string(),
                "must be a positive number",
                "Use 1.16 for a 16% tax, or 1.0 for no tax.",
            )
            .into());
        }
    }

    for (name, bands) in [
        ("temperature_thresholds", &config.temperature_thresholds),
        ("humidity_thresholds", &config.humidity_thresholds),
    ] {
        let Some(bands) = bands else {
            continue;
        };
        for (i, band) in bands.iter().enumerate() {
            if band.label.trim().is_empty() {
                return Err(invalid(
                    format!("{}[{}].label", name, i),
                    "must not be empty",
                    "Each band needs a label such as \"ok\", \"warning\" or \"danger\".",
                )
                .into());
            }
        }
        threshold_table(name, bands)?;
    }

    if let Some(offset) = &config.utc_offset {
        parse_utc_offset(offset)?;
    }

    if let Some(endpoints) = &config.endpoints {
        for (id, path) in endpoints {
            if !resources::ALL.contains(&id.as_str()) {
                return Err(invalid(
                    format!("endpoints.{}", id),
                    "unknown resource",
                    &format!("Known resources: {}", resources::ALL.join(", ")),
                )
                .into());
            }
            if !path.starts_with('/') {
                return Err(invalid(
                    format!("endpoints.{}", id),
                    "path must start with '/'",
                    "Use a path relative to the base URL, e.g. /api/product/products",
                )
                .into());
            }
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
