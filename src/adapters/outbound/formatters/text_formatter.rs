use crate::application::dto::ScreenView;
use crate::operations::domain::{
    AlertLevel, DerivedValue, Measurement, Record, ViewModel, ZoneStatus,
};
use crate::ports::outbound::ViewFormatter;
use crate::shared::Result;
use owo_colors::{OwoColorize, Style};
use serde_json::Value;

/// Marker appended to fields computed from a missing source
const DEGRADED_MARKER: &str = "(stale: source unavailable)";

/// TextFormatter adapter for human-readable terminal output
///
/// Renders the derived fields as an aligned summary, followed by source
/// notices and the filtered records. Colors are only emitted when enabled.
pub struct TextFormatter {
    colored: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self { colored: false }
    }

    pub fn with_colors(colored: bool) -> Self {
        Self { colored }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.colored {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn level_style(level: AlertLevel) -> Style {
        match level {
            AlertLevel::Info => Style::new().cyan(),
            AlertLevel::Warning => Style::new().yellow(),
            AlertLevel::Danger => Style::new().red().bold(),
        }
    }

    fn zone_style(status: ZoneStatus) -> Style {
        match status {
            ZoneStatus::Optimal => Style::new().green(),
            ZoneStatus::HighTemperature | ZoneStatus::HighHumidity => Style::new().yellow(),
            ZoneStatus::SensorOffline => Style::new().dimmed(),
        }
    }

    fn measurement(value: Measurement, unit: &str) -> String {
        match value {
            Measurement::Value(v) => format!("{:.1}{}", v, unit),
            Measurement::NoData => "--".to_string(),
        }
    }

    /// Single-line rendering of a scalar field; list fields return None
    fn scalar(value: &DerivedValue) -> Option<String> {
        match value {
            DerivedValue::Number(v) => Some(format!("{:.1}", v)),
            DerivedValue::NoData => Some("no data".to_string()),
            DerivedValue::Count(n) => Some(n.to_string()),
            DerivedValue::Money(v) => Some(format!("${:.2}", v)),
            DerivedValue::Label(label) => Some(label.to_string()),
            DerivedValue::Names(names) if names.is_empty() => Some("none".to_string()),
            DerivedValue::Names(names) => Some(names.join(", ")),
            DerivedValue::Alerts(_) | DerivedValue::Orders(_) | DerivedValue::Zones(_) => None,
        }
    }

    fn write_summary(&self, out: &mut String, view_model: &ViewModel) {
        let width = view_model
            .iter()
            .filter(|(_, value)| Self::scalar(value).is_some())
            .map(|(field, _)| field.len())
            .max()
            .unwrap_or(0);

        for (field, value) in view_model.iter() {
            let Some(rendered) = Self::scalar(value) else {
                continue;
            };
            out.push_str(&format!("  {:<width$}  {}", field, rendered, width = width));
            if view_model.is_degraded(field) {
                out.push(' ');
                out.push_str(&self.paint(DEGRADED_MARKER, Style::new().dimmed()));
            }
            out.push('\n');
        }

        for (field, value) in view_model.iter() {
            let degraded = view_model.is_degraded(field);
            match value {
                DerivedValue::Alerts(alerts) => {
                    self.write_heading(out, field, alerts.len(), degraded);
                    for alert in alerts {
                        let tag = format!("[{}]", alert.level.as_str());
                        out.push_str(&format!(
                            "  {} {}",
                            self.paint(&tag, Self::level_style(alert.level)),
                            alert.text
                        ));
                        if let Some(detail) = &alert.detail {
                            out.push_str(&format!(" ({})", detail));
                        }
                        out.push('\n');
                    }
                }
                DerivedValue::Orders(orders) => {
                    self.write_heading(out, field, orders.len(), degraded);
                    for order in orders {
                        out.push_str(&format!(
                            "  {}  {}  {}  {} items  ${:.2}\n",
                            order.id.as_deref().unwrap_or("-"),
                            order.creator_name,
                            order.status.as_deref().unwrap_or("-"),
                            order.lines.len(),
                            order.total
                        ));
                    }
                }
                DerivedValue::Zones(zones) => {
                    self.write_heading(out, field, zones.len(), degraded);
                    for zone in zones {
                        out.push_str(&format!(
                            "  {}  {}  {}  {}\n",
                            zone.zone,
                            Self::measurement(zone.temperature, "°C"),
                            Self::measurement(zone.humidity, "%"),
                            self.paint(zone.status.as_str(), Self::zone_style(zone.status))
                        ));
                    }
                }
                _ => {}
            }
        }
    }

    fn write_heading(&self, out: &mut String, field: &str, count: usize, degraded: bool) {
        out.push_str(&format!(
            "\n{} ({})",
            self.paint(field, Style::new().bold()),
            count
        ));
        if degraded {
            out.push(' ');
            out.push_str(&self.paint(DEGRADED_MARKER, Style::new().dimmed()));
        }
        out.push('\n');
    }

    fn cell(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Null => "-".to_string(),
            Value::Array(items) => format!("[{} item(s)]", items.len()),
            Value::Object(_) => "{...}".to_string(),
            other => other.to_string(),
        }
    }

    fn row(record: &Record) -> String {
        record
            .fields()
            .iter()
            .map(|(key, value)| format!("{}={}", key, Self::cell(value)))
            .collect::<Vec<_>>()
            .join("  ")
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewFormatter for TextFormatter {
    fn format(&self, view: &ScreenView) -> Result<String> {
        let mut out = String::new();

        let title = format!("Gym Console - {}", view.screen());
        out.push_str(&self.paint(&title, Style::new().bold()));
        out.push('\n');
        out.push_str(&format!(
            "Cycle {} captured at {}\n\n",
            view.cycle_id(),
            view.captured_at().format("%Y-%m-%d %H:%M:%S UTC")
        ));

        if view.view_model().is_empty() {
            out.push_str("  (no derived fields)\n");
        } else {
            self.write_summary(&mut out, view.view_model());
        }

        if view.has_failures() {
            out.push_str(&format!("\n{}\n", self.paint("Notices", Style::new().bold())));
            for notice in view.notices() {
                out.push_str(&format!(
                    "  {} {}\n",
                    self.paint("⚠️ ", Style::new().yellow()),
                    notice.message()
                ));
            }
        }

        if !view.collection().is_empty() {
            let heading = format!(
                "Records ({} of {})",
                view.subset().len(),
                view.collection().len()
            );
            out.push_str(&format!("\n{}\n", self.paint(&heading, Style::new().bold())));
            if view.subset().is_empty() {
                out.push_str("  No records match the current filters.\n");
            }
            for record in view.subset() {
                out.push_str(&format!("  - {}\n", Self::row(record)));
            }
        }

        Ok(out)
    }
}
