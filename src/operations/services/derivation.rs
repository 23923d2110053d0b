use crate::operations::domain::{
    fields, parse_date_at, AccessDirection, AccessRecord, Alert, AlertLevel, DerivedValue, Employee,
    Measurement, Order, OrderSummary, Product, RawSnapshot, Record, SensorKind, SensorReading,
    StatusLabel, StockStatus, ViewModel,
};
use crate::operations::policies::{round2, OrderPricing, StockPolicy, ThresholdTable, ZonePolicy};
use crate::operations::services::creator_name;
use chrono::FixedOffset;

/// Numeric series extracted from one resource
#[derive(Debug, Clone, PartialEq)]
pub enum NumericSeries {
    /// Sensor readings of one kind
    Reading(SensorKind),
    /// A plain numeric field of each record
    Field(String),
}

/// One declarative derivation step.
///
/// Rules run in order, so a rule may read fields written by earlier rules
/// (e.g. classifying a mean computed just before it). A rule whose source
/// failed or is absent writes its documented default and marks the field
/// as degraded.
#[derive(Debug, Clone, PartialEq)]
pub enum DerivationRule {
    /// Arithmetic mean of a series; empty series → `NoData`
    Mean {
        field: String,
        source: String,
        series: NumericSeries,
    },
    /// Threshold label of a numeric field written by an earlier rule
    Classify {
        field: String,
        input: String,
        table: ThresholdTable,
    },
    /// Label of whichever input sits in the highest band.
    ///
    /// Ties keep the earlier input; all inputs `NoData` → the first
    /// table's unknown label.
    ClassifyWorst {
        field: String,
        inputs: Vec<(String, ThresholdTable)>,
    },
    /// Number of records in a resource
    Count { field: String, source: String },
    /// Number of records whose status equals `value` (case-insensitive).
    ///
    /// The status is the first of `status_fields` present on the record.
    CountWhere {
        field: String,
        source: String,
        status_fields: Vec<String>,
        value: String,
    },
    /// Low-stock and out-of-stock counts plus the names needing review
    StockSummary { source: String, policy: StockPolicy },
    /// Today's entries and current occupancy from access events.
    ///
    /// "Today" is the capture day at `utc_offset`.
    Occupancy {
        source: String,
        utc_offset: FixedOffset,
    },
    /// Per-order totals and the grand total
    OrderTotals {
        orders: String,
        products: String,
        users: String,
        pricing: OrderPricing,
    },
    /// Per-zone environmental summaries and the active-alert count
    Zones { source: String, policy: ZonePolicy },
    /// Dashboard alert list
    Alerts {
        status_field: String,
        products: String,
        policy: StockPolicy,
    },
    /// Total, active and inactive staff accounts
    EmployeeSummary { source: String },
}

/// DerivationEngine service for building view models from snapshots
///
/// This service contains pure derivation logic. It never fails and never
/// performs I/O: identical snapshots and rules always produce identical
/// view models.
pub struct DerivationEngine;

impl DerivationEngine {
    /// Applies `rules` in order to `snapshot`
    pub fn derive(snapshot: &RawSnapshot, rules: &[DerivationRule]) -> ViewModel {
        let mut view = ViewModel::new();
        for rule in rules {
            Self::apply(snapshot, rule, &mut view);
        }
        view
    }

    fn apply(snapshot: &RawSnapshot, rule: &DerivationRule, view: &mut ViewModel) {
        match rule {
            DerivationRule::Mean {
                field,
                source,
                series,
            } => {
                let mean = match snapshot.records(source) {
                    Some(records) => Measurement::mean(&extract_series(&records, series)),
                    None => {
                        view.mark_degraded(field.as_str());
                        Measurement::NoData
                    }
                };
                view.insert(field.as_str(), mean.into());
            }

            DerivationRule::Classify {
                field,
                input,
                table,
            } => {
                let measurement = view.measurement(input).unwrap_or(Measurement::NoData);
                if view.is_degraded(input) || view.get(input).is_none() {
                    view.mark_degraded(field.as_str());
                }
                view.insert(field.as_str(), DerivedValue::Label(table.classify(measurement)));
            }

            DerivationRule::ClassifyWorst { field, inputs } => {
                let label = classify_worst(view, inputs);
                if inputs
                    .iter()
                    .any(|(input, _)| view.is_degraded(input) || view.get(input).is_none())
                {
                    view.mark_degraded(field.as_str());
                }
                view.insert(field.as_str(), DerivedValue::Label(label));
            }

            DerivationRule::Count { field, source } => {
                let count = records_or_degraded(snapshot, source, &[field.as_str()], view).len();
                view.insert(field.as_str(), DerivedValue::Count(count));
            }

            DerivationRule::CountWhere {
                field,
                source,
                status_fields,
                value,
            } => {
                let expected = value.trim().to_lowercase();
                let candidates: Vec<&str> = status_fields.iter().map(String::as_str).collect();
                let count = records_or_degraded(snapshot, source, &[field.as_str()], view)
                    .iter()
                    .filter(|record| {
                        record
                            .first_text(&candidates)
                            .is_some_and(|v| v.trim().to_lowercase() == expected)
                    })
                    .count();
                view.insert(field.as_str(), DerivedValue::Count(count));
            }

            DerivationRule::StockSummary { source, policy } => {
                let outputs = [
                    fields::LOW_STOCK_COUNT,
                    fields::OUT_OF_STOCK_COUNT,
                    fields::PRODUCTS_TO_REVIEW,
                ];
                let products: Vec<Product> = records_or_degraded(snapshot, source, &outputs, view)
                    .iter()
                    .map(Product::from_record)
                    .collect();

                let mut low = 0;
                let mut out = 0;
                let mut to_review = Vec::new();
                for product in &products {
                    let status = policy.classify_level(product.stock);
                    match status {
                        StockStatus::LowStock => low += 1,
                        StockStatus::OutOfStock => out += 1,
                        StockStatus::InStock | StockStatus::Unknown => {}
                    }
                    if status.needs_review() {
                        to_review.push(product.name.clone());
                    }
                }

                view.insert(fields::LOW_STOCK_COUNT, DerivedValue::Count(low));
                view.insert(fields::OUT_OF_STOCK_COUNT, DerivedValue::Count(out));
                view.insert(fields::PRODUCTS_TO_REVIEW, DerivedValue::Names(to_review));
            }

            DerivationRule::Occupancy { source, utc_offset } => {
                let outputs = [fields::CURRENT_OCCUPANCY, fields::ACCESSES_TODAY];
                let today = snapshot.capture_time().with_timezone(utc_offset).date_naive();

                let mut entries = 0usize;
                let mut exits = 0usize;
                for record in records_or_degraded(snapshot, source, &outputs, view) {
                    let access = AccessRecord::from_record(&record);
                    let is_today = access
                        .timestamp
                        .as_deref()
                        .and_then(|raw| parse_date_at(raw, *utc_offset))
                        == Some(today);
                    if !is_today {
                        continue;
                    }
                    match access.direction {
                        Some(AccessDirection::Entry) => entries += 1,
                        Some(AccessDirection::Exit) => exits += 1,
                        _ => {}
                    }
                }

                view.insert(
                    fields::CURRENT_OCCUPANCY,
                    DerivedValue::Count(entries.saturating_sub(exits)),
                );
                view.insert(fields::ACCESSES_TODAY, DerivedValue::Count(entries));
            }

            DerivationRule::OrderTotals {
                orders,
                products,
                users,
                pricing,
            } => {
                let outputs = [fields::ORDERS, fields::ORDERS_TOTAL];
                let orders: Vec<Order> = records_or_degraded(snapshot, orders, &outputs, view)
                    .iter()
                    .map(Order::from_record)
                    .collect();
                let catalog: Vec<Product> = records_or_degraded(snapshot, products, &outputs, view)
                    .iter()
                    .map(Product::from_record)
                    .collect();
                let users: Vec<Employee> =
                    records_or_degraded(snapshot, users, &[fields::ORDERS], view)
                        .iter()
                        .map(Employee::from_record)
                        .collect();

                let summaries: Vec<OrderSummary> = orders
                    .iter()
                    .map(|order| {
                        let priced = pricing.price(order, &catalog);
                        OrderSummary {
                            id: order.id.clone(),
                            creator_name: creator_name(order, &users),
                            status: order.status.clone(),
                            created_at: order.created_at.clone(),
                            subtotal: round2(priced.subtotal),
                            total: priced.total,
                            lines: priced.lines,
                        }
                    })
                    .collect();
                let grand_total = round2(summaries.iter().map(|o| o.total).sum());

                view.insert(fields::ORDERS, DerivedValue::Orders(summaries));
                view.insert(fields::ORDERS_TOTAL, DerivedValue::Money(grand_total));
            }

            DerivationRule::Zones { source, policy } => {
                let outputs = [fields::ZONES, fields::ACTIVE_ALERTS];
                let readings: Vec<SensorReading> =
                    records_or_degraded(snapshot, source, &outputs, view)
                        .iter()
                        .flat_map(SensorReading::from_record)
                        .collect();

                let zones = policy.summarize(&readings);
                let active = zones.iter().filter(|z| z.status.is_alert()).count();

                view.insert(fields::ZONES, DerivedValue::Zones(zones));
                view.insert(fields::ACTIVE_ALERTS, DerivedValue::Count(active));
            }

            DerivationRule::Alerts {
                status_field,
                products,
                policy,
            } => {
                let alerts = build_alerts(snapshot, view, status_field, products, policy);
                view.insert(fields::ALERTS, DerivedValue::Alerts(alerts));
            }

            DerivationRule::EmployeeSummary { source } => {
                let outputs = [
                    fields::EMPLOYEE_COUNT,
                    fields::ACTIVE_EMPLOYEES,
                    fields::INACTIVE_EMPLOYEES,
                ];
                let employees: Vec<Employee> =
                    records_or_degraded(snapshot, source, &outputs, view)
                        .iter()
                        .map(Employee::from_record)
                        .collect();
                let active = employees.iter().filter(|e| e.active).count();

                view.insert(fields::EMPLOYEE_COUNT, DerivedValue::Count(employees.len()));
                view.insert(fields::ACTIVE_EMPLOYEES, DerivedValue::Count(active));
                view.insert(
                    fields::INACTIVE_EMPLOYEES,
                    DerivedValue::Count(employees.len() - active),
                );
            }
        }
    }
}

/// Records of `source`, or an empty list with `outputs` marked degraded
fn records_or_degraded(
    snapshot: &RawSnapshot,
    source: &str,
    outputs: &[&str],
    view: &mut ViewModel,
) -> Vec<Record> {
    match snapshot.records(source) {
        Some(records) => records,
        None => {
            for output in outputs {
                view.mark_degraded(*output);
            }
            Vec::new()
        }
    }
}

fn extract_series(records: &[Record], series: &NumericSeries) -> Vec<f64> {
    match series {
        NumericSeries::Reading(kind) => records
            .iter()
            .flat_map(SensorReading::from_record)
            .filter(|reading| reading.kind == *kind)
            .filter_map(|reading| reading.value)
            .collect(),
        NumericSeries::Field(name) => records.iter().filter_map(|r| r.number(name)).collect(),
    }
}

fn classify_worst(view: &ViewModel, inputs: &[(String, ThresholdTable)]) -> StatusLabel {
    let mut worst: Option<(usize, StatusLabel)> = None;
    for (input, table) in inputs {
        let measurement = view.measurement(input).unwrap_or(Measurement::NoData);
        if let Some(index) = table.band_index(measurement) {
            if worst.as_ref().map_or(true, |(best, _)| index > *best) {
                worst = Some((index, table.classify(measurement)));
            }
        }
    }

    match (worst, inputs.first()) {
        (Some((_, label)), _) => label,
        (None, Some((_, table))) => table.unknown_label().clone(),
        (None, None) => StatusLabel::new(crate::operations::policies::UNKNOWN_LABEL),
    }
}

fn build_alerts(
    snapshot: &RawSnapshot,
    view: &mut ViewModel,
    status_field: &str,
    products: &str,
    policy: &StockPolicy,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if let Some(label) = view.label(status_field) {
        let level = match label.as_str() {
            "danger" => Some(AlertLevel::Danger),
            "warning" => Some(AlertLevel::Warning),
            _ => None,
        };
        if let Some(level) = level {
            alerts.push(Alert::new(
                level,
                format!("Environment status: {}", label),
                None,
            ));
        }
    }

    let catalog: Vec<Product> = records_or_degraded(snapshot, products, &[fields::ALERTS], view)
        .iter()
        .map(Product::from_record)
        .collect();

    // Products without a known level raise no stock alert.
    let levels: Vec<(&Product, f64)> = catalog
        .iter()
        .filter_map(|product| Some((product, product.stock?)))
        .collect();

    for (product, _) in levels
        .iter()
        .filter(|(_, stock)| policy.classify(*stock) == StockStatus::OutOfStock)
    {
        alerts.push(Alert::new(
            AlertLevel::Danger,
            format!("Out of stock: {}", product.name),
            product.sku.clone(),
        ));
    }

    for (product, stock) in levels
        .iter()
        .filter(|(_, stock)| policy.classify(*stock) == StockStatus::LowStock)
    {
        alerts.push(Alert::new(
            AlertLevel::Warning,
            format!("Low stock: {} ({} left)", product.name, stock),
            product.sku.clone(),
        ));
    }

    for (source, failure) in snapshot.failures() {
        alerts.push(Alert::new(
            AlertLevel::Info,
            format!("Source offline: {}", source),
            Some(failure.to_string()),
        ));
    }

    alerts
}
