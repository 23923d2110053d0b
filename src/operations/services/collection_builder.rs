use crate::operations::domain::{
    AccessRecord, Client, Employee, Order, Product, RawSnapshot, Record, SensorReading,
};
use crate::operations::policies::{round2, OrderPricing, StockPolicy, ZonePolicy};
use crate::operations::services::{creator_name, member_name};

/// Extra fields computed onto each record of a collection
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    None,
    /// `stockStatus`
    StockStatus(StockPolicy),
    /// `creatorName`, `subtotal`, `total`, plus the normalized `status`
    /// and `createdAt`
    OrderTotals {
        products: String,
        users: String,
        pricing: OrderPricing,
    },
    /// `memberName` and the normalized `direction`
    MemberName { clients: String },
    /// `primaryRole`, `statusLabel`
    EmployeeStatus,
}

/// Which collection a screen filters
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionSpec {
    /// The screen has no filterable collection
    None,
    /// The records of one resource, annotated
    Records {
        source: String,
        annotation: Annotation,
    },
    /// One record per monitored zone
    Zones { source: String, policy: ZonePolicy },
}

/// CollectionBuilder service for producing a screen's filterable collection
///
/// Records are copied and annotated; the snapshot is never modified.
/// A failed source yields an empty collection.
pub struct CollectionBuilder;

impl CollectionBuilder {
    pub fn build(snapshot: &RawSnapshot, spec: &CollectionSpec) -> Vec<Record> {
        match spec {
            CollectionSpec::None => Vec::new(),
            CollectionSpec::Records { source, annotation } => {
                let records = snapshot.records(source).unwrap_or_default();
                Self::annotate(snapshot, records, annotation)
            }
            CollectionSpec::Zones { source, policy } => {
                let readings: Vec<SensorReading> = snapshot
                    .records(source)
                    .unwrap_or_default()
                    .iter()
                    .flat_map(SensorReading::from_record)
                    .collect();

                policy
                    .summarize(&readings)
                    .iter()
                    .filter_map(|zone| serde_json::to_value(zone).ok())
                    .filter_map(|value| Record::from_value(&value))
                    .collect()
            }
        }
    }

    fn annotate(snapshot: &RawSnapshot, records: Vec<Record>, annotation: &Annotation) -> Vec<Record> {
        match annotation {
            Annotation::None => records,

            Annotation::StockStatus(policy) => records
                .iter()
                .map(|record| {
                    let product = Product::from_record(record);
                    record.with_field("stockStatus", policy.classify_level(product.stock).as_str())
                })
                .collect(),

            Annotation::OrderTotals {
                products,
                users,
                pricing,
            } => {
                let catalog: Vec<Product> = snapshot
                    .records(products)
                    .unwrap_or_default()
                    .iter()
                    .map(Product::from_record)
                    .collect();
                let users: Vec<Employee> = snapshot
                    .records(users)
                    .unwrap_or_default()
                    .iter()
                    .map(Employee::from_record)
                    .collect();

                records
                    .iter()
                    .map(|record| {
                        let order = Order::from_record(record);
                        let priced = pricing.price(&order, &catalog);
                        record
                            .with_field("creatorName", creator_name(&order, &users))
                            .with_field("subtotal", round2(priced.subtotal))
                            .with_field("total", priced.total)
                            .with_field("status", order.status)
                            .with_field("createdAt", order.created_at)
                    })
                    .collect()
            }

            Annotation::MemberName { clients } => {
                let clients: Vec<Client> = snapshot
                    .records(clients)
                    .unwrap_or_default()
                    .iter()
                    .map(Client::from_record)
                    .collect();

                records
                    .iter()
                    .map(|record| {
                        let access = AccessRecord::from_record(record);
                        record
                            .with_field("memberName", member_name(&access, &clients))
                            .with_field("direction", access.direction.map(|d| d.as_str()))
                    })
                    .collect()
            }

            Annotation::EmployeeStatus => records
                .iter()
                .map(|record| {
                    let employee = Employee::from_record(record);
                    let status = if employee.active { "active" } else { "inactive" };
                    record
                        .with_field("primaryRole", employee.primary_role().unwrap_or_default())
                        .with_field("statusLabel", status)
                })
                .collect(),
        }
    }
}
