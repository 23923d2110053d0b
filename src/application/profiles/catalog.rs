use crate::application::dto::RefreshRequest;
use crate::application::profiles::ScreenKind;
use crate::operations::domain::{
    fields, EndpointDescriptor, FilterFields, Order, PayloadShape, ResourceRequest, SensorKind,
};
use crate::operations::policies::{OrderPricing, StockPolicy, ThresholdTable, ZonePolicy};
use crate::operations::services::{Annotation, CollectionSpec, DerivationRule, NumericSeries};
use chrono::{FixedOffset, Offset, Utc};
use std::collections::BTreeMap;

/// Identifiers of the backend resources
pub mod resources {
    pub const SENSORS: &str = "sensors";
    pub const PRODUCTS: &str = "products";
    pub const ORDERS: &str = "orders";
    pub const USERS: &str = "users";
    pub const CLIENTS: &str = "clients";
    pub const ACCESS: &str = "access";

    pub const ALL: [&str; 6] = [SENSORS, PRODUCTS, ORDERS, USERS, CLIENTS, ACCESS];
}

struct ResourceDefinition {
    id: &'static str,
    path: &'static str,
    requires_auth: bool,
    array_fields: &'static [&'static str],
}

static DEFINITIONS: [ResourceDefinition; 6] = [
    ResourceDefinition {
        id: resources::SENSORS,
        path: "/api/sensor/readings",
        requires_auth: true,
        array_fields: &["readings", "data"],
    },
    ResourceDefinition {
        id: resources::PRODUCTS,
        path: "/api/product/products",
        requires_auth: false,
        array_fields: &["products", "data"],
    },
    ResourceDefinition {
        id: resources::ORDERS,
        path: "/api/order/orders",
        requires_auth: true,
        array_fields: &["orders", "orderList", "data"],
    },
    ResourceDefinition {
        id: resources::USERS,
        path: "/api/auth/users",
        requires_auth: true,
        array_fields: &["users", "data"],
    },
    ResourceDefinition {
        id: resources::CLIENTS,
        path: "/api/client/clients",
        requires_auth: true,
        array_fields: &["clients", "data"],
    },
    ResourceDefinition {
        id: resources::ACCESS,
        path: "/api/access/records",
        requires_auth: true,
        array_fields: &["records", "data"],
    },
];

/// Tunable inputs of the derivation rules
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub stock: StockPolicy,
    pub pricing: OrderPricing,
    pub temperature: ThresholdTable,
    pub humidity: ThresholdTable,
    /// Resource id → path template replacing the built-in one
    pub endpoints: BTreeMap<String, String>,
    /// Offset of the gym's local day, for "today" and date filters
    pub utc_offset: FixedOffset,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            stock: StockPolicy::default(),
            pricing: OrderPricing::default(),
            temperature: ThresholdTable::default_temperature(),
            humidity: ThresholdTable::default_humidity(),
            endpoints: BTreeMap::new(),
            utc_offset: Utc.fix(),
        }
    }
}

/// The complete pipeline configuration of one screen
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenProfile {
    pub screen: ScreenKind,
    pub requests: Vec<ResourceRequest>,
    pub rules: Vec<DerivationRule>,
    pub collection: CollectionSpec,
    pub filter_fields: FilterFields,
}

/// Builds screen profiles from engine settings
#[derive(Debug, Clone, Default)]
pub struct ScreenCatalog {
    settings: EngineSettings,
}

impl ScreenCatalog {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Path template of a resource, honoring configured overrides
    pub fn endpoint_path(&self, id: &str) -> Option<String> {
        let definition = DEFINITIONS.iter().find(|d| d.id == id)?;
        Some(
            self.settings
                .endpoints
                .get(id)
                .cloned()
                .unwrap_or_else(|| definition.path.to_string()),
        )
    }

    /// Profile for the requested screen
    pub fn profile(&self, request: &RefreshRequest) -> ScreenProfile {
        match request.screen {
            ScreenKind::Dashboard => self.dashboard(),
            ScreenKind::Monitoring => self.monitoring(request),
            ScreenKind::Inventory => self.inventory(),
            ScreenKind::Access => self.access(),
            ScreenKind::Orders => self.orders(),
            ScreenKind::Employees => self.employees(),
        }
    }

    /// Request for a resource. Each parameter fills the `{name}`
    /// placeholder of the path template when there is one, and is sent
    /// as a query parameter otherwise.
    fn resource(&self, id: &'static str, params: &[(&str, Option<&str>)]) -> ResourceRequest {
        let definition = DEFINITIONS.iter().find(|d| d.id == id);
        let requires_auth = definition.map_or(true, |d| d.requires_auth);
        let array_fields = definition.map(|d| d.array_fields).unwrap_or_default();
        let path = self.endpoint_path(id).unwrap_or_else(|| "/".to_string());

        let descriptor = params
            .iter()
            .fold(EndpointDescriptor::get(path), |descriptor, (name, value)| {
                let Some(value) = value else {
                    return descriptor;
                };
                if !descriptor.has_placeholder(name) {
                    return descriptor.with_query(name, value);
                }
                // A rejected value leaves the placeholder unbound, so the
                // fetch fails as an invalid request instead of escaping the path.
                descriptor
                    .clone()
                    .with_path_param(name, value)
                    .unwrap_or(descriptor)
            });

        ResourceRequest::new(
            id,
            descriptor,
            requires_auth,
            PayloadShape::wrapped(array_fields),
        )
    }

    fn environment_means(&self) -> Vec<DerivationRule> {
        vec![
            DerivationRule::Mean {
                field: fields::AVG_TEMPERATURE.to_string(),
                source: resources::SENSORS.to_string(),
                series: NumericSeries::Reading(SensorKind::Temperature),
            },
            DerivationRule::Mean {
                field: fields::AVG_HUMIDITY.to_string(),
                source: resources::SENSORS.to_string(),
                series: NumericSeries::Reading(SensorKind::Humidity),
            },
        ]
    }

    fn stock_summary(&self) -> DerivationRule {
        DerivationRule::StockSummary {
            source: resources::PRODUCTS.to_string(),
            policy: self.settings.stock,
        }
    }

    fn zone_policy(&self) -> ZonePolicy {
        ZonePolicy::new(
            self.settings.temperature.clone(),
            self.settings.humidity.clone(),
        )
    }

    fn dashboard(&self) -> ScreenProfile {
        let mut rules = self.environment_means();
        rules.extend([
            DerivationRule::ClassifyWorst {
                field: fields::ENVIRONMENT_STATUS.to_string(),
                inputs: vec![
                    (
                        fields::AVG_TEMPERATURE.to_string(),
                        self.settings.temperature.clone(),
                    ),
                    (
                        fields::AVG_HUMIDITY.to_string(),
                        self.settings.humidity.clone(),
                    ),
                ],
            },
            DerivationRule::Occupancy {
                source: resources::ACCESS.to_string(),
                utc_offset: self.settings.utc_offset,
            },
            self.stock_summary(),
            DerivationRule::Alerts {
                status_field: fields::ENVIRONMENT_STATUS.to_string(),
                products: resources::PRODUCTS.to_string(),
                policy: self.settings.stock,
            },
        ]);

        ScreenProfile {
            screen: ScreenKind::Dashboard,
            requests: vec![
                self.resource(resources::SENSORS, &[]),
                self.resource(resources::PRODUCTS, &[]),
                self.resource(resources::ACCESS, &[]),
            ],
            rules,
            collection: CollectionSpec::None,
            filter_fields: FilterFields::default(),
        }
    }

    fn monitoring(&self, request: &RefreshRequest) -> ScreenProfile {
        let mut rules = self.environment_means();
        rules.extend([
            DerivationRule::Classify {
                field: fields::TEMPERATURE_STATUS.to_string(),
                input: fields::AVG_TEMPERATURE.to_string(),
                table: self.settings.temperature.clone(),
            },
            DerivationRule::Classify {
                field: fields::HUMIDITY_STATUS.to_string(),
                input: fields::AVG_HUMIDITY.to_string(),
                table: self.settings.humidity.clone(),
            },
            DerivationRule::Zones {
                source: resources::SENSORS.to_string(),
                policy: self.zone_policy(),
            },
        ]);

        let params = [
            ("zone", request.zone.as_deref()),
            ("date", request.date.as_deref()),
        ];

        ScreenProfile {
            screen: ScreenKind::Monitoring,
            requests: vec![self.resource(resources::SENSORS, &params)],
            rules,
            collection: CollectionSpec::Zones {
                source: resources::SENSORS.to_string(),
                policy: self.zone_policy(),
            },
            filter_fields: FilterFields::text(&["zone"]).with_status("status"),
        }
    }

    fn inventory(&self) -> ScreenProfile {
        ScreenProfile {
            screen: ScreenKind::Inventory,
            requests: vec![self.resource(resources::PRODUCTS, &[])],
            rules: vec![
                DerivationRule::Count {
                    field: fields::PRODUCT_COUNT.to_string(),
                    source: resources::PRODUCTS.to_string(),
                },
                self.stock_summary(),
            ],
            collection: CollectionSpec::Records {
                source: resources::PRODUCTS.to_string(),
                annotation: Annotation::StockStatus(self.settings.stock),
            },
            filter_fields: FilterFields::text(&["name", "sku"])
                .with_category("category")
                .with_status("stockStatus"),
        }
    }

    fn access(&self) -> ScreenProfile {
        ScreenProfile {
            screen: ScreenKind::Access,
            requests: vec![
                self.resource(resources::ACCESS, &[]),
                self.resource(resources::CLIENTS, &[]),
            ],
            rules: vec![
                DerivationRule::Occupancy {
                    source: resources::ACCESS.to_string(),
                    utc_offset: self.settings.utc_offset,
                },
                DerivationRule::Count {
                    field: fields::MEMBER_COUNT.to_string(),
                    source: resources::CLIENTS.to_string(),
                },
            ],
            collection: CollectionSpec::Records {
                source: resources::ACCESS.to_string(),
                annotation: Annotation::MemberName {
                    clients: resources::CLIENTS.to_string(),
                },
            },
            filter_fields: FilterFields::text(&["memberName"])
                .with_status("direction")
                .with_date("timestamp")
                .with_utc_offset(self.settings.utc_offset),
        }
    }

    fn orders(&self) -> ScreenProfile {
        ScreenProfile {
            screen: ScreenKind::Orders,
            requests: vec![
                self.resource(resources::ORDERS, &[]),
                self.resource(resources::PRODUCTS, &[]),
                self.resource(resources::USERS, &[]),
            ],
            rules: vec![
                DerivationRule::Count {
                    field: fields::ORDER_COUNT.to_string(),
                    source: resources::ORDERS.to_string(),
                },
                DerivationRule::CountWhere {
                    field: fields::PENDING_ORDERS.to_string(),
                    source: resources::ORDERS.to_string(),
                    status_fields: Order::STATUS_FIELDS.map(String::from).to_vec(),
                    value: "pending".to_string(),
                },
                DerivationRule::OrderTotals {
                    orders: resources::ORDERS.to_string(),
                    products: resources::PRODUCTS.to_string(),
                    users: resources::USERS.to_string(),
                    pricing: self.settings.pricing,
                },
            ],
            collection: CollectionSpec::Records {
                source: resources::ORDERS.to_string(),
                annotation: Annotation::OrderTotals {
                    products: resources::PRODUCTS.to_string(),
                    users: resources::USERS.to_string(),
                    pricing: self.settings.pricing,
                },
            },
            filter_fields: FilterFields::text(&["creatorName"])
                .with_status("status")
                .with_date("createdAt")
                .with_utc_offset(self.settings.utc_offset),
        }
    }

    fn employees(&self) -> ScreenProfile {
        ScreenProfile {
            screen: ScreenKind::Employees,
            requests: vec![self.resource(resources::USERS, &[])],
            rules: vec![DerivationRule::EmployeeSummary {
                source: resources::USERS.to_string(),
            }],
            collection: CollectionSpec::Records {
                source: resources::USERS.to_string(),
                annotation: Annotation::EmployeeStatus,
            },
            filter_fields: FilterFields::text(&["firstName", "lastName", "email"])
                .with_category("primaryRole")
                .with_status("statusLabel"),
        }
    }
}
