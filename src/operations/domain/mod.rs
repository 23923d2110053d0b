pub mod entities;
pub mod filter_criteria;
pub mod measurement;
pub mod record;
pub mod resource;
pub mod snapshot;
pub mod status;
pub mod view_model;

pub use entities::{
    AccessDirection, AccessRecord, Client, Employee, Order, OrderLine, Product, SensorKind,
    SensorReading,
};
pub use filter_criteria::{parse_date, parse_date_at, DateRange, FilterCriteria, FilterFields};
pub use measurement::Measurement;
pub use record::{PayloadShape, Record};
pub use resource::{EndpointDescriptor, HttpMethod, ResourceRequest};
pub use snapshot::{FetchFailure, RawSnapshot, ResourceOutcome, SourceOutcome};
pub use status::{Alert, AlertLevel, StatusLabel, StockStatus, ZoneStatus};
pub use view_model::{fields, DerivedValue, LineSummary, OrderSummary, ViewModel, ZoneSummary};
