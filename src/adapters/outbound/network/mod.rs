/// Network adapters for the backend REST API
mod http_gateway;

pub use http_gateway::{HttpResourceFetcher, DEFAULT_TIMEOUT_SECS};
