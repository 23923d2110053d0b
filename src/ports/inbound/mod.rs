/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod screen_refresh_port;

pub use screen_refresh_port::ScreenRefreshPort;
