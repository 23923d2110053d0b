/// Application layer - Use cases and DTOs
///
/// This layer contains the application logic that orchestrates
/// operations services and coordinates with infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod latest_views;
pub mod profiles;
pub mod use_cases;

pub use latest_views::{LatestViews, ViewTicket};
