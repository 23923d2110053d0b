use clap::Parser;
use std::path::PathBuf;

use gym_console::application::dto::{OutputFormat, RefreshRequest};
use gym_console::application::profiles::ScreenKind;
use gym_console::operations::domain::FilterCriteria;

/// Default backend URL when neither --base-url nor the config file sets one
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Refresh a gym-management console screen from the REST backend
#[derive(Parser, Debug)]
#[command(name = "gym-console")]
#[command(version)]
#[command(about = "Fetch, derive and filter gym-management console screens", long_about = None)]
pub struct Args {
    /// Screen to refresh: dashboard, monitoring, inventory, access, orders or employees
    pub screen: ScreenKind,

    /// Backend base URL (overrides the config file)
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Session token (defaults to the GYM_CONSOLE_TOKEN environment variable)
    #[arg(short, long)]
    pub token: Option<String>,

    /// Path to a config file (defaults to ./gym-console.config.yml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Free-text search over the screen's text fields (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Exact category to keep
    #[arg(long)]
    pub category: Option<String>,

    /// Exact status to keep
    #[arg(long)]
    pub status: Option<String>,

    /// First day to keep (YYYY-MM-DD, inclusive)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Last day to keep (YYYY-MM-DD, inclusive)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Zone passed to the sensor readings query (monitoring screen)
    #[arg(long)]
    pub zone: Option<String>,

    /// Day passed to the sensor readings query (monitoring screen)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Refresh every N seconds instead of once
    #[arg(short, long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub watch: Option<u64>,

    /// Stop watching after this many refresh cycles
    #[arg(long, value_name = "N", requires = "watch")]
    pub max_cycles: Option<u64>,

    /// Suppress progress output on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Initial filter built from the search flags
    pub fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new()
            .with_date_range(self.from.clone(), self.to.clone());
        if let Some(search) = &self.search {
            criteria = criteria.with_text(search.as_str());
        }
        if let Some(category) = &self.category {
            criteria = criteria.with_category(category.as_str());
        }
        if let Some(status) = &self.status {
            criteria = criteria.with_status(status.as_str());
        }
        criteria
    }

    pub fn refresh_request(&self) -> RefreshRequest {
        RefreshRequest::new(self.screen)
            .with_criteria(self.criteria())
            .with_zone(self.zone.clone())
            .with_date(self.date.clone())
    }
}
