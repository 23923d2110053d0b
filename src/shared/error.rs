use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts and schedulers distinguish a clean refresh
/// from a refresh that rendered only partial data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every source of the refresh cycle succeeded
    Success = 0,
    /// The view was rendered, but at least one source failed
    PartialData = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (invalid configuration, output failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::PartialData => write!(f, "Partial Data (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the console engine.
///
/// Per-source fetch failures are not part of this enum: they are captured
/// in the snapshot as `FetchFailure` and never abort a refresh.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Invalid backend URL: {url}\nReason: {reason}\n\n💡 Hint: Use an absolute http(s) URL such as https://gym.example.com")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid threshold table '{name}'\nReason: {reason}\n\n💡 Hint: List bands in ascending order of 'max'; only the last band may omit 'max'")]
    InvalidThresholds { name: String, reason: String },

    #[error("Invalid configuration: {field}\nReason: {reason}\n\n💡 Hint: {hint}")]
    InvalidConfig {
        field: String,
        reason: String,
        hint: String,
    },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },
}
