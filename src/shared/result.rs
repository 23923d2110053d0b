/// Type alias for Result with anyhow::Error as the error type.
/// Application-level operations (configuration, profile construction,
/// presentation) use this; per-source fetch failures use `FetchFailure`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
