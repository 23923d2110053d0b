/// Shared kernel - error types, result alias and validation helpers
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
