/// Session adapters supplying the bearer credential
mod credentials;

pub use credentials::{EnvCredentialProvider, StaticCredentialProvider, TOKEN_ENV_VAR};
