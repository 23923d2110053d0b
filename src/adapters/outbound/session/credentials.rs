use crate::ports::outbound::{Credential, CredentialProvider};

/// Environment variable holding the session token
pub const TOKEN_ENV_VAR: &str = "GYM_CONSOLE_TOKEN";

/// EnvCredentialProvider adapter reading the session token from the environment
///
/// The variable is read on every call so a token rotated between watch
/// cycles is picked up by the next cycle.
pub struct EnvCredentialProvider {
    variable: String,
}

impl EnvCredentialProvider {
    pub fn new() -> Self {
        Self::from_variable(TOKEN_ENV_VAR)
    }

    pub fn from_variable(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
        }
    }
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialProvider for EnvCredentialProvider {
    fn current_token(&self) -> Option<Credential> {
        std::env::var(&self.variable).ok().and_then(Credential::new)
    }
}

/// StaticCredentialProvider adapter for a token given on the command line
pub struct StaticCredentialProvider {
    credential: Option<Credential>,
}

impl StaticCredentialProvider {
    pub fn new(token: Option<String>) -> Self {
        Self {
            credential: token.and_then(Credential::new),
        }
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn current_token(&self) -> Option<Credential> {
        self.credential.clone()
    }
}
