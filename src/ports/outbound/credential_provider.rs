use std::fmt;

/// A bearer token for the backend.
///
/// `Debug` is redacted so a token never ends up in progress output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Returns `None` for a blank token
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn bearer_token(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// CredentialProvider port for reading the current session token
///
/// The session store itself (login, persistence, expiry) lives outside
/// this crate. The token is read once per refresh cycle and passed
/// explicitly to the aggregation step.
pub trait CredentialProvider: Send + Sync {
    /// Current token, or `None` when there is no session
    fn current_token(&self) -> Option<Credential>;
}

impl<T: CredentialProvider + ?Sized> CredentialProvider for Box<T> {
    fn current_token(&self) -> Option<Credential> {
        (**self).current_token()
    }
}
