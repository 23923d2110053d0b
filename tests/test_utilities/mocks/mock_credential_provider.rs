use gym_console::prelude::*;

/// Mock CredentialProvider returning a fixed token
pub struct MockCredentialProvider {
    token: Option<String>,
}

impl MockCredentialProvider {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
        }
    }

    pub fn signed_out() -> Self {
        Self { token: None }
    }
}

impl CredentialProvider for MockCredentialProvider {
    fn current_token(&self) -> Option<Credential> {
        self.token.clone().and_then(Credential::new)
    }
}
