use crate::operations::domain::{EndpointDescriptor, FetchFailure, HttpMethod, ResourceOutcome};
use crate::ports::outbound::{Credential, ResourceFetcher};
use crate::shared::error::ConsoleError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde_json::Value;
use std::error::Error as _;
use std::time::Duration;

/// Default request timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// HttpResourceFetcher adapter for the gym backend REST API
///
/// This adapter implements the ResourceFetcher port on top of an async
/// reqwest client. Every failure is mapped onto a `FetchFailure`; the
/// adapter never retries and never caches.
pub struct HttpResourceFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpResourceFetcher {
    /// Creates a fetcher for the backend at `base_url`
    ///
    /// # Errors
    /// Returns an error if the URL is not an absolute http(s) URL or the
    /// HTTP client cannot be built
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Self::validate_base_url(base_url)?;

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("gym-console/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn validate_base_url(raw: &str) -> Result<String> {
        let trimmed = raw.trim().trim_end_matches('/');
        let invalid = |reason: &str| ConsoleError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: reason.to_string(),
        };

        let Some((scheme, rest)) = trimmed.split_once("://") else {
            return Err(invalid("missing scheme").into());
        };
        if scheme != "http" && scheme != "https" {
            return Err(invalid("only http and https are supported").into());
        }
        if rest.is_empty() || rest.starts_with('/') {
            return Err(invalid("missing host").into());
        }
        if rest.contains(['?', '#']) {
            return Err(invalid("query strings and fragments are not allowed").into());
        }

        Ok(trimmed.to_string())
    }

    /// Absolute URL for a descriptor, with percent-encoded query pairs
    pub fn url_for(&self, descriptor: &EndpointDescriptor) -> Result<String> {
        let path = descriptor.render_path()?;
        let mut url = format!("{}{}", self.base_url, path);

        let query: Vec<String> = descriptor
            .query()
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(value)
                )
            })
            .collect();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.join("&"));
        }

        Ok(url)
    }
}

#[async_trait]
impl ResourceFetcher for HttpResourceFetcher {
    async fn fetch(
        &self,
        descriptor: &EndpointDescriptor,
        credential: Option<&Credential>,
    ) -> ResourceOutcome {
        let url = self
            .url_for(descriptor)
            .map_err(|e| FetchFailure::InvalidRequest {
                message: e.to_string(),
            })?;

        let mut request = match descriptor.method() {
            HttpMethod::Get => self.client.get(&url),
        }
        .header(ACCEPT, "application/json");

        if let Some(credential) = credential {
            request = request.bearer_auth(credential.bearer_token());
        }

        let response = request.send().await.map_err(transport_failure)?;
        let status = response.status();
        let body = response.text().await.map_err(transport_failure)?;

        if !status.is_success() {
            return Err(FetchFailure::Rejected {
                status: status.as_u16(),
                message: rejection_message(&body),
            });
        }

        decode_body(&body)
    }
}

fn transport_failure(error: reqwest::Error) -> FetchFailure {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    FetchFailure::Transport { message }
}

/// Server-supplied reason for a rejection.
///
/// A JSON body contributes its `message` or `error` string field; any
/// other body contributes its trimmed text when non-empty.
fn rejection_message(body: &str) -> Option<String> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => ["message", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(str::to_string),
        Ok(_) => None,
        Err(_) => Some(body.trim().to_string()).filter(|text| !text.is_empty()),
    }
}

/// Decodes a 2xx body; an empty body is JSON `null`
fn decode_body(body: &str) -> ResourceOutcome {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| FetchFailure::Decode {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fetcher(base_url: &str) -> HttpResourceFetcher {
        HttpResourceFetcher::new(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS)).unwrap()
    }

    #[test]
    fn test_base_url_is_normalized() {
        assert_eq!(fetcher("https://gym.example.com/").base_url(), "https://gym.example.com");
        assert_eq!(fetcher(" http://localhost:3000 ").base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_base_url_rejections() {
        for url in ["gym.example.com", "ftp://gym", "https://", "https://gym?x=1"] {
            let err = HttpResourceFetcher::new(url, Duration::from_secs(1))
                .err()
                .unwrap_or_else(|| panic!("{} should be rejected", url));
            assert!(err.to_string().contains("Invalid backend URL"));
        }
    }

    #[test]
    fn test_url_for_renders_path_and_query() {
        let descriptor = EndpointDescriptor::get("/api/sensor/{zone}/readings")
            .with_path_param("zone", "Zona Cardio")
            .unwrap()
            .with_query("date", "2024-05-10")
            .with_query("q", "a&b");

        assert_eq!(
            fetcher("http://localhost:3000").url_for(&descriptor).unwrap(),
            "http://localhost:3000/api/sensor/Zona%20Cardio/readings?date=2024-05-10&q=a%26b"
        );
    }

    #[test]
    fn test_url_for_unbound_placeholder_fails() {
        let descriptor = EndpointDescriptor::get("/api/order/{id}");
        assert!(fetcher("http://localhost").url_for(&descriptor).is_err());
    }

    #[tokio::test]
    async fn test_unrenderable_descriptor_is_invalid_request() {
        let descriptor = EndpointDescriptor::get("/api/order/{id}");
        let outcome = fetcher("http://localhost").fetch(&descriptor, None).await;
        assert!(matches!(outcome, Err(FetchFailure::InvalidRequest { .. })));
    }

    #[test]
    fn test_rejection_message_sources() {
        assert_eq!(
            rejection_message(r#"{"message": "Token expired"}"#).as_deref(),
            Some("Token expired")
        );
        assert_eq!(
            rejection_message(r#"{"error": "Forbidden"}"#).as_deref(),
            Some("Forbidden")
        );
        assert_eq!(rejection_message(r#"{"code": 17}"#), None);
        assert_eq!(
            rejection_message("  Bad Gateway \n").as_deref(),
            Some("Bad Gateway")
        );
        assert_eq!(rejection_message("   "), None);
    }

    #[test]
    fn test_decode_body() {
        assert_eq!(decode_body(""), Ok(Value::Null));
        assert_eq!(decode_body("[1, 2]"), Ok(json!([1, 2])));
        assert!(matches!(
            decode_body("<html>oops</html>"),
            Err(FetchFailure::Decode { .. })
        ));
    }
}
