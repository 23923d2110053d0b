use async_trait::async_trait;
use gym_console::operations::domain::{EndpointDescriptor, ResourceOutcome};
use gym_console::prelude::*;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// One request seen by the mock fetcher
#[derive(Debug, Clone, PartialEq)]
pub struct FetchCall {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub authenticated: bool,
}

/// Mock ResourceFetcher serving canned outcomes by path template.
///
/// Unknown paths are rejected with HTTP 404.
#[derive(Default, Clone)]
pub struct MockResourceFetcher {
    responses: HashMap<String, ResourceOutcome>,
    pub calls: Arc<Mutex<Vec<FetchCall>>>,
}

impl MockResourceFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payload(mut self, path: &str, payload: Value) -> Self {
        self.responses.insert(path.to_string(), Ok(payload));
        self
    }

    pub fn with_failure(mut self, path: &str, failure: FetchFailure) -> Self {
        self.responses.insert(path.to_string(), Err(failure));
        self
    }

    pub fn calls(&self) -> Vec<FetchCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResourceFetcher for MockResourceFetcher {
    async fn fetch(
        &self,
        descriptor: &EndpointDescriptor,
        credential: Option<&Credential>,
    ) -> ResourceOutcome {
        let path = descriptor.path_template().to_string();
        self.calls.lock().unwrap().push(FetchCall {
            path: path.clone(),
            query: descriptor.query().to_vec(),
            authenticated: credential.is_some(),
        });

        self.responses
            .get(&path)
            .cloned()
            .unwrap_or(Err(FetchFailure::Rejected {
                status: 404,
                message: Some("Not found".to_string()),
            }))
    }
}
