use std::sync::Mutex;

use async_trait::async_trait;

use super::{CompletionProvider, CompletionRequest, ProviderError};

// Test double that replies with canned text and records every request
pub struct MockProvider {
    reply: Result<String, u16>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockProvider {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    // Fails every call with the given upstream status
    pub fn failing(status: u16) -> Self {
        Self {
            reply: Err(status),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(ProviderError::Status {
                status: *status,
                body: "simulated failure".to_string(),
            }),
        }
    }
}
