use std::time::{Duration, Instant};

use async_trait::async_trait;

use super::{CompletionProvider, CompletionRequest, ProviderError};
use crate::metrics::UPSTREAM_LATENCY;
use crate::models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

// Groq, or any OpenAI compatible chat completions endpoint
pub struct GroqProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    max_retries: u32,
    retry_delay: Duration,
}

impl GroqProvider {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            max_retries: 0,
            retry_delay: Duration::from_millis(500),
        }
    }

    // transient failures get up to max_retries extra attempts, retry_delay * attempt apart
    pub fn with_retries(self, max_retries: u32, retry_delay: Duration) -> Self {
        Self {
            max_retries,
            retry_delay,
            ..self
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    async fn call_once(&self, body: &ChatCompletionRequest) -> Result<String, ProviderError> {
        let start = Instant::now();
        let res = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await;
        UPSTREAM_LATENCY.observe(start.elapsed().as_secs_f64());
        let res = res?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = res
            .json()
            .await
            .map_err(|e| ProviderError::malformed(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::malformed("no completion choices"))?
            .message
            .content
            .ok_or_else(|| ProviderError::malformed("first choice has no content"))
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError> {
        let body = ChatCompletionRequest {
            model: request.model,
            messages: vec![ChatMessage::user(request.prompt)],
        };

        let mut attempt = 0;
        loop {
            match self.call_once(&body).await {
                Ok(text) => return Ok(text),
                Err(e) if e.is_transient() && attempt < self.max_retries => {
                    attempt += 1;
                    let delay = self.retry_delay * attempt;
                    tracing::warn!(
                        error = %e,
                        attempt,
                        max_retries = self.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        "transient provider failure, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
