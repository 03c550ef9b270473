use async_trait::async_trait;
use reflect_common::config::redact;
use reflect_common::{ReflectError, Result};
use std::fmt;
use reqwest::Client;
use tracing::{debug, info};

use crate::llm_trait::ChatClient;
use crate::types::{ChatCompletionResponse, ChatRequest};

/// Production OpenAI host
pub const OPENAI_BASE_URL: &str = "https://api.openai.com";

/// OpenAI chat completions client
#[derive(Clone)]
pub struct OpenAiClient {
    base_url: String,
    token: String,
    client: Client,
}

impl fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.base_url)
            .field("token", &redact(&self.token))
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    /// Create client for the production OpenAI API
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(OPENAI_BASE_URL, token)
    }

    /// Create client against an alternate host
    pub fn with_base_url(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .map_err(|e| ReflectError::network(format!("Failed to create HTTP client: {}", e)))?;

        info!("OpenAI client initialized: {}", base_url);
        Ok(Self {
            base_url,
            token: token.into(),
            client,
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ChatClient for OpenAiClient {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatCompletionResponse> {
        let url = self.completions_url();

        debug!(
            "Sending chat completion request - Model: {}, Messages: {}",
            request.model,
            request.messages.len()
        );

        // `json` also sets Content-Type: application/json
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await
            .map_err(|e| ReflectError::network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ReflectError::network(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            return Err(ReflectError::api(status.as_u16(), body));
        }

        let result: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| ReflectError::decode(format!("Failed to parse response: {}", e)))?;

        debug!("Received {} completion choices", result.choices.len());
        Ok(result)
    }
}
