use reflect_common::Result;
use crate::types::{ChatCompletionResponse, ChatRequest};
use async_trait::async_trait;

/// Common trait for chat completion clients
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send a chat request and decode the completion
    async fn complete(&self, request: &ChatRequest) -> Result<ChatCompletionResponse>;
}
