use reflect_common::{ReflectError, Result};
use tracing::{debug, info};

use crate::llm_trait::ChatClient;
use crate::prompts::{reflection_request, DEFAULT_MODEL};

/// Turns a quote into a reflective writing prompt
pub struct ReflectionGenerator<C: ChatClient> {
    client: C,
    model: String,
}

impl<C: ChatClient> ReflectionGenerator<C> {
    /// Create generator using the default model
    pub fn new(client: C) -> Self {
        Self::with_model(client, DEFAULT_MODEL)
    }

    /// Create generator with a specific model
    pub fn with_model(client: C, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Generate the reflection text for `quote`
    pub async fn generate(&self, quote: &str) -> Result<String> {
        info!("Generating reflection - Quote length: {} chars", quote.len());

        let request = reflection_request(&self.model, quote);
        let response = self.client.complete(&request).await?;

        let content = response.first_content().ok_or(ReflectError::NoCompletion)?;
        debug!("Reflection generated - Length: {}", content.len());

        Ok(content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::OpenAiClient;
    use crate::prompts::SYSTEM_PROMPT;
    use crate::types::{ChatCompletionResponse, ChatRequest, Role};
    use async_trait::async_trait;
    use mockito::{Matcher, Server};
    use serde_json::json;
    use std::sync::Mutex;

    /// Records the request and replies with a canned body
    struct FakeClient {
        reply: &'static str,
        seen: Mutex<Vec<ChatRequest>>,
    }

    impl FakeClient {
        fn new(reply: &'static str) -> Self {
            Self {
                reply,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ChatClient for FakeClient {
        async fn complete(&self, request: &ChatRequest) -> Result<ChatCompletionResponse> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(serde_json::from_str(self.reply)?)
        }
    }

    #[tokio::test]
    async fn test_generate_sends_two_messages() {
        let quote = "  The obstacle is the way.  ";
        let generator = ReflectionGenerator::new(FakeClient::new(
            r#"{"choices":[{"message":{"content":"reflect"},"finish_reason":"stop","index":0}]}"#,
        ));

        assert_eq!(generator.generate(quote).await.unwrap(), "reflect");

        let seen = generator.client.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let messages = &seen[0].messages;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content[0].text, SYSTEM_PROMPT);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content[0].text, format!("Quote: {}", quote));
    }

    #[tokio::test]
    async fn test_zero_choices_is_no_completion() {
        let generator = ReflectionGenerator::new(FakeClient::new(r#"{"choices":[]}"#));
        let err = generator.generate("quote").await.unwrap_err();
        assert!(matches!(err, ReflectError::NoCompletion), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_generate_against_mock_server() {
        let mut server = Server::new_async().await;
        let expected_body = json!({
            "model": "gpt-3.5-turbo",
            "messages": [
                {"role": "system", "content": [{"type": "text", "text": SYSTEM_PROMPT}]},
                {"role": "user", "content": [{"type": "text", "text": "Quote: Less, but better."}]}
            ],
            "temperature": 1.0,
            "max_tokens": 256,
            "top_p": 1.0,
            "frequency_penalty": 0.0,
            "presence_penalty": 0.0
        });
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .match_body(Matcher::Json(expected_body))
            .with_status(200)
            .with_body(r#"{"choices":[{"message":{"content":"Here's the quote..."}, "finish_reason":"stop","index":0}]}"#)
            .expect(1)
            .create_async()
            .await;

        let client = OpenAiClient::with_base_url(server.url(), "sk-test").unwrap();
        let generator = ReflectionGenerator::new(client);
        let reflection = generator.generate("Less, but better.").await.unwrap();

        assert_eq!(reflection, "Here's the quote...");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_empty_quote_is_sent_as_is() {
        let generator = ReflectionGenerator::with_model(
            FakeClient::new(r#"{"choices":[{"message":{"content":"x"}}]}"#),
            "gpt-4o-mini",
        );
        generator.generate("").await.unwrap();

        let seen = generator.client.seen.lock().unwrap();
        assert_eq!(seen[0].model, "gpt-4o-mini");
        assert_eq!(seen[0].messages[1].content[0].text, "Quote: ");
    }
}
