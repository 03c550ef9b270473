//! Prompt templates for quote reflection

use crate::types::{ChatMessage, ChatRequest, Role};

/// Completion model
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// System instruction for reflection prompts
pub const SYSTEM_PROMPT: &str = "Act as someone who is helping the user explore their inner thoughts. When the user provides a quote with some meaning, respond succinctly with a list of 4 thought-provoking questions and 1 suggestion about how to look at the quote from a different perspective so that the user can think about the quote deeply and identify why it resonates or how it might apply to their current situation. It should resemble the following output.\n\nHere's the quote for your reflection: \n\t[Repeat Quote]\nHere are some questions you might consider and a suggestion for how you can think about it differently.\n[Questions & Suggestions]";

/// User message carrying the quote verbatim
pub fn user_prompt(quote: &str) -> String {
    format!("Quote: {}", quote)
}

/// Two-message reflection conversation with fixed sampling parameters
pub fn reflection_request(model: &str, quote: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage::text(Role::System, SYSTEM_PROMPT),
            ChatMessage::text(Role::User, user_prompt(quote)),
        ],
        temperature: 1.0,
        max_tokens: 256,
        top_p: 1.0,
        frequency_penalty: 0.0,
        presence_penalty: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_prompt_is_verbatim() {
        assert_eq!(user_prompt("  Stay hungry.\n"), "Quote:   Stay hungry.\n");
        assert_eq!(user_prompt(""), "Quote: ");
    }

    #[test]
    fn test_reflection_request() {
        let request = reflection_request(DEFAULT_MODEL, "Know thyself.");

        assert_eq!(request.model, "gpt-3.5-turbo");
        assert_eq!(request.max_tokens, 256);
        assert_eq!(request.temperature, 1.0);
        assert_eq!(request.top_p, 1.0);
        assert_eq!(request.frequency_penalty, 0.0);
        assert_eq!(request.presence_penalty, 0.0);

        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(request.messages[0].content[0].text, SYSTEM_PROMPT);
        assert_eq!(request.messages[1].role, Role::User);
        assert_eq!(request.messages[1].content[0].text, "Quote: Know thyself.");
        assert_eq!(request.messages[1].content[0].kind, "text");
    }
}
