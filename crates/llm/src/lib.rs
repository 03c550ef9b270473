//! Reflection prompt generation
//!
//! OpenAI chat completion client and quote reflection prompts

mod client;
mod llm_trait;
mod prompts;
mod reflection;
mod types;

pub use client::{OpenAiClient, OPENAI_BASE_URL};
pub use llm_trait::ChatClient;
pub use prompts::{reflection_request, user_prompt, DEFAULT_MODEL, SYSTEM_PROMPT};
pub use reflection::ReflectionGenerator;
pub use types::{ChatCompletionResponse, ChatMessage, ChatRequest, Choice, ChoiceMessage, ContentPart, Role};
