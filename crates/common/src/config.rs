use crate::error::ReflectError;
use crate::logger::parse_log_level;
use std::fmt;

/// Environment variable holding the Readwise access token
pub const READWISE_TOKEN_VAR: &str = "READWISE_TOKEN";

/// Environment variable holding the OpenAI API key
pub const OPENAI_TOKEN_VAR: &str = "OPENAI_TOKEN";

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// Readwise access token
    pub readwise_token: String,

    /// OpenAI API key
    pub openai_token: String,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            readwise_token: String::new(),
            openai_token: String::new(),
            log_level: "warn".to_string(),
        }
    }
}

// Tokens never reach logs.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("readwise_token", &redact(&self.readwise_token))
            .field("openai_token", &redact(&self.openai_token))
            .field("log_level", &self.log_level)
            .finish()
    }
}

/// Placeholder shown instead of a secret token in debug output
pub fn redact(token: &str) -> &'static str {
    if token.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, ReflectError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source and validate it
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ReflectError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            readwise_token: lookup(READWISE_TOKEN_VAR)
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
            openai_token: lookup(OPENAI_TOKEN_VAR)
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ReflectError> {
        if self.readwise_token.is_empty() {
            return Err(ReflectError::config(format!("{} not set", READWISE_TOKEN_VAR)));
        }

        if self.openai_token.is_empty() {
            return Err(ReflectError::config(format!("{} not set", OPENAI_TOKEN_VAR)));
        }

        parse_log_level(&self.log_level)?;

        Ok(())
    }
}
