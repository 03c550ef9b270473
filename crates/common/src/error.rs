/// Quote reflection error types
#[derive(Debug, thiserror::Error)]
pub enum ReflectError {
    /// Configuration error (missing or empty token)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network/HTTP transport error
    #[error("Network error: {0}")]
    Network(String),

    /// Remote API answered with a non-success status
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Response body is not valid JSON or has the wrong shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Completion response contained no choices
    #[error("No completion returned")]
    NoCompletion,

    /// System clipboard error
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl ReflectError {
    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Self::Network(msg.into())
    }

    /// Create API status error
    pub fn api<S: Into<String>>(status: u16, body: S) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// Create decode error
    pub fn decode<S: Into<String>>(msg: S) -> Self {
        Self::Decode(msg.into())
    }

    /// Create clipboard error
    pub fn clipboard<S: Into<String>>(msg: S) -> Self {
        Self::Clipboard(msg.into())
    }

    /// Short label for the error category
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Network(_) => "network",
            Self::Api { .. } => "api",
            Self::Decode(_) => "decode",
            Self::NoCompletion => "no_completion",
            Self::Clipboard(_) => "clipboard",
        }
    }
}

impl From<serde_json::Error> for ReflectError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
