use thiserror::Error;

// Failures reported by the outbound provider adapters.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("upstream error {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error("response decode error: {0}")]
    Decode(String),
    #[error("provider returned no text")]
    EmptyResponse,
}

// Request-level failures. Handlers map each variant to an HTTP status.
#[derive(Debug, Error)]
pub enum RelayError {
    // Caller's fault: missing or malformed input (400).
    #[error("{0}")]
    InvalidInput(String),
    // A required API key is not configured (500).
    #[error("{0}")]
    Configuration(String),
    // An external provider call failed (500).
    #[error("{0}")]
    UpstreamFailure(String),
}

impl RelayError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn upstream(err: impl std::fmt::Display) -> Self {
        Self::UpstreamFailure(err.to_string())
    }
}
