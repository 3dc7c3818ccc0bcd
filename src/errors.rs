use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Configuration(String),

    #[error("Failed to send HTTP request: {0}")]
    Transport(String),

    #[error("Failed to parse completion response: {0}")]
    Decode(String),

    #[error("no summary generated")]
    NoSummary,

    #[error("invalid response format")]
    InvalidFormat,

    #[error("summary not found in response")]
    MissingSummary,
}

impl GatewayError {
    /// HTTP status the error surfaces as. Only malformed inbound bodies are
    /// the caller's fault; everything downstream is a 500.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::BadRequest(_) => 400,
            _ => 500,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(error: reqwest::Error) -> Self {
        GatewayError::Transport(error.to_string())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(error: serde_json::Error) -> Self {
        GatewayError::Decode(error.to_string())
    }
}
