//! Generation Gateway port
//!
//! Defines the interface for calling the external text-generation endpoint.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during a generation call
///
/// Every variant ends up as the same fallback reply in the transcript; the
/// distinction only exists for operator logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("API key is not configured")]
    MissingApiKey,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request failed with status {status}: {body}")]
    Protocol { status: u16, body: String },

    #[error("Failed to decode response body: {0}")]
    Decode(String),

    #[error("Unexpected response shape: {0}")]
    Shape(String),
}

impl GatewayError {
    /// Taxonomy bucket for log records
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::MissingApiKey => "configuration-missing",
            GatewayError::Transport(_) => "transport-failure",
            GatewayError::Protocol { .. } | GatewayError::Decode(_) => "protocol-failure",
            GatewayError::Shape(_) => "shape-failure",
        }
    }
}

/// One outbound call: the fixed persona plus the latest user utterance only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub system_instruction: String,
    pub user_text: String,
}

impl GenerationRequest {
    pub fn new(system_instruction: impl Into<String>, user_text: impl Into<String>) -> Self {
        Self {
            system_instruction: system_instruction.into(),
            user_text: user_text.into(),
        }
    }
}

/// Gateway for text generation
///
/// This port defines how the application layer reaches the model provider.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait GenerationGateway: Send + Sync {
    /// Name of the model the gateway talks to (for logs and the UI header)
    fn model_name(&self) -> &str;

    /// Send one request and return the extracted reply text.
    ///
    /// Exactly one network call per invocation; no retries.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_buckets() {
        assert_eq!(GatewayError::MissingApiKey.kind(), "configuration-missing");
        assert_eq!(
            GatewayError::Transport("dns".into()).kind(),
            "transport-failure"
        );
        assert_eq!(
            GatewayError::Protocol {
                status: 403,
                body: String::new()
            }
            .kind(),
            "protocol-failure"
        );
        assert_eq!(GatewayError::Decode("eof".into()).kind(), "protocol-failure");
        assert_eq!(GatewayError::Shape("candidates".into()).kind(), "shape-failure");
    }

    #[test]
    fn test_protocol_display() {
        let err = GatewayError::Protocol {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed with status 500: boom");
    }
}
