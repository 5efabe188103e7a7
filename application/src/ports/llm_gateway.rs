//! LLM Gateway port
//!
//! Defines the interface for communicating with the chat-completions backend.

use async_trait::async_trait;
use candor_domain::GenerationRequest;
use thiserror::Error;

/// Errors that can occur during a gateway call.
///
/// Transport errors (the backend is unreachable or answered badly) are
/// distinct from protocol errors (a well-formed success response that is
/// missing the generated text). The chat loop's failure threshold counts
/// failed attempts of either kind, but logging and callers can tell them
/// apart via [`GatewayError::is_transport`].
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Response missing generated content")]
    MissingContent,
}

impl GatewayError {
    /// Whether this error is a transport failure (as opposed to a
    /// structurally valid response with no content).
    pub fn is_transport(&self) -> bool {
        !matches!(self, GatewayError::MissingContent)
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer reaches the backend.
/// Implementations (adapters) live in the infrastructure layer.
///
/// One call, one generation: no sessions, no retries. Retry policy belongs
/// entirely to the chat loop.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send a transcript with generation parameters, returning the generated
    /// text.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GatewayError>;
}
