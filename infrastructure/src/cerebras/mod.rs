//! Cerebras backend adapter
//!
//! Implements the [`LlmGateway`](candor_application::LlmGateway) port over
//! the OpenAI-compatible `/chat/completions` HTTP API.

pub mod gateway;
pub mod protocol;
