//! Wire types for the OpenAI-compatible chat completions API.

use candor_domain::GenerationRequest;
use serde::{Deserialize, Serialize};

/// Outgoing chat completions request body.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<WireMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
pub struct WireMessage {
    pub role: &'static str,
    pub content: String,
}

impl From<&GenerationRequest> for ChatCompletionRequest {
    fn from(request: &GenerationRequest) -> Self {
        Self {
            model: request.model.to_string(),
            messages: request
                .turns
                .iter()
                .map(|turn| WireMessage {
                    role: turn.role.as_str(),
                    content: turn.content.clone(),
                })
                .collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

/// Incoming chat completions response body.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

impl ChatCompletionResponse {
    /// The generated text of the first choice, or `None` when the response
    /// is structurally valid but carries no content.
    pub fn into_text(mut self) -> Option<String> {
        if self.choices.is_empty() {
            return None;
        }
        let content = self.choices.remove(0).message.content;
        if content.trim().is_empty() {
            None
        } else {
            Some(content)
        }
    }
}
