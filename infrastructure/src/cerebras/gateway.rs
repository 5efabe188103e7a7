//! HTTP gateway to an OpenAI-compatible chat completions backend.
//!
//! One request, one generation. No retries here — retry policy belongs
//! entirely to the chat loop.

use super::protocol::{ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;
use candor_application::{GatewayError, LlmGateway};
use candor_domain::GenerationRequest;
use reqwest::Client;
use tracing::debug;

/// Gateway speaking the OpenAI-compatible chat completions API.
///
/// Works against Cerebras and any other backend exposing the same
/// `/chat/completions` endpoint.
pub struct CerebrasGateway {
    client: Client,
    /// Pre-computed chat completions URL.
    chat_url: String,
    api_key: Option<String>,
}

impl CerebrasGateway {
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        let base = base_url.trim_end_matches('/');
        let chat_url = if base.contains("chat/completions") {
            base.to_string()
        } else {
            format!("{base}/chat/completions")
        };

        Self {
            client: Client::new(),
            chat_url,
            api_key: api_key.map(ToString::to_string),
        }
    }

    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }
}

#[async_trait]
impl LlmGateway for CerebrasGateway {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GatewayError> {
        let payload = ChatCompletionRequest::from(request);

        let mut http_request = self.client.post(&self.chat_url).json(&payload);
        if let Some(key) = &self.api_key {
            http_request = http_request.bearer_auth(key);
        }

        let response = http_request
            .send()
            .await
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedPayload(e.to_string()))?;

        if let Some(usage) = &completion.usage {
            debug!(
                "Completion used {} prompt + {} completion tokens",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        completion.into_text().ok_or(GatewayError::MissingContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use candor_domain::{Model, Turn};
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_request() -> GenerationRequest {
        GenerationRequest::new(
            vec![Turn::system("be honest"), Turn::user("hello")],
            Model::GptOss120b,
        )
    }

    #[test]
    fn test_chat_url_appends_path() {
        let gateway = CerebrasGateway::new("https://api.cerebras.ai/v1", None);
        assert_eq!(gateway.chat_url(), "https://api.cerebras.ai/v1/chat/completions");
    }

    #[test]
    fn test_chat_url_strips_trailing_slash() {
        let gateway = CerebrasGateway::new("https://api.cerebras.ai/v1/", None);
        assert_eq!(gateway.chat_url(), "https://api.cerebras.ai/v1/chat/completions");
    }

    #[test]
    fn test_chat_url_full_endpoint_used_as_is() {
        let gateway =
            CerebrasGateway::new("https://proxy.example.com/llm/chat/completions", None);
        assert_eq!(
            gateway.chat_url(),
            "https://proxy.example.com/llm/chat/completions"
        );
    }

    #[tokio::test]
    async fn test_generate_returns_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-oss-120b",
                "messages": [
                    {"role": "system", "content": "be honest"},
                    {"role": "user", "content": "hello"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": "Hi there."}}],
                "usage": {"prompt_tokens": 10, "completion_tokens": 4, "total_tokens": 14}
            })))
            .mount(&server)
            .await;

        let gateway = CerebrasGateway::new(&server.uri(), Some("test-key"));
        let text = gateway.generate(&sample_request()).await.unwrap();
        assert_eq!(text, "Hi there.");
    }

    #[tokio::test]
    async fn test_non_success_status_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let gateway = CerebrasGateway::new(&server.uri(), Some("key"));
        let error = gateway.generate(&sample_request()).await.unwrap_err();

        assert!(matches!(
            error,
            GatewayError::Status { status: 503, .. }
        ));
        assert!(error.is_transport());
    }

    #[tokio::test]
    async fn test_malformed_body_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let gateway = CerebrasGateway::new(&server.uri(), Some("key"));
        let error = gateway.generate(&sample_request()).await.unwrap_err();

        assert!(matches!(error, GatewayError::MalformedPayload(_)));
        assert!(error.is_transport());
    }

    #[tokio::test]
    async fn test_missing_content_is_protocol_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&server)
            .await;

        let gateway = CerebrasGateway::new(&server.uri(), Some("key"));
        let error = gateway.generate(&sample_request()).await.unwrap_err();

        assert!(matches!(error, GatewayError::MissingContent));
        assert!(!error.is_transport());
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_connection_error() {
        // Port 1 is essentially never listening
        let gateway = CerebrasGateway::new("http://127.0.0.1:1", Some("key"));
        let error = gateway.generate(&sample_request()).await.unwrap_err();
        assert!(matches!(error, GatewayError::Connection(_)));
    }
}
