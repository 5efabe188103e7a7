//! LLM-backed sycophancy checker for the RunChat use case.
//!
//! Implements the [`ResponseJudge`] port by asking the backend to classify
//! one (user message, candidate) pair, then recovering the structured
//! verdict from its output.

use crate::config::SamplingParams;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::response_judge::ResponseJudge;
use async_trait::async_trait;
use candor_domain::{CheckerPrompt, GenerationRequest, Model, Turn, Verdict, parse_verdict};
use std::sync::Arc;
use tracing::warn;

/// Judge backed by a second gateway call.
///
/// Infallible: parse failures and backend failures both degrade to
/// [`Verdict::indeterminate`], so a broken checker never blocks the
/// conversation.
pub struct LlmResponseJudge {
    gateway: Arc<dyn LlmGateway>,
    model: Model,
    sampling: SamplingParams,
}

impl LlmResponseJudge {
    pub fn new(gateway: Arc<dyn LlmGateway>, model: Model, sampling: SamplingParams) -> Self {
        Self {
            gateway,
            model,
            sampling,
        }
    }
}

#[async_trait]
impl ResponseJudge for LlmResponseJudge {
    async fn evaluate(&self, user_message: &str, candidate: &str) -> Verdict {
        let request = GenerationRequest::new(
            vec![
                Turn::system(CheckerPrompt::system()),
                Turn::user(CheckerPrompt::analysis(user_message, candidate)),
            ],
            self.model.clone(),
        )
        .with_temperature(self.sampling.temperature)
        .with_max_tokens(self.sampling.max_tokens);

        let raw = match self.gateway.generate(&request).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Checker call failed, assuming not sycophantic: {}", e);
                return Verdict::indeterminate();
            }
        };

        parse_verdict(&raw).unwrap_or_else(|| {
            warn!("Failed to parse checker response, assuming not sycophantic");
            Verdict::indeterminate()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::GatewayError;
    use std::sync::Mutex;

    struct StubGateway {
        reply: Result<String, GatewayError>,
        requests: Mutex<Vec<GenerationRequest>>,
    }

    impl StubGateway {
        fn replying(reply: Result<String, GatewayError>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                requests: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl LlmGateway for StubGateway {
        async fn generate(&self, request: &GenerationRequest) -> Result<String, GatewayError> {
            self.requests.lock().unwrap().push(request.clone());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(GatewayError::MissingContent) => Err(GatewayError::MissingContent),
                Err(e) => Err(GatewayError::Connection(e.to_string())),
            }
        }
    }

    fn judge(gateway: Arc<StubGateway>) -> LlmResponseJudge {
        LlmResponseJudge::new(gateway, Model::default(), SamplingParams::checker_default())
    }

    #[tokio::test]
    async fn test_parses_structured_verdict() {
        let gateway = StubGateway::replying(Ok(
            r#"{"isSycophantic": true, "confidence": 0.9, "reason": "flattery", "feedback": "drop the praise"}"#.to_string(),
        ));
        let verdict = judge(Arc::clone(&gateway))
            .evaluate("Is my plan good?", "Wonderful plan!")
            .await;

        assert!(verdict.is_sycophantic);
        assert_eq!(verdict.feedback, "drop the praise");
    }

    #[tokio::test]
    async fn test_parses_fenced_verdict() {
        let gateway = StubGateway::replying(Ok(
            "```json\n{\"isSycophantic\": false, \"confidence\": 0.8}\n```".to_string(),
        ));
        let verdict = judge(gateway).evaluate("q", "a").await;
        assert!(!verdict.is_sycophantic);
    }

    #[tokio::test]
    async fn test_unparseable_output_degrades_to_indeterminate() {
        let gateway = StubGateway::replying(Ok("I think it is fine.".to_string()));
        let verdict = judge(gateway).evaluate("q", "a").await;
        assert_eq!(verdict, Verdict::indeterminate());
    }

    #[tokio::test]
    async fn test_backend_failure_degrades_to_indeterminate() {
        let gateway = StubGateway::replying(Err(GatewayError::Connection("refused".into())));
        let verdict = judge(gateway).evaluate("q", "a").await;
        assert_eq!(verdict, Verdict::indeterminate());
    }

    #[tokio::test]
    async fn test_request_uses_checker_sampling_and_embeds_exchange() {
        let gateway = StubGateway::replying(Ok(
            r#"{"isSycophantic": false, "confidence": 0.8}"#.to_string(),
        ));
        judge(Arc::clone(&gateway))
            .evaluate("Is my plan good?", "The plan lacks a cost model.")
            .await;

        let requests = gateway.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].temperature, 0.3);
        assert_eq!(requests[0].max_tokens, 300);
        assert_eq!(requests[0].turns.len(), 2);
        assert!(requests[0].turns[1].content.contains("Is my plan good?"));
        assert!(requests[0].turns[1].content.contains("The plan lacks a cost model."));
    }
}
