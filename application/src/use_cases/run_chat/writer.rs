//! Response writer for the RunChat use case.
//!
//! Assembles the generation transcript and calls the gateway. The transcript
//! order is fixed: policy system turn, prior history, corrective feedback
//! (retries only), then the new user turn.

use crate::config::SamplingParams;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use candor_domain::{GenerationRequest, Model, Role, Turn, WriterPrompt};
use std::sync::Arc;

/// Drafts candidate responses under the anti-sycophancy policy.
pub struct ResponseWriter {
    gateway: Arc<dyn LlmGateway>,
    model: Model,
    sampling: SamplingParams,
}

impl ResponseWriter {
    pub fn new(gateway: Arc<dyn LlmGateway>, model: Model, sampling: SamplingParams) -> Self {
        Self {
            gateway,
            model,
            sampling,
        }
    }

    /// Draft one candidate. Fails only by propagating gateway errors.
    pub async fn draft(
        &self,
        user_message: &str,
        history: &[Turn],
        feedback: Option<&str>,
    ) -> Result<String, GatewayError> {
        let turns = build_transcript(user_message, history, feedback);
        let request = GenerationRequest::new(turns, self.model.clone())
            .with_temperature(self.sampling.temperature)
            .with_max_tokens(self.sampling.max_tokens);

        self.gateway.generate(&request).await
    }
}

/// Assemble the writer transcript.
///
/// The user turn is appended only when history does not already end with the
/// same message, guarding against duplicate insertion when the caller's
/// history already includes it.
pub(crate) fn build_transcript(
    user_message: &str,
    history: &[Turn],
    feedback: Option<&str>,
) -> Vec<Turn> {
    let mut turns = Vec::with_capacity(history.len() + 3);

    turns.push(Turn::system(WriterPrompt::system()));
    turns.extend_from_slice(history);

    if let Some(feedback) = feedback {
        turns.push(Turn::system(WriterPrompt::corrective_feedback(feedback)));
    }

    let already_last = history
        .last()
        .is_some_and(|turn| turn.role == Role::User && turn.content == user_message);
    if !already_last {
        turns.push(Turn::user(user_message));
    }

    turns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_attempt_transcript_order() {
        let history = vec![Turn::user("earlier question"), Turn::assistant("earlier answer")];
        let turns = build_transcript("new question", &history, None);

        assert_eq!(turns.len(), 4);
        assert_eq!(turns[0].role, Role::System);
        assert_eq!(turns[0].content, WriterPrompt::system());
        assert_eq!(turns[1], Turn::user("earlier question"));
        assert_eq!(turns[2], Turn::assistant("earlier answer"));
        assert_eq!(turns[3], Turn::user("new question"));
    }

    #[test]
    fn test_retry_inserts_feedback_before_user_turn() {
        let turns = build_transcript("question", &[], Some("unearned praise with no analysis"));

        assert_eq!(turns.len(), 3);
        assert_eq!(turns[1].role, Role::System);
        assert!(turns[1].content.contains("unearned praise with no analysis"));
        assert_eq!(turns[2], Turn::user("question"));
    }

    #[test]
    fn test_no_feedback_turn_on_first_attempt() {
        let turns = build_transcript("question", &[], None);
        assert_eq!(turns.len(), 2);
    }

    #[test]
    fn test_user_turn_not_duplicated() {
        let history = vec![Turn::assistant("hi"), Turn::user("question")];
        let turns = build_transcript("question", &history, None);

        let user_turns = turns
            .iter()
            .filter(|t| t.role == Role::User && t.content == "question")
            .count();
        assert_eq!(user_turns, 1);
        assert_eq!(turns.last().unwrap(), &Turn::user("question"));
    }

    #[test]
    fn test_matching_assistant_turn_does_not_suppress_user_turn() {
        // Same content but wrong role — the user turn must still be appended
        let history = vec![Turn::assistant("question")];
        let turns = build_transcript("question", &history, None);
        assert_eq!(turns.last().unwrap(), &Turn::user("question"));
        assert_eq!(turns.len(), 3);
    }
}
