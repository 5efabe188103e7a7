//! Response judge port
//!
//! The "is this sycophantic" judgment is a pluggable capability: the loop
//! fixes the contract of the verdict, not its content. Tests substitute a
//! deterministic stub; the production implementation is
//! [`LlmResponseJudge`](crate::use_cases::run_chat::LlmResponseJudge).

use async_trait::async_trait;
use candor_domain::Verdict;

/// Judges one (user message, candidate response) pair.
///
/// Evaluation is infallible by contract: implementations absorb parse and
/// backend failures into [`Verdict::indeterminate`] so a broken judge never
/// blocks a user-visible response.
#[async_trait]
pub trait ResponseJudge: Send + Sync {
    async fn evaluate(&self, user_message: &str, candidate: &str) -> Verdict;
}
