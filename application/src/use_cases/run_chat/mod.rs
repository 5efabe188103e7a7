//! Run Chat use case.
//!
//! Executes the bounded dual-agent quality-control loop: the writer drafts a
//! candidate, the checker judges it, and rejection feedback is carried into
//! the next draft until a candidate is accepted or the budget runs out.
//!
//! The loop is an explicit state machine:
//!
//! ```text
//! GENERATING -> EVALUATING -> ACCEPTED
//!                          -> RETRYING -> GENERATING
//! GENERATING (transport error, attempt >= threshold) -> TRANSPORT_FALLBACK
//! RETRYING (budget exhausted)                        -> EXHAUSTED
//! ```
//!
//! Attempts are strictly sequential — each attempt's feedback depends on the
//! previous attempt's verdict, so no two gateway calls for one request are
//! ever in flight at once. Every terminal state resolves to a well-formed
//! [`ChatOutcome`]; the only error a caller can see is cancellation.

mod checker;
mod types;
mod writer;

pub use checker::LlmResponseJudge;
pub use types::{RunChatError, RunChatInput};
pub use writer::ResponseWriter;

use crate::config::ExecutionParams;
use crate::ports::attempt_logger::{AttemptEvent, AttemptLogger, NoAttemptLogger};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{ChatProgressNotifier, NoProgress};
use crate::ports::response_judge::ResponseJudge;
use candor_domain::util::truncate_str;
use candor_domain::{ChatOutcome, ModelConfig};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use types::LoopState;

/// Check if cancellation has been requested.
fn check_cancelled(token: &Option<CancellationToken>) -> Result<(), RunChatError> {
    if let Some(token) = token
        && token.is_cancelled()
    {
        return Err(RunChatError::Cancelled);
    }
    Ok(())
}

/// Use case for running one quality-controlled generation.
///
/// This is the single entry point the surrounding layer consumes: it takes a
/// user message plus prior history and returns a [`ChatOutcome`] for the
/// caller to persist.
pub struct RunChatUseCase {
    writer: ResponseWriter,
    judge: Arc<dyn ResponseJudge>,
    params: ExecutionParams,
    attempt_logger: Arc<dyn AttemptLogger>,
    cancellation_token: Option<CancellationToken>,
}

impl RunChatUseCase {
    /// Wire the writer and the LLM-backed checker from one gateway.
    pub fn new(gateway: Arc<dyn LlmGateway>, models: ModelConfig, params: ExecutionParams) -> Self {
        let writer = ResponseWriter::new(
            Arc::clone(&gateway),
            models.writer.clone(),
            params.writer_sampling,
        );
        let judge: Arc<dyn ResponseJudge> = Arc::new(LlmResponseJudge::new(
            gateway,
            models.checker,
            params.checker_sampling,
        ));

        Self {
            writer,
            judge,
            params,
            attempt_logger: Arc::new(NoAttemptLogger),
            cancellation_token: None,
        }
    }

    /// Substitute the judgment capability (e.g. a deterministic stub).
    pub fn with_judge(mut self, judge: Arc<dyn ResponseJudge>) -> Self {
        self.judge = judge;
        self
    }

    /// Record the attempt trail to a structured log.
    pub fn with_attempt_logger(mut self, logger: Arc<dyn AttemptLogger>) -> Self {
        self.attempt_logger = logger;
        self
    }

    /// Abandon the loop when the caller goes away.
    pub fn with_cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Execute the loop with default (no-op) progress.
    pub async fn execute(&self, input: RunChatInput) -> Result<ChatOutcome, RunChatError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the loop with progress callbacks.
    pub async fn execute_with_progress(
        &self,
        input: RunChatInput,
        progress: &dyn ChatProgressNotifier,
    ) -> Result<ChatOutcome, RunChatError> {
        info!(
            "Starting quality-controlled generation: {}",
            truncate_str(&input.message, 100)
        );

        let mut state = LoopState::default();

        while state.attempt < self.params.max_attempts {
            state.attempt += 1;
            check_cancelled(&self.cancellation_token)?;
            progress.on_attempt_start(state.attempt, self.params.max_attempts);
            debug!("Attempt {}/{}", state.attempt, self.params.max_attempts);

            // Step 1: draft a candidate, carrying feedback from the last rejection
            let candidate = match self
                .writer
                .draft(&input.message, &input.history, state.feedback.as_deref())
                .await
            {
                Ok(candidate) => candidate,
                Err(e) => {
                    warn!("Attempt {} failed before evaluation: {}", state.attempt, e);
                    self.attempt_logger.record(AttemptEvent::GenerationFailed {
                        attempt: state.attempt,
                        error: e.to_string(),
                    });
                    progress.on_attempt_failed(state.attempt, &e.to_string());

                    // Don't burn the whole budget chasing a down backend
                    if state.attempt >= self.params.transport_failure_threshold {
                        let outcome = ChatOutcome::transport_fallback(state.attempt);
                        self.resolve(&outcome, progress);
                        return Ok(outcome);
                    }
                    // Failed attempt is consumed; feedback (if any) survives
                    continue;
                }
            };

            self.attempt_logger.record(AttemptEvent::CandidateDrafted {
                attempt: state.attempt,
                bytes: candidate.len(),
            });

            // Step 2: judge the candidate just drafted
            let verdict = self.judge.evaluate(&input.message, &candidate).await;
            info!(
                "Sycophancy check: {} (confidence: {})",
                if verdict.is_sycophantic { "REJECTED" } else { "APPROVED" },
                verdict.confidence
            );
            self.attempt_logger.record(AttemptEvent::VerdictReached {
                attempt: state.attempt,
                is_sycophantic: verdict.is_sycophantic,
                confidence: verdict.confidence,
                reason: verdict.reason.clone(),
            });
            progress.on_candidate_evaluated(state.attempt, &verdict);

            // Step 3: accept — the only success exit
            if !verdict.is_sycophantic {
                let outcome = ChatOutcome::accepted(candidate, state.attempt, state.was_rejected);
                self.resolve(&outcome, progress);
                return Ok(outcome);
            }

            // Step 4: rejected — carry feedback into the next attempt
            state.was_rejected = true;
            state.feedback = Some(verdict.effective_feedback().to_string());
            debug!(
                "Regenerating with feedback: {}",
                state.feedback.as_deref().unwrap_or_default()
            );
        }

        warn!(
            "All {} attempts exhausted, returning fallback",
            self.params.max_attempts
        );
        let outcome = ChatOutcome::exhausted(state.attempt);
        self.resolve(&outcome, progress);
        Ok(outcome)
    }

    fn resolve(&self, outcome: &ChatOutcome, progress: &dyn ChatProgressNotifier) {
        self.attempt_logger.record(AttemptEvent::outcome(outcome));
        progress.on_outcome(outcome);
    }
}
