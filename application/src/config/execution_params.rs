//! Execution parameters — chat loop control.
//!
//! [`ExecutionParams`] groups the static parameters that bound the
//! generate/evaluate loop in
//! [`RunChatUseCase`](crate::use_cases::run_chat::RunChatUseCase).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};

/// Chat loop control parameters.
///
/// Controls the attempt budget, the transport short-circuit, and the
/// sampling used for the writer and checker calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Maximum number of writer/checker cycles per request.
    pub max_attempts: u32,
    /// Attempt count at which a transport error stops the loop instead of
    /// consuming the remaining budget against a down backend.
    pub transport_failure_threshold: u32,
    /// Sampling for writer calls. Moderate randomness so retries don't
    /// degenerate into the same rejected candidate.
    pub writer_sampling: SamplingParams,
    /// Sampling for checker calls. Near-deterministic so the same exchange
    /// judges the same way.
    pub checker_sampling: SamplingParams,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            transport_failure_threshold: 3,
            writer_sampling: SamplingParams::writer_default(),
            checker_sampling: SamplingParams::checker_default(),
        }
    }
}

impl ExecutionParams {
    // ==================== Builder Methods ====================

    pub fn with_max_attempts(mut self, max: u32) -> Self {
        self.max_attempts = max;
        self
    }

    pub fn with_transport_failure_threshold(mut self, threshold: u32) -> Self {
        self.transport_failure_threshold = threshold;
        self
    }

    pub fn with_writer_sampling(mut self, sampling: SamplingParams) -> Self {
        self.writer_sampling = sampling;
        self
    }

    pub fn with_checker_sampling(mut self, sampling: SamplingParams) -> Self {
        self.checker_sampling = sampling;
        self
    }
}

/// Sampling settings for one gateway call role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    pub temperature: f64,
    pub max_tokens: u32,
}

impl SamplingParams {
    pub fn new(temperature: f64, max_tokens: u32) -> Self {
        Self {
            temperature,
            max_tokens,
        }
    }

    /// Writer default: room to phrase a full response, non-zero temperature.
    pub fn writer_default() -> Self {
        Self::new(0.7, 1024)
    }

    /// Checker default: short structured output, low temperature.
    pub fn checker_default() -> Self {
        Self::new(0.3, 300)
    }
}
