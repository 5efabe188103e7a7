//! Input, error, and loop-state types for the RunChat use case.

use candor_domain::Turn;
use thiserror::Error;

/// Errors that can escape the chat loop.
///
/// Everything else — rejection, exhaustion, transport failure — resolves to
/// a [`ChatOutcome`](candor_domain::ChatOutcome), never an error.
#[derive(Error, Debug)]
pub enum RunChatError {
    #[error("Operation cancelled")]
    Cancelled,
}

/// Input for the [`RunChatUseCase`](super::RunChatUseCase).
#[derive(Debug, Clone)]
pub struct RunChatInput {
    /// The new user message.
    pub message: String,
    /// Prior conversation turns, oldest first. Loaded and persisted by the
    /// caller — the loop itself stores nothing.
    pub history: Vec<Turn>,
}

impl RunChatInput {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            history: Vec::new(),
        }
    }

    pub fn with_history(mut self, history: Vec<Turn>) -> Self {
        self.history = history;
        self
    }
}

/// Mutable state local to one loop invocation.
///
/// Nothing here survives past a single `execute` call.
#[derive(Debug, Default)]
pub(crate) struct LoopState {
    /// Attempt counter; incremented before each cycle, starts at 1.
    pub attempt: u32,
    /// Feedback from the most recent rejection, carried into the next draft.
    pub feedback: Option<String>,
    /// Whether any attempt was rejected.
    pub was_rejected: bool,
}
