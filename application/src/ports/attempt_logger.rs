//! Port for structured attempt logging.
//!
//! Defines the [`AttemptLogger`] trait for recording the attempt trail of a
//! chat loop run (candidates drafted, verdicts reached, outcomes resolved)
//! to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures a
//! machine-readable trail (e.g. JSONL) for offline inspection of why a
//! response was accepted or regenerated.

use candor_domain::ChatOutcome;
use serde::Serialize;

/// A structured event in the attempt trail.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AttemptEvent {
    /// The writer produced a candidate.
    CandidateDrafted { attempt: u32, bytes: usize },
    /// The checker judged a candidate.
    VerdictReached {
        attempt: u32,
        is_sycophantic: bool,
        confidence: f64,
        reason: String,
    },
    /// The attempt failed before producing a verdict.
    GenerationFailed { attempt: u32, error: String },
    /// The loop resolved.
    OutcomeResolved {
        attempts: u32,
        was_rejected: bool,
        is_fallback: bool,
    },
}

impl AttemptEvent {
    pub fn outcome(outcome: &ChatOutcome) -> Self {
        Self::OutcomeResolved {
            attempts: outcome.attempts,
            was_rejected: outcome.was_rejected,
            is_fallback: outcome.is_fallback,
        }
    }
}

/// Port for recording attempt events to a structured log.
///
/// `record` is intentionally synchronous and non-fallible to avoid
/// disrupting the loop — logging failures are silently ignored.
pub trait AttemptLogger: Send + Sync {
    fn record(&self, event: AttemptEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoAttemptLogger;

impl AttemptLogger for NoAttemptLogger {
    fn record(&self, _event: AttemptEvent) {}
}
