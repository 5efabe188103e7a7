//! Progress notification port
//!
//! Defines the interface for reporting progress during a chat loop run.

use candor_domain::{ChatOutcome, Verdict};

/// Callback for progress updates during the generate/evaluate loop.
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, spinner, etc.)
pub trait ChatProgressNotifier: Send + Sync {
    /// Called at the start of each attempt.
    fn on_attempt_start(&self, attempt: u32, max_attempts: u32);

    /// Called when a candidate was evaluated by the checker.
    fn on_candidate_evaluated(&self, attempt: u32, verdict: &Verdict);

    /// Called when an attempt failed before producing a verdict.
    fn on_attempt_failed(&self, attempt: u32, error: &str);

    /// Called once with the resolved outcome.
    fn on_outcome(&self, outcome: &ChatOutcome);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ChatProgressNotifier for NoProgress {
    fn on_attempt_start(&self, _attempt: u32, _max_attempts: u32) {}
    fn on_candidate_evaluated(&self, _attempt: u32, _verdict: &Verdict) {}
    fn on_attempt_failed(&self, _attempt: u32, _error: &str) {}
    fn on_outcome(&self, _outcome: &ChatOutcome) {}
}
