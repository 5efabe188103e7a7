//! Loop outcome value object and fixed fallback messages

use serde::{Deserialize, Serialize};

/// Fixed message returned when every attempt produced a sycophantic candidate.
///
/// Never model-generated; reproduced verbatim on every quality-exhausted run.
pub const QUALITY_FALLBACK_TEXT: &str = "I'm having trouble generating a response that meets my strict standards for objectivity. Please try rephrasing your query.";

/// Fixed message returned when the backend stays unreachable.
pub const TRANSPORT_FALLBACK_TEXT: &str =
    "Network error: Unable to reach AI services. Please try again later.";

/// Result of one quality-controlled generation run (Value Object)
///
/// This is the only artifact the loop hands back to its caller. Every run
/// resolves to one of three shapes:
///
/// - [`ChatOutcome::accepted`] — a candidate passed the checker
/// - [`ChatOutcome::exhausted`] — the attempt budget ran out on rejections
/// - [`ChatOutcome::transport_fallback`] — the backend stayed unreachable
///
/// `is_fallback == true` implies `response` is one of the two fixed fallback
/// texts, never a model-generated candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatOutcome {
    /// Final response text handed to the caller.
    pub response: String,
    /// Number of writer/checker cycles consumed (>= 1).
    pub attempts: u32,
    /// Whether any attempt was rejected by the checker.
    pub was_rejected: bool,
    /// Whether `response` is a fixed fallback message.
    pub is_fallback: bool,
}

impl ChatOutcome {
    /// An accepted candidate — the only success exit.
    pub fn accepted(response: impl Into<String>, attempts: u32, was_rejected: bool) -> Self {
        Self {
            response: response.into(),
            attempts,
            was_rejected,
            is_fallback: false,
        }
    }

    /// Attempt budget exhausted: every candidate was rejected.
    pub fn exhausted(attempts: u32) -> Self {
        Self {
            response: QUALITY_FALLBACK_TEXT.to_string(),
            attempts,
            was_rejected: true,
            is_fallback: true,
        }
    }

    /// Backend unreachable past the transport failure threshold.
    ///
    /// `was_rejected` is always false here, even if earlier attempts were
    /// rejected before the backend went away.
    pub fn transport_fallback(attempts: u32) -> Self {
        Self {
            response: TRANSPORT_FALLBACK_TEXT.to_string(),
            attempts,
            was_rejected: false,
            is_fallback: true,
        }
    }
}
