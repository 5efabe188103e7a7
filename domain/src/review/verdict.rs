//! Verdict type for sycophancy review
//!
//! This module defines the structured judgment the checker produces for each
//! candidate response.

use serde::{Deserialize, Serialize};

/// A single sycophancy judgment from the checker (Value Object)
///
/// The checker model is asked to answer with exactly this JSON shape
/// (camelCase keys on the wire):
///
/// ```json
/// {"isSycophantic": true, "confidence": 0.9, "reason": "...", "feedback": "..."}
/// ```
///
/// # Example
///
/// ```
/// use candor_domain::Verdict;
///
/// let rejection = Verdict::flagged(0.9, "unearned praise", "analyze the plan instead");
/// assert!(rejection.is_sycophantic);
/// assert_eq!(rejection.effective_feedback(), "analyze the plan instead");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// Whether the candidate was judged sycophantic.
    pub is_sycophantic: bool,
    /// Confidence level (0.0 to 1.0).
    pub confidence: f64,
    /// Brief explanation of the judgment.
    #[serde(default)]
    pub reason: String,
    /// Specific guidance for regeneration; empty when not sycophantic.
    #[serde(default)]
    pub feedback: String,
}

impl Verdict {
    /// Create a rejection verdict
    pub fn flagged(
        confidence: f64,
        reason: impl Into<String>,
        feedback: impl Into<String>,
    ) -> Self {
        Self {
            is_sycophantic: true,
            confidence: confidence.clamp(0.0, 1.0),
            reason: reason.into(),
            feedback: feedback.into(),
        }
    }

    /// Create an approval verdict
    pub fn clean(confidence: f64, reason: impl Into<String>) -> Self {
        Self {
            is_sycophantic: false,
            confidence: confidence.clamp(0.0, 1.0),
            reason: reason.into(),
            feedback: String::new(),
        }
    }

    /// The default verdict when the checker's output cannot be interpreted
    /// or its backend call fails.
    ///
    /// Deliberately "not sycophantic": a formatting glitch in the judgment
    /// call must never block a user-visible response.
    pub fn indeterminate() -> Self {
        Self {
            is_sycophantic: false,
            confidence: 0.5,
            reason: "unable to parse evaluation".to_string(),
            feedback: String::new(),
        }
    }

    /// Clamp confidence into the valid range.
    pub fn normalized(mut self) -> Self {
        self.confidence = self.confidence.clamp(0.0, 1.0);
        self
    }

    /// Feedback to carry into the next attempt: the explicit feedback text
    /// if present, otherwise the reason.
    pub fn effective_feedback(&self) -> &str {
        if self.feedback.is_empty() {
            &self.reason
        } else {
            &self.feedback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flagged() {
        let verdict = Verdict::flagged(0.85, "empty validation", "name a concrete weakness");
        assert!(verdict.is_sycophantic);
        assert_eq!(verdict.confidence, 0.85);
        assert_eq!(verdict.feedback, "name a concrete weakness");
    }

    #[test]
    fn test_clean_has_no_feedback() {
        let verdict = Verdict::clean(0.9, "substantive and direct");
        assert!(!verdict.is_sycophantic);
        assert!(verdict.feedback.is_empty());
    }

    #[test]
    fn test_confidence_clamped() {
        assert_eq!(Verdict::flagged(1.5, "", "").confidence, 1.0);
        assert_eq!(Verdict::clean(-0.2, "").confidence, 0.0);
    }

    #[test]
    fn test_indeterminate() {
        let verdict = Verdict::indeterminate();
        assert!(!verdict.is_sycophantic);
        assert_eq!(verdict.confidence, 0.5);
        assert_eq!(verdict.reason, "unable to parse evaluation");
        assert!(verdict.feedback.is_empty());
    }

    #[test]
    fn test_effective_feedback_prefers_feedback() {
        let verdict = Verdict::flagged(0.8, "the reason", "the feedback");
        assert_eq!(verdict.effective_feedback(), "the feedback");

        let verdict = Verdict::flagged(0.8, "the reason", "");
        assert_eq!(verdict.effective_feedback(), "the reason");
    }

    #[test]
    fn test_deserializes_camel_case() {
        let json = r#"{"isSycophantic":true,"confidence":0.9,"reason":"flattery","feedback":"be direct"}"#;
        let verdict: Verdict = serde_json::from_str(json).unwrap();
        assert!(verdict.is_sycophantic);
        assert_eq!(verdict.reason, "flattery");
    }

    #[test]
    fn test_deserializes_with_missing_optional_fields() {
        let json = r#"{"isSycophantic":false,"confidence":0.7}"#;
        let verdict: Verdict = serde_json::from_str(json).unwrap();
        assert!(verdict.reason.is_empty());
        assert!(verdict.feedback.is_empty());
    }
}
