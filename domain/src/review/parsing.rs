//! Structured-output recovery for checker responses.
//!
//! These functions recover a JSON value from free-form LLM output. They are
//! pure domain logic — no I/O, no session management, just text recovery.
//! Both are total: parse failure is an expected, silent outcome, never an
//! error.

use crate::review::verdict::Verdict;
use serde_json::Value;

/// Extract a JSON value from model output.
///
/// Tries the whole text first, then the first triple-backtick fenced block
/// (optionally tagged `json`). Returns `None` when neither parses.
///
/// # Examples
///
/// ```
/// use candor_domain::extract_json;
///
/// assert!(extract_json(r#"{"ok": true}"#).is_some());
/// assert!(extract_json("Here you go:\n```json\n{\"ok\": true}\n```").is_some());
/// assert!(extract_json("no structured data here").is_none());
/// ```
pub fn extract_json(text: &str) -> Option<Value> {
    let trimmed = text.trim();

    // Whole-text parse first
    if let Ok(value) = serde_json::from_str(trimmed) {
        return Some(value);
    }

    // Fall back to the first fenced code block
    let inner = fenced_block(trimmed)?;
    serde_json::from_str(inner.trim()).ok()
}

/// Parse a checker response into a [`Verdict`].
///
/// Confidence is clamped to [0, 1]. Returns `None` when no verdict-shaped
/// JSON can be recovered; callers fall back to [`Verdict::indeterminate`].
pub fn parse_verdict(text: &str) -> Option<Verdict> {
    let value = extract_json(text)?;
    serde_json::from_value::<Verdict>(value)
        .ok()
        .map(Verdict::normalized)
}

/// The content between the first pair of ``` fences, with an optional
/// `json` language tag stripped.
fn fenced_block(text: &str) -> Option<&str> {
    let start = text.find("```")?;
    let rest = &text[start + 3..];
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let end = rest.find("```")?;
    Some(&rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== extract_json Tests ====================

    #[test]
    fn test_extract_direct() {
        let value = extract_json(r#"{"isSycophantic": true, "confidence": 0.8}"#).unwrap();
        assert_eq!(value["isSycophantic"], true);
    }

    #[test]
    fn test_extract_fenced_tagged() {
        let text = r#"
Here is my analysis:
```json
{"isSycophantic": false, "confidence": 0.9}
```
"#;
        let value = extract_json(text).unwrap();
        assert_eq!(value["confidence"], 0.9);
    }

    #[test]
    fn test_extract_fenced_untagged() {
        let text = "```\n{\"score\": 3}\n```";
        let value = extract_json(text).unwrap();
        assert_eq!(value["score"], 3);
    }

    #[test]
    fn test_extract_fence_with_surrounding_prose() {
        let text = "Sure!\n```json\n[1, 2, 3]\n```\nLet me know if you need more.";
        let value = extract_json(text).unwrap();
        assert_eq!(value, serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_extract_total_on_garbage() {
        assert!(extract_json("no json here").is_none());
        assert!(extract_json("```json\nnot json either\n```").is_none());
        assert!(extract_json("```unclosed fence {").is_none());
        assert!(extract_json("").is_none());
    }

    // ==================== parse_verdict Tests ====================

    #[test]
    fn test_parse_verdict_direct() {
        let verdict = parse_verdict(
            r#"{"isSycophantic": true, "confidence": 0.95, "reason": "unearned praise", "feedback": "analyze instead"}"#,
        )
        .unwrap();
        assert!(verdict.is_sycophantic);
        assert_eq!(verdict.feedback, "analyze instead");
    }

    #[test]
    fn test_parse_verdict_from_fence() {
        let text = "```json\n{\"isSycophantic\": false, \"confidence\": 0.6}\n```";
        let verdict = parse_verdict(text).unwrap();
        assert!(!verdict.is_sycophantic);
    }

    #[test]
    fn test_parse_verdict_clamps_confidence() {
        let verdict =
            parse_verdict(r#"{"isSycophantic": true, "confidence": 3.0}"#).unwrap();
        assert_eq!(verdict.confidence, 1.0);
    }

    #[test]
    fn test_parse_verdict_rejects_wrong_shape() {
        assert!(parse_verdict(r#"{"score": 8}"#).is_none());
        assert!(parse_verdict("plain text answer").is_none());
    }
}
