//! Console output formatter for chat outcomes

use candor_domain::ChatOutcome;
use colored::Colorize;

/// Formats chat outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the outcome with attempt metadata
    pub fn format(outcome: &ChatOutcome) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", "=== Response ===".cyan().bold()));
        output.push_str(outcome.response.trim());
        output.push_str("\n\n");

        output.push_str(&format!(
            "{} {}\n",
            "Attempts:".cyan().bold(),
            outcome.attempts
        ));

        if outcome.is_fallback {
            output.push_str(&format!(
                "{}\n",
                "Fallback response (no candidate was accepted)".yellow().bold()
            ));
        } else if outcome.was_rejected {
            output.push_str(&format!(
                "{}\n",
                "Regenerated after rejection".yellow()
            ));
        }

        output
    }

    /// Format only the response text (concise output)
    pub fn format_text(outcome: &ChatOutcome) -> String {
        outcome.response.clone()
    }

    /// Format as JSON
    pub fn format_json(outcome: &ChatOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }
}
