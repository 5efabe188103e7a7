//! Progress reporting for the chat loop

use candor_application::ChatProgressNotifier;
use candor_domain::{ChatOutcome, Verdict};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports attempt progress with a progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatProgressNotifier for ProgressReporter {
    fn on_attempt_start(&self, attempt: u32, max_attempts: u32) {
        let mut guard = self.bar.lock().unwrap();
        let bar = guard.get_or_insert_with(|| {
            let bar = ProgressBar::new(max_attempts as u64);
            bar.set_style(Self::bar_style());
            bar.set_prefix("Generating");
            bar
        });
        bar.set_position(attempt as u64 - 1);
        bar.set_message(format!("attempt {}", attempt));
    }

    fn on_candidate_evaluated(&self, _attempt: u32, verdict: &Verdict) {
        if let Some(bar) = self.bar.lock().unwrap().as_ref() {
            let status = if verdict.is_sycophantic {
                format!("{}", "rejected".red())
            } else {
                format!("{}", "approved".green())
            };
            bar.set_message(status);
            bar.inc(1);
        }
    }

    fn on_attempt_failed(&self, _attempt: u32, error: &str) {
        if let Some(bar) = self.bar.lock().unwrap().as_ref() {
            bar.set_message(format!("{} {}", "error:".red(), error));
            bar.inc(1);
        }
    }

    fn on_outcome(&self, outcome: &ChatOutcome) {
        if let Some(bar) = self.bar.lock().unwrap().take() {
            let status = if outcome.is_fallback {
                format!("{}", "fallback".yellow())
            } else {
                format!("{}", "done".green())
            };
            bar.finish_with_message(status);
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ChatProgressNotifier for SimpleProgress {
    fn on_attempt_start(&self, attempt: u32, max_attempts: u32) {
        println!("Attempt {}/{}...", attempt, max_attempts);
    }

    fn on_candidate_evaluated(&self, attempt: u32, verdict: &Verdict) {
        println!(
            "Attempt {}: {} (confidence {:.2})",
            attempt,
            if verdict.is_sycophantic { "rejected" } else { "approved" },
            verdict.confidence
        );
    }

    fn on_attempt_failed(&self, attempt: u32, error: &str) {
        println!("Attempt {} failed: {}", attempt, error);
    }

    fn on_outcome(&self, outcome: &ChatOutcome) {
        if outcome.is_fallback {
            println!("Resolved to fallback after {} attempts", outcome.attempts);
        }
    }
}
