//! Domain layer for candor
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Writer / Checker
//!
//! Candor generates chat responses through a dual-agent loop:
//!
//! - **Writer**: drafts a candidate response under an anti-sycophancy policy
//! - **Checker**: judges the candidate and returns a structured [`Verdict`]
//!
//! Rejected candidates are regenerated with the checker's feedback until a
//! candidate is accepted or the attempt budget runs out.
//!
//! ## Outcome
//!
//! Every run resolves to a [`ChatOutcome`] — an accepted candidate, or one of
//! two fixed fallback messages. The loop never surfaces a raw error.

pub mod conversation;
pub mod core;
pub mod prompt;
pub mod review;
pub mod util;

// Re-export commonly used types
pub use conversation::{
    entities::{Role, Turn},
    outcome::{ChatOutcome, QUALITY_FALLBACK_TEXT, TRANSPORT_FALLBACK_TEXT},
    request::GenerationRequest,
};
pub use self::core::{model::Model, model_config::ModelConfig};
pub use prompt::{CheckerPrompt, WriterPrompt};
pub use review::{
    parsing::{extract_json, parse_verdict},
    verdict::Verdict,
};
