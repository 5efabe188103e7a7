//! Role-based model configuration.
//!
//! [`ModelConfig`] groups the model selections for the two agent roles.
//! This is a static value object — once created, models don't change at runtime.

use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Role-based model configuration.
///
/// The two roles have different requirements:
///
/// - **Writer**: drafts candidate responses; benefits from a capable model
/// - **Checker**: judges candidates; can be the same model or a cheaper one,
///   since the judgment prompt is short and structured
///
/// # Example
///
/// ```
/// use candor_domain::{Model, ModelConfig};
///
/// let config = ModelConfig::default().with_checker(Model::Qwen3_32b);
/// assert_eq!(config.checker, Model::Qwen3_32b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model drafting candidate responses.
    pub writer: Model,
    /// Model judging candidates for sycophancy.
    pub checker: Model,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            writer: Model::GptOss120b,
            checker: Model::GptOss120b,
        }
    }
}

impl ModelConfig {
    // ==================== Builder Methods ====================

    pub fn with_writer(mut self, model: Model) -> Self {
        self.writer = model;
        self
    }

    pub fn with_checker(mut self, model: Model) -> Self {
        self.checker = model;
        self
    }
}
