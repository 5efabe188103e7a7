//! Generation request value object

use crate::conversation::entities::Turn;
use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// A single generation request to the backend (Value Object)
///
/// Constructed fresh for every attempt — requests are never reused, so the
/// transcript inside one always reflects exactly what one attempt sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Ordered transcript of role-tagged turns.
    pub turns: Vec<Turn>,
    /// Backend model identifier.
    pub model: Model,
    /// Sampling temperature.
    pub temperature: f64,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
}

impl GenerationRequest {
    pub fn new(turns: Vec<Turn>, model: Model) -> Self {
        Self {
            turns,
            model,
            temperature: 0.7,
            max_tokens: 1024,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}
