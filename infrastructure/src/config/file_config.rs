//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.
//!
//! Example configuration:
//!
//! ```toml
//! [backend]
//! base_url = "https://api.cerebras.ai/v1"
//! api_key_env = "CEREBRAS_API_KEY"
//!
//! [models]
//! writer = "gpt-oss-120b"
//! checker = "qwen-3-32b"
//!
//! [behavior]
//! max_attempts = 5
//! transport_failure_threshold = 3
//! ```

use candor_application::{ExecutionParams, SamplingParams};
use candor_domain::{Model, ModelConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend endpoint settings
    pub backend: FileBackendConfig,
    /// Role-based model selection
    pub models: FileModelsConfig,
    /// Writer sampling settings
    pub writer: FileWriterConfig,
    /// Checker sampling settings
    pub checker: FileCheckerConfig,
    /// Loop behavior settings
    pub behavior: FileBehaviorConfig,
    /// Structured logging settings
    pub log: FileLogConfig,
}

impl FileConfig {
    /// Assemble application-level execution parameters.
    pub fn execution_params(&self) -> ExecutionParams {
        ExecutionParams::default()
            .with_max_attempts(self.behavior.max_attempts)
            .with_transport_failure_threshold(self.behavior.transport_failure_threshold)
            .with_writer_sampling(SamplingParams::new(
                self.writer.temperature,
                self.writer.max_tokens,
            ))
            .with_checker_sampling(SamplingParams::new(
                self.checker.temperature,
                self.checker.max_tokens,
            ))
    }

    /// Assemble the role-based model configuration.
    pub fn model_config(&self) -> ModelConfig {
        ModelConfig::default()
            .with_writer(self.models.parse_writer())
            .with_checker(self.models.parse_checker())
    }

    /// Resolve the backend API key from the configured environment variable.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.backend.api_key_env).ok()
    }
}

/// Backend endpoint configuration (`[backend]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Base URL of the OpenAI-compatible backend.
    pub base_url: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.cerebras.ai/v1".to_string(),
            api_key_env: "CEREBRAS_API_KEY".to_string(),
        }
    }
}

/// Role-based model selection (`[models]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    pub writer: String,
    pub checker: String,
}

impl Default for FileModelsConfig {
    fn default() -> Self {
        Self {
            writer: Model::default().to_string(),
            checker: Model::default().to_string(),
        }
    }
}

impl FileModelsConfig {
    pub fn parse_writer(&self) -> Model {
        self.writer.parse().unwrap_or_default()
    }

    pub fn parse_checker(&self) -> Model {
        self.checker.parse().unwrap_or_default()
    }
}

/// Writer sampling (`[writer]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWriterConfig {
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for FileWriterConfig {
    fn default() -> Self {
        let sampling = SamplingParams::writer_default();
        Self {
            temperature: sampling.temperature,
            max_tokens: sampling.max_tokens,
        }
    }
}

/// Checker sampling (`[checker]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCheckerConfig {
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for FileCheckerConfig {
    fn default() -> Self {
        let sampling = SamplingParams::checker_default();
        Self {
            temperature: sampling.temperature,
            max_tokens: sampling.max_tokens,
        }
    }
}

/// Loop behavior (`[behavior]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBehaviorConfig {
    /// Maximum writer/checker cycles per request.
    pub max_attempts: u32,
    /// Attempt count at which a transport error short-circuits to fallback.
    pub transport_failure_threshold: u32,
}

impl Default for FileBehaviorConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            transport_failure_threshold: 3,
        }
    }
}

/// Structured logging (`[log]` section)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Path for the JSONL attempt trail; disabled when unset.
    pub attempt_log: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.backend.base_url, "https://api.cerebras.ai/v1");
        assert_eq!(config.backend.api_key_env, "CEREBRAS_API_KEY");
        assert_eq!(config.behavior.max_attempts, 5);
        assert_eq!(config.behavior.transport_failure_threshold, 3);
        assert!(config.log.attempt_log.is_none());
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let toml_str = r#"
[models]
writer = "llama-3.3-70b"

[behavior]
max_attempts = 3
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.models.parse_writer(), Model::Llama33_70b);
        // Untouched sections keep defaults
        assert_eq!(config.models.parse_checker(), Model::GptOss120b);
        assert_eq!(config.behavior.max_attempts, 3);
        assert_eq!(config.behavior.transport_failure_threshold, 3);
    }

    #[test]
    fn test_execution_params_assembly() {
        let toml_str = r#"
[writer]
temperature = 0.9
max_tokens = 2048

[checker]
temperature = 0.0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let params = config.execution_params();
        assert_eq!(params.writer_sampling.temperature, 0.9);
        assert_eq!(params.writer_sampling.max_tokens, 2048);
        assert_eq!(params.checker_sampling.temperature, 0.0);
        assert_eq!(params.checker_sampling.max_tokens, 300);
        assert_eq!(params.max_attempts, 5);
    }

    #[test]
    fn test_model_config_assembly() {
        let toml_str = r#"
[models]
writer = "gpt-oss-120b"
checker = "qwen-3-32b"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let models = config.model_config();
        assert_eq!(models.writer, Model::GptOss120b);
        assert_eq!(models.checker, Model::Qwen3_32b);
    }
}
