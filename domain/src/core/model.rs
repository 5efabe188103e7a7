//! Model value object representing a backend LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available backend models (Value Object)
///
/// This is a domain concept representing the models the chat-completions
/// backend can serve. Any identifier the backend accepts can be carried
/// through [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    GptOss120b,
    Llama33_70b,
    Llama4Scout,
    Qwen3_32b,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::GptOss120b => "gpt-oss-120b",
            Model::Llama33_70b => "llama-3.3-70b",
            Model::Llama4Scout => "llama-4-scout-17b-16e-instruct",
            Model::Qwen3_32b => "qwen-3-32b",
            Model::Custom(s) => s,
        }
    }
}

impl Default for Model {
    /// Returns the default model (gpt-oss-120b)
    fn default() -> Self {
        Model::GptOss120b
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gpt-oss-120b" => Model::GptOss120b,
            "llama-3.3-70b" => Model::Llama33_70b,
            "llama-4-scout-17b-16e-instruct" => Model::Llama4Scout,
            "qwen-3-32b" => Model::Qwen3_32b,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}
