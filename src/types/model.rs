use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents a Groq-hosted model identifier.
///
/// This can be a predefined model version or a custom string value
/// for models that may be added in the future.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Model {
    /// Known model versions
    Known(KnownModel),

    /// Custom model identifier (for future models or private deployments)
    Custom(String),
}

/// Known Groq-hosted model versions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnownModel {
    /// Llama 3.3 70B (versatile)
    #[serde(rename = "llama-3.3-70b-versatile")]
    Llama33_70bVersatile,

    /// Llama 3.1 8B (instant)
    #[serde(rename = "llama-3.1-8b-instant")]
    Llama31_8bInstant,

    /// Gemma 2 9B (instruction tuned)
    #[serde(rename = "gemma2-9b-it")]
    Gemma2_9bIt,

    /// Mixtral 8x7B (32k context)
    #[serde(rename = "mixtral-8x7b-32768")]
    Mixtral8x7b32768,
}

impl Model {
    /// Parse a model identifier, falling back to `Custom` for names that
    /// are not known model versions.
    pub fn parse(identifier: &str) -> Self {
        match identifier {
            "llama-3.3-70b-versatile" => Model::Known(KnownModel::Llama33_70bVersatile),
            "llama-3.1-8b-instant" => Model::Known(KnownModel::Llama31_8bInstant),
            "gemma2-9b-it" => Model::Known(KnownModel::Gemma2_9bIt),
            "mixtral-8x7b-32768" => Model::Known(KnownModel::Mixtral8x7b32768),
            custom => Model::Custom(custom.to_string()),
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::Known(known_model) => write!(f, "{}", known_model),
            Model::Custom(custom) => write!(f, "{}", custom),
        }
    }
}

impl fmt::Display for KnownModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnownModel::Llama33_70bVersatile => write!(f, "llama-3.3-70b-versatile"),
            KnownModel::Llama31_8bInstant => write!(f, "llama-3.1-8b-instant"),
            KnownModel::Gemma2_9bIt => write!(f, "gemma2-9b-it"),
            KnownModel::Mixtral8x7b32768 => write!(f, "mixtral-8x7b-32768"),
        }
    }
}

impl From<KnownModel> for Model {
    fn from(model: KnownModel) -> Self {
        Model::Known(model)
    }
}

impl From<&str> for Model {
    fn from(model: &str) -> Self {
        Model::parse(model)
    }
}

impl From<String> for Model {
    fn from(model: String) -> Self {
        Model::parse(&model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_model_serialization() {
        let model = Model::Known(KnownModel::Llama33_70bVersatile);
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, r#""llama-3.3-70b-versatile""#);

        let model = Model::Known(KnownModel::Llama31_8bInstant);
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, r#""llama-3.1-8b-instant""#);
    }

    #[test]
    fn custom_model_serialization() {
        let model = Model::Custom("llama-experimental".to_string());
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, r#""llama-experimental""#);
    }

    #[test]
    fn model_deserialization() {
        let json = r#""llama-3.3-70b-versatile""#;
        let model: Model = serde_json::from_str(json).unwrap();
        assert_eq!(model, Model::Known(KnownModel::Llama33_70bVersatile));

        let json = r#""llama-experimental""#;
        let model: Model = serde_json::from_str(json).unwrap();
        assert_eq!(model, Model::Custom("llama-experimental".to_string()));
    }

    #[test]
    fn parse_known_and_custom() {
        assert_eq!(
            Model::parse("gemma2-9b-it"),
            Model::Known(KnownModel::Gemma2_9bIt)
        );
        assert_eq!(
            Model::from("my-private-model"),
            Model::Custom("my-private-model".to_string())
        );
    }

    #[test]
    fn display() {
        let model = Model::Known(KnownModel::Mixtral8x7b32768);
        assert_eq!(model.to_string(), "mixtral-8x7b-32768");

        let model = Model::Custom("llama-experimental".to_string());
        assert_eq!(model.to_string(), "llama-experimental");
    }
}
