//! Configuration types for the chat application.
//!
//! This module provides CLI argument parsing via `arrrg` and configuration
//! structures for controlling chat behavior.

use arrrg_derive::CommandLine;

use crate::persona;
use crate::types::{KnownModel, Model};

/// Default maximum tokens per response.
const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Default sampling temperature.
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default nucleus-sampling threshold.
const DEFAULT_TOP_P: f32 = 0.9;

/// Command-line arguments for the kelly-chat tool.
#[derive(CommandLine, Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// Model to use for chat.
    #[arrrg(optional, "Model to use (default: llama-3.3-70b-versatile)", "MODEL")]
    pub model: Option<String>,

    /// Replacement for the persona system prompt.
    #[arrrg(optional, "Override the persona system prompt", "PROMPT")]
    pub system: Option<String>,

    /// Maximum tokens per response.
    #[arrrg(optional, "Max tokens per response (default: 1024)", "TOKENS")]
    pub max_tokens: Option<u32>,

    /// Path to a YAML secrets file holding the API key.
    #[arrrg(optional, "Path to a YAML secrets file", "PATH")]
    pub secrets: Option<String>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,
}

/// Configuration for a chat session.
///
/// This struct holds the resolved configuration values after processing
/// command-line arguments with appropriate defaults. The sampling
/// parameters are fixed for the lifetime of the session.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// The model to use for generating responses.
    pub model: Model,

    /// The system instruction injected as the first message of every
    /// request. Defaults to Kelly's persona.
    pub system_prompt: String,

    /// Maximum tokens per response.
    pub max_tokens: u32,

    /// Sampling temperature.
    pub temperature: f32,

    /// Nucleus-sampling threshold.
    pub top_p: f32,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,
}

impl ChatConfig {
    /// Creates a new ChatConfig with default values.
    ///
    /// Defaults:
    /// - Model: llama-3.3-70b-versatile
    /// - System prompt: Kelly's persona
    /// - Max tokens: 1024
    /// - Temperature: 0.7, top-p: 0.9
    /// - Color: enabled
    pub fn new() -> Self {
        Self {
            model: Model::Known(KnownModel::Llama33_70bVersatile),
            system_prompt: persona::PERSONA.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            use_color: true,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Sets the system prompt.
    pub fn with_system_prompt(mut self, prompt: String) -> Self {
        self.system_prompt = prompt;
        self
    }

    /// Sets the maximum tokens per response.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the nucleus-sampling threshold.
    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = top_p;
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ChatArgs> for ChatConfig {
    fn from(args: ChatArgs) -> Self {
        let mut config = ChatConfig::new();
        if let Some(model) = args.model {
            config.model = Model::parse(&model);
        }
        if let Some(system) = args.system {
            config.system_prompt = system;
        }
        if let Some(max_tokens) = args.max_tokens {
            config.max_tokens = max_tokens;
        }
        config.use_color = !args.no_color;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ChatConfig::new();
        assert_eq!(config.model, Model::Known(KnownModel::Llama33_70bVersatile));
        assert_eq!(config.system_prompt, persona::PERSONA);
        assert_eq!(config.max_tokens, 1024);
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.top_p, 0.9);
        assert!(config.use_color);
    }

    #[test]
    fn config_from_args_defaults() {
        let args = ChatArgs::default();
        let config = ChatConfig::from(args);
        assert_eq!(config.model, Model::Known(KnownModel::Llama33_70bVersatile));
        assert_eq!(config.max_tokens, 1024);
        assert!(config.use_color);
        assert_eq!(config.system_prompt, persona::PERSONA);
    }

    #[test]
    fn config_from_args_custom() {
        let args = ChatArgs {
            model: Some("llama-3.1-8b-instant".to_string()),
            system: Some("You are helpful.".to_string()),
            max_tokens: Some(2048),
            secrets: None,
            no_color: true,
        };
        let config = ChatConfig::from(args);
        assert_eq!(config.model, Model::Known(KnownModel::Llama31_8bInstant));
        assert_eq!(config.system_prompt, "You are helpful.");
        assert_eq!(config.max_tokens, 2048);
        assert!(!config.use_color);
    }

    #[test]
    fn config_builder_pattern() {
        let config = ChatConfig::new()
            .with_model(Model::Known(KnownModel::Gemma2_9bIt))
            .with_system_prompt("Test prompt".to_string())
            .with_max_tokens(256)
            .with_temperature(0.3)
            .with_top_p(0.5)
            .without_color();

        assert_eq!(config.model, Model::Known(KnownModel::Gemma2_9bIt));
        assert_eq!(config.system_prompt, "Test prompt");
        assert_eq!(config.max_tokens, 256);
        assert_eq!(config.temperature, 0.3);
        assert_eq!(config.top_p, 0.5);
        assert!(!config.use_color);
    }
}
