use serde::{Deserialize, Serialize};

use crate::types::{ChatMessage, Model};

/// Parameters for a chat-completion request.
///
/// The message list is submitted to the API in exactly the order given;
/// the first entry is expected to be the system persona instruction, which
/// the session injects at call time and never stores.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionParams {
    /// The model that will complete the conversation.
    pub model: Model,

    /// The ordered conversation, persona instruction first.
    pub messages: Vec<ChatMessage>,

    /// The maximum number of tokens to generate.
    pub max_tokens: u32,

    /// Sampling temperature, if overridden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Nucleus-sampling threshold, if overridden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

impl ChatCompletionParams {
    /// Create new completion parameters with required fields only.
    pub fn new(max_tokens: u32, messages: Vec<ChatMessage>, model: Model) -> Self {
        Self {
            model,
            messages,
            max_tokens,
            temperature: None,
            top_p: None,
        }
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sets the nucleus-sampling threshold.
    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }
}
