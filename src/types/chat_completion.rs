use serde::{Deserialize, Serialize};

use crate::types::{ChatMessage, Usage};

/// One candidate reply within a completion response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatChoice {
    /// Position of this choice within the response.
    #[serde(default)]
    pub index: u32,

    /// The generated message.
    pub message: ChatMessage,

    /// Why generation stopped, as reported by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// A non-streaming chat-completion response.
///
/// The adapter only ever consumes the top choice; the rest of the body is
/// carried for inspection and logging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletion {
    /// Server-assigned identifier for the completion.
    #[serde(default)]
    pub id: String,

    /// Unix timestamp of when the completion was created.
    #[serde(default)]
    pub created: i64,

    /// The model that produced the completion.
    #[serde(default)]
    pub model: String,

    /// Candidate replies; the adapter uses the first.
    pub choices: Vec<ChatChoice>,

    /// Token accounting, if the server reported it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

impl ChatCompletion {
    /// Consume the completion and return the top choice as an
    /// assistant-role message, or `None` if the response carried no choices.
    pub fn into_reply(mut self) -> Option<ChatMessage> {
        if self.choices.is_empty() {
            return None;
        }
        let choice = self.choices.swap_remove(0);
        Some(ChatMessage::assistant(choice.message.content))
    }
}
