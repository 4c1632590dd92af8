use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Token accounting reported by the API for a single completion.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    /// Tokens consumed by the request (persona instruction plus history).
    #[serde(default)]
    pub prompt_tokens: u32,

    /// Tokens generated for the reply.
    #[serde(default)]
    pub completion_tokens: u32,

    /// Total tokens for the round trip.
    #[serde(default)]
    pub total_tokens: u32,
}

impl Usage {
    /// Create a new `Usage` with the given token counts.
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens.saturating_add(completion_tokens),
        }
    }
}

impl Add for Usage {
    type Output = Usage;

    fn add(self, rhs: Usage) -> Usage {
        Usage {
            prompt_tokens: self.prompt_tokens.saturating_add(rhs.prompt_tokens),
            completion_tokens: self.completion_tokens.saturating_add(rhs.completion_tokens),
            total_tokens: self.total_tokens.saturating_add(rhs.total_tokens),
        }
    }
}
