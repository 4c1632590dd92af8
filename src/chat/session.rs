//! Core chat session management.
//!
//! This module provides the `ChatSession` struct which owns the ordered,
//! append-only conversation store and mediates completion calls.

use crate::chat::config::ChatConfig;
use crate::client::{CompletionBackend, Groq};
use crate::error::{Error, Result};
use crate::observability;
use crate::render::Renderer;
use crate::types::{ChatCompletionParams, ChatMessage, Model, Usage};

/// A chat session that manages conversation state and API interactions.
///
/// The session owns the visible message sequence. The persona instruction
/// is never stored here; it is prepended transiently when each request is
/// composed. On any failed turn the sequence is restored to its prior
/// state, so the user can retry by resubmitting.
pub struct ChatSession<B: CompletionBackend> {
    backend: B,
    config: ChatConfig,
    messages: Vec<ChatMessage>,
    usage_totals: Usage,
    last_turn_usage: Option<Usage>,
    request_count: u64,
}

/// Aggregated stats for a chat session.
#[derive(Debug, Clone)]
pub struct SessionStats {
    /// The model used for the session.
    pub model: Model,
    /// The number of messages in the conversation.
    pub message_count: usize,
    /// The maximum tokens per response.
    pub max_tokens: u32,
    /// The sampling temperature.
    pub temperature: f32,
    /// The nucleus-sampling threshold.
    pub top_p: f32,
    /// Total prompt tokens across all requests.
    pub total_prompt_tokens: u64,
    /// Total completion tokens across all requests.
    pub total_completion_tokens: u64,
    /// Total number of API requests made.
    pub total_requests: u64,
    /// Prompt tokens for the last turn, if reported.
    pub last_turn_prompt_tokens: Option<u64>,
    /// Completion tokens for the last turn, if reported.
    pub last_turn_completion_tokens: Option<u64>,
}

impl ChatSession<Groq> {
    /// Creates a new chat session with the given client and configuration.
    pub fn new(client: Groq, config: ChatConfig) -> Self {
        Self::with_backend(client, config)
    }
}

impl<B: CompletionBackend> ChatSession<B> {
    /// Creates a new chat session with a custom completion backend.
    pub fn with_backend(backend: B, config: ChatConfig) -> Self {
        Self {
            backend,
            config,
            messages: Vec::new(),
            usage_totals: Usage::default(),
            last_turn_usage: None,
            request_count: 0,
        }
    }

    /// Sends a user message and renders the reply.
    ///
    /// This method:
    /// 1. Appends the user message to history
    /// 2. Composes the request as persona instruction + full history
    /// 3. Makes one blocking completion call
    /// 4. Appends the assistant reply to history
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the response carries
    /// no choices. The message history is left exactly as it was before
    /// the turn, ready for retry or inspection.
    pub async fn send(&mut self, user_input: &str, renderer: &mut dyn Renderer) -> Result<()> {
        observability::SESSION_TURNS.click();
        let previous_len = self.messages.len();

        self.messages.push(ChatMessage::user(user_input));
        let params = self.build_params();

        renderer.print_busy();
        match self.backend.complete(params).await {
            Ok(completion) => {
                let usage = completion.usage;
                let Some(reply) = completion.into_reply() else {
                    observability::SESSION_TURN_ERRORS.click();
                    self.messages.truncate(previous_len);
                    return Err(Error::unknown("completion response carried no choices"));
                };
                renderer.print_reply(&reply.content);
                self.messages.push(reply);
                self.record_usage(usage);
                Ok(())
            }
            Err(err) => {
                observability::SESSION_TURN_ERRORS.click();
                self.messages.truncate(previous_len);
                Err(err)
            }
        }
    }

    /// Composes the outbound request: the persona instruction first, then
    /// the visible history verbatim.
    fn build_params(&self) -> ChatCompletionParams {
        let mut request = Vec::with_capacity(self.messages.len() + 1);
        request.push(ChatMessage::system(self.config.system_prompt.clone()));
        request.extend(self.messages.iter().cloned());
        ChatCompletionParams::new(self.config.max_tokens, request, self.config.model.clone())
            .with_temperature(self.config.temperature)
            .with_top_p(self.config.top_p)
    }

    /// Clears the conversation history.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Returns the ordered message sequence for rendering and inspection.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Returns the number of messages in the conversation.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Returns the current model.
    pub fn model(&self) -> &Model {
        &self.config.model
    }

    /// Returns the system instruction injected into every request.
    pub fn system_prompt(&self) -> &str {
        &self.config.system_prompt
    }

    /// Returns the current session statistics snapshot.
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            model: self.config.model.clone(),
            message_count: self.message_count(),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            top_p: self.config.top_p,
            total_prompt_tokens: u64::from(self.usage_totals.prompt_tokens),
            total_completion_tokens: u64::from(self.usage_totals.completion_tokens),
            total_requests: self.request_count,
            last_turn_prompt_tokens: self
                .last_turn_usage
                .map(|usage| u64::from(usage.prompt_tokens)),
            last_turn_completion_tokens: self
                .last_turn_usage
                .map(|usage| u64::from(usage.completion_tokens)),
        }
    }

    fn record_usage(&mut self, usage: Option<Usage>) {
        self.request_count = self.request_count.saturating_add(1);
        if let Some(usage) = usage {
            self.last_turn_usage = Some(usage);
            self.usage_totals = self.usage_totals + usage;
        }
    }
}
