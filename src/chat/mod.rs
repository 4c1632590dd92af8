//! Chat application module for interactive conversations with Kelly.
//!
//! This module provides the REPL chat interface built on top of the kelly
//! client library. It supports:
//!
//! - A per-session, append-only conversation store
//! - One blocking completion call per user turn
//! - Slash commands for session control
//! - Configurable model and sampling parameters
//!
//! # Architecture
//!
//! The module is organized into several components:
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`session`]: Core chat session management and API interaction
//! - [`commands`]: Slash command parsing and handling

mod commands;
mod config;
mod session;

pub use crate::render::{PlainTextRenderer, Renderer};
pub use commands::{ChatCommand, help_text, parse_command};
pub use config::{ChatArgs, ChatConfig};
pub use session::{ChatSession, SessionStats};
