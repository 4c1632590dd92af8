// Public modules
pub mod chat;
pub mod client;
pub mod credentials;
pub mod error;
pub mod persona;
pub mod render;
pub mod types;

mod observability;

// Re-exports
pub use client::{CompletionBackend, Groq};
pub use error::{Error, Result};
pub use observability::register_biometrics;
pub use render::{PlainTextRenderer, Renderer};
pub use types::*;
