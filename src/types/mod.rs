// Public modules
pub mod chat_completion;
pub mod chat_completion_params;
pub mod chat_message;
pub mod model;
pub mod usage;

// Re-exports
pub use chat_completion::{ChatChoice, ChatCompletion};
pub use chat_completion_params::ChatCompletionParams;
pub use chat_message::{ChatMessage, ChatRole};
pub use model::{KnownModel, Model};
pub use usage::Usage;
