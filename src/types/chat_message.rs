use serde::{Deserialize, Serialize};

/// Role type for a chat message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// System role (the persona instruction).
    System,

    /// User role.
    User,

    /// Assistant role.
    Assistant,
}

/// A single role/content pair in a conversation.
///
/// Messages are immutable once created; a session only ever appends them,
/// and the order of a sequence is the conversation order submitted to the
/// API verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    /// The role of the message.
    pub role: ChatRole,

    /// The content of the message.
    pub content: String,
}

impl ChatMessage {
    /// Create a new `ChatMessage` with the given role and content.
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a new system `ChatMessage`.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatRole::System, content)
    }

    /// Create a new user `ChatMessage`.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    /// Create a new assistant `ChatMessage`.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }
}

impl From<&str> for ChatMessage {
    fn from(content: &str) -> Self {
        Self::user(content)
    }
}

impl From<String> for ChatMessage {
    fn from(content: String) -> Self {
        Self::user(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn roles_serialize_lowercase() {
        assert_eq!(to_value(ChatRole::System).unwrap(), json!("system"));
        assert_eq!(to_value(ChatRole::User).unwrap(), json!("user"));
        assert_eq!(to_value(ChatRole::Assistant).unwrap(), json!("assistant"));
    }

    #[test]
    fn message_wire_shape() {
        let message = ChatMessage::user("Hello, Kelly!");
        assert_eq!(
            to_value(&message).unwrap(),
            json!({
                "role": "user",
                "content": "Hello, Kelly!"
            })
        );
    }

    #[test]
    fn message_from_str_is_user() {
        let message: ChatMessage = "Hello from string".into();
        assert_eq!(message.role, ChatRole::User);
    }

    #[test]
    fn ergonomic_constructors() {
        assert_eq!(ChatMessage::system("s").role, ChatRole::System);
        assert_eq!(ChatMessage::user("u").role, ChatRole::User);
        assert_eq!(ChatMessage::assistant("a").role, ChatRole::Assistant);
    }

    #[test]
    fn message_deserializes() {
        let message: ChatMessage =
            serde_json::from_str(r#"{"role":"assistant","content":"verse"}"#).unwrap();
        assert_eq!(message, ChatMessage::assistant("verse"));
    }
}
