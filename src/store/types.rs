//! Core data types for the chat and session stores

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message typed by the signed-in user
    User,
    /// Simulated assistant reply
    Assistant,
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single chat message
///
/// Immutable once created; owned exclusively by its parent [`Chatroom`].
/// The id and timestamp are assigned by the store at append time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier (ULID)
    pub id: String,
    /// Text body (may be empty when an image is attached)
    pub content: String,
    /// Author of the message
    pub role: MessageRole,
    /// When the message was appended
    pub timestamp: DateTime<Utc>,
    /// Optional embedded image payload as a base64 data URI
    ///
    /// Size-bounded to 5MB by the command layer before it reaches the store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// What a caller hands to [`ChatStore::add_message`](crate::store::ChatStore::add_message)
///
/// The store fills in the id and timestamp.
#[derive(Debug, Clone)]
pub struct MessageDraft {
    /// Text body
    pub content: String,
    /// Author of the message
    pub role: MessageRole,
    /// Optional embedded image payload as a base64 data URI
    pub image: Option<String>,
}

impl MessageDraft {
    /// Creates a user-authored draft without an attachment
    ///
    /// # Examples
    ///
    /// ```
    /// use chatgenius::store::MessageDraft;
    ///
    /// let draft = MessageDraft::user("Hello!");
    /// assert_eq!(draft.content, "Hello!");
    /// ```
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role: MessageRole::User,
            image: None,
        }
    }

    /// Creates an assistant-authored draft
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role: MessageRole::Assistant,
            image: None,
        }
    }

    /// Creates a user-authored draft carrying an image payload
    pub fn user_with_image(content: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role: MessageRole::User,
            image: Some(image.into()),
        }
    }
}

/// A named, ordered thread of messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chatroom {
    /// Unique chatroom identifier (ULID)
    pub id: String,
    /// User-supplied display title
    pub title: String,
    /// Message sequence; insertion order is chronological order
    pub messages: Vec<Message>,
    /// When the chatroom was created
    pub created_at: DateTime<Utc>,
}

/// The signed-in identity held by the session store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique user identifier, generated at login time
    pub id: String,
    /// Phone number as entered (digits only; validated by the command layer)
    pub phone: String,
    /// Dial code, e.g. "+1"
    pub country_code: String,
}

impl Identity {
    /// Creates an identity with a freshly generated user id
    ///
    /// # Examples
    ///
    /// ```
    /// use chatgenius::store::Identity;
    ///
    /// let identity = Identity::new("5551234", "+1");
    /// assert!(identity.id.starts_with("user-"));
    /// ```
    pub fn new(phone: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            id: format!("user-{}", Ulid::new()),
            phone: phone.into(),
            country_code: country_code.into(),
        }
    }
}
