//! Persisted chat state
//!
//! This module holds the two process-wide state containers: the chat store
//! (chatrooms, their messages, and the current-chatroom designation) and the
//! session store (the signed-in identity), plus the snapshot persistence
//! seam they share. Stores are constructed once at startup and passed by
//! reference to the command layer; they are never ambient globals.
//!
//! Every mutation persists synchronously by rewriting the store's full
//! snapshot. No store operation validates input or fails on unknown ids:
//! deletions and appends against missing chatrooms are silent no-ops. The
//! only error path is snapshot I/O.

use crate::error::Result;
use chrono::Utc;
use std::path::PathBuf;
use ulid::Ulid;

pub mod prefs;
pub mod session;
pub mod snapshot;
pub mod types;

pub use prefs::{PrefsStore, UiPrefs};
pub use session::SessionStore;
pub use types::{Chatroom, Identity, Message, MessageDraft, MessageRole};

use serde::{Deserialize, Serialize};

/// Persisted shape of the chat store
#[derive(Debug, Default, Serialize, Deserialize)]
struct ChatState {
    chatrooms: Vec<Chatroom>,
    current_chatroom_id: Option<String>,
}

/// Chatroom collection with current-chatroom tracking
///
/// Owns the mapping of chatroom ids to chatrooms (insertion-ordered for
/// display) and a weak current-chatroom reference: the designation is a
/// lookup-only id that may dangle, and a dangling value resolves to "no
/// current chatroom".
pub struct ChatStore {
    state: ChatState,
    path: PathBuf,
}

impl ChatStore {
    /// Open the chat store at the default data directory
    ///
    /// Honors the `CHATGENIUS_DATA_DIR` override the same way every other
    /// snapshot does.
    pub fn open() -> Result<Self> {
        let path = snapshot::data_dir()?.join("chatrooms.json");
        Self::open_at(path)
    }

    /// Open a chat store backed by the given snapshot path
    ///
    /// Primarily useful for tests where the default application data
    /// directory is not desirable (for example, using a temporary directory).
    ///
    /// # Examples
    ///
    /// ```
    /// use chatgenius::store::ChatStore;
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let store = ChatStore::open_at(dir.path().join("chatrooms.json")).unwrap();
    /// assert!(store.chatrooms().is_empty());
    /// ```
    pub fn open_at<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        let state = snapshot::load_snapshot(&path)?.unwrap_or_default();
        Ok(Self { state, path })
    }

    /// Create a chatroom and return its id
    ///
    /// Accepts any string title; rejecting empty titles is the command
    /// layer's job. Always succeeds (modulo snapshot I/O).
    pub fn create_chatroom(&mut self, title: impl Into<String>) -> Result<String> {
        let chatroom = Chatroom {
            id: Ulid::new().to_string(),
            title: title.into(),
            messages: Vec::new(),
            created_at: Utc::now(),
        };
        let id = chatroom.id.clone();
        self.state.chatrooms.push(chatroom);
        self.persist()?;

        tracing::debug!("Created chatroom {}", id);
        Ok(id)
    }

    /// Delete the chatroom with the given id
    ///
    /// A no-op (not an error) when the id is unknown. Clears the
    /// current-chatroom designation when it pointed at the removed room.
    pub fn delete_chatroom(&mut self, id: &str) -> Result<()> {
        let before = self.state.chatrooms.len();
        self.state.chatrooms.retain(|room| room.id != id);
        if self.state.chatrooms.len() == before {
            tracing::debug!("Delete of unknown chatroom {} ignored", id);
            return Ok(());
        }

        if self.state.current_chatroom_id.as_deref() == Some(id) {
            self.state.current_chatroom_id = None;
        }
        self.persist()
    }

    /// Append a message to the chatroom with the given id
    ///
    /// Assigns a unique message id and the current timestamp. When no such
    /// chatroom exists the draft is silently dropped: this is what makes the
    /// uncancelable simulated reply safe against a room deleted during its
    /// delay.
    pub fn add_message(&mut self, chatroom_id: &str, draft: MessageDraft) -> Result<()> {
        let Some(room) = self
            .state
            .chatrooms
            .iter_mut()
            .find(|room| room.id == chatroom_id)
        else {
            tracing::debug!("Dropping message for unknown chatroom {}", chatroom_id);
            return Ok(());
        };

        room.messages.push(Message {
            id: Ulid::new().to_string(),
            content: draft.content,
            role: draft.role,
            timestamp: Utc::now(),
            image: draft.image,
        });
        self.persist()
    }

    /// Set (or clear) the current-chatroom designation
    ///
    /// No existence validation is performed; a dangling id simply resolves
    /// to none on read.
    pub fn set_current_chatroom(&mut self, id: Option<String>) -> Result<()> {
        self.state.current_chatroom_id = id;
        self.persist()
    }

    /// Resolve the current-chatroom designation against the collection
    ///
    /// Returns `None` when unset or when the designation dangles (points at
    /// a deleted chatroom).
    pub fn current_chatroom(&self) -> Option<&Chatroom> {
        let id = self.state.current_chatroom_id.as_deref()?;
        self.get(id)
    }

    /// Look up a chatroom by id
    pub fn get(&self, id: &str) -> Option<&Chatroom> {
        self.state.chatrooms.iter().find(|room| room.id == id)
    }

    /// All chatrooms in insertion order
    pub fn chatrooms(&self) -> &[Chatroom] {
        &self.state.chatrooms
    }

    /// Rewrite the full snapshot
    fn persist(&self) -> Result<()> {
        snapshot::save_snapshot(&self.path, &self.state)
    }
}
